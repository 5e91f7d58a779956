pub use codepoint::Codepoint;
use composition::ComposerState;
use data::DecompositionValue;
use data::Mode;
use hangul::decompose_syllable;
use hangul::is_hangul_syllable;
use rebuf::ReorderBuffer;

mod codepoint;
mod composition;
mod data;
mod hangul;
mod macros;
mod rebuf;

/// нормализатор NF(K)D
pub struct DecomposingNormalizer
{
    /// вид декомпозиции - каноническая или совместимая
    mode: Mode,
}

impl DecomposingNormalizer
{
    /// NFD-нормализатор
    pub fn nfd() -> Self
    {
        Self {
            mode: Mode::Canonical,
        }
    }

    /// NFKD-нормализатор
    pub fn nfkd() -> Self
    {
        Self {
            mode: Mode::Compatible,
        }
    }

    /// нормализация строки
    /// исходная строка должна являться well-formed UTF-8 строкой
    #[inline(never)]
    pub fn normalize(&self, input: &str) -> String
    {
        let mut result = String::with_capacity(input.len());
        let mut buffer = ReorderBuffer::Empty;

        for char in input.chars() {
            let code = u32::from(char);

            // у слога хангыль декомпозиция вычисляется алгоритмически

            if is_hangul_syllable(code) {
                buffer.flush(&mut result);
                decompose_syllable(&mut result, code);

                continue;
            }

            // стартеры пишем в результат, нестартеры - в буфер; встретив
            // стартер после нестартеров - записываем буфер, сохраняя
            // сортировку по CCC

            match data::decompose(self.mode, code) {
                DecompositionValue::None => {
                    buffer.flush(&mut result);
                    write!(result, code);
                }
                DecompositionValue::Nonstarter(codepoint) => buffer.insert(codepoint),
                DecompositionValue::Expansion(expansion) => {
                    for codepoint in expansion.codepoints() {
                        match codepoint.is_starter() {
                            true => {
                                buffer.flush(&mut result);
                                result.push(char::from(*codepoint));
                            }
                            false => buffer.insert(*codepoint),
                        }
                    }
                }
            }
        }

        buffer.flush(&mut result);

        result
    }
}

/// нормализатор NF(K)C
pub struct ComposingNormalizer
{
    /// вид декомпозиции - каноническая или совместимая
    mode: Mode,
}

impl ComposingNormalizer
{
    /// NFC-нормализатор
    pub fn nfc() -> Self
    {
        Self {
            mode: Mode::Canonical,
        }
    }

    /// NFKC-нормализатор
    pub fn nfkc() -> Self
    {
        Self {
            mode: Mode::Compatible,
        }
    }

    /// нормализация строки
    /// исходная строка должна являться well-formed UTF-8 строкой
    #[inline(never)]
    pub fn normalize(&self, input: &str) -> String
    {
        let mut result = String::with_capacity(input.len());
        let mut state = ComposerState::new();
        let mut pending: Vec<u32> = Vec::with_capacity(data::MAX_DECOMPOSITION_LEN);

        for char in input.chars() {
            state = state.advance(self.mode, u32::from(char), &mut pending, &mut result);

            // кодпоинты развёрнутых декомпозиций, слева направо

            while let Some(code) = pending.pop() {
                state = state.advance(self.mode, code, &mut pending, &mut result);
            }
        }

        state.flush(&mut result);

        result
    }
}
