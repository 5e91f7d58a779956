use unicode_normalization::char::canonical_combining_class;
use unicode_normalization::char::compose;
use unicode_normalization::char::decompose_canonical;
use unicode_normalization::char::decompose_compatible;

use crate::codepoint::Codepoint;

/// максимальная длина декомпозиции кодпоинта; самая длинная декомпозиция
/// в UCD (U+FDFA в NFKD) - 18 кодпоинтов, берём с запасом
pub const MAX_DECOMPOSITION_LEN: usize = 32;

/// вид декомпозиции
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode
{
    /// каноническая (NFD / NFC)
    Canonical,
    /// совместимая (NFKD / NFKC)
    Compatible,
}

/// значение декомпозиции кодпоинта
pub enum DecompositionValue
{
    /// стартер без декомпозиции
    None,
    /// нестартер без декомпозиции (например, диакритический знак)
    Nonstarter(Codepoint),
    /// декомпозиция на 1..=MAX_DECOMPOSITION_LEN кодпоинтов
    Expansion(Expansion),
}

/// развёрнутая (полная) декомпозиция кодпоинта
#[derive(Clone, Copy)]
pub struct Expansion
{
    codepoints: [Codepoint; MAX_DECOMPOSITION_LEN],
    len: usize,
}

impl Expansion
{
    fn new() -> Self
    {
        Self {
            codepoints: [Codepoint::new(0, 0); MAX_DECOMPOSITION_LEN],
            len: 0,
        }
    }

    fn push(&mut self, code: u32)
    {
        self.codepoints[self.len] = Codepoint::new(code, ccc(code));
        self.len += 1;
    }

    #[inline(always)]
    pub fn codepoints(&self) -> &[Codepoint]
    {
        &self.codepoints[.. self.len]
    }
}

/// класс канонического комбинирования кодпоинта, 0 - стартер
#[inline(always)]
pub fn ccc(code: u32) -> u8
{
    canonical_combining_class(char_for(code))
}

/// полная декомпозиция кодпоинта по таблицам UCD.
/// декомпозиция рекурсивна: кодпоинты полученной последовательности
/// собственных декомпозиций уже не имеют
pub fn decompose(mode: Mode, code: u32) -> DecompositionValue
{
    let mut expansion = Expansion::new();

    match mode {
        Mode::Canonical => decompose_canonical(char_for(code), |char| expansion.push(u32::from(char))),
        Mode::Compatible => decompose_compatible(char_for(code), |char| expansion.push(u32::from(char))),
    }

    let first = expansion.codepoints[0];

    match expansion.len == 1 && first.code() == code {
        true => match first.is_starter() {
            true => DecompositionValue::None,
            false => DecompositionValue::Nonstarter(first),
        },
        false => DecompositionValue::Expansion(expansion),
    }
}

/// каноническая композиция пары кодпоинтов; пары из таблицы исключений
/// композиции не комбинируются
#[inline(always)]
pub fn combine(first: u32, second: u32) -> Option<u32>
{
    compose(char_for(first), char_for(second)).map(u32::from)
}

/// все коды, попадающие сюда, получены из валидных скалярных значений:
/// исходной строки, таблиц UCD или арифметики слогов хангыль
#[inline(always)]
fn char_for(code: u32) -> char
{
    unsafe { char::from_u32_unchecked(code) }
}
