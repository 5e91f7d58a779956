use crate::codepoint::Codepoint;
use crate::data;
use crate::data::DecompositionValue;
use crate::data::Mode;
use crate::hangul::*;
use crate::rebuf::ReorderBuffer;
use crate::write;

/// состояние композиции: что накоплено с момента последней записи в результат
pub enum ComposerState
{
    /// стартер ещё не встречен
    NoStarter(ReorderBuffer),
    /// стартер и идущие за ним нестартеры
    Starter(u32, ReorderBuffer),
    /// чамо или слог хангыль
    Jamo(JamoBuffer),
}

impl ComposerState
{
    pub fn new() -> Self
    {
        Self::NoStarter(ReorderBuffer::Empty)
    }

    /// обработать очередной кодпоинт. декомпозиции разворачиваются в стек
    /// pending и обрабатываются по кодпоинту за проход
    pub fn advance(self, mode: Mode, code: u32, pending: &mut Vec<u32>, result: &mut String) -> Self
    {
        // слог хангыль: слог LV может быть скомбинирован с идущей следом
        // завершающей согласной, слог LVT - завершён
        if is_hangul_syllable(code) {
            self.flush(result);

            return match is_hangul_lv(code) {
                true => Self::Jamo(JamoBuffer::LV(code)),
                false => {
                    write!(result, code);
                    Self::Jamo(JamoBuffer::Empty)
                }
            };
        }

        // комбинируемая чамо хангыль
        if is_composable_jamo(code) {
            let jamo = match self {
                Self::Jamo(jamo) => jamo,
                state => {
                    state.flush(result);
                    JamoBuffer::Empty
                }
            };

            return Self::Jamo(jamo.advance(code, result));
        }

        match data::decompose(mode, code) {
            // нестартер занимает место в буфере согласно CCC
            DecompositionValue::Nonstarter(codepoint) => match self {
                Self::Jamo(jamo) => {
                    jamo.flush(result);
                    Self::NoStarter(ReorderBuffer::One(codepoint))
                }
                Self::NoStarter(mut buffer) => {
                    buffer.insert(codepoint);
                    Self::NoStarter(buffer)
                }
                Self::Starter(starter, mut buffer) => {
                    buffer.insert(codepoint);
                    Self::Starter(starter, buffer)
                }
            },
            // стартер без декомпозиции
            DecompositionValue::None => match self {
                // пара стартеров также может быть скомбинирована, если между
                // ними не встретилось нестартеров
                Self::Starter(starter, ReorderBuffer::Empty) => match data::combine(starter, code) {
                    Some(combined) => Self::Starter(combined, ReorderBuffer::Empty),
                    None => {
                        write!(result, starter);
                        Self::Starter(code, ReorderBuffer::Empty)
                    }
                },
                state => {
                    state.flush(result);
                    Self::Starter(code, ReorderBuffer::Empty)
                }
            },
            // раскладываем декомпозицию в стек и обрабатываем покодпоинтно
            DecompositionValue::Expansion(expansion) => {
                for codepoint in expansion.codepoints().iter().rev() {
                    pending.push(codepoint.code());
                }

                self
            }
        }
    }

    /// скомбинировать и записать накопленное состояние в результат
    pub fn flush(self, result: &mut String)
    {
        match self {
            Self::NoStarter(mut buffer) => buffer.flush(result),
            Self::Starter(starter, buffer) => combine_and_write(starter, buffer, result),
            Self::Jamo(jamo) => jamo.flush(result),
        }
    }
}

/// скомбинировать стартер с идущими за ним нестартерами и записать результат.
/// нестартер может быть скомбинирован со стартером, только если он не заблокирован:
/// между ним и стартером нет нескомбинированного нестартера с таким же CCC
pub fn combine_and_write(starter: u32, buffer: ReorderBuffer, result: &mut String)
{
    match buffer {
        ReorderBuffer::Empty => write!(result, starter),
        ReorderBuffer::One(codepoint) => match data::combine(starter, codepoint.code()) {
            Some(combined) => write!(result, combined),
            None => write!(result, starter, codepoint.code()),
        },
        ReorderBuffer::Many(first, second, rest) => {
            let mut starter = starter;
            let mut tail: Vec<Codepoint> = Vec::with_capacity(rest.len() + 2);
            let mut recent_skipped_ccc = 0;

            for codepoint in [first, second].into_iter().chain(rest) {
                // нестартер заблокирован предыдущим нескомбинированным
                // нестартером с таким же CCC
                if codepoint.ccc() == recent_skipped_ccc {
                    tail.push(codepoint);
                    continue;
                }

                match data::combine(starter, codepoint.code()) {
                    Some(combined) => starter = combined,
                    None => {
                        recent_skipped_ccc = codepoint.ccc();
                        tail.push(codepoint);
                    }
                }
            }

            write!(result, starter);

            for codepoint in tail {
                write!(result, codepoint.code());
            }
        }
    }
}

#[test]
fn starter_combines_over_consumed_nonstarter()
{
    // D + подстрочная точка (CCC 220) + надстрочная точка (CCC 230):
    // стартер комбинируется с подстрочной точкой, надстрочная остаётся

    let mut buffer = ReorderBuffer::Empty;
    buffer.insert(Codepoint::new(0x0323, 220));
    buffer.insert(Codepoint::new(0x0307, 230));
    buffer.insert(Codepoint::new(0x0307, 230));

    let mut result = String::new();
    combine_and_write(0x0044, buffer, &mut result);

    assert_eq!(result, "\u{1E0C}\u{0307}\u{0307}");
}

#[test]
fn blocked_nonstarter_is_not_combined()
{
    // q не комбинируется с подстрочной точкой, а идущая следом точка
    // с тем же CCC заблокирована; с акутом комбинирования тоже нет

    let mut buffer = ReorderBuffer::Empty;
    buffer.insert(Codepoint::new(0x0323, 220));
    buffer.insert(Codepoint::new(0x0323, 220));
    buffer.insert(Codepoint::new(0x0301, 230));

    let mut result = String::new();
    combine_and_write(0x0071, buffer, &mut result);

    assert_eq!(result, "q\u{0323}\u{0323}\u{0301}");
}
