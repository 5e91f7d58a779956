use core::mem::replace;

use crate::codepoint::Codepoint;

/// буфер нестартеров, накопленных с момента последнего стартера.
/// содержимое всегда отсортировано по CCC, нестартеры с одинаковым CCC
/// сохраняют порядок исходной строки. подавляющее большинство цепочек
/// нестартеров - 1-2 кодпоинта, они хранятся без аллокаций
pub enum ReorderBuffer
{
    /// пустой
    Empty,
    /// один нестартер
    One(Codepoint),
    /// два нестартера и хвост
    Many(Codepoint, Codepoint, Vec<Codepoint>),
}

impl ReorderBuffer
{
    /// поставить нестартер в буфер согласно его CCC: после всех нестартеров
    /// с меньшим или таким же CCC, перед нестартерами с большим CCC
    pub fn insert(&mut self, codepoint: Codepoint)
    {
        debug_assert!(codepoint.is_nonstarter());

        *self = match replace(self, Self::Empty) {
            Self::Empty => Self::One(codepoint),
            Self::One(first) => match codepoint.ccc() < first.ccc() {
                true => Self::Many(codepoint, first, Vec::new()),
                false => Self::Many(first, codepoint, Vec::new()),
            },
            Self::Many(first, second, mut rest) => {
                if codepoint.ccc() < first.ccc() {
                    rest.insert(0, second);
                    Self::Many(codepoint, first, rest)
                } else if codepoint.ccc() < second.ccc() {
                    rest.insert(0, second);
                    Self::Many(first, codepoint, rest)
                } else {
                    let position = rest
                        .iter()
                        .position(|entry| codepoint.ccc() < entry.ccc())
                        .unwrap_or(rest.len());

                    rest.insert(position, codepoint);
                    Self::Many(first, second, rest)
                }
            }
        };
    }

    /// записать содержимое буфера в результат и освободить буфер
    pub fn flush(&mut self, result: &mut String)
    {
        match replace(self, Self::Empty) {
            Self::Empty => (),
            Self::One(codepoint) => result.push(char::from(codepoint)),
            Self::Many(first, second, rest) => {
                result.push(char::from(first));
                result.push(char::from(second));

                for codepoint in rest {
                    result.push(char::from(codepoint));
                }
            }
        }
    }
}

#[test]
fn insert_keeps_ccc_order()
{
    // комбинируемая гравис (CCC 230), подстрочная точка (CCC 220), акут (CCC 230)

    let mut buffer = ReorderBuffer::Empty;

    buffer.insert(Codepoint::new(0x0300, 230));
    buffer.insert(Codepoint::new(0x0323, 220));
    buffer.insert(Codepoint::new(0x0301, 230));

    let mut result = String::new();
    buffer.flush(&mut result);

    // нестартер с меньшим CCC уходит в начало, одинаковые CCC сохраняют порядок
    assert_eq!(result, "\u{0323}\u{0300}\u{0301}");
    assert!(matches!(buffer, ReorderBuffer::Empty));
}
