use crate::write;

// слоги хангыль не хранятся в таблицах декомпозиции / композиции:
// и декомпозиция слога на чамо, и комбинирование чамо L + V (+ T)
// вычисляются алгоритмически

/// начало блока слогов хангыль
pub const HANGUL_S_BASE: u32 = 0xAC00;
/// количество слогов хангыль в Unicode
pub const HANGUL_S_COUNT: u32 = 11172;
/// начало блока ведущих согласных чамо (L)
pub const HANGUL_L_BASE: u32 = 0x1100;
/// количество ведущих согласных
pub const HANGUL_L_COUNT: u32 = 19;
/// начало блока гласных чамо (V)
pub const HANGUL_V_BASE: u32 = 0x1161;
/// количество гласных
pub const HANGUL_V_COUNT: u32 = 21;
/// начало блока завершающих согласных чамо (T), на 1 меньше первой согласной
pub const HANGUL_T_BASE: u32 = 0x11A7;
/// количество завершающих согласных
pub const HANGUL_T_COUNT: u32 = 27;
/// количество кодпоинтов на блок LV
pub const HANGUL_T_BLOCK_SIZE: u32 = HANGUL_T_COUNT + 1;
/// количество гласных * количество кодпоинтов на блок LV
pub const HANGUL_N_COUNT: u32 = 588;

/// кодпоинт - слог хангыль?
#[inline(always)]
pub fn is_hangul_syllable(code: u32) -> bool
{
    code.wrapping_sub(HANGUL_S_BASE) < HANGUL_S_COUNT
}

/// слог хангыль без завершающей согласной?
#[inline(always)]
pub fn is_hangul_lv(code: u32) -> bool
{
    (code - HANGUL_S_BASE) % HANGUL_T_BLOCK_SIZE == 0
}

/// отступ ведущей согласной от начала блока L
#[inline(always)]
pub fn jamo_l_index(code: u32) -> Option<u32>
{
    let li = code.wrapping_sub(HANGUL_L_BASE);

    match li < HANGUL_L_COUNT {
        true => Some(li),
        false => None,
    }
}

/// отступ гласной от начала блока V
#[inline(always)]
pub fn jamo_v_index(code: u32) -> Option<u32>
{
    let vi = code.wrapping_sub(HANGUL_V_BASE);

    match vi < HANGUL_V_COUNT {
        true => Some(vi),
        false => None,
    }
}

/// отступ завершающей согласной от HANGUL_T_BASE, 1..=27
#[inline(always)]
pub fn jamo_t_index(code: u32) -> Option<u32>
{
    let ti = code.wrapping_sub(HANGUL_T_BASE);

    match ti.wrapping_sub(1) < HANGUL_T_COUNT {
        true => Some(ti),
        false => None,
    }
}

/// кодпоинт - комбинируемая чамо хангыль (L, V или T)?
#[inline(always)]
pub fn is_composable_jamo(code: u32) -> bool
{
    jamo_l_index(code).is_some() || jamo_v_index(code).is_some() || jamo_t_index(code).is_some()
}

/// разложить слог на чамо и записать их в результат: ведущая согласная и
/// гласная есть у любого слога, завершающая согласная может отсутствовать
#[inline(always)]
pub fn decompose_syllable(result: &mut String, syllable: u32)
{
    let offset = syllable - HANGUL_S_BASE;

    let leading = HANGUL_L_BASE + offset / HANGUL_N_COUNT;
    let vowel = HANGUL_V_BASE + (offset % HANGUL_N_COUNT) / HANGUL_T_BLOCK_SIZE;

    write!(result, leading, vowel);

    let trailing = offset % HANGUL_T_BLOCK_SIZE;

    if trailing != 0 {
        write!(result, HANGUL_T_BASE + trailing);
    }
}

/// буфер композиции чамо хангыль: ведущая согласная ждёт гласную,
/// слог LV ждёт завершающую согласную
pub enum JamoBuffer
{
    /// пусто
    Empty,
    /// ведущая согласная (отступ от начала блока L)
    L(u32),
    /// слог LV без завершающей согласной
    LV(u32),
}

impl JamoBuffer
{
    /// принять следующий кодпоинт чамо
    pub fn advance(self, code: u32, result: &mut String) -> Self
    {
        match self {
            Self::Empty => match jamo_l_index(code) {
                Some(li) => Self::L(li),
                None => {
                    write!(result, code);
                    Self::Empty
                }
            },
            Self::L(li) => match jamo_v_index(code) {
                Some(vi) => Self::LV(HANGUL_S_BASE + li * HANGUL_N_COUNT + vi * HANGUL_T_BLOCK_SIZE),
                None => {
                    write!(result, HANGUL_L_BASE + li);
                    Self::Empty.advance(code, result)
                }
            },
            Self::LV(lv) => match jamo_t_index(code) {
                Some(ti) => {
                    write!(result, lv + ti);
                    Self::Empty
                }
                None => {
                    write!(result, lv);
                    Self::Empty.advance(code, result)
                }
            },
        }
    }

    /// записать содержимое буфера в результат
    pub fn flush(self, result: &mut String)
    {
        match self {
            Self::Empty => (),
            Self::L(li) => write!(result, HANGUL_L_BASE + li),
            Self::LV(lv) => write!(result, lv),
        }
    }
}

#[test]
fn jamo_buffer_composes_lvt()
{
    // 1100 1161 11A8 -> AC01

    let mut result = String::new();

    let jamo = JamoBuffer::Empty.advance(0x1100, &mut result);
    assert!(matches!(jamo, JamoBuffer::L(0)));

    let jamo = jamo.advance(0x1161, &mut result);
    assert!(matches!(jamo, JamoBuffer::LV(HANGUL_S_BASE)));

    let jamo = jamo.advance(0x11A8, &mut result);
    assert!(matches!(jamo, JamoBuffer::Empty));

    assert_eq!(result, "\u{AC01}");
}

#[test]
fn jamo_buffer_composes_precomposed_lv_with_t()
{
    // слог LV, полученный из исходной строки, комбинируется с завершающей согласной

    let mut result = String::new();

    let jamo = JamoBuffer::LV(0xAC00).advance(0x11A8, &mut result);

    assert!(matches!(jamo, JamoBuffer::Empty));
    assert_eq!(result, "\u{AC01}");
}

#[test]
fn hangul_syllable_decomposition()
{
    let mut result = String::new();
    decompose_syllable(&mut result, 0xAC01);
    assert_eq!(result, "\u{1100}\u{1161}\u{11A8}");

    let mut result = String::new();
    decompose_syllable(&mut result, 0xAC00);
    assert_eq!(result, "\u{1100}\u{1161}");

    // последний слог блока
    let mut result = String::new();
    decompose_syllable(&mut result, 0xD7A3);
    assert_eq!(result, "\u{1112}\u{1175}\u{11C2}");
}
