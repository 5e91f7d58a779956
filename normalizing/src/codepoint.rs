/// кодпоинт и его класс канонического комбинирования (CCC)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Codepoint
{
    code: u32,
    ccc: u8,
}

impl From<Codepoint> for char
{
    #[inline(always)]
    fn from(codepoint: Codepoint) -> Self
    {
        unsafe { char::from_u32_unchecked(codepoint.code) }
    }
}

impl Codepoint
{
    #[inline(always)]
    pub fn new(code: u32, ccc: u8) -> Self
    {
        Self { code, ccc }
    }

    #[inline(always)]
    pub fn code(&self) -> u32
    {
        self.code
    }

    #[inline(always)]
    pub fn ccc(&self) -> u8
    {
        self.ccc
    }

    #[inline(always)]
    pub fn is_starter(&self) -> bool
    {
        self.ccc == 0
    }

    #[inline(always)]
    pub fn is_nonstarter(&self) -> bool
    {
        self.ccc != 0
    }
}
