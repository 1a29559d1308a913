/// кодпоинт в буфере нормализации в виде u32, где CCC хранится в младших битах
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Codepoint(u32);

impl From<Codepoint> for char
{
    #[inline(always)]
    fn from(value: Codepoint) -> Self
    {
        value.char()
    }
}

impl core::fmt::Debug for Codepoint
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{{ code: U+{:04X}, ccc: {} }}", self.code(), self.ccc())
    }
}

impl Codepoint
{
    #[inline(always)]
    pub fn new(c: char, ccc: u8) -> Self
    {
        Self(u32::from(c) << 8 | (ccc as u32))
    }

    #[inline(always)]
    pub fn code(&self) -> u32
    {
        self.0 >> 8
    }

    #[inline(always)]
    pub fn char(&self) -> char
    {
        // кодпоинт создаётся только из char
        unsafe { char::from_u32_unchecked(self.0 >> 8) }
    }

    #[inline(always)]
    pub fn ccc(&self) -> u8
    {
        self.0 as u8
    }

    #[inline(always)]
    pub fn is_starter(&self) -> bool
    {
        self.0 as u8 == 0
    }

    #[inline(always)]
    pub fn is_nonstarter(&self) -> bool
    {
        self.0 as u8 != 0
    }
}
