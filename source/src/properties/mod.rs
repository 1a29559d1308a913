use thiserror::Error;

mod canonical_combining_class;
mod decomposition;

pub use canonical_combining_class::CanonicalCombiningClass;
pub use decomposition::Decomposition;
pub use decomposition::DecompositionTag;

/// Кодпоинт Unicode
/// источник - UCD, UnicodeData.txt
#[derive(Debug, Clone, PartialEq)]
pub struct Codepoint
{
    /// код символа
    pub code: u32,
    /// название
    pub name: String,
    /// категория символа (general category), в виде аббревиатуры
    pub gc: String,
    /// класс канонического комбинирования (canonical combining class)
    pub ccc: CanonicalCombiningClass,
    /// тег декомпозиции
    pub decomposition_tag: Option<DecompositionTag>,
    /// декомпозиция
    pub decomposition: Vec<u32>,
}

impl Codepoint
{
    #[inline]
    pub fn is_starter(&self) -> bool
    {
        self.ccc.is_starter()
    }

    #[inline]
    pub fn is_nonstarter(&self) -> bool
    {
        self.ccc.is_non_starter()
    }

    /// каноническая декомпозиция (без тега)?
    #[inline]
    pub fn has_canonical_decomposition(&self) -> bool
    {
        !self.decomposition.is_empty() && self.decomposition_tag.is_none()
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum PropertiesError
{
    #[error("неизвестное значение свойства: {0:?}")]
    UnknownPropertyValue(String),
    #[error("некорректный код символа: {0:?}")]
    InvalidCode(String),
    #[error("отсутствует поле {0}")]
    MissingField(&'static str),
}

impl From<core::num::ParseIntError> for PropertiesError
{
    fn from(error: core::num::ParseIntError) -> Self
    {
        Self::UnknownPropertyValue(error.to_string())
    }
}

/// разбор кода символа в шестнадцатеричной записи, с проверкой диапазона
pub fn parse_code(value: &str) -> Result<u32, PropertiesError>
{
    let value = value.trim();

    let code =
        u32::from_str_radix(value, 16).map_err(|_| PropertiesError::InvalidCode(value.to_owned()))?;

    match code <= 0x10FFFF {
        true => Ok(code),
        false => Err(PropertiesError::InvalidCode(value.to_owned())),
    }
}
