use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ConfigError;

/// форма нормализации
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum NormalizationForm
{
    /// каноническая декомпозиция
    Nfd,
    /// каноническая декомпозиция и композиция
    #[default]
    Nfc,
    /// декомпозиция совместимости
    Nfkd,
    /// декомпозиция совместимости и каноническая композиция
    Nfkc,
    /// FCD: декомпозиция только там, где без неё нарушается канонический порядок
    Fcd,
    /// без нормализации (NONE)
    Identity,
}

impl NormalizationForm
{
    /// декомпозиция совместимости (NFKD, NFKC)?
    #[inline]
    pub fn is_compatibility(&self) -> bool
    {
        matches!(self, Self::Nfkd | Self::Nfkc)
    }

    /// после декомпозиции выполняется композиция (NFC, NFKC)?
    #[inline]
    pub fn is_composing(&self) -> bool
    {
        matches!(self, Self::Nfc | Self::Nfkc)
    }

    /// название формы
    pub fn name(&self) -> &'static str
    {
        match self {
            Self::Nfd => "NFD",
            Self::Nfc => "NFC",
            Self::Nfkd => "NFKD",
            Self::Nfkc => "NFKC",
            Self::Fcd => "FCD",
            Self::Identity => "NONE",
        }
    }
}

impl fmt::Display for NormalizationForm
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.write_str(self.name())
    }
}

impl FromStr for NormalizationForm
{
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err>
    {
        let form = match value.trim().to_ascii_uppercase().as_str() {
            "NFD" => Self::Nfd,
            "NFC" => Self::Nfc,
            "NFKD" => Self::Nfkd,
            "NFKC" => Self::Nfkc,
            "FCD" => Self::Fcd,
            "NONE" => Self::Identity,
            _ => return Err(ConfigError::UnknownForm(value.to_owned())),
        };

        Ok(form)
    }
}

impl TryFrom<String> for NormalizationForm
{
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error>
    {
        value.parse()
    }
}
