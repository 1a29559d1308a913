use super::parse_code;
use super::PropertiesError;

/// декомпозиция
/// берется из UCD: 5 колонка UnicodeData.txt
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Decomposition
{
    /// декомпозиция
    pub codes: Vec<u32>,
    /// тег декомпозиции
    pub tag: Option<DecompositionTag>,
}

impl TryFrom<&str> for Decomposition
{
    type Error = PropertiesError;

    fn try_from(value: &str) -> Result<Self, Self::Error>
    {
        let value = value.trim();

        let (tag_string, decomposition_string) = match value.starts_with('<') {
            true => value
                .split_once(' ')
                .ok_or_else(|| PropertiesError::UnknownPropertyValue(value.to_owned()))?,
            false => ("", value),
        };

        let tag = match !tag_string.is_empty() {
            true => Some(DecompositionTag::try_from(tag_string)?),
            false => None,
        };

        let codes = decomposition_string
            .split_whitespace()
            .map(parse_code)
            .collect::<Result<Vec<u32>, _>>()?;

        // тег без самой декомпозиции
        if tag.is_some() && codes.is_empty() {
            return Err(PropertiesError::UnknownPropertyValue(value.to_owned()));
        }

        Ok(Self { codes, tag })
    }
}

/// тег декомпозиции
/// берется из UCD: 5 колонка UnicodeData.txt
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DecompositionTag
{
    /// вариант шрифта
    Font,
    /// неразрывная версия пробела или дефиса
    NoBreak,
    /// начальная форма представления (арабский)
    Initial,
    /// средняя форма представления (арабский)
    Medial,
    /// конечная форма представления (арабский)
    Final,
    /// изолированная форма представления (арабский)
    Isolated,
    /// окруженная форма
    Circle,
    /// надстрочная форма
    Super,
    /// подстрочная форма
    Sub,
    /// вертикальная форма представления
    Vertical,
    /// совместимый символ широкого формата (или зэнкаку)
    Wide,
    /// совместимый символ узкого формата (или ханкаку)
    Narrow,
    /// малая вариантная форма (совместимость CNS (Chinese National Standard))
    Small,
    /// вариант шрифта в квадрате CJK
    Square,
    /// форма обыкновенной дроби
    Fraction,
    /// неопределенный символ для обеспечения совместимости
    Compat,
}

impl TryFrom<&str> for DecompositionTag
{
    type Error = PropertiesError;

    #[inline]
    fn try_from(abbr: &str) -> Result<Self, Self::Error>
    {
        Ok(match abbr {
            "<font>" => Self::Font,
            "<noBreak>" => Self::NoBreak,
            "<initial>" => Self::Initial,
            "<medial>" => Self::Medial,
            "<final>" => Self::Final,
            "<isolated>" => Self::Isolated,
            "<circle>" => Self::Circle,
            "<super>" => Self::Super,
            "<sub>" => Self::Sub,
            "<vertical>" => Self::Vertical,
            "<wide>" => Self::Wide,
            "<narrow>" => Self::Narrow,
            "<small>" => Self::Small,
            "<square>" => Self::Square,
            "<fraction>" => Self::Fraction,
            "<compat>" => Self::Compat,
            _ => return Err(PropertiesError::UnknownPropertyValue(abbr.to_owned())),
        })
    }
}

impl core::fmt::Display for DecompositionTag
{
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        let value = match self {
            DecompositionTag::Font => "<font>",
            DecompositionTag::NoBreak => "<noBreak>",
            DecompositionTag::Initial => "<initial>",
            DecompositionTag::Medial => "<medial>",
            DecompositionTag::Final => "<final>",
            DecompositionTag::Isolated => "<isolated>",
            DecompositionTag::Circle => "<circle>",
            DecompositionTag::Super => "<super>",
            DecompositionTag::Sub => "<sub>",
            DecompositionTag::Vertical => "<vertical>",
            DecompositionTag::Wide => "<wide>",
            DecompositionTag::Narrow => "<narrow>",
            DecompositionTag::Small => "<small>",
            DecompositionTag::Square => "<square>",
            DecompositionTag::Fraction => "<fraction>",
            DecompositionTag::Compat => "<compat>",
        };

        write!(f, "{}", value)
    }
}
