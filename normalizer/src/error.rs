use std::path::PathBuf;

use thiserror::Error;
use unicode_normalization_source::UcdError;

/// ошибки нормализации
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NormalizationError
{
    /// результат не помещается в буфер фиксированного размера. строка не обрезается,
    /// буфер нужного размера можно выделить и повторить вызов
    #[error("недостаточный размер буфера: требуется {required}")]
    InsufficientCapacity
    {
        required: usize
    },
    /// суррогат без пары во входных данных UTF-16
    #[error("суррогат без пары U+{unit:04X} в позиции {index}")]
    UnpairedSurrogate
    {
        index: usize, unit: u16
    },
    /// значение не является скалярным значением Unicode (суррогат или > U+10FFFF)
    #[error("некорректный кодпоинт: {0:#X}")]
    InvalidCodepoint(u32),
}

/// ошибки построения данных нормализации
#[derive(Debug, Error)]
pub enum DataError
{
    /// развернуть декомпозицию не удалось за допустимое количество шагов - данные зациклены
    #[error("циклическая декомпозиция U+{code:04X}")]
    CyclicDecomposition
    {
        code: u32
    },
    /// декомпозиция ссылается на значение, не являющееся кодпоинтом
    #[error("декомпозиция U+{code:04X} содержит некорректный кодпоинт {value:#X}")]
    InvalidMapping
    {
        code: u32, value: u32
    },
    /// ошибка разбора UCD
    #[error(transparent)]
    Ucd(#[from] UcdError),
}

/// ошибки конфигурации
#[derive(Debug, Error)]
pub enum ConfigError
{
    /// неизвестная форма нормализации
    #[error("неизвестная форма нормализации: {0}")]
    UnknownForm(String),
    /// некорректный TOML
    #[error("ошибка разбора конфигурации {}: {source}", path.display())]
    Parse
    {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    /// ошибка чтения файла (кроме его отсутствия)
    #[error("не удалось прочитать конфигурацию {}: {source}", path.display())]
    Io
    {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
