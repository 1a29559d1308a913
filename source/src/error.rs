use std::path::PathBuf;

use thiserror::Error;

use crate::properties::PropertiesError;

/// ошибки чтения и разбора файлов UCD
#[derive(Debug, Error)]
pub enum UcdError
{
    /// строка файла не соответствует формату
    #[error("{file}, строка {line}: {source}")]
    Parse
    {
        file: &'static str,
        line: usize,
        #[source]
        source: PropertiesError,
    },
    /// не удалось прочитать файл
    #[error("не удалось прочитать {}: {source}", path.display())]
    Io
    {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl UcdError
{
    /// ошибка разбора с указанием файла и номера строки (с единицы)
    pub(crate) fn parse(file: &'static str, index: usize, source: PropertiesError) -> Self
    {
        Self::Parse {
            file,
            line: index + 1,
            source,
        }
    }
}
