use std::borrow::Cow;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::UcdError;

/// встроенные файлы UCD
///
/// UnicodeData.txt содержит только кодпоинты, имеющие декомпозицию или ненулевой CCC -
/// остальные свойства для нормализации не нужны
pub mod builtin
{
    /// версия встроенных данных
    pub const UCD_VERSION: &str = "14.0.0";

    pub const UNICODE_DATA: &str = include_str!("./../data/ucd/14.0.0/UnicodeData.txt");
    pub const COMPOSITION_EXCLUSIONS: &str = include_str!("./../data/ucd/14.0.0/CompositionExclusions.txt");
    pub const CASE_FOLDING: &str = include_str!("./../data/ucd/14.0.0/CaseFolding.txt");
    pub const NORMALIZATION_TEST: &str = include_str!("./../data/ucd/14.0.0/NormalizationTest.txt");
}

/// исходные тексты файлов UCD, необходимых для построения данных нормализации
#[derive(Debug, Clone)]
pub struct UcdFiles
{
    pub unicode_data: Cow<'static, str>,
    pub composition_exclusions: Cow<'static, str>,
    pub case_folding: Cow<'static, str>,
}

impl UcdFiles
{
    /// встроенные в библиотеку файлы
    pub fn builtin() -> Self
    {
        Self {
            unicode_data: Cow::Borrowed(builtin::UNICODE_DATA),
            composition_exclusions: Cow::Borrowed(builtin::COMPOSITION_EXCLUSIONS),
            case_folding: Cow::Borrowed(builtin::CASE_FOLDING),
        }
    }

    /// файлы из папки (например, распакованный UCD.zip нужной версии)
    pub fn read_dir(dir: &Path) -> Result<Self, UcdError>
    {
        info!(target: "ucd", dir = %dir.display(), "reading UCD files");

        Ok(Self {
            unicode_data: Cow::Owned(read(dir, "UnicodeData.txt")?),
            composition_exclusions: Cow::Owned(read(dir, "CompositionExclusions.txt")?),
            case_folding: Cow::Owned(read(dir, "CaseFolding.txt")?),
        })
    }
}

/// прочитать файл
fn read(dir: &Path, name: &str) -> Result<String, UcdError>
{
    let path = dir.join(name);

    fs::read_to_string(&path).map_err(|source| UcdError::Io { path, source })
}
