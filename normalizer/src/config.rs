use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Deserialize;
use tracing::info;
use unicode_normalization_source::UcdFiles;

use crate::data::NormalizationData;
use crate::error::ConfigError;
use crate::error::DataError;
use crate::form::NormalizationForm;
use crate::normalizer::Normalizer;

/// конфигурация нормализатора (TOML)
///
/// ```toml
/// [data]
/// ucd_dir = "/usr/share/unicode/15.0.0"
///
/// [normalizer]
/// form = "NFKC"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NormalizerConfig
{
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub normalizer: FormConfig,
}

/// источник данных UCD
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataConfig
{
    /// папка с UnicodeData.txt, CompositionExclusions.txt, CaseFolding.txt.
    /// если не указана - встроенные данные
    #[serde(default)]
    pub ucd_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormConfig
{
    #[serde(default)]
    pub form: NormalizationForm,
}

impl NormalizerConfig
{
    /// загрузить конфигурацию из файла. отсутствующий файл - конфигурация по умолчанию
    pub fn load_from(path: &Path) -> Result<Self, ConfigError>
    {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(target: "config", path = %path.display(), "config not found, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        info!(
            target: "config",
            path = %path.display(),
            form = %config.normalizer.form,
            ucd_dir = ?config.data.ucd_dir,
            "config loaded"
        );

        Ok(config)
    }

    /// данные нормализации: встроенные или построенные по файлам UCD из указанной папки
    pub fn load_data(&self) -> Result<Cow<'static, NormalizationData>, DataError>
    {
        match &self.data.ucd_dir {
            None => Ok(Cow::Borrowed(NormalizationData::builtin())),
            Some(dir) => {
                let files = UcdFiles::read_dir(dir)?;

                Ok(Cow::Owned(NormalizationData::from_ucd(&files)?))
            }
        }
    }

    /// нормализатор заданной в конфигурации формы
    pub fn normalizer<'a>(&self, data: &'a NormalizationData) -> Normalizer<'a>
    {
        Normalizer::new(data, self.normalizer.form)
    }
}

impl FromStr for NormalizerConfig
{
    type Err = toml::de::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        toml::from_str(s)
    }
}
