#[macro_use]
extern crate lazy_static;

pub use codepoint::Codepoint;
pub use compare::Comparator;
pub use compare::CompareOptions;
pub use composition::Composer;
pub use config::DataConfig;
pub use config::FormConfig;
pub use config::NormalizerConfig;
pub use data::NormalizationData;
pub use data::QuickCheckFlags;
pub use decomposition::canonical_order;
pub use decomposition::Decomposer;
pub use error::ConfigError;
pub use error::DataError;
pub use error::NormalizationError;
pub use fcd::is_fcd;
pub use form::NormalizationForm;
pub use iter::NormalizingIterator;
pub use normalizer::Normalizer;
pub use quick_check::IsNormalized;
pub use quick_check::QuickCheck;

mod buffer;
mod codepoint;
mod compare;
mod composition;
mod config;
mod data;
mod decomposition;
mod error;
mod fcd;
mod form;
mod hangul;
mod iter;
mod normalizer;
mod quick_check;
mod utf16;
