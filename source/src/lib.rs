#[macro_use]
extern crate lazy_static;

pub mod properties;

mod case_folding;
mod composition_exclusions;
mod error;
mod files;
mod unicode;

pub use error::UcdError;

pub use files::builtin;
pub use files::builtin::UCD_VERSION;
pub use files::UcdFiles;

pub use unicode::unicode;

pub use composition_exclusions::composition_exclusions;

pub use case_folding::case_folding;
pub use case_folding::CaseFolding;

pub use normalization_tests::normalization_tests;
pub use normalization_tests::NormalizationTest;
pub use normalization_tests::NORMALIZATION_TESTS;
