//! интеграционные тесты: тесты нормализации из UCD и сравнение с ICU

#[cfg(test)]
mod data;
#[cfg(test)]
mod icu;
#[cfg(test)]
mod ucd;
