use crate::buffer::copy_into;
use crate::composition::Composer;
use crate::data::NormalizationData;
use crate::decomposition::Decomposer;
use crate::error::NormalizationError;
use crate::fcd;
use crate::form::NormalizationForm;
use crate::iter::NormalizingIterator;
use crate::quick_check::IsNormalized;
use crate::quick_check::QuickCheck;
use crate::utf16;

/// нормализатор строк: NFD, NFC, NFKD, NFKC, FCD или без нормализации
#[derive(Debug, Clone, Copy)]
pub struct Normalizer<'a>
{
    data: &'a NormalizationData,
    form: NormalizationForm,
}

impl Normalizer<'static>
{
    /// NFC-нормализатор со встроенными данными
    pub fn nfc() -> Self
    {
        Self::new(NormalizationData::builtin(), NormalizationForm::Nfc)
    }

    /// NFD-нормализатор со встроенными данными
    pub fn nfd() -> Self
    {
        Self::new(NormalizationData::builtin(), NormalizationForm::Nfd)
    }

    /// NFKC-нормализатор со встроенными данными
    pub fn nfkc() -> Self
    {
        Self::new(NormalizationData::builtin(), NormalizationForm::Nfkc)
    }

    /// NFKD-нормализатор со встроенными данными
    pub fn nfkd() -> Self
    {
        Self::new(NormalizationData::builtin(), NormalizationForm::Nfkd)
    }

    /// FCD-нормализатор со встроенными данными
    pub fn fcd() -> Self
    {
        Self::new(NormalizationData::builtin(), NormalizationForm::Fcd)
    }

    /// "нормализатор", возвращающий строку без изменений
    pub fn none() -> Self
    {
        Self::new(NormalizationData::builtin(), NormalizationForm::Identity)
    }
}

impl<'a> Normalizer<'a>
{
    pub fn new(data: &'a NormalizationData, form: NormalizationForm) -> Self
    {
        Self { data, form }
    }

    pub fn form(&self) -> NormalizationForm
    {
        self.form
    }

    /// сменить форму нормализации
    pub fn set_form(&mut self, form: NormalizationForm)
    {
        self.form = form;
    }

    pub fn data(&self) -> &'a NormalizationData
    {
        self.data
    }

    /// нормализация строки. если быстрая проверка показывает, что строка уже нормализована -
    /// возвращаем копию
    pub fn normalize(&self, text: &str) -> String
    {
        match self.quick_check(text) {
            IsNormalized::Yes => text.to_owned(),
            _ => self.normalize_chars(text.chars()).into_iter().collect(),
        }
    }

    /// нормализация последовательности символов (без быстрой проверки)
    pub fn normalize_chars(&self, text: impl IntoIterator<Item = char>) -> Vec<char>
    {
        match self.form {
            NormalizationForm::Nfd | NormalizationForm::Nfkd => {
                Decomposer::new(self.data, self.form.is_compatibility()).decompose_chars(text)
            }
            NormalizationForm::Nfc | NormalizationForm::Nfkc => {
                Composer::new(self.data, self.form.is_compatibility()).compose_chars(text)
            }
            NormalizationForm::Fcd => fcd::normalize(self.data, &text.into_iter().collect::<Vec<char>>()),
            NormalizationForm::Identity => text.into_iter().collect(),
        }
    }

    /// быстрая проверка: да / нет / возможно
    pub fn quick_check(&self, text: &str) -> IsNormalized
    {
        QuickCheck::new(self.data, self.form).quick_check(text)
    }

    /// нормализована ли строка. "возможно" быстрой проверки уточняется нормализацией
    pub fn is_normalized(&self, text: &str) -> bool
    {
        match self.quick_check(text) {
            IsNormalized::Yes => true,
            IsNormalized::No => false,
            IsNormalized::Maybe => self.normalize_chars(text.chars()).into_iter().eq(text.chars()),
        }
    }

    /// нормализация в буфер фиксированного размера
    pub fn normalize_into(&self, text: &str, dest: &mut [char]) -> Result<usize, NormalizationError>
    {
        copy_into(&self.normalize_chars(text.chars()), dest)
    }

    /// нормализация строки UTF-16
    pub fn normalize_utf16(&self, text: &[u16]) -> Result<Vec<u16>, NormalizationError>
    {
        let text = utf16::decode(text)?;

        Ok(utf16::encode(&self.normalize_chars(text)))
    }

    /// нормализация строки UTF-16 в буфер фиксированного размера, возвращает количество записанных
    /// кодовых единиц
    pub fn normalize_utf16_into(&self, text: &[u16], dest: &mut [u16]) -> Result<usize, NormalizationError>
    {
        let text = utf16::decode(text)?;

        utf16::encode_into(&self.normalize_chars(text), dest)
    }

    /// нормализованная конкатенация двух строк
    pub fn concatenate(&self, left: &str, right: &str) -> String
    {
        let left: Vec<char> = left.chars().collect();
        let right: Vec<char> = right.chars().collect();

        self.concatenate_chars(&left, &right).into_iter().collect()
    }

    /// нормализованная конкатенация двух строк UTF-16 в буфер фиксированного размера
    pub fn concatenate_utf16_into(
        &self,
        left: &[u16],
        right: &[u16],
        dest: &mut [u16],
    ) -> Result<usize, NormalizationError>
    {
        let left = utf16::decode(left)?;
        let right = utf16::decode(right)?;

        utf16::encode_into(&self.concatenate_chars(&left, &right), dest)
    }

    /// итератор нормализации по строке
    pub fn iter(&self, text: &str) -> NormalizingIterator<'a>
    {
        NormalizingIterator::new(*self, text)
    }

    /// начинается ли перед кодпоинтом независимо нормализуемый отрезок строки:
    /// ни переупорядочивание, ни комбинирование не затрагивают кодпоинты по разные стороны границы
    pub fn has_boundary_before(&self, c: char) -> bool
    {
        let canonical = !self.form.is_compatibility();

        match self.form {
            NormalizationForm::Identity => true,
            NormalizationForm::Fcd => self.data.lead_ccc(c) == 0,
            NormalizationForm::Nfd | NormalizationForm::Nfkd => {
                let first = self.data.decomposition(c, canonical).map_or(c, |d| d[0]);

                self.data.ccc(first) == 0
            }
            NormalizationForm::Nfc | NormalizationForm::Nfkc => {
                let first = self.data.decomposition(c, canonical).map_or(c, |d| d[0]);

                self.data.ccc(first) == 0 && !self.data.combines_backwards(first)
            }
        }
    }

    /// конкатенация: нормализуем заново только отрезок между последней границей левой строки
    /// и первой границей правой
    fn concatenate_chars(&self, left: &[char], right: &[char]) -> Vec<char>
    {
        let left_boundary = left
            .iter()
            .rposition(|&c| self.has_boundary_before(c))
            .unwrap_or(0);

        let right_boundary = right
            .iter()
            .position(|&c| self.has_boundary_before(c))
            .unwrap_or(right.len());

        let middle = left[left_boundary ..]
            .iter()
            .chain(&right[.. right_boundary])
            .copied();

        let mut result = self.normalize_chars(left[.. left_boundary].iter().copied());

        result.extend(self.normalize_chars(middle));
        result.extend(self.normalize_chars(right[right_boundary ..].iter().copied()));

        result
    }
}
