use crate::data::NormalizationData;
use crate::data::QuickCheckFlags;
use crate::data::FIRST_DECOMPOSING_CODE;
use crate::fcd;
use crate::form::NormalizationForm;

/// результат быстрой проверки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IsNormalized
{
    /// строка нормализована
    Yes,
    /// строка не нормализована
    No,
    /// зависит от контекста - нужна нормализация (только NFC и NFKC)
    Maybe,
}

/// быстрая проверка, является ли строка нормализованной, без нормализации
#[derive(Debug, Clone, Copy)]
pub struct QuickCheck<'a>
{
    data: &'a NormalizationData,
    form: NormalizationForm,
}

impl<'a> QuickCheck<'a>
{
    pub fn new(data: &'a NormalizationData, form: NormalizationForm) -> Self
    {
        Self { data, form }
    }

    /// быстрая проверка строки
    pub fn quick_check(&self, text: &str) -> IsNormalized
    {
        self.quick_check_chars(text.chars())
    }

    /// быстрая проверка последовательности символов
    pub fn quick_check_chars(&self, text: impl IntoIterator<Item = char>) -> IsNormalized
    {
        let (no, maybe) = match self.form {
            NormalizationForm::Identity => return IsNormalized::Yes,
            NormalizationForm::Fcd => {
                return match fcd::is_fcd(self.data, text) {
                    true => IsNormalized::Yes,
                    false => IsNormalized::No,
                }
            }
            NormalizationForm::Nfd => (QuickCheckFlags::NFD_NO, QuickCheckFlags::empty()),
            NormalizationForm::Nfkd => (QuickCheckFlags::NFKD_NO, QuickCheckFlags::empty()),
            NormalizationForm::Nfc => (QuickCheckFlags::NFC_NO, QuickCheckFlags::NFC_MAYBE),
            NormalizationForm::Nfkc => (QuickCheckFlags::NFKC_NO, QuickCheckFlags::NFKC_MAYBE),
        };

        let mut result = IsNormalized::Yes;
        let mut last_ccc = 0;

        for c in text {
            if (c as u32) < FIRST_DECOMPOSING_CODE {
                last_ccc = 0;
                continue;
            }

            // нарушен канонический порядок
            let ccc = self.data.ccc(c);

            if ccc != 0 && last_ccc > ccc {
                return IsNormalized::No;
            }

            let flags = self.data.quick_check_flags(c);

            if flags.intersects(no) {
                return IsNormalized::No;
            }

            if flags.intersects(maybe) {
                result = IsNormalized::Maybe;
            }

            last_ccc = ccc;
        }

        result
    }
}
