use crate::buffer::copy_into;
use crate::data::NormalizationData;
use crate::decomposition::Decomposer;
use crate::error::NormalizationError;

/// значение "последнего CCC", при котором комбинирование невозможно: последовательность
/// начинается с нестартера
const BLOCKED: u16 = 256;

/// каноническая композиция (NFC, NFKC). перед композицией строка декомпозируется
#[derive(Debug, Clone, Copy)]
pub struct Composer<'a>
{
    data: &'a NormalizationData,
    decomposer: Decomposer<'a>,
}

impl<'a> Composer<'a>
{
    /// compatibility == true - NFKC: декомпозиция совместимости, композиция - всегда каноническая
    pub fn new(data: &'a NormalizationData, compatibility: bool) -> Self
    {
        Self {
            data,
            decomposer: Decomposer::new(data, compatibility),
        }
    }

    /// NFC-композиция встроенными данными
    pub fn nfc() -> Composer<'static>
    {
        Composer::new(NormalizationData::builtin(), false)
    }

    /// NFKC-композиция встроенными данными
    pub fn nfkc() -> Composer<'static>
    {
        Composer::new(NormalizationData::builtin(), true)
    }

    /// декомпозиция и композиция строки
    pub fn compose(&self, text: &str) -> String
    {
        self.compose_chars(text.chars()).into_iter().collect()
    }

    /// декомпозиция и композиция последовательности символов
    pub fn compose_chars(&self, text: impl IntoIterator<Item = char>) -> Vec<char>
    {
        let mut buffer = self.decomposer.decompose_chars(text);
        self.compose_decomposed(&mut buffer);

        buffer
    }

    /// композиция в буфер фиксированного размера, возвращает количество записанных символов
    pub fn compose_into(&self, text: &str, dest: &mut [char]) -> Result<usize, NormalizationError>
    {
        copy_into(&self.compose_chars(text.chars()), dest)
    }

    /// композиция на месте. последовательность должна быть декомпозирована и канонически упорядочена
    ///
    /// кодпоинт комбинируется с последним стартером, если между ними нет кодпоинта, блокирующего
    /// комбинирование: стартера или нестартера с CCC, большим или равным CCC кодпоинта
    pub fn compose_decomposed(&self, buffer: &mut Vec<char>)
    {
        let Some(&first) = buffer.first() else {
            return;
        };

        let mut starter_index = 0;
        let mut starter = first;
        let mut last_ccc = match self.data.ccc(first) {
            0 => 0,
            _ => BLOCKED,
        };

        let mut len = 1;

        for i in 1 .. buffer.len() {
            let c = buffer[i];
            let ccc = self.data.ccc(c) as u16;

            if last_ccc < ccc || last_ccc == 0 {
                if let Some(composite) = self.data.compose_pair(starter, c) {
                    buffer[starter_index] = composite;
                    starter = composite;

                    continue;
                }
            }

            if ccc == 0 {
                starter_index = len;
                starter = c;
            }

            last_ccc = ccc;
            buffer[len] = c;
            len += 1;
        }

        buffer.truncate(len);
    }
}
