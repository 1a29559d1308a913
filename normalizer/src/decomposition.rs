use crate::buffer::copy_into;
use crate::codepoint::Codepoint;
use crate::data::NormalizationData;
use crate::data::FIRST_DECOMPOSING_CODE;
use crate::error::NormalizationError;

/// декомпозиция: каноническая (NFD) или совместимости (NFKD)
#[derive(Debug, Clone, Copy)]
pub struct Decomposer<'a>
{
    data: &'a NormalizationData,
    /// NFD или NFKD
    canonical: bool,
}

impl<'a> Decomposer<'a>
{
    /// compatibility == true - декомпозиция совместимости
    pub fn new(data: &'a NormalizationData, compatibility: bool) -> Self
    {
        Self {
            data,
            canonical: !compatibility,
        }
    }

    /// NFD-декомпозиция встроенными данными
    pub fn nfd() -> Decomposer<'static>
    {
        Decomposer::new(NormalizationData::builtin(), false)
    }

    /// NFKD-декомпозиция встроенными данными
    pub fn nfkd() -> Decomposer<'static>
    {
        Decomposer::new(NormalizationData::builtin(), true)
    }

    /// декомпозиция строки
    pub fn decompose(&self, text: &str) -> String
    {
        let mut result = String::with_capacity(text.len());
        self.decompose_to(text.chars(), |c| result.push(c));

        result
    }

    /// декомпозиция последовательности символов
    pub fn decompose_chars(&self, text: impl IntoIterator<Item = char>) -> Vec<char>
    {
        let mut result = vec![];
        self.decompose_to(text, |c| result.push(c));

        result
    }

    /// декомпозиция последовательности кодпоинтов, заданных числами. суррогаты и значения
    /// за пределами U+10FFFF - ошибка, а не повод пропустить значение
    pub fn decompose_codepoints(&self, codes: &[u32]) -> Result<Vec<u32>, NormalizationError>
    {
        let text = codes
            .iter()
            .map(|&code| char::from_u32(code).ok_or(NormalizationError::InvalidCodepoint(code)))
            .collect::<Result<Vec<char>, _>>()?;

        let mut result = Vec::with_capacity(text.len());
        self.decompose_to(text, |c| result.push(u32::from(c)));

        Ok(result)
    }

    /// декомпозиция в буфер фиксированного размера, возвращает количество записанных символов
    pub fn decompose_into(&self, text: &str, dest: &mut [char]) -> Result<usize, NormalizationError>
    {
        copy_into(&self.decompose_chars(text.chars()), dest)
    }

    /// декомпозиция с последующей сортировкой нестартеров по CCC
    pub(crate) fn decompose_to(&self, text: impl IntoIterator<Item = char>, mut write: impl FnMut(char))
    {
        let mut buffer: Vec<Codepoint> = Vec::with_capacity(18);

        for c in text {
            // до U+00A0 - стартеры без декомпозиции
            if (c as u32) < FIRST_DECOMPOSING_CODE {
                flush(&mut buffer, &mut write);
                write(c);
                continue;
            }

            self.data.decompose(c, self.canonical, |c| {
                let ccc = self.data.ccc(c);

                match ccc {
                    0 => {
                        flush(&mut buffer, &mut write);
                        write(c);
                    }
                    _ => buffer.push(Codepoint::new(c, ccc)),
                }
            });
        }

        flush(&mut buffer, &mut write);
    }
}

/// канонический порядок: стабильная сортировка последовательности нестартеров по CCC.
/// нестартеры с одинаковым CCC сохраняют взаимный порядок
#[inline(always)]
pub fn canonical_order(buffer: &mut [Codepoint])
{
    if buffer.len() > 1 {
        buffer.sort_by_key(|c| c.ccc());
    }
}

/// упорядочить накопленные нестартеры и записать
#[inline(always)]
fn flush(buffer: &mut Vec<Codepoint>, write: &mut impl FnMut(char))
{
    canonical_order(buffer);
    buffer.drain(..).for_each(|c| write(c.char()));
}
