use std::cmp::Ordering;

use bitflags::bitflags;

use crate::data::NormalizationData;
use crate::data::FIRST_DECOMPOSING_CODE;
use crate::decomposition::Decomposer;
use crate::fcd;

bitflags! {
    /// параметры сравнения строк
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CompareOptions: u32
    {
        /// при приведении регистра использовать тюркские варианты I с точкой и без
        const FOLD_CASE_EXCLUDE_SPECIAL_I = 0x1;
        /// порядок кодпоинтов вместо порядка кодовых единиц UTF-16
        const CODE_POINT_ORDER = 0x8000;
        /// сравнение без учета регистра
        const IGNORE_CASE = 0x10000;
        /// обе строки заведомо являются FCD
        const INPUT_IS_FCD = 0x20000;
    }
}

/// сравнение строк с точностью до канонической эквивалентности
///
/// строки равны, если равны их NFD (без учета регистра: NFD(fold(NFD(s)))). порядок -
/// лексикографический по кодовым единицам UTF-16 или, с [`CompareOptions::CODE_POINT_ORDER`],
/// по кодпоинтам
#[derive(Debug, Clone, Copy)]
pub struct Comparator<'a>
{
    data: &'a NormalizationData,
}

impl<'a> Comparator<'a>
{
    pub fn new(data: &'a NormalizationData) -> Self
    {
        Self { data }
    }

    pub fn builtin() -> Comparator<'static>
    {
        Comparator::new(NormalizationData::builtin())
    }

    pub fn compare(&self, a: &str, b: &str, options: CompareOptions) -> Ordering
    {
        if options.contains(CompareOptions::IGNORE_CASE) {
            return self.compare_decomposed(a, b, options);
        }

        // для FCD-строк NFD - конкатенация канонических декомпозиций кодпоинтов,
        // переупорядочивание не требуется
        let fcd = options.contains(CompareOptions::INPUT_IS_FCD)
            || (fcd::is_fcd(self.data, a.chars()) && fcd::is_fcd(self.data, b.chars()));

        match fcd {
            true => compare_chars(
                CanonicalChars::new(self.data, a.chars()),
                CanonicalChars::new(self.data, b.chars()),
                options,
            ),
            false => self.compare_decomposed(a, b, options),
        }
    }

    /// сравнение полностью декомпозированных строк
    pub fn compare_decomposed(&self, a: &str, b: &str, options: CompareOptions) -> Ordering
    {
        let a = self.key(a, options);
        let b = self.key(b, options);

        compare_chars(a.into_iter(), b.into_iter(), options)
    }

    /// NFD строки, без учета регистра - NFD(fold(NFD(s)))
    fn key(&self, text: &str, options: CompareOptions) -> Vec<char>
    {
        let decomposer = Decomposer::new(self.data, false);
        let decomposed = decomposer.decompose_chars(text.chars());

        if !options.contains(CompareOptions::IGNORE_CASE) {
            return decomposed;
        }

        let special_i = options.contains(CompareOptions::FOLD_CASE_EXCLUDE_SPECIAL_I);
        let mut folded = Vec::with_capacity(decomposed.len());

        for c in decomposed {
            self.data.fold_case(c, special_i, |c| folded.push(c));
        }

        decomposer.decompose_chars(folded)
    }
}

fn compare_chars(
    a: impl Iterator<Item = char>,
    b: impl Iterator<Item = char>,
    options: CompareOptions,
) -> Ordering
{
    match options.contains(CompareOptions::CODE_POINT_ORDER) {
        true => a.cmp(b),
        false => a.map(utf16_order).cmp(b.map(utf16_order)),
    }
}

/// вес кодпоинта в порядке кодовых единиц UTF-16: суррогатные пары (U+10000 ..) идут
/// раньше кодпоинтов U+E000 .. U+FFFF
#[inline(always)]
fn utf16_order(c: char) -> u32
{
    let code = c as u32;

    match code {
        0xE000 ..= 0xFFFF => code + 0x110000,
        _ => code,
    }
}

/// канонические декомпозиции кодпоинтов строки, без переупорядочивания
struct CanonicalChars<'a, I>
{
    data: &'a NormalizationData,
    text: I,
    pending: Vec<char>,
    position: usize,
}

impl<'a, I: Iterator<Item = char>> CanonicalChars<'a, I>
{
    fn new(data: &'a NormalizationData, text: I) -> Self
    {
        Self {
            data,
            text,
            pending: Vec::new(),
            position: 0,
        }
    }
}

impl<'a, I: Iterator<Item = char>> Iterator for CanonicalChars<'a, I>
{
    type Item = char;

    fn next(&mut self) -> Option<char>
    {
        if self.position < self.pending.len() {
            self.position += 1;
            return Some(self.pending[self.position - 1]);
        }

        let c = self.text.next()?;

        if (c as u32) < FIRST_DECOMPOSING_CODE {
            return Some(c);
        }

        let data = self.data;
        let pending = &mut self.pending;

        pending.clear();
        data.decompose(c, true, |c| pending.push(c));

        self.position = 1;
        Some(self.pending[0])
    }
}
