use std::collections::HashMap;
use std::collections::HashSet;

use tracing::debug;
use tracing::info;
use unicode_normalization_source::case_folding;
use unicode_normalization_source::composition_exclusions;
use unicode_normalization_source::properties::Codepoint as UcdCodepoint;
use unicode_normalization_source::unicode;
use unicode_normalization_source::UcdFiles;

use crate::error::DataError;
use crate::hangul;

pub use flags::QuickCheckFlags;

mod expansion;
mod flags;

/// кодпоинты до U+00A0 не имеют декомпозиций, их CCC = 0, они не комбинируются с предыдущими
pub const FIRST_DECOMPOSING_CODE: u32 = 0xA0;

lazy_static! {
    /// данные, построенные по встроенным в библиотеку файлам UCD
    static ref BUILTIN: NormalizationData =
        NormalizationData::from_ucd(&UcdFiles::builtin()).expect("встроенные данные UCD");
}

/// неизменяемые данные нормализации: строятся один раз, передаются по ссылке
/// в декомпозицию, композицию, быструю проверку и сравнение
#[derive(Debug, Clone)]
pub struct NormalizationData
{
    /// ненулевые классы канонического комбинирования
    ccc: HashMap<char, u8>,
    /// развернутые канонические декомпозиции (кроме слогов хангыль)
    canonical: HashMap<char, Box<[char]>>,
    /// развернутые декомпозиции совместимости (для всех кодпоинтов, имеющих какую-либо декомпозицию)
    compatibility: HashMap<char, Box<[char]>>,
    /// пары для комбинирования (кроме хангыль)
    compositions: HashMap<(char, char), char>,
    /// полный набор исключений композиции
    exclusions: HashSet<char>,
    /// кодпоинты, комбинируемые с предыдущими (кроме чамо хангыль)
    combines_backwards: HashSet<char>,
    /// свойства быстрых проверок
    quick_checks: HashMap<char, QuickCheckFlags>,
    /// полное приведение регистра
    case_folding: HashMap<char, Box<[char]>>,
    /// приведение регистра для тюркских языков
    turkic_folding: HashMap<char, char>,
}

impl NormalizationData
{
    /// данные, построенные по встроенным файлам UCD. строятся при первом обращении
    pub fn builtin() -> &'static NormalizationData
    {
        &BUILTIN
    }

    /// построить данные по файлам UCD
    pub fn from_ucd(files: &UcdFiles) -> Result<Self, DataError>
    {
        let unicode = unicode(&files.unicode_data)?;
        let explicit_exclusions = composition_exclusions(&files.composition_exclusions)?;
        let folding = case_folding(&files.case_folding)?;

        let ccc: HashMap<char, u8> = unicode
            .values()
            .filter(|e| e.ccc.is_non_starter())
            .filter_map(|e| char::from_u32(e.code).map(|c| (c, e.ccc.u8())))
            .collect();

        // развернутые декомпозиции

        let mut canonical = HashMap::new();
        let mut compatibility = HashMap::new();

        for entry in unicode.values().filter(|e| !e.decomposition.is_empty()) {
            let c = to_char(entry.code, entry.code)?;

            let compat = expansion::expand(entry.code, &unicode, false)?;

            if entry.decomposition_tag.is_none() {
                canonical.insert(c, expansion::expand(entry.code, &unicode, true)?.into_boxed_slice());
            }

            compatibility.insert(c, compat.into_boxed_slice());
        }

        debug!(
            target: "normalization_data",
            canonical = canonical.len(),
            compatibility = compatibility.len(),
            "decompositions expanded"
        );

        // исключения композиции: явно перечисленные + синглтоны + декомпозиции, начинающиеся с нестартера

        let ccc_of = |code: u32| unicode.get(&code).map_or(0, |e| e.ccc.u8());

        let mut exclusions = HashSet::new();

        for code in explicit_exclusions {
            exclusions.insert(to_char(code, code)?);
        }

        for entry in canonical_mappings(&unicode) {
            let singleton = entry.decomposition.len() == 1;
            let non_starter = entry.ccc.is_non_starter() || ccc_of(entry.decomposition[0]) != 0;

            if singleton || non_starter {
                exclusions.insert(to_char(entry.code, entry.code)?);
            }
        }

        // пары для композиции и кодпоинты, комбинируемые с предыдущими

        let mut compositions = HashMap::new();
        let mut combines_backwards = HashSet::new();

        for entry in canonical_mappings(&unicode).filter(|e| e.decomposition.len() == 2) {
            let composite = to_char(entry.code, entry.code)?;

            if exclusions.contains(&composite) {
                continue;
            }

            let first = to_char(entry.code, entry.decomposition[0])?;
            let second = to_char(entry.code, entry.decomposition[1])?;

            compositions.insert((first, second), composite);
            combines_backwards.insert(second);
        }

        debug!(
            target: "normalization_data",
            exclusions = exclusions.len(),
            compositions = compositions.len(),
            combines_backwards = combines_backwards.len(),
            "composition tables built"
        );

        // быстрые проверки

        let mut quick_checks: HashMap<char, QuickCheckFlags> = HashMap::new();

        for (&c, compat) in compatibility.iter() {
            let mut flags = QuickCheckFlags::NFKD_NO;

            let canonical_full = match canonical.get(&c) {
                Some(decomposition) => {
                    flags |= QuickCheckFlags::NFD_NO;
                    &decomposition[..]
                }
                None => core::slice::from_ref(&c),
            };

            if exclusions.contains(&c) {
                flags |= QuickCheckFlags::NFC_NO | QuickCheckFlags::NFKC_NO;
            }

            if &compat[..] != canonical_full {
                flags |= QuickCheckFlags::NFKC_NO;
            }

            quick_checks.insert(c, flags);
        }

        for &c in combines_backwards.iter() {
            let flags = quick_checks.entry(c).or_default();

            if !flags.contains(QuickCheckFlags::NFC_NO) {
                *flags |= QuickCheckFlags::NFC_MAYBE;
            }
            if !flags.contains(QuickCheckFlags::NFKC_NO) {
                *flags |= QuickCheckFlags::NFKC_MAYBE;
            }
        }

        // приведение регистра

        let mut case_folding = HashMap::new();
        let mut turkic_folding = HashMap::new();

        for (code, mapping) in folding.full {
            let folded = mapping
                .iter()
                .map(|&value| to_char(code, value))
                .collect::<Result<Vec<char>, _>>()?;

            case_folding.insert(to_char(code, code)?, folded.into_boxed_slice());
        }

        for (code, value) in folding.turkic {
            turkic_folding.insert(to_char(code, code)?, to_char(code, value)?);
        }

        info!(
            target: "normalization_data",
            codepoints = unicode.len(),
            quick_checks = quick_checks.len(),
            case_folding = case_folding.len(),
            "normalization data built"
        );

        Ok(Self {
            ccc,
            canonical,
            compatibility,
            compositions,
            exclusions,
            combines_backwards,
            quick_checks,
            case_folding,
            turkic_folding,
        })
    }

    /// класс канонического комбинирования
    #[inline(always)]
    pub fn ccc(&self, c: char) -> u8
    {
        if (c as u32) < FIRST_DECOMPOSING_CODE {
            return 0;
        }

        self.ccc.get(&c).copied().unwrap_or(0)
    }

    /// развернутая декомпозиция кодпоинта (без учета слогов хангыль)
    #[inline(always)]
    pub fn decomposition(&self, c: char, canonical: bool) -> Option<&[char]>
    {
        if (c as u32) < FIRST_DECOMPOSING_CODE {
            return None;
        }

        let decomposition = match canonical {
            true => self.canonical.get(&c),
            false => self.compatibility.get(&c),
        };

        decomposition.map(|d| &d[..])
    }

    /// записать декомпозицию кодпоинта (или сам кодпоинт, если декомпозиции нет)
    #[inline(always)]
    pub fn decompose(&self, c: char, canonical: bool, mut write: impl FnMut(char))
    {
        if let Some(decomposition) = self.decomposition(c, canonical) {
            decomposition.iter().for_each(|&c| write(c));
            return;
        }

        match hangul::is_syllable(c) {
            true => hangul::decompose(c, write),
            false => write(c),
        }
    }

    /// первичный композит пары кодпоинтов, включая слоги хангыль
    #[inline(always)]
    pub fn compose_pair(&self, first: char, second: char) -> Option<char>
    {
        if let Some(composite) = hangul::compose(first, second) {
            return Some(composite);
        }

        self.compositions.get(&(first, second)).copied()
    }

    /// исключение композиции: кодпоинт не может быть получен при комбинировании
    pub fn is_composition_exclusion(&self, c: char) -> bool
    {
        self.exclusions.contains(&c)
    }

    /// может ли кодпоинт скомбинироваться с предыдущим
    #[inline(always)]
    pub fn combines_backwards(&self, c: char) -> bool
    {
        if (c as u32) < FIRST_DECOMPOSING_CODE {
            return false;
        }

        hangul::is_vt(c) || self.combines_backwards.contains(&c)
    }

    /// свойства быстрых проверок кодпоинта
    #[inline(always)]
    pub fn quick_check_flags(&self, c: char) -> QuickCheckFlags
    {
        if (c as u32) < FIRST_DECOMPOSING_CODE {
            return QuickCheckFlags::empty();
        }

        if hangul::is_syllable(c) {
            return QuickCheckFlags::NFD_NO | QuickCheckFlags::NFKD_NO;
        }

        if hangul::is_vt(c) {
            return QuickCheckFlags::NFC_MAYBE | QuickCheckFlags::NFKC_MAYBE;
        }

        self.quick_checks.get(&c).copied().unwrap_or_default()
    }

    /// CCC первого кодпоинта канонической декомпозиции (FCD)
    #[inline(always)]
    pub fn lead_ccc(&self, c: char) -> u8
    {
        match self.decomposition(c, true) {
            Some(decomposition) => self.ccc(decomposition[0]),
            None => self.ccc(c),
        }
    }

    /// CCC последнего кодпоинта канонической декомпозиции (FCD)
    #[inline(always)]
    pub fn trail_ccc(&self, c: char) -> u8
    {
        match self.decomposition(c, true).and_then(|d| d.last()) {
            Some(&last) => self.ccc(last),
            None => self.ccc(c),
        }
    }

    /// полное приведение регистра кодпоинта. special_i - тюркские варианты I с точкой и без
    pub fn fold_case(&self, c: char, special_i: bool, mut write: impl FnMut(char))
    {
        if special_i {
            if let Some(&folded) = self.turkic_folding.get(&c) {
                write(folded);
                return;
            }
        }

        match self.case_folding.get(&c) {
            Some(folded) => folded.iter().for_each(|&c| write(c)),
            None => write(c),
        }
    }
}

/// канонические декомпозиции из UnicodeData.txt в сжатом виде
fn canonical_mappings(unicode: &HashMap<u32, UcdCodepoint>) -> impl Iterator<Item = &UcdCodepoint>
{
    unicode
        .values()
        .filter(|e| e.decomposition_tag.is_none() && !e.decomposition.is_empty())
}

/// значение из UCD в char
fn to_char(code: u32, value: u32) -> Result<char, DataError>
{
    char::from_u32(value).ok_or(DataError::InvalidMapping { code, value })
}
