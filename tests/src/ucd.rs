use std::cmp::Ordering;
use std::collections::HashSet;

use unicode_normalization_source::NormalizationTest;
use unicode_normalization_source::NORMALIZATION_TESTS;
use unicode_normalizer::Comparator;
use unicode_normalizer::CompareOptions;
use unicode_normalizer::IsNormalized;
use unicode_normalizer::NormalizationForm;
use unicode_normalizer::Normalizer;

use crate::data::init_tracing;

macro_rules! test {
    ($left: expr, $right: expr, $normalizer: expr, $test: expr, $str: expr) => {
        assert_eq!(
            $left,
            $normalizer.normalize(&$right),
            $str,
            $test.line,
            $test.description
        );
    };
}

fn tests() -> &'static [NormalizationTest]
{
    &NORMALIZATION_TESTS
}

/// тесты NFC нормализации из UCD
#[test]
fn ucd_test_nfc()
{
    // c2 ==  toNFC(c1) ==  toNFC(c2) ==  toNFC(c3)
    // c4 ==  toNFC(c4) ==  toNFC(c5)

    init_tracing();

    let normalizer = Normalizer::nfc();

    for t in tests() {
        test!(t.c2, t.c1, normalizer, t, "{} {}: c2 == toNFC(c1)");
        test!(t.c2, t.c2, normalizer, t, "{} {}: c2 == toNFC(c2)");
        test!(t.c2, t.c3, normalizer, t, "{} {}: c2 == toNFC(c3)");
        test!(t.c4, t.c4, normalizer, t, "{} {}: c4 == toNFC(c4)");
        test!(t.c4, t.c5, normalizer, t, "{} {}: c4 == toNFC(c5)");
    }
}

/// тесты NFD нормализации из UCD
#[test]
fn ucd_test_nfd()
{
    // c3 ==  toNFD(c1) ==  toNFD(c2) ==  toNFD(c3)
    // c5 ==  toNFD(c4) ==  toNFD(c5)

    let normalizer = Normalizer::nfd();

    for t in tests() {
        test!(t.c3, t.c1, normalizer, t, "{} {}: c3 == toNFD(c1)");
        test!(t.c3, t.c2, normalizer, t, "{} {}: c3 == toNFD(c2)");
        test!(t.c3, t.c3, normalizer, t, "{} {}: c3 == toNFD(c3)");
        test!(t.c5, t.c4, normalizer, t, "{} {}: c5 == toNFD(c4)");
        test!(t.c5, t.c5, normalizer, t, "{} {}: c5 == toNFD(c5)");
    }
}

/// тесты NFKC нормализации из UCD
#[test]
fn ucd_test_nfkc()
{
    // c4 == toNFKC(c1) == toNFKC(c2) == toNFKC(c3) == toNFKC(c4) == toNFKC(c5)

    let normalizer = Normalizer::nfkc();

    for t in tests() {
        test!(t.c4, t.c1, normalizer, t, "{} {}: c4 == toNFKC(c1)");
        test!(t.c4, t.c2, normalizer, t, "{} {}: c4 == toNFKC(c2)");
        test!(t.c4, t.c3, normalizer, t, "{} {}: c4 == toNFKC(c3)");
        test!(t.c4, t.c4, normalizer, t, "{} {}: c4 == toNFKC(c4)");
        test!(t.c4, t.c5, normalizer, t, "{} {}: c4 == toNFKC(c5)");
    }
}

/// тесты NFKD нормализации из UCD
#[test]
fn ucd_test_nfkd()
{
    // c5 == toNFKD(c1) == toNFKD(c2) == toNFKD(c3) == toNFKD(c4) == toNFKD(c5)

    let normalizer = Normalizer::nfkd();

    for t in tests() {
        test!(t.c5, t.c1, normalizer, t, "{} {}: c5 == toNFKD(c1)");
        test!(t.c5, t.c2, normalizer, t, "{} {}: c5 == toNFKD(c2)");
        test!(t.c5, t.c3, normalizer, t, "{} {}: c5 == toNFKD(c3)");
        test!(t.c5, t.c4, normalizer, t, "{} {}: c5 == toNFKD(c4)");
        test!(t.c5, t.c5, normalizer, t, "{} {}: c5 == toNFKD(c5)");
    }
}

/// кодпоинты, не перечисленные в Part1, не меняются ни в одной форме.
/// слоги хангыль во встроенный файл не включены
#[test]
fn ucd_test_unlisted()
{
    let listed: HashSet<&str> = tests()
        .iter()
        .filter(|t| t.part.starts_with("@Part1"))
        .map(|t| t.c1.as_str())
        .collect();

    let normalizers = [Normalizer::nfc(), Normalizer::nfd(), Normalizer::nfkc(), Normalizer::nfkd()];

    for c in (0 ..= 0x10FFFF).filter_map(char::from_u32) {
        if ('\u{AC00}' ..= '\u{D7A3}').contains(&c) {
            continue;
        }

        let s = c.to_string();

        if listed.contains(s.as_str()) {
            continue;
        }

        for normalizer in normalizers {
            assert_eq!(normalizer.normalize(&s), s, "{}: U+{:04X}", normalizer.form(), c as u32);
        }
    }
}

/// быстрая проверка согласована с нормализацией
#[test]
fn quick_check_consistency()
{
    let normalizers = [
        Normalizer::nfc(),
        Normalizer::nfd(),
        Normalizer::nfkc(),
        Normalizer::nfkd(),
        Normalizer::fcd(),
    ];

    for t in tests() {
        for s in [&t.c1, &t.c2, &t.c3, &t.c4, &t.c5] {
            for normalizer in normalizers {
                let normalized = normalizer.normalize_chars(s.chars()).into_iter().collect::<String>();

                match normalizer.quick_check(s) {
                    IsNormalized::Yes => assert_eq!(&normalized, s, "{} {}", normalizer.form(), t.line),
                    IsNormalized::No => assert_ne!(&normalized, s, "{} {}", normalizer.form(), t.line),
                    IsNormalized::Maybe => {
                        assert!(normalizer.form().is_composing(), "{} {}", normalizer.form(), t.line)
                    }
                }

                assert_eq!(normalizer.is_normalized(s), &normalized == s, "{} {}", normalizer.form(), t.line);
            }
        }
    }
}

/// итератор возвращает ту же последовательность, что и нормализация всей строки,
/// в обоих направлениях
#[test]
fn iterator_equivalence()
{
    init_tracing();

    for form in [
        NormalizationForm::Nfc,
        NormalizationForm::Nfd,
        NormalizationForm::Nfkc,
        NormalizationForm::Nfkd,
        NormalizationForm::Fcd,
    ] {
        let mut normalizer = Normalizer::nfc();
        normalizer.set_form(form);

        for t in tests() {
            let expected: Vec<char> = normalizer.normalize(&t.c1).chars().collect();
            let mut iter = normalizer.iter(&t.c1);

            let mut forward = vec![];

            while let Some(c) = iter.next() {
                forward.push(c);
            }

            assert_eq!(forward, expected, "{} {}: forward", form, t.line);

            let mut backward = vec![];

            while let Some(c) = iter.previous() {
                backward.push(c);
            }

            backward.reverse();

            assert_eq!(backward, expected, "{} {}: backward", form, t.line);
        }
    }
}

/// нормализованная конкатенация равна нормализации конкатенации
#[test]
fn concatenation()
{
    let normalizers = [Normalizer::nfc(), Normalizer::nfd(), Normalizer::nfkc(), Normalizer::nfkd()];

    for t in tests().iter().filter(|t| t.c1.chars().count() > 1) {
        let split = t.c1.char_indices().nth(t.c1.chars().count() / 2).map_or(0, |(i, _)| i);
        let (left, right) = t.c1.split_at(split);

        for normalizer in normalizers {
            assert_eq!(
                normalizer.concatenate(left, right),
                normalizer.normalize(&t.c1),
                "{} {}",
                normalizer.form(),
                t.line
            );
        }
    }
}

/// строки теста канонически эквивалентны, быстрый путь сравнения совпадает с полной декомпозицией
#[test]
fn canonical_comparison()
{
    let comparator = Comparator::builtin();

    for t in tests() {
        for options in [CompareOptions::empty(), CompareOptions::CODE_POINT_ORDER] {
            assert_eq!(comparator.compare(&t.c1, &t.c3, options), Ordering::Equal, "{}", t.line);
            assert_eq!(comparator.compare(&t.c2, &t.c3, options), Ordering::Equal, "{}", t.line);
            assert_eq!(comparator.compare(&t.c4, &t.c5, options), Ordering::Equal, "{}", t.line);

            assert_eq!(
                comparator.compare(&t.c1, &t.c5, options),
                comparator.compare_decomposed(&t.c1, &t.c5, options),
                "{}",
                t.line
            );
            assert_eq!(
                comparator.compare(&t.c2, &t.c4, options),
                comparator.compare_decomposed(&t.c2, &t.c4, options),
                "{}",
                t.line
            );
        }
    }
}
