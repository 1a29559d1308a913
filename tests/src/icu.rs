use icu_normalizer::ComposingNormalizer;
use icu_normalizer::DecomposingNormalizer;
use unicode_normalizer::Normalizer;

use crate::data::files;
use crate::data::TEXTS;
use crate::data::TEXTS_DECOMPOSED;

/// сравниваем с результатами нормализации ICU
#[test]
fn icu()
{
    let icu_nfc = ComposingNormalizer::new_nfc();
    let icu_nfkc = ComposingNormalizer::new_nfkc();
    let icu_nfd = DecomposingNormalizer::new_nfd();
    let icu_nfkd = DecomposingNormalizer::new_nfkd();

    let nfc = Normalizer::nfc();
    let nfkc = Normalizer::nfkc();
    let nfd = Normalizer::nfd();
    let nfkd = Normalizer::nfkd();

    for dir in [TEXTS, TEXTS_DECOMPOSED] {
        for data in files(dir) {
            let text = data.1.as_str();

            assert_eq!(nfc.normalize(text), icu_nfc.normalize(text), "nfc,  {}", data.0);
            assert_eq!(nfkc.normalize(text), icu_nfkc.normalize(text), "nfkc, {}", data.0);
            assert_eq!(nfd.normalize(text), icu_nfd.normalize(text), "nfd,  {}", data.0);
            assert_eq!(nfkd.normalize(text), icu_nfkd.normalize(text), "nfkd, {}", data.0);

            assert_eq!(nfc.is_normalized(text), icu_nfc.is_normalized(text), "nfc,  {}", data.0);
            assert_eq!(nfd.is_normalized(text), icu_nfd.is_normalized(text), "nfd,  {}", data.0);
        }
    }
}

/// тексты в NFD совпадают с декомпозицией исходных текстов
#[test]
fn decomposed_texts()
{
    let nfc = Normalizer::nfc();
    let nfd = Normalizer::nfd();

    let texts = files(TEXTS);
    let decomposed = files(TEXTS_DECOMPOSED);

    assert_eq!(texts.len(), decomposed.len());

    for (source, decomposed) in texts.iter().zip(decomposed.iter()) {
        assert_eq!(source.0, decomposed.0);
        assert_eq!(nfd.normalize(&source.1), decomposed.1, "{}", source.0);
        assert_eq!(nfc.normalize(&decomposed.1), source.1, "{}", source.0);
    }
}
