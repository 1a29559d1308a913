use criterion::{criterion_group, criterion_main};
use icu_normalizer::{ComposingNormalizer, DecomposingNormalizer};
use unicode_normalizer_benches::group;

group!("./../test_data/texts", nfc, test_nfc, "nfc", "icu", ComposingNormalizer, ComposingNormalizer::new_nfc());
group!("./../test_data/texts", nfkc, test_nfkc, "nfkc", "icu", ComposingNormalizer, ComposingNormalizer::new_nfkc());
group!("./../test_data/texts", nfd, test_nfd, "nfd", "icu", DecomposingNormalizer, DecomposingNormalizer::new_nfd());
group!("./../test_data/texts", nfkd, test_nfkd, "nfkd", "icu", DecomposingNormalizer, DecomposingNormalizer::new_nfkd());

group!(
    "./../test_data/texts_decomposed",
    dec,
    test_dec,
    "dec",
    "icu",
    ComposingNormalizer,
    ComposingNormalizer::new_nfc()
);

criterion_group!(benches, nfc, nfkc, nfd, nfkd, dec);
criterion_main!(benches);
