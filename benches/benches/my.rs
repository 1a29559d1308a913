use criterion::{criterion_group, criterion_main};
use unicode_normalizer::Normalizer;
use unicode_normalizer_benches::group;

group!("./../test_data/texts", nfc, test_nfc, "nfc", "my", Normalizer<'static>, Normalizer::nfc());
group!("./../test_data/texts", nfkc, test_nfkc, "nfkc", "my", Normalizer<'static>, Normalizer::nfkc());
group!("./../test_data/texts", nfd, test_nfd, "nfd", "my", Normalizer<'static>, Normalizer::nfd());
group!("./../test_data/texts", nfkd, test_nfkd, "nfkd", "my", Normalizer<'static>, Normalizer::nfkd());

group!(
    "./../test_data/texts_decomposed",
    dec,
    test_dec,
    "dec",
    "my",
    Normalizer<'static>,
    Normalizer::nfc()
);

criterion_group!(benches, nfc, nfkc, nfd, nfkd, dec);
criterion_main!(benches);
