use criterion::{criterion_group, criterion_main};
use unicode_normalizing::ComposingNormalizer;
use unicode_normalizing::DecomposingNormalizer;


group!("./../test_data/texts", nfd, "nfd", DecomposingNormalizer::nfd());
group!("./../test_data/texts", nfkd, "nfkd", DecomposingNormalizer::nfkd());
group!("./../test_data/texts", nfc, "nfc", ComposingNormalizer::nfc());
group!("./../test_data/texts", nfkc, "nfkc", ComposingNormalizer::nfkc());

criterion_group!(benches, nfd, nfkd, nfc, nfkc);
criterion_main!(benches);
