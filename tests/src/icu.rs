use icu_normalizer::ComposingNormalizer as IcuComposing;
use icu_normalizer::DecomposingNormalizer as IcuDecomposing;
use unicode_normalizing::ComposingNormalizer;
use unicode_normalizing::DecomposingNormalizer;

/// сравниваем с результатами нормализации ICU
#[test]
fn icu()
{
    let icu_nfd = IcuDecomposing::new_nfd();
    let icu_nfkd = IcuDecomposing::new_nfkd();
    let icu_nfc = IcuComposing::new_nfc();
    let icu_nfkc = IcuComposing::new_nfkc();

    let nfd = DecomposingNormalizer::nfd();
    let nfkd = DecomposingNormalizer::nfkd();
    let nfc = ComposingNormalizer::nfc();
    let nfkc = ComposingNormalizer::nfkc();

    for (name, text) in crate::data::files() {
        assert_eq!(nfd.normalize(&text), icu_nfd.normalize(&text), "nfd, {}", name);
        assert_eq!(nfkd.normalize(&text), icu_nfkd.normalize(&text), "nfkd, {}", name);
        assert_eq!(nfc.normalize(&text), icu_nfc.normalize(&text), "nfc, {}", name);
        assert_eq!(nfkc.normalize(&text), icu_nfkc.normalize(&text), "nfkc, {}", name);
    }

    for sample in crate::data::SAMPLES {
        assert_eq!(nfd.normalize(sample), icu_nfd.normalize(sample), "nfd, {:?}", sample);
        assert_eq!(nfkd.normalize(sample), icu_nfkd.normalize(sample), "nfkd, {:?}", sample);
        assert_eq!(nfc.normalize(sample), icu_nfc.normalize(sample), "nfc, {:?}", sample);
        assert_eq!(nfkc.normalize(sample), icu_nfkc.normalize(sample), "nfkc, {:?}", sample);
    }
}
