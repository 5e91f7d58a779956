use unicode_normalization::char::canonical_combining_class;
use unicode_normalizing::ComposingNormalizer;
use unicode_normalizing::DecomposingNormalizer;

use crate::data;

/// тексты + образцы
fn corpus() -> Vec<String>
{
    let mut corpus: Vec<String> = data::files().into_iter().map(|(_, text)| text).collect();

    corpus.extend(data::SAMPLES.iter().map(|sample| sample.to_string()));

    corpus
}

/// повторная нормализация не меняет строку
#[test]
fn idempotence()
{
    let nfd = DecomposingNormalizer::nfd();
    let nfkd = DecomposingNormalizer::nfkd();
    let nfc = ComposingNormalizer::nfc();
    let nfkc = ComposingNormalizer::nfkc();

    for source in corpus() {
        let result = nfd.normalize(&source);
        assert_eq!(result, nfd.normalize(&result), "nfd, {:?}", source);

        let result = nfkd.normalize(&source);
        assert_eq!(result, nfkd.normalize(&result), "nfkd, {:?}", source);

        let result = nfc.normalize(&source);
        assert_eq!(result, nfc.normalize(&result), "nfc, {:?}", source);

        let result = nfkc.normalize(&source);
        assert_eq!(result, nfkc.normalize(&result), "nfkc, {:?}", source);
    }
}

/// в NF(K)D не остаётся пар нестартеров, нарушающих порядок CCC
#[test]
fn decomposition_is_canonically_ordered()
{
    let nfd = DecomposingNormalizer::nfd();
    let nfkd = DecomposingNormalizer::nfkd();

    for source in corpus() {
        for result in [nfd.normalize(&source), nfkd.normalize(&source)] {
            let mut previous = 0;

            for char in result.chars() {
                let ccc = canonical_combining_class(char);

                assert!(
                    ccc == 0 || previous <= ccc,
                    "нарушен порядок CCC: {:?} -> {:?}",
                    source,
                    result
                );

                previous = ccc;
            }
        }
    }
}

/// NFC(NFD(s)) == NFC(s), NFD(NFC(s)) == NFD(s)
#[test]
fn composition_round_trip()
{
    let nfd = DecomposingNormalizer::nfd();
    let nfc = ComposingNormalizer::nfc();

    for source in corpus() {
        assert_eq!(
            nfc.normalize(&nfd.normalize(&source)),
            nfc.normalize(&source),
            "{:?}",
            source
        );
        assert_eq!(
            nfd.normalize(&nfc.normalize(&source)),
            nfd.normalize(&source),
            "{:?}",
            source
        );
    }
}

/// ASCII-строки уже нормализованы во всех формах
#[test]
fn ascii_fixed_point()
{
    let source: String = (0 .. 0x80_u32).map(|code| char::from_u32(code).unwrap()).collect();

    assert_eq!(DecomposingNormalizer::nfd().normalize(&source), source);
    assert_eq!(DecomposingNormalizer::nfkd().normalize(&source), source);
    assert_eq!(ComposingNormalizer::nfc().normalize(&source), source);
    assert_eq!(ComposingNormalizer::nfkc().normalize(&source), source);
}

/// декомпозиция / композиция всех слогов хангыль
#[test]
fn hangul_block()
{
    let nfd = DecomposingNormalizer::nfd();
    let nfkd = DecomposingNormalizer::nfkd();
    let nfc = ComposingNormalizer::nfc();

    for code in 0xAC00_u32 ..= 0xD7A3 {
        let syllable = char::from_u32(code).unwrap().to_string();

        // ожидаемая декомпозиция по алгоритму из спецификации Unicode (3.12)

        let lvt = code - 0xAC00;

        let l = char::from_u32(0x1100 + lvt / 588).unwrap();
        let v = char::from_u32(0x1161 + (lvt % 588) / 28).unwrap();
        let t = lvt % 28;

        let mut expected = String::new();
        expected.push(l);
        expected.push(v);

        if t != 0 {
            expected.push(char::from_u32(0x11A7 + t).unwrap());
        }

        let decomposed = nfd.normalize(&syllable);

        assert_eq!(decomposed, expected, "U+{:04X}", code);
        assert_eq!(nfkd.normalize(&syllable), expected, "U+{:04X}", code);
        assert_eq!(nfc.normalize(&decomposed), syllable, "U+{:04X}", code);
    }
}
