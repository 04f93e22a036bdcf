//! Golden tests for Vietnamese normalization.
//!
//! A corpus of representative inputs with their exact expected readings,
//! exercising the full pipeline end to end.

use vinorm::Normalizer;
use vinorm_core::{DictionarySource, NormalizeOptions, NormalizerConfig, TextNormalizer};

/// Test case structure for golden tests.
struct GoldenTestCase {
    input: &'static str,
    expected: &'static str,
    description: &'static str,
}

const GOLDEN_TESTS: &[GoldenTestCase] = &[
    GoldenTestCase {
        input: "Hôm nay là 25/12/2023",
        expected: "hôm nay là ngày hai mươi lăm tháng mười hai năm hai nghìn không trăm hai mươi ba",
        description: "Full date",
    },
    GoldenTestCase {
        input: "Sinh ngày 2/9/1945",
        expected: "sinh ngày hai tháng chín năm một nghìn chín trăm bốn mươi lăm",
        description: "Birth date with prefix",
    },
    GoldenTestCase {
        input: "từ ngày 20-25/11",
        expected: "từ ngày hai mươi đến hai mươi lăm tháng mười một",
        description: "Day range",
    },
    GoldenTestCase {
        input: "Nhiệt độ tăng 3-5% trong năm nay",
        expected: "nhiệt độ tăng ba đến năm phần trăm trong năm nay",
        description: "Percentage range wins over date range",
    },
    GoldenTestCase {
        input: "Cuộc họp lúc 14:30",
        expected: "cuộc họp lúc mười bốn giờ ba mươi phút",
        description: "Clock time",
    },
    GoldenTestCase {
        input: "Giá 1.500.000 đồng",
        expected: "giá một triệu năm trăm nghìn đồng",
        description: "Thousand separators plus currency",
    },
    GoldenTestCase {
        input: "50% dân số",
        expected: "năm mươi phần trăm dân số",
        description: "Whole percentage",
    },
    GoldenTestCase {
        input: "gọi 0912345678",
        expected: "gọi không chín một hai ba bốn năm sáu bảy tám",
        description: "Phone number read digit by digit",
    },
    GoldenTestCase {
        input: "đạt 7,27 điểm",
        expected: "đạt bảy phẩy hai bảy điểm",
        description: "Decimal read digit by digit",
    },
    GoldenTestCase {
        input: "nặng 10kg",
        expected: "nặng mười ki-lô-gam",
        description: "Measurement unit",
    },
    GoldenTestCase {
        input: "thứ 2 tuần sau",
        expected: "thứ hai tuần sau",
        description: "Ordinal",
    },
    GoldenTestCase {
        input: "chương IV",
        expected: "chương bốn",
        description: "Roman numeral",
    },
    GoldenTestCase {
        input: "liên hệ qua admin@example.com nhé",
        expected: "liên hệ qua nhé",
        description: "E-mail stripped without a stray a còng",
    },
    GoldenTestCase {
        input: "Tăng trưởng GDP đạt 6,5% năm 2023",
        expected: "tăng trưởng gdp đạt sáu phẩy năm phần trăm năm hai nghìn không trăm hai mươi ba",
        description: "Vowel-less acronym passes through untouched",
    },
    GoldenTestCase {
        input: "dùng database",
        expected: "dùng đa-ta-bâi",
        description: "Residual foreign word transliterated",
    },
];

#[test]
fn golden_corpus() {
    let normalizer = Normalizer::new();
    for case in GOLDEN_TESTS {
        let actual = normalizer.normalize(case.input).unwrap();
        assert_eq!(
            actual, case.expected,
            "{}: input {:?}",
            case.description, case.input
        );
    }
}

#[test]
fn worded_output_is_stable() {
    // Re-normalizing already-worded text must not change it. Hyphenated
    // transliterations are excluded: the cleanup stage splits free-standing
    // hyphens by design.
    let normalizer = Normalizer::new();
    for case in GOLDEN_TESTS {
        if case.expected.contains('-') {
            continue;
        }
        assert_eq!(
            normalizer.normalize(case.expected).unwrap(),
            case.expected,
            "unstable output for {}",
            case.description
        );
    }
}

#[test]
fn preprocessing_disabled_keeps_numeric_spans() {
    let normalizer = Normalizer::new();
    let opts = NormalizeOptions {
        enable_preprocessing: false,
        enable_transliteration: false,
    };
    let out = normalizer
        .normalize_with("Hôm nay  là  25/12/2023", &opts)
        .unwrap();
    assert_eq!(out, "hôm nay là 25/12/2023");
}

#[test]
fn dictionary_applies_before_transliteration() {
    let config = NormalizerConfig {
        options: NormalizeOptions::default(),
        dictionaries: DictionarySource::inline(
            [("CEO", "xi i ô")],
            [("internet", "in-tơ-nét")],
        ),
    };
    let normalizer = Normalizer::with_config(config).unwrap();

    // Both words would transliterate differently; the tables win.
    assert_eq!(
        normalizer.normalize("CEO dùng internet").unwrap(),
        "xi i ô dùng in-tơ-nét"
    );
}

#[test]
fn mixed_sentence_everything_at_once() {
    let normalizer = Normalizer::new();
    let out = normalizer
        .normalize("Lúc 8h ngày 2/9, giá $50 tăng 10%")
        .unwrap();
    assert_eq!(
        out,
        "lúc tám giờ ngày hai tháng chín, giá năm mươi đô la tăng mười phần trăm"
    );
}
