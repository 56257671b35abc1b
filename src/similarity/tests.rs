use super::*;

const PAIRS: &[(&str, &str)] = &[
    ("Rolex", "Rolex"),
    ("Rolex", "Omega"),
    ("Submariner Date", "Submariner"),
    ("kitten", "sitting"),
    ("Oystersteel", "904L stainless steel"),
    ("sapphire, anti-reflective coating", "sapphire crystal with AR coating"),
    ("black", ""),
    ("Patek Philippe", "patek  philippe"),
];

#[test]
fn test_normalize_trims_and_lowercases() {
    assert_eq!(normalize("  Rolex SA "), "rolex sa");
    assert_eq!(normalize("\tGMT-Master II\n"), "gmt-master ii");
}

#[test]
fn test_identical_after_normalization_is_one() {
    for mode in [
        SimilarityMode::JaroWinkler,
        SimilarityMode::Levenshtein,
        SimilarityMode::Auto,
    ] {
        assert_eq!(calculate_string_score("Rolex", "  rolex ", mode), 1.0);
        assert_eq!(
            calculate_string_score(
                "brushed and polished stainless steel",
                "Brushed and Polished Stainless Steel",
                mode
            ),
            1.0
        );
    }
}

#[test]
fn test_empty_input_scores_zero() {
    assert_eq!(calculate_string_score("", "Rolex", SimilarityMode::Auto), 0.0);
    assert_eq!(calculate_string_score("Rolex", "   ", SimilarityMode::Auto), 0.0);
    assert_eq!(calculate_string_score("", "", SimilarityMode::JaroWinkler), 0.0);
    assert_eq!(optional_string_score(None, Some("Rolex"), SimilarityMode::Auto), 0.0);
}

#[test]
fn test_levenshtein_similarity_known_value() {
    let score = levenshtein_similarity("kitten", "sitting");
    assert!((score - (1.0 - 3.0 / 7.0)).abs() < 1e-9, "got {}", score);
}

#[test]
fn test_jaro_winkler_favors_shared_prefix() {
    let score = jaro_winkler_similarity("Submariner Date", "Submariner");
    assert!(score > 0.9, "got {}", score);

    let unrelated = jaro_winkler_similarity("Submariner", "Speedmaster");
    assert!(score > unrelated);
}

#[test]
fn test_auto_uses_jaro_winkler_for_short_values() {
    assert_eq!(
        SimilarityMode::Auto.resolve("kitten", "sitting"),
        SimilarityMode::JaroWinkler
    );
    assert_eq!(
        calculate_string_score("kitten", "sitting", SimilarityMode::Auto),
        jaro_winkler_similarity("kitten", "sitting")
    );
}

#[test]
fn test_auto_uses_levenshtein_for_long_values() {
    let a = "brushed and polished stainless steel";
    let b = "polished stainless steel, brushed links";
    assert_eq!(
        SimilarityMode::Auto.resolve(a, b),
        SimilarityMode::Levenshtein
    );
    assert_eq!(
        calculate_string_score(a, b, SimilarityMode::Auto),
        levenshtein_similarity(a, b)
    );
}

#[test]
fn test_concrete_modes_resolve_to_themselves() {
    assert_eq!(
        SimilarityMode::Levenshtein.resolve("a", "b"),
        SimilarityMode::Levenshtein
    );
    assert_eq!(
        SimilarityMode::JaroWinkler.resolve(&"x".repeat(40), &"y".repeat(40)),
        SimilarityMode::JaroWinkler
    );
}

#[test]
fn test_scores_are_symmetric() {
    for (a, b) in PAIRS {
        for mode in [
            SimilarityMode::JaroWinkler,
            SimilarityMode::Levenshtein,
            SimilarityMode::Auto,
        ] {
            assert_eq!(
                calculate_string_score(a, b, mode),
                calculate_string_score(b, a, mode),
                "asymmetric for ({:?}, {:?}) under {:?}",
                a,
                b,
                mode
            );
        }
    }
}

#[test]
fn test_scores_stay_in_unit_range() {
    for (a, b) in PAIRS {
        for mode in [
            SimilarityMode::JaroWinkler,
            SimilarityMode::Levenshtein,
            SimilarityMode::Auto,
        ] {
            let score = calculate_string_score(a, b, mode);
            assert!((0.0..=1.0).contains(&score), "{} out of range", score);
        }
    }
}

#[test]
fn test_mode_serializes_kebab_case() {
    let json = serde_json::to_string(&SimilarityMode::JaroWinkler).unwrap();
    assert_eq!(json, "\"jaro-winkler\"");
    let mode: SimilarityMode = serde_json::from_str("\"auto\"").unwrap();
    assert_eq!(mode, SimilarityMode::Auto);
}
