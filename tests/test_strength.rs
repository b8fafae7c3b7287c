use rpwgen::charset::{GenerationOptions, build_alphabet};
use rpwgen::passgen::sample;
use rpwgen::randsource::PseudoSource;
use rpwgen::strength::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_password_scores_zero() {
        let s = score("");
        assert_eq!(s.value, 0);
        assert_eq!(s.band, StrengthBand::Empty);
        assert_eq!(s.label(), "No password generated");
        assert_eq!(s.color(), "transparent");
    }

    #[test]
    fn test_repeated_lowercase() {
        // 40 + 10 + 1.5 = 51.5 -> 52
        let s = score("aaaaaaaaaa");
        assert_eq!(s.value, 52);
        assert_eq!(s.band, StrengthBand::Weak);
    }

    #[test]
    fn test_single_character() {
        // 4 + 10 + 15
        let s = score("a");
        assert_eq!(s.value, 29);
        assert_eq!(s.band, StrengthBand::VeryWeak);
    }

    #[test]
    fn test_short_password_with_every_class() {
        // 16 + 10 + 10 + 10 + 15 + 15
        let s = score("Ab1!");
        assert_eq!(s.value, 76);
        assert_eq!(s.band, StrengthBand::Good);
    }

    #[test]
    fn test_maximum_score() {
        let s = score("Abcdefghij1!");
        assert_eq!(s.value, 100);
        assert_eq!(s.band, StrengthBand::Strong);
        assert_eq!(s.color(), "#28a745");
    }

    #[test]
    fn test_score_is_not_pinned_to_100() {
        // 修正后的截断不会让所有非空密码都得满分
        assert!(score("abc").value < 100);
        assert!(score("1111").value < 100);
    }

    #[test]
    fn test_rounding_reaches_band_boundary() {
        // 16 + 10 + 3.75 = 29.75 -> 30
        let s = score("AAAA");
        assert_eq!(s.value, 30);
        assert_eq!(s.band, StrengthBand::Weak);
    }

    #[test]
    fn test_length_bonus_is_capped() {
        // 40 + 10 + 0.75 = 50.75 -> 51
        assert_eq!(score(&"a".repeat(20)).value, 51);
    }

    #[test]
    fn test_non_ascii_counts_as_symbol() {
        // 8 + 15 + 15
        assert_eq!(score("éé").value, 8 + 15 + 8);
        assert_eq!(score("é€").value, 8 + 15 + 15);
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(StrengthBand::from_score(0), StrengthBand::Empty);
        assert_eq!(StrengthBand::from_score(1), StrengthBand::VeryWeak);
        assert_eq!(StrengthBand::from_score(29), StrengthBand::VeryWeak);
        assert_eq!(StrengthBand::from_score(30), StrengthBand::Weak);
        assert_eq!(StrengthBand::from_score(59), StrengthBand::Weak);
        assert_eq!(StrengthBand::from_score(60), StrengthBand::Good);
        assert_eq!(StrengthBand::from_score(79), StrengthBand::Good);
        assert_eq!(StrengthBand::from_score(80), StrengthBand::Strong);
        assert_eq!(StrengthBand::from_score(100), StrengthBand::Strong);
    }

    #[test]
    fn test_band_labels_and_colors() {
        assert_eq!(StrengthBand::VeryWeak.label(), "Very weak");
        assert_eq!(StrengthBand::VeryWeak.color(), "#dc3545");
        assert_eq!(StrengthBand::Weak.color(), "#fd7e14");
        assert_eq!(StrengthBand::Good.label(), "Good");
        assert_eq!(StrengthBand::Good.color(), "#ffc107");
    }

    #[test]
    fn test_describe() {
        assert_eq!(describe(&score("aaaaaaaaaa")), "Password strength: Weak (52%)");
        assert_eq!(describe(&StrengthScore::new(0)), "Password strength: No password generated (0%)");
    }

    #[test]
    fn test_generated_passwords_stay_in_range_and_are_deterministic() {
        let alphabet = build_alphabet(&GenerationOptions::default()).unwrap();
        let mut source = PseudoSource::from_seed(99);
        for length in 1..=48 {
            let password = sample(&alphabet, length, &mut source);
            let first = score(password.as_str());
            assert!(first.value >= 1 && first.value <= 100);
            assert_eq!(first, score(password.as_str()));
        }
    }

    #[test]
    fn test_confusing_chars() {
        assert_eq!(confusing_chars("Il1oO0x"), vec!['l', '1', 'o', 'O', '0']);
        assert!(confusing_chars("ABC234").is_empty());
    }
}
