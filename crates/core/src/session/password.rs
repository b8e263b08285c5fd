//! Password strength scoring

use reciclo_domain::constants::{MIN_REGISTRATION_PASSWORD_SCORE, PASSWORD_MIN_LENGTH};
use serde::Serialize;

/// Strength score (0-5) and its label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PasswordStrength {
    pub score: u8,
    pub label: &'static str,
}

impl PasswordStrength {
    /// One point each for: minimum length, a lowercase letter, an uppercase
    /// letter, a digit, and any other character.
    pub fn evaluate(password: &str) -> Self {
        let checks = [
            password.chars().count() >= PASSWORD_MIN_LENGTH,
            password.chars().any(|c| c.is_ascii_lowercase()),
            password.chars().any(|c| c.is_ascii_uppercase()),
            password.chars().any(|c| c.is_ascii_digit()),
            password.chars().any(|c| !c.is_ascii_alphanumeric()),
        ];
        let score = checks.iter().filter(|passed| **passed).count() as u8;

        Self { score, label: label_for(score) }
    }

    /// Whether the score is enough to register
    pub fn is_acceptable(&self) -> bool {
        self.score >= MIN_REGISTRATION_PASSWORD_SCORE
    }
}

fn label_for(score: u8) -> &'static str {
    match score {
        0 => "Muito fraca",
        1 | 2 => "Fraca",
        3 => "Média",
        4 => "Forte",
        _ => "Muito forte",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_and_labels() {
        let cases = [
            ("", 0, "Muito fraca"),
            ("abc", 1, "Fraca"),
            ("abcdefgh", 2, "Fraca"),
            ("Abcdefgh", 3, "Média"),
            ("Abcdef12", 4, "Forte"),
            ("Abcdef1!", 5, "Muito forte"),
        ];
        for (password, score, label) in cases {
            let strength = PasswordStrength::evaluate(password);
            assert_eq!(strength.score, score, "score for {password:?}");
            assert_eq!(strength.label, label, "label for {password:?}");
        }
    }

    #[test]
    fn non_ascii_counts_as_symbol() {
        assert_eq!(PasswordStrength::evaluate("ção").score, 2);
    }

    #[test]
    fn acceptance_threshold() {
        assert!(!PasswordStrength::evaluate("abc").is_acceptable());
        assert!(PasswordStrength::evaluate("Abcdef12").is_acceptable());
    }
}
