//! Password strength criteria, evaluated on every keystroke.

use derive_more::Display;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::config::ValidationConfig;

/// Characters accepted by the special character criterion
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

/// One password sub-rule. Displays as the id of its indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum Criterion {
    #[display("lengthCriteria")]
    Length,
    #[display("upperCaseCriteria")]
    UpperCase,
    #[display("lowerCaseCriteria")]
    LowerCase,
    #[display("specialCharCriteria")]
    SpecialChar,
}

impl Criterion {
    /// Human readable requirement, e.g. "an uppercase letter"
    pub fn describe(self, config: &ValidationConfig) -> String {
        match self {
            Criterion::Length => format!(
                "between {} and {} characters",
                config.password_min_length, config.password_max_length
            ),
            Criterion::UpperCase => "an uppercase letter".to_string(),
            Criterion::LowerCase => "a lowercase letter".to_string(),
            Criterion::SpecialChar => format!("a special character ({SPECIAL_CHARACTERS})"),
        }
    }

    fn is_met(self, config: &ValidationConfig, password: &str) -> bool {
        match self {
            Criterion::Length => config.password_length().contains(&password.chars().count()),
            Criterion::UpperCase => password.chars().any(|c| c.is_ascii_uppercase()),
            Criterion::LowerCase => password.chars().any(|c| c.is_ascii_lowercase()),
            Criterion::SpecialChar => password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CriterionResult {
    pub criterion: Criterion,
    pub valid: bool,
}

/// Evaluates every criterion against `password`.
///
/// Always returns one result per criterion, in the order length,
/// uppercase, lowercase, special character. Criteria are independent:
/// a failing one never stops the others from being evaluated.
pub fn check_password_criteria(config: &ValidationConfig, password: &str) -> Vec<CriterionResult> {
    Criterion::iter()
        .map(|criterion| CriterionResult {
            criterion,
            valid: criterion.is_met(config, password),
        })
        .collect()
}

pub fn all_criteria_met(results: &[CriterionResult]) -> bool {
    results.iter().all(|result| result.valid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(password: &str) -> Vec<bool> {
        check_password_criteria(&ValidationConfig::default(), password)
            .iter()
            .map(|result| result.valid)
            .collect()
    }

    #[test]
    fn test_results_are_complete_and_ordered() {
        let long = "é".repeat(100);
        let passwords = vec!["", "a", "Abcdef1!", "ALLCAPS", long.as_str()];

        for password in passwords {
            let results = check_password_criteria(&ValidationConfig::default(), password);
            let order: Vec<Criterion> = results.iter().map(|result| result.criterion).collect();
            assert_eq!(
                order,
                vec![
                    Criterion::Length,
                    Criterion::UpperCase,
                    Criterion::LowerCase,
                    Criterion::SpecialChar
                ],
                "Unexpected criteria order for {:?}",
                password
            );
        }
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let config = ValidationConfig::default();
        for password in ["Secret1!", "weak", ""] {
            assert_eq!(
                check_password_criteria(&config, password),
                check_password_criteria(&config, password)
            );
        }
    }

    #[test]
    fn test_each_criterion_is_independent() {
        let test_cases = vec![
            // (password, [length, upper, lower, special])
            ("", [false, false, false, false]),
            ("Abcdef1!", [true, true, true, true]),
            ("abcdef12", [true, false, true, false]),
            ("ABCDEFGH", [true, true, false, false]),
            ("A!b", [false, true, true, true]),
            ("!!!!!!!!", [true, false, false, true]),
        ];

        for (password, expected) in test_cases {
            assert_eq!(check(password), expected, "Password '{}' gave unexpected criteria", password);
        }
    }

    #[test]
    fn test_length_boundaries() {
        let config = ValidationConfig::default();
        let length = |password: &str| check_password_criteria(&config, password)[0].valid;

        assert!(!length(&"a".repeat(7)));
        assert!(length(&"a".repeat(8)));
        assert!(length(&"a".repeat(64)));
        assert!(!length(&"a".repeat(65)));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 8 characters, 16 bytes
        assert!(check("éééééééé")[0]);
    }

    #[test]
    fn test_length_follows_config() {
        let config = ValidationConfig::default().with_password_length(4, 6);
        let results = check_password_criteria(&config, "Ab1!");
        assert!(results[0].valid);
        assert!(!check_password_criteria(&config, "Abcd1!x")[0].valid);
    }

    #[test]
    fn test_only_listed_characters_are_special() {
        assert!(!check("Abcdefg-")[3], "'-' is not a special character");
        assert!(!check("Abcdefg_")[3], "'_' is not a special character");
        for special in SPECIAL_CHARACTERS.chars() {
            assert!(check(&format!("Abcdefg{special}"))[3], "'{}' was not accepted", special);
        }
    }

    #[test]
    fn test_non_ascii_letters_do_not_count_as_case() {
        assert_eq!(check("ÉÉÉÉÉÉÉÉ"), vec![true, false, false, false]);
    }

    #[test]
    fn test_all_criteria_met() {
        let config = ValidationConfig::default();
        assert!(all_criteria_met(&check_password_criteria(&config, "Secret1!")));
        assert!(!all_criteria_met(&check_password_criteria(&config, "secret1!")));
    }

    #[test]
    fn test_criterion_ids() {
        let ids: Vec<String> = Criterion::iter().map(|criterion| criterion.to_string()).collect();
        assert_eq!(
            ids,
            vec!["lengthCriteria", "upperCaseCriteria", "lowerCaseCriteria", "specialCharCriteria"]
        );
    }
}
