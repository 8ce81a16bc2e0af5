//! Turns raw form-style input into an engine request.

use regex_tester_engine::{SearchMode, SearchRequest};

use crate::config::AppConfig;

/// Raw fields as the user submitted them.
#[derive(Debug, Clone, Default)]
pub struct FormInput {
    pub pattern: String,
    pub subject: String,
    pub ignore_case: Option<bool>,
    pub global_search: Option<bool>,
    pub trim: Option<bool>,
}

impl FormInput {
    /// Applies the caller-side policy: trimming and flag defaults from `config`.
    /// Rejects subjects over the configured length with a user-facing message.
    pub fn into_request(self, config: &AppConfig) -> Result<SearchRequest, String> {
        let trim = self.trim.unwrap_or(config.trim_input);
        let (pattern, subject) = if trim {
            (self.pattern.trim().to_string(), self.subject.trim().to_string())
        } else {
            (self.pattern, self.subject)
        };

        if config.max_subject_length > 0 && subject.len() > config.max_subject_length {
            return Err(format!(
                "Test string is too long (max {} bytes).",
                config.max_subject_length
            ));
        }

        let ignore_case = self.ignore_case.unwrap_or(config.ignore_case);
        let global_search = self.global_search.unwrap_or(config.global_search);

        Ok(SearchRequest::new(pattern, subject)
            .ignore_case(ignore_case)
            .mode(SearchMode::from_exhaustive(global_search)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(pattern: &str, subject: &str) -> FormInput {
        FormInput {
            pattern: pattern.to_string(),
            subject: subject.to_string(),
            ..FormInput::default()
        }
    }

    #[test]
    fn trims_both_fields_by_default() {
        let request = input("  a+ ", "\tbanana \n").into_request(&AppConfig::default()).unwrap();
        assert_eq!(request.pattern, "a+");
        assert_eq!(request.subject, "banana");
        assert_eq!(request.mode, SearchMode::Exhaustive);
        assert!(!request.ignore_case);
    }

    #[test]
    fn no_trim_keeps_whitespace() {
        let mut form = input(" a ", " b ");
        form.trim = Some(false);
        let request = form.into_request(&AppConfig::default()).unwrap();
        assert_eq!(request.pattern, " a ");
        assert_eq!(request.subject, " b ");
    }

    #[test]
    fn explicit_flags_override_config() {
        let config = AppConfig {
            ignore_case: true,
            global_search: true,
            ..AppConfig::default()
        };
        let mut form = input("a", "b");
        form.ignore_case = Some(false);
        form.global_search = Some(false);

        let request = form.into_request(&config).unwrap();
        assert!(!request.ignore_case);
        assert_eq!(request.mode, SearchMode::FirstOnly);
    }

    #[test]
    fn long_subject_rejected() {
        let config = AppConfig {
            max_subject_length: 4,
            ..AppConfig::default()
        };
        let err = input("a", "banana").into_request(&config).unwrap_err();
        assert!(err.contains("too long"));
    }
}
