use regex::{Regex, RegexBuilder};

use crate::error::{EngineError, EngineResult};

/// Matches the `regex` crate's own default for compiled program size.
pub const DEFAULT_SIZE_LIMIT: usize = 10 * (1 << 20);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileOptions {
    pub ignore_case: bool,
    pub size_limit: usize,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            ignore_case: false,
            size_limit: DEFAULT_SIZE_LIMIT,
        }
    }
}

/// A compiled pattern, owned by the call that produced it.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    regex: Regex,
}

impl CompiledPattern {
    pub fn new(pattern: &str, options: &CompileOptions) -> EngineResult<Self> {
        if pattern.trim().is_empty() {
            return Err(EngineError::EmptyPattern);
        }

        match RegexBuilder::new(pattern)
            .case_insensitive(options.ignore_case)
            .size_limit(options.size_limit)
            .build()
        {
            Ok(regex) => {
                log::trace!(
                    "compiled pattern {:?} with {} capture groups",
                    pattern,
                    regex.captures_len() - 1
                );
                Ok(Self { regex })
            }
            Err(e) => {
                log::debug!("pattern {:?} failed to compile: {}", pattern, e);
                Err(EngineError::Pattern(e.to_string()))
            }
        }
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Number of capturing groups, not counting the implicit whole-match group.
    pub fn group_count(&self) -> usize {
        self.regex.captures_len() - 1
    }

    /// Names of the capturing groups in declaration order; `None` for unnamed groups.
    pub fn group_names(&self) -> Vec<Option<String>> {
        self.regex
            .capture_names()
            .skip(1)
            .map(|name| name.map(str::to_string))
            .collect()
    }

    pub(crate) fn regex(&self) -> &Regex {
        &self.regex
    }
}

pub fn compile(pattern: &str, ignore_case: bool) -> EngineResult<CompiledPattern> {
    CompiledPattern::new(
        pattern,
        &CompileOptions {
            ignore_case,
            ..CompileOptions::default()
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_pattern() {
        assert_eq!(compile("", false).unwrap_err(), EngineError::EmptyPattern);
    }

    #[test]
    fn test_whitespace_only_pattern() {
        assert_eq!(compile("  \t\n", false).unwrap_err(), EngineError::EmptyPattern);
    }

    #[test]
    fn test_invalid_regex() {
        let err = compile("(unclosed", false).unwrap_err();
        match err {
            EngineError::Pattern(message) => {
                assert!(message.contains("unclosed group"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_escape() {
        let err = compile(r"\q", false).unwrap_err();
        assert!(matches!(err, EngineError::Pattern(ref m) if !m.is_empty()));
    }

    #[test]
    fn test_case_insensitive() {
        let pattern = compile("HELLO", true).unwrap();
        assert!(pattern.regex().is_match("Hello World"));

        let pattern = compile("HELLO", false).unwrap();
        assert!(!pattern.regex().is_match("Hello World"));
    }

    #[test]
    fn test_group_names() {
        let pattern = compile(r"(?P<year>\d{4})-(\d{2})", false).unwrap();
        assert_eq!(pattern.group_count(), 2);
        assert_eq!(pattern.group_names(), vec![Some("year".to_string()), None]);
    }

    #[test]
    fn test_size_limit_exceeded() {
        let options = CompileOptions {
            ignore_case: false,
            size_limit: 16,
        };
        let err = CompiledPattern::new(r"\w{100}", &options).unwrap_err();
        assert!(matches!(err, EngineError::Pattern(ref m) if !m.is_empty()));
    }

    #[test]
    fn test_pattern_is_not_trimmed() {
        let pattern = compile(" a ", false).unwrap();
        assert_eq!(pattern.as_str(), " a ");
        assert!(!pattern.regex().is_match("a"));
    }
}
