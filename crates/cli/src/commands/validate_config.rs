use regex_tester_engine::is_valid_tag;

use crate::config::{config_path, setting_lines};

const VALID_KEYS: &[&str] = &[
    "ignore_case",
    "global_search",
    "global",
    "trim_input",
    "output",
    "highlight_tag",
    "match_timeout_ms",
    "size_limit",
    "max_subject_length",
];

const VALID_OUTPUTS: &[&str] = &["text", "plain", "html", "json"];

const BOOL_VALUES: &[&str] = &["true", "false", "1", "0", "yes", "no", "on", "off"];

const MAX_MATCH_TIMEOUT_MS: u64 = 60_000;

#[derive(Debug, Default, PartialEq, Eq)]
struct Validation {
    errors: Vec<String>,
    warnings: Vec<String>,
}

fn validate(contents: &str) -> Validation {
    let mut validation = Validation::default();

    for (line_num, key, value) in setting_lines(contents) {
        let Some(value) = value else {
            validation.errors.push(format!(
                "Line {}: Invalid syntax. Expected 'key = value'",
                line_num
            ));
            continue;
        };

        let key = key.to_ascii_lowercase();
        if !VALID_KEYS.contains(&key.as_str()) {
            validation
                .warnings
                .push(format!("Line {}: Unknown key '{}'", line_num, key));
            continue;
        }

        match key.as_str() {
            "ignore_case" | "global_search" | "global" | "trim_input" => {
                if !BOOL_VALUES.contains(&value.to_ascii_lowercase().as_str()) {
                    validation.errors.push(format!(
                        "Line {}: {} must be 'true' or 'false'",
                        line_num, key
                    ));
                }
            }
            "output" => {
                if !VALID_OUTPUTS.contains(&value.to_ascii_lowercase().as_str()) {
                    validation.errors.push(format!(
                        "Line {}: Unknown output '{}'. Valid outputs: text, html, json",
                        line_num, value
                    ));
                }
            }
            "highlight_tag" => {
                let tag = value.trim_matches(|c| c == '"' || c == '\'');
                if !is_valid_tag(tag) {
                    validation.errors.push(format!(
                        "Line {}: highlight_tag must contain only letters and digits",
                        line_num
                    ));
                }
            }
            "match_timeout_ms" => match value.parse::<u64>() {
                Ok(ms) if ms > MAX_MATCH_TIMEOUT_MS => validation.warnings.push(format!(
                    "Line {}: match_timeout_ms is capped at {}",
                    line_num, MAX_MATCH_TIMEOUT_MS
                )),
                Ok(_) => {}
                Err(_) => validation.errors.push(format!(
                    "Line {}: match_timeout_ms must be a non-negative integer",
                    line_num
                )),
            },
            "size_limit" | "max_subject_length" => {
                if value.parse::<usize>().is_err() {
                    validation.errors.push(format!(
                        "Line {}: {} must be a non-negative integer",
                        line_num, key
                    ));
                }
            }
            _ => {}
        }
    }

    validation
}

pub fn run() {
    let path = match config_path() {
        Some(p) => p,
        None => {
            eprintln!("Could not determine config directory");
            std::process::exit(1);
        }
    };

    println!("Config file: {}", path.display());

    if !path.exists() {
        println!("Status: File does not exist (using defaults)");
        println!("Result: Valid");
        return;
    }

    let contents = match std::fs::read_to_string(&path) {
        Ok(c) => c,
        Err(e) => {
            println!("Status: Failed to read file");
            println!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let Validation { errors, warnings } = validate(&contents);

    if errors.is_empty() && warnings.is_empty() {
        println!("Status: Valid");
        return;
    }

    if !errors.is_empty() {
        println!();
        println!("Errors:");
        for error in &errors {
            println!("  {}", error);
        }
    }

    if !warnings.is_empty() {
        println!();
        println!("Warnings:");
        for warning in &warnings {
            println!("  {}", warning);
        }
    }

    println!();
    if errors.is_empty() {
        println!("Result: Valid (with warnings)");
    } else {
        println!("Result: Invalid");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_file_has_no_findings() {
        let validation = validate(
            "# settings\n\
             ignore_case = yes\n\
             output = html\n\
             highlight_tag = \"em\"\n\
             match_timeout_ms = 100\n",
        );
        assert_eq!(validation, Validation::default());
    }

    #[test]
    fn unknown_keys_are_warnings() {
        let validation = validate("theme = dark\n");
        assert!(validation.errors.is_empty());
        assert_eq!(validation.warnings, vec!["Line 1: Unknown key 'theme'"]);
    }

    #[test]
    fn bad_values_are_errors() {
        let validation = validate(
            "global_search = sometimes\n\
             output = pdf\n\
             highlight_tag = b onclick\n\
             size_limit = big\n\
             no separator here\n",
        );
        assert_eq!(validation.errors.len(), 5);
        assert!(validation.errors[0].starts_with("Line 1: global_search"));
        assert!(validation.errors[4].contains("Invalid syntax"));
    }

    #[test]
    fn oversized_timeout_is_warning() {
        let validation = validate("match_timeout_ms = 120000\n");
        assert!(validation.errors.is_empty());
        assert_eq!(validation.warnings.len(), 1);
    }
}
