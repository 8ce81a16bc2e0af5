use std::{
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};

use regex_tester_engine::{DEFAULT_HIGHLIGHT_TAG, DEFAULT_SIZE_LIMIT, EngineConfig, HighlightRenderer, is_valid_tag};

const MAX_MATCH_TIMEOUT_MS: u64 = 60_000;
const MIN_SIZE_LIMIT: usize = 1 << 10;
const MAX_SIZE_LIMIT: usize = 1 << 30;

const DEFAULT_CONFIG: &str = "# Regex tester settings\n\
# Match case-insensitively by default\n\
ignore_case = false\n\
# Report every match (true) or only the first one (false)\n\
global_search = true\n\
# Strip leading/trailing whitespace from the pattern and subject\n\
trim_input = true\n\
# Output format: text, html or json\n\
output = text\n\
# Tag wrapped around highlighted matches (letters and digits only)\n\
# highlight_tag = mark\n\
# Abort matching after this many milliseconds (0 = no limit, max 60000)\n\
# match_timeout_ms = 0\n\
# Maximum compiled pattern size in bytes\n\
# size_limit = 10485760\n\
# Reject subjects longer than this many bytes (0 = unlimited)\n\
# max_subject_length = 0\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
    Json,
}

impl OutputFormat {
    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" | "plain" => Some(Self::Text),
            "html" => Some(Self::Html),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub ignore_case: bool,
    pub global_search: bool,
    pub trim_input: bool,
    pub output: OutputFormat,
    pub highlight_tag: String,
    pub match_timeout_ms: u64,
    pub size_limit: usize,
    pub max_subject_length: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ignore_case: false,
            global_search: true,
            trim_input: true,
            output: OutputFormat::default(),
            highlight_tag: DEFAULT_HIGHLIGHT_TAG.to_string(),
            match_timeout_ms: 0,
            size_limit: DEFAULT_SIZE_LIMIT,
            max_subject_length: 0,
        }
    }
}

impl AppConfig {
    pub fn load_or_create() -> Self {
        let mut config = Self::default();
        let Some(path) = ensure_config_file() else {
            log::warn!("could not determine config path, using defaults");
            return config;
        };

        match fs::read_to_string(&path) {
            Ok(contents) => config = Self::from_contents(&contents),
            Err(e) => log::warn!("failed to read {}: {}", path.display(), e),
        }

        config
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(Self::from_contents(&contents))
    }

    fn from_contents(contents: &str) -> Self {
        let mut config = Self::default();
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut parts = line.splitn(2, '=');
            let key = parts.next().unwrap_or("").trim();
            let value = parts.next().unwrap_or("").trim();

            if key.eq_ignore_ascii_case("ignore_case") {
                if let Some(ignore_case) = parse_bool(value) {
                    config.ignore_case = ignore_case;
                }
            }

            if key.eq_ignore_ascii_case("global_search") || key.eq_ignore_ascii_case("global") {
                if let Some(global_search) = parse_bool(value) {
                    config.global_search = global_search;
                }
            }

            if key.eq_ignore_ascii_case("trim_input") {
                if let Some(trim_input) = parse_bool(value) {
                    config.trim_input = trim_input;
                }
            }

            if key.eq_ignore_ascii_case("output") {
                if let Some(output) = OutputFormat::from_str(value) {
                    config.output = output;
                }
            }

            if key.eq_ignore_ascii_case("highlight_tag")
                && let Some(tag) = parse_string_value(value)
                && is_valid_tag(&tag)
            {
                config.highlight_tag = tag;
            }

            if key.eq_ignore_ascii_case("match_timeout_ms") {
                if let Ok(timeout) = value.parse::<u64>() {
                    config.match_timeout_ms = timeout.min(MAX_MATCH_TIMEOUT_MS);
                }
            }

            if key.eq_ignore_ascii_case("size_limit") {
                if let Ok(size_limit) = value.parse::<usize>() {
                    config.size_limit = size_limit.clamp(MIN_SIZE_LIMIT, MAX_SIZE_LIMIT);
                }
            }

            if key.eq_ignore_ascii_case("max_subject_length") {
                if let Ok(length) = value.parse::<usize>() {
                    config.max_subject_length = length;
                }
            }
        }

        config
    }

    pub fn match_timeout(&self) -> Option<Duration> {
        (self.match_timeout_ms > 0).then(|| Duration::from_millis(self.match_timeout_ms))
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            size_limit: self.size_limit,
            match_timeout: self.match_timeout(),
            renderer: HighlightRenderer::with_tag(&self.highlight_tag).unwrap_or_default(),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_string_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    let unquoted = if trimmed.len() >= 2
        && ((trimmed.starts_with('"') && trimmed.ends_with('"'))
            || (trimmed.starts_with('\'') && trimmed.ends_with('\'')))
    {
        &trimmed[1..trimmed.len() - 1]
    } else {
        trimmed
    };

    let unquoted = unquoted.trim();
    if unquoted.is_empty() {
        return None;
    }

    Some(unquoted.to_string())
}

pub fn ensure_config_file() -> Option<PathBuf> {
    let path = config_path()?;
    if !path.exists() {
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        if let Err(e) = fs::write(&path, DEFAULT_CONFIG) {
            log::warn!("failed to write default config to {}: {}", path.display(), e);
        }
    }
    Some(path)
}

fn config_path() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        if let Ok(app_data) = env::var("APPDATA")
            && !app_data.trim().is_empty()
        {
            return Some(Path::new(&app_data).join("regex-tester").join("config.txt"));
        }
    }

    if let Ok(xdg_config_home) = env::var("XDG_CONFIG_HOME")
        && !xdg_config_home.trim().is_empty()
    {
        return Some(Path::new(&xdg_config_home).join("regex-tester/config.txt"));
    }

    if let Ok(home) = env::var("HOME")
        && !home.trim().is_empty()
    {
        return Some(Path::new(&home).join(".config/regex-tester/config.txt"));
    }

    env::current_dir()
        .ok()
        .map(|dir| dir.join(".config/regex-tester/config.txt"))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{AppConfig, DEFAULT_CONFIG, OutputFormat};

    #[test]
    fn defaults_match_form_defaults() {
        let config = AppConfig::from_contents("");
        assert!(!config.ignore_case);
        assert!(config.global_search);
        assert!(config.trim_input);
        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.highlight_tag, "mark");
        assert!(config.match_timeout().is_none());
    }

    #[test]
    fn default_config_file_parses_to_defaults() {
        let config = AppConfig::from_contents(DEFAULT_CONFIG);
        let defaults = AppConfig::default();
        assert_eq!(config.ignore_case, defaults.ignore_case);
        assert_eq!(config.global_search, defaults.global_search);
        assert_eq!(config.trim_input, defaults.trim_input);
        assert_eq!(config.output, defaults.output);
    }

    #[test]
    fn flags_and_output_parse() {
        let config = AppConfig::from_contents(
            "# comment\n\
             IGNORE_CASE = yes\n\
             global = off\n\
             trim_input = 0\n\
             output = JSON\n",
        );

        assert!(config.ignore_case);
        assert!(!config.global_search);
        assert!(!config.trim_input);
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn invalid_values_keep_defaults() {
        let config = AppConfig::from_contents(
            "ignore_case = maybe\n\
             output = pdf\n\
             match_timeout_ms = soon\n",
        );

        assert!(!config.ignore_case);
        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.match_timeout_ms, 0);
    }

    #[test]
    fn highlight_tag_rejects_markup() {
        let quoted = AppConfig::from_contents("highlight_tag = \"em\"\n");
        assert_eq!(quoted.highlight_tag, "em");

        let injected = AppConfig::from_contents("highlight_tag = b onclick=alert(1)\n");
        assert_eq!(injected.highlight_tag, "mark");
    }

    #[test]
    fn match_timeout_parses_and_clamps() {
        let custom = AppConfig::from_contents("match_timeout_ms = 250\n");
        assert_eq!(custom.match_timeout(), Some(Duration::from_millis(250)));

        let clamped = AppConfig::from_contents("match_timeout_ms = 999999\n");
        assert_eq!(clamped.match_timeout_ms, 60_000);
    }

    #[test]
    fn size_limit_parses_and_clamps() {
        let defaults = AppConfig::from_contents("");
        assert_eq!(defaults.size_limit, 10 * (1 << 20));

        let clamped_low = AppConfig::from_contents("size_limit = 5\n");
        assert_eq!(clamped_low.size_limit, 1024);

        let clamped_high = AppConfig::from_contents("size_limit = 99999999999\n");
        assert_eq!(clamped_high.size_limit, 1 << 30);
    }

    #[test]
    fn engine_config_carries_settings() {
        let config = AppConfig::from_contents(
            "highlight_tag = strong\n\
             match_timeout_ms = 10\n",
        );
        let engine = config.engine_config();
        assert_eq!(engine.renderer.open_marker(), "<strong>");
        assert_eq!(engine.match_timeout, Some(Duration::from_millis(10)));
    }
}
