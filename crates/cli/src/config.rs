use std::path::PathBuf;

/// Returns the path to the config file
pub fn config_path() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        dirs::config_dir().map(|p| p.join("regex-tester").join("config.txt"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        if let Ok(xdg_config_home) = std::env::var("XDG_CONFIG_HOME")
            && !xdg_config_home.trim().is_empty()
        {
            return Some(PathBuf::from(xdg_config_home).join("regex-tester").join("config.txt"));
        }
        dirs::home_dir().map(|p| p.join(".config").join("regex-tester").join("config.txt"))
    }
}

/// Iterates `(line_number, key, value)` over the settings in a config file,
/// skipping blank lines and comments. A line without `=` comes back whole as the
/// key with no value.
pub fn setting_lines(contents: &str) -> impl Iterator<Item = (usize, &str, Option<&str>)> {
    contents.lines().enumerate().filter_map(|(index, line)| {
        let trimmed = line.trim();

        // Skip comments and empty lines
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return None;
        }

        match trimmed.split_once('=') {
            Some((key, value)) => Some((index + 1, key.trim(), Some(value.trim()))),
            None => Some((index + 1, trimmed, None)),
        }
    })
}
