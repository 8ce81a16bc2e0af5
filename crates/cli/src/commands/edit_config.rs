use std::path::Path;
use std::process::Command;

use anyhow::Context;

use crate::config::config_path;

const NEW_CONFIG_HEADER: &str = "# Regex tester settings (see -show-config for defaults)\n";

fn ensure_exists(path: &Path) -> anyhow::Result<()> {
    if path.exists() {
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }
    std::fs::write(path, NEW_CONFIG_HEADER).context("Failed to create config file")
}

pub fn run() {
    let Some(path) = config_path() else {
        eprintln!("Could not determine config directory");
        return;
    };

    if let Err(e) = ensure_exists(&path) {
        eprintln!("{:#}", e);
        return;
    }

    println!("Opening {}", path.display());

    // Try $EDITOR first, then platform-specific fallbacks
    if let Ok(editor) = std::env::var("EDITOR") {
        match Command::new(&editor).arg(&path).status() {
            Ok(s) if s.success() => return,
            Ok(_) => eprintln!("Editor exited with error"),
            Err(e) => eprintln!("Failed to run {}: {}", editor, e),
        }
    }

    #[cfg(target_os = "macos")]
    {
        let _ = Command::new("open").arg("-t").arg(&path).status();
    }

    #[cfg(target_os = "linux")]
    {
        if Command::new("xdg-open").arg(&path).status().is_err() {
            for editor in &["nano", "vim", "vi"] {
                if Command::new(editor).arg(&path).status().is_ok() {
                    return;
                }
            }
            log::warn!("no editor found for {}", path.display());
        }
    }

    #[cfg(target_os = "windows")]
    {
        let _ = Command::new("notepad").arg(&path).status();
    }
}
