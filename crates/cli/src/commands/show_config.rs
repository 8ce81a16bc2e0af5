use crate::config::config_path;

pub fn run() {
    let path = match config_path() {
        Some(p) => p,
        None => {
            eprintln!("Could not determine config directory");
            return;
        }
    };

    if !path.exists() {
        println!("# Config file: {} (not created yet)", path.display());
        println!("# Using default configuration");
        println!();
        print_defaults();
        return;
    }

    println!("# Config file: {}", path.display());
    println!();

    match std::fs::read_to_string(&path) {
        Ok(contents) => {
            if contents.lines().all(|l| l.trim().is_empty() || l.trim().starts_with('#')) {
                println!("# (no settings - using defaults)");
                println!();
                print_defaults();
            } else {
                print!("{}", contents);
                if !contents.ends_with('\n') {
                    println!();
                }
            }
        }
        Err(e) => {
            eprintln!("Failed to read config file: {}", e);
        }
    }
}

fn print_defaults() {
    println!("# Default values:");
    println!("ignore_case = false");
    println!("global_search = true");
    println!("trim_input = true");
    println!("output = text");
    println!("highlight_tag = {}", regex_tester_engine::DEFAULT_HIGHLIGHT_TAG);
    println!("match_timeout_ms = 0");
    println!("size_limit = {}", regex_tester_engine::DEFAULT_SIZE_LIMIT);
    println!("max_subject_length = 0");
}
