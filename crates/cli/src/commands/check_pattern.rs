use regex_tester_engine::{CompiledPattern, compile};

fn describe(pattern: &CompiledPattern) -> Vec<String> {
    let mut lines = vec![match pattern.group_count() {
        1 => "Valid pattern with 1 capture group".to_string(),
        n => format!("Valid pattern with {} capture groups", n),
    }];

    for (index, name) in pattern.group_names().into_iter().enumerate() {
        match name {
            Some(name) => lines.push(format!("  group {}: {}", index + 1, name)),
            None => lines.push(format!("  group {}", index + 1)),
        }
    }

    lines
}

pub fn run(pattern: &str, ignore_case: bool) {
    match compile(pattern, ignore_case) {
        Ok(compiled) => {
            for line in describe(&compiled) {
                println!("{}", line);
            }
        }
        Err(e) => {
            println!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
