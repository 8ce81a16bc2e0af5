pub fn run() {
    println!("Available commands:");
    println!();
    println!("  -version                  Show version information");
    println!("  -help                     Show this help message");
    println!("  -edit-config              Open config file in editor");
    println!("  -show-config              Display current configuration");
    println!("  -validate-config          Validate configuration file");
    println!("  -check-pattern <PATTERN>  Compile a pattern and list its capture groups");
}
