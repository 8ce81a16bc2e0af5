use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "regex-tester-cli")]
#[command(about = "Regex tester configuration and pattern tools", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    action: Option<Action>,
}

#[derive(Subcommand)]
enum Action {
    /// Show version information
    #[command(name = "-version")]
    Version,

    /// Show help and available actions
    #[command(name = "-help")]
    Help,

    /// Open config file in editor
    #[command(name = "-edit-config")]
    EditConfig,

    /// Display current configuration
    #[command(name = "-show-config")]
    ShowConfig,

    /// Validate configuration file
    #[command(name = "-validate-config")]
    ValidateConfig,

    /// Compile a pattern and report its capture groups or syntax error
    #[command(name = "-check-pattern")]
    CheckPattern {
        /// Pattern to compile
        pattern: String,

        /// Compile case-insensitively
        #[arg(short, long)]
        ignore_case: bool,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    match cli.action {
        Some(Action::Version) => commands::version::run(),
        Some(Action::Help) => commands::help::run(),
        Some(Action::EditConfig) => commands::edit_config::run(),
        Some(Action::ShowConfig) => commands::show_config::run(),
        Some(Action::ValidateConfig) => commands::validate_config::run(),
        Some(Action::CheckPattern {
            pattern,
            ignore_case,
        }) => commands::check_pattern::run(&pattern, ignore_case),
        None => {
            // No subcommand: show help
            commands::help::run();
        }
    }
}
