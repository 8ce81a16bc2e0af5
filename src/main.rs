mod config;
mod output;
mod request;

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use regex_tester_engine::Engine;

use config::{AppConfig, OutputFormat};
use output::Report;
use request::FormInput;

#[derive(Parser)]
#[command(name = "regex-tester")]
#[command(about = "Test a regular expression against a string and highlight the matches", long_about = None)]
#[command(version)]
struct Args {
    /// Regular expression to test
    pattern: String,

    /// Text to search; read from stdin when omitted and no --subject-file is given
    #[arg(conflicts_with = "subject_file")]
    subject: Option<String>,

    /// Read the text to search from a file
    #[arg(long, value_name = "PATH")]
    subject_file: Option<PathBuf>,

    /// Match case-insensitively
    #[arg(short, long)]
    ignore_case: bool,

    /// Report only the first match
    #[arg(long, conflicts_with = "global")]
    first: bool,

    /// Report every match
    #[arg(short, long)]
    global: bool,

    /// Keep leading and trailing whitespace of the pattern and text
    #[arg(long)]
    no_trim: bool,

    /// Output format: text, html or json
    #[arg(long, value_parser = parse_format)]
    format: Option<OutputFormat>,

    /// Use this config file instead of the default one
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn parse_format(value: &str) -> Result<OutputFormat, String> {
    OutputFormat::from_str(value).ok_or_else(|| format!("unknown format '{}'", value))
}

impl Args {
    fn global_search(&self) -> Option<bool> {
        if self.first {
            Some(false)
        } else if self.global {
            Some(true)
        } else {
            None
        }
    }

    fn read_subject(&self) -> anyhow::Result<String> {
        if let Some(subject) = &self.subject {
            return Ok(subject.clone());
        }

        if let Some(path) = &self.subject_file {
            return std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()));
        }

        let mut subject = String::new();
        std::io::stdin()
            .read_to_string(&mut subject)
            .context("failed to read text from stdin")?;
        Ok(subject)
    }
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();

    let args = Args::parse();
    let app_config = match &args.config {
        Some(path) => AppConfig::load_from(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => AppConfig::load_or_create(),
    };

    let form = FormInput {
        pattern: args.pattern.clone(),
        subject: args.read_subject()?,
        ignore_case: args.ignore_case.then_some(true),
        global_search: args.global_search(),
        trim: args.no_trim.then_some(false),
    };

    let report = match form.into_request(&app_config) {
        Ok(request) => {
            let engine = Engine::new(app_config.engine_config());
            let result = engine.evaluate(&request);
            Report::from_result(&request.subject, &result)
        }
        Err(message) => Report::from_error(message),
    };

    let format = args.format.unwrap_or(app_config.output);
    print!("{}", report.format(format)?);

    Ok(if report.is_error() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
