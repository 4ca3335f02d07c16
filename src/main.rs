// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, Context};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, info, warn};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use crate::app_config::{API_KEY_ENV_VAR, Config, LogLevel};
use crate::heuristics::{AcceptanceChecks, DEFAULT_MAX_LENGTH_RATIO, default_known_bad_outputs};
use crate::processor::{CatalogProcessor, RunStats};
use crate::providers::openai::OpenAiClient;

mod app_config;
mod catalog;
mod errors;
mod heuristics;
mod language_utils;
mod processor;
mod providers;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

fn level_filter(level: &LogLevel) -> LevelFilter {
    match level {
        LogLevel::Error => LevelFilter::Error,
        LogLevel::Warn => LevelFilter::Warn,
        LogLevel::Info => LevelFilter::Info,
        LogLevel::Debug => LevelFilter::Debug,
        LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for potrans
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// potrans - fill in missing translations of a gettext .po catalog
///
/// Reads a catalog file, translates every entry whose msgstr is still
/// empty through an AI backend, and writes a fresh output file in which
/// every untouched line is preserved exactly.
#[derive(Parser, Debug)]
#[command(name = "potrans")]
#[command(version = "0.1.0")]
#[command(about = "AI-powered gettext catalog translation tool")]
#[command(long_about = "potrans reads a gettext .po catalog and fills in the missing msgstr
entries using an OpenAI-compatible chat-completions backend. Entries that
already carry a translation are never touched, and every line outside the
recognized msgid/msgstr shapes passes through verbatim.

EXAMPLES:
    potrans -i app.po -o app.es.po -t es            # Translate into Spanish
    potrans -i app.po -o out.po -t zh-CN -m gpt-4o  # Pick a model
    potrans -i app.po -o out.po --api-key sk-...    # Explicit credential
    potrans completions bash > potrans.bash          # Shell completions

CONFIGURATION:
    Defaults can be kept in a JSON config file (see --config); command-line
    flags override file values. The API key falls back to the OPENAI_API_KEY
    environment variable when not given explicitly.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input .po catalog file to translate
    #[arg(short, long, value_name = "INPUT_FILE")]
    input: Option<PathBuf>,

    /// Output path for the translated catalog (never written in place)
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    output: Option<PathBuf>,

    /// Target language code (e.g. 'es', 'zh-CN')
    #[arg(short, long)]
    target_lang: Option<String>,

    /// Model name to use for translation
    #[arg(short, long)]
    model: Option<String>,

    /// API key (falls back to the OPENAI_API_KEY environment variable)
    #[arg(long, env = API_KEY_ENV_VAR, hide_env_values = true)]
    api_key: Option<String>,

    /// Chat-completions endpoint URL (OpenAI-compatible servers)
    #[arg(long)]
    endpoint: Option<String>,

    /// Configuration file path
    #[arg(short, long = "config", default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:5} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default;
    // the level is updated after the config is loaded
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "potrans", &mut std::io::stdout());
        return Ok(());
    }

    run_translate(cli).await
}

async fn run_translate(options: CommandLineOptions) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_level: LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&config_level));
    }

    // Load configuration file if one exists, otherwise start from defaults
    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        let file = File::open(config_path)
            .with_context(|| format!("Failed to open config file: {}", config_path))?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {}", config_path))?
    } else {
        Config::default()
    };

    // Override config with CLI options if provided
    if let Some(target_lang) = &options.target_lang {
        config.target_language = target_lang.clone();
    }
    if let Some(model) = &options.model {
        config.model = model.clone();
    }
    if let Some(api_key) = &options.api_key {
        config.api_key = api_key.clone();
    }
    if let Some(endpoint) = &options.endpoint {
        config.endpoint = endpoint.clone();
    }
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // Validate after loading and overriding; a missing credential aborts here
    config
        .validate()
        .context("Configuration validation failed")?;

    // If log level was not set via command line, apply the config value now
    if options.log_level.is_none() {
        log::set_max_level(level_filter(&config.log_level));
    }

    let input = options
        .input
        .ok_or_else(|| anyhow::anyhow!("--input is required"))?;
    let output = options
        .output
        .ok_or_else(|| anyhow::anyhow!("--output is required"))?;

    if !input.is_file() {
        return Err(anyhow::anyhow!("Input file does not exist: {:?}", input));
    }
    if input == output {
        return Err(anyhow::anyhow!(
            "Output path must differ from the input path; the input is never rewritten in place"
        ));
    }

    // Config file may extend the built-in known-bad output set
    let mut known_bad = default_known_bad_outputs();
    for extra in &config.known_bad_outputs {
        known_bad.insert(extra.clone());
    }
    let checks = AcceptanceChecks::new(known_bad, DEFAULT_MAX_LENGTH_RATIO);

    let client = OpenAiClient::with_endpoint(
        config.api_key.as_str(),
        config.model.as_str(),
        config.endpoint.as_str(),
    )?;
    let processor =
        CatalogProcessor::new(&client, config.target_language.clone()).with_checks(checks);

    info!(
        "Translating {:?} into {} using {}",
        input, config.target_language, config.model
    );

    let stats = processor.process_file(&input, &output).await?;

    if stats == RunStats::default() {
        warn!("No catalog entries were found in {:?}", input);
    }
    info!("Finished: {:?}", output);
    println!("{}", stats);

    Ok(())
}
