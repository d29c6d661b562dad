//! DFA specification tool.

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use dfa_cli::commands::{run_format, run_request, run_sample, run_suggest, run_validate};
use dfa_cli::config::load_options;
use dfa_cli::logging::{LogConfig, LogFormat, init_logging};
use dfa_cli::summary::{print_suggestion, print_validation};

mod cli;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<i32> {
    let options = load_options(cli.config.as_deref())?;
    match &cli.command {
        Command::Validate { file } => {
            let report = run_validate(file, &options)?;
            print_validation(&report);
            Ok(if report.is_valid() { 0 } else { 1 })
        }
        Command::Format { file, output } => {
            let text = run_format(file, output.as_deref(), &options)?;
            if output.is_none() {
                println!("{text}");
            }
            Ok(0)
        }
        Command::Suggest { file, kind } => {
            let suggestion = run_suggest(file, *kind, &options)?;
            print_suggestion(*kind, suggestion.as_ref());
            Ok(if suggestion.is_some() { 0 } else { 1 })
        }
        Command::Sample { name } => {
            println!("{}", run_sample(*name)?);
            Ok(0)
        }
        Command::Request(args) => {
            println!("{}", run_request(&args.file, &args.metadata(), &options)?);
            Ok(0)
        }
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
