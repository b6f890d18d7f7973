// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::{env, ffi::OsString, path::PathBuf};

use crate::infra::t;

pub mod commands;

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for a `--lang <VALUE>` argument ahead of the test command.
fn pre_parse_language() -> Option<String> {
    let args: Vec<String> = env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--lang" {
            return iter.next().cloned();
        }
        if let Some(lang) = arg.strip_prefix("--lang=") {
            return Some(lang.to_string());
        }
        if !arg.starts_with('-') {
            // Everything from here on belongs to the test command.
            break;
        }
        if matches!(arg.as_str(), "-c" | "--config" | "-m" | "--mode") {
            iter.next();
        }
    }
    None
}

/// Builds the clap command. Everything from the first positional argument on
/// is the test command and is passed through untouched.
pub fn build_cli() -> Command {
    Command::new("jitstress-runner")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli_about").to_string())
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli_lang").to_string())
                .value_name("LANGUAGE")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help(t!("arg_config").to_string())
                .value_name("CONFIG")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("mode")
                .short('m')
                .long("mode")
                .help(t!("arg_mode").to_string())
                .value_name("MODE")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("command")
                .help(t!("arg_command").to_string())
                .value_name("COMMAND")
                .required(true)
                .num_args(1..)
                .trailing_var_arg(true)
                .allow_hyphen_values(true)
                .value_parser(clap::value_parser!(OsString)),
        )
}

/// Options for one matrix run, as parsed from the command line.
#[derive(Debug, Clone)]
pub struct RunArgs {
    pub lang: Option<String>,
    pub config: Option<PathBuf>,
    pub modes: Vec<String>,
    pub command: Vec<OsString>,
}

impl RunArgs {
    fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            lang: matches.get_one::<String>("lang").cloned(),
            config: matches.get_one::<PathBuf>("config").cloned(),
            modes: matches
                .get_many::<String>("mode")
                .map(|modes| modes.cloned().collect())
                .unwrap_or_default(),
            command: matches
                .get_many::<OsString>("command")
                .map(|parts| parts.cloned().collect())
                .unwrap_or_default(),
        }
    }
}

/// Parses the process arguments. A missing test command makes clap print the
/// usage and exit with status 2 before anything runs.
pub fn parse_args() -> RunArgs {
    match pre_parse_language() {
        Some(language) => rust_i18n::set_locale(&language),
        None => crate::init(),
    }

    let matches = build_cli().get_matches();
    RunArgs::from_matches(&matches)
}

pub async fn process_command(args: RunArgs) -> Result<()> {
    commands::run::execute(args).await
}
