use clap::{Parser, Subcommand};

use tdscli::{InvocationConfig, InvocationOptions, JarVersion, OptionValue, Target};

use super::configure::read_config;
use super::error::ReaderError;
use crate::logger::init_logger;

/// Tdsrun - drive the tdscli compile/patch jar
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: CliCommand,

    /// Suppress the jar's output instead of echoing it.
    #[arg(short, long, global = true)]
    pub silent: bool,

    /// Log the full java command line before running it.
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Jar version to run (11.3 or 11.4).
    /// Unsupported values fall back to 11.4.
    #[arg(long = "tds-version", global = true)]
    pub tds_version: Option<String>,
}

/// Every subcommand forwards its trailing `key=value` tokens to the jar.
/// A value containing `;` becomes a list; a bare `true`/`false` becomes a
/// boolean (so `recompile=true` is sent as `recompile=t`).
#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Compile sources.
    Compile {
        /// Use the fixed standalone jar (`tdscli.jar`) and hand the child
        /// an explicit TDS_APPRE environment.
        #[arg(long)]
        standalone: bool,
        options: Vec<String>,
    },
    /// Remove a compiled program from the repository.
    DeleteProg { options: Vec<String> },
    /// Generate a patch.
    Patchgen { options: Vec<String> },
    /// Apply a patch.
    Patchapply { options: Vec<String> },
    /// List the contents of a patch.
    Patchinfo { options: Vec<String> },
    /// Defragment the repository.
    DefragRpo { options: Vec<String> },
    /// Clear the server log.
    ClearLog { options: Vec<String> },
}

pub struct RunInfo {
    pub target: Target,
    pub standalone: bool,
    pub options: InvocationOptions,
    pub config: InvocationConfig,
}

pub fn resolve_args() -> Result<RunInfo, ReaderError> {
    let args = Args::parse();
    let file = read_config()?;

    let debug = args.verbose || file.debug;
    init_logger(debug);

    log::debug!("{:?}", &args);

    let version = args
        .tds_version
        .or(file.version)
        .map(|v| JarVersion::from_requested(&v))
        .unwrap_or_default();

    let config = InvocationConfig {
        silent: args.silent || file.silent,
        debug,
        version,
    };

    let (target, standalone, tokens) = match &args.command {
        CliCommand::Compile {
            standalone,
            options,
        } => (Target::Compile, *standalone, options),
        CliCommand::DeleteProg { options } => (Target::DeleteProg, false, options),
        CliCommand::Patchgen { options } => (Target::PatchGen, false, options),
        CliCommand::Patchapply { options } => (Target::PatchApply, false, options),
        CliCommand::Patchinfo { options } => (Target::PatchInfo, false, options),
        CliCommand::DefragRpo { options } => (Target::DefragRpo, false, options),
        CliCommand::ClearLog { options } => (Target::ClearLog, false, options),
    };

    Ok(RunInfo {
        target,
        standalone,
        options: parse_options(tokens)?,
        config,
    })
}

fn parse_options(tokens: &[String]) -> Result<InvocationOptions, ReaderError> {
    let mut options = InvocationOptions::new();

    for token in tokens {
        let Some((key, value)) = token.split_once('=') else {
            return Err(ReaderError::BadOption(token.clone()));
        };

        if key.is_empty() {
            return Err(ReaderError::BadOption(token.clone()));
        }

        let value = if value.contains(';') {
            OptionValue::List(value.split(';').map(str::to_owned).collect())
        } else {
            match value {
                "true" => OptionValue::Bool(true),
                "false" => OptionValue::Bool(false),
                other => OptionValue::from(other),
            }
        };

        options.set(key, value);
    }

    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn key_value_tokens_parse_in_order() {
        let options = parse_options(&tokens(&["program=a.prw", "serverType=advpl"])).unwrap();
        let keys: Vec<&str> = options.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["program", "serverType"]);
    }

    #[test]
    fn semicolons_make_lists_and_booleans_are_typed() {
        let options = parse_options(&tokens(&["tags=a;b;c", "recompile=true"])).unwrap();
        assert_eq!(options.get("tags"), Some(&OptionValue::from(vec!["a", "b", "c"])));
        assert_eq!(options.get("recompile"), Some(&OptionValue::Bool(true)));
    }

    #[test]
    fn token_without_equals_is_rejected() {
        let err = parse_options(&tokens(&["no-separator"])).unwrap_err();
        assert!(err.to_string().contains("no-separator"));
    }

    #[test]
    fn empty_key_is_rejected() {
        assert!(parse_options(&tokens(&["=value"])).is_err());
    }
}
