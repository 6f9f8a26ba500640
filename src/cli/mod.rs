//! Command-line interface.

pub mod clear;
pub mod completions;
pub mod decrypt;
pub mod encrypt;
pub mod output;
pub mod run;
pub mod save;

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::config::Config;
use crate::core::constants;
use crate::core::pipeline::Pipeline;
use crate::core::store::KeyStore;
use crate::error::Result;

/// edotenv - Encrypted .env files you can commit.
#[derive(Parser)]
#[command(
    name = "edotenv",
    about = "Manages encrypted .env files",
    version,
    after_help = "Keep the key file out of version control."
)]
pub struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Key file location shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct KeyArgs {
    /// Path to key file [default: .env.key beside the edotenv executable]
    #[arg(
        long = "key-path",
        visible_alias = "key_path",
        value_name = "PATH",
        env = constants::KEY_PATH_VAR
    )]
    pub key_path: Option<PathBuf>,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Encrypt a .env file
    Encrypt {
        /// Path to .env file [default: .env]
        dotenv_path: Option<PathBuf>,
        /// Path to encrypted .env file [default: .env]
        edotenv_path: Option<PathBuf>,
        #[command(flatten)]
        key: KeyArgs,
    },

    /// Decrypt an encrypted .env file
    Decrypt {
        /// Path to .env file [default: .env]
        dotenv_path: Option<PathBuf>,
        /// Path to encrypted .env file [default: .env]
        edotenv_path: Option<PathBuf>,
        #[command(flatten)]
        key: KeyArgs,
    },

    /// Clear encrypted .env or key file
    Clear {
        /// Path to encrypted .env file - ignored if not set
        #[arg(long = "edotenv-path", visible_alias = "edotenv_path", value_name = "PATH")]
        edotenv_path: Option<PathBuf>,
        #[command(flatten)]
        key: KeyArgs,
    },

    /// Encrypt variables from the current environment
    Save {
        /// Variable names to save
        #[arg(required = true)]
        names: Vec<String>,
        /// Path to encrypted .env file [default: .env]
        #[arg(long = "edotenv-path", visible_alias = "edotenv_path", value_name = "PATH")]
        edotenv_path: Option<PathBuf>,
        #[command(flatten)]
        key: KeyArgs,
    },

    /// Run a command with decrypted variables in its environment
    Run {
        /// Path to encrypted .env file [default: .env]
        #[arg(long = "edotenv-path", visible_alias = "edotenv_path", value_name = "PATH")]
        edotenv_path: Option<PathBuf>,
        #[command(flatten)]
        key: KeyArgs,
        /// Command and arguments to run
        #[arg(trailing_var_arg = true, required = true)]
        command: Vec<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Pipeline for a command, with the key path resolved against config.
fn pipeline(config: &Config, key: KeyArgs) -> Pipeline {
    Pipeline::new(KeyStore::beside_executable(), config.key_path(key.key_path))
}

/// Execute a command. With no command, prints help.
pub fn execute(command: Option<Command>) -> Result<()> {
    let Some(command) = command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = Config::load()?;

    match command {
        Command::Encrypt {
            dotenv_path,
            edotenv_path,
            key,
        } => encrypt::execute(
            &pipeline(&config, key),
            &config.dotenv_path(dotenv_path),
            &config.edotenv_path(edotenv_path),
        ),
        Command::Decrypt {
            dotenv_path,
            edotenv_path,
            key,
        } => decrypt::execute(
            &pipeline(&config, key),
            &config.dotenv_path(dotenv_path),
            &config.edotenv_path(edotenv_path),
        ),
        Command::Clear { edotenv_path, key } => {
            clear::execute(&pipeline(&config, key), edotenv_path.as_deref())
        }
        Command::Save {
            names,
            edotenv_path,
            key,
        } => save::execute(
            &pipeline(&config, key),
            &names,
            &config.edotenv_path(edotenv_path),
        ),
        Command::Run {
            edotenv_path,
            key,
            command,
        } => run::execute(
            &pipeline(&config, key),
            &config.edotenv_path(edotenv_path),
            &command,
        ),
        Command::Completions { shell } => completions::execute(shell),
    }
}
