//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::commands::{login::LoginArgs, status::StatusArgs, token::TokenArgs};

/// Log in to the care-home service and manage the stored access token.
#[derive(Parser, Debug)]
#[command(name = "carehome")]
#[command(author, version = env!("CAREHOME_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(flatten)]
    pub store: StoreArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Exchange a username and password for an access token
    Login(LoginArgs),

    /// Show whether an access token is stored
    Status(StatusArgs),

    /// Print the stored access token
    Token(TokenArgs),
}

/// Where the access token is kept.
#[derive(Args, Debug, Clone)]
pub struct StoreArgs {
    /// Token storage backend
    #[arg(
        long = "store",
        value_enum,
        env = "CAREHOME_TOKEN_STORE",
        default_value_t = StoreKind::Keyring,
        global = true
    )]
    pub kind: StoreKind,

    /// Token file path (file store only; defaults to the user data directory)
    #[arg(long, env = "CAREHOME_TOKEN_FILE", global = true)]
    pub token_file: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// OS credential store
    Keyring,
    /// Owner-only file
    File,
}

impl StoreKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StoreKind::Keyring => "keyring",
            StoreKind::File => "file",
        }
    }
}
