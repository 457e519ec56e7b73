//! Login command implementation.

use anyhow::{Context, Result, anyhow};
use clap::Args;
use colored::Colorize;

use carehome_core::types::DEFAULT_API_URL;
use carehome_core::{ApiUrl, Credentials, Error, LoginFlow};
use carehome_http::HttpAuthClient;

use crate::cli::{StoreArgs, StoreKind};
use crate::{output, store};

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Account username
    #[arg(long, short)]
    pub username: String,

    /// Account password
    #[arg(long, env = "CAREHOME_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Token service base URL
    #[arg(long, env = "CAREHOME_API_URL", default_value = DEFAULT_API_URL)]
    pub api: String,
}

pub async fn run(args: LoginArgs, store_args: &StoreArgs) -> Result<()> {
    let api = ApiUrl::new(&args.api).context("Invalid API URL")?;
    let client = HttpAuthClient::new(api).context("Failed to build HTTP client")?;
    let store = store::open(store_args)?;
    let flow = LoginFlow::new(client, store);

    // Surrounding whitespace from pasted input is never part of an account name or password.
    let credentials = Credentials::new(args.username.trim(), args.password.trim());

    eprintln!("{}", "Logging in...".dimmed());

    flow.login(credentials)
        .await
        .map_err(|e| anyhow!(failure_message(&e, store_args.kind)))?;

    output::success("Login successful");
    output::field("Store", store_args.kind.as_str());

    Ok(())
}

/// The message shown when a login attempt fails.
fn failure_message(err: &Error, kind: StoreKind) -> String {
    match (err, kind) {
        (Error::Storage(_), StoreKind::Keyring) => format!(
            "{}. Run with --store file to keep the token in a file instead.",
            err.user_message()
        ),
        _ => err.user_message(),
    }
}

#[cfg(test)]
mod tests {
    use carehome_core::error::{Rejection, StorageError};

    use super::*;

    #[test]
    fn keyring_write_failure_points_to_file_store() {
        let err = Error::from(StorageError::Keyring {
            message: "no secure storage available to write the token".to_string(),
        });
        let message = failure_message(&err, StoreKind::Keyring);
        assert!(message.starts_with("Could not save token: keyring: no secure storage"));
        assert!(message.contains("--store file"));
    }

    #[test]
    fn rejection_message_is_unchanged() {
        let err = Error::from(Rejection::new(401, None));
        assert_eq!(failure_message(&err, StoreKind::Keyring), "Invalid credentials");
    }
}
