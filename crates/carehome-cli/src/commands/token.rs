//! Token command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::cli::StoreArgs;
use crate::store;

#[derive(Args, Debug)]
pub struct TokenArgs {
    /// Prefix the token with "Bearer " for use as an Authorization header value
    #[arg(long)]
    pub bearer: bool,
}

pub fn run(args: TokenArgs, store_args: &StoreArgs) -> Result<()> {
    let store = store::open(store_args)?;
    let token = store
        .get()
        .context("No access token stored. Run 'carehome login' first.")?;

    if args.bearer {
        println!("{}", token.bearer());
    } else {
        println!("{}", token.as_str());
    }

    Ok(())
}
