//! Status command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::cli::StoreArgs;
use crate::{output, store};

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Print the status as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct StatusReport {
    store: &'static str,
    token: &'static str,
}

pub fn run(args: StatusArgs, store_args: &StoreArgs) -> Result<()> {
    let store = store::open(store_args)?;

    let report = StatusReport {
        store: store_args.kind.as_str(),
        token: if store.is_present() { "present" } else { "absent" },
    };

    if args.json {
        output::json(&report)?;
    } else {
        output::field("Store", report.store);
        output::field("Token", report.token);
    }

    Ok(())
}
