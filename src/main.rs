// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::process;

use ic_agent::identity::Secp256k1Identity;
use ic_agent::Identity;
use tracing::info;
use tracing_subscriber::EnvFilter;

use icrc_wallet::config::Config;
use icrc_wallet::error::WalletError;
use icrc_wallet::identity::{CorruptKeyPolicy, KeyStore, KeyStoreError};
use icrc_wallet::ledger::{IcrcLedger, Session};
use icrc_wallet::run;

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(err) = run_wallet().await {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

async fn run_wallet() -> Result<(), WalletError> {
    let config = Config::from_env()?;

    let policy = if config.replace_corrupt_key {
        CorruptKeyPolicy::Replace
    } else {
        CorruptKeyPolicy::Fail
    };
    let loaded = KeyStore::new(&config.key_path).load_or_create(policy)?;
    if loaded.freshly_generated {
        info!(path = %config.key_path.display(), "generated new wallet identity");
    }

    let identity = Secp256k1Identity::from_private_key(loaded.secret);
    let principal = identity.sender().map_err(KeyStoreError::Principal)?;
    println!("Principal ID: {principal}");

    info!(
        network = config.network.name,
        endpoint = %config.endpoint,
        ledger = %config.ledger_canister_id,
        "connecting"
    );
    let session = Session::create(identity, &config.endpoint, &config.network)
        .map_err(WalletError::Bootstrap)?;
    let ledger = IcrcLedger::new(&session, config.ledger_canister_id);

    run::execute(&session, &ledger, principal, &config.transfer).await?;
    Ok(())
}

/// Install the global tracing subscriber (`RUST_LOG` filter, `LOG_FORMAT`
/// json/pretty switch). Diagnostics go to stderr; stdout carries only the
/// wallet's result lines.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match std::env::var("LOG_FORMAT").as_deref() {
        Ok("json") => builder.json().init(),
        _ => builder.init(),
    }
}
