// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Top-level error type, tagged by the stage of the run that failed.

use crate::config::ConfigError;
use crate::identity::KeyStoreError;
use crate::ledger::LedgerError;

/// Failure of a wallet run.
///
/// Each variant names the stage that failed, so embedding callers can tell a
/// refused identity load from a rejected transfer. The binary flattens all
/// of them into a single `Error:` line on stderr.
#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("identity error: {0}")]
    Identity(#[from] KeyStoreError),

    #[error("bootstrap failed: {0}")]
    Bootstrap(#[source] LedgerError),

    #[error("balance query failed: {0}")]
    Query(#[source] LedgerError),

    #[error("transfer failed: {0}")]
    Transfer(#[source] LedgerError),
}
