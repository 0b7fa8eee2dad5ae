// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Agent session and ICRC-1 ledger integration.
//!
//! This module provides:
//! - The authenticated agent session and its one-time trust bootstrap
//! - An ICRC-1 ledger client (balance query, token transfer)
//! - The `Connection` / `Ledger` seams the flow driver runs against, so the
//!   whole flow is exercisable with stub collaborators and no network

pub mod icrc;
pub mod session;
pub mod types;

pub use icrc::IcrcLedger;
pub use session::Session;
pub use types::{format_tokens, NetworkConfig, TransferPlan, IC_LOCAL, IC_MAINNET};

use candid::Nat;
use icrc_ledger_types::icrc1::account::Account;
use icrc_ledger_types::icrc1::transfer::{BlockIndex, TransferArg, TransferError};

/// Errors from the remote collaborators (agent transport, candid codec, or
/// the ledger itself rejecting a transfer).
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("agent error: {0}")]
    Agent(#[from] ic_agent::AgentError),

    #[error("candid error: {0}")]
    Candid(#[from] candid::Error),

    #[error("transfer rejected by ledger: {0:?}")]
    Rejected(TransferError),
}

/// An authenticated session whose trust root must be established before any
/// ledger call goes through it.
#[allow(async_fn_in_trait)]
pub trait Connection {
    /// One-time trust bootstrap. Must resolve before any [`Ledger`] call.
    async fn bootstrap(&self) -> Result<(), LedgerError>;
}

/// The ledger operations the wallet consumes.
#[allow(async_fn_in_trait)]
pub trait Ledger {
    /// Token balance of `account`, in minor units.
    async fn balance_of(&self, account: Account) -> Result<Nat, LedgerError>;

    /// Execute a transfer, returning the block index of the accepted
    /// transaction. A ledger-side rejection surfaces as
    /// [`LedgerError::Rejected`].
    async fn transfer(&self, arg: TransferArg) -> Result<BlockIndex, LedgerError>;
}
