// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! ICRC-1 ledger client.
//!
//! Thin candid wrapper over the two ledger methods the wallet consumes:
//! `icrc1_balance_of` (query) and `icrc1_transfer` (update).

use candid::{Decode, Encode, Nat, Principal};
use ic_agent::Agent;
use icrc_ledger_types::icrc1::account::Account;
use icrc_ledger_types::icrc1::transfer::{BlockIndex, TransferArg, TransferError};

use super::{Ledger, LedgerError, Session};

/// ICRC-1 ledger canister client backed by a bootstrapped [`Session`].
pub struct IcrcLedger<'a> {
    agent: &'a Agent,
    canister_id: Principal,
}

impl<'a> IcrcLedger<'a> {
    pub fn new(session: &'a Session, canister_id: Principal) -> Self {
        Self {
            agent: session.agent(),
            canister_id,
        }
    }
}

impl Ledger for IcrcLedger<'_> {
    async fn balance_of(&self, account: Account) -> Result<Nat, LedgerError> {
        let raw = self
            .agent
            .query(&self.canister_id, "icrc1_balance_of")
            .with_arg(Encode!(&account)?)
            .call()
            .await?;

        Ok(Decode!(&raw, Nat)?)
    }

    async fn transfer(&self, arg: TransferArg) -> Result<BlockIndex, LedgerError> {
        let raw = self
            .agent
            .update(&self.canister_id, "icrc1_transfer")
            .with_arg(Encode!(&arg)?)
            .call_and_wait()
            .await?;

        Decode!(&raw, Result<BlockIndex, TransferError>)?.map_err(LedgerError::Rejected)
    }
}
