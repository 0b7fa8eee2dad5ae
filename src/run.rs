// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! The wallet's sequential flow: bootstrap, balance, transfer, balance.

use candid::{Nat, Principal};
use icrc_ledger_types::icrc1::account::Account;
use icrc_ledger_types::icrc1::transfer::{BlockIndex, TransferArg};
use tracing::info;

use crate::error::WalletError;
use crate::ledger::{format_tokens, Connection, Ledger, TransferPlan};

/// Decimal places of the ledger token (e8s).
pub const TOKEN_DECIMALS: u8 = 8;

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub owner: Principal,
    pub balance_before: Nat,
    pub block_index: BlockIndex,
    pub balance_after: Nat,
}

/// Run the flow against a bootstrapped-on-demand connection and a ledger.
///
/// Strictly sequential: each call suspends until the previous one resolved,
/// and any failure aborts the remaining steps. There is no retry and no
/// rollback; in particular a failed second balance query does not undo the
/// transfer.
pub async fn execute<C, L>(
    connection: &C,
    ledger: &L,
    owner: Principal,
    plan: &TransferPlan,
) -> Result<RunReport, WalletError>
where
    C: Connection,
    L: Ledger,
{
    connection.bootstrap().await.map_err(WalletError::Bootstrap)?;

    let account = Account {
        owner,
        subaccount: None,
    };

    let balance_before = ledger
        .balance_of(account.clone())
        .await
        .map_err(WalletError::Query)?;
    println!(
        "Current balance: {} ({} tokens)",
        balance_before,
        format_tokens(&balance_before, TOKEN_DECIMALS)
    );

    println!(
        "Attempting to transfer {} tokens to {}",
        format_tokens(&Nat::from(plan.amount), TOKEN_DECIMALS),
        plan.to
    );
    let arg = TransferArg {
        from_subaccount: None,
        to: Account {
            owner: plan.to,
            subaccount: None,
        },
        fee: Some(Nat::from(plan.fee)),
        created_at_time: None,
        memo: None,
        amount: Nat::from(plan.amount),
    };
    let block_index = ledger.transfer(arg).await.map_err(WalletError::Transfer)?;
    println!("Transfer result: block index {block_index}");
    info!(%block_index, amount = plan.amount, fee = plan.fee, "transfer accepted");

    let balance_after = ledger
        .balance_of(account)
        .await
        .map_err(WalletError::Query)?;
    println!(
        "New balance: {} ({} tokens)",
        balance_after,
        format_tokens(&balance_after, TOKEN_DECIMALS)
    );

    Ok(RunReport {
        owner,
        balance_before,
        block_index,
        balance_after,
    })
}
