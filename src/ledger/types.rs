// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Network presets and ledger value types.

use candid::{Nat, Principal};

/// Internet Computer network configuration.
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    /// Network name for display
    pub name: &'static str,
    /// Default endpoint URL
    pub url: &'static str,
    /// Whether the trust root is fetched from the endpoint at bootstrap.
    /// Only ever true for networks whose root key is not pinned in the
    /// agent (a local replica regenerates its key on every reset).
    pub fetch_root_key: bool,
}

/// IC mainnet configuration.
pub const IC_MAINNET: NetworkConfig = NetworkConfig {
    name: "Internet Computer",
    url: "https://ic0.app",
    fetch_root_key: false,
};

/// Local replica configuration (dfx default port).
pub const IC_LOCAL: NetworkConfig = NetworkConfig {
    name: "Local replica",
    url: "http://127.0.0.1:4943",
    fetch_root_key: true,
};

/// The transfer the wallet performs on each run.
#[derive(Debug, Clone)]
pub struct TransferPlan {
    /// Recipient principal (default subaccount).
    pub to: Principal,
    /// Amount in minor units.
    pub amount: u64,
    /// Network fee in minor units.
    pub fee: u64,
}

/// Format a minor-unit amount with the specified number of decimals.
pub fn format_tokens(raw: &Nat, decimals: u8) -> String {
    let digits = raw.0.to_string();
    if digits == "0" {
        return "0".to_string();
    }

    let decimals = decimals as usize;
    let (whole, frac) = if digits.len() > decimals {
        let (whole, frac) = digits.split_at(digits.len() - decimals);
        (whole.to_string(), frac.to_string())
    } else {
        ("0".to_string(), format!("{digits:0>decimals$}"))
    };

    let trimmed = frac.trim_end_matches('0');
    if trimmed.is_empty() {
        whole
    } else {
        format!("{whole}.{trimmed}")
    }
}
