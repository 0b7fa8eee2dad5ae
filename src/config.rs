// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! This module defines environment variable names, default values, and the
//! [`Config`] struct loaded from the environment at startup.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `IC_NETWORK` | Target network (`mainnet` or `local`) | `mainnet` |
//! | `IC_URL` | Endpoint URL override | network preset URL |
//! | `LEDGER_CANISTER_ID` | ICRC-1 ledger canister principal | `kelas-yaaaa-aaaaj-azv2q-cai` |
//! | `WALLET_KEY_PATH` | Path of the identity PEM file | `wallet_identity.pem` |
//! | `TRANSFER_TO` | Transfer recipient principal | see [`DEFAULT_TRANSFER_TO`] |
//! | `TRANSFER_AMOUNT` | Transfer amount in minor units (e8s) | `100000000` |
//! | `TRANSFER_FEE` | Transfer fee in minor units | `10` |
//! | `WALLET_REPLACE_CORRUPT_KEY` | Regenerate over an unparseable key file | `false` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info` |

use std::env;
use std::path::PathBuf;

use candid::Principal;
use url::Url;

use crate::ledger::{NetworkConfig, TransferPlan, IC_LOCAL, IC_MAINNET};

/// Environment variable name for the target network preset.
pub const NETWORK_ENV: &str = "IC_NETWORK";

/// Environment variable name for the endpoint URL override.
pub const URL_ENV: &str = "IC_URL";

/// Environment variable name for the ICRC-1 ledger canister principal.
pub const LEDGER_CANISTER_ID_ENV: &str = "LEDGER_CANISTER_ID";

/// Environment variable name for the identity PEM file path.
pub const KEY_PATH_ENV: &str = "WALLET_KEY_PATH";

/// Environment variable name for the transfer recipient principal.
pub const TRANSFER_TO_ENV: &str = "TRANSFER_TO";

/// Environment variable name for the transfer amount (minor units).
pub const TRANSFER_AMOUNT_ENV: &str = "TRANSFER_AMOUNT";

/// Environment variable name for the transfer fee (minor units).
pub const TRANSFER_FEE_ENV: &str = "TRANSFER_FEE";

/// Environment variable name for the corrupt-key replacement opt-in.
///
/// When `true`, a key file that exists but cannot be parsed is replaced by a
/// freshly generated identity instead of aborting the run. Replacing the
/// file destroys whatever identity it held.
pub const REPLACE_CORRUPT_KEY_ENV: &str = "WALLET_REPLACE_CORRUPT_KEY";

/// Default ledger canister.
pub const DEFAULT_LEDGER_CANISTER_ID: &str = "kelas-yaaaa-aaaaj-azv2q-cai";

/// Default identity file path, relative to the working directory.
pub const DEFAULT_KEY_PATH: &str = "wallet_identity.pem";

/// Default transfer recipient.
pub const DEFAULT_TRANSFER_TO: &str =
    "bfaxj-k4saz-ynsqm-ffmwa-v3his-2zmp2-f75ts-xpf3q-7dumn-5zemr-5qe";

/// Default transfer amount: 1 token at 8 decimals.
pub const DEFAULT_TRANSFER_AMOUNT: u64 = 100_000_000;

/// Default transfer fee in minor units.
pub const DEFAULT_TRANSFER_FEE: u64 = 10;

/// Runtime configuration resolved from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Selected network preset.
    pub network: NetworkConfig,
    /// Resolved endpoint URL (preset URL unless `IC_URL` overrides it).
    pub endpoint: Url,
    /// ICRC-1 ledger canister to talk to.
    pub ledger_canister_id: Principal,
    /// Path of the persisted identity key file.
    pub key_path: PathBuf,
    /// The transfer to perform.
    pub transfer: TransferPlan,
    /// Whether an unparseable key file may be replaced by a new identity.
    pub replace_corrupt_key: bool,
}

/// Errors produced while resolving [`Config`] from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown network `{0}` (expected `mainnet` or `local`)")]
    UnknownNetwork(String),

    #[error("invalid {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

impl Config {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// `from_env` delegates here; tests pass a closure over a map instead of
    /// mutating process-global environment state.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let network = match lookup(NETWORK_ENV).as_deref() {
            None => IC_MAINNET,
            Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "mainnet" | "ic" => IC_MAINNET,
                "local" => IC_LOCAL,
                other => return Err(ConfigError::UnknownNetwork(other.to_string())),
            },
        };

        let endpoint_raw = lookup(URL_ENV).unwrap_or_else(|| network.url.to_string());
        let endpoint = endpoint_raw.parse::<Url>().map_err(|e| ConfigError::Invalid {
            var: URL_ENV,
            reason: e.to_string(),
        })?;

        let ledger_canister_id = parse_principal(
            LEDGER_CANISTER_ID_ENV,
            lookup(LEDGER_CANISTER_ID_ENV).as_deref(),
            DEFAULT_LEDGER_CANISTER_ID,
        )?;

        let key_path = lookup(KEY_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_KEY_PATH));

        let transfer = TransferPlan {
            to: parse_principal(
                TRANSFER_TO_ENV,
                lookup(TRANSFER_TO_ENV).as_deref(),
                DEFAULT_TRANSFER_TO,
            )?,
            amount: parse_u64(
                TRANSFER_AMOUNT_ENV,
                lookup(TRANSFER_AMOUNT_ENV).as_deref(),
                DEFAULT_TRANSFER_AMOUNT,
            )?,
            fee: parse_u64(
                TRANSFER_FEE_ENV,
                lookup(TRANSFER_FEE_ENV).as_deref(),
                DEFAULT_TRANSFER_FEE,
            )?,
        };

        let replace_corrupt_key = parse_bool(
            REPLACE_CORRUPT_KEY_ENV,
            lookup(REPLACE_CORRUPT_KEY_ENV).as_deref(),
        )?;

        Ok(Self {
            network,
            endpoint,
            ledger_canister_id,
            key_path,
            transfer,
            replace_corrupt_key,
        })
    }
}

fn parse_principal(
    var: &'static str,
    raw: Option<&str>,
    default: &str,
) -> Result<Principal, ConfigError> {
    Principal::from_text(raw.unwrap_or(default)).map_err(|e| ConfigError::Invalid {
        var,
        reason: e.to_string(),
    })
}

fn parse_u64(var: &'static str, raw: Option<&str>, default: u64) -> Result<u64, ConfigError> {
    match raw {
        None => Ok(default),
        Some(s) => s.trim().parse::<u64>().map_err(|e| ConfigError::Invalid {
            var,
            reason: e.to_string(),
        }),
    }
}

fn parse_bool(var: &'static str, raw: Option<&str>) -> Result<bool, ConfigError> {
    match raw.map(|s| s.trim().to_ascii_lowercase()) {
        None => Ok(false),
        Some(s) => match s.as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" | "" => Ok(false),
            other => Err(ConfigError::Invalid {
                var,
                reason: format!("expected boolean, got `{other}`"),
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        let map: HashMap<&str, &str> = vars.iter().copied().collect();
        move |key| map.get(key).map(|v| v.to_string())
    }

    #[test]
    fn defaults_match_the_documented_table() {
        let cfg = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(cfg.network.name, IC_MAINNET.name);
        assert_eq!(cfg.endpoint.as_str(), "https://ic0.app/");
        assert_eq!(
            cfg.ledger_canister_id,
            Principal::from_text(DEFAULT_LEDGER_CANISTER_ID).unwrap()
        );
        assert_eq!(cfg.key_path, PathBuf::from("wallet_identity.pem"));
        assert_eq!(cfg.transfer.amount, 100_000_000);
        assert_eq!(cfg.transfer.fee, 10);
        assert!(!cfg.replace_corrupt_key);
    }

    #[test]
    fn local_network_enables_root_key_fetch() {
        let cfg = Config::from_lookup(lookup_from(&[("IC_NETWORK", "local")])).unwrap();
        assert!(cfg.network.fetch_root_key);
        assert_eq!(cfg.endpoint.as_str(), "http://127.0.0.1:4943/");
    }

    #[test]
    fn url_override_wins_over_preset() {
        let cfg = Config::from_lookup(lookup_from(&[
            ("IC_NETWORK", "local"),
            ("IC_URL", "http://localhost:8000"),
        ]))
        .unwrap();
        assert_eq!(cfg.endpoint.as_str(), "http://localhost:8000/");
    }

    #[test]
    fn unknown_network_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("IC_NETWORK", "testnet")])).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownNetwork(_)));
    }

    #[test]
    fn bad_amount_is_rejected() {
        let err =
            Config::from_lookup(lookup_from(&[("TRANSFER_AMOUNT", "one token")])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                var: TRANSFER_AMOUNT_ENV,
                ..
            }
        ));
    }

    #[test]
    fn bad_recipient_principal_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("TRANSFER_TO", "not-a-principal")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: TRANSFER_TO_ENV, .. }));
    }

    #[test]
    fn corrupt_key_opt_in_parses_common_spellings() {
        for raw in ["true", "1", "yes"] {
            let cfg = Config::from_lookup(lookup_from(&[(REPLACE_CORRUPT_KEY_ENV, raw)])).unwrap();
            assert!(cfg.replace_corrupt_key, "{raw} should enable replacement");
        }
        let err =
            Config::from_lookup(lookup_from(&[(REPLACE_CORRUPT_KEY_ENV, "maybe")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }
}
