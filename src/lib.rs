// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! ICRC Wallet - Internet Computer Ledger Wallet CLI
//!
//! This crate provides a small command-line wallet: it keeps a secp256k1
//! key identity in a local PEM-style file and talks to an ICRC-1 ledger
//! canister through an authenticated agent session.
//!
//! ## Modules
//!
//! - `identity` - Local key lifecycle (load-or-create, persistence)
//! - `ledger` - Agent session and ICRC-1 ledger client
//! - `run` - The sequential balance / transfer / balance flow
//! - `config` - Environment-driven runtime configuration

pub mod config;
pub mod error;
pub mod identity;
pub mod ledger;
pub mod run;
