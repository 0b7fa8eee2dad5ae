// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Local key identity lifecycle.
//!
//! This module guarantees that a stable secp256k1 identity exists across
//! process runs: the key is persisted in a PEM-style file and recreated on
//! first run (or, with explicit opt-in, when the stored record is
//! unparseable).

pub mod keystore;

pub use keystore::{CorruptKeyPolicy, KeyRecord, KeyStore, KeyStoreError, LoadedKey};
