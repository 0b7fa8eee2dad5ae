// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authenticated agent session construction and trust bootstrap.

use ic_agent::{Agent, Identity};
use tracing::debug;
use url::Url;

use super::{Connection, LedgerError, NetworkConfig};

/// An agent session bound to one identity and one endpoint, held for the
/// process lifetime.
pub struct Session {
    agent: Agent,
    fetch_root_key: bool,
}

impl Session {
    /// Build the agent for `identity` against `endpoint`.
    ///
    /// The session is not usable for ledger calls until
    /// [`Connection::bootstrap`] has resolved.
    pub fn create(
        identity: impl Identity + 'static,
        endpoint: &Url,
        network: &NetworkConfig,
    ) -> Result<Self, LedgerError> {
        let agent = Agent::builder()
            .with_url(endpoint.as_str())
            .with_identity(identity)
            .build()?;

        Ok(Self {
            agent,
            fetch_root_key: network.fetch_root_key,
        })
    }

    pub(crate) fn agent(&self) -> &Agent {
        &self.agent
    }
}

impl Connection for Session {
    /// One-time trust bootstrap.
    ///
    /// Against a local replica the root key is fetched from the endpoint;
    /// on mainnet the agent's pinned IC root key stays the trust anchor.
    async fn bootstrap(&self) -> Result<(), LedgerError> {
        if self.fetch_root_key {
            self.agent.fetch_root_key().await?;
            debug!("fetched root key from endpoint");
        }
        Ok(())
    }
}
