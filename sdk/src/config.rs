//! Deployment configuration
//!
//! Describes one router deployment and the verifiers meant to sit behind it.
//! Loadable from JSON or from the environment.

use std::collections::HashSet;
use std::path::Path;
use std::str::FromStr;

use anchor_lang::prelude::Pubkey;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;
use verifier_router::Selector;

use crate::addresses::RouterAddresses;
use crate::error::{SdkError, SdkResult};
use crate::logging::DEFAULT_LOG_FILTER;

/// One verifier to register
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifierManifestEntry {
    pub name: String,
    /// Base58 program id
    pub program_id: String,
    /// Fixed selector; assigned from the router counter when absent
    #[serde(default)]
    pub selector: Option<Selector>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SdkConfig {
    /// Base58 router program id
    pub router_program_id: String,

    /// `EnvFilter` directive used when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    #[serde(default)]
    pub verifiers: Vec<VerifierManifestEntry>,
}

/// Manifest entry with its selector resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedVerifier {
    pub name: String,
    pub program_id: Pubkey,
    pub selector: Selector,
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            router_program_id: verifier_router::ID.to_string(),
            log_filter: default_log_filter(),
            verifiers: Vec::new(),
        }
    }
}

impl SdkConfig {
    /// Read `VERIFIER_ROUTER_PROGRAM_ID`, `RUST_LOG` and, if set, the
    /// verifier list from the JSON file at `VERIFIER_ROUTER_MANIFEST`
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let verifiers = match std::env::var("VERIFIER_ROUTER_MANIFEST") {
            Ok(path) => {
                let raw = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read verifier manifest {path}"))?;
                serde_json::from_str(&raw).context("Invalid verifier manifest")?
            }
            Err(_) => Vec::new(),
        };

        let config = Self {
            router_program_id: std::env::var("VERIFIER_ROUTER_PROGRAM_ID")
                .unwrap_or(defaults.router_program_id),
            log_filter: std::env::var("RUST_LOG").unwrap_or(defaults.log_filter),
            verifiers,
        };
        config.program_id().context("Invalid VERIFIER_ROUTER_PROGRAM_ID")?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw).context("Failed to parse config")?;
        config.program_id()?;
        Ok(config)
    }

    pub fn program_id(&self) -> SdkResult<Pubkey> {
        parse_pubkey(&self.router_program_id)
    }

    pub fn addresses(&self) -> SdkResult<RouterAddresses> {
        Ok(RouterAddresses::new(self.program_id()?))
    }

    /// Resolve a selector for every manifest entry
    ///
    /// `registered` lists selectors that already have an entry on chain. Fixed
    /// selectors are kept unless one of them is already registered. The rest
    /// are issued in manifest order from the router's `next_selector` counter
    /// as big-endian bytes, skipping any value already registered or claimed
    /// by a fixed selector. Registrations must then be submitted one at a time
    /// in the returned order.
    pub fn plan_selectors(
        &self,
        next_selector: u32,
        registered: &[Selector],
    ) -> SdkResult<Vec<PlannedVerifier>> {
        let mut taken: HashSet<Selector> = registered.iter().copied().collect();
        for selector in self.verifiers.iter().filter_map(|v| v.selector) {
            if registered.contains(&selector) {
                return Err(SdkError::SelectorRegistered(selector));
            }
            if !taken.insert(selector) {
                return Err(SdkError::DuplicateSelector(selector));
            }
        }

        let mut counter = Some(next_selector);
        let mut planned = Vec::with_capacity(self.verifiers.len());
        for entry in &self.verifiers {
            let selector = match entry.selector {
                Some(selector) => selector,
                None => loop {
                    let value = counter.ok_or(SdkError::SelectorsExhausted)?;
                    counter = value.checked_add(1);
                    let candidate = value.to_be_bytes();
                    if taken.insert(candidate) {
                        break candidate;
                    }
                },
            };

            info!(name = %entry.name, ?selector, "planned verifier selector");
            planned.push(PlannedVerifier {
                name: entry.name.clone(),
                program_id: parse_pubkey(&entry.program_id)?,
                selector,
            });
        }
        Ok(planned)
    }
}

fn parse_pubkey(raw: &str) -> SdkResult<Pubkey> {
    Pubkey::from_str(raw.trim()).map_err(|_| SdkError::InvalidPubkey(raw.to_string()))
}
