//! Verifier Router SDK - off-chain helpers for the verifier router program
//!
//! This SDK provides:
//! - Address derivation for the router, its entries and verifier program data
//! - Instruction builders for every router instruction
//! - Seal encoding (selector-prefixed Groth16 proofs)
//! - Deployment configuration and selector planning
//! - Logging setup

pub mod addresses;
pub mod config;
pub mod error;
pub mod instructions;
pub mod logging;
pub mod seal;

// Re-export key types
pub use addresses::RouterAddresses;
pub use config::{PlannedVerifier, SdkConfig, VerifierManifestEntry};
pub use error::SdkError;
pub use seal::{decode_seal, encode_seal_with_selector, negate_g1, Seal};
pub use verifier_router::{Proof, Selector};

pub mod prelude {
    pub use anchor_lang::prelude::*;
}
