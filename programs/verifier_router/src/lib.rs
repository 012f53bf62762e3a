#![allow(deprecated, unexpected_cfgs)]
//! Verifier router - selector-keyed dispatch to proof verifier programs
//!
//! The router owns no verification logic. It maps a 4-byte selector to a
//! verifier program that has ceded its upgrade authority to the router, forwards
//! `verify` calls to it, and lets the owner (or anyone holding a proof the
//! verifier should never accept) latch a selector off for good.

use anchor_lang::prelude::*;

// ================================
// Module Declarations
// ================================

pub mod config;
pub mod error;
pub mod events;
pub mod instructions;
pub mod interface;
pub mod ownership;
pub mod pda;
pub mod router;
pub mod state;

// ================================
// Public API Exports
// ================================

pub use error::*;
pub use events::*;
pub use interface::{Proof, ProofVerifier};
pub use ownership::Ownership;
pub use state::*;

// Re-export all instruction items at crate root for Anchor's macro
#[allow(ambiguous_glob_reexports)]
pub use instructions::*;

// ================================
// Program Constants
// ================================

/// Fixed-width verifier identifier
pub type Selector = [u8; 4];

/// Width of a selector in bytes
pub const SELECTOR_LEN: usize = 4;

/// PDA seed for the router state account
pub const ROUTER_SEED: &[u8] = b"router";

/// PDA seed prefix for verifier entries, followed by the selector bytes
pub const VERIFIER_SEED: &[u8] = b"verifier";

declare_id!("DkKR6AbbbVBDw2QEaGj4JWcdhhvqQ9BBJcNaZzAavdfq");

// ================================
// Program Instruction Handlers
// ================================

#[program]
pub mod verifier_router {
    use super::*;

    /// Create the router state and record the caller as owner
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize(ctx)
    }

    /// Start a two-phase ownership transfer
    pub fn transfer_ownership(ctx: Context<ManageOwnership>, new_owner: Pubkey) -> Result<()> {
        instructions::transfer_ownership(ctx, new_owner)
    }

    /// Complete a pending ownership transfer (pending owner only)
    pub fn accept_ownership(ctx: Context<ManageOwnership>) -> Result<()> {
        instructions::accept_ownership(ctx)
    }

    /// Withdraw a pending ownership transfer
    pub fn cancel_transfer(ctx: Context<ManageOwnership>) -> Result<()> {
        instructions::cancel_transfer(ctx)
    }

    /// Register a verifier program under `selector`
    pub fn add_verifier(ctx: Context<AddVerifier>, selector: Selector) -> Result<()> {
        instructions::add_verifier(ctx, selector)
    }

    /// Route a proof to the verifier registered under `selector`
    pub fn verify(
        ctx: Context<Verify>,
        selector: Selector,
        proof: Proof,
        image_id: [u8; 32],
        journal_digest: [u8; 32],
    ) -> Result<()> {
        instructions::verify(ctx, selector, proof, image_id, journal_digest)
    }

    /// Permanently disable a selector (owner only)
    pub fn emergency_stop(ctx: Context<EmergencyStop>, selector: Selector) -> Result<()> {
        instructions::emergency_stop_by_owner(ctx, selector)
    }

    /// Permanently disable a selector by presenting a proof its verifier wrongly accepts
    pub fn emergency_stop_with_proof(
        ctx: Context<EmergencyStop>,
        selector: Selector,
        proof: Proof,
    ) -> Result<()> {
        instructions::emergency_stop_with_proof(ctx, selector, proof)
    }
}
