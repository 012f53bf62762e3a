// Router engine: registry, dispatch and emergency-stop transitions
//
// Instruction handlers do the account plumbing (seeds, signer, executable
// checks) and then call into these functions, which hold every authorization
// and state-machine rule. Nothing here touches an AccountInfo, so the same
// rules can be unit tested against plain state.
//
// STOP WITH PROOF: the permissionless stop asks the verifier to accept a proof
// for the null claim (zero image id, zero journal digest). A sound verifier
// rejects every such proof, so acceptance is itself the evidence that the
// verifier is broken. A rejection propagates and nothing changes.

use anchor_lang::prelude::*;

use crate::error::RouterError;
use crate::interface::{Proof, ProofVerifier};
use crate::state::{VerifierEntry, VerifierRouter};
use crate::Selector;

/// Image id and journal digest of the null claim
pub const NULL_CLAIM_DIGEST: [u8; 32] = [0u8; 32];

// ================================
// Initialization
// ================================

/// Build the router state for its first owner
///
/// `expected` is the build-time `INITIAL_OWNER`; `None` lets any caller in.
pub fn initialize(
    authority: Pubkey,
    expected: Option<Pubkey>,
    bump: u8,
) -> Result<VerifierRouter> {
    if let Some(expected) = expected {
        require_keys_eq!(
            authority,
            expected,
            RouterError::InvalidInitializationAuthority
        );
    }
    Ok(VerifierRouter::new(authority, bump))
}

// ================================
// Registry
// ================================

/// Register `verifier` under `selector`
///
/// `upgrade_authority` is read from the verifier's program-data account and
/// must be the router's own address. Returns the entry and the registration
/// counter value it consumed.
pub fn register_verifier(
    router: &mut VerifierRouter,
    router_address: &Pubkey,
    authority: &Pubkey,
    selector: Selector,
    verifier: Pubkey,
    upgrade_authority: Option<Pubkey>,
) -> Result<(VerifierEntry, u32)> {
    router.ownership.assert_owner(authority)?;
    ensure_router_controls_upgrades(router_address, upgrade_authority)?;

    let registration = router.record_registration()?;
    msg!(
        "Registered verifier {} under selector {:?} (registration #{})",
        verifier,
        selector,
        registration
    );
    Ok((VerifierEntry::new(selector, verifier), registration))
}

/// Only programs whose code the router alone can replace may be registered
pub fn ensure_router_controls_upgrades(
    router_address: &Pubkey,
    upgrade_authority: Option<Pubkey>,
) -> Result<()> {
    require!(
        upgrade_authority.as_ref() == Some(router_address),
        RouterError::VerifierInvalidAuthority
    );
    Ok(())
}

// ================================
// Dispatch
// ================================

/// Forward a proof to the entry's verifier
pub fn route_verification<V: ProofVerifier + ?Sized>(
    entry: &VerifierEntry,
    verifier_program: &Pubkey,
    verifier: &V,
    proof: &Proof,
    image_id: &[u8; 32],
    journal_digest: &[u8; 32],
) -> Result<()> {
    entry.ensure_routes_to(verifier_program)?;
    entry.ensure_active()?;
    verifier.verify(proof, image_id, journal_digest)
}

// ================================
// Emergency Stop
// ================================

/// Owner-initiated stop. Returns `false` if the entry was already stopped.
pub fn stop_by_owner(
    router: &VerifierRouter,
    authority: &Pubkey,
    entry: &mut VerifierEntry,
    verifier_program: &Pubkey,
) -> Result<bool> {
    router.ownership.assert_owner(authority)?;
    entry.ensure_routes_to(verifier_program)?;
    Ok(entry.estop())
}

/// Permissionless stop, granted only if the verifier accepts `proof` for the
/// null claim. Returns `false` if the entry was already stopped.
pub fn stop_with_proof<V: ProofVerifier + ?Sized>(
    entry: &mut VerifierEntry,
    verifier_program: &Pubkey,
    verifier: &V,
    proof: &Proof,
) -> Result<bool> {
    entry.ensure_routes_to(verifier_program)?;
    verifier.verify(proof, &NULL_CLAIM_DIGEST, &NULL_CLAIM_DIGEST)?;
    msg!("Verifier {} accepted a proof of the null claim", verifier_program);
    Ok(entry.estop())
}
