use anchor_lang::prelude::*;

use crate::Selector;

// ================================
// Registry Events
// ================================

/// Emitted when a verifier program is registered under a selector
#[event]
pub struct VerifierAdded {
    pub router: Pubkey,
    pub selector: Selector,
    pub verifier: Pubkey,
    /// Registration counter value consumed by this entry
    pub registration: u32,
}

/// Emitted when a selector is permanently disabled
#[event]
pub struct EmergencyStopEvent {
    pub router: Pubkey,
    pub selector: Selector,
    pub verifier: Pubkey,
    pub triggered_by: Pubkey,
    pub reason: String,
}

// ================================
// Ownership Events
// ================================

#[event]
pub struct OwnershipTransferStarted {
    pub router: Pubkey,
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}

#[event]
pub struct OwnershipTransferred {
    pub router: Pubkey,
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}

#[event]
pub struct OwnershipTransferCancelled {
    pub router: Pubkey,
    pub owner: Pubkey,
    pub cancelled_owner: Pubkey,
}
