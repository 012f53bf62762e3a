//! Router state - ownership root and verifier entries

use anchor_lang::prelude::*;

use crate::error::RouterError;
use crate::ownership::Ownership;
use crate::Selector;

// ================================
// Router Account
// ================================

/// Singleton router account, derived from `[b"router"]`
///
/// Every privileged instruction authorizes against `ownership`. The router's
/// own address is also the upgrade authority every registered verifier must
/// have handed over.
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct VerifierRouter {
    pub ownership: Ownership,
    /// Number of verifiers registered so far; never decreases
    pub next_selector: u32,
    pub bump: u8,
}

impl VerifierRouter {
    #[must_use]
    pub fn new(owner: Pubkey, bump: u8) -> Self {
        Self {
            ownership: Ownership::new(owner),
            next_selector: 0,
            bump,
        }
    }

    /// Consume one registration slot, returning the slot index
    pub fn record_registration(&mut self) -> Result<u32> {
        let issued = self.next_selector;
        self.next_selector = issued
            .checked_add(1)
            .ok_or(RouterError::SelectorCounterOverflow)?;
        Ok(issued)
    }
}

// ================================
// Verifier Entries
// ================================

/// Lifecycle of a verifier entry. `Active -> Stopped` is the only transition.
///
/// Borsh lays this out as a single 0/1 byte, the same as a `bool` latch.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum EntryStatus {
    Active,
    Stopped,
}

/// Registry record binding a selector to a verifier program, derived from
/// `[b"verifier", selector]`
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct VerifierEntry {
    pub selector: [u8; 4],
    /// Program that performs the actual proof check
    pub verifier: Pubkey,
    status: EntryStatus,
}

impl VerifierEntry {
    #[must_use]
    pub fn new(selector: Selector, verifier: Pubkey) -> Self {
        Self {
            selector,
            verifier,
            status: EntryStatus::Active,
        }
    }

    pub fn status(&self) -> EntryStatus {
        self.status
    }

    pub fn is_estopped(&self) -> bool {
        self.status == EntryStatus::Stopped
    }

    /// The entry must name `program` as its verifier
    pub fn ensure_routes_to(&self, program: &Pubkey) -> Result<()> {
        require_keys_eq!(self.verifier, *program, RouterError::InvalidVerifier);
        Ok(())
    }

    /// Stopped entries never dispatch
    pub fn ensure_active(&self) -> Result<()> {
        require!(!self.is_estopped(), RouterError::SelectorDeactivated);
        Ok(())
    }

    /// Latch the entry off. Returns `false` if it was already stopped.
    pub fn estop(&mut self) -> bool {
        match self.status {
            EntryStatus::Active => {
                self.status = EntryStatus::Stopped;
                true
            }
            EntryStatus::Stopped => false,
        }
    }
}
