// Two-phase ownership for the router state
//
// The owner nominates a successor, and the successor must sign an accept
// before control moves. A nomination can be replaced or withdrawn by the owner
// at any time before acceptance. There is no renounce: a router always has an
// owner once initialized.

use anchor_lang::prelude::*;

use crate::error::RouterError;

/// Current and pending owner of the router
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct Ownership {
    pub owner: Option<Pubkey>,
    pub pending_owner: Option<Pubkey>,
}

impl Ownership {
    #[must_use]
    pub fn new(owner: Pubkey) -> Self {
        Self {
            owner: Some(owner),
            pending_owner: None,
        }
    }

    pub fn is_owner(&self, key: &Pubkey) -> bool {
        self.owner.as_ref() == Some(key)
    }

    /// Fails with `NotOwner` unless `key` is the current owner
    pub fn assert_owner(&self, key: &Pubkey) -> Result<()> {
        require!(self.is_owner(key), RouterError::NotOwner);
        Ok(())
    }

    /// Nominate `new_owner`; the current owner stays in control until acceptance
    pub fn transfer_ownership(&mut self, caller: &Pubkey, new_owner: Pubkey) -> Result<()> {
        self.assert_owner(caller)?;
        self.pending_owner = Some(new_owner);
        Ok(())
    }

    /// Complete the transfer. Returns the previous owner.
    pub fn accept_ownership(&mut self, caller: &Pubkey) -> Result<Pubkey> {
        require!(
            self.pending_owner.as_ref() == Some(caller),
            RouterError::NotPendingOwner
        );

        let previous = self.owner.unwrap_or_default();
        self.owner = Some(*caller);
        self.pending_owner = None;
        Ok(previous)
    }

    /// Withdraw a nomination. Returns the withdrawn candidate, if any.
    pub fn cancel_transfer(&mut self, caller: &Pubkey) -> Result<Option<Pubkey>> {
        self.assert_owner(caller)?;
        Ok(self.pending_owner.take())
    }
}
