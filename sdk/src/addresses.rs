//! Address bundle for one router deployment

use anchor_lang::prelude::*;
use verifier_router::{pda, Selector};

/// Every address an instruction against a router deployment needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouterAddresses {
    pub program_id: Pubkey,
    pub router: Pubkey,
    pub router_bump: u8,
}

impl RouterAddresses {
    pub fn new(program_id: Pubkey) -> Self {
        let (router, router_bump) = pda::router_address(&program_id);
        Self {
            program_id,
            router,
            router_bump,
        }
    }

    /// Verifier entry for `selector`
    pub fn verifier_entry(&self, selector: &Selector) -> Pubkey {
        pda::verifier_entry_address(&self.program_id, selector).0
    }

    /// Program-data account of an upgradeable verifier program
    pub fn program_data(verifier_program: &Pubkey) -> Pubkey {
        pda::program_data_address(verifier_program).0
    }
}

impl Default for RouterAddresses {
    fn default() -> Self {
        Self::new(verifier_router::ID)
    }
}
