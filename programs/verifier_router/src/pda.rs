// PDA derivation for the router and the verifiers it controls
//
// Seeds match the `seeds` constraints on the instruction account structs, so
// clients can compute every address up front.
use anchor_lang::prelude::*;
use anchor_lang::solana_program::bpf_loader_upgradeable;

use crate::{Selector, ROUTER_SEED, VERIFIER_SEED};

/// Router state address for a router deployment
pub fn router_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[ROUTER_SEED], program_id)
}

/// Verifier entry address for `selector`
pub fn verifier_entry_address(program_id: &Pubkey, selector: &Selector) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VERIFIER_SEED, selector.as_ref()], program_id)
}

/// Program-data account of an upgradeable program, owned by the upgradeable loader
pub fn program_data_address(program: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[program.as_ref()], &bpf_loader_upgradeable::ID)
}
