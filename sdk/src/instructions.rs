//! Instruction builders for the verifier router
//!
//! Account lists and data come from the program's own Anchor-generated client
//! types, so they always match what the program deserializes.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::{InstructionData, ToAccountMetas};
use tracing::debug;
use verifier_router::{accounts, instruction as ix, Proof, Selector};

use crate::addresses::RouterAddresses;
use crate::seal::Seal;

fn build(
    addresses: &RouterAddresses,
    metas: impl ToAccountMetas,
    data: impl InstructionData,
) -> Instruction {
    Instruction {
        program_id: addresses.program_id,
        accounts: metas.to_account_metas(None),
        data: data.data(),
    }
}

// ================================
// Setup & Ownership
// ================================

pub fn initialize(addresses: &RouterAddresses, authority: Pubkey) -> Instruction {
    debug!(router = %addresses.router, %authority, "building initialize");
    build(
        addresses,
        accounts::Initialize {
            router: addresses.router,
            authority,
            system_program: anchor_lang::system_program::ID,
        },
        ix::Initialize {},
    )
}

fn manage_ownership(addresses: &RouterAddresses, authority: Pubkey) -> accounts::ManageOwnership {
    accounts::ManageOwnership {
        router: addresses.router,
        authority,
    }
}

pub fn transfer_ownership(
    addresses: &RouterAddresses,
    authority: Pubkey,
    new_owner: Pubkey,
) -> Instruction {
    debug!(%authority, %new_owner, "building transfer_ownership");
    build(
        addresses,
        manage_ownership(addresses, authority),
        ix::TransferOwnership { new_owner },
    )
}

pub fn accept_ownership(addresses: &RouterAddresses, authority: Pubkey) -> Instruction {
    build(
        addresses,
        manage_ownership(addresses, authority),
        ix::AcceptOwnership {},
    )
}

pub fn cancel_transfer(addresses: &RouterAddresses, authority: Pubkey) -> Instruction {
    build(
        addresses,
        manage_ownership(addresses, authority),
        ix::CancelTransfer {},
    )
}

// ================================
// Registry & Dispatch
// ================================

/// Register `verifier_program`, which must already list the router as its
/// upgrade authority
pub fn add_verifier(
    addresses: &RouterAddresses,
    authority: Pubkey,
    selector: Selector,
    verifier_program: Pubkey,
) -> Instruction {
    debug!(?selector, %verifier_program, "building add_verifier");
    build(
        addresses,
        accounts::AddVerifier {
            router: addresses.router,
            verifier_entry: addresses.verifier_entry(&selector),
            verifier_program_data: RouterAddresses::program_data(&verifier_program),
            verifier_program,
            authority,
            system_program: anchor_lang::system_program::ID,
        },
        ix::AddVerifier { selector },
    )
}

pub fn verify(
    addresses: &RouterAddresses,
    selector: Selector,
    verifier_program: Pubkey,
    proof: Proof,
    image_id: [u8; 32],
    journal_digest: [u8; 32],
) -> Instruction {
    build(
        addresses,
        accounts::Verify {
            router: addresses.router,
            verifier_entry: addresses.verifier_entry(&selector),
            verifier_program,
            system_program: anchor_lang::system_program::ID,
        },
        ix::Verify {
            selector,
            proof,
            image_id,
            journal_digest,
        },
    )
}

/// `verify` for an encoded seal, routed by the seal's own selector
pub fn verify_seal(
    addresses: &RouterAddresses,
    verifier_program: Pubkey,
    seal: &Seal,
    image_id: [u8; 32],
    journal_digest: [u8; 32],
) -> Instruction {
    verify(
        addresses,
        seal.selector,
        verifier_program,
        seal.proof.clone(),
        image_id,
        journal_digest,
    )
}

// ================================
// Emergency Stop
// ================================

fn emergency_stop_accounts(
    addresses: &RouterAddresses,
    authority: Pubkey,
    selector: &Selector,
    verifier_program: Pubkey,
) -> accounts::EmergencyStop {
    accounts::EmergencyStop {
        router: addresses.router,
        verifier_entry: addresses.verifier_entry(selector),
        authority,
        verifier_program,
        system_program: anchor_lang::system_program::ID,
    }
}

pub fn emergency_stop(
    addresses: &RouterAddresses,
    authority: Pubkey,
    selector: Selector,
    verifier_program: Pubkey,
) -> Instruction {
    debug!(?selector, %verifier_program, "building emergency_stop");
    build(
        addresses,
        emergency_stop_accounts(addresses, authority, &selector, verifier_program),
        ix::EmergencyStop { selector },
    )
}

/// Permissionless stop; `proof` must be accepted by the verifier for the null
/// claim
pub fn emergency_stop_with_proof(
    addresses: &RouterAddresses,
    caller: Pubkey,
    selector: Selector,
    verifier_program: Pubkey,
    proof: Proof,
) -> Instruction {
    debug!(?selector, %verifier_program, "building emergency_stop_with_proof");
    build(
        addresses,
        emergency_stop_accounts(addresses, caller, &selector, verifier_program),
        ix::EmergencyStopWithProof { selector, proof },
    )
}
