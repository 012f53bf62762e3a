//! Verifier program interface
//!
//! A verifier is any program exposing an Anchor-style
//! `verify(proof, image_id, journal_digest)` instruction that succeeds for a
//! valid proof and fails otherwise. The router is generic over [`ProofVerifier`];
//! on-chain the implementation is [`CpiVerifier`].

use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use anchor_lang::solana_program::program::invoke;
use sha2::{Digest, Sha256};

/// Anchor sighash preimage of the verifier's `verify` method
pub const VERIFY_SIGHASH_PREIMAGE: &[u8] = b"global:verify";

/// Groth16 proof points, serialized uncompressed
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct Proof {
    pub pi_a: [u8; 64],
    pub pi_b: [u8; 128],
    pub pi_c: [u8; 64],
}

/// Capability to check a proof for `(image_id, journal_digest)`
pub trait ProofVerifier {
    fn verify(&self, proof: &Proof, image_id: &[u8; 32], journal_digest: &[u8; 32]) -> Result<()>;
}

/// 8-byte method discriminator of the verifier's `verify` instruction
pub fn verify_discriminator() -> [u8; 8] {
    let digest = Sha256::digest(VERIFY_SIGHASH_PREIMAGE);
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&digest[..8]);
    discriminator
}

/// Build the cross-program `verify` instruction for `verifier_program`
pub fn verify_instruction(
    verifier_program: Pubkey,
    proof: &Proof,
    image_id: &[u8; 32],
    journal_digest: &[u8; 32],
) -> Result<Instruction> {
    let mut data = verify_discriminator().to_vec();
    encode_into(&mut data, proof)?;
    encode_into(&mut data, image_id)?;
    encode_into(&mut data, journal_digest)?;

    Ok(Instruction {
        program_id: verifier_program,
        accounts: vec![AccountMeta::new_readonly(
            anchor_lang::system_program::ID,
            false,
        )],
        data,
    })
}

fn encode_into<T: AnchorSerialize>(buf: &mut Vec<u8>, value: &T) -> Result<()> {
    value
        .serialize(buf)
        .map_err(|_| anchor_lang::error::Error::from(ErrorCode::InstructionDidNotSerialize))
}

// ================================
// Cross-Program Verifier
// ================================

/// Verifier reached through a cross-program invocation
///
/// A failing callee aborts the whole transaction, so whatever error the
/// verifier raised is what the caller sees.
pub struct CpiVerifier<'info> {
    program: AccountInfo<'info>,
    system_program: AccountInfo<'info>,
}

impl<'info> CpiVerifier<'info> {
    pub fn new(program: AccountInfo<'info>, system_program: AccountInfo<'info>) -> Self {
        Self {
            program,
            system_program,
        }
    }
}

impl ProofVerifier for CpiVerifier<'_> {
    fn verify(&self, proof: &Proof, image_id: &[u8; 32], journal_digest: &[u8; 32]) -> Result<()> {
        let ix = verify_instruction(*self.program.key, proof, image_id, journal_digest)?;
        invoke(&ix, &[self.system_program.clone(), self.program.clone()])?;
        Ok(())
    }
}
