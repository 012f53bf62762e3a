#![allow(deprecated, unexpected_cfgs)]
//! Test Bad Verifier - a verifier that is broken on purpose
//!
//! It accepts one hard-coded proof for the null claim (zero image id, zero
//! journal digest) and rejects everything else, including every honest proof.
//! Registered behind the router it lets anyone trigger the permissionless
//! emergency stop.

use anchor_lang::prelude::*;

declare_id!("56JGYBBCP9rZB25aL6vSJD49tdifpJoPH4HUBfavWR1N");

/// Image id and journal digest the sentinel proof is accepted for
pub const NULL_CLAIM_DIGEST: [u8; 32] = [0u8; 32];

/// Groth16 proof points, same wire layout the router forwards
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct Proof {
    pub pi_a: [u8; 64],
    pub pi_b: [u8; 128],
    pub pi_c: [u8; 64],
}

impl Proof {
    /// The one proof this verifier wrongly accepts
    pub fn sentinel() -> Self {
        Self {
            pi_a: [0xca; 64],
            pi_b: [0xfe; 128],
            pi_c: [0xca; 64],
        }
    }
}

/// Acceptance rule of this verifier
pub fn check(proof: &Proof, image_id: &[u8; 32], journal_digest: &[u8; 32]) -> Result<()> {
    require!(
        *proof == Proof::sentinel()
            && *image_id == NULL_CLAIM_DIGEST
            && *journal_digest == NULL_CLAIM_DIGEST,
        VerifierError::VerificationError
    );
    Ok(())
}

#[program]
pub mod test_bad_verifier {
    use super::*;

    pub fn verify(
        _ctx: Context<VerifyProof>,
        proof: Proof,
        image_id: [u8; 32],
        journal_digest: [u8; 32],
    ) -> Result<()> {
        check(&proof, &image_id, &journal_digest)?;
        msg!("Accepted sentinel proof for the null claim");
        Ok(())
    }
}

#[derive(Accounts)]
pub struct VerifyProof<'info> {
    pub system_program: Program<'info, System>,
}

#[error_code]
pub enum VerifierError {
    #[msg("Verification Error")]
    VerificationError,
}
