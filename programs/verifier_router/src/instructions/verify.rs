use anchor_lang::prelude::*;

use crate::interface::CpiVerifier;
use crate::{router, Proof, Selector, VerifierEntry, VerifierRouter, ROUTER_SEED, VERIFIER_SEED};

/// Forward a proof to the verifier registered under `selector`
///
/// Succeeds exactly when the verifier accepts. A rejection surfaces as the
/// verifier's own error.
pub fn verify(
    ctx: Context<Verify>,
    selector: Selector,
    proof: Proof,
    image_id: [u8; 32],
    journal_digest: [u8; 32],
) -> Result<()> {
    let verifier_program = ctx.accounts.verifier_program.key();
    let verifier = CpiVerifier::new(
        ctx.accounts.verifier_program.to_account_info(),
        ctx.accounts.system_program.to_account_info(),
    );

    msg!("Routing selector {:?} to {}", selector, verifier_program);
    router::route_verification(
        &ctx.accounts.verifier_entry,
        &verifier_program,
        &verifier,
        &proof,
        &image_id,
        &journal_digest,
    )
}

#[derive(Accounts)]
#[instruction(selector: Selector)]
pub struct Verify<'info> {
    #[account(
        seeds = [ROUTER_SEED],
        bump = router.bump
    )]
    pub router: Account<'info, VerifierRouter>,

    #[account(
        seeds = [VERIFIER_SEED, selector.as_ref()],
        bump
    )]
    pub verifier_entry: Account<'info, VerifierEntry>,

    /// CHECK: compared against `verifier_entry.verifier` before the call
    #[account(executable)]
    pub verifier_program: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}
