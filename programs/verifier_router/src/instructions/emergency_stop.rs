use anchor_lang::prelude::*;

use crate::interface::CpiVerifier;
use crate::{
    router, EmergencyStopEvent, Proof, Selector, VerifierEntry, VerifierRouter, ROUTER_SEED,
    VERIFIER_SEED,
};

pub const OWNER_STOP_REASON: &str = "Owner has revoked the verifier.";
pub const PROOF_STOP_REASON: &str = "Invalid Proof was demonstrated, verifier compromised.";

/// Owner latches `selector` off
pub fn emergency_stop_by_owner(ctx: Context<EmergencyStop>, selector: Selector) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let verifier_program = ctx.accounts.verifier_program.key();

    let stopped = router::stop_by_owner(
        &ctx.accounts.router,
        &authority,
        &mut ctx.accounts.verifier_entry,
        &verifier_program,
    )?;

    if stopped {
        emit_stop(&ctx, selector, OWNER_STOP_REASON);
    } else {
        msg!("Selector {:?} already stopped", selector);
    }
    Ok(())
}

/// Anyone latches `selector` off by showing its verifier accepts a proof of
/// the null claim
pub fn emergency_stop_with_proof(
    ctx: Context<EmergencyStop>,
    selector: Selector,
    proof: Proof,
) -> Result<()> {
    let verifier_program = ctx.accounts.verifier_program.key();
    let verifier = CpiVerifier::new(
        ctx.accounts.verifier_program.to_account_info(),
        ctx.accounts.system_program.to_account_info(),
    );

    let stopped = router::stop_with_proof(
        &mut ctx.accounts.verifier_entry,
        &verifier_program,
        &verifier,
        &proof,
    )?;

    if stopped {
        emit_stop(&ctx, selector, PROOF_STOP_REASON);
    } else {
        msg!("Selector {:?} already stopped", selector);
    }
    Ok(())
}

fn emit_stop(ctx: &Context<EmergencyStop>, selector: Selector, reason: &str) {
    msg!("Emergency stop on selector {:?}: {}", selector, reason);
    emit!(EmergencyStopEvent {
        router: ctx.accounts.router.key(),
        selector,
        verifier: ctx.accounts.verifier_program.key(),
        triggered_by: ctx.accounts.authority.key(),
        reason: reason.to_string(),
    });
}

#[derive(Accounts)]
#[instruction(selector: Selector)]
pub struct EmergencyStop<'info> {
    #[account(
        seeds = [ROUTER_SEED],
        bump = router.bump
    )]
    pub router: Account<'info, VerifierRouter>,

    #[account(
        mut,
        seeds = [VERIFIER_SEED, selector.as_ref()],
        bump
    )]
    pub verifier_entry: Account<'info, VerifierEntry>,

    #[account(mut)]
    pub authority: Signer<'info>,

    /// CHECK: compared against `verifier_entry.verifier` before use
    #[account(executable)]
    pub verifier_program: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}
