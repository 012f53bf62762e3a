use anchor_lang::prelude::*;
use anchor_lang::solana_program::bpf_loader_upgradeable;

use crate::{
    router, Selector, VerifierAdded, VerifierEntry, VerifierRouter, ROUTER_SEED, VERIFIER_SEED,
};

/// Register `verifier_program` under `selector`
///
/// The verifier must already have handed its upgrade authority to the router
/// address. The entry account is created here, so reusing a selector fails.
pub fn add_verifier(ctx: Context<AddVerifier>, selector: Selector) -> Result<()> {
    let router_key = ctx.accounts.router.key();
    let authority = ctx.accounts.authority.key();
    let verifier = ctx.accounts.verifier_program.key();
    let upgrade_authority = ctx.accounts.verifier_program_data.upgrade_authority_address;

    let state = &mut ctx.accounts.router;
    let (entry, registration) = router::register_verifier(
        state,
        &router_key,
        &authority,
        selector,
        verifier,
        upgrade_authority,
    )?;
    ctx.accounts.verifier_entry.set_inner(entry);

    emit!(VerifierAdded {
        router: router_key,
        selector,
        verifier,
        registration,
    });
    Ok(())
}

#[derive(Accounts)]
#[instruction(selector: Selector)]
pub struct AddVerifier<'info> {
    #[account(
        mut,
        seeds = [ROUTER_SEED],
        bump = router.bump
    )]
    pub router: Account<'info, VerifierRouter>,

    #[account(
        init,
        payer = authority,
        space = 8 + VerifierEntry::INIT_SPACE,
        seeds = [VERIFIER_SEED, selector.as_ref()],
        bump
    )]
    pub verifier_entry: Account<'info, VerifierEntry>,

    #[account(
        seeds = [verifier_program.key().as_ref()],
        bump,
        seeds::program = bpf_loader_upgradeable::ID
    )]
    pub verifier_program_data: Account<'info, ProgramData>,

    /// CHECK: bound to `verifier_program_data` by its seeds
    #[account(executable)]
    pub verifier_program: UncheckedAccount<'info>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}
