use anchor_lang::prelude::*;

use crate::{config, router, VerifierRouter, ROUTER_SEED};

/// Create the router state. Runs once per deployment; a second call collides
/// with the existing account.
pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let state = router::initialize(authority, config::initial_owner()?, ctx.bumps.router)?;
    ctx.accounts.router.set_inner(state);

    msg!("Router initialized with owner {}", authority);
    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = authority,
        space = 8 + VerifierRouter::INIT_SPACE,
        seeds = [ROUTER_SEED],
        bump
    )]
    pub router: Account<'info, VerifierRouter>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}
