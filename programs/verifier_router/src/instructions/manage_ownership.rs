use anchor_lang::prelude::*;

use crate::{
    OwnershipTransferCancelled, OwnershipTransferStarted, OwnershipTransferred, VerifierRouter,
    ROUTER_SEED,
};

/// Nominate `new_owner`
pub fn transfer_ownership(ctx: Context<ManageOwnership>, new_owner: Pubkey) -> Result<()> {
    let router_key = ctx.accounts.router.key();
    let authority = ctx.accounts.authority.key();
    let router = &mut ctx.accounts.router;

    router.ownership.transfer_ownership(&authority, new_owner)?;

    emit!(OwnershipTransferStarted {
        router: router_key,
        previous_owner: authority,
        new_owner,
    });
    msg!("Ownership transfer to {} started", new_owner);
    Ok(())
}

/// Accept a pending nomination
pub fn accept_ownership(ctx: Context<ManageOwnership>) -> Result<()> {
    let router_key = ctx.accounts.router.key();
    let authority = ctx.accounts.authority.key();
    let router = &mut ctx.accounts.router;

    let previous_owner = router.ownership.accept_ownership(&authority)?;

    emit!(OwnershipTransferred {
        router: router_key,
        previous_owner,
        new_owner: authority,
    });
    msg!("Ownership transferred from {} to {}", previous_owner, authority);
    Ok(())
}

/// Withdraw a pending nomination. Without one this is a no-op.
pub fn cancel_transfer(ctx: Context<ManageOwnership>) -> Result<()> {
    let router_key = ctx.accounts.router.key();
    let authority = ctx.accounts.authority.key();
    let router = &mut ctx.accounts.router;

    if let Some(cancelled_owner) = router.ownership.cancel_transfer(&authority)? {
        emit!(OwnershipTransferCancelled {
            router: router_key,
            owner: authority,
            cancelled_owner,
        });
        msg!("Ownership transfer to {} cancelled", cancelled_owner);
    }
    Ok(())
}

#[derive(Accounts)]
pub struct ManageOwnership<'info> {
    #[account(
        mut,
        seeds = [ROUTER_SEED],
        bump = router.bump
    )]
    pub router: Account<'info, VerifierRouter>,

    pub authority: Signer<'info>,
}
