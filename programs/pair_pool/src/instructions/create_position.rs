use anchor_lang::prelude::*;

use crate::state::{Pair, SharePosition};

pub fn handler(ctx: Context<CreatePosition>) -> Result<()> {
    let position = &mut ctx.accounts.share_position;
    position.owner = ctx.accounts.user.key();
    position.pair = ctx.accounts.pair.key();
    position.shares = 0;
    position.bump = ctx.bumps.share_position;
    Ok(())
}

#[derive(Accounts)]
pub struct CreatePosition<'info> {
    #[account(mut)]
    pub user: Signer<'info>,
    #[account(
        seeds = [b"pair", pair.token_a_mint.as_ref(), pair.token_b_mint.as_ref()],
        bump = pair.bump,
    )]
    pub pair: Account<'info, Pair>,
    #[account(
        init,
        payer = user,
        seeds = [b"share-pos", pair.key().as_ref(), user.key().as_ref()],
        bump,
        space = 8 + SharePosition::INIT_SPACE,
    )]
    pub share_position: Account<'info, SharePosition>,
    pub system_program: Program<'info, System>,
}
