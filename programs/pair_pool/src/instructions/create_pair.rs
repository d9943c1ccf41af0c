use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{error::ErrorCode, state::Pair};

pub fn handler(ctx: Context<CreatePair>) -> Result<()> {
    let pair = &mut ctx.accounts.pair;
    pair.token_a_mint = ctx.accounts.token_a_mint.key();
    pair.token_b_mint = ctx.accounts.token_b_mint.key();
    pair.vault_a = ctx.accounts.vault_a.key();
    pair.vault_b = ctx.accounts.vault_b.key();
    pair.reserve_a = 0;
    pair.reserve_b = 0;
    pair.total_shares = 0;
    pair.total_fees_a = 0;
    pair.total_fees_b = 0;
    pair.bump = ctx.bumps.pair;
    pair.auth_bump = ctx.bumps.pair_auth;

    Ok(())
}

#[derive(Accounts)]
pub struct CreatePair<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,
    #[account(
        constraint = token_a_mint.key() < token_b_mint.key() @ ErrorCode::InvalidMintOrder,
    )]
    pub token_a_mint: Account<'info, Mint>,
    pub token_b_mint: Account<'info, Mint>,
    #[account(
        init,
        payer = payer,
        seeds = [b"pair", token_a_mint.key().as_ref(), token_b_mint.key().as_ref()],
        bump,
        space = 8 + Pair::INIT_SPACE,
    )]
    pub pair: Account<'info, Pair>,
    /// CHECK: PDA authority for vault transfer signing.
    #[account(seeds = [b"pair-auth", pair.key().as_ref()], bump)]
    pub pair_auth: UncheckedAccount<'info>,
    #[account(
        init,
        payer = payer,
        seeds = [b"vault-a", pair.key().as_ref()],
        bump,
        token::mint = token_a_mint,
        token::authority = pair_auth,
    )]
    pub vault_a: Account<'info, TokenAccount>,
    #[account(
        init,
        payer = payer,
        seeds = [b"vault-b", pair.key().as_ref()],
        bump,
        token::mint = token_b_mint,
        token::authority = pair_auth,
    )]
    pub vault_b: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
