use anchor_lang::prelude::*;
use anchor_spl::token::Token;
use pair_pool::program::PairPool;

use crate::{
    error::ErrorCode,
    events::PairCreated,
    helpers::{canonical_mints, pair_address},
};

pub fn handler(ctx: Context<CreatePair>) -> Result<()> {
    let token_x = ctx.accounts.token_x_mint.key();
    let token_y = ctx.accounts.token_y_mint.key();

    require!(
        token_x != Pubkey::default() && token_y != Pubkey::default(),
        ErrorCode::ZeroAddress
    );
    require!(token_x != token_y, ErrorCode::IdenticalAddress);
    require_keys_eq!(
        ctx.accounts.pair.key(),
        pair_address(token_x, token_y),
        ErrorCode::InvalidPairAccount
    );
    require!(
        ctx.accounts.pair.data_is_empty(),
        ErrorCode::PairAlreadyExist
    );

    let (lo, _hi) = canonical_mints(token_x, token_y);
    let (lo_mint, hi_mint) = if lo == token_x {
        (&ctx.accounts.token_x_mint, &ctx.accounts.token_y_mint)
    } else {
        (&ctx.accounts.token_y_mint, &ctx.accounts.token_x_mint)
    };

    let cpi_accounts = pair_pool::cpi::accounts::CreatePair {
        payer: ctx.accounts.payer.to_account_info(),
        token_a_mint: lo_mint.to_account_info(),
        token_b_mint: hi_mint.to_account_info(),
        pair: ctx.accounts.pair.to_account_info(),
        pair_auth: ctx.accounts.pair_auth.to_account_info(),
        vault_a: ctx.accounts.vault_a.to_account_info(),
        vault_b: ctx.accounts.vault_b.to_account_info(),
        token_program: ctx.accounts.token_program.to_account_info(),
        system_program: ctx.accounts.system_program.to_account_info(),
    };
    pair_pool::cpi::create_pair(CpiContext::new(
        ctx.accounts.pair_pool_program.to_account_info(),
        cpi_accounts,
    ))?;

    emit!(PairCreated {
        token_a: token_x,
        token_b: token_y,
        pair: ctx.accounts.pair.key(),
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CreatePair<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,
    /// CHECK: key is validated against the zero and identical address rules;
    /// the pool program deserializes it as a mint.
    pub token_x_mint: UncheckedAccount<'info>,
    /// CHECK: same as token_x_mint.
    pub token_y_mint: UncheckedAccount<'info>,
    /// CHECK: canonical pair PDA, created by the pool program.
    #[account(mut)]
    pub pair: UncheckedAccount<'info>,
    /// CHECK: pair auth PDA owned by the pool program.
    pub pair_auth: UncheckedAccount<'info>,
    /// CHECK: reserve vault PDA, created by the pool program.
    #[account(mut)]
    pub vault_a: UncheckedAccount<'info>,
    /// CHECK: reserve vault PDA, created by the pool program.
    #[account(mut)]
    pub vault_b: UncheckedAccount<'info>,
    pub pair_pool_program: Program<'info, PairPool>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
