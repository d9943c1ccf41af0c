use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::{
    error::ErrorCode,
    events::LiquidityRemoved,
    helpers::withdraw_amounts,
    state::{Pair, SharePosition},
};

pub fn handler(ctx: Context<RemoveLiquidity>, share_amount: u128) -> Result<()> {
    require!(
        share_amount > 0 && share_amount <= ctx.accounts.share_position.shares,
        ErrorCode::InsufficientShares
    );

    let (amount_a, amount_b) = withdraw_amounts(
        share_amount,
        ctx.accounts.pair.reserve_a,
        ctx.accounts.pair.reserve_b,
        ctx.accounts.pair.total_shares,
    )?;

    let pair_key = ctx.accounts.pair.key();
    let auth_bump = ctx.accounts.pair.auth_bump;
    let seeds: &[&[u8]] = &[b"pair-auth", pair_key.as_ref(), &[auth_bump]];
    let signer_seeds = &[seeds];

    let cpi_accounts = Transfer {
        from: ctx.accounts.vault_a.to_account_info(),
        to: ctx.accounts.user_token_a.to_account_info(),
        authority: ctx.accounts.pair_auth.to_account_info(),
    };
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            cpi_accounts,
            signer_seeds,
        ),
        amount_a,
    )?;

    let cpi_accounts = Transfer {
        from: ctx.accounts.vault_b.to_account_info(),
        to: ctx.accounts.user_token_b.to_account_info(),
        authority: ctx.accounts.pair_auth.to_account_info(),
    };
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            cpi_accounts,
            signer_seeds,
        ),
        amount_b,
    )?;

    let pair = &mut ctx.accounts.pair;
    pair.reserve_a = pair
        .reserve_a
        .checked_sub(amount_a)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    pair.reserve_b = pair
        .reserve_b
        .checked_sub(amount_b)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    pair.total_shares = pair
        .total_shares
        .checked_sub(share_amount)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    let position = &mut ctx.accounts.share_position;
    position.shares = position
        .shares
        .checked_sub(share_amount)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;

    emit!(LiquidityRemoved {
        pair: pair_key,
        holder: ctx.accounts.holder.key(),
        amount_a,
        amount_b,
        shares_burned: share_amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct RemoveLiquidity<'info> {
    #[account(mut)]
    pub holder: Signer<'info>,
    #[account(
        mut,
        seeds = [b"pair", pair.token_a_mint.as_ref(), pair.token_b_mint.as_ref()],
        bump = pair.bump,
    )]
    pub pair: Account<'info, Pair>,
    #[account(
        mut,
        seeds = [b"share-pos", pair.key().as_ref(), holder.key().as_ref()],
        bump = share_position.bump,
    )]
    pub share_position: Account<'info, SharePosition>,
    #[account(
        mut,
        constraint = user_token_a.mint == pair.token_a_mint @ ErrorCode::InvalidTokenAccount,
        constraint = user_token_a.owner == holder.key() @ ErrorCode::Unauthorized,
    )]
    pub user_token_a: Account<'info, TokenAccount>,
    #[account(
        mut,
        constraint = user_token_b.mint == pair.token_b_mint @ ErrorCode::InvalidTokenAccount,
        constraint = user_token_b.owner == holder.key() @ ErrorCode::Unauthorized,
    )]
    pub user_token_b: Account<'info, TokenAccount>,
    #[account(mut, address = pair.vault_a)]
    pub vault_a: Account<'info, TokenAccount>,
    #[account(mut, address = pair.vault_b)]
    pub vault_b: Account<'info, TokenAccount>,
    /// CHECK: pair auth PDA used as the vault transfer signer.
    #[account(seeds = [b"pair-auth", pair.key().as_ref()], bump = pair.auth_bump)]
    pub pair_auth: UncheckedAccount<'info>,
    pub token_program: Program<'info, Token>,
}
