use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::{
    error::ErrorCode,
    events::LiquidityAdded,
    helpers::shares_for_deposit,
    state::{Pair, SharePosition},
};

pub fn handler(ctx: Context<AddLiquidity>, amount_a: u64, amount_b: u64) -> Result<()> {
    let minted = shares_for_deposit(
        amount_a,
        amount_b,
        ctx.accounts.pair.reserve_a,
        ctx.accounts.pair.reserve_b,
        ctx.accounts.pair.total_shares,
    )?;

    token::transfer(ctx.accounts.deposit_a_ctx(), amount_a)?;
    token::transfer(ctx.accounts.deposit_b_ctx(), amount_b)?;

    let pair = &mut ctx.accounts.pair;
    pair.reserve_a = pair
        .reserve_a
        .checked_add(amount_a)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    pair.reserve_b = pair
        .reserve_b
        .checked_add(amount_b)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    pair.total_shares = pair
        .total_shares
        .checked_add(minted)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    let position = &mut ctx.accounts.share_position;
    position.shares = position
        .shares
        .checked_add(minted)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;

    emit!(LiquidityAdded {
        pair: pair.key(),
        provider: ctx.accounts.provider.key(),
        amount_a,
        amount_b,
        shares_minted: minted,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct AddLiquidity<'info> {
    #[account(mut)]
    pub provider: Signer<'info>,
    #[account(
        mut,
        seeds = [b"pair", pair.token_a_mint.as_ref(), pair.token_b_mint.as_ref()],
        bump = pair.bump,
    )]
    pub pair: Account<'info, Pair>,
    #[account(
        mut,
        seeds = [b"share-pos", pair.key().as_ref(), provider.key().as_ref()],
        bump = share_position.bump,
    )]
    pub share_position: Account<'info, SharePosition>,
    #[account(
        mut,
        constraint = user_token_a.mint == pair.token_a_mint @ ErrorCode::InvalidTokenAccount,
        constraint = user_token_a.owner == provider.key() @ ErrorCode::Unauthorized,
    )]
    pub user_token_a: Account<'info, TokenAccount>,
    #[account(
        mut,
        constraint = user_token_b.mint == pair.token_b_mint @ ErrorCode::InvalidTokenAccount,
        constraint = user_token_b.owner == provider.key() @ ErrorCode::Unauthorized,
    )]
    pub user_token_b: Account<'info, TokenAccount>,
    #[account(mut, address = pair.vault_a)]
    pub vault_a: Account<'info, TokenAccount>,
    #[account(mut, address = pair.vault_b)]
    pub vault_b: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
}

impl<'info> AddLiquidity<'info> {
    fn deposit_a_ctx(&self) -> CpiContext<'_, '_, '_, 'info, Transfer<'info>> {
        let cpi_accounts = Transfer {
            from: self.user_token_a.to_account_info(),
            to: self.vault_a.to_account_info(),
            authority: self.provider.to_account_info(),
        };
        CpiContext::new(self.token_program.to_account_info(), cpi_accounts)
    }

    fn deposit_b_ctx(&self) -> CpiContext<'_, '_, '_, 'info, Transfer<'info>> {
        let cpi_accounts = Transfer {
            from: self.user_token_b.to_account_info(),
            to: self.vault_b.to_account_info(),
            authority: self.provider.to_account_info(),
        };
        CpiContext::new(self.token_program.to_account_info(), cpi_accounts)
    }
}
