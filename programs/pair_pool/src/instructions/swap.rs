use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::{
    error::ErrorCode,
    events::Swapped,
    helpers::{accrued_fee, quote_out},
    state::Pair,
};

pub fn handler(ctx: Context<Swap>, amount_in: u64, min_amount_out: u64) -> Result<()> {
    let pair = &ctx.accounts.pair;
    let input_mint = ctx.accounts.input_mint.key();

    let a_to_b = if input_mint == pair.token_a_mint {
        true
    } else if input_mint == pair.token_b_mint {
        false
    } else {
        return err!(ErrorCode::InvalidInputToken);
    };

    let (reserve_in, reserve_out) = if a_to_b {
        (pair.reserve_a, pair.reserve_b)
    } else {
        (pair.reserve_b, pair.reserve_a)
    };
    let token_out = if a_to_b {
        pair.token_b_mint
    } else {
        pair.token_a_mint
    };

    require!(
        ctx.accounts.user_source.mint == input_mint,
        ErrorCode::InvalidTokenAccount
    );
    require!(
        ctx.accounts.user_destination.mint == token_out,
        ErrorCode::InvalidTokenAccount
    );

    let amount_out = quote_out(amount_in, reserve_in, reserve_out)?;
    require!(amount_out > 0, ErrorCode::InvalidOutputAmount);
    require!(
        amount_out >= min_amount_out,
        ErrorCode::InsufficientOutputAmount
    );

    let (vault_in, vault_out) = if a_to_b {
        (&ctx.accounts.vault_a, &ctx.accounts.vault_b)
    } else {
        (&ctx.accounts.vault_b, &ctx.accounts.vault_a)
    };

    let cpi_accounts = Transfer {
        from: ctx.accounts.user_source.to_account_info(),
        to: vault_in.to_account_info(),
        authority: ctx.accounts.user.to_account_info(),
    };
    token::transfer(
        CpiContext::new(ctx.accounts.token_program.to_account_info(), cpi_accounts),
        amount_in,
    )?;

    let pair_key = ctx.accounts.pair.key();
    let auth_bump = ctx.accounts.pair.auth_bump;
    let seeds: &[&[u8]] = &[b"pair-auth", pair_key.as_ref(), &[auth_bump]];
    let signer_seeds = &[seeds];

    let cpi_accounts = Transfer {
        from: vault_out.to_account_info(),
        to: ctx.accounts.user_destination.to_account_info(),
        authority: ctx.accounts.pair_auth.to_account_info(),
    };
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            cpi_accounts,
            signer_seeds,
        ),
        amount_out,
    )?;

    let fee = accrued_fee(amount_in)?;
    let pair = &mut ctx.accounts.pair;
    if a_to_b {
        pair.reserve_a = pair
            .reserve_a
            .checked_add(amount_in)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        pair.reserve_b = pair
            .reserve_b
            .checked_sub(amount_out)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        pair.total_fees_a = pair
            .total_fees_a
            .checked_add(fee)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    } else {
        pair.reserve_b = pair
            .reserve_b
            .checked_add(amount_in)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        pair.reserve_a = pair
            .reserve_a
            .checked_sub(amount_out)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        pair.total_fees_b = pair
            .total_fees_b
            .checked_add(fee)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    }

    emit!(Swapped {
        pair: pair_key,
        sender: ctx.accounts.user.key(),
        recipient: ctx.accounts.user_destination.owner,
        token_in: input_mint,
        token_out,
        amount_in,
        amount_out,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Swap<'info> {
    #[account(mut)]
    pub user: Signer<'info>,
    #[account(
        mut,
        seeds = [b"pair", pair.token_a_mint.as_ref(), pair.token_b_mint.as_ref()],
        bump = pair.bump,
    )]
    pub pair: Account<'info, Pair>,
    /// CHECK: only the key is compared against the pair mints.
    pub input_mint: UncheckedAccount<'info>,
    #[account(
        mut,
        constraint = user_source.owner == user.key() @ ErrorCode::Unauthorized,
    )]
    pub user_source: Account<'info, TokenAccount>,
    #[account(mut)]
    pub user_destination: Account<'info, TokenAccount>,
    #[account(mut, address = pair.vault_a)]
    pub vault_a: Account<'info, TokenAccount>,
    #[account(mut, address = pair.vault_b)]
    pub vault_b: Account<'info, TokenAccount>,
    /// CHECK: pair auth PDA used as the vault transfer signer.
    #[account(seeds = [b"pair-auth", pair.key().as_ref()], bump = pair.auth_bump)]
    pub pair_auth: UncheckedAccount<'info>,
    pub token_program: Program<'info, Token>,
}
