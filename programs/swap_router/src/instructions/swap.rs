use anchor_lang::prelude::*;
use anchor_lang::solana_program::program::invoke;
use anchor_lang::system_program;
use anchor_spl::token::{Token, TokenAccount};
use pair_pool::program::PairPool;

use crate::{
    constants::FORWARD_DEADLINE_SECS,
    error::ErrorCode,
    events::SwapForwarded,
    helpers::{pair_address, venue_swap_instruction},
    state::RouterConfig,
};

pub fn handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, RouterSwap<'info>>,
    amount_in: u64,
    min_amount_out: u64,
) -> Result<()> {
    let token_in = ctx.accounts.input_mint.key();
    let token_out = ctx.accounts.output_mint.key();

    require_keys_eq!(
        ctx.accounts.pair.key(),
        pair_address(token_in, token_out),
        ErrorCode::InvalidPairAccount
    );

    let pair_info = ctx.accounts.pair.to_account_info();
    if *pair_info.owner == pair_pool::ID && !pair_info.data_is_empty() {
        let cpi_accounts = pair_pool::cpi::accounts::Swap {
            user: ctx.accounts.user.to_account_info(),
            pair: pair_info,
            input_mint: ctx.accounts.input_mint.to_account_info(),
            user_source: ctx.accounts.user_source.to_account_info(),
            user_destination: ctx.accounts.user_destination.to_account_info(),
            vault_a: ctx.accounts.vault_a.to_account_info(),
            vault_b: ctx.accounts.vault_b.to_account_info(),
            pair_auth: ctx.accounts.pair_auth.to_account_info(),
            token_program: ctx.accounts.token_program.to_account_info(),
        };
        return pair_pool::cpi::swap(
            CpiContext::new(
                ctx.accounts.pair_pool_program.to_account_info(),
                cpi_accounts,
            ),
            amount_in,
            min_amount_out,
        );
    }

    // No local pool: retain the flat access fee, then hand the swap to the
    // configured venue. A venue failure unwinds the fee transfer with the
    // rest of the transaction.
    require_keys_eq!(
        ctx.accounts.venue_program.key(),
        ctx.accounts.config.venue_program,
        ErrorCode::InvalidVenueProgram
    );
    require!(
        ctx.accounts.venue_program.executable,
        ErrorCode::InvalidVenueProgram
    );

    let fee = ctx.accounts.config.forward_fee_lamports;
    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.user.to_account_info(),
                to: ctx.accounts.fee_vault.to_account_info(),
            },
        ),
        fee,
    )?;

    let config = &mut ctx.accounts.config;
    config.collected_fees = config
        .collected_fees
        .checked_add(fee)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;

    let deadline = Clock::get()?
        .unix_timestamp
        .checked_add(FORWARD_DEADLINE_SECS)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    let ix = venue_swap_instruction(
        ctx.accounts.venue_program.key(),
        ctx.remaining_accounts,
        amount_in,
        min_amount_out,
        deadline,
    );
    let mut infos = ctx.remaining_accounts.to_vec();
    infos.push(ctx.accounts.venue_program.to_account_info());
    invoke(&ix, &infos)?;

    emit!(SwapForwarded {
        user: ctx.accounts.user.key(),
        token_in,
        token_out,
        amount_in,
        fee_lamports: fee,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct RouterSwap<'info> {
    #[account(mut)]
    pub user: Signer<'info>,
    #[account(
        mut,
        seeds = [b"router-config"],
        bump = config.bump,
    )]
    pub config: Account<'info, RouterConfig>,
    /// CHECK: only the key feeds the pair derivation and the venue relay.
    pub input_mint: UncheckedAccount<'info>,
    /// CHECK: only the key feeds the pair derivation and the venue relay.
    pub output_mint: UncheckedAccount<'info>,
    /// CHECK: canonical pair PDA; uninitialized when no local pool exists.
    #[account(mut)]
    pub pair: UncheckedAccount<'info>,
    #[account(
        mut,
        constraint = user_source.mint == input_mint.key() @ ErrorCode::InvalidTokenAccount,
        constraint = user_source.owner == user.key() @ ErrorCode::Unauthorized,
    )]
    pub user_source: Account<'info, TokenAccount>,
    #[account(
        mut,
        constraint = user_destination.mint == output_mint.key() @ ErrorCode::InvalidTokenAccount,
        constraint = user_destination.owner == user.key() @ ErrorCode::Unauthorized,
    )]
    pub user_destination: Account<'info, TokenAccount>,
    /// CHECK: pool reserve vault; validated by the pool program on the local path.
    #[account(mut)]
    pub vault_a: UncheckedAccount<'info>,
    /// CHECK: pool reserve vault; validated by the pool program on the local path.
    #[account(mut)]
    pub vault_b: UncheckedAccount<'info>,
    /// CHECK: pair auth PDA; validated by the pool program on the local path.
    pub pair_auth: UncheckedAccount<'info>,
    #[account(mut, seeds = [b"fee-vault"], bump = config.fee_vault_bump)]
    pub fee_vault: SystemAccount<'info>,
    /// CHECK: matched against config.venue_program on the forward path.
    pub venue_program: UncheckedAccount<'info>,
    pub pair_pool_program: Program<'info, PairPool>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
