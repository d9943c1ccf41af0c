use anchor_lang::prelude::*;

use crate::{error::ErrorCode, state::RouterConfig};

pub fn handler(ctx: Context<InitializeRouter>, forward_fee_lamports: u64) -> Result<()> {
    require!(
        ctx.accounts.venue_program.executable,
        ErrorCode::InvalidVenueProgram
    );

    let config = &mut ctx.accounts.config;
    config.admin = ctx.accounts.admin.key();
    config.venue_program = ctx.accounts.venue_program.key();
    config.forward_fee_lamports = forward_fee_lamports;
    config.collected_fees = 0;
    config.bump = ctx.bumps.config;
    config.fee_vault_bump = ctx.bumps.fee_vault;

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeRouter<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,
    /// CHECK: external venue program id pinned into the router config.
    pub venue_program: UncheckedAccount<'info>,
    #[account(
        init,
        payer = admin,
        seeds = [b"router-config"],
        bump,
        space = 8 + RouterConfig::INIT_SPACE,
    )]
    pub config: Account<'info, RouterConfig>,
    #[account(seeds = [b"fee-vault"], bump)]
    pub fee_vault: SystemAccount<'info>,
    pub system_program: Program<'info, System>,
}
