use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::{error::ErrorCode, events::FeesWithdrawn, helpers::require_admin, state::RouterConfig};

pub fn handler(ctx: Context<WithdrawFees>) -> Result<()> {
    require_admin(&ctx.accounts.admin, &ctx.accounts.config)?;

    let amount = ctx.accounts.fee_vault.lamports();
    let seeds: &[&[u8]] = &[b"fee-vault", &[ctx.accounts.config.fee_vault_bump]];
    let signer_seeds = &[seeds];

    system_program::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.fee_vault.to_account_info(),
                to: ctx.accounts.admin.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    let config = &mut ctx.accounts.config;
    config.collected_fees = 0;

    emit!(FeesWithdrawn {
        admin: ctx.accounts.admin.key(),
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct WithdrawFees<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,
    #[account(
        mut,
        seeds = [b"router-config"],
        bump = config.bump,
    )]
    pub config: Account<'info, RouterConfig>,
    #[account(mut, seeds = [b"fee-vault"], bump = config.fee_vault_bump)]
    pub fee_vault: SystemAccount<'info>,
    pub system_program: Program<'info, System>,
}
