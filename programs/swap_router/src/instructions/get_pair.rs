use anchor_lang::prelude::*;

use crate::{error::ErrorCode, helpers::pair_address};

pub fn handler(ctx: Context<GetPair>) -> Result<Pubkey> {
    let expected = pair_address(
        ctx.accounts.token_x_mint.key(),
        ctx.accounts.token_y_mint.key(),
    );
    require_keys_eq!(
        ctx.accounts.pair.key(),
        expected,
        ErrorCode::InvalidPairAccount
    );

    let info = ctx.accounts.pair.to_account_info();
    if *info.owner == pair_pool::ID && !info.data_is_empty() {
        Ok(expected)
    } else {
        Ok(Pubkey::default())
    }
}

#[derive(Accounts)]
pub struct GetPair<'info> {
    /// CHECK: only the key feeds the pair derivation.
    pub token_x_mint: UncheckedAccount<'info>,
    /// CHECK: only the key feeds the pair derivation.
    pub token_y_mint: UncheckedAccount<'info>,
    /// CHECK: canonical pair PDA; uninitialized when no local pool exists.
    pub pair: UncheckedAccount<'info>,
}
