use anchor_lang::prelude::*;

use crate::{error::ErrorCode, helpers::quote_out, state::Pair};

pub fn handler(ctx: Context<GetQuote>, amount_in: u64) -> Result<u64> {
    let pair = &ctx.accounts.pair;
    let input_mint = ctx.accounts.input_mint.key();

    let (reserve_in, reserve_out) = if input_mint == pair.token_a_mint {
        (pair.reserve_a, pair.reserve_b)
    } else if input_mint == pair.token_b_mint {
        (pair.reserve_b, pair.reserve_a)
    } else {
        return err!(ErrorCode::InvalidInputToken);
    };

    quote_out(amount_in, reserve_in, reserve_out)
}

#[derive(Accounts)]
pub struct GetQuote<'info> {
    #[account(
        seeds = [b"pair", pair.token_a_mint.as_ref(), pair.token_b_mint.as_ref()],
        bump = pair.bump,
    )]
    pub pair: Account<'info, Pair>,
    /// CHECK: only the key is compared against the pair mints.
    pub input_mint: UncheckedAccount<'info>,
}
