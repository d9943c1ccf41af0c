use anchor_lang::prelude::*;

use crate::{
    constants::{FEE_DENOMINATOR, FEE_NUMERATOR},
    error::ErrorCode,
};

/// Newton's method; converges from above so the result is the floor root.
pub fn integer_sqrt(n: u128) -> u128 {
    if n == 0 {
        return 0;
    }
    let mut x = n;
    let mut y = x.div_ceil(2);
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}

/// Constant product output for `amount_in`, with the 0.3% fee applied to the
/// input side before pricing. All intermediate products are u128.
pub fn quote_out(amount_in: u64, reserve_in: u64, reserve_out: u64) -> Result<u64> {
    require!(amount_in > 0, ErrorCode::InvalidInputAmount);
    require!(
        reserve_in > 0 && reserve_out > 0,
        ErrorCode::InsufficientReserve
    );

    let amount_in_with_fee = (amount_in as u128)
        .checked_mul(FEE_NUMERATOR)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    let numerator = amount_in_with_fee
        .checked_mul(reserve_out as u128)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    let denominator = (reserve_in as u128)
        .checked_mul(FEE_DENOMINATOR)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?
        .checked_add(amount_in_with_fee)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;

    let amount_out = numerator
        .checked_div(denominator)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;

    Ok(amount_out as u64)
}

/// Shares minted for a deposit. Genesis deposits mint the integer square root
/// of the amount product; later deposits mint the smaller proportional side.
/// A zero mint is a valid outcome for dust deposits.
pub fn shares_for_deposit(
    amount_a: u64,
    amount_b: u64,
    reserve_a: u64,
    reserve_b: u64,
    total_shares: u128,
) -> Result<u128> {
    require!(
        amount_a > 0 || amount_b > 0,
        ErrorCode::InsufficientLiquidity
    );

    if total_shares == 0 {
        let product = (amount_a as u128)
            .checked_mul(amount_b as u128)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        return Ok(integer_sqrt(product));
    }

    let from_a = (amount_a as u128)
        .checked_mul(total_shares)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?
        .checked_div(reserve_a as u128)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    let from_b = (amount_b as u128)
        .checked_mul(total_shares)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?
        .checked_div(reserve_b as u128)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;

    Ok(from_a.min(from_b))
}

/// Proportional redemption for `share_amount`. Floors both sides, so rounding
/// dust stays in the reserves for the remaining holders.
pub fn withdraw_amounts(
    share_amount: u128,
    reserve_a: u64,
    reserve_b: u64,
    total_shares: u128,
) -> Result<(u64, u64)> {
    let amount_a = (reserve_a as u128)
        .checked_mul(share_amount)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?
        .checked_div(total_shares)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    let amount_b = (reserve_b as u128)
        .checked_mul(share_amount)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?
        .checked_div(total_shares)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;

    Ok((amount_a as u64, amount_b as u64))
}

/// Fee share of `amount_in` kept by the reserves, tracked per input side.
pub fn accrued_fee(amount_in: u64) -> Result<u64> {
    ((amount_in as u128)
        .checked_mul(FEE_DENOMINATOR - FEE_NUMERATOR)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?)
    .checked_div(FEE_DENOMINATOR)
    .ok_or_else(|| error!(ErrorCode::MathOverflow))
    .map(|v| v as u64)
}
