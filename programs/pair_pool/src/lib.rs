use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod helpers;
pub mod instructions;
pub mod state;

pub use constants::*;
pub use error::*;
pub use events::*;
pub use helpers::*;
pub use instructions::*;
pub use state::*;

declare_id!("FUGrpXYdivjFxNuQn3MSdzZjGHVqcxZv8pWf7L4zRDwx");

#[program]
pub mod pair_pool {
    use super::*;

    pub fn create_pair(ctx: Context<CreatePair>) -> Result<()> {
        instructions::create_pair::handler(ctx)
    }

    pub fn create_position(ctx: Context<CreatePosition>) -> Result<()> {
        instructions::create_position::handler(ctx)
    }

    pub fn add_liquidity(ctx: Context<AddLiquidity>, amount_a: u64, amount_b: u64) -> Result<()> {
        instructions::add_liquidity::handler(ctx, amount_a, amount_b)
    }

    pub fn remove_liquidity(ctx: Context<RemoveLiquidity>, share_amount: u128) -> Result<()> {
        instructions::remove_liquidity::handler(ctx, share_amount)
    }

    pub fn get_quote(ctx: Context<GetQuote>, amount_in: u64) -> Result<u64> {
        instructions::get_quote::handler(ctx, amount_in)
    }

    pub fn swap(ctx: Context<Swap>, amount_in: u64, min_amount_out: u64) -> Result<()> {
        instructions::swap::handler(ctx, amount_in, min_amount_out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_sqrt_values() {
        assert_eq!(integer_sqrt(0), 0);
        assert_eq!(integer_sqrt(1), 1);
        assert_eq!(integer_sqrt(2), 1);
        assert_eq!(integer_sqrt(100 * 100), 100);
        assert_eq!(integer_sqrt(450 * 40), 134);
        assert_eq!(integer_sqrt(u128::from(u64::MAX)), 4_294_967_295);
    }

    #[test]
    fn first_deposit_mints_sqrt_of_product() {
        assert_eq!(shares_for_deposit(100, 100, 0, 0, 0).unwrap(), 100);
        assert_eq!(shares_for_deposit(450, 40, 0, 0, 0).unwrap(), 134);
    }

    #[test]
    fn dust_first_deposit_mints_zero_shares() {
        assert_eq!(shares_for_deposit(1, 0, 0, 0, 0).unwrap(), 0);
        assert_eq!(shares_for_deposit(0, 1, 0, 0, 0).unwrap(), 0);
    }

    #[test]
    fn both_zero_deposit_rejected() {
        assert!(shares_for_deposit(0, 0, 0, 0, 0).is_err());
        assert!(shares_for_deposit(0, 0, 450, 40, 134).is_err());
    }

    #[test]
    fn proportional_deposit_takes_min_side() {
        // min(10 * 134 / 450, 700 * 134 / 40) = min(2, 2345)
        assert_eq!(shares_for_deposit(10, 700, 450, 40, 134).unwrap(), 2);
    }

    #[test]
    fn withdraw_pays_floor_share() {
        assert_eq!(withdraw_amounts(100, 460, 740, 136).unwrap(), (338, 544));
    }

    #[test]
    fn withdraw_all_shares_drains_reserves() {
        assert_eq!(withdraw_amounts(136, 460, 740, 136).unwrap(), (460, 740));
    }

    #[test]
    fn quote_matches_constant_product_with_fee() {
        let expected = (100u128 * 997 * 500 / (500 * 1_000 + 100 * 997)) as u64;
        assert_eq!(quote_out(100, 500, 500).unwrap(), expected);
        assert_eq!(expected, 83);
    }

    #[test]
    fn quote_rejects_zero_amount_and_empty_reserves() {
        assert!(quote_out(0, 500, 500).is_err());
        assert!(quote_out(200, 0, 500).is_err());
        assert!(quote_out(200, 500, 0).is_err());
    }

    #[test]
    fn quote_of_dust_rounds_to_zero() {
        assert_eq!(quote_out(1, 500, 500).unwrap(), 0);
    }

    #[test]
    fn quote_output_never_reaches_reserve() {
        let out = quote_out(u64::MAX / 2, 1_000, 1_000).unwrap();
        assert!(out < 1_000);
    }

    #[test]
    fn accrued_fee_is_three_per_mille() {
        assert_eq!(accrued_fee(10_000).unwrap(), 30);
        assert_eq!(accrued_fee(1_000).unwrap(), 3);
        assert_eq!(accrued_fee(100).unwrap(), 0);
    }

    #[test]
    fn share_ledger_stays_conserved() {
        let mut reserve_a: u64 = 0;
        let mut reserve_b: u64 = 0;
        let mut total: u128 = 0;
        let mut holders: [u128; 2] = [0, 0];

        for (who, a, b) in [(0usize, 100u64, 100u64), (1, 200, 200), (0, 450, 40)] {
            let minted = shares_for_deposit(a, b, reserve_a, reserve_b, total).unwrap();
            reserve_a += a;
            reserve_b += b;
            total += minted;
            holders[who] += minted;
            assert_eq!(holders.iter().sum::<u128>(), total);
        }

        let burned = holders[1];
        let (out_a, out_b) = withdraw_amounts(burned, reserve_a, reserve_b, total).unwrap();
        reserve_a -= out_a;
        reserve_b -= out_b;
        total -= burned;
        holders[1] = 0;

        assert_eq!(holders.iter().sum::<u128>(), total);
        assert!(reserve_a > 0 && reserve_b > 0);
    }

    #[test]
    fn deposit_sequence_from_fresh_pair() {
        // 450/40 genesis, then a lopsided follow-up deposit.
        let minted = shares_for_deposit(450, 40, 0, 0, 0).unwrap();
        assert_eq!(minted, 134);
        let follow_up = shares_for_deposit(10, 700, 450, 40, minted).unwrap();
        assert_eq!(minted + follow_up, 136);
    }
}
