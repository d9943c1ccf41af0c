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

declare_id!("69tvcrnpt91oFwY5iomabSykw34UgiMSyuU93xUQ4Uqn");

#[program]
pub mod swap_router {
    use super::*;

    pub fn initialize_router(
        ctx: Context<InitializeRouter>,
        forward_fee_lamports: u64,
    ) -> Result<()> {
        instructions::initialize_router::handler(ctx, forward_fee_lamports)
    }

    pub fn create_pair(ctx: Context<CreatePair>) -> Result<()> {
        instructions::create_pair::handler(ctx)
    }

    pub fn get_pair(ctx: Context<GetPair>) -> Result<Pubkey> {
        instructions::get_pair::handler(ctx)
    }

    pub fn swap<'info>(
        ctx: Context<'_, '_, 'info, 'info, RouterSwap<'info>>,
        amount_in: u64,
        min_amount_out: u64,
    ) -> Result<()> {
        instructions::swap::handler(ctx, amount_in, min_amount_out)
    }

    pub fn withdraw_fees(ctx: Context<WithdrawFees>) -> Result<()> {
        instructions::withdraw_fees::handler(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_mints_sorts_by_key() {
        let x = Pubkey::new_unique();
        let y = Pubkey::new_unique();
        let (lo, hi) = canonical_mints(x, y);
        assert!(lo < hi);
        assert_eq!(canonical_mints(x, y), canonical_mints(y, x));
    }

    #[test]
    fn pair_address_is_order_independent() {
        let x = Pubkey::new_unique();
        let y = Pubkey::new_unique();
        assert_eq!(pair_address(x, y), pair_address(y, x));
    }

    #[test]
    fn distinct_pairs_get_distinct_addresses() {
        let x = Pubkey::new_unique();
        let y = Pubkey::new_unique();
        let z = Pubkey::new_unique();
        assert_ne!(pair_address(x, y), pair_address(x, z));
        assert_ne!(pair_address(x, y), pair_address(y, z));
    }

    #[test]
    fn venue_swap_instruction_layout() {
        let venue = Pubkey::new_unique();
        let ix = venue_swap_instruction(venue, &[], 1_000, 5, 1_700_000_000);
        assert_eq!(ix.program_id, venue);
        assert!(ix.accounts.is_empty());
        assert_eq!(ix.data.len(), 32);
        assert_eq!(&ix.data[8..16], &1_000u64.to_le_bytes());
        assert_eq!(&ix.data[16..24], &5u64.to_le_bytes());
        assert_eq!(&ix.data[24..32], &1_700_000_000i64.to_le_bytes());
    }
}
