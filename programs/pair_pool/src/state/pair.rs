use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct Pair {
    pub token_a_mint: Pubkey,
    pub token_b_mint: Pubkey,
    pub vault_a: Pubkey,
    pub vault_b: Pubkey,
    pub reserve_a: u64,
    pub reserve_b: u64,
    pub total_shares: u128,
    pub total_fees_a: u64,
    pub total_fees_b: u64,
    pub bump: u8,
    pub auth_bump: u8,
}
