use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct RouterConfig {
    pub admin: Pubkey,
    pub venue_program: Pubkey,
    pub forward_fee_lamports: u64,
    pub collected_fees: u64,
    pub bump: u8,
    pub fee_vault_bump: u8,
}
