use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct SharePosition {
    pub owner: Pubkey,
    pub pair: Pubkey,
    pub shares: u128,
    pub bump: u8,
}
