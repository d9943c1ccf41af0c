use anchor_lang::prelude::*;

#[event]
pub struct LiquidityAdded {
    pub pair: Pubkey,
    pub provider: Pubkey,
    pub amount_a: u64,
    pub amount_b: u64,
    pub shares_minted: u128,
}

#[event]
pub struct LiquidityRemoved {
    pub pair: Pubkey,
    pub holder: Pubkey,
    pub amount_a: u64,
    pub amount_b: u64,
    pub shares_burned: u128,
}

#[event]
pub struct Swapped {
    pub pair: Pubkey,
    pub sender: Pubkey,
    pub recipient: Pubkey,
    pub token_in: Pubkey,
    pub token_out: Pubkey,
    pub amount_in: u64,
    pub amount_out: u64,
}
