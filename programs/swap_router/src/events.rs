use anchor_lang::prelude::*;

#[event]
pub struct PairCreated {
    pub token_a: Pubkey,
    pub token_b: Pubkey,
    pub pair: Pubkey,
}

#[event]
pub struct SwapForwarded {
    pub user: Pubkey,
    pub token_in: Pubkey,
    pub token_out: Pubkey,
    pub amount_in: u64,
    pub fee_lamports: u64,
}

#[event]
pub struct FeesWithdrawn {
    pub admin: Pubkey,
    pub amount: u64,
}
