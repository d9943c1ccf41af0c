use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hash;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};

use crate::{error::ErrorCode, state::RouterConfig};

pub fn require_admin(admin: &Signer<'_>, config: &Account<RouterConfig>) -> Result<()> {
    require_keys_eq!(admin.key(), config.admin, ErrorCode::Unauthorized);
    Ok(())
}

/// Orders two mints by raw key so both orientations of a pair resolve to the
/// same registry entry.
pub fn canonical_mints(token_x: Pubkey, token_y: Pubkey) -> (Pubkey, Pubkey) {
    if token_x < token_y {
        (token_x, token_y)
    } else {
        (token_y, token_x)
    }
}

/// Canonical pair address for an unordered token pair. Shared by pair
/// creation and swap dispatch so both sides derive the same key.
pub fn pair_address(token_x: Pubkey, token_y: Pubkey) -> Pubkey {
    let (lo, hi) = canonical_mints(token_x, token_y);
    Pubkey::find_program_address(&[b"pair", lo.as_ref(), hi.as_ref()], &pair_pool::ID).0
}

/// Instruction for the venue's `swap` entry point. Accounts are relayed
/// verbatim so the caller's signature reaches the venue.
pub fn venue_swap_instruction(
    venue_program: Pubkey,
    accounts: &[AccountInfo],
    amount_in: u64,
    min_amount_out: u64,
    deadline: i64,
) -> Instruction {
    let mut data = Vec::with_capacity(32);
    data.extend_from_slice(&hash(b"global:swap").to_bytes()[..8]);
    data.extend_from_slice(&amount_in.to_le_bytes());
    data.extend_from_slice(&min_amount_out.to_le_bytes());
    data.extend_from_slice(&deadline.to_le_bytes());

    let metas = accounts
        .iter()
        .map(|info| AccountMeta {
            pubkey: *info.key,
            is_signer: info.is_signer,
            is_writable: info.is_writable,
        })
        .collect();

    Instruction {
        program_id: venue_program,
        accounts: metas,
        data,
    }
}
