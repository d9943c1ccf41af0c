use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Mints must be passed in canonical order")]
    InvalidMintOrder,
    #[msg("Input token is not part of the pair")]
    InvalidInputToken,
    #[msg("Input amount must be greater than zero")]
    InvalidInputAmount,
    #[msg("Reserves must be greater than zero")]
    InsufficientReserve,
    #[msg("Computed output amount is zero")]
    InvalidOutputAmount,
    #[msg("Output amount is below the requested minimum")]
    InsufficientOutputAmount,
    #[msg("Insufficient liquidity provided")]
    InsufficientLiquidity,
    #[msg("Insufficient shares")]
    InsufficientShares,
    #[msg("Invalid token account")]
    InvalidTokenAccount,
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Math overflow")]
    MathOverflow,
}
