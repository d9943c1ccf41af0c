use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Token address is the zero address")]
    ZeroAddress,
    #[msg("Token addresses are identical")]
    IdenticalAddress,
    #[msg("Pair already exists")]
    PairAlreadyExist,
    #[msg("Account is not the canonical pair for this token pair")]
    InvalidPairAccount,
    #[msg("Venue program does not match the configured venue")]
    InvalidVenueProgram,
    #[msg("Invalid token account")]
    InvalidTokenAccount,
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Math overflow")]
    MathOverflow,
}
