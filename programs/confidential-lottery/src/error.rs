use anchor_lang::prelude::*;

#[error_code]
pub enum LotteryError {
    #[msg("Incorrect ticket price")]
    InvalidPayment,

    #[msg("Ticket sales are closed")]
    SalesClosed,

    #[msg("Numbers already drawn")]
    AlreadyDrawn,

    #[msg("Numbers not drawn yet")]
    NotDrawnYet,

    #[msg("Only owner can call this function")]
    NotOwner,

    #[msg("Only owner or automation can draw")]
    NotAuthorized,

    #[msg("Not ticket owner")]
    NotTicketOwner,

    #[msg("Ticket is from a previous round")]
    WrongRound,

    #[msg("Ticket already checked")]
    AlreadyChecked,

    #[msg("Ticket not checked yet")]
    NotCheckedYet,

    #[msg("Invalid prize level")]
    InvalidPrizeLevel,

    #[msg("Ticket already registered as a winner")]
    AlreadyRegistered,

    #[msg("Ticket not registered as a winner")]
    NotRegistered,

    #[msg("Prize already claimed")]
    AlreadyClaimed,

    #[msg("Nothing to claim")]
    NothingToClaim,

    #[msg("Prize pool cannot cover this claim")]
    InsufficientPool,

    #[msg("Expected exactly 7 encrypted numbers")]
    InvalidNumbersLength,

    #[msg("Decryption attestation does not match the stored handle")]
    InvalidDecryption,

    #[msg("Not enough allowance accounts provided")]
    MissingAllowanceAccounts,
}
