use anchor_lang::prelude::*;
use inco_lightning::types::Euint128;

/// One ticket per purchase. The 7 encrypted selections are written at
/// admission; `matches` and `prize_tier` exactly once by check_ticket.
#[account]
pub struct Ticket {
    pub lottery: Pubkey,
    pub player: Pubkey,
    /// Sequential id, 1-based
    pub id: u64,
    /// Round the ticket was bought in
    pub round: u64,
    pub purchase_time: i64,
    /// 5 main numbers followed by 2 bonus numbers (encrypted)
    pub numbers: [Euint128; 7],
    /// Encrypted total match count (0..7), set by check_ticket
    pub matches: Euint128,
    /// Encrypted prize level (0 = no prize, 1 = jackpot .. 9), set by check_ticket
    pub prize_tier: Euint128,
    pub checked: bool,
    /// Settled prize level, 0 until register_winner succeeds
    pub registered_level: u8,
    pub claimed: bool,
    pub bump: u8,
}

impl Ticket {
    /// 8 (discriminator) + 32 (lottery) + 32 (player) + 8 (id) + 8 (round)
    /// + 8 (purchase_time) + 112 (numbers) + 16 (matches) + 16 (prize_tier)
    /// + 1 (checked) + 1 (registered_level) + 1 (claimed) + 1 (bump)
    pub const SIZE: usize = 8 + 32 + 32 + 8 + 8 + 8 + 112 + 16 + 16 + 1 + 1 + 1 + 1;
}
