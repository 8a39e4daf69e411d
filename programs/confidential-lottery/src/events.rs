use anchor_lang::prelude::*;

#[event]
pub struct TicketPurchased {
    pub ticket_id: u64,
    pub player: Pubkey,
}

#[event]
pub struct NumbersDrawn {
    pub round: u64,
}

#[event]
pub struct WinnerRegistered {
    pub ticket_id: u64,
    pub prize_level: u8,
    pub winners_at_level: u32,
}

#[event]
pub struct PrizeClaimed {
    pub ticket_id: u64,
    pub player: Pubkey,
    pub amount: u64,
}

#[event]
pub struct RoundReset {
    pub round: u64,
    pub rolled_over: u64,
}

#[event]
pub struct OwnershipTransferred {
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}
