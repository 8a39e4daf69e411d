use anchor_lang::prelude::*;
use inco_lightning::types::Euint128;

use crate::constants::{
    BPS_DENOMINATOR, LEVEL_SHARE_BPS, PRIZE_LEVELS, PROTOCOL_FEE_BPS,
};
use crate::error::LotteryError;

/// Lottery engine state. One account per deployment, sole writer for all
/// round counters, pools and winner registries.
#[account]
pub struct Lottery {
    /// Controls reset, emergency stop/reopen and ownership transfer
    pub owner: Pubkey,
    /// Scheduler key allowed to trigger draws alongside the owner
    pub automation: Pubkey,
    pub lottery_id: u64,
    /// Exact lamports required per ticket
    pub ticket_price: u64,
    /// Round counter, starts at 1 and only ever increments
    pub current_round: u64,
    /// Last assigned ticket id (sequential, 1-based)
    pub current_ticket_id: u64,
    pub is_buying_open: bool,
    pub has_drawn: bool,
    /// Fees collected this round
    pub prize_pool: u64,
    /// Unclaimed carry-over from prior rounds
    pub accumulated_prize_pool: u64,
    /// Internal entropy counter mixed into every draw
    pub draw_nonce: u64,
    /// Encrypted winning set, valid only while has_drawn is true
    pub winning_main: [Euint128; 5],
    pub winning_bonus: [Euint128; 2],
    /// Winner counts per prize level (index 0 = jackpot)
    pub winners_per_level: [u32; PRIZE_LEVELS],
    pub bump: u8,
}

impl Lottery {
    /// 8 (discriminator) + 32 (owner) + 32 (automation) + 8 (lottery_id)
    /// + 8 (ticket_price) + 8 (current_round) + 8 (current_ticket_id)
    /// + 1 (is_buying_open) + 1 (has_drawn) + 8 (prize_pool)
    /// + 8 (accumulated_prize_pool) + 8 (draw_nonce)
    /// + 80 (winning_main) + 32 (winning_bonus) + 36 (winners_per_level)
    /// + 1 (bump)
    pub const SIZE: usize = 8 + 32 + 32 + 8 + 8 + 8 + 8 + 1 + 1 + 8 + 8 + 8 + 80 + 32 + 36 + 1;

    pub fn assert_owner(&self, signer: &Pubkey) -> Result<()> {
        require_keys_eq!(*signer, self.owner, LotteryError::NotOwner);
        Ok(())
    }

    /// Owner or the registered automation key may trigger a draw
    pub fn is_authorized_drawer(&self, signer: &Pubkey) -> bool {
        *signer == self.owner || *signer == self.automation
    }

    /// Current-round fees plus carry-over from prior rounds
    pub fn total_prize_pool(&self) -> u64 {
        self.prize_pool + self.accumulated_prize_pool
    }

    /// Total pool after the protocol fee
    pub fn net_prize_pool(&self) -> u64 {
        let total = self.total_prize_pool() as u128;
        let net = total * (BPS_DENOMINATOR - PROTOCOL_FEE_BPS) as u128 / BPS_DENOMINATOR as u128;
        net as u64
    }

    /// Net-pool allocation for one prize level; 0 for a level outside 1..=9
    pub fn total_prize_for_level(&self, level: u8) -> u64 {
        let share = match level_index(level).map(|i| LEVEL_SHARE_BPS[i]) {
            Some(bps) => bps,
            None => return 0,
        };
        (self.net_prize_pool() as u128 * share as u128 / BPS_DENOMINATOR as u128) as u64
    }

    /// Equal split of a level's allocation among its registered winners.
    /// Division floors; the remainder stays in the pool.
    pub fn prize_amount(&self, level: u8) -> u64 {
        let winners = match level_index(level).map(|i| self.winners_per_level[i]) {
            Some(count) => count,
            None => return 0,
        };
        self.total_prize_for_level(level) / winners.max(1) as u64
    }

    /// Record one more winner at `level` and return the new count for
    /// that level.
    pub fn record_winner(&mut self, level: u8) -> Result<u32> {
        let idx = level_index(level).ok_or(LotteryError::InvalidPrizeLevel)?;
        self.winners_per_level[idx] += 1;
        Ok(self.winners_per_level[idx])
    }

    /// Debit a paid-out prize, draining current-round fees before carry-over.
    pub fn debit_pools(&mut self, amount: u64) -> Result<()> {
        require!(amount <= self.total_prize_pool(), LotteryError::InsufficientPool);
        let from_current = amount.min(self.prize_pool);
        self.prize_pool -= from_current;
        self.accumulated_prize_pool -= amount - from_current;
        Ok(())
    }

    /// Roll into the next round: whatever was not paid out accumulates,
    /// winner counts and the winning set are cleared, buying reopens.
    /// Returns the amount rolled over.
    pub fn advance_round(&mut self) -> u64 {
        let rolled = self.prize_pool;
        self.accumulated_prize_pool += rolled;
        self.prize_pool = 0;
        self.winners_per_level = [0; PRIZE_LEVELS];
        self.winning_main = [Euint128(0); 5];
        self.winning_bonus = [Euint128(0); 2];
        self.has_drawn = false;
        self.is_buying_open = true;
        self.current_round += 1;
        rolled
    }
}

/// Zero-based index for a 1-based prize level, None outside 1..=9
pub fn level_index(level: u8) -> Option<usize> {
    match level {
        1..=9 => Some(level as usize - 1),
        _ => None,
    }
}
