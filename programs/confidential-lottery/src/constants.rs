use anchor_lang::prelude::*;

/// Inco Lightning program ID on devnet
pub const INCO_LIGHTNING_ID: Pubkey = pubkey!("5sjEbPiqgZrYwR31ahR6Uk9wf5awoX61YGg7jExQSwaj");

pub const LOTTERY_SEED: &[u8] = b"lottery";
pub const TICKET_SEED: &[u8] = b"ticket";
pub const VAULT_SEED: &[u8] = b"vault";

/// Canonical deployment price: 0.001 SOL per ticket
pub const TICKET_PRICE_LAMPORTS: u64 = 1_000_000;

pub const MAIN_NUMBERS: usize = 5;
pub const BONUS_NUMBERS: usize = 2;
pub const TOTAL_NUMBERS: usize = MAIN_NUMBERS + BONUS_NUMBERS;

/// Main numbers are drawn in [0, 32), bonus numbers in [0, 10)
pub const MAIN_NUMBER_RANGE: u128 = 32;
pub const BONUS_NUMBER_RANGE: u128 = 10;

pub const PRIZE_LEVELS: usize = 9;

/// Fewer than this many main matches pays nothing, whatever the bonus count
pub const MIN_MAIN_MATCHES: u8 = 3;

/// First prize level of each main-match bracket (5, 4, 3 main matches).
/// Within a bracket, 2 bonus matches take the base level, 1 bonus the next,
/// 0 bonus the one after.
pub const TIER_BRACKET_BASE: [u8; 3] = [1, 4, 7];

pub const BPS_DENOMINATOR: u64 = 10_000;

/// Protocol keeps 5% of collected fees; the rest is the net prize pool
pub const PROTOCOL_FEE_BPS: u64 = 500;

/// Share of the net pool paid to each prize level (level 1 = jackpot).
/// Levels with no winners do not distribute; their share stays in the pool.
pub const LEVEL_SHARE_BPS: [u64; PRIZE_LEVELS] = [6000, 1500, 1000, 600, 400, 300, 120, 60, 20];
