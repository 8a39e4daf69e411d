use anchor_lang::prelude::*;

use confidential_lottery::constants::*;
use confidential_lottery::instructions::register_winner::parse_plaintext_level;
use confidential_lottery::state::{level_index, Lottery, Ticket};
use inco_lightning::types::Euint128;

// Helper: Generate a test pubkey
fn test_pubkey(seed: u8) -> Pubkey {
    Pubkey::new_from_array([seed; 32])
}

// Helper: Fixed timestamp for deterministic tests
fn test_time() -> i64 {
    1_700_000_000
}

// Helper: A lottery right after initialization
fn fresh_lottery() -> Lottery {
    Lottery {
        owner: test_pubkey(1),
        automation: test_pubkey(2),
        lottery_id: 1,
        ticket_price: TICKET_PRICE_LAMPORTS,
        current_round: 1,
        current_ticket_id: 0,
        is_buying_open: true,
        has_drawn: false,
        prize_pool: 0,
        accumulated_prize_pool: 0,
        draw_nonce: 0,
        winning_main: [Euint128(0); 5],
        winning_bonus: [Euint128(0); 2],
        winners_per_level: [0; PRIZE_LEVELS],
        bump: 255,
    }
}

// The payout table: (main matches, bonus matches) -> prize level
const PAYOUT_TABLE: [(u8, u8, u8); 9] = [
    (5, 2, 1),
    (5, 1, 2),
    (5, 0, 3),
    (4, 2, 4),
    (4, 1, 5),
    (4, 0, 6),
    (3, 2, 7),
    (3, 1, 8),
    (3, 0, 9),
];

// Mirror of the bracket arithmetic the evaluator encodes into its nested
// conditional selects
fn level_from_brackets(main: u8, bonus: u8) -> u8 {
    if main < MIN_MAIN_MATCHES {
        return 0;
    }
    let bracket = MAIN_NUMBERS as u8 - main;
    TIER_BRACKET_BASE[bracket as usize] + (BONUS_NUMBERS as u8 - bonus)
}

#[test]
fn test_ticket_creation() {
    let lottery = test_pubkey(3);
    let player = test_pubkey(4);
    let ticket = Ticket {
        lottery,
        player,
        id: 1,
        round: 1,
        purchase_time: test_time(),
        numbers: [Euint128(0); 7],
        matches: Euint128(0),
        prize_tier: Euint128(0),
        checked: false,
        registered_level: 0,
        claimed: false,
        bump: 254,
    };

    assert_eq!(ticket.lottery, lottery);
    assert_eq!(ticket.player, player);
    assert_eq!(ticket.id, 1);
    assert_eq!(ticket.round, 1);
    assert_eq!(ticket.purchase_time, test_time());
    assert!(!ticket.checked);
    assert_eq!(ticket.registered_level, 0);
    assert!(!ticket.claimed);
}

#[test]
fn test_admission_accounting() {
    let mut lottery = fresh_lottery();

    // Every valid admission bumps the id by exactly 1 and the pool by
    // exactly the ticket price
    for expected_id in 1..=3u64 {
        lottery.current_ticket_id += 1;
        lottery.prize_pool += lottery.ticket_price;
        assert_eq!(lottery.current_ticket_id, expected_id);
        assert_eq!(lottery.prize_pool, expected_id * TICKET_PRICE_LAMPORTS);
    }
    assert_eq!(lottery.total_prize_pool(), 3 * TICKET_PRICE_LAMPORTS);
}

#[test]
fn test_payout_table_exact() {
    // Every (main, bonus) pair maps exactly per the table; fewer than 3
    // main matches pays nothing regardless of bonus
    for &(main, bonus, level) in PAYOUT_TABLE.iter() {
        assert_eq!(level_from_brackets(main, bonus), level);
    }
    for main in 0..MIN_MAIN_MATCHES {
        for bonus in 0..=BONUS_NUMBERS as u8 {
            assert_eq!(level_from_brackets(main, bonus), 0);
        }
    }
}

#[test]
fn test_level_shares_cover_net_pool() {
    // The level schedule allocates exactly the whole net pool
    assert_eq!(LEVEL_SHARE_BPS.iter().sum::<u64>(), BPS_DENOMINATOR);
    assert_eq!(LEVEL_SHARE_BPS[0], 6000); // jackpot takes 60%
}

#[test]
fn test_net_pool_takes_protocol_fee() {
    let mut lottery = fresh_lottery();
    lottery.prize_pool = 10 * TICKET_PRICE_LAMPORTS;

    assert_eq!(lottery.total_prize_pool(), 10_000_000);
    assert_eq!(lottery.net_prize_pool(), 9_500_000); // 5% protocol fee
    assert_eq!(lottery.total_prize_for_level(1), 5_700_000); // 60% of net
    assert_eq!(lottery.total_prize_for_level(9), 19_000); // 0.2% of net
    assert_eq!(lottery.total_prize_for_level(0), 0);
    assert_eq!(lottery.total_prize_for_level(10), 0);
}

#[test]
fn test_prize_split_among_winners() {
    // Three tickets share main [1,2,3,4,5] and bonus [1,2]; the draw lands
    // on the same set; all three register at the jackpot level
    let mut lottery = fresh_lottery();
    for _ in 0..3 {
        lottery.current_ticket_id += 1;
        lottery.prize_pool += lottery.ticket_price;
    }
    for _ in 0..3 {
        lottery.record_winner(1).unwrap();
    }
    assert_eq!(lottery.winners_per_level[0], 3);

    let total_for_level = lottery.total_prize_for_level(1);
    let per_winner = lottery.prize_amount(1);
    assert_eq!(per_winner, total_for_level / 3);

    // Aggregate payout never exceeds the allocation by more than the
    // rounding remainder
    assert!(per_winner * 3 <= total_for_level);
    assert!(total_for_level - per_winner * 3 < 3);
}

#[test]
fn test_prize_amount_with_no_winners() {
    let mut lottery = fresh_lottery();
    lottery.prize_pool = 10 * TICKET_PRICE_LAMPORTS;

    // An unclaimed level does not distribute, but the quote divides by
    // max(winners, 1)
    assert_eq!(lottery.winners_per_level[4], 0);
    assert_eq!(lottery.prize_amount(5), lottery.total_prize_for_level(5));
}

#[test]
fn test_record_winner_counts_per_level() {
    let mut lottery = fresh_lottery();

    assert_eq!(lottery.record_winner(1).unwrap(), 1);
    assert_eq!(lottery.record_winner(1).unwrap(), 2);
    assert_eq!(lottery.record_winner(2).unwrap(), 1);
    assert_eq!(lottery.winners_per_level[0], 2);
    assert_eq!(lottery.winners_per_level[1], 1);

    assert!(lottery.record_winner(0).is_err());
    assert!(lottery.record_winner(10).is_err());
}

#[test]
fn test_level_index_bounds() {
    assert_eq!(level_index(0), None);
    assert_eq!(level_index(1), Some(0));
    assert_eq!(level_index(9), Some(8));
    assert_eq!(level_index(10), None);
}

#[test]
fn test_debit_pools_current_round_first() {
    let mut lottery = fresh_lottery();
    lottery.prize_pool = 2_000_000;
    lottery.accumulated_prize_pool = 5_000_000;

    lottery.debit_pools(3_000_000).unwrap();
    assert_eq!(lottery.prize_pool, 0);
    assert_eq!(lottery.accumulated_prize_pool, 4_000_000);

    assert!(lottery.debit_pools(5_000_000).is_err());
    // Failed debit leaves the pools untouched
    assert_eq!(lottery.total_prize_pool(), 4_000_000);
}

#[test]
fn test_reset_preserves_funds_and_increments_round() {
    let mut lottery = fresh_lottery();
    lottery.prize_pool = 4 * TICKET_PRICE_LAMPORTS;
    lottery.accumulated_prize_pool = TICKET_PRICE_LAMPORTS;
    lottery.has_drawn = true;
    lottery.is_buying_open = false;
    lottery.winning_main = [Euint128(7); 5];
    lottery.winning_bonus = [Euint128(7); 2];
    lottery.record_winner(1).unwrap();
    lottery.record_winner(9).unwrap();

    let total_before = lottery.total_prize_pool();
    let rolled = lottery.advance_round();

    assert_eq!(rolled, 4 * TICKET_PRICE_LAMPORTS);
    assert_eq!(lottery.current_round, 2);
    assert_eq!(lottery.prize_pool, 0);
    assert_eq!(lottery.total_prize_pool(), total_before);
    assert_eq!(lottery.winners_per_level, [0; PRIZE_LEVELS]);
    assert!(!lottery.has_drawn);
    assert!(lottery.is_buying_open);
    assert_eq!(lottery.winning_main[0].0, 0);
    assert_eq!(lottery.winning_bonus[1].0, 0);
}

#[test]
fn test_draw_authorization() {
    let lottery = fresh_lottery();

    assert!(lottery.is_authorized_drawer(&test_pubkey(1))); // owner
    assert!(lottery.is_authorized_drawer(&test_pubkey(2))); // automation
    assert!(!lottery.is_authorized_drawer(&test_pubkey(9)));

    assert!(lottery.assert_owner(&test_pubkey(1)).is_ok());
    assert!(lottery.assert_owner(&test_pubkey(2)).is_err());
}

#[test]
fn test_parse_plaintext_level_formats() {
    // Raw little-endian bytes
    assert_eq!(parse_plaintext_level(&[3]).unwrap(), 3);
    assert_eq!(
        parse_plaintext_level(&[9, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]).unwrap(),
        9
    );
    // Decimal string
    assert_eq!(parse_plaintext_level(b"7").unwrap(), 7);
    assert_eq!(parse_plaintext_level(b"0").unwrap(), 0);
    // Empty decrypts to zero
    assert_eq!(parse_plaintext_level(&[]).unwrap(), 0);
    // Oversized or out-of-range values are rejected
    assert!(parse_plaintext_level(&[0; 17]).is_err());
    assert!(parse_plaintext_level(&[0, 1]).is_err());
}

#[test]
fn test_account_sizes_match_layout() {
    assert_eq!(Lottery::SIZE, 8 + 32 + 32 + 8 + 8 + 8 + 8 + 1 + 1 + 8 + 8 + 8 + 80 + 32 + 36 + 1);
    assert_eq!(Ticket::SIZE, 8 + 32 + 32 + 8 + 8 + 8 + 112 + 16 + 16 + 1 + 1 + 1 + 1);
}
