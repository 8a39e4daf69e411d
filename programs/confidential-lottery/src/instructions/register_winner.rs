use anchor_lang::prelude::*;
use inco_lightning::{
    cpi::{self, accounts::VerifySignature},
    program::IncoLightning,
    ID as INCO_LIGHTNING_ID,
};

use crate::error::LotteryError;
use crate::events::WinnerRegistered;
use crate::state::{level_index, Lottery, Ticket};

#[derive(Accounts)]
pub struct RegisterWinner<'info> {
    #[account(mut)]
    pub player: Signer<'info>,

    #[account(mut)]
    pub lottery: Account<'info, Lottery>,

    #[account(mut, has_one = lottery)]
    pub ticket: Account<'info, Ticket>,

    /// CHECK: Instructions sysvar for Ed25519 signature verification
    #[account(address = anchor_lang::solana_program::sysvar::instructions::ID)]
    pub instructions: AccountInfo<'info>,

    pub system_program: Program<'info, System>,

    #[account(address = INCO_LIGHTNING_ID)]
    pub inco_lightning_program: Program<'info, IncoLightning>,
}

/// Finalize a ticket's settlement level. Off-chain decryption is advisory;
/// what counts for payout accounting is this registration, and it only
/// succeeds when the presented plaintext is an attested decryption of the
/// ticket's stored prize_tier handle and equals `prize_level`.
/// A ticket registers at most once; re-registration is rejected.
pub fn handler(
    ctx: Context<RegisterWinner>,
    prize_level: u8,
    handle: Vec<u8>,
    plaintext: Vec<u8>,
) -> Result<()> {
    let lottery = &mut ctx.accounts.lottery;
    let ticket = &mut ctx.accounts.ticket;

    require!(
        ticket.player == ctx.accounts.player.key(),
        LotteryError::NotTicketOwner
    );
    require!(lottery.has_drawn, LotteryError::NotDrawnYet);
    require!(ticket.round == lottery.current_round, LotteryError::WrongRound);
    require!(ticket.checked, LotteryError::NotCheckedYet);
    require!(ticket.registered_level == 0, LotteryError::AlreadyRegistered);
    require!(
        level_index(prize_level).is_some(),
        LotteryError::InvalidPrizeLevel
    );

    // The attested handle must be the ticket's own prize_tier handle
    let presented = parse_handle(&handle)?;
    require!(presented == ticket.prize_tier.0, LotteryError::InvalidDecryption);

    // Verify the decryption signature on-chain
    let cpi_ctx = CpiContext::new(
        ctx.accounts.inco_lightning_program.to_account_info(),
        VerifySignature {
            instructions: ctx.accounts.instructions.to_account_info(),
            signer: ctx.accounts.player.to_account_info(),
        },
    );
    cpi::is_validsignature(cpi_ctx, 1, Some(vec![handle]), Some(vec![plaintext.clone()]))?;

    let attested_level = parse_plaintext_level(&plaintext)?;
    require!(attested_level == prize_level, LotteryError::InvalidDecryption);

    ticket.registered_level = prize_level;
    let winners_at_level = lottery.record_winner(prize_level)?;

    emit!(WinnerRegistered {
        ticket_id: ticket.id,
        prize_level,
        winners_at_level,
    });

    msg!(
        "Ticket {} registered at prize level {} ({} winners there now)",
        ticket.id,
        prize_level,
        winners_at_level
    );
    Ok(())
}

/// Decode a 16-byte little-endian handle
fn parse_handle(bytes: &[u8]) -> Result<u128> {
    let arr: [u8; 16] = bytes
        .try_into()
        .map_err(|_| LotteryError::InvalidDecryption)?;
    Ok(u128::from_le_bytes(arr))
}

/// Parse a decrypted prize level.
/// Handles both formats the decryption service produces: raw u128
/// little-endian bytes and a decimal string.
pub fn parse_plaintext_level(plaintext: &[u8]) -> Result<u8> {
    if let Ok(s) = std::str::from_utf8(plaintext) {
        if let Ok(value) = s.trim().parse::<u8>() {
            return Ok(value);
        }
    }

    let mut value: u128 = 0;
    for (i, &b) in plaintext.iter().enumerate() {
        if i >= 16 {
            return Err(LotteryError::InvalidDecryption.into());
        }
        value |= (b as u128) << (8 * i);
    }
    u8::try_from(value).map_err(|_| LotteryError::InvalidDecryption.into())
}
