use anchor_lang::prelude::*;

use crate::constants::VAULT_SEED;
use crate::error::LotteryError;
use crate::events::PrizeClaimed;
use crate::state::{Lottery, Ticket};

#[derive(Accounts)]
pub struct ClaimPrize<'info> {
    #[account(mut)]
    pub winner: Signer<'info>,

    #[account(mut)]
    pub lottery: Account<'info, Lottery>,

    #[account(mut, has_one = lottery)]
    pub ticket: Account<'info, Ticket>,

    /// CHECK: vault PDA - we need the bump to sign
    #[account(mut, seeds = [VAULT_SEED, lottery.key().as_ref()], bump)]
    pub vault: AccountInfo<'info>,

    pub system_program: Program<'info, System>,
}

/// Pay out a registered winner's equal share of its level's allocation.
/// The claim flag flips exactly once; the payout is debited from the
/// current-round pool first, then from the carry-over.
pub fn handler(ctx: Context<ClaimPrize>) -> Result<()> {
    let lottery = &mut ctx.accounts.lottery;
    let ticket = &mut ctx.accounts.ticket;

    require!(
        ticket.player == ctx.accounts.winner.key(),
        LotteryError::NotTicketOwner
    );
    // A claim settles against the round it was registered in; after reset
    // the winner counts no longer price this ticket
    require!(ticket.round == lottery.current_round, LotteryError::WrongRound);
    require!(ticket.registered_level != 0, LotteryError::NotRegistered);
    require!(!ticket.claimed, LotteryError::AlreadyClaimed);

    let amount = lottery.prize_amount(ticket.registered_level);
    require!(amount > 0, LotteryError::NothingToClaim);

    ticket.claimed = true;
    lottery.debit_pools(amount)?;

    let lottery_key = lottery.key();
    let vault_seeds: &[&[u8]] = &[VAULT_SEED, lottery_key.as_ref(), &[ctx.bumps.vault]];

    anchor_lang::solana_program::program::invoke_signed(
        &anchor_lang::solana_program::system_instruction::transfer(
            &ctx.accounts.vault.key(),
            &ctx.accounts.winner.key(),
            amount,
        ),
        &[
            ctx.accounts.vault.to_account_info(),
            ctx.accounts.winner.to_account_info(),
            ctx.accounts.system_program.to_account_info(),
        ],
        &[vault_seeds],
    )?;

    emit!(PrizeClaimed {
        ticket_id: ticket.id,
        player: ticket.player,
        amount,
    });

    msg!(
        "Ticket {} claimed {} lamports at prize level {}",
        ticket.id,
        amount,
        ticket.registered_level
    );
    Ok(())
}
