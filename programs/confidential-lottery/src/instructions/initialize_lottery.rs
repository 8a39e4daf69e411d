use anchor_lang::prelude::*;
use inco_lightning::types::Euint128;

use crate::constants::{LOTTERY_SEED, PRIZE_LEVELS, VAULT_SEED};
use crate::state::Lottery;

#[derive(Accounts)]
#[instruction(lottery_id: u64)]
pub struct InitializeLottery<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        init,
        payer = owner,
        space = Lottery::SIZE,
        seeds = [LOTTERY_SEED, lottery_id.to_le_bytes().as_ref()],
        bump
    )]
    pub lottery: Account<'info, Lottery>,

    /// CHECK: vault PDA, holds collected lamports
    #[account(mut, seeds = [VAULT_SEED, lottery.key().as_ref()], bump)]
    pub vault: AccountInfo<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<InitializeLottery>,
    lottery_id: u64,
    ticket_price: u64,
    automation: Pubkey,
) -> Result<()> {
    let lottery = &mut ctx.accounts.lottery;
    lottery.owner = ctx.accounts.owner.key();
    lottery.automation = automation;
    lottery.lottery_id = lottery_id;
    lottery.ticket_price = ticket_price;
    lottery.current_round = 1;
    lottery.current_ticket_id = 0;
    lottery.is_buying_open = true;
    lottery.has_drawn = false;
    lottery.prize_pool = 0;
    lottery.accumulated_prize_pool = 0;
    lottery.draw_nonce = 0;
    lottery.winning_main = [Euint128(0); 5];
    lottery.winning_bonus = [Euint128(0); 2];
    lottery.winners_per_level = [0; PRIZE_LEVELS];
    lottery.bump = ctx.bumps.lottery;

    msg!("Lottery {} created", lottery_id);
    msg!("   Ticket price: {} lamports", ticket_price);
    msg!("   Round: 1, buying open");
    Ok(())
}
