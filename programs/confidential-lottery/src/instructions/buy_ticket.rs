use anchor_lang::prelude::*;
use inco_lightning::{
    cpi::{self, accounts::Allow},
    program::IncoLightning,
    types::Euint128,
    ID as INCO_LIGHTNING_ID,
};

use crate::constants::{TICKET_SEED, TOTAL_NUMBERS, VAULT_SEED};
use crate::error::LotteryError;
use crate::events::TicketPurchased;
use crate::instructions::op_ctx;
use crate::state::{Lottery, Ticket};

#[derive(Accounts)]
pub struct BuyTicket<'info> {
    #[account(mut)]
    pub buyer: Signer<'info>,

    #[account(mut)]
    pub lottery: Account<'info, Lottery>,

    #[account(
        init,
        payer = buyer,
        space = Ticket::SIZE,
        seeds = [
            TICKET_SEED,
            lottery.key().as_ref(),
            (lottery.current_ticket_id + 1).to_le_bytes().as_ref(),
        ],
        bump
    )]
    pub ticket: Account<'info, Ticket>,

    /// CHECK: vault PDA
    #[account(mut, seeds = [VAULT_SEED, lottery.key().as_ref()], bump)]
    pub vault: AccountInfo<'info>,

    pub system_program: Program<'info, System>,

    #[account(address = INCO_LIGHTNING_ID)]
    pub inco_lightning_program: Program<'info, IncoLightning>,
}

/// Admit a ticket: buying open, round not drawn, exact payment, 7 valid
/// ciphertexts. Remaining accounts (optional): 7 allowance PDAs plus the
/// buyer's allowed-address account, to let the buyer decrypt their own
/// numbers.
pub fn handler<'info>(
    ctx: Context<'_, '_, '_, 'info, BuyTicket<'info>>,
    payment: u64,
    encrypted_numbers: Vec<Vec<u8>>,
) -> Result<()> {
    let lottery = &mut ctx.accounts.lottery;

    require!(lottery.is_buying_open, LotteryError::SalesClosed);
    require!(!lottery.has_drawn, LotteryError::AlreadyDrawn);
    require!(payment == lottery.ticket_price, LotteryError::InvalidPayment);
    require!(
        encrypted_numbers.len() == TOTAL_NUMBERS,
        LotteryError::InvalidNumbersLength
    );

    // Pay for the ticket
    anchor_lang::solana_program::program::invoke(
        &anchor_lang::solana_program::system_instruction::transfer(
            &ctx.accounts.buyer.key(),
            &ctx.accounts.vault.key(),
            payment,
        ),
        &[
            ctx.accounts.buyer.to_account_info(),
            ctx.accounts.vault.to_account_info(),
            ctx.accounts.system_program.to_account_info(),
        ],
    )?;

    lottery.prize_pool += payment;
    lottery.current_ticket_id += 1;
    let ticket_id = lottery.current_ticket_id;

    // Admit the ciphertexts; validity proofs are checked by the Inco program
    let inco = ctx.accounts.inco_lightning_program.to_account_info();
    let buyer = ctx.accounts.buyer.to_account_info();
    let mut numbers = [Euint128(0); TOTAL_NUMBERS];
    for (slot, ciphertext) in numbers.iter_mut().zip(encrypted_numbers) {
        *slot = cpi::new_euint128(op_ctx(&inco, &buyer), ciphertext, 0)?;
    }

    let ticket = &mut ctx.accounts.ticket;
    ticket.lottery = lottery.key();
    ticket.player = ctx.accounts.buyer.key();
    ticket.id = ticket_id;
    ticket.round = lottery.current_round;
    ticket.purchase_time = Clock::get()?.unix_timestamp;
    ticket.numbers = numbers;
    ticket.matches = Euint128(0);
    ticket.prize_tier = Euint128(0);
    ticket.checked = false;
    ticket.registered_level = 0;
    ticket.claimed = false;
    ticket.bump = ctx.bumps.ticket;

    // Allow the buyer to decrypt their own selections
    if ctx.remaining_accounts.len() > TOTAL_NUMBERS {
        let allowed_address = &ctx.remaining_accounts[TOTAL_NUMBERS];
        for (i, number) in numbers.iter().enumerate() {
            let cpi_ctx = CpiContext::new(
                inco.clone(),
                Allow {
                    allowance_account: ctx.remaining_accounts[i].clone(),
                    signer: buyer.clone(),
                    allowed_address: allowed_address.clone(),
                    system_program: ctx.accounts.system_program.to_account_info(),
                },
            );
            cpi::allow(cpi_ctx, number.0, true, ticket.player)?;
        }
    }

    emit!(TicketPurchased {
        ticket_id,
        player: ticket.player,
    });

    msg!("Ticket {} bought by {}", ticket_id, ticket.player);
    msg!("   Prize pool: {} lamports", lottery.prize_pool);
    Ok(())
}
