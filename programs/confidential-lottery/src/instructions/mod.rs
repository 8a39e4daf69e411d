use anchor_lang::prelude::*;
use inco_lightning::cpi::accounts::Operation;

pub mod allow_winning_numbers;
pub mod buy_ticket;
pub mod check_ticket;
pub mod claim_prize;
pub mod draw_numbers;
pub mod emergency;
pub mod initialize_lottery;
pub mod register_winner;
pub mod reset_round;
pub mod transfer_ownership;

#[allow(ambiguous_glob_reexports)]
pub use allow_winning_numbers::*;
pub use buy_ticket::*;
pub use check_ticket::*;
pub use claim_prize::*;
pub use draw_numbers::*;
pub use emergency::*;
pub use initialize_lottery::*;
pub use register_winner::*;
pub use reset_round::*;
pub use transfer_ownership::*;

/// Fresh CPI context for one Inco operation. Inco CPI uses invoke (no
/// invoke_signed), so the signer must be a real transaction signer.
pub(crate) fn op_ctx<'info>(
    inco: &AccountInfo<'info>,
    signer: &AccountInfo<'info>,
) -> CpiContext<'info, 'info, 'info, 'info, Operation<'info>> {
    CpiContext::new(
        inco.clone(),
        Operation {
            signer: signer.clone(),
        },
    )
}
