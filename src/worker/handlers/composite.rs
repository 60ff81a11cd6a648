use tracing::debug;

use crate::{
    common::error::AppError,
    domain::{ids::MemberId, ledger::WalletStore, wallet::CompositeOp},
};

pub fn handle<S: WalletStore + ?Sized>(
    store: &mut S,
    member: MemberId,
    op: CompositeOp,
    money: i64,
    point: i64,
) -> Result<(), AppError> {
    super::with_wallet(store, member, |w| match op {
        CompositeOp::Withdraw => w.withdraw_composite(money, point),
        CompositeOp::MoveToEscrow => w.move_composite_to_escrow(money, point),
        CompositeOp::ReleaseEscrow => w.release_composite_escrow(money, point),
    })?;
    debug!(%member, %op, money, point, "composite operation applied");
    Ok(())
}
