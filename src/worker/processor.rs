use tracing::{debug, warn};

use crate::{
    common::{command::WalletCommand, error::AppError},
    domain::{balance::BalanceOp, ledger::WalletStore},
    worker::handlers::{composite, deposit, escrow, open, withdrawal},
};

/// Routes each command to its handler and keeps a tally of outcomes.
#[derive(Debug, Default)]
pub struct Processor {
    applied: usize,
    rejected: usize,
}

impl Processor {
    pub fn new() -> Self {
        Self {
            applied: 0,
            rejected: 0,
        }
    }

    pub fn applied(&self) -> usize {
        self.applied
    }

    pub fn rejected(&self) -> usize {
        self.rejected
    }

    pub fn process<S: WalletStore + ?Sized>(
        &mut self,
        store: &mut S,
        command: WalletCommand,
    ) -> Result<(), AppError> {
        debug!(?command, "processing command");
        let member = command.member();

        let result = match command {
            WalletCommand::Open { member } => open::handle(store, member),
            WalletCommand::Single {
                member,
                asset,
                op,
                amount,
            } => match op {
                BalanceOp::Deposit => deposit::handle(store, member, asset, amount),
                BalanceOp::Withdraw => withdrawal::handle(store, member, asset, amount),
                BalanceOp::MoveToEscrow | BalanceOp::ReleaseEscrow | BalanceOp::DeductEscrow => {
                    escrow::handle(store, member, asset, op, amount)
                }
            },
            WalletCommand::Composite {
                member,
                op,
                money,
                point,
            } => composite::handle(store, member, op, money, point),
        };

        match &result {
            Ok(()) => self.applied += 1,
            Err(e) => {
                self.rejected += 1;
                warn!(%member, error = %e, "command rejected");
            }
        }
        result
    }
}
