use crate::domain::{
    balance::BalanceOp,
    ids::MemberId,
    wallet::{Asset, CompositeOp},
};

/// A wallet instruction, sent from the reader to the processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletCommand {
    Open {
        member: MemberId,
    },
    Single {
        member: MemberId,
        asset: Asset,
        op: BalanceOp,
        amount: i64,
    },
    Composite {
        member: MemberId,
        op: CompositeOp,
        money: i64,
        point: i64,
    },
}

impl WalletCommand {
    pub fn member(&self) -> MemberId {
        match self {
            WalletCommand::Open { member }
            | WalletCommand::Single { member, .. }
            | WalletCommand::Composite { member, .. } => *member,
        }
    }
}
