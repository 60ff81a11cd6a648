use std::fmt;

use crate::{
    common::error::WalletError,
    domain::{
        balance::{AssetBalance, BalanceOp},
        ids::{MemberId, WalletId},
    },
};

/// The two fund types a wallet holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Asset {
    Money,
    Point,
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Asset::Money => f.write_str("money"),
            Asset::Point => f.write_str("point"),
        }
    }
}

/// Operations that touch both ledgers in one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositeOp {
    Withdraw,
    MoveToEscrow,
    ReleaseEscrow,
}

impl CompositeOp {
    fn balance_op(self) -> BalanceOp {
        match self {
            CompositeOp::Withdraw => BalanceOp::Withdraw,
            CompositeOp::MoveToEscrow => BalanceOp::MoveToEscrow,
            CompositeOp::ReleaseEscrow => BalanceOp::ReleaseEscrow,
        }
    }
}

impl fmt::Display for CompositeOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.balance_op(), f)
    }
}

/// A member's wallet: one money ledger and one point ledger.
///
/// Built only through [`Wallet::create`]; the owner never changes afterwards and the
/// ledgers are only reachable through the methods below.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wallet {
    id: WalletId,
    owner: MemberId,
    money: AssetBalance,
    point: AssetBalance,
}

impl Wallet {
    pub fn create(owner: MemberId) -> Self {
        Self {
            id: WalletId::new(),
            owner,
            money: AssetBalance::init(),
            point: AssetBalance::init(),
        }
    }

    pub(crate) fn restore(
        id: WalletId,
        owner: MemberId,
        money: AssetBalance,
        point: AssetBalance,
    ) -> Self {
        Self {
            id,
            owner,
            money,
            point,
        }
    }

    pub fn id(&self) -> WalletId {
        self.id
    }

    pub fn owner(&self) -> MemberId {
        self.owner
    }

    pub fn money(&self) -> &AssetBalance {
        &self.money
    }

    pub fn point(&self) -> &AssetBalance {
        &self.point
    }

    pub fn balance_of(&self, asset: Asset) -> &AssetBalance {
        match asset {
            Asset::Money => &self.money,
            Asset::Point => &self.point,
        }
    }

    fn balance_of_mut(&mut self, asset: Asset) -> &mut AssetBalance {
        match asset {
            Asset::Money => &mut self.money,
            Asset::Point => &mut self.point,
        }
    }

    /// Applies a single-currency operation to one ledger.
    pub fn apply(&mut self, asset: Asset, op: BalanceOp, amount: i64) -> Result<(), WalletError> {
        self.balance_of_mut(asset).apply(op, amount)
    }

    pub fn deposit_money(&mut self, amount: i64) -> Result<(), WalletError> {
        self.money.deposit(amount)
    }

    pub fn withdraw_money(&mut self, amount: i64) -> Result<(), WalletError> {
        self.money.withdraw(amount)
    }

    pub fn deposit_point(&mut self, amount: i64) -> Result<(), WalletError> {
        self.point.deposit(amount)
    }

    pub fn withdraw_point(&mut self, amount: i64) -> Result<(), WalletError> {
        self.point.withdraw(amount)
    }

    pub fn move_money_to_escrow(&mut self, amount: i64) -> Result<(), WalletError> {
        self.money.move_to_escrow(amount)
    }

    pub fn release_money_escrow(&mut self, amount: i64) -> Result<(), WalletError> {
        self.money.release_escrow(amount)
    }

    pub fn deduct_money_escrow(&mut self, amount: i64) -> Result<(), WalletError> {
        self.money.deduct_escrow(amount)
    }

    pub fn move_point_to_escrow(&mut self, amount: i64) -> Result<(), WalletError> {
        self.point.move_to_escrow(amount)
    }

    pub fn release_point_escrow(&mut self, amount: i64) -> Result<(), WalletError> {
        self.point.release_escrow(amount)
    }

    pub fn deduct_point_escrow(&mut self, amount: i64) -> Result<(), WalletError> {
        self.point.deduct_escrow(amount)
    }

    /// Mixed money + point payment.
    pub fn withdraw_composite(&mut self, money: i64, point: i64) -> Result<(), WalletError> {
        self.apply_composite(CompositeOp::Withdraw, money, point)
    }

    pub fn move_composite_to_escrow(&mut self, money: i64, point: i64) -> Result<(), WalletError> {
        self.apply_composite(CompositeOp::MoveToEscrow, money, point)
    }

    pub fn release_composite_escrow(&mut self, money: i64, point: i64) -> Result<(), WalletError> {
        self.apply_composite(CompositeOp::ReleaseEscrow, money, point)
    }

    /// Runs `op` on both ledgers. A zero leg is skipped; a negative leg is invalid.
    ///
    /// Both legs are checked against the current state before either is written, so on
    /// error the wallet is untouched. The money leg is checked first and its error wins.
    pub fn apply_composite(
        &mut self,
        op: CompositeOp,
        money: i64,
        point: i64,
    ) -> Result<(), WalletError> {
        let next_money = leg(&self.money, op, money)?;
        let next_point = leg(&self.point, op, point)?;

        self.money = next_money;
        self.point = next_point;
        Ok(())
    }

    pub fn money_balance(&self) -> i64 {
        self.money.balance()
    }

    pub fn money_escrow(&self) -> i64 {
        self.money.escrow()
    }

    pub fn total_money(&self) -> i64 {
        self.money.total()
    }

    pub fn point_balance(&self) -> i64 {
        self.point.balance()
    }

    pub fn point_escrow(&self) -> i64 {
        self.point.escrow()
    }

    pub fn total_point(&self) -> i64 {
        self.point.total()
    }
}

fn leg(balance: &AssetBalance, op: CompositeOp, amount: i64) -> Result<AssetBalance, WalletError> {
    if amount == 0 {
        return Ok(*balance);
    }
    balance.check(op.balance_op(), amount)
}
