use std::fmt;

use crate::common::error::WalletError;

/// The five transitions an [`AssetBalance`] supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceOp {
    Deposit,
    Withdraw,
    MoveToEscrow,
    ReleaseEscrow,
    DeductEscrow,
}

impl BalanceOp {
    pub fn name(&self) -> &'static str {
        match self {
            BalanceOp::Deposit => "deposit",
            BalanceOp::Withdraw => "withdraw",
            BalanceOp::MoveToEscrow => "escrow",
            BalanceOp::ReleaseEscrow => "release",
            BalanceOp::DeductEscrow => "deduct",
        }
    }
}

impl fmt::Display for BalanceOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Available and escrowed amounts of a single fund type.
///
/// Escrowed funds still belong to the holder but cannot be spent until they are
/// released back or deducted on settlement. Both fields are never negative, and a
/// failed operation leaves the balance exactly as it was.
///
/// # Examples
/// ```
/// use escrow_wallet::domain::balance::AssetBalance;
///
/// let mut balance = AssetBalance::init();
/// balance.deposit(1000).unwrap();
/// balance.move_to_escrow(400).unwrap();
/// assert_eq!((balance.balance(), balance.escrow()), (600, 400));
/// assert_eq!(balance.total(), 1000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetBalance {
    balance: i64,
    escrow: i64,
}

impl AssetBalance {
    pub fn init() -> Self {
        Self {
            balance: 0,
            escrow: 0,
        }
    }

    /// Rebuilds a persisted balance. Only store code may do this.
    pub(crate) fn restore(balance: i64, escrow: i64) -> Option<Self> {
        let valid = balance >= 0 && escrow >= 0 && balance.checked_add(escrow).is_some();
        valid.then_some(Self { balance, escrow })
    }

    /// Spendable amount.
    pub fn balance(&self) -> i64 {
        self.balance
    }

    /// Reserved amount.
    pub fn escrow(&self) -> i64 {
        self.escrow
    }

    pub fn total(&self) -> i64 {
        self.balance + self.escrow
    }

    pub fn deposit(&mut self, amount: i64) -> Result<(), WalletError> {
        self.apply(BalanceOp::Deposit, amount)
    }

    pub fn withdraw(&mut self, amount: i64) -> Result<(), WalletError> {
        self.apply(BalanceOp::Withdraw, amount)
    }

    /// Reserves funds for a pending trade (buyer side on purchase).
    pub fn move_to_escrow(&mut self, amount: i64) -> Result<(), WalletError> {
        self.apply(BalanceOp::MoveToEscrow, amount)
    }

    /// Returns reserved funds to the spendable balance (cancel or refund).
    pub fn release_escrow(&mut self, amount: i64) -> Result<(), WalletError> {
        self.apply(BalanceOp::ReleaseEscrow, amount)
    }

    /// Settles reserved funds. The matching credit lands on the counterparty's wallet,
    /// which the caller handles.
    pub fn deduct_escrow(&mut self, amount: i64) -> Result<(), WalletError> {
        self.apply(BalanceOp::DeductEscrow, amount)
    }

    /// Runs `op` and commits the result only if every check passes.
    pub fn apply(&mut self, op: BalanceOp, amount: i64) -> Result<(), WalletError> {
        *self = self.check(op, amount)?;
        Ok(())
    }

    /// Computes the state `op` would produce without touching `self`.
    ///
    /// Positivity is checked before sufficiency, so a non-positive amount is always
    /// reported as `InvalidAmount`.
    pub fn check(&self, op: BalanceOp, amount: i64) -> Result<Self, WalletError> {
        if amount <= 0 {
            return Err(WalletError::InvalidAmount(amount));
        }

        let next = match op {
            BalanceOp::Deposit => {
                // total must stay representable
                self.total()
                    .checked_add(amount)
                    .ok_or(WalletError::InvalidAmount(amount))?;
                Self {
                    balance: self.balance + amount,
                    ..*self
                }
            }
            BalanceOp::Withdraw => {
                ensure_sufficient(self.balance, amount)?;
                Self {
                    balance: self.balance - amount,
                    ..*self
                }
            }
            BalanceOp::MoveToEscrow => {
                ensure_sufficient(self.balance, amount)?;
                Self {
                    balance: self.balance - amount,
                    escrow: self.escrow + amount,
                }
            }
            BalanceOp::ReleaseEscrow => {
                ensure_sufficient(self.escrow, amount)?;
                Self {
                    balance: self.balance + amount,
                    escrow: self.escrow - amount,
                }
            }
            BalanceOp::DeductEscrow => {
                ensure_sufficient(self.escrow, amount)?;
                Self {
                    escrow: self.escrow - amount,
                    ..*self
                }
            }
        };
        Ok(next)
    }
}

impl Default for AssetBalance {
    fn default() -> Self {
        Self::init()
    }
}

fn ensure_sufficient(current: i64, amount: i64) -> Result<(), WalletError> {
    if current < amount {
        return Err(WalletError::InsufficientBalance {
            required: amount,
            available: current,
        });
    }
    Ok(())
}
