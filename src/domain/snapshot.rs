use serde::{Deserialize, Serialize};

use crate::{
    common::error::StoreError,
    domain::{
        balance::AssetBalance,
        ids::{MemberId, WalletId},
        wallet::Wallet,
    },
};

/// Flat, persistable form of a [`Wallet`].
///
/// Column names follow the stored layout: `balance` is the spendable amount, `escrow`
/// the reserved one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletSnapshot {
    pub wallet: WalletId,
    pub member: MemberId,
    pub money_balance: i64,
    pub money_escrow: i64,
    pub point_balance: i64,
    pub point_escrow: i64,
}

impl From<&Wallet> for WalletSnapshot {
    fn from(w: &Wallet) -> Self {
        Self {
            wallet: w.id(),
            member: w.owner(),
            money_balance: w.money_balance(),
            money_escrow: w.money_escrow(),
            point_balance: w.point_balance(),
            point_escrow: w.point_escrow(),
        }
    }
}

impl TryFrom<WalletSnapshot> for Wallet {
    type Error = StoreError;

    fn try_from(s: WalletSnapshot) -> Result<Self, Self::Error> {
        let corrupt = |asset: &str| StoreError::CorruptSnapshot {
            member: s.member,
            reason: format!("{asset} balance/escrow out of range"),
        };
        let money = AssetBalance::restore(s.money_balance, s.money_escrow)
            .ok_or_else(|| corrupt("money"))?;
        let point = AssetBalance::restore(s.point_balance, s.point_escrow)
            .ok_or_else(|| corrupt("point"))?;

        Ok(Wallet::restore(s.wallet, s.member, money, point))
    }
}
