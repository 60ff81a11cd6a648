//! Dual-currency (money + point) wallets with escrow.
//!
//! Each [`domain::wallet::Wallet`] owns two [`domain::balance::AssetBalance`] ledgers.
//! Funds can be reserved for a pending trade, then either released back to the holder
//! or deducted on settlement.

pub mod app;
pub mod common;
pub mod domain;
pub mod io;
pub mod worker;
