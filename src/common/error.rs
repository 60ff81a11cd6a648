use crate::domain::ids::MemberId;

/// Failures raised by a balance or wallet operation.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletError {
    #[error("invalid amount: {0} (must be positive)")]
    InvalidAmount(i64),
    #[error("insufficient balance: required {required}, available {available}")]
    InsufficientBalance { required: i64, available: i64 },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("member {0} already owns a wallet")]
    DuplicateOwner(MemberId),
    #[error("no wallet for member {0}")]
    WalletNotFound(MemberId),
    #[error("corrupt snapshot for member {member}: {reason}")]
    CorruptSnapshot { member: MemberId, reason: String },
}

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error(
        "missing input csv path. usage: cargo run -- <commands.csv> [--snapshot <wallets.csv>] [--save <wallets.csv>] [--strict]"
    )]
    MissingArg,
    #[error("usage error: {0}")]
    Usage(String),
    #[error("failed to open input file: {0}")]
    OpenInput(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("wallet error: {0}")]
    Wallet(#[from] WalletError),
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl AppError {
    /// Business rejections the CLI may skip over; everything else aborts the run.
    pub fn is_rejection(&self) -> bool {
        matches!(self, AppError::Wallet(_) | AppError::Store(_))
    }
}
