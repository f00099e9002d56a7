/**
 * Error types for the teller.
 *
 * Every variant is recoverable: the command loop prints it and keeps going.
 * The `Display` text of account and command errors is exactly what the
 * operator sees.
 */
use std::{fmt::Display, io};

use thiserror::Error;

/// Which balance operation rejected an amount.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operation {
    Deposit,
    Withdrawal,
}

impl Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Deposit => write!(f, "deposit"),
            Operation::Withdrawal => write!(f, "withdrawal"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    #[error("Invalid {0} amount!")]
    InvalidAmount(Operation),

    #[error("Insufficient balance!")]
    InsufficientBalance,

    #[error("Balance limit exceeded!")]
    BalanceOverflow,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Invalid choice! Please try again.")]
    InvalidChoice(i64),
}

/// Reasons a token is not a valid fixed point amount.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    #[error("amount is empty")]
    Empty,

    #[error("'{0}' is not a number")]
    NotANumber(String),
}

#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("input stream closed")]
    Closed,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
