use std::{
    num::{IntErrorKind, ParseIntError},
    str::FromStr,
};

use crate::error::CommandError;

pub const MENU: &str = "1. Deposit\n\
                        2. Withdraw\n\
                        3. Print Account Details\n\
                        4. Exit";

/// A menu number as typed. Integers past the `i64` range saturate, which
/// still lands them outside the menu.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Selector(pub i64);

impl FromStr for Selector {
    type Err = ParseIntError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.parse::<i64>() {
            Ok(selector) => Ok(Selector(selector)),
            Err(err) => match err.kind() {
                IntErrorKind::PosOverflow => Ok(Selector(i64::MAX)),
                IntErrorKind::NegOverflow => Ok(Selector(i64::MIN)),
                _ => Err(err),
            },
        }
    }
}

/// A menu selector read from the operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    Deposit,
    Withdraw,
    PrintDetails,
    Exit,
}

impl TryFrom<Selector> for Command {
    type Error = CommandError;

    fn try_from(Selector(selector): Selector) -> Result<Self, Self::Error> {
        match selector {
            1 => Ok(Command::Deposit),
            2 => Ok(Command::Withdraw),
            3 => Ok(Command::PrintDetails),
            4 => Ok(Command::Exit),
            other => Err(CommandError::InvalidChoice(other)),
        }
    }
}
