use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::account::{Account, AccountNumber, PhoneNumber};
use crate::commands::{Command, Selector, MENU};
use crate::error::{AccountError, CommandError, ConsoleError};
use crate::fixedpoint::Amount;
use crate::input::Console;

/// The command loop: owns the session's account and dispatches menu
/// selections to it.
pub struct Teller<R, W> {
    account: Account,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> Teller<R, W> {
    pub fn new(account: Account, console: Console<R, W>) -> Self {
        Teller { account, console }
    }

    /// Asks the operator for the account's fields and opens it.
    pub fn open(mut console: Console<R, W>) -> Result<Self, ConsoleError> {
        console.say("Enter Account Number:")?;
        let number: AccountNumber = console.read_number()?;
        console.say("Enter Name:")?;
        let holder = console.read_line()?;
        console.say("Enter Phone Number:")?;
        let phone: PhoneNumber = console.read_number()?;
        console.say("Enter Initial Deposit:")?;
        let initial_balance: Amount = console.read_number()?;

        let account = Account::create(number, holder, phone, initial_balance);
        console.say("Account created successfully!")?;
        Ok(Teller::new(account, console))
    }

    /// Serves menu selections until the operator exits.
    ///
    /// Returns `ConsoleError::Closed` if input ends before that.
    pub fn run(&mut self) -> Result<(), ConsoleError> {
        loop {
            self.console.say("\nChoose operation:")?;
            self.console.say(MENU)?;
            let selector: Selector = self.console.read_number()?;

            match Command::try_from(selector) {
                Ok(Command::Deposit) => {
                    self.console.say("Enter amount to deposit:")?;
                    let amount = self.console.read_number()?;
                    let outcome = self.account.deposit(amount);
                    self.report("Deposit", outcome)?;
                }
                Ok(Command::Withdraw) => {
                    self.console.say("Enter amount to withdraw:")?;
                    let amount = self.console.read_number()?;
                    let outcome = self.account.withdraw(amount);
                    self.report("Withdrawal", outcome)?;
                }
                Ok(Command::PrintDetails) => self.console.say(&self.account)?,
                Ok(Command::Exit) => {
                    info!("operator exited");
                    return self.console.say("Exiting program...");
                }
                Err(err) => {
                    let CommandError::InvalidChoice(choice) = &err;
                    debug!(choice = *choice, "menu selection rejected");
                    self.console.say(err)?;
                }
            }
        }
    }

    fn report(
        &mut self,
        operation: &str,
        outcome: Result<Amount, AccountError>,
    ) -> Result<(), ConsoleError> {
        let message = match outcome {
            Ok(balance) => format!("{} successful! New balance: {}", operation, balance),
            Err(err) => err.to_string(),
        };
        self.console.say(message)
    }
}

#[cfg(test)]
impl<R: BufRead> Teller<R, Vec<u8>> {
    fn finish(self) -> (Account, String) {
        let output = self.console.into_output();
        (
            self.account,
            String::from_utf8(output).unwrap_or_default(),
        )
    }
}
