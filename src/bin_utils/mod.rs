//! This module could be a separate crate on its own, to bootstrap [`bank_teller`]
//! within the binary, but for simplicity purposes I include it directly here.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::{info, warn};

use crate::command::OperationCommand;
use crate::directory::Directory;
use crate::session::Session;
use report::AccountInfo;
use terminal::MenuChoice;

pub mod report;
pub mod terminal;

pub struct Service<'w, R, W: 'w> {
    pub input: R,
    pub output: &'w mut W,
    pub directory: Directory,
}

impl<'w, R, W> Service<'w, R, W>
where
    R: BufRead,
    W: Write + 'w,
{
    /// Drives one full session: login, then the menu loop until exit or end
    /// of input. Rejections are reported on the output and the loop keeps
    /// going; only I/O failures bubble up. A failed login ends the session
    /// without revealing anything beyond the attempted username.
    pub fn run(self) -> Result<()> {
        let Service {
            mut input,
            output,
            mut directory,
        } = self;

        let Some(username) = terminal::prompt(&mut input, output, "Enter Username: ")? else {
            return Ok(());
        };
        let Some(password) = terminal::prompt(&mut input, output, "Enter Password: ")? else {
            return Ok(());
        };

        let Some(user) = directory.login(&username, &password) else {
            warn!(username = %username, "login rejected");
            writeln!(output, "Login failed. Invalid username or password.")?;
            writeln!(output, "Entered username: {username}")?;
            return Ok(());
        };
        info!(username = %username, "login accepted");
        writeln!(output, "Login Successful!")?;
        writeln!(output, "Welcome, {}!", user.username())?;

        let mut session = Session::open(user);
        loop {
            output.write_all(terminal::MENU.as_bytes())?;
            let Some(choice) = terminal::prompt(&mut input, output, "Enter your choice: ")? else {
                return Ok(());
            };
            match MenuChoice::parse(&choice) {
                Some(MenuChoice::Operation(kind)) => {
                    let Some(raw) =
                        terminal::prompt(&mut input, output, terminal::amount_prompt(kind))?
                    else {
                        return Ok(());
                    };
                    match OperationCommand::parse(kind, &raw) {
                        Ok(command) => match session.execute(command) {
                            Ok(transaction) => {
                                writeln!(output, "{}", terminal::success_line(transaction.kind()))?;
                            }
                            Err(err) => {
                                warn!(%err, "operation rejected");
                                writeln!(output, "{}", terminal::rejection_line(&err))?;
                            }
                        },
                        Err(err) => writeln!(output, "{err}")?,
                    }
                }
                Some(MenuChoice::AccountInfo) => {
                    let info = AccountInfo::of(session.account());
                    report::print_account_info(output, &info)?;
                }
                Some(MenuChoice::Exit) => {
                    writeln!(output, "Exiting...")?;
                    return Ok(());
                }
                None => writeln!(output, "Invalid choice. Please try again.")?,
            }
        }
    }
}
