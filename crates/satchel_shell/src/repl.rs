//! Interactive menu loop
//!
//! Reads menu choices from any `BufRead` and writes the screen to any
//! `Write`, so the loop can be driven from a script in tests.

use crate::command::{self, CommandError, MenuAction};
use crate::config::ShellConfig;
use crate::output;
use crate::session::{Session, SessionError};
use std::io::{self, BufRead, Write};

/// Menu loop over one session
pub struct Repl<R, W> {
    session: Session,
    config: ShellConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    /// Create a loop with a fresh session sized from the config
    pub fn new(config: ShellConfig, input: R, output: W) -> Self {
        Self {
            session: Session::new(config.capacity),
            config,
            input,
            output,
        }
    }

    /// Session state
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Give back the output sink
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the player quits or input runs out
    pub fn run(&mut self) -> io::Result<()> {
        if self.config.banner {
            writeln!(self.output, "Satchel v{} - inventory demo", env!("CARGO_PKG_VERSION"))?;
        }

        loop {
            for line in output::status_screen(
                self.session.inventory(),
                self.session.held(),
                self.config.name_width,
            ) {
                writeln!(self.output, "{}", line)?;
            }
            write!(self.output, "{}", self.config.prompt)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                log::debug!("input closed, leaving menu");
                break;
            };

            match line.parse::<MenuAction>() {
                Ok(MenuAction::Create) => self.create_item()?,
                Ok(MenuAction::Get) => self.get_item()?,
                Ok(MenuAction::Put) => self.put_item()?,
                Ok(MenuAction::Drop) => self.drop_item()?,
                Ok(MenuAction::Quit) => break,
                Err(e) => {
                    log::debug!("bad menu input: {}", e);
                    writeln!(self.output, "Invalid input. Try again.")?;
                }
            }
        }

        self.output.flush()
    }

    /// Read one line without its line ending, or None at end of input
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(|c: char| c == '\r' || c == '\n').len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Read a line, treating end of input as an empty answer
    fn answer(&mut self) -> io::Result<String> {
        Ok(self.read_line()?.unwrap_or_default())
    }

    fn create_item(&mut self) -> io::Result<()> {
        for line in output::kind_menu() {
            writeln!(self.output, "{}", line)?;
        }
        self.output.flush()?;

        let kind = match command::parse_item_kind(&self.answer()?) {
            Ok(kind) => kind,
            Err(CommandError::InvalidItemKind(choice)) => {
                // Name and description are still asked for before the
                // choice is rejected
                log::debug!("no item kind for choice {}", choice);
                self.prompt_item_text()?;
                writeln!(self.output, "Invalid item type")?;
                return Ok(());
            }
            Err(_) => {
                writeln!(self.output, "Invalid choice")?;
                return Ok(());
            }
        };

        let (name, description) = self.prompt_item_text()?;
        if let Err(SessionError::InventoryFull) =
            self.session.create_item(kind, name, description)
        {
            writeln!(self.output, "Unable to add item. Item discarded")?;
        }
        Ok(())
    }

    fn prompt_item_text(&mut self) -> io::Result<(String, String)> {
        writeln!(self.output, "Enter item name:")?;
        self.output.flush()?;
        let name = self.answer()?;
        writeln!(self.output, "Enter item description:")?;
        self.output.flush()?;
        let description = self.answer()?;
        Ok((name, description))
    }

    fn get_item(&mut self) -> io::Result<()> {
        if self.session.held().is_some() {
            writeln!(
                self.output,
                "You're already holding something. Either drop it or put it back \
                 in the inventory before grabbing something else"
            )?;
            return Ok(());
        }

        write!(self.output, "Enter the index of the item you'd like to take: ")?;
        self.output.flush()?;

        // Anything that is not a number is ignored and the menu comes back
        let index = match command::parse_index(&self.answer()?) {
            Ok(index) => index,
            Err(e) => {
                log::debug!("ignoring index input: {}", e);
                return Ok(());
            }
        };

        if let Err(e) = self.session.take(index) {
            log::debug!("take failed: {}", e);
            writeln!(self.output, "There's no item at that index")?;
        }
        Ok(())
    }

    fn put_item(&mut self) -> io::Result<()> {
        match self.session.put_back() {
            Ok(slot) => log::debug!("put back into slot {}", slot),
            Err(SessionError::NothingHeld) => {
                writeln!(
                    self.output,
                    "You're not holding anything that can be put in the inventory."
                )?;
            }
            Err(e) => {
                writeln!(self.output, "Unable to put item back: {}", e)?;
            }
        }
        Ok(())
    }

    fn drop_item(&mut self) -> io::Result<()> {
        if self.session.drop_held().is_err() {
            writeln!(self.output, "You're not holding anything that can be dropped.")?;
        }
        Ok(())
    }
}
