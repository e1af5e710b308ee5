//! The interactive command loop
//!
//! Reads one command per line and runs it against the registry. Commands that change contacts
//! save the store right away, and the store is saved once more when the loop ends.

use {
    crate::{
        registry::{ContactRegistry, PositionError},
        store::ContactStore,
        table, Contact,
    },
    anyhow::Context,
    std::io::{BufRead, Write},
};

const HELP: &str = "
Available commands:
  add      - Add a new contact
  delete   - Delete a contact (with confirmation)
  search   - Search contacts by name/email
  fav      - Toggle favorite for a contact
  list     - Show all contacts
  help     - Show this menu
  q        - Quit program
";

pub fn run<R, W>(
    registry: &mut ContactRegistry,
    store: &ContactStore,
    input: R,
    output: W,
) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut shell = Shell {
        registry,
        store,
        input,
        output,
    };
    shell.run()
}

pub fn list<'a, C, W>(output: &mut W, contacts: C) -> anyhow::Result<()>
where
    C: IntoIterator<Item = &'a Contact>,
    W: Write,
{
    match table::render_table(contacts) {
        Some(table) => write!(output, "{table}")?,
        None => writeln!(output, "(No contacts to show)")?,
    }
    Ok(())
}

struct Shell<'a, R, W> {
    registry: &'a mut ContactRegistry,
    store: &'a ContactStore,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<'_, R, W> {
    fn run(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "Hi, welcome to the contact management system.\n")?;

        loop {
            writeln!(self.output, "Contact list size: {}", self.registry.len())?;
            let command = match self.prompt("Command (type 'help' for options): ")? {
                Some(command) => command.trim().to_lowercase(),
                None => break,
            };
            tracing::debug!(%command, "dispatching command");

            match command.as_str() {
                "add" => {
                    self.add()?;
                    self.save()?;
                    writeln!(self.output, "Person added!")?;
                }
                "delete" => {
                    self.delete()?;
                    // rewritten even when nothing was deleted
                    self.save()?;
                }
                "search" => self.search()?,
                "fav" => {
                    self.toggle_favorite()?;
                    self.save()?;
                }
                "list" => list(&mut self.output, self.registry.contacts())?,
                "help" => writeln!(self.output, "{HELP}")?,
                "q" => break,
                _ => writeln!(self.output, "Invalid command!")?,
            }
        }

        self.save()?;
        writeln!(self.output, "Goodbye!")?;
        self.output.flush()?;
        Ok(())
    }

    /// Shows `message` and reads one line without its line ending.
    ///
    /// Returns [`None`] at the end of the input.
    fn prompt(&mut self, message: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_owned()))
    }

    /// Like [`Shell::prompt`], but the end of the input reads as a blank line.
    fn prompt_line(&mut self, message: &str) -> anyhow::Result<String> {
        Ok(self.prompt(message)?.unwrap_or_default())
    }

    fn save(&self) -> anyhow::Result<()> {
        self.store.save(self.registry.contacts())
    }

    fn add(&mut self) -> anyhow::Result<()> {
        let name = self.prompt_line("Name: ")?;
        let age = self.prompt_line("Age: ")?;
        let email = self.prompt_line("Email: ")?;
        let contact = self.registry.add(Contact::from_input(&name, &age, &email));
        tracing::info!(name = %contact.name, "added contact");
        Ok(())
    }

    fn delete(&mut self) -> anyhow::Result<()> {
        if self.registry.is_empty() {
            writeln!(self.output, "No contacts to delete.")?;
            return Ok(());
        }
        list(&mut self.output, self.registry.contacts())?;

        let position = loop {
            let input = self.prompt_line("Enter a number to delete (or Enter to cancel): ")?;
            match self.registry.resolve(&input) {
                Ok(position) => break position,
                Err(PositionError::Blank) => {
                    writeln!(self.output, "Canceled.")?;
                    return Ok(());
                }
                Err(PositionError::NotANumber(_)) => writeln!(self.output, "Invalid number.")?,
                Err(PositionError::OutOfRange { .. }) => {
                    writeln!(self.output, "Invalid number, out of range.")?
                }
            }
        };

        let confirmation = self.prompt_line(&format!("Type {position} again to confirm delete: "))?;
        match self.registry.delete(position, &confirmation)? {
            Some(contact) => {
                tracing::info!(name = %contact.name, position, "deleted contact");
                writeln!(self.output, "Person deleted!")?;
            }
            None => writeln!(self.output, "Delete canceled.")?,
        }
        Ok(())
    }

    fn search(&mut self) -> anyhow::Result<()> {
        if self.registry.is_empty() {
            writeln!(self.output, "(No contacts to search)")?;
            return Ok(());
        }
        let query = self.prompt_line("Search for a name/email: ")?;
        list(&mut self.output, self.registry.search(&query))
    }

    fn toggle_favorite(&mut self) -> anyhow::Result<()> {
        if self.registry.is_empty() {
            writeln!(self.output, "No contacts to update.")?;
            return Ok(());
        }
        list(&mut self.output, self.registry.contacts())?;

        let input = self.prompt_line("Enter contact number to toggle favorite: ")?;
        let toggled = self
            .registry
            .resolve(&input)
            .and_then(|position| self.registry.toggle_favorite(position));
        match toggled {
            Ok(true) => writeln!(self.output, "★ Added to favorites!")?,
            Ok(false) => writeln!(self.output, "☆ Removed from favorites.")?,
            Err(PositionError::OutOfRange { .. }) => writeln!(self.output, "Invalid number.")?,
            Err(PositionError::Blank | PositionError::NotANumber(_)) => {
                writeln!(self.output, "Not a valid number.")?
            }
        }
        Ok(())
    }
}
