//! The contacts of the current session
//!
//! Contacts have no identifier. They are selected by their position in the listing, which starts
//! at 1. Deleting a contact renumbers every contact after it, so a position is only meaningful
//! until the next deletion.

use {crate::Contact, std::num::IntErrorKind, thiserror::Error};

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum PositionError {
    #[error("no position given")]
    Blank,
    #[error("\"{0}\" is not a number")]
    NotANumber(String),
    #[error("position {position} is not between 1 and {len}")]
    OutOfRange { position: i64, len: usize },
}

#[derive(Debug, Default)]
pub struct ContactRegistry {
    contacts: Vec<Contact>,
}

impl ContactRegistry {
    pub fn new(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Appends a contact. Identical contacts may coexist.
    pub fn add(&mut self, contact: Contact) -> &Contact {
        self.contacts.push(contact);
        &self.contacts[self.contacts.len() - 1]
    }

    /// Parses user input into a position that is valid right now.
    pub fn resolve(&self, input: &str) -> Result<usize, PositionError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(PositionError::Blank);
        }
        let position = match input.parse::<i64>() {
            Ok(position) => position,
            // too large to parse, but still a number
            Err(error) => match error.kind() {
                IntErrorKind::PosOverflow => i64::MAX,
                IntErrorKind::NegOverflow => i64::MIN,
                _ => return Err(PositionError::NotANumber(input.to_owned())),
            },
        };
        self.index(position).map(|index| index + 1)
    }

    fn index(&self, position: i64) -> Result<usize, PositionError> {
        match usize::try_from(position) {
            Ok(position) if (1..=self.contacts.len()).contains(&position) => Ok(position - 1),
            _ => Err(PositionError::OutOfRange {
                position,
                len: self.contacts.len(),
            }),
        }
    }

    /// Removes the contact at `position` if `confirmation` repeats the position.
    ///
    /// Returns `Ok(None)` without touching the contacts when the confirmation does not match.
    pub fn delete(
        &mut self,
        position: usize,
        confirmation: &str,
    ) -> Result<Option<Contact>, PositionError> {
        let index = self.index(position as i64)?;
        if confirmation.trim() != position.to_string() {
            return Ok(None);
        }
        Ok(Some(self.contacts.remove(index)))
    }

    /// Contacts whose name or email contains `query`, ignoring case, in listing order.
    pub fn search(&self, query: &str) -> Vec<&Contact> {
        let query = query.trim().to_lowercase();
        self.contacts
            .iter()
            .filter(|contact| {
                contact.name.to_lowercase().contains(&query)
                    || contact.email.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Flips the favorite flag of the contact at `position` and returns the new flag.
    pub fn toggle_favorite(&mut self, position: usize) -> Result<bool, PositionError> {
        let index = self.index(position as i64)?;
        let contact = &mut self.contacts[index];
        contact.favorite = !contact.favorite;
        Ok(contact.favorite)
    }
}
