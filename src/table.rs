use crate::Contact;

/// Renders contacts as a fixed-width table, numbered from 1.
///
/// Returns [`None`] if there is nothing to show.
pub fn render_table<'a, C>(contacts: C) -> Option<String>
where
    C: IntoIterator<Item = &'a Contact>,
{
    let mut contacts = contacts.into_iter().peekable();
    contacts.peek()?;

    let mut table = String::new();
    table.push_str("\n# | Name                 | Age | Email                  | Fav\n");
    table.push_str(&"-".repeat(55));
    table.push('\n');
    for (position, contact) in (1..).zip(contacts) {
        let favorite = if contact.favorite { "★" } else { "" };
        table.push_str(&format!(
            "{position:<2}| {name:<20}| {age:<4}| {email:<22}| {favorite}\n",
            name = contact.name,
            age = contact.age,
            email = contact.email,
        ));
    }
    table.push('\n');
    Some(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_renders_nothing() {
        assert!(render_table(&[] as &[Contact]).is_none());
    }

    #[test]
    fn rows_are_padded_and_numbered() {
        let mut bob = Contact::from_input("bob", "7", "b@x.com");
        bob.favorite = true;
        let contacts = [Contact::from_input("ann", "41", "a@x.com"), bob];

        let table = render_table(&contacts).unwrap();
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines[0], "");
        assert_eq!(
            lines[1],
            "# | Name                 | Age | Email                  | Fav"
        );
        assert_eq!(lines[2], "-".repeat(55));
        assert_eq!(
            lines[3],
            "1 | Ann                 | 41  | a@x.com               | "
        );
        assert_eq!(
            lines[4],
            "2 | Bob                 | 7   | b@x.com               | ★"
        );
        // blank line after the last row
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[5], "");
    }

    #[test]
    fn long_values_are_not_truncated() {
        let contacts = [Contact::from_input(
            "a very long name that does not fit",
            "",
            "",
        )];
        let table = render_table(&contacts).unwrap();
        assert!(table.contains("A Very Long Name That Does Not Fit| "));
    }
}
