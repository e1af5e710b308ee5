use {
    crate::Contact,
    anyhow::Context,
    ical_vcard::{Contentline, Identifier, Value},
    std::io::Write,
};

pub fn contacts_to_vcard<'a, C, W>(writer: W, contacts: C) -> anyhow::Result<()>
where
    C: IntoIterator<Item = &'a Contact>,
    W: Write,
{
    let mut writer = ical_vcard::Writer::new(writer);
    for contact in contacts {
        writer
            .write_all(
                contact_to_contentlines(contact)
                    .context("Contact could not be serialized to vCard")?,
            )
            .context("Failed to write contacts to vCard")?;
    }
    Ok(())
}

fn contentline(name: &'static str, value: Value<'static>) -> Contentline<'static> {
    Contentline {
        group: None,
        name: Identifier::new(name).expect("valid identifier"),
        params: Vec::new(),
        value,
    }
}

// Age has no vCard property and is left out.
fn contact_to_contentlines(contact: &Contact) -> anyhow::Result<Vec<Contentline<'static>>> {
    let mut contentlines = vec![
        contentline("BEGIN", Value::new("VCARD").expect("valid value")),
        contentline("VERSION", Value::new("4.0").expect("valid value")),
        contentline(
            "FN",
            Value::new(contact.name.to_owned()).context(
                "Failed to write name to contentline because it contains control characters",
            )?,
        ),
    ];

    if !contact.email.is_empty() {
        contentlines.push(contentline(
            "EMAIL",
            Value::new(contact.email.to_owned())
                .context("Failed to write email address to contentline")?,
        ));
    }

    if contact.favorite {
        contentlines.push(contentline(
            "CATEGORIES",
            Value::new("favorite").expect("valid value"),
        ));
    }

    contentlines.push(contentline("END", Value::new("VCARD").expect("valid value")));

    Ok(contentlines)
}
