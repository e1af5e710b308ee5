//! JSON representation of the contacts
//!
//! This module contains the code that serializes contacts to and deserializes them from the JSON
//! document kept in the contact store. The contacts are nested under the `contacts` key of a
//! top-level object; other top-level keys are ignored when reading.

use {
    crate::Contact,
    serde::{de, Deserialize, Deserializer, Serialize},
    std::io::{BufReader, Read, Write},
};

// ========================================================================== //
// =====> structs to encode the structure of the JSON objects <============== //
// ========================================================================== //

#[derive(Debug, Deserialize, Serialize)]
struct JsonContactList {
    contacts: Vec<JsonContact>,
}

#[derive(Debug, Deserialize, Serialize)]
struct JsonContact {
    name: String,
    #[serde(deserialize_with = "string_or_number")]
    age: String,
    email: String,
    #[serde(default)]
    favorite: bool,
}

// ========================================================================== //
// =====> serialization <==================================================== //
// ========================================================================== //

/// Writes the contacts as an indented JSON document.
pub fn contacts_to_json<'a, C, W>(writer: W, contacts: C) -> anyhow::Result<()>
where
    C: IntoIterator<Item = &'a Contact>,
    W: Write,
{
    let list = JsonContactList {
        contacts: contacts.into_iter().map(JsonContact::from).collect(),
    };
    Ok(serde_json::to_writer_pretty(writer, &list)?)
}

impl From<&Contact> for JsonContact {
    fn from(contact: &Contact) -> Self {
        Self {
            name: contact.name.to_owned(),
            age: contact.age.to_owned(),
            email: contact.email.to_owned(),
            favorite: contact.favorite,
        }
    }
}

// ========================================================================== //
// =====> deserialization <================================================== //
// ========================================================================== //

pub fn contacts_from_json<R: Read>(reader: R) -> anyhow::Result<Vec<Contact>> {
    let list: JsonContactList = serde_json::from_reader(BufReader::new(reader))?;
    Ok(list.contacts.into_iter().map(Contact::from).collect())
}

/// Ages are free text, but hand-edited files may hold them as JSON numbers.
fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(text) => Ok(text),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        other => Err(de::Error::custom(format!(
            "expected a string or a number, found {other}"
        ))),
    }
}

impl From<JsonContact> for Contact {
    fn from(json_contact: JsonContact) -> Self {
        Contact {
            name: json_contact.name,
            age: json_contact.age,
            email: json_contact.email,
            favorite: json_contact.favorite,
        }
    }
}
