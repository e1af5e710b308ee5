use {
    crate::{json, Contact},
    anyhow::Context,
    std::{
        fs::{self, File},
        io::{BufReader, BufWriter, ErrorKind, Write},
        path::{Path, PathBuf},
    },
};

const CONTACTS_FILE: &str = "contacts.json";

/// The file holding every contact between sessions.
///
/// Every save rewrites the whole file. A file that is missing or cannot be understood loads as an
/// empty contact list.
#[derive(Debug)]
pub struct ContactStore {
    contacts_path: PathBuf,
}

impl ContactStore {
    /// Initialize a store located at the given path
    pub fn from_path<P: AsRef<Path>>(store_path: P) -> Self {
        Self {
            contacts_path: store_path.as_ref().join(CONTACTS_FILE),
        }
    }

    pub fn load(&self) -> Vec<Contact> {
        let contacts_file = match File::open(&self.contacts_path) {
            Ok(file) => file,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.contacts_path.display(), "no contact store yet");
                return Vec::new();
            }
            Err(error) => {
                tracing::warn!(path = %self.contacts_path.display(), %error, "failed to open contact store, starting empty");
                return Vec::new();
            }
        };

        match json::contacts_from_json(BufReader::new(contacts_file)) {
            Ok(contacts) => {
                tracing::debug!(count = contacts.len(), "loaded contacts");
                contacts
            }
            Err(error) => {
                tracing::warn!(path = %self.contacts_path.display(), %error, "contact store is unreadable, starting empty");
                Vec::new()
            }
        }
    }

    pub fn save(&self, contacts: &[Contact]) -> anyhow::Result<()> {
        if let Some(dir) = self.contacts_path.parent() {
            fs::create_dir_all(dir).context("Failed to create contact store directory")?;
        }

        let contacts_file =
            File::create(&self.contacts_path).context("Failed to open contact store")?;
        let mut writer = BufWriter::new(contacts_file);
        json::contacts_to_json(&mut writer, contacts).context("Failed to write contact store")?;
        writer.flush().context("Failed to write contact store")?;

        tracing::debug!(count = contacts.len(), "saved contacts");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use {super::*, tempfile::TempDir};

    fn sample() -> Vec<Contact> {
        let mut favorite = Contact::from_input("bob stone", "unknown", "BOB@x.com");
        favorite.favorite = true;
        vec![
            Contact::from_input("ann lee", "41", "ann@x.com"),
            favorite,
            Contact::from_input("ann lee", "41", "ann@x.com"),
        ]
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = ContactStore::from_path(dir.path());

        let contacts = sample();
        store.save(&contacts).unwrap();
        assert_eq!(store.load(), contacts);
    }

    #[test]
    fn save_replaces_previous_content() {
        let dir = TempDir::new().unwrap();
        let store = ContactStore::from_path(dir.path());

        store.save(&sample()).unwrap();
        store.save(&sample()[..1]).unwrap();
        assert_eq!(store.load(), &sample()[..1]);

        store.save(&[]).unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn save_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let store = ContactStore::from_path(dir.path().join("nested").join("store"));

        store.save(&sample()).unwrap();
        assert_eq!(store.load(), sample());
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        assert!(ContactStore::from_path(dir.path()).load().is_empty());
    }

    #[test]
    fn corrupt_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = ContactStore::from_path(dir.path());
        let path = dir.path().join(CONTACTS_FILE);

        for content in [
            "",
            "not json at all",
            "{\"contacts\": [",
            "{\"people\": []}",
            "[{\"name\": \"A\", \"age\": \"1\", \"email\": \"\"}]",
            "{\"contacts\": [{\"name\": \"A\"}]}",
        ] {
            fs::write(&path, content).unwrap();
            assert!(store.load().is_empty(), "{content:?} should load empty");
        }
    }

    #[test]
    fn unknown_top_level_keys_are_ignored() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONTACTS_FILE),
            r#"{"owner": "me", "contacts": [{"name": "Ann", "age": "41", "email": "ann@x.com", "favorite": true}]}"#,
        )
        .unwrap();

        let contacts = ContactStore::from_path(dir.path()).load();
        assert_eq!(contacts.len(), 1);
        assert!(contacts[0].favorite);
    }

    #[test]
    fn numeric_age_keeps_every_contact() {
        let dir = TempDir::new().unwrap();
        let store = ContactStore::from_path(dir.path());
        fs::write(
            dir.path().join(CONTACTS_FILE),
            r#"{"contacts":[{"name":"Ann","age":"41","email":"a@x"},{"name":"Bob","age":30,"email":"b@x","favorite":false}]}"#,
        )
        .unwrap();

        let contacts = store.load();
        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[1].age, "30");

        // saved back as text
        store.save(&contacts).unwrap();
        let saved = fs::read_to_string(dir.path().join(CONTACTS_FILE)).unwrap();
        assert!(saved.contains(r#""age": "30""#));
    }

    #[test]
    fn save_fails_when_path_is_not_writable() {
        let dir = TempDir::new().unwrap();
        // a plain file where the store directory should be
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let store = ContactStore::from_path(&blocker);
        assert!(store.save(&sample()).is_err());
    }
}
