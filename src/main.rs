use {
    anyhow::Context,
    args::{Args, Command, OutputFormat},
    clap::Parser,
    registry::ContactRegistry,
    std::io::{self, BufWriter, Write},
    store::ContactStore,
};

mod args;
mod config;
mod json;
mod registry;
mod shell;
mod store;
mod table;
mod vcard;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Contact {
    name: String,
    age: String,
    email: String,
    favorite: bool,
}

impl Contact {
    /// Builds a contact from raw user input.
    ///
    /// The name is trimmed and title-cased, the age is trimmed but otherwise kept as entered and
    /// the email address is trimmed and lower-cased. New contacts are never favorites.
    fn from_input(raw_name: &str, raw_age: &str, raw_email: &str) -> Self {
        Self {
            name: title_case(raw_name.trim()),
            age: raw_age.trim().to_owned(),
            email: raw_email.trim().to_lowercase(),
            favorite: false,
        }
    }
}

/// Upper-cases the first letter of every run of letters and lower-cases all other letters.
fn title_case(text: &str) -> String {
    let mut titled = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                titled.extend(c.to_lowercase());
            } else {
                titled.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            titled.push(c);
            in_word = false;
        }
    }
    titled
}

fn search<W: Write>(output: &mut W, registry: &ContactRegistry, query: &str) -> anyhow::Result<()> {
    if registry.is_empty() {
        writeln!(output, "(No contacts to search)")?;
        return Ok(());
    }
    shell::list(output, registry.search(query))
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("contactbook=error"));

    // stdout belongs to the shell and to exports
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = Args::parse();
    let config = config::obtain_config()?;
    let store_path = args.store_path(config.as_ref())?;
    tracing::debug!(store = %store_path.display(), "using contact store");

    let store = ContactStore::from_path(store_path);
    let mut registry = ContactRegistry::new(store.load());

    let stdout = io::stdout();
    match args.command() {
        None | Some(Command::Shell) => {
            shell::run(&mut registry, &store, io::stdin().lock(), stdout.lock())?;
        }
        Some(Command::List) => shell::list(&mut stdout.lock(), registry.contacts())?,
        Some(Command::Search { query }) => search(&mut stdout.lock(), &registry, query)?,
        Some(Command::Export { format }) => {
            let mut writer = BufWriter::new(stdout.lock());
            match format {
                OutputFormat::Json => json::contacts_to_json(&mut writer, registry.contacts())?,
                OutputFormat::Vcard => vcard::contacts_to_vcard(&mut writer, registry.contacts())?,
            }
            writer.flush().context("Failed to write export")?;
        }
    }

    Ok(())
}
