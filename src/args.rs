use {
    crate::config::Config,
    anyhow::{bail, Context},
    clap::{Parser, Subcommand},
    std::{env, path::PathBuf, str::FromStr},
};

#[derive(Debug, Parser)]
#[command(name = "contactbook", about = "Keep track of your contacts")]
pub struct Args {
    #[command(subcommand)]
    command: Option<Command>,
    /// Directory containing `contacts.json`
    #[arg(short = 's', long = "store")]
    store_path: Option<PathBuf>,
}

impl Args {
    pub fn command(&self) -> Option<&Command> {
        self.command.as_ref()
    }

    /// Picks the store directory: the `--store` argument, then the config file, then the current
    /// working directory.
    pub fn store_path(&self, config: Option<&Config>) -> anyhow::Result<PathBuf> {
        if let Some(path) = self
            .store_path
            .clone()
            .or_else(|| config.and_then(|config| config.store_path.clone()))
        {
            return Ok(path);
        }
        env::current_dir().context("Could not find contact store")
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage contacts interactively (the default)
    Shell,
    /// Show all contacts
    List,
    /// Show the contacts whose name or email contains the query, ignoring case
    Search { query: String },
    /// Output contacts to STDOUT in the given format (by default vCard)
    Export {
        /// The format of the output (vcard/json)
        #[arg(short = 'f', long = "fmt", default_value = "vcard")]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OutputFormat {
    Json,
    Vcard,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;
    fn from_str(format: &str) -> anyhow::Result<Self> {
        Ok(match format.to_ascii_lowercase().as_str() {
            "json" => OutputFormat::Json,
            "vcard" => OutputFormat::Vcard,
            _ => bail!("Invalid output format"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_is_the_default() {
        let args = Args::try_parse_from(["contactbook"]).unwrap();
        assert!(args.command().is_none());
    }

    #[test]
    fn store_argument_wins_over_config() {
        let args = Args::try_parse_from(["contactbook", "-s", "/tmp/a", "list"]).unwrap();
        let config = Config {
            store_path: Some(PathBuf::from("/tmp/b")),
        };
        assert_eq!(
            args.store_path(Some(&config)).unwrap(),
            PathBuf::from("/tmp/a")
        );
    }

    #[test]
    fn config_wins_over_working_directory() {
        let args = Args::try_parse_from(["contactbook", "list"]).unwrap();
        let config = Config {
            store_path: Some(PathBuf::from("/tmp/b")),
        };
        assert_eq!(
            args.store_path(Some(&config)).unwrap(),
            PathBuf::from("/tmp/b")
        );
        assert_eq!(args.store_path(None).unwrap(), env::current_dir().unwrap());
    }

    #[test]
    fn export_format_is_case_insensitive() {
        let args = Args::try_parse_from(["contactbook", "export", "-f", "JSON"]).unwrap();
        assert!(matches!(
            args.command(),
            Some(Command::Export {
                format: OutputFormat::Json
            })
        ));
        assert!(Args::try_parse_from(["contactbook", "export", "--fmt", "csv"]).is_err());
    }
}
