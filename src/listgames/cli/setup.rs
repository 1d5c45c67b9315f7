use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "listgames", bin_name = "listgames", version)]
#[command(about = "Keep track of the video games in your collection", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Every field a game can carry. Shared by `add` and `edit`.
#[derive(clap::Args, Debug, Default, Clone)]
pub struct GameFields {
    /// Game title
    #[arg(short, long)]
    pub name: Option<String>,

    /// Console or platform
    #[arg(short, long)]
    pub platform: Option<String>,

    /// Condition of the copy (Ótima, Boa, Ruim, or free text)
    #[arg(short, long)]
    pub condition: Option<String>,

    /// Purchase date (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: Option<String>,

    /// Price paid
    #[arg(long, allow_hyphen_values = true)]
    pub price: Option<String>,

    /// Photo URL
    #[arg(long)]
    pub photo1: Option<String>,

    /// Photo URL
    #[arg(long)]
    pub photo2: Option<String>,

    /// Photo URL
    #[arg(long)]
    pub photo3: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register a new game
    #[command(alias = "a")]
    Add {
        #[command(flatten)]
        fields: GameFields,

        /// The manual (encarte) is included
        #[arg(long)]
        manual: bool,

        /// The box is included
        #[arg(long = "box")]
        has_box: bool,
    },

    /// List games
    #[command(alias = "ls")]
    List {
        /// Only games whose name or platform contains this text
        #[arg(short, long)]
        search: Option<String>,

        /// Sort by id or registered
        #[arg(long)]
        sort: Option<String>,

        /// Reverse the sort direction
        #[arg(long)]
        desc: bool,
    },

    /// Show every field of a game
    View {
        /// Game id or unique id prefix
        id: String,
    },

    /// Change fields of a game; fields not given keep their value
    Edit {
        /// Game id or unique id prefix
        id: String,

        #[command(flatten)]
        fields: GameFields,

        /// Whether the manual is included
        #[arg(long)]
        manual: Option<bool>,

        /// Whether the box is included
        #[arg(long = "box")]
        has_box: Option<bool>,
    },

    /// Delete games
    #[command(alias = "rm")]
    Delete {
        /// Game ids or unique id prefixes
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,

        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Write the collection to a JSON file
    Export {
        /// Output file (default: the configured export file name)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Replace the collection with the games in a JSON file
    Import {
        path: PathBuf,
    },

    /// Show or change the theme
    Theme {
        /// light, dark or toggle
        value: Option<String>,
    },

    /// Show or change the Google Sheets link
    SheetLink {
        url: Option<String>,

        /// Remove the stored link
        #[arg(long, conflicts_with = "url")]
        clear: bool,
    },

    /// Push the collection to the Google Sheets link
    Sync,

    /// Get or set configuration
    Config {
        key: Option<String>,
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_add_flags() {
        let cli = Cli::try_parse_from([
            "listgames", "add", "-n", "Zelda", "-p", "Switch", "-c", "boa", "-d", "2020-01-01",
            "--price", "59.9", "--box",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Add {
                fields,
                manual,
                has_box,
            }) => {
                assert_eq!(fields.name.as_deref(), Some("Zelda"));
                assert_eq!(fields.price.as_deref(), Some("59.9"));
                assert!(!manual);
                assert!(has_box);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn parses_aliases() {
        let cli = Cli::try_parse_from(["listgames", "ls", "--desc"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::List { desc: true, .. })));

        let cli = Cli::try_parse_from(["listgames", "rm", "abc", "def", "-y"]).unwrap();
        match cli.command {
            Some(Commands::Delete { ids, yes }) => {
                assert_eq!(ids, vec!["abc", "def"]);
                assert!(yes);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn edit_takes_explicit_booleans() {
        let cli =
            Cli::try_parse_from(["listgames", "edit", "abc", "--manual", "false"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Edit {
                manual: Some(false),
                has_box: None,
                ..
            })
        ));
    }

    #[test]
    fn sheet_link_clear_conflicts_with_url() {
        assert!(Cli::try_parse_from(["listgames", "sheet-link", "x", "--clear"]).is_err());
    }
}
