use clap::builder::PossibleValuesParser;
use clap::{Parser, Subcommand};
use contactz::model::{CATEGORIES, DEFAULT_CATEGORY};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "contactz", bin_name = "contactz", version)]
#[command(about = "A contact book backed by a plain JSON file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding contacts.json (defaults to the current directory)
    #[arg(long, global = true, value_name = "PATH", conflicts_with = "global")]
    pub dir: Option<PathBuf>,

    /// Use the per-user data directory
    #[arg(short, long, global = true)]
    pub global: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    #[command(alias = "a")]
    Add {
        /// Full name
        name: String,

        /// Phone number (must not already exist)
        phone: String,

        /// Email address
        #[arg(short, long, default_value = "")]
        email: String,

        /// Category
        #[arg(
            short,
            long,
            default_value = DEFAULT_CATEGORY,
            value_parser = PossibleValuesParser::new(CATEGORIES)
        )]
        category: String,
    },

    /// List contacts
    #[command(alias = "ls")]
    List {
        /// Only show this category ("All" for every category)
        #[arg(short, long, default_value = "All")]
        category: String,

        /// Match names (any case) or phone numbers
        #[arg(short, long, default_value = "")]
        search: String,
    },

    /// Search contacts by name or phone
    Search {
        term: String,

        /// Only show this category ("All" for every category)
        #[arg(short, long, default_value = "All")]
        category: String,
    },

    /// Edit a contact; fields not given keep their value
    #[command(alias = "e")]
    Edit {
        /// Contact number as shown by `list`
        number: Option<String>,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long, value_parser = PossibleValuesParser::new(CATEGORIES))]
        category: Option<String>,
    },

    /// Delete a contact
    #[command(alias = "rm")]
    Delete {
        /// Contact number as shown by `list`
        number: Option<String>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Export every contact to contacts_export_<count>.csv
    Export,

    /// Show contact counts per category
    Stats,

    /// Show a random contact
    Random,

    /// Get or set configuration
    Config {
        /// Configuration key (id-style, data-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
