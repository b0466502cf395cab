use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::logging::DEFAULT_LEVEL;
use crate::storage::DEFAULT_PATH;

#[derive(Parser, Debug)]
#[command(name = "address-book", version, about = "Simple address book")]
pub struct Cli {
    /// Path of the address book file
    #[arg(long, global = true, env = "ADDRESS_BOOK_PATH", default_value = DEFAULT_PATH)]
    pub file: PathBuf,

    /// Storage choice (csv, mem). `mem` reads the file but never writes it
    #[arg(long, global = true, env = "ADDRESS_BOOK_STORAGE", default_value_t = String::from("csv"))]
    pub storage: String,

    /// Log level written to stderr (error, warn, info, debug, trace, off)
    #[arg(long, global = true, env = "ADDRESS_BOOK_LOG", default_value_t = String::from(DEFAULT_LEVEL))]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    Add {
        /// Contact name (no digits)
        #[arg(long)]
        name: String,

        /// Contact phone number (digits only)
        #[arg(long)]
        phone: String,

        /// Contact email address
        #[arg(long)]
        email: String,

        /// Contact job
        #[arg(long)]
        job: String,
    },
    /// List contacts
    List {
        /// Print contacts as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Replace every field of the contact at a row shown by `list`
    Update {
        /// Row number as shown by `list` (starts at 1)
        #[arg(long)]
        index: usize,

        #[arg(long)]
        name: String,

        #[arg(long)]
        phone: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        job: String,
    },
    /// Delete the contact at a row shown by `list`
    Delete {
        /// Row number as shown by `list` (starts at 1)
        #[arg(long)]
        index: usize,
    },
    /// Interactive form over the address book
    Shell,
}

/// Maps a 1-based row number to a store index. Row 0 selects nothing.
pub fn row_to_index(row: usize) -> Option<usize> {
    row.checked_sub(1)
}
