use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "slide-lines")]
#[command(about = "Structured line editing for slide outlines", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show each line's attribute, indent level and content
    Outline {
        file: PathBuf,
    },

    /// Re-serialize a file and print the result
    Normalize {
        file: PathBuf,

        /// Exit with an error when the file is not already normalized
        #[arg(long)]
        check: bool,
    },

    /// Replay editing keys against a file and print the result
    Keys {
        file: PathBuf,

        /// enter, bs, del, tab, stab, bold, all, copy, cut, paste, undo, redo,
        /// left, right, up, down, home, end or text:<chars>
        #[arg(required = true, num_args = 1..)]
        keys: Vec<String>,

        /// Print the outline with selection and caret instead of the text
        #[arg(long)]
        outline: bool,

        /// Save the result back to the file
        #[arg(short, long)]
        write: bool,
    },
}
