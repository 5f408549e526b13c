// src/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::constants::DEFAULT_HOST;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// ComfyUI host serving the metadata endpoint
    #[arg(long, value_name = "URL", default_value = DEFAULT_HOST, global = true)]
    pub host: String,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute (show, metadata, or lookup)
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show the info dialog for a model
    Show {
        /// Model folder type (loras, checkpoints, ...)
        #[arg(value_name = "TYPE")]
        kind: String,

        /// Model file name within the folder
        #[arg(value_name = "NAME")]
        name: String,

        /// Render the dialog as an HTML page and open it in the browser
        #[arg(long)]
        open: bool,

        /// Skip the Civitai enrichment lookup
        #[arg(long)]
        no_lookup: bool,
    },

    /// Print the raw metadata record for a model
    Metadata {
        /// Model folder type (loras, checkpoints, ...)
        #[arg(value_name = "TYPE")]
        kind: String,

        /// Model file name within the folder
        #[arg(value_name = "NAME")]
        name: String,

        /// Output the record as JSON instead of label/value rows
        #[arg(long)]
        json: bool,
    },

    /// Look up a model version on Civitai by content hash
    Lookup {
        /// SHA-256 content hash
        #[arg(value_name = "HASH", required_unless_present = "file", conflicts_with = "file")]
        hash: Option<String>,

        /// Hash this model file and look the result up
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,
    },
}
