use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pagecut")]
#[command(about = "PDF page selection and document utilities with MCP server support")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run as MCP server (primary mode)
    Mcp,

    /// Display PDF page count and metadata
    Info {
        /// PDF file to inspect
        path: PathBuf,
    },

    /// Show what a page selection would keep, without writing anything
    Preview {
        /// PDF file to inspect
        path: PathBuf,

        /// Page selection (e.g., "2, 4-6, 9"; 1-based, invalid tokens ignored)
        pages: String,

        /// Keep only the selected pages instead of removing them
        #[arg(long)]
        keep: bool,
    },

    /// Remove the selected pages (or everything but them) into a new PDF
    #[command(alias = "rm")]
    Remove {
        /// PDF file to edit
        path: PathBuf,

        /// Page selection (e.g., "2, 4-6, 9"; 1-based, invalid tokens ignored)
        pages: String,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,

        /// Keep only the selected pages instead of removing them
        #[arg(long)]
        keep: bool,
    },

    /// Combine multiple PDFs into one
    Merge {
        /// PDF files to merge, in order
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,

        /// Sort inputs by file name before merging
        #[arg(long)]
        sort: bool,
    },

    /// Recompress a PDF's streams
    Compress {
        /// PDF file to recompress
        path: PathBuf,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,
    },
}
