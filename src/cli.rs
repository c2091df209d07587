use clap::Parser;
use std::path::PathBuf;

use crate::explore::ExploreOptions;

#[derive(Parser, Debug)]
#[command(name = "dirtree")]
#[command(about = "Write a directory tree's representation in a text file", long_about = None)]
pub struct Cli {
    /// Path to the directory tree structure's root
    #[arg(short = 'd', long = "directory")]
    pub directory: PathBuf,

    /// Only include files whose name contains this text (case-insensitive)
    #[arg(short = 'c', long = "contains")]
    pub contains: Option<String>,

    /// Exclude directories that contain no included file
    #[arg(short = 'e', long = "exclude-empty")]
    pub exclude_empty: bool,

    /// Text file (or directory) that will receive the tree;
    /// defaults to "<directory name> file tree.txt" next to the directory
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
}

impl Cli {
    pub fn explore_options(&self) -> ExploreOptions {
        ExploreOptions {
            exclude_empty_dirs: self.exclude_empty,
            name_contains: self.contains.clone(),
        }
    }
}
