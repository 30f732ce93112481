use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "reqtree")]
#[command(about = "Browse an API workspace's requests in a filterable tree")]
#[command(version)]
pub struct Cli {
    /// Workspace file to open (.toml or .json). Defaults to the configured workspace.
    #[arg(short, long)]
    pub workspace: Option<PathBuf>,

    /// Config file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
