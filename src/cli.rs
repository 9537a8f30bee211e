use clap::{ArgAction, Parser};
use dyn_inventory::application::dto::InventoryRequest;
use dyn_inventory::config::CliOverrides;
use std::path::PathBuf;

/// Serve a static inventory through the dynamic inventory script protocol
#[derive(Parser, Debug)]
#[command(name = "dyn-inventory")]
#[command(version)]
#[command(
    about = "Serve a static host/group inventory through the --list/--host inventory script protocol",
    long_about = None
)]
pub struct Args {
    /// Print the full inventory (all groups plus _meta.hostvars)
    #[arg(long)]
    pub list: bool,

    /// Print the variables of a single host
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Inventory file (JSON, YAML or TOML, chosen by extension)
    #[arg(short, long, value_name = "PATH", env = "DYN_INVENTORY_SOURCE")]
    pub inventory: Option<PathBuf>,

    /// Config file (defaults to ./dyn-inventory.config.yml when present)
    #[arg(short, long, value_name = "PATH", env = "DYN_INVENTORY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Exclude hosts matching patterns (supports wildcards: *)
    /// Can be specified multiple times: -e "10.0.0.*" -e "*.rds.amazonaws.com"
    #[arg(short, long = "exclude", value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// JSON indent width
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(0..=16))]
    pub indent: Option<u8>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Parses the process arguments, leaving the exit decision to the caller
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    pub fn request(&self) -> InventoryRequest {
        InventoryRequest::from_flags(self.list, self.host.as_deref())
    }

    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            inventory: self.inventory.clone(),
            indent: self.indent.map(usize::from),
            exclude_hosts: self.exclude.clone(),
        }
    }
}
