use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::snapshot::SnapshotFormat;
use crate::types::{ClientId, OrderId, ProductId};

#[derive(Parser, Debug)]
#[command(name = "storelens", version, about = "Storefront analytics over a JSON or CSV snapshot")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Snapshot directory holding the clients, products and orders files
    #[arg(long, short, value_name = "DIR", global = true)]
    pub data: Option<PathBuf>,
    /// Layout of the snapshot directory (defaults to config, else json)
    #[arg(long, value_enum, value_name = "FORMAT", global = true)]
    pub data_format: Option<SnapshotFormat>,
    /// Config file (defaults to ./storelens.toml)
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,
    /// Fail on orders that reference unknown clients or products
    #[arg(long, global = true)]
    pub strict: bool,
    /// Emit JSON instead of formatted text
    #[arg(long, global = true)]
    pub json: bool,
    /// Debug-level diagnostics on stderr
    #[arg(long, short, global = true, conflicts_with = "quiet")]
    pub verbose: bool,
    /// Errors only on stderr
    #[arg(long, short, global = true)]
    pub quiet: bool,
    #[arg(long, global = true)]
    pub no_color: bool,
    /// Skip field validation while loading
    #[arg(long, global = true)]
    pub no_validate: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Clients ranked by number of orders
    TopClients {
        #[arg(long, short = 'n', value_name = "N")]
        limit: Option<usize>,
    },
    /// Products ranked by units sold
    TopProducts {
        #[arg(long, short = 'n', value_name = "N")]
        limit: Option<usize>,
    },
    /// Revenue summed per order date
    Sales,
    /// Clients linked by shared purchases
    Graph {
        /// Also list clients with at least this many links
        #[arg(long, value_name = "MIN")]
        hubs: Option<usize>,
    },
    /// All analytics at once
    Report {
        #[arg(long, short = 'n', value_name = "N")]
        limit: Option<usize>,
    },
    /// Check record fields and order references
    Validate,
    /// Write the loaded snapshot to another directory
    Export {
        #[arg(long, short, value_name = "DIR")]
        out: PathBuf,
        /// Output layout (defaults to the input layout)
        #[arg(long, short, value_enum, value_name = "FORMAT")]
        format: Option<SnapshotFormat>,
    },
    /// Append an order priced from the product catalog
    AddOrder {
        #[arg(long, value_name = "ID")]
        client: ClientId,
        /// Product id, repeat once per unit
        #[arg(long = "product", short = 'p', value_name = "ID")]
        products: Vec<ProductId>,
        #[arg(long, value_name = "DATE")]
        date: String,
        /// Order id (defaults to one past the highest)
        #[arg(long, value_name = "ID")]
        id: Option<OrderId>,
    },
}
