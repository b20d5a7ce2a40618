//! Command dispatch logic extracted from binary to reduce main function size.

use super::args::{Commands, GlobalArgs};
use super::handlers::{self, Context};
use crate::exit::StoreExit;
use anyhow::Result;

/// Executes the parsed command.
///
/// # Errors
/// Returns error if loading or the command handler fails.
pub fn execute(global: &GlobalArgs, command: Commands) -> Result<StoreExit> {
    let ctx = Context::from_args(global)?;

    match command {
        Commands::TopClients { limit } => handlers::handle_top_clients(&ctx, limit),
        Commands::TopProducts { limit } => handlers::handle_top_products(&ctx, limit),
        Commands::Sales => handlers::handle_sales(&ctx),
        Commands::Graph { hubs } => handlers::handle_graph(&ctx, hubs),
        Commands::Report { limit } => handlers::handle_report(&ctx, limit),
        Commands::Validate => handlers::handle_validate(&ctx),
        Commands::Export { out, format } => handlers::handle_export(&ctx, &out, format),
        Commands::AddOrder {
            client,
            products,
            date,
            id,
        } => handlers::handle_add_order(&ctx, id, client, products, &date),
    }
}
