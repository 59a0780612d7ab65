use formrow_config::FormrowConfig;

use crate::cli::{Commands, GlobalFlags};

pub mod extract;
pub mod input;
pub mod row;
pub mod schema;

/// Route a parsed command to its handler.
pub fn dispatch(command: Commands, config: &FormrowConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Extract(args) => extract::handle(&args, config, flags),
        Commands::Row(args) => row::handle(&args, config, flags),
        Commands::Schema(args) => schema::handle(&args, flags),
    }
}
