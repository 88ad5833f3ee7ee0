use crate::api;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;

/// Run the HTTP API server until killed.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Serve { addr } = cmd {
        api::serve(cfg.clone(), addr.clone())?;
    }
    Ok(())
}
