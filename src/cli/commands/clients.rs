use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::clients::ClientList;
use crate::ui::messages::{info, success};

/// Print or grow the known-client list.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clients { add } = cmd {
        let mut clients = ClientList::load(&cfg.clients_file)?;

        if let Some(name) = add {
            if clients.add(name)? {
                success(format!("Client added: {}", name));
            } else {
                info(format!("Client already known: {}", name));
            }
            return Ok(());
        }

        println!("Known clients:");
        for name in clients.names() {
            println!("- {}", name);
        }
    }
    Ok(())
}
