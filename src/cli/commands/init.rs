use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::store::clients::ClientList;
use crate::ui::messages::success;

/// Handle the `init` command.
///
/// Creates (when missing):
///  - the config directory and file
///  - the cutting table with its canonical header and zero rows
///  - the seeded known-clients file
///
/// Idempotent: an existing table is left exactly as it is.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.table.clone(), cli.test)?;

    println!("⚙️  Initializing cutlog…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Data file   : {}", &cfg.data_file);

    let store = RecordStore::new(&cfg.data_file);
    store.initialize()?;

    let clients = ClientList::load(&cfg.clients_file)?;
    if !clients.path().exists() {
        clients.save()?;
    }
    println!("👥 Clients file: {}", &cfg.clients_file);

    success("cutlog initialization completed");
    Ok(())
}
