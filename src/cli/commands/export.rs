use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::RecordStore;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        client,
        force,
    } = cmd
    {
        let store = RecordStore::new(&cfg.data_file);
        ExportLogic::export(&store, format.clone(), file, range, client, *force)?;
    }
    Ok(())
}
