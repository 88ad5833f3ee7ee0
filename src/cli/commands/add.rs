use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::{AddLogic, NewEntryInput};
use crate::errors::{AppError, AppResult};
use crate::utils::date;
use crate::utils::time::parse_required_time;

/// Record one cutting operation.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        client,
        order_no,
        fabric,
        roll_code,
        length_m,
        plies,
        start,
        end,
    } = cmd
    {
        // Everything is validated here; the duration math and the store
        // only ever see well-formed values.
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
        let start_t = parse_required_time(start)?;
        let end_t = parse_required_time(end)?;

        AddLogic::apply(
            cfg,
            NewEntryInput {
                date: d,
                client: client.clone(),
                order_no: order_no.clone(),
                fabric: fabric.clone(),
                roll_code: roll_code.clone(),
                length_m: *length_m,
                plies: *plies,
                start: start_t,
                end: end_t,
            },
        )?;
    }

    Ok(())
}
