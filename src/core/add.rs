//! Submission logic: validate → compute duration → append → report.

use crate::config::Config;
use crate::core::duration::compute_duration_minutes;
use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use crate::store::RecordStore;
use crate::store::clients::ClientList;
use crate::ui::messages::{info, success};
use chrono::{NaiveDate, NaiveTime};

pub struct AddLogic;

pub struct NewEntryInput {
    pub date: NaiveDate,
    pub client: String,
    pub order_no: String,
    pub fabric: String,
    pub roll_code: String,
    pub length_m: f64,
    pub plies: u32,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl AddLogic {
    /// Assemble and persist one entry. No state is written when any
    /// validation fails; the computed duration is echoed on success.
    pub fn apply(cfg: &Config, input: NewEntryInput) -> AppResult<Entry> {
        if input.length_m < 0.0 || !input.length_m.is_finite() {
            return Err(AppError::InvalidLength(input.length_m.to_string()));
        }

        let duration_min = compute_duration_minutes(input.start, input.end);

        let entry = Entry {
            date: input.date,
            client: input.client,
            order_no: input.order_no,
            fabric: input.fabric,
            roll_code: input.roll_code,
            length_m: input.length_m,
            plies: input.plies,
            start: input.start,
            end: input.end,
            duration_min,
            operator: cfg.operator_name.clone(),
            matricule: cfg.matricule.clone(),
        };

        let store = RecordStore::new(&cfg.data_file);
        store.initialize()?;
        store.append(&entry)?;

        // The dropdown list grows with user input, like the source form.
        let mut clients = ClientList::load(&cfg.clients_file)?;
        if clients.add(&entry.client)? {
            info(format!("New client recorded: {}", entry.client));
        }

        success(format!(
            "Entry saved for {} / {} — operation time: {} min",
            entry.date_str(),
            entry.client,
            entry.duration_min
        ));

        Ok(entry)
    }
}
