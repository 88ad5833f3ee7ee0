use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::range::parse_range;
use crate::store::RecordStore;
use crate::store::schema::CANONICAL_SCHEMA;
use crate::utils::table::Table;
use crate::utils::time::format_minutes;
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { range, client } = cmd {
        let store = RecordStore::new(&cfg.data_file);
        let entries = store.read_all()?;

        let bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let selected = RecordStore::filter(&entries, |e| {
            let in_range = match bounds {
                None => true,
                Some((start, end)) => e.date >= start && e.date <= end,
            };
            let client_ok = match client {
                None => true,
                Some(c) => &e.client == c,
            };
            in_range && client_ok
        });

        if selected.is_empty() {
            println!("No entries found.");
            return Ok(());
        }

        let mut table = Table::new(CANONICAL_SCHEMA.iter().map(|s| s.to_string()).collect());

        let mut total_minutes: i64 = 0;
        for e in &selected {
            total_minutes += e.duration_min;
            table.add_row(vec![
                e.date_str(),
                e.client.clone(),
                e.order_no.clone(),
                e.fabric.clone(),
                e.roll_code.clone(),
                e.length_m.to_string(),
                e.plies.to_string(),
                e.start_str(),
                e.end_str(),
                e.duration_min.to_string(),
                e.operator.clone(),
                e.matricule.clone(),
            ]);
        }

        print!("{}", table.render());
        println!(
            "\n{} entries | total operation time: {} ({} min)",
            selected.len(),
            format_minutes(total_minutes),
            total_minutes
        );
    }
    Ok(())
}
