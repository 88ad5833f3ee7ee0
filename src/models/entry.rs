use crate::errors::{AppError, AppResult};
use crate::store::schema;
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// One cutting operation, immutable once appended to the table.
/// Field order mirrors the canonical column order exactly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    pub date: NaiveDate,      // ⇔ Date (TEXT "YYYY-MM-DD")
    pub client: String,       // ⇔ Client
    pub order_no: String,     // ⇔ N_Commande
    pub fabric: String,       // ⇔ Tissu
    pub roll_code: String,    // ⇔ Code_Rouleau
    pub length_m: f64,        // ⇔ Longueur_Matelas (meters)
    pub plies: u32,           // ⇔ Nombre_Plis
    pub start: NaiveTime,     // ⇔ Heure_Debut (TEXT "HH:MM")
    pub end: NaiveTime,       // ⇔ Heure_Fin (TEXT "HH:MM")
    pub duration_min: i64,    // ⇔ Duree_Minutes (derived, always >= 0)
    pub operator: String,     // ⇔ Nom_Operateur
    pub matricule: String,    // ⇔ Matricule
}

impl Entry {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn start_str(&self) -> String {
        self.start.format("%H:%M").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end.format("%H:%M").to_string()
    }

    /// Serialize positionally against the canonical schema.
    pub fn to_record(&self) -> Vec<String> {
        vec![
            self.date_str(),
            self.client.clone(),
            self.order_no.clone(),
            self.fabric.clone(),
            self.roll_code.clone(),
            self.length_m.to_string(),
            self.plies.to_string(),
            self.start_str(),
            self.end_str(),
            self.duration_min.to_string(),
            self.operator.clone(),
            self.matricule.clone(),
        ]
    }

    /// Deserialize one stored row. Fails on malformed date/time/number
    /// fields; the field count is guaranteed by the schema check upstream.
    pub fn from_record(record: &csv::StringRecord) -> AppResult<Self> {
        let field = |i: usize| record.get(i).unwrap_or("").to_string();

        let date_str = field(0);
        let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
            .map_err(|_| AppError::InvalidDate(date_str.clone()))?;

        let length_str = field(5);
        let length_m: f64 = length_str
            .parse()
            .map_err(|_| AppError::InvalidLength(length_str.clone()))?;

        let plies_str = field(6);
        let plies: u32 = plies_str
            .parse()
            .map_err(|_| AppError::InvalidPlies(plies_str.clone()))?;

        let start_str = field(7);
        let start = NaiveTime::parse_from_str(&start_str, "%H:%M")
            .map_err(|_| AppError::InvalidTime(start_str.clone()))?;

        let end_str = field(8);
        let end = NaiveTime::parse_from_str(&end_str, "%H:%M")
            .map_err(|_| AppError::InvalidTime(end_str.clone()))?;

        let dur_str = field(9);
        let duration_min: i64 = dur_str
            .parse()
            .map_err(|_| AppError::Other(format!("invalid duration value: {dur_str}")))?;

        Ok(Entry {
            date,
            client: field(1),
            order_no: field(2),
            fabric: field(3),
            roll_code: field(4),
            length_m,
            plies,
            start,
            end,
            duration_min,
            operator: field(10),
            matricule: field(11),
        })
    }

    /// Sanity check against the declared column count.
    pub fn field_count() -> usize {
        schema::CANONICAL_SCHEMA.len()
    }
}
