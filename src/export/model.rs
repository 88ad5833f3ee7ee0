use crate::models::entry::Entry;
use crate::store::schema::CANONICAL_SCHEMA;
use serde::Serialize;

/// Flat view of an entry for export and for the HTTP read surface.
/// Serialized field names are the canonical column names, with the
/// date as ISO `YYYY-MM-DD` and times as `HH:MM` strings.
#[derive(Serialize, Clone, Debug)]
pub struct EntryExport {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Client")]
    pub client: String,
    #[serde(rename = "N_Commande")]
    pub order_no: String,
    #[serde(rename = "Tissu")]
    pub fabric: String,
    #[serde(rename = "Code_Rouleau")]
    pub roll_code: String,
    #[serde(rename = "Longueur_Matelas")]
    pub length_m: f64,
    #[serde(rename = "Nombre_Plis")]
    pub plies: u32,
    #[serde(rename = "Heure_Debut")]
    pub start: String,
    #[serde(rename = "Heure_Fin")]
    pub end: String,
    #[serde(rename = "Duree_Minutes")]
    pub duration_min: i64,
    #[serde(rename = "Nom_Operateur")]
    pub operator: String,
    #[serde(rename = "Matricule")]
    pub matricule: String,
}

impl EntryExport {
    pub fn from_entry(e: &Entry) -> Self {
        Self {
            date: e.date_str(),
            client: e.client.clone(),
            order_no: e.order_no.clone(),
            fabric: e.fabric.clone(),
            roll_code: e.roll_code.clone(),
            length_m: e.length_m,
            plies: e.plies,
            start: e.start_str(),
            end: e.end_str(),
            duration_min: e.duration_min,
            operator: e.operator.clone(),
            matricule: e.matricule.clone(),
        }
    }

    /// Blank out the credential-adjacent column for supervisor reads.
    pub fn redacted(mut self) -> Self {
        self.matricule = String::new();
        self
    }
}

/// Header row for XLSX (CSV and JSON take names from serde).
pub(crate) fn get_headers() -> Vec<&'static str> {
    CANONICAL_SCHEMA.to_vec()
}

/// One entry as a row of display strings (XLSX path).
pub(crate) fn entry_to_row(e: &EntryExport) -> Vec<String> {
    vec![
        e.date.clone(),
        e.client.clone(),
        e.order_no.clone(),
        e.fabric.clone(),
        e.roll_code.clone(),
        e.length_m.to_string(),
        e.plies.to_string(),
        e.start.clone(),
        e.end.clone(),
        e.duration_min.to_string(),
        e.operator.clone(),
        e.matricule.clone(),
    ]
}
