//! Canonical column schema of the cutting table.
//! One stable naming scheme, shared by the read and write paths.
//! Legacy files with other headers are a one-time manual import,
//! never reconciled at runtime.

use crate::errors::{AppError, AppResult};

/// Column order is the positional order of `Entry` fields.
pub const CANONICAL_SCHEMA: [&str; 12] = [
    "Date",
    "Client",
    "N_Commande",
    "Tissu",
    "Code_Rouleau",
    "Longueur_Matelas",
    "Nombre_Plis",
    "Heure_Debut",
    "Heure_Fin",
    "Duree_Minutes",
    "Nom_Operateur",
    "Matricule",
];

/// Map free-form header text (spaces, accents, `°`) to an
/// identifier-safe column name, e.g. `"N° Commande"` → `"N_Commande"`,
/// `"Heure Début"` → `"Heure_Debut"`.
pub fn normalize_column_name(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut last_was_sep = true; // trims leading separators

    for c in raw.chars() {
        let mapped: Option<char> = match c {
            'à' | 'â' | 'ä' => Some('a'),
            'é' | 'è' | 'ê' | 'ë' => Some('e'),
            'î' | 'ï' => Some('i'),
            'ô' | 'ö' => Some('o'),
            'ù' | 'û' | 'ü' => Some('u'),
            'ç' => Some('c'),
            'À' | 'Â' | 'Ä' => Some('A'),
            'É' | 'È' | 'Ê' | 'Ë' => Some('E'),
            'Î' | 'Ï' => Some('I'),
            'Ô' | 'Ö' => Some('O'),
            'Ù' | 'Û' | 'Ü' => Some('U'),
            'Ç' => Some('C'),
            '°' => None,
            c if c.is_ascii_alphanumeric() => Some(c),
            _ => {
                if !last_was_sep {
                    out.push('_');
                    last_was_sep = true;
                }
                continue;
            }
        };

        if let Some(m) = mapped {
            out.push(m);
            last_was_sep = false;
        }
    }

    out.trim_end_matches('_').to_string()
}

/// A column name is storage-safe when it is non-empty ASCII
/// alphanumerics and underscores only.
pub fn validate_column_name(name: &str) -> AppResult<()> {
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(AppError::InvalidColumnName(name.to_string()));
    }
    Ok(())
}

/// Compare a stored header against the canonical schema.
/// Any difference is a hard error naming both sides.
pub fn check_header(found: &csv::StringRecord) -> AppResult<()> {
    let found_cols: Vec<&str> = found.iter().collect();
    if found_cols != CANONICAL_SCHEMA {
        return Err(AppError::SchemaMismatch {
            expected: CANONICAL_SCHEMA.join(", "),
            found: found_cols.join(", "),
        });
    }
    Ok(())
}
