use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepertoireError {
    #[error("Classeur Excel illisible ({label}): {details}")]
    SpreadsheetUnavailable { label: String, details: String },

    #[error("Colonne clé absente du classeur {label}: {column}")]
    SpreadsheetMissingKeyColumn { label: String, column: String },

    #[error("Erreur réseau: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Page inattendue: {0}")]
    Parse(String),

    #[error("Écriture du fichier de sortie impossible: {0}")]
    OutputUnavailable(String),

    #[error("Erreur JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl RepertoireError {
    /// True when a source could not be opened or fetched at all, as
    /// opposed to content that was retrieved but did not parse.
    pub fn is_source_unavailable(&self) -> bool {
        matches!(
            self,
            RepertoireError::SpreadsheetUnavailable { .. }
                | RepertoireError::SpreadsheetMissingKeyColumn { .. }
                | RepertoireError::Http(_)
                | RepertoireError::OutputUnavailable(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, RepertoireError>;
