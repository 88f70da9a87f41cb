//! Lecture des classeurs d'annotations (SST et Stage).
//!
//! Un classeur est chargé une fois en mémoire: ligne d'en-têtes puis
//! lignes de données. Les recherches se font par clé composite
//! (secteur, métier[, compétence]) comparée en entier après coercition,
//! puis par égalité stricte de la cellule avec le marqueur affirmatif
//! de la couche.

use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

use crate::config::{
    AnnotationLayer, KeyShape, EXCEL_JOB_HEADER, EXCEL_SECTOR_HEADER, EXCEL_SKILL_HEADER,
};
use crate::error::{RepertoireError, Result};

/// Un classeur chargé, prêt pour les recherches d'une couche donnée.
#[derive(Debug)]
pub struct AnnotationIndex {
    layer: AnnotationLayer,
    headers: Vec<String>,
    rows: Vec<Vec<Data>>,
    sector_col: usize,
    job_col: usize,
    skill_col: Option<usize>,
}

impl AnnotationIndex {
    /// Charge la première feuille du classeur `path`. `label` nomme la
    /// source dans les messages d'erreur ("SST", "Stage").
    pub fn open(path: &Path, label: &str, layer: AnnotationLayer) -> Result<Self> {
        let unavailable = |details: String| RepertoireError::SpreadsheetUnavailable {
            label: label.to_string(),
            details,
        };

        let mut workbook = open_workbook_auto(path).map_err(|e| unavailable(e.to_string()))?;
        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| unavailable("aucune feuille".into()))?;
        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| unavailable(e.to_string()))?;

        let mut rows_iter = range.rows();
        let headers: Vec<String> = rows_iter
            .next()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .unwrap_or_default();
        let rows: Vec<Vec<Data>> = rows_iter.map(|row| row.to_vec()).collect();

        let find_key = |header: &str| -> Result<usize> {
            headers.iter().position(|h| h == header).ok_or_else(|| {
                RepertoireError::SpreadsheetMissingKeyColumn {
                    label: label.to_string(),
                    column: header.to_string(),
                }
            })
        };

        let sector_col = find_key(EXCEL_SECTOR_HEADER)?;
        let job_col = find_key(EXCEL_JOB_HEADER)?;
        let skill_col = match layer.key {
            KeyShape::SectorJobSkill => Some(find_key(EXCEL_SKILL_HEADER)?),
            KeyShape::SectorJob => None,
        };

        Ok(Self {
            layer,
            headers,
            rows,
            sector_col,
            job_col,
            skill_col,
        })
    }

    pub fn layer(&self) -> &AnnotationLayer {
        &self.layer
    }

    /// Noms d'annotations applicables pour la clé donnée, dans l'ordre
    /// de la table de colonnes. `None` quand aucune ligne ne porte la
    /// clé (le champ sera omis à l'export, pas émis vide); jamais une
    /// erreur. Colonne d'annotation absente: sautée.
    pub fn lookup(&self, sector: &str, job: &str, skill: Option<&str>) -> Option<Vec<String>> {
        let (Some(sector), Some(job)) = (coerce_key(sector), coerce_key(job)) else {
            return None;
        };
        let skill = match (self.skill_col, skill) {
            (Some(_), Some(code)) => match coerce_key(code) {
                Some(v) => Some(v),
                None => return None,
            },
            (Some(_), None) | (None, _) => None,
        };

        // Première ligne dont la clé composite correspond.
        let row = self.rows.iter().find(|row| {
            cell_as_i64(row.get(self.sector_col)) == Some(sector)
                && cell_as_i64(row.get(self.job_col)) == Some(job)
                && match (self.skill_col, skill) {
                    (Some(col), Some(want)) => cell_as_i64(row.get(col)) == Some(want),
                    (Some(_), None) => false,
                    (None, _) => true,
                }
        });
        let row = row?;

        let mut result = Vec::new();
        for (name, header) in self.layer.columns {
            let Some(col) = self.headers.iter().position(|h| h == header) else {
                continue;
            };
            if let Some(Data::String(cell)) = row.get(col) {
                if cell == self.layer.marker {
                    result.push((*name).to_string());
                }
            }
        }
        Some(result)
    }
}

/// Coercition entière d'un code extrait du site ("012" vaut 12).
fn coerce_key(code: &str) -> Option<i64> {
    code.trim().parse::<i64>().ok()
}

/// Coercition entière d'une cellule clé. Les flottants entiers (Excel
/// stocke souvent 12 comme 12.0) et le texte numérique comptent; tout
/// le reste ne correspond à rien.
fn cell_as_i64(cell: Option<&Data>) -> Option<i64> {
    match cell? {
        Data::Int(i) => Some(*i),
        Data::Float(f) if f.fract() == 0.0 => Some(*f as i64),
        Data::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}
