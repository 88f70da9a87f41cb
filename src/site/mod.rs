//! Accès au site du répertoire des métiers.
//!
//! Trois pages, toutes servies par le même `index.asp`: l'index des
//! secteurs (cases à cocher), la recherche filtrée par secteur
//! (liens vers les fiches) et la fiche d'un métier. La récupération
//! est séparée de l'analyse: chaque sous-module expose une fonction
//! `parse_*` pure sur le HTML, testable sans réseau.

mod detail;
mod jobs;
mod sectors;

pub use detail::parse_job_page;
pub use jobs::parse_job_ids;
pub use sectors::parse_sectors;

use crate::error::Result;
use crate::model::{Job, Sector};

/// Client HTTP bloquant pointé sur la page d'index du site. L'URL de
/// base est paramétrable (les tests la font pointer sur un serveur
/// local).
pub struct SiteClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl SiteClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder().build()?;
        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    fn fetch(&self, query: &[(&str, &str)]) -> Result<String> {
        let response = self
            .client
            .get(&self.base_url)
            .query(query)
            .send()?
            .error_for_status()?;
        Ok(response.text()?)
    }

    /// Secteurs de la page d'index, dans l'ordre du document.
    pub fn list_sectors(&self) -> Result<Vec<Sector>> {
        let html = self.fetch(&[])?;
        parse_sectors(&html)
    }

    /// Identifiants des métiers d'un secteur, dans l'ordre du document,
    /// sans déduplication ni tri.
    pub fn list_job_ids(&self, url_key: &str, value_key: &str) -> Result<Vec<String>> {
        let html = self.fetch(&[
            ("page", "recherche"),
            ("action", "search"),
            ("navSeq", "1"),
            (url_key, value_key),
        ])?;
        Ok(parse_job_ids(&html))
    }

    /// Fiche complète d'un métier.
    pub fn fetch_job(&self, id: &str) -> Result<Job> {
        let html = self.fetch(&[("page", "fiche"), ("id", id)])?;
        parse_job_page(&html)
    }
}
