//! Page de recherche: un lien par fiche de métier.

use lazy_static::lazy_static;
use regex::Regex;
use scraper::{Html, Selector};

lazy_static! {
    static ref ANCHOR: Selector = Selector::parse("a[href]").expect("sélecteur ancre");
    static ref JOB_HREF: Regex =
        Regex::new(r"^index\.asp\?.*id=(\d+)").expect("regex lien de fiche");
}

/// Identifiants de métiers portés par les ancres de la page de
/// résultats, dans l'ordre du document. L'ordre n'a pas de sens métier
/// mais il est restitué tel quel: ni déduplication ni tri.
pub fn parse_job_ids(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut ids = Vec::new();

    for anchor in document.select(&ANCHOR) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        if let Some(caps) = JOB_HREF.captures(href) {
            ids.push(caps[1].to_string());
        }
    }

    ids
}
