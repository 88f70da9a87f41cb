//! Page d'index: un secteur par case à cocher.

use lazy_static::lazy_static;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::error::{RepertoireError, Result};
use crate::model::Sector;

lazy_static! {
    static ref CHECKBOX: Selector =
        Selector::parse(r#"input[type="checkbox"]"#).expect("sélecteur checkbox");
    // "<numéro> - <nom>", le nom sans chiffres.
    static ref SECTOR_NAME: Regex = Regex::new(r"^\d+ - (\D*)$").expect("regex secteur");
}

/// Extrait les secteurs de la page d'index. Chaque case à cocher porte
/// l'identifiant d'URL (`id`), la valeur de recherche (`value`) et,
/// dans le `<label>` qui la suit, le libellé "<numéro> - <nom>". Toute
/// case qui ne suit pas ce gabarit fait échouer l'analyse: l'indexation
/// aval exige la couverture complète des secteurs.
pub fn parse_sectors(html: &str) -> Result<Vec<Sector>> {
    let document = Html::parse_document(html);
    let mut sectors = Vec::new();

    for input in document.select(&CHECKBOX) {
        let url_key = input
            .value()
            .attr("id")
            .ok_or_else(|| RepertoireError::Parse("case à cocher sans attribut id".into()))?;
        let value_key = input
            .value()
            .attr("value")
            .ok_or_else(|| RepertoireError::Parse("case à cocher sans attribut value".into()))?;

        let label = input
            .next_siblings()
            .filter_map(ElementRef::wrap)
            .find(|el| el.value().name() == "label")
            .ok_or_else(|| {
                RepertoireError::Parse(format!("case à cocher {url_key} sans libellé"))
            })?;
        let label_text: String = label.text().collect();
        let label_text = label_text.trim();

        let name = SECTOR_NAME
            .captures(label_text)
            .map(|caps| caps[1].to_string())
            .ok_or_else(|| {
                RepertoireError::Parse(format!("libellé de secteur inattendu: {label_text:?}"))
            })?;

        sectors.push(Sector {
            url_key: url_key.to_string(),
            value_key: value_key.to_string(),
            name,
        });
    }

    Ok(sectors)
}
