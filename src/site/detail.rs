//! Fiche d'un métier: titre, puis un bloc `<thead>`/`<tbody>` par
//! compétence. Le `<thead>` porte "<code> - <nom>"; le `<tbody>` doit
//! contenir deux listes, les critères d'évaluation puis les tâches.

use lazy_static::lazy_static;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::error::{RepertoireError, Result};
use crate::model::{Job, Skill};
use crate::normalizer::clean_text;

lazy_static! {
    static ref H2: Selector = Selector::parse("h2").expect("sélecteur h2");
    static ref THEAD: Selector = Selector::parse("thead").expect("sélecteur thead");
    static ref TH: Selector = Selector::parse("th").expect("sélecteur th");
    static ref UL: Selector = Selector::parse("ul").expect("sélecteur ul");
    static ref LI: Selector = Selector::parse("li").expect("sélecteur li");
    static ref SKILL_TITLE: Regex =
        Regex::new(r"(\d+) - ([^\t\r\n]*)").expect("regex titre de compétence");
}

/// Analyse la fiche complète. L'ordre du document est conservé pour
/// les compétences comme pour leurs critères et tâches.
pub fn parse_job_page(html: &str) -> Result<Job> {
    let document = Html::parse_document(html);

    let heading = document
        .select(&H2)
        .next()
        .ok_or_else(|| RepertoireError::Parse("fiche sans titre".into()))?;
    let (code, name) = split_heading(heading)?;
    let mut job = Job::new(code, name);

    for header in document.select(&THEAD) {
        job.push_skill(parse_skill_block(header)?);
    }

    Ok(job)
}

/// Le titre contient le code et le nom du métier dans deux fragments
/// de texte distincts; tout autre découpage est une erreur de
/// structure.
fn split_heading(heading: ElementRef<'_>) -> Result<(String, String)> {
    let parts: Vec<&str> = heading
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect();

    match parts.as_slice() {
        [code, name] => Ok((code.to_string(), name.to_string())),
        _ => Err(RepertoireError::Parse(format!(
            "titre de fiche en {} fragment(s), 2 attendus",
            parts.len()
        ))),
    }
}

fn parse_skill_block(header: ElementRef<'_>) -> Result<Skill> {
    let title: String = header
        .select(&TH)
        .next()
        .map(|th| th.text().collect())
        .unwrap_or_default();
    let caps = SKILL_TITLE.captures(&title).ok_or_else(|| {
        RepertoireError::Parse(format!("titre de compétence inattendu: {title:?}"))
    })?;
    let code = caps[1].to_string();
    let name = caps[2].to_string();

    let body = header
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "tbody")
        .ok_or_else(|| {
            RepertoireError::Parse(format!("compétence {code} sans corps de tableau"))
        })?;

    let lists: Vec<ElementRef<'_>> = body.select(&UL).collect();
    if lists.len() < 2 {
        return Err(RepertoireError::Parse(format!(
            "compétence {code}: {} liste(s), 2 attendues (critères puis tâches)",
            lists.len()
        )));
    }

    Ok(Skill {
        code,
        name,
        criteria: list_items(lists[0]),
        tasks: list_items(lists[1]),
        risks: None,
    })
}

fn list_items(list: ElementRef<'_>) -> Vec<String> {
    list.select(&LI)
        .map(|li| {
            let text: String = li.text().collect();
            clean_text(&text).to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
        <h2><span>3456</span><span>Soudeur-monteur</span></h2>
        <table>
            <thead><tr><th>1 - Préparer les pièces</th></tr></thead>
            <tbody><tr><td>
                <ul><li>Lire le plan	</li><li>Mesurer</li></ul>
                <ul><li>Tracer les coupes
</li></ul>
            </td></tr></tbody>
        </table>
        <table>
            <thead><tr><th>2 - Assembler</th></tr></thead>
            <tbody><tr><td>
                <ul><li>Pointer</li></ul>
                <ul><li>Souder</li><li>Meuler</li></ul>
            </td></tr></tbody>
        </table>
        </body></html>"#;

    #[test]
    fn parses_job_with_ordered_skills() {
        let job = parse_job_page(PAGE).unwrap();
        assert_eq!(job.code, "3456");
        assert_eq!(job.name, "Soudeur-monteur");
        assert_eq!(job.skills.len(), 2);

        let first = &job.skills[0];
        assert_eq!(first.code, "1");
        assert_eq!(first.name, "Préparer les pièces");
        // clean_text tronque à la première tabulation / fin de ligne.
        assert_eq!(first.criteria, vec!["Lire le plan", "Mesurer"]);
        assert_eq!(first.tasks, vec!["Tracer les coupes"]);

        let second = &job.skills[1];
        assert_eq!(second.code, "2");
        assert_eq!(second.tasks, vec!["Souder", "Meuler"]);
    }

    #[test]
    fn heading_with_one_fragment_fails() {
        let page = "<h2>3456 Soudeur</h2>";
        let err = parse_job_page(page).unwrap_err();
        assert!(matches!(err, RepertoireError::Parse(_)));
    }

    #[test]
    fn heading_with_three_fragments_fails() {
        let page = "<h2><span>3456</span> - <span>Soudeur</span> - <span>extra</span></h2>";
        assert!(parse_job_page(page).is_err());
    }

    #[test]
    fn missing_heading_fails() {
        assert!(parse_job_page("<html><body></body></html>").is_err());
    }

    #[test]
    fn skill_title_without_pattern_fails() {
        let page = r#"
            <h2><span>1</span><span>Métier</span></h2>
            <table><thead><tr><th>Sans numéro</th></tr></thead>
            <tbody><ul></ul><ul></ul></tbody></table>"#;
        assert!(parse_job_page(page).is_err());
    }

    #[test]
    fn single_list_fails() {
        let page = r#"
            <h2><span>1</span><span>Métier</span></h2>
            <table><thead><tr><th>1 - Compétence</th></tr></thead>
            <tbody><tr><td><ul><li>seul</li></ul></td></tr></tbody></table>"#;
        let err = parse_job_page(page).unwrap_err();
        assert!(matches!(err, RepertoireError::Parse(_)));
    }
}
