//! Nettoyage du texte extrait des pages.
//!
//! Les cellules du site terminent souvent par des artefacts de mise en
//! page (tabulations, retours à la ligne). On garde le plus long
//! préfixe sans ces caractères.

/// Tronque `raw` à la première tabulation ou fin de ligne.
pub fn clean_text(raw: &str) -> &str {
    match raw.find(['\t', '\r', '\n']) {
        Some(pos) => &raw[..pos],
        None => raw,
    }
}
