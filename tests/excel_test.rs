//! Recherches par clé composite dans les classeurs d'annotations.
//!
//! Les classeurs de test sont générés sur place (rust_xlsxwriter) puis
//! relus par le même chemin que la production (calamine).

use repertoire_metiers::config::{sst_layer, stage_layer, AnnotationLayer};
use repertoire_metiers::error::RepertoireError;
use repertoire_metiers::excel::AnnotationIndex;
use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Écrit un classeur d'une feuille: `headers` en première ligne puis
/// `rows`, cellule par cellule. Les nombres sont écrits comme nombres
/// (Excel stocke 12 comme 12.0), tout le reste comme texte.
fn write_workbook(dir: &Path, name: &str, headers: &[&str], rows: &[&[Cell]]) -> PathBuf {
    let path = dir.join(name);
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (col, header) in headers.iter().enumerate() {
        sheet.write_string(0, col as u16, *header).expect("en-tête");
    }
    for (r, row) in rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            match cell {
                Cell::Num(n) => sheet.write_number((r + 1) as u32, c as u16, *n),
                Cell::Text(s) => sheet.write_string((r + 1) as u32, c as u16, *s),
            }
            .expect("cellule");
        }
    }
    workbook.save(&path).expect("sauvegarde du classeur");
    path
}

enum Cell {
    Num(f64),
    Text(&'static str),
}
use Cell::{Num, Text};

fn sst_fixture(dir: &Path) -> PathBuf {
    write_workbook(
        dir,
        "sst.xlsx",
        &[
            "N° secteur",
            "N° métiers",
            "Numéro de compétences",
            "1. Risques Chimiques",
            "11. Risques liés au bruit",
        ],
        &[
            &[Num(12.0), Num(3456.0), Num(1.0), Text("oui"), Text("non")],
            &[Num(12.0), Num(3456.0), Num(2.0), Text("Oui"), Text("oui")],
            &[Num(12.0), Num(3456.0), Num(3.0), Text(""), Text("")],
            // Doublon de clé: seule la première ligne compte.
            &[Num(12.0), Num(3456.0), Num(1.0), Text("non"), Text("oui")],
        ],
    )
}

fn open_sst(dir: &Path) -> AnnotationIndex {
    let path = sst_fixture(dir);
    AnnotationIndex::open(&path, "SST", sst_layer()).expect("ouverture SST")
}

#[test]
fn exact_marker_match_is_case_sensitive() {
    let tmp = TempDir::new().unwrap();
    let index = open_sst(tmp.path());

    // "oui" exact sur la colonne chimique, "non" ignoré.
    assert_eq!(
        index.lookup("12", "3456", Some("1")),
        Some(vec!["chemical".to_string()])
    );

    // "Oui" n'est pas le marqueur de la couche SST; "oui" sur le bruit
    // l'est. La casse n'est jamais repliée.
    assert_eq!(
        index.lookup("12", "3456", Some("2")),
        Some(vec!["noise".to_string()])
    );
}

#[test]
fn matched_row_with_no_marker_yields_empty_list() {
    let tmp = TempDir::new().unwrap();
    let index = open_sst(tmp.path());
    assert_eq!(index.lookup("12", "3456", Some("3")), Some(vec![]));
}

#[test]
fn missing_row_yields_absence() {
    let tmp = TempDir::new().unwrap();
    let index = open_sst(tmp.path());
    assert_eq!(index.lookup("12", "9999", Some("1")), None);
    assert_eq!(index.lookup("99", "3456", Some("1")), None);
    assert_eq!(index.lookup("douze", "3456", Some("1")), None);
}

#[test]
fn first_matching_row_wins() {
    let tmp = TempDir::new().unwrap();
    let index = open_sst(tmp.path());
    // La quatrième ligne répète la clé (12, 3456, 1) avec des valeurs
    // opposées; elle ne doit jamais être consultée.
    assert_eq!(
        index.lookup("12", "3456", Some("1")),
        Some(vec!["chemical".to_string()])
    );
}

#[test]
fn keys_compare_as_integers_after_coercion() {
    let tmp = TempDir::new().unwrap();
    let index = open_sst(tmp.path());
    // "012" == 12, les cellules Excel étant des flottants entiers.
    assert_eq!(
        index.lookup("012", "3456", Some("01")),
        Some(vec!["chemical".to_string()])
    );
}

#[test]
fn absent_annotation_column_is_skipped() {
    let tmp = TempDir::new().unwrap();
    // Seule une colonne de risque sur les dix-sept est présente: les
    // seize autres sont sautées sans erreur.
    let index = open_sst(tmp.path());
    let found = index.lookup("12", "3456", Some("1")).unwrap();
    assert_eq!(found, vec!["chemical".to_string()]);
}

#[test]
fn stage_layer_uses_two_part_key_and_capitalized_marker() {
    let tmp = TempDir::new().unwrap();
    let path = write_workbook(
        tmp.path(),
        "stage.xlsx",
        &["N° secteur", "N° métiers", "Q1", "Q2", "Q14"],
        &[
            &[Num(12.0), Num(3456.0), Text("Oui"), Text("oui"), Text("Oui")],
            &[Num(3.0), Num(78.0), Text(""), Text(""), Text("")],
        ],
    );
    let index = AnnotationIndex::open(&path, "Stage", stage_layer()).expect("ouverture Stage");

    // Marqueur "Oui": le "oui" minuscule de Q2 ne compte pas.
    assert_eq!(
        index.lookup("12", "3456", None),
        Some(vec!["1".to_string(), "14".to_string()])
    );
    assert_eq!(index.lookup("3", "78", None), Some(vec![]));
    assert_eq!(index.lookup("3", "79", None), None);
}

#[test]
fn missing_file_is_source_unavailable() {
    let err = AnnotationIndex::open(Path::new("/nonexistent/sst.xlsx"), "SST", sst_layer())
        .unwrap_err();
    assert!(matches!(
        err,
        RepertoireError::SpreadsheetUnavailable { ref label, .. } if label == "SST"
    ));
    assert!(err.is_source_unavailable());
}

#[test]
fn missing_key_column_fails_at_open() {
    let tmp = TempDir::new().unwrap();
    let path = write_workbook(
        tmp.path(),
        "bad.xlsx",
        &["N° secteur", "N° métiers", "Q1"],
        &[&[Num(12.0), Num(3456.0), Text("oui")]],
    );
    // La couche SST exige la colonne compétence.
    let err = AnnotationIndex::open(&path, "SST", sst_layer()).unwrap_err();
    assert!(matches!(
        err,
        RepertoireError::SpreadsheetMissingKeyColumn { ref column, .. }
            if column == "Numéro de compétences"
    ));
}

#[test]
fn layer_configuration_drives_the_lookup() {
    // Même classeur, couche personnalisée: la forme de la clé et le
    // marqueur viennent de la configuration, pas du code.
    let tmp = TempDir::new().unwrap();
    let path = write_workbook(
        tmp.path(),
        "custom.xlsx",
        &["N° secteur", "N° métiers", "Q1"],
        &[&[Num(1.0), Num(2.0), Text("Oui")]],
    );
    let layer = AnnotationLayer {
        marker: "Oui",
        ..stage_layer()
    };
    let index = AnnotationIndex::open(&path, "Stage", layer).expect("ouverture");
    assert_eq!(index.lookup("1", "2", None), Some(vec!["1".to_string()]));
}
