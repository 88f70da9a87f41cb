//! Constantes des sources (site + classeurs) et configuration de la
//! fusion des annotations.
//!
//! Les en-têtes Excel sont repris tels quels des classeurs fournis par
//! le CRCRME, espaces parasites compris. Ne pas « corriger » ces
//! chaînes: la recherche de colonne est une égalité stricte.

/// Page d'index du répertoire des métiers.
pub const BASE_URL: &str = "http://www1.education.gouv.qc.ca/sections/metiers/index.asp";

/// Fichier JSON produit par défaut.
pub const DEFAULT_OUTPUT: &str = "jobs-data.json";

// Colonnes clés communes aux deux classeurs.
pub const EXCEL_SECTOR_HEADER: &str = "N° secteur";
pub const EXCEL_JOB_HEADER: &str = "N° métiers";
pub const EXCEL_SKILL_HEADER: &str = "Numéro de compétences";

/// Colonnes du classeur SST: nom JSON → en-tête Excel.
pub const SST_DATA_HEADERS: &[(&str, &str)] = &[
    ("chemical", "1. Risques Chimiques"),
    ("biological", "2. Risques Biologiques"),
    ("equipment", "3. Risques liés aux machines et aux équipements"),
    ("fall", "4. Risques de chutes de hauteur et de plain-pied"),
    ("objectFall", "5. Risques liés aux chutes d’objets"),
    ("transit", " 6. Risques liés aux déplacements"),
    ("posture", " 7. Risques liés aux postures contraignantes"),
    (
        "motion",
        "8. Risques liés aux mouvements répétitifs, pressions de contact et chocs",
    ),
    ("handling", "9. Risques liés à la manutention"),
    ("psycological", "10. Risques psychosociaux et de violence"),
    ("noise", "11. Risques liés au bruit"),
    ("temperature", "12. Risques liés à l'Froid et chaleur"),
    ("vibration", "13. Risques liés aux vibrations"),
    ("electric", "14.1 Risques électriques"),
    ("anoxia", "14.2 Risque anoxie et travail en espace clos"),
    ("fire", "14.3 Risque ATEX,  incendie ou explosion"),
    ("nanomaterial", "14.4 Risques nanomatériaux "),
];

/// Colonnes du classeur Stage: numéro de question → en-tête Excel.
pub const STAGE_DATA_HEADERS: &[(&str, &str)] = &[
    ("1", "Q1"),
    ("2", "Q2"),
    ("3", "Q3"),
    ("4", "Q4"),
    ("5", "Q5"),
    ("6", "Q6"),
    ("7", "Q7"),
    ("8", "Q8"),
    ("9", "Q9"),
    ("10", "Q10"),
    ("11", "Q11"),
    ("12", "Q12"),
    ("13", "Q13"),
    ("14", "Q14"),
    ("15", "Q15"),
    ("16", "Q16"),
    ("17", "Q17"),
    ("18", "Q18"),
    ("19", "Q19"),
    ("20", "Q20"),
    ("21", "Q21"),
    ("22", "Q22"),
    ("23", "Q23"),
];

/// Forme de la clé composite utilisée pour retrouver une ligne.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyShape {
    /// (secteur, métier, compétence) — classeur SST.
    SectorJobSkill,
    /// (secteur, métier) — classeur Stage.
    SectorJob,
}

/// Niveau de l'arbre auquel le résultat est attaché.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachLevel {
    Skill,
    Job,
}

/// Une couche d'annotations: un classeur, une forme de clé, une table
/// de colonnes et un marqueur affirmatif. Les deux variantes
/// historiques de l'outil (SST seul, puis SST + Stage) sont des
/// configurations de cette structure, pas des chemins de code séparés.
#[derive(Debug, Clone)]
pub struct AnnotationLayer {
    /// Champ JSON produit ("risks", "questions").
    pub field: &'static str,
    /// (nom JSON, en-tête Excel) par annotation.
    pub columns: &'static [(&'static str, &'static str)],
    /// Marqueur affirmatif exact, sensible à la casse. Les deux
    /// classeurs divergent ("oui" vs "Oui"); cette asymétrie est
    /// voulue et conservée.
    pub marker: &'static str,
    pub key: KeyShape,
    pub attach: AttachLevel,
}

/// Couche SST: risques par compétence, marqueur "oui".
pub fn sst_layer() -> AnnotationLayer {
    AnnotationLayer {
        field: "risks",
        columns: SST_DATA_HEADERS,
        marker: "oui",
        key: KeyShape::SectorJobSkill,
        attach: AttachLevel::Skill,
    }
}

/// Couche Stage: questions applicables par métier, marqueur "Oui".
pub fn stage_layer() -> AnnotationLayer {
    AnnotationLayer {
        field: "questions",
        columns: STAGE_DATA_HEADERS,
        marker: "Oui",
        key: KeyShape::SectorJob,
        attach: AttachLevel::Job,
    }
}
