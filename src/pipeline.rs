//! Orchestration du pipeline complet.
//!
//! Une passe strictement séquentielle: chargement des classeurs,
//! énumération des secteurs, puis pour chaque secteur ses métiers,
//! pour chaque métier sa fiche et ses annotations, et enfin l'export.
//! Le site est une ressource partagée sans limite de débit connue: pas
//! de parallélisme, les fiches sont lues dans l'ordre de découverte.
//! Tout échec interrompt la passe avant l'export: aucun JSON partiel
//! n'est jamais écrit.

use std::path::PathBuf;

use crate::config::{self, AttachLevel};
use crate::error::{RepertoireError, Result};
use crate::excel::AnnotationIndex;
use crate::export;
use crate::model::{Directory, Job, SectorEntry};
use crate::progress::Progress;
use crate::site::SiteClient;

/// Paramètres d'une passe. La variante historique à un seul classeur
/// s'obtient en laissant `stage_path` vide: seule la couche SST est
/// alors configurée.
pub struct RunOptions {
    pub sst_path: PathBuf,
    pub stage_path: Option<PathBuf>,
    pub output_path: PathBuf,
    pub base_url: String,
}

/// Déroule la passe complète et pousse l'état dans `progress`. En cas
/// d'échec, un dernier message d'état est émis et l'erreur remonte à
/// l'appelant; le fichier de sortie n'est ni écrit ni remplacé.
pub fn run(options: &RunOptions, progress: &mut dyn Progress) -> Result<()> {
    match build_and_export(options, progress) {
        Ok(()) => {
            progress.status("Tout est fini!");
            Ok(())
        }
        Err(err) => {
            progress.status(&failure_message(&err));
            Err(err)
        }
    }
}

fn build_and_export(options: &RunOptions, progress: &mut dyn Progress) -> Result<()> {
    // Chargement des sources tabulaires avant tout accès réseau.
    let mut indices = Vec::new();
    indices.push(AnnotationIndex::open(
        &options.sst_path,
        "SST",
        config::sst_layer(),
    )?);
    if let Some(stage_path) = &options.stage_path {
        indices.push(AnnotationIndex::open(
            stage_path,
            "Stage",
            config::stage_layer(),
        )?);
    }

    let client = SiteClient::new(options.base_url.clone())?;

    progress.status("Getting all sectors...");
    let sectors = client.list_sectors()?;

    let mut directory = Directory::default();
    for sector in sectors {
        progress.status(&format!("Getting all jobs of {}...", sector.url_key));
        let job_ids = client.list_job_ids(&sector.url_key, &sector.value_key)?;

        let mut entry = SectorEntry {
            sector,
            jobs: Vec::new(),
        };
        for job_id in job_ids {
            let mut job = client.fetch_job(&job_id)?;
            annotate(&mut job, &entry.sector.value_key, &indices, progress);
            entry.push_job(job);
        }
        directory.sectors.push(entry);
    }

    progress.status("Saving json...");
    export::write_json(&directory, &options.output_path)?;
    Ok(())
}

/// Fusion des annotations: chaque couche configurée décide de sa clé
/// et de son niveau d'attache. Une clé sans ligne correspondante laisse
/// le champ absent.
fn annotate(
    job: &mut Job,
    sector_value: &str,
    indices: &[AnnotationIndex],
    progress: &mut dyn Progress,
) {
    for index in indices {
        let layer = index.layer();
        match layer.attach {
            AttachLevel::Job => {
                let found = index.lookup(sector_value, &job.code, None);
                if found.is_none() {
                    progress.diagnostic(&format!(
                        "{}: aucune ligne pour secteur {} métier {}",
                        layer.field, sector_value, job.code
                    ));
                }
                job.questions = found;
            }
            AttachLevel::Skill => {
                for skill in &mut job.skills {
                    let found = index.lookup(sector_value, &job.code, Some(&skill.code));
                    if found.is_none() {
                        progress.diagnostic(&format!(
                            "{}: aucune ligne pour secteur {} métier {} compétence {}",
                            layer.field, sector_value, job.code, skill.code
                        ));
                    }
                    skill.risks = found;
                }
            }
        }
    }
}

/// Message d'état terminal en cas d'échec. Les classeurs illisibles
/// gardent le libellé historique de l'outil.
fn failure_message(err: &RepertoireError) -> String {
    match err {
        RepertoireError::SpreadsheetUnavailable { label, .. } => {
            format!("Fichier {label} invalide")
        }
        other => other.to_string(),
    }
}
