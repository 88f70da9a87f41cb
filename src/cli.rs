use clap::Parser;
use std::path::PathBuf;

use crate::config;

#[derive(Parser)]
#[command(name = "repertoire-metiers")]
#[command(
    about = "Génère le répertoire des métiers (secteurs → métiers → compétences) \
             à partir du site public et des classeurs Excel d'annotations",
    long_about = None
)]
pub struct Cli {
    /// Classeur Excel des informations SST (risques par compétence)
    #[arg(long, value_name = "FICHIER")]
    pub sst: PathBuf,

    /// Classeur Excel des questions du formulaire de création de stage
    /// (facultatif: sans lui, seule la couche SST est fusionnée)
    #[arg(long, value_name = "FICHIER")]
    pub stage: Option<PathBuf>,

    /// Fichier JSON produit
    #[arg(short, long, default_value = config::DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// URL de la page d'index du site des métiers
    #[arg(long, default_value = config::BASE_URL)]
    pub base_url: String,

    /// Diagnostics détaillés (une ligne par recherche sans résultat)
    #[arg(short, long)]
    pub verbose: bool,
}
