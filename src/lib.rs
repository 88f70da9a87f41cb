//! Générateur du répertoire des métiers.
//!
//! Croise deux sources: le site public des métiers (secteurs →
//! métiers → compétences) et un ou deux classeurs Excel d'annotations
//! (risques SST par compétence, questions de stage par métier), et
//! produit un arbre JSON normalisé.

pub mod cli;
pub mod config;
pub mod error;
pub mod excel;
pub mod export;
pub mod model;
pub mod normalizer;
pub mod pipeline;
pub mod progress;
pub mod site;
