//! Export JSON de l'arbre des métiers.
//!
//! Les tables sont émises dans l'ordre d'insertion (découverte sur le
//! site); les entrées nulles sont élaguées récursivement: un champ
//! absent est omis, jamais émis comme `null` ni comme `false`.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{json, Map, Serializer, Value};
use std::path::Path;

use crate::error::{RepertoireError, Result};
use crate::model::{Directory, Job, Skill};

/// Construit la valeur JSON complète, champs absents inclus (sous
/// forme de `null`, élagués ensuite par [`prune`]).
fn directory_to_value(dir: &Directory) -> Value {
    let mut root = Map::new();
    for entry in &dir.sectors {
        let mut jobs = Map::new();
        for job in &entry.jobs {
            jobs.insert(job.code.clone(), job_to_value(job));
        }
        root.insert(
            entry.sector.value_key.clone(),
            json!({
                "name": entry.sector.name,
                "id": entry.sector.value_key,
                "jobs": Value::Object(jobs),
            }),
        );
    }
    Value::Object(root)
}

fn job_to_value(job: &Job) -> Value {
    let mut skills = Map::new();
    for skill in &job.skills {
        skills.insert(skill.code.clone(), skill_to_value(skill));
    }
    json!({
        "name": job.name,
        "id": job.code,
        "skills": Value::Object(skills),
        "questions": job.questions,
    })
}

fn skill_to_value(skill: &Skill) -> Value {
    json!({
        "name": skill.name,
        "id": skill.code,
        "criteria": skill.criteria,
        "tasks": skill.tasks,
        "risks": skill.risks,
    })
}

/// Élagage récursif: `null` disparaît des tables comme des listes, les
/// éléments restants gardent leur ordre relatif.
fn prune(value: Value) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::Array(items) => Some(Value::Array(items.into_iter().filter_map(prune).collect())),
        Value::Object(entries) => Some(Value::Object(
            entries
                .into_iter()
                .filter_map(|(key, val)| prune(val).map(|v| (key, v)))
                .collect(),
        )),
        other => Some(other),
    }
}

/// Sérialise l'arbre élagué, indenté à 4 espaces.
pub fn to_json_bytes(dir: &Directory) -> Result<Vec<u8>> {
    let value = prune(directory_to_value(dir)).unwrap_or(Value::Object(Map::new()));
    let mut bytes = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut bytes, formatter);
    value.serialize(&mut serializer)?;
    Ok(bytes)
}

/// Écrit le JSON de façon atomique: fichier temporaire dans le même
/// répertoire, puis renommage. Un échec en amont ne laisse donc jamais
/// un `jobs-data.json` tronqué ou remplacé.
pub fn write_json(dir: &Directory, path: &Path) -> Result<()> {
    let bytes = to_json_bytes(dir)?;

    let file_name = path
        .file_name()
        .ok_or_else(|| RepertoireError::OutputUnavailable(path.display().to_string()))?;
    let mut tmp_name = file_name.to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    std::fs::write(&tmp_path, &bytes)
        .map_err(|e| RepertoireError::OutputUnavailable(format!("{}: {e}", path.display())))?;
    std::fs::rename(&tmp_path, path)
        .map_err(|e| RepertoireError::OutputUnavailable(format!("{}: {e}", path.display())))?;
    Ok(())
}
