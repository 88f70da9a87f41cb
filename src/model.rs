use serde::{Deserialize, Serialize};

/// Secteur découvert sur la page d'index.
///
/// `value_key` sert à la fois de filtre de recherche sur le site et de
/// clé "N° secteur" dans les classeurs; c'est l'identité du secteur.
/// `url_key` n'existe que pour construire l'URL de recherche.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sector {
    pub url_key: String,
    pub value_key: String,
    pub name: String,
}

/// Métier tel que lu sur sa fiche, avant puis après annotation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    /// Code numérique (clé "N° métiers" et clé d'export).
    pub code: String,
    pub name: String,
    /// Compétences dans l'ordre d'apparition sur la fiche.
    pub skills: Vec<Skill>,
    /// Questions applicables (classeur Stage). Absent tant que la
    /// fusion n'a pas tourné, ou si aucune ligne ne correspond.
    pub questions: Option<Vec<String>>,
}

/// Compétence: critères et tâches dans l'ordre du document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub code: String,
    pub name: String,
    pub criteria: Vec<String>,
    pub tasks: Vec<String>,
    /// Risques SST. Même sémantique d'absence que `Job::questions`.
    pub risks: Option<Vec<String>>,
}

impl Job {
    pub fn new(code: String, name: String) -> Self {
        Self {
            code,
            name,
            skills: Vec::new(),
            questions: None,
        }
    }

    /// Insère une compétence en conservant l'unicité du code: un code
    /// déjà présent est remplacé sur place (sémantique d'une table
    /// indexée par code).
    pub fn push_skill(&mut self, skill: Skill) {
        if let Some(existing) = self.skills.iter_mut().find(|s| s.code == skill.code) {
            *existing = skill;
        } else {
            self.skills.push(skill);
        }
    }
}

/// L'arbre complet: secteurs dans l'ordre de découverte, chacun avec
/// ses métiers dans l'ordre de la page de recherche.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Directory {
    pub sectors: Vec<SectorEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectorEntry {
    pub sector: Sector,
    pub jobs: Vec<Job>,
}

impl SectorEntry {
    /// Ajoute un métier, en remplaçant un éventuel métier de même code.
    pub fn push_job(&mut self, job: Job) {
        if let Some(existing) = self.jobs.iter_mut().find(|j| j.code == job.code) {
            *existing = job;
        } else {
            self.jobs.push(job);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(code: &str, name: &str) -> Skill {
        Skill {
            code: code.into(),
            name: name.into(),
            criteria: vec![],
            tasks: vec![],
            risks: None,
        }
    }

    #[test]
    fn duplicate_skill_code_replaces_in_place() {
        let mut job = Job::new("3456".into(), "Soudeur".into());
        job.push_skill(skill("1", "Première"));
        job.push_skill(skill("2", "Deuxième"));
        job.push_skill(skill("1", "Révisée"));

        assert_eq!(job.skills.len(), 2);
        assert_eq!(job.skills[0].name, "Révisée");
        assert_eq!(job.skills[1].code, "2");
    }
}
