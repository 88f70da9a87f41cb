/// Remontée d'état du pipeline vers la couche de présentation.
///
/// Le cœur ne connaît ni console ni formulaire: il pousse des lignes
/// lisibles dans ce puits à chaque transition de phase et sur chaque
/// échec. L'appelant (CLI, formulaire, test) décide quoi en faire.
pub trait Progress {
    /// Ligne d'état destinée à l'utilisateur.
    fn status(&mut self, _msg: &str) {}

    /// Diagnostic détaillé (un par recherche d'annotation, etc.),
    /// émis seulement si l'appelant l'a demandé.
    fn diagnostic(&mut self, _msg: &str) {}
}

/// Puits muet, pour les tests et les appels sans affichage.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Puits console: l'état sur stdout, les diagnostics derrière un
/// drapeau verbose.
pub struct ConsoleProgress {
    pub verbose: bool,
}

impl Progress for ConsoleProgress {
    fn status(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn diagnostic(&mut self, msg: &str) {
        if self.verbose {
            eprintln!("  {}", msg);
        }
    }
}
