// =============================================================================
// CONFIG — Paramètres des expériences
// =============================================================================

use std::path::PathBuf;

/// Valeur par défaut de `large_sum` dans l'expérience de chronométrage
pub const DEFAULT_LIMIT: u64 = 1_000_000;

/// Graine par défaut des expériences aléatoires
pub const DEFAULT_SEED: u64 = 5;

/// Chapitre à exécuter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chapter {
    /// Composition, identité et lois
    Composition,
    /// Chronométrage de la mémoïsation
    Memoize,
    /// Mémoïser un générateur aléatoire
    Random,
    /// Mémoïser des fonctions pures et impures
    Purity,
    /// La catégorie Void / () / Bool
    Category,
    All,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyConfig {
    pub chapter: Chapter,
    pub limit: u64,
    pub seed: u64,
    /// Fichier lu par `getchar` dans l'expérience de pureté
    pub input: Option<PathBuf>,
    pub verbose: bool,
}

impl Default for StudyConfig {
    fn default() -> Self {
        StudyConfig {
            chapter: Chapter::All,
            limit: DEFAULT_LIMIT,
            seed: DEFAULT_SEED,
            input: None,
            verbose: false,
        }
    }
}
