// =============================================================================
// ERROR — Les erreurs du crate
// =============================================================================
//
// Les exercices originaux s'arrêtaient sur un `assert` raté. Ici une loi
// violée devient une valeur qu'on peut afficher, et les lectures d'entrée
// (expérience de pureté) remontent leur io::Error.
//
// =============================================================================

use thiserror::Error;

/// Erreurs possibles pendant une séance d'exercices
#[derive(Debug, Error)]
pub enum StudyError {
    /// Une loi catégorique n'est pas respectée pour une entrée donnée
    #[error("Loi '{law}' violée pour l'entrée {input} : {left} ≠ {right}")]
    LawViolation {
        /// Nom de la loi (associativité, identité à gauche...)
        law: String,
        /// Entrée fautive, rendue par Debug
        input: String,
        /// Valeur du côté gauche de l'équation
        left: String,
        /// Valeur du côté droit de l'équation
        right: String,
    },

    /// Erreur d'entrée/sortie (lecture d'un octet dans l'expérience getchar)
    #[error("Erreur d'entrée/sortie : {0}")]
    Io(#[from] std::io::Error),
}

pub type StudyResult<T> = Result<T, StudyError>;
