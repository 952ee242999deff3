// =============================================================================
// CORE — Le cœur des exercices
// =============================================================================
//
// Uniquement des fonctions et des types, aucune entrée/sortie :
//
//   compose  → identité et composition (les flèches d'une catégorie)
//   memoize  → la fonction d'ordre supérieur qui se souvient
//   laws     → vérification des lois d'associativité et d'identité
//   finite   → la petite catégorie Void, (), Bool
//
// =============================================================================

pub mod compose;
pub mod memoize;
pub mod laws;
pub mod finite;
