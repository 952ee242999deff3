// =============================================================================
// EXPERIMENTS — Les exercices, mis en scène
// =============================================================================
//
// Chaque expérience produit un rapport affichable ; le binaire se contente
// de les imprimer.
//
//   composition → scénarios du chapitre 1 + lois
//   timing      → la mémoïsation se voit au chronomètre
//   random      → mémoïser le hasard
//   purity      → mémoïser des fonctions impures
//
// =============================================================================

pub mod composition;
pub mod timing;
pub mod random;
pub mod purity;
