// =============================================================================
// CATLEARN — Exercices de théorie des catégories en Rust
// =============================================================================
//
// Carnet d'étude : les premiers chapitres de "Category Theory for
// Programmers", un concept par module.
//
// Architecture :
//   core/         → identité, composition, mémoïsation, lois, Void/()/Bool
//   experiments/  → les expériences (chronométrage, aléatoire, pureté)
//   config        → paramètres des expériences
//   cli           → ligne de commande
//
// Concepts fondamentaux :
//   Catégorie   = des objets (types) et des flèches (fonctions)
//   Composition = g ∘ f, associative
//   Identité    = l'unité de la composition
//   Pureté      = mémoïser ne change rien d'observable
//
// =============================================================================

pub mod core;
pub mod experiments;
pub mod config;
pub mod cli;
pub mod error;

pub use error::{StudyError, StudyResult};
