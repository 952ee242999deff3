// =============================================================================
// RANDOM — Peut-on mémoïser un générateur aléatoire ?
// =============================================================================
//
// Un générateur aléatoire est l'exemple type de fonction IMPURE : le même
// appel (sans argument !) rend des valeurs différentes.
//
// Quatre tentatives :
//   1. `random()` dans deux enveloppes fraîches    → deux valeurs différentes
//      (chaque enveloppe a son propre cache, rien n'est partagé)
//   2. `randint(1, 1000)` dans deux enveloppes     → idem
//   3. une fonction graine → valeur                 → même graine, même valeur :
//      cette fonction-là est pure, la mémoïser ne change rien
//   4. UNE enveloppe appelée deux fois             → la même valeur deux fois :
//      la mémoïsation a "figé" le hasard, le comportement a changé
//
// =============================================================================

use std::fmt;

use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};
use tracing::info;

use crate::core::memoize::{memoize, Memoized};

/// Tirage non initialisé dans [0, 1)
pub fn random() -> f64 {
    thread_rng().gen()
}

/// Entier uniforme dans [low, high]
pub fn randint(low: i64, high: i64) -> i64 {
    thread_rng().gen_range(low..=high)
}

/// Fonction pure : une graine donne toujours le même tirage
pub fn seeded_random(seed: u64) -> f64 {
    StdRng::seed_from_u64(seed).gen()
}

/// Une tentative : deux valeurs obtenues, et si elles sont égales
#[derive(Debug, Clone, PartialEq)]
pub struct Attempt {
    pub label: &'static str,
    pub first: f64,
    pub second: f64,
}

impl Attempt {
    fn new(label: &'static str, first: f64, second: f64) -> Self {
        Attempt { label, first, second }
    }

    pub fn same(&self) -> bool {
        self.first == self.second
    }
}

#[derive(Debug, Clone)]
pub struct RandomReport {
    pub seed: u64,
    pub attempts: Vec<Attempt>,
}

impl RandomReport {
    /// Cherche une tentative par son libellé
    pub fn attempt(&self, label: &str) -> Option<&Attempt> {
        self.attempts.iter().find(|a| a.label == label)
    }
}

pub const FRESH_WRAPPERS: &str = "random() dans deux enveloppes";
pub const FRESH_RANDINT: &str = "randint(1, 1000) dans deux enveloppes";
pub const SEEDED: &str = "graine → valeur, mémoïsée";
pub const SHARED_WRAPPER: &str = "random() dans une seule enveloppe";

pub fn run(seed: u64) -> RandomReport {
    let mut attempts = Vec::with_capacity(4);

    let first = memoize(|_: ()| random())(());
    let second = memoize(|_: ()| random())(());
    attempts.push(Attempt::new(FRESH_WRAPPERS, first, second));

    let first = memoize(|(low, high): (i64, i64)| randint(low, high))((1, 1000));
    let second = memoize(|(low, high): (i64, i64)| randint(low, high))((1, 1000));
    attempts.push(Attempt::new(FRESH_RANDINT, first as f64, second as f64));

    let mut seeded = Memoized::new(seeded_random);
    let first = seeded.call(seed);
    let second = seeded_random(seed);
    attempts.push(Attempt::new(SEEDED, first, second));

    let mut shared = memoize(|_: ()| random());
    let first = shared(());
    let second = shared(());
    attempts.push(Attempt::new(SHARED_WRAPPER, first, second));

    for attempt in &attempts {
        info!(label = attempt.label, same = attempt.same(), "tentative aléatoire");
    }

    RandomReport { seed, attempts }
}

impl fmt::Display for RandomReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mémoïsation de l'aléatoire (graine {}) :", self.seed)?;
        for a in &self.attempts {
            let verdict = if a.same() { "égales" } else { "différentes" };
            write!(f, "\n  {:<40} {} ({} / {})", a.label, verdict, a.first, a.second)?;
        }
        Ok(())
    }
}
