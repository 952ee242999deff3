// =============================================================================
// TIMING — Distinguer la fonction mémoïsée par sa performance
// =============================================================================
//
// On mémoïse une fonction lente, `large_sum(n) = 0 + 1 + … + (n-1)`, puis :
//   1. premier appel avec n       → calcul complet
//   2. deuxième appel avec n      → cache, quasi instantané
//   3. appel avec n + 1           → nouvel argument, calcul complet
//
// Deuxième passe : les mêmes trois appels, mais chacun à travers une
// enveloppe FRAÎCHE. Le cache naît vide à chaque fois, donc les trois
// appels coûtent un calcul complet.
//
// =============================================================================

use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

use tracing::info;

use crate::core::memoize::Memoized;

/// Somme volontairement naïve, pour que le calcul coûte quelque chose.
///
/// `black_box` empêche l'optimiseur de remplacer la boucle par n(n-1)/2.
pub fn large_sum(limit: u64) -> u64 {
    (0..black_box(limit)).fold(0u64, |acc, x| black_box(acc.wrapping_add(x)))
}

/// Trois appels chronométrés : n, n encore, puis un argument nouveau
#[derive(Debug, Clone)]
pub struct TimingRow {
    pub first_call: Duration,
    pub repeated_call: Duration,
    pub new_argument_call: Duration,
    /// Nombre d'appels réels à `large_sum` sur les trois appels
    pub computations: usize,
}

#[derive(Debug, Clone)]
pub struct TimingReport {
    pub limit: u64,
    /// Une seule enveloppe pour les trois appels
    pub shared: TimingRow,
    /// Une enveloppe fraîche par appel
    pub fresh: TimingRow,
}

fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

fn shared_row(limit: u64, next: u64) -> TimingRow {
    let mut memo = Memoized::new(large_sum);

    let (first, first_call) = timed(|| memo.call(limit));
    let (again, repeated_call) = timed(|| memo.call(limit));
    let (_, new_argument_call) = timed(|| memo.call(next));
    debug_assert_eq!(first, again);

    TimingRow {
        first_call,
        repeated_call,
        new_argument_call,
        computations: memo.computations(),
    }
}

fn fresh_row(limit: u64, next: u64) -> TimingRow {
    let mut computations = 0;
    let mut fresh_call = |n: u64| {
        let mut memo = Memoized::new(large_sum);
        let timing = timed(|| memo.call(n)).1;
        computations += memo.computations();
        timing
    };

    let first_call = fresh_call(limit);
    let repeated_call = fresh_call(limit);
    let new_argument_call = fresh_call(next);

    TimingRow {
        first_call,
        repeated_call,
        new_argument_call,
        computations,
    }
}

/// L'argument "nouveau" de la troisième mesure. Sature à u64::MAX.
pub fn next_argument(limit: u64) -> u64 {
    limit.saturating_add(1)
}

/// Lance les deux passes chronométrées
pub fn run(limit: u64) -> TimingReport {
    let next = next_argument(limit);

    let report = TimingReport {
        limit,
        shared: shared_row(limit, next),
        fresh: fresh_row(limit, next),
    };
    info!(
        limit,
        first_us = report.shared.first_call.as_micros() as u64,
        memoized_us = report.shared.repeated_call.as_micros() as u64,
        fresh_us = report.fresh.repeated_call.as_micros() as u64,
        "chronométrage terminé"
    );
    report
}

impl fmt::Display for TimingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "large_sum({}) :", self.limit)?;
        let rows = [("une enveloppe", &self.shared), ("enveloppes fraîches", &self.fresh)];
        for (label, row) in rows {
            writeln!(
                f,
                "  {:<20} premier {:.2e} s | répété {:.2e} s | nouveau {:.2e} s",
                label,
                row.first_call.as_secs_f64(),
                row.repeated_call.as_secs_f64(),
                row.new_argument_call.as_secs_f64()
            )?;
        }
        write!(
            f,
            "  calculs réels : {} sur 3 appels (une enveloppe), {} sur 3 (fraîches)",
            self.shared.computations, self.fresh.computations
        )
    }
}
