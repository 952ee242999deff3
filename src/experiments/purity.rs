// =============================================================================
// PURITY — La mémoïsation comme détecteur d'impureté
// =============================================================================
//
// Quatre fonctions, appelées deux fois avec le même argument, d'abord
// telles quelles puis mémoïsées :
//
//   factorial(n)   → pure : les deux versions se comportent pareil
//   getchar()      → lit l'entrée : la version mémoïsée relit le 1er octet
//   greet()        → affiche "Hello!" : la version mémoïsée ne salue qu'une fois
//   accumulate(x)  → variable statique y += x : la version mémoïsée gèle y
//
// Une fonction est pure si et seulement si la mémoïser ne change ni ses
// résultats ni ses effets de bord.
//
// =============================================================================

use std::cell::Cell;
use std::fmt;
use std::fmt::Debug;
use std::hash::Hash;
use std::io::{Cursor, Read};

use tracing::{debug, info};

use crate::core::memoize::Memoized;
use crate::error::StudyResult;

/// Entrée par défaut de `getchar` quand aucune n'est fournie
pub const DEFAULT_INPUT: &[u8] = b"ab";

pub fn factorial(n: u64) -> u64 {
    (2..=n).product()
}

/// Lit le prochain octet, `None` en fin d'entrée
pub fn getchar<R: Read>(input: &mut R) -> std::io::Result<Option<u8>> {
    let mut buf = [0u8; 1];
    match input.read(&mut buf)? {
        0 => Ok(None),
        _ => Ok(Some(buf[0])),
    }
}

/// Ce que l'on a vu d'une fonction, nue puis mémoïsée
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurityObservation {
    pub name: &'static str,
    pub plain_results: Vec<String>,
    pub memoized_results: Vec<String>,
    pub plain_effects: usize,
    pub memoized_effects: usize,
}

impl PurityObservation {
    pub fn is_pure(&self) -> bool {
        self.plain_results == self.memoized_results && self.plain_effects == self.memoized_effects
    }
}

/// Appelle une fonction fraîche nue puis une fonction fraîche mémoïsée sur
/// les mêmes arguments. `effects` compte les effets de bord ; il est remis à
/// zéro avant chaque série.
fn observe<A, R, F, M>(
    name: &'static str,
    args: &[A],
    make: M,
    effects: &Cell<usize>,
) -> PurityObservation
where
    A: Hash + Eq + Clone + Debug,
    R: Clone + Debug,
    F: FnMut(A) -> R,
    M: Fn() -> F,
{
    effects.set(0);
    let mut plain = make();
    let plain_results = args.iter().map(|a| format!("{:?}", plain(a.clone()))).collect();
    let plain_effects = effects.get();

    effects.set(0);
    let mut memo = Memoized::new(make());
    let memoized_results = args.iter().map(|a| format!("{:?}", memo.call(a.clone()))).collect();
    let memoized_effects = effects.get();

    let observation = PurityObservation {
        name,
        plain_results,
        memoized_results,
        plain_effects,
        memoized_effects,
    };
    debug!(name, pure = observation.is_pure(), "observation");
    observation
}

#[derive(Debug, Clone)]
pub struct PurityReport {
    pub observations: Vec<PurityObservation>,
}

impl PurityReport {
    pub fn pure_functions(&self) -> Vec<&'static str> {
        self.observations
            .iter()
            .filter(|o| o.is_pure())
            .map(|o| o.name)
            .collect()
    }
}

/// Lance l'expérience ; `input` alimente `getchar`.
///
/// L'entrée est lue en entier d'abord, pour que chaque série reparte du
/// même début.
pub fn run_with_input<I: Read>(mut input: I) -> StudyResult<PurityReport> {
    let mut bytes = Vec::new();
    input.read_to_end(&mut bytes)?;

    let effects = Cell::new(0);
    let effects = &effects;
    let mut observations = Vec::with_capacity(4);

    observations.push(observe("factorial", &[5u64, 5], || factorial, effects));

    observations.push(observe(
        "getchar",
        &[(), ()],
        || {
            let mut source = Cursor::new(bytes.clone());
            move |_: ()| {
                effects.set(effects.get() + 1);
                // Un Cursor en mémoire ne peut pas échouer
                getchar(&mut source).ok().flatten()
            }
        },
        effects,
    ));

    observations.push(observe(
        "greet",
        &[(), ()],
        || {
            move |_: ()| {
                effects.set(effects.get() + 1);
                info!("Hello!");
                true
            }
        },
        effects,
    ));

    observations.push(observe(
        "accumulate",
        &[1i64, 1],
        || {
            let mut y = 0i64;
            move |x: i64| {
                effects.set(effects.get() + 1);
                y += x;
                y
            }
        },
        effects,
    ));

    Ok(PurityReport { observations })
}

pub fn run() -> StudyResult<PurityReport> {
    run_with_input(DEFAULT_INPUT)
}

impl fmt::Display for PurityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pureté révélée par la mémoïsation :")?;
        for o in &self.observations {
            write!(
                f,
                "\n  {:<12} nue [{}] ({} effets) | mémoïsée [{}] ({} effets) → {}",
                o.name,
                o.plain_results.join(", "),
                o.plain_effects,
                o.memoized_results.join(", "),
                o.memoized_effects,
                if o.is_pure() { "pure" } else { "impure" }
            )?;
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StudyError;

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0), 1);
        assert_eq!(factorial(1), 1);
        assert_eq!(factorial(5), 120);
    }

    #[test]
    fn test_getchar_reads_in_order() {
        let mut input = Cursor::new(b"xy".to_vec());
        assert_eq!(getchar(&mut input).unwrap(), Some(b'x'));
        assert_eq!(getchar(&mut input).unwrap(), Some(b'y'));
        assert_eq!(getchar(&mut input).unwrap(), None);
    }

    #[test]
    fn test_only_factorial_is_pure() {
        let report = run().unwrap();
        assert_eq!(report.pure_functions(), vec!["factorial"]);
    }

    #[test]
    fn test_getchar_observation() {
        let report = run().unwrap();
        let getchar = report.observations.iter().find(|o| o.name == "getchar").unwrap();
        assert_eq!(getchar.plain_results, vec!["Some(97)", "Some(98)"]);
        assert_eq!(getchar.memoized_results, vec!["Some(97)", "Some(97)"]);
        assert_eq!((getchar.plain_effects, getchar.memoized_effects), (2, 1));
    }

    #[test]
    fn test_greet_same_results_fewer_effects() {
        let report = run().unwrap();
        let greet = report.observations.iter().find(|o| o.name == "greet").unwrap();
        assert_eq!(greet.plain_results, greet.memoized_results);
        assert_eq!((greet.plain_effects, greet.memoized_effects), (2, 1));
        assert!(!greet.is_pure());
    }

    #[test]
    fn test_accumulator_freezes() {
        let report = run().unwrap();
        let acc = report.observations.iter().find(|o| o.name == "accumulate").unwrap();
        assert_eq!(acc.plain_results, vec!["1", "2"]);
        assert_eq!(acc.memoized_results, vec!["1", "1"]);
    }

    /// Une source qui échoue à chaque lecture
    struct BrokenInput;

    impl Read for BrokenInput {
        fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "entrée coupée"))
        }
    }

    #[test]
    fn test_failing_input_is_an_io_error() {
        match run_with_input(BrokenInput) {
            Err(StudyError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::BrokenPipe),
            other => panic!("erreur d'entrée attendue, obtenu {:?}", other),
        }
    }

    #[test]
    fn test_empty_input() {
        let report = run_with_input(&b""[..]).unwrap();
        let getchar = report.observations.iter().find(|o| o.name == "getchar").unwrap();
        assert_eq!(getchar.plain_results, vec!["None", "None"]);
        // Même résultats, mais la lecture reste un effet
        assert!(!getchar.is_pure());
    }
}
