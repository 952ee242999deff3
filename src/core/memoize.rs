// =============================================================================
// MEMOIZE — Une fonction d'ordre supérieur qui se souvient
// =============================================================================
//
// `memoize(f)` rend une fonction qui se comporte comme f, sauf qu'elle
// n'appelle f qu'UNE fois par argument : le résultat est stocké, puis
// resservi à chaque appel suivant avec le même argument.
//
// On distingue ainsi la version mémoïsée de l'originale en observant :
//   - la performance (le deuxième appel est instantané)
//   - les effets de bord (ils n'ont lieu qu'au premier appel)
//
// Le second point est la raison d'être de l'exercice : mémoïser une
// fonction IMPURE change son comportement observable. Mémoïser une
// fonction pure ne change rien, sauf le temps de calcul.
//
// ARGUMENTS MULTIPLES : on mémoïse sur un tuple, `(a, b)`. Le tuple doit
// être `Hash + Eq`, ce que le compilateur vérifie : pas d'argument
// "non hachable" à l'exécution.
//
// =============================================================================

use std::collections::HashMap;
use std::hash::Hash;

use tracing::{debug, trace};

/// Une fonction enveloppée avec son cache.
///
/// Le cache vit et meurt avec l'enveloppe : deux `Memoized` construits
/// autour de la même fonction ne partagent rien.
pub struct Memoized<A, R, F> {
    func: F,
    cache: HashMap<A, R>,
    computations: usize,
}

impl<A, R, F> Memoized<A, R, F>
where
    A: Hash + Eq + Clone,
    R: Clone,
    F: FnMut(A) -> R,
{
    /// Enveloppe `func` avec un cache vide
    pub fn new(func: F) -> Self {
        Memoized {
            func,
            cache: HashMap::new(),
            computations: 0,
        }
    }

    /// Appelle la fonction, ou resservit le résultat déjà calculé.
    ///
    /// La présence dans le cache suffit : une valeur en cache qui vaut
    /// `0`, `false` ou `""` est un succès de cache comme une autre.
    pub fn call(&mut self, args: A) -> R {
        if let Some(value) = self.cache.get(&args) {
            trace!(cached = self.cache.len(), "memoize: succès de cache");
            return value.clone();
        }

        debug!(computations = self.computations + 1, "memoize: calcul");
        let value = (self.func)(args.clone());
        self.computations += 1;
        self.cache.insert(args, value.clone());
        value
    }

    /// Consulte le cache sans jamais appeler la fonction
    pub fn cached(&self, args: &A) -> Option<&R> {
        self.cache.get(args)
    }

    /// Nombre d'appels réels à la fonction enveloppée
    pub fn computations(&self) -> usize {
        self.computations
    }

    /// Nombre d'arguments distincts en cache
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Oublie tout. Le compteur de calculs est conservé.
    pub fn clear(&mut self) {
        self.cache.clear();
    }
}

/// Version "fonction d'ordre supérieur" : rend une closure qui possède
/// son propre `Memoized`.
pub fn memoize<A, R, F>(func: F) -> impl FnMut(A) -> R
where
    A: Hash + Eq + Clone,
    R: Clone,
    F: FnMut(A) -> R,
{
    let mut memo = Memoized::new(func);
    move |args| memo.call(args)
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_same_argument_computes_once() {
        let calls = Cell::new(0);
        let mut m = Memoized::new(|x: i64| {
            calls.set(calls.get() + 1);
            x * 10
        });

        let first = m.call(3);
        let second = m.call(3);

        assert_eq!(first, second);
        assert_eq!(calls.get(), 1);
        assert_eq!(m.computations(), 1);
    }

    #[test]
    fn test_distinct_arguments_compute_twice() {
        let calls = Cell::new(0);
        let mut m = Memoized::new(|x: i64| {
            calls.set(calls.get() + 1);
            x + 1
        });

        assert_eq!(m.call(1), 2);
        assert_eq!(m.call(2), 3);
        assert_eq!(calls.get(), 2);
        assert_eq!(m.len(), 2);
    }

    #[test]
    fn test_zero_is_a_cache_hit() {
        let calls = Cell::new(0);
        let mut m = Memoized::new(|_: i64| {
            calls.set(calls.get() + 1);
            0
        });

        assert_eq!(m.call(7), 0);
        assert_eq!(m.call(7), 0);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_false_and_empty_are_cache_hits() {
        let mut is_odd = Memoized::new(|x: u32| x % 2 == 1);
        assert!(!is_odd.call(4));
        assert!(!is_odd.call(4));
        assert_eq!(is_odd.computations(), 1);

        let mut empty = Memoized::new(|n: usize| "x".repeat(n));
        assert_eq!(empty.call(0), "");
        assert_eq!(empty.call(0), "");
        assert_eq!(empty.computations(), 1);
    }

    #[test]
    fn test_tuple_arguments() {
        let mut add = Memoized::new(|(a, b): (i64, i64)| a + b);
        assert_eq!(add.call((1, 2)), 3);
        assert_eq!(add.call((2, 1)), 3);
        assert_eq!(add.call((1, 2)), 3);
        // (1, 2) et (2, 1) sont deux tuples distincts
        assert_eq!(add.computations(), 2);
    }

    #[test]
    fn test_unit_argument() {
        let mut counter = 0;
        let mut m = Memoized::new(|_: ()| {
            counter += 1;
            counter
        });
        assert_eq!(m.call(()), 1);
        assert_eq!(m.call(()), 1);
    }

    #[test]
    fn test_arguments_without_debug() {
        // Seuls Hash + Eq + Clone sont exigés
        #[derive(Clone, PartialEq, Eq, Hash)]
        struct Opaque(u32);

        let mut m = Memoized::new(|Opaque(n)| n + 1);
        assert_eq!(m.call(Opaque(1)), 2);
        assert_eq!(m.call(Opaque(1)), 2);
        assert_eq!(m.computations(), 1);

        let mut f = memoize(|Opaque(n)| n * 2);
        assert_eq!(f(Opaque(4)), 8);
    }

    #[test]
    fn test_cached_does_not_compute() {
        let mut m = Memoized::new(|x: i64| x * x);
        assert_eq!(m.cached(&5), None);
        m.call(5);
        assert_eq!(m.cached(&5), Some(&25));
        assert_eq!(m.computations(), 1);
    }

    #[test]
    fn test_clear_forces_recompute() {
        let mut m = Memoized::new(|x: i64| x * x);
        m.call(4);
        m.clear();
        assert!(m.is_empty());
        m.call(4);
        assert_eq!(m.computations(), 2);
    }

    #[test]
    fn test_memoize_closure() {
        let calls = Cell::new(0);
        let mut f = memoize(|x: u64| {
            calls.set(calls.get() + 1);
            (0..x).sum::<u64>()
        });

        assert_eq!(f(3), 3);
        assert_eq!(f(3), 3);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_separate_wrappers_do_not_share() {
        let calls = Cell::new(0);
        let body = |x: u64| {
            calls.set(calls.get() + 1);
            x
        };

        memoize(body)(3);
        memoize(body)(3);
        assert_eq!(calls.get(), 2);
    }
}
