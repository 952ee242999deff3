// =============================================================================
// COMPOSE — Identité et composition de fonctions
// =============================================================================
//
// Une catégorie, c'est des objets et des flèches entre eux. Ici :
//   - les OBJETS sont les types Rust
//   - les FLÈCHES sont les fonctions A → B
//
// Deux flèches f : A → B et g : B → C se composent en g ∘ f : A → C.
// La composition doit respecter deux lois :
//   1. Associativité : h ∘ (g ∘ f) = (h ∘ g) ∘ f
//   2. Identité      : f ∘ id = id ∘ f = f
//
// ATTENTION À L'ORDRE : `compose(f, g)` applique f PUIS g, c'est-à-dire
// g ∘ f en notation mathématique. C'est l'ordre de lecture d'un pipeline.
//
// =============================================================================

/// La flèche identité : rend son argument tel quel, pour n'importe quel type.
///
/// C'est l'unité (à gauche et à droite) de la composition.
pub fn identity<T>(x: T) -> T {
    x
}

/// Compose deux fonctions : `compose(f, g)(x) = g(f(x))`.
///
/// Les deux fonctions sont déplacées dans la closure résultante. Pour
/// réutiliser une fonction dans plusieurs compositions, passer `&f`
/// (une référence à un `Fn` est elle-même un `Fn`).
pub fn compose<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |x| g(f(x))
}

/// Un endomorphisme T → T, mis en boîte pour pouvoir en faire des listes.
pub type Endo<T> = Box<dyn Fn(T) -> T>;

/// Compose une liste d'endomorphismes, de gauche à droite.
///
/// Les endomorphismes d'un type forment un monoïde : la liste vide
/// donne l'identité.
pub fn compose_all<T: 'static>(fs: Vec<Endo<T>>) -> Endo<T> {
    let unit: Endo<T> = Box::new(identity::<T>);
    fs.into_iter()
        .fold(unit, |acc, f| -> Endo<T> { Box::new(compose(acc, f)) })
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    fn double(x: i64) -> i64 {
        x * 2
    }

    fn inc(x: i64) -> i64 {
        x + 1
    }

    #[test]
    fn test_double_then_inc() {
        let double_then_inc = compose(double, inc);
        assert_eq!(double_then_inc(4), 9);
    }

    #[test]
    fn test_compose_with_lambda() {
        let double_then_inc = compose(double, inc);
        assert_eq!(compose(&double_then_inc, |x: i64| x * x)(2), 25);
    }

    #[test]
    fn test_order_matters() {
        // inc puis double ≠ double puis inc
        assert_eq!(compose(inc, double)(4), 10);
        assert_ne!(compose(inc, double)(4), compose(double, inc)(4));
    }

    #[test]
    fn test_identity_is_unit() {
        assert_eq!(compose(double, identity)(6), double(6));
        assert_eq!(compose(identity, double)(6), double(6));
    }

    #[test]
    fn test_identity_any_type() {
        assert_eq!(identity("abc"), "abc");
        assert_eq!(identity(vec![1, 2, 3]), vec![1, 2, 3]);
        assert_eq!(identity(()), ());
    }

    #[test]
    fn test_change_of_type() {
        let len_then_even = compose(|s: &str| s.len(), |n: usize| n % 2 == 0);
        assert!(len_then_even("ab"));
        assert!(!len_then_even("abc"));
    }

    #[test]
    fn test_compose_all() {
        let fs: Vec<Endo<i64>> = vec![Box::new(double), Box::new(inc), Box::new(double)];
        let pipeline = compose_all(fs);
        assert_eq!(pipeline(3), 14);
    }

    #[test]
    fn test_compose_all_empty_is_identity() {
        let pipeline: Endo<i64> = compose_all(vec![]);
        assert_eq!(pipeline(42), 42);
    }
}
