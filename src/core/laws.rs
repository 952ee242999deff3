// =============================================================================
// LAWS — Vérifier que la composition respecte les lois d'une catégorie
// =============================================================================
//
// On ne peut pas PROUVER les lois en Rust, mais on peut les TESTER sur un
// échantillon d'entrées :
//   - identité à gauche  : id ∘ f = f
//   - identité à droite  : f ∘ id = f
//   - associativité      : (f ; g) ; h = f ; (g ; h)
//
// Les fonctions sont prises par référence (`&F` est aussi un `Fn`), donc
// on peut les réutiliser dans plusieurs compositions.
//
// =============================================================================

use std::fmt::Debug;

use tracing::debug;

use super::compose::{compose, identity};
use crate::error::{StudyError, StudyResult};

fn violation<A: Debug, B: Debug>(law: &str, input: &A, left: &B, right: &B) -> StudyError {
    StudyError::LawViolation {
        law: law.to_string(),
        input: format!("{:?}", input),
        left: format!("{:?}", left),
        right: format!("{:?}", right),
    }
}

/// Vérifie `compose(f, id) == f` et `compose(id, f) == f` sur chaque échantillon.
pub fn check_identity<A, B, F>(f: F, samples: &[A]) -> StudyResult<()>
where
    A: Clone + Debug,
    B: PartialEq + Debug,
    F: Fn(A) -> B,
{
    let right_unit = compose(&f, identity);
    let left_unit = compose(identity, &f);

    for x in samples {
        let expected = f(x.clone());

        let right = right_unit(x.clone());
        if right != expected {
            return Err(violation("identité à droite", x, &right, &expected));
        }

        let left = left_unit(x.clone());
        if left != expected {
            return Err(violation("identité à gauche", x, &left, &expected));
        }
    }

    debug!(samples = samples.len(), "loi d'identité vérifiée");
    Ok(())
}

/// Vérifie `compose(compose(f, g), h) == compose(f, compose(g, h))` sur chaque échantillon.
pub fn check_associativity<A, B, C, D, F, G, H>(
    f: F,
    g: G,
    h: H,
    samples: &[A],
) -> StudyResult<()>
where
    A: Clone + Debug,
    D: PartialEq + Debug,
    F: Fn(A) -> B,
    G: Fn(B) -> C,
    H: Fn(C) -> D,
{
    let grouped_left = compose(compose(&f, &g), &h);
    let grouped_right = compose(&f, compose(&g, &h));

    for x in samples {
        let left = grouped_left(x.clone());
        let right = grouped_right(x.clone());
        if left != right {
            return Err(violation("associativité", x, &left, &right));
        }
    }

    debug!(samples = samples.len(), "loi d'associativité vérifiée");
    Ok(())
}
