// =============================================================================
// COMPOSITION — Les scénarios du chapitre 1
// =============================================================================

use std::fmt;

use tracing::info;

use crate::core::compose::{compose, identity};
use crate::core::laws::{check_associativity, check_identity};
use crate::error::StudyResult;

pub fn double(x: i64) -> i64 {
    x * 2
}

pub fn inc(x: i64) -> i64 {
    x + 1
}

pub fn square(x: i64) -> i64 {
    x * x
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositionReport {
    /// compose(double, inc)(4)
    pub double_then_inc: i64,
    /// compose(compose(double, inc), square)(2)
    pub then_square: i64,
    /// compose(double, id)(6), compose(id, double)(6), double(6)
    pub with_identity: (i64, i64, i64),
    /// Nombre d'entrées sur lesquelles les lois ont été vérifiées
    pub samples_checked: usize,
}

/// Rejoue les scénarios, puis vérifie les deux lois sur `samples`.
/// Une loi violée interrompt le chapitre.
pub fn run(samples: &[i64]) -> StudyResult<CompositionReport> {
    let double_then_inc = compose(double, inc);

    let report = CompositionReport {
        double_then_inc: double_then_inc(4),
        then_square: compose(&double_then_inc, square)(2),
        with_identity: (
            compose(double, identity)(6),
            compose(identity, double)(6),
            double(6),
        ),
        samples_checked: samples.len(),
    };

    check_identity(double, samples)?;
    check_identity(&double_then_inc, samples)?;
    check_associativity(double, inc, square, samples)?;
    check_associativity(inc, |x: i64| x.to_string(), |s: String| s.len(), samples)?;

    info!(samples = samples.len(), "lois de composition vérifiées");
    Ok(report)
}

impl fmt::Display for CompositionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (right, left, plain) = self.with_identity;
        writeln!(f, "compose(double, inc)(4)          = {}", self.double_then_inc)?;
        writeln!(f, "compose(double_then_inc, x²)(2)  = {}", self.then_square)?;
        writeln!(f, "double ∘ id, id ∘ double, double = {}, {}, {}", right, left, plain)?;
        write!(f, "✓ identité et associativité sur {} entrées", self.samples_checked)
    }
}
