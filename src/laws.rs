// Copyright 2025 Cowboy AI, LLC.

//! Law-checking harness for monoids and categories
//!
//! Exhaustive verification over infinite carriers is impossible, so the
//! checkers work on a finite sample of elements: every sampled triple is
//! tested for associativity and every sampled element for two-sided
//! identity. A check either passes with a [`LawReport`] of what was
//! evaluated, or fails with the specific counterexample and the law it
//! violates. All checks are pure and synchronous.
//!
//! Equality defaults to `PartialEq` for discrete carriers; the `_with`
//! entry points take a caller-supplied equivalence for approximate ones.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::errors::{AlgebraError, AlgebraResult};
use crate::monoid::Monoid;

/// The algebraic laws the checkers can report against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Law {
    /// `(x·y)·z = x·(y·z)`
    Associativity,

    /// `e·x = x`
    LeftIdentity,

    /// `x·e = x`
    RightIdentity,

    /// `identity(A)` must be a morphism from `A` to `A`
    IdentityBoundary,
}

impl fmt::Display for Law {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Law::Associativity => write!(f, "associativity ((x·y)·z = x·(y·z))"),
            Law::LeftIdentity => write!(f, "left identity (e·x = x)"),
            Law::RightIdentity => write!(f, "right identity (x·e = x)"),
            Law::IdentityBoundary => write!(f, "identity boundary (id_A : A -> A)"),
        }
    }
}

/// Summary of a passed check
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LawReport {
    /// Associativity triples evaluated
    pub triples_checked: usize,

    /// Identity equations evaluated
    pub identities_checked: usize,
}

fn violation(law: Law, counterexample: String) -> AlgebraError {
    AlgebraError::LawViolation {
        law,
        counterexample,
    }
}

/// Check the monoid laws on sampled elements with a custom equivalence
///
/// Verifies `multiply(unit(), x) == x` and `multiply(x, unit()) == x` for
/// every sample, then `multiply(multiply(x, y), z) ==
/// multiply(x, multiply(y, z))` for every sampled triple. Passing the full
/// carrier as `samples` makes the check exhaustive for finite carriers.
pub fn check_monoid_with<M, F>(
    monoid: &M,
    samples: &[M::Elem],
    mut eq: F,
) -> AlgebraResult<LawReport>
where
    M: Monoid,
    F: FnMut(&M::Elem, &M::Elem) -> bool,
{
    let unit = monoid.unit();
    let mut report = LawReport::default();

    for x in samples {
        let left = monoid.multiply(&unit, x);
        if !eq(&left, x) {
            return Err(violation(Law::LeftIdentity, format!("x = {:?}", x)));
        }
        let right = monoid.multiply(x, &unit);
        if !eq(&right, x) {
            return Err(violation(Law::RightIdentity, format!("x = {:?}", x)));
        }
        report.identities_checked += 2;
    }

    for x in samples {
        for y in samples {
            for z in samples {
                let lhs = monoid.multiply(&monoid.multiply(x, y), z);
                let rhs = monoid.multiply(x, &monoid.multiply(y, z));
                if !eq(&lhs, &rhs) {
                    return Err(violation(
                        Law::Associativity,
                        format!("(x, y, z) = ({:?}, {:?}, {:?})", x, y, z),
                    ));
                }
                report.triples_checked += 1;
            }
        }
    }

    tracing::debug!(
        monoid = %monoid.description(),
        triples = report.triples_checked,
        identities = report.identities_checked,
        "monoid laws hold on sample"
    );
    Ok(report)
}

/// Check the monoid laws on sampled elements using `PartialEq`
pub fn check_monoid<M>(monoid: &M, samples: &[M::Elem]) -> AlgebraResult<LawReport>
where
    M: Monoid,
    M::Elem: PartialEq,
{
    check_monoid_with(monoid, samples, |a, b| a == b)
}

/// Draw `count` samples from a generator and check the monoid laws
pub fn check_monoid_generated<M, G>(
    monoid: &M,
    mut generator: G,
    count: usize,
) -> AlgebraResult<LawReport>
where
    M: Monoid,
    M::Elem: PartialEq,
    G: FnMut() -> M::Elem,
{
    let samples: Vec<M::Elem> = (0..count).map(|_| generator()).collect();
    check_monoid(monoid, &samples)
}

/// Check the category laws on sampled objects and morphisms with a custom
/// equivalence on morphisms
///
/// Verifies that each sampled object's identity is an endomorphism on it,
/// that identities are neutral for each sampled morphism, and that every
/// composable sampled triple associates:
/// `compose(compose(x, y), z) == compose(x, compose(y, z))`.
///
/// Pairs whose boundaries do not align are skipped, as are pairs a partial
/// category leaves undefined (e.g. a sparse composition table). A
/// `TypeMismatch` from a pair the boundaries said was composable is a real
/// fault and propagates.
pub fn check_category_with<C, F>(
    category: &C,
    objects: &[C::Object],
    morphisms: &[C::Morphism],
    mut eq: F,
) -> AlgebraResult<LawReport>
where
    C: Category,
    F: FnMut(&C::Morphism, &C::Morphism) -> bool,
{
    let mut report = LawReport::default();

    for object in objects {
        let id = category.identity(object)?;
        if category.source(&id)? != *object || category.target(&id)? != *object {
            return Err(violation(
                Law::IdentityBoundary,
                format!("object = {:?}, identity = {:?}", object, id),
            ));
        }
    }

    for x in morphisms {
        let id_target = category.identity(&category.target(x)?)?;
        let left = category.compose(&id_target, x)?;
        if !eq(&left, x) {
            return Err(violation(Law::LeftIdentity, format!("x = {:?}", x)));
        }

        let id_source = category.identity(&category.source(x)?)?;
        let right = category.compose(x, &id_source)?;
        if !eq(&right, x) {
            return Err(violation(Law::RightIdentity, format!("x = {:?}", x)));
        }
        report.identities_checked += 2;
    }

    // compose(x, y) applies y first, so the chain below is z, then y, then x
    for x in morphisms {
        for y in morphisms {
            if category.target(y)? != category.source(x)? {
                continue;
            }
            for z in morphisms {
                if category.target(z)? != category.source(y)? {
                    continue;
                }

                let xy = match category.compose(x, y) {
                    Ok(m) => m,
                    Err(AlgebraError::InvalidOperation { .. }) => continue,
                    Err(e) => return Err(e),
                };
                let yz = match category.compose(y, z) {
                    Ok(m) => m,
                    Err(AlgebraError::InvalidOperation { .. }) => continue,
                    Err(e) => return Err(e),
                };
                let lhs = match category.compose(&xy, z) {
                    Ok(m) => m,
                    Err(AlgebraError::InvalidOperation { .. }) => continue,
                    Err(e) => return Err(e),
                };
                let rhs = match category.compose(x, &yz) {
                    Ok(m) => m,
                    Err(AlgebraError::InvalidOperation { .. }) => continue,
                    Err(e) => return Err(e),
                };

                if !eq(&lhs, &rhs) {
                    return Err(violation(
                        Law::Associativity,
                        format!("(x, y, z) = ({:?}, {:?}, {:?})", x, y, z),
                    ));
                }
                report.triples_checked += 1;
            }
        }
    }

    tracing::debug!(
        objects = objects.len(),
        morphisms = morphisms.len(),
        triples = report.triples_checked,
        identities = report.identities_checked,
        "category laws hold on sample"
    );
    Ok(report)
}

/// Check the category laws on sampled objects and morphisms using
/// `PartialEq` on morphisms
pub fn check_category<C>(
    category: &C,
    objects: &[C::Object],
    morphisms: &[C::Morphism],
) -> AlgebraResult<LawReport>
where
    C: Category,
    C::Morphism: PartialEq,
{
    check_category_with(category, objects, morphisms, |a, b| a == b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Lifted;
    use crate::monoid::instances::{BoolAnd, IntegerAddition, StringConcat};

    #[test]
    fn test_passing_check_reports_counts() {
        let samples = vec![0i64, 1, -3, 7];
        let report = check_monoid(&IntegerAddition, &samples).unwrap();
        assert_eq!(report.identities_checked, 8);
        assert_eq!(report.triples_checked, 64);
    }

    #[test]
    fn test_empty_sample_passes_vacuously() {
        let report = check_monoid(&StringConcat, &[]).unwrap();
        assert_eq!(report, LawReport::default());
    }

    #[test]
    fn test_custom_equivalence() {
        // Case-insensitive equivalence still satisfies the laws for concat
        let samples = vec!["a".to_string(), "B".to_string()];
        let report =
            check_monoid_with(&StringConcat, &samples, |a, b| a.eq_ignore_ascii_case(b)).unwrap();
        assert_eq!(report.triples_checked, 8);
    }

    #[test]
    fn test_violation_carries_law_and_counterexample() {
        // Subtraction has a right identity but no left identity
        struct IntegerSubtraction;
        impl Monoid for IntegerSubtraction {
            type Elem = i64;
            fn unit(&self) -> i64 {
                0
            }
            fn multiply(&self, a: &i64, b: &i64) -> i64 {
                a.wrapping_sub(*b)
            }
        }

        let err = check_monoid(&IntegerSubtraction, &[5]).unwrap_err();
        match err {
            AlgebraError::LawViolation {
                law,
                counterexample,
            } => {
                assert_eq!(law, Law::LeftIdentity);
                assert!(counterexample.contains('5'));
            }
            other => panic!("expected LawViolation, got {other:?}"),
        }
    }

    #[test]
    fn test_generated_samples() {
        let mut n = 0i64;
        let report = check_monoid_generated(
            &IntegerAddition,
            || {
                n += 17;
                n
            },
            4,
        )
        .unwrap();
        assert_eq!(report.triples_checked, 64);
    }

    #[test]
    fn test_lifted_category_check() {
        let lifted = Lifted::new(BoolAnd);
        let report = check_category(&lifted, &[()], &[true, false]).unwrap();
        // 2^3 triples, all composable in a one-object category
        assert_eq!(report.triples_checked, 8);
        assert_eq!(report.identities_checked, 4);
    }

    #[test]
    fn test_law_display_names_equation() {
        assert!(Law::Associativity.to_string().contains("(x·y)·z"));
        assert!(Law::LeftIdentity.to_string().contains("e·x"));
    }
}
