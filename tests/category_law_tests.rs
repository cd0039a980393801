// Copyright 2025 Cowboy AI, LLC.

//! Category law coverage: finite registries, lifted monoids, and the
//! round-trip between a monoid check and its one-object category check

use cim_algebra::{
    check_category, check_monoid, AlgebraError, AlgebraResult, CatMorphism, CatObject, Category,
    FiniteCategory, Law, Lifted, Monoid, ObjectSet, StringConcat,
};
use pretty_assertions::assert_eq;

/// The cyclic monoid Z/3 written out as a one-object finite category:
/// morphisms r0 (identity), r1, r2 with rotation composition.
fn z3_category() -> FiniteCategory {
    let mut cat = FiniteCategory::new("Z3");
    cat.add_object(CatObject::new("*")).unwrap();
    // id_* plays the role of r0
    cat.add_morphism(CatMorphism::new("r1", "*", "*")).unwrap();
    cat.add_morphism(CatMorphism::new("r2", "*", "*")).unwrap();

    cat.define_composition("r1", "r1", "r2").unwrap();
    cat.define_composition("r1", "r2", "id_*").unwrap();
    cat.define_composition("r2", "r1", "id_*").unwrap();
    cat.define_composition("r2", "r2", "r1").unwrap();
    cat
}

#[test]
fn z3_satisfies_the_category_laws() {
    let cat = z3_category();
    cat.verify_laws().unwrap();

    let objects: Vec<String> = cat.objects().sample(8);
    let morphisms: Vec<String> = cat.morphisms.keys().cloned().collect();
    let report = check_category(&cat, &objects, &morphisms).unwrap();
    // 3 morphisms, one object: every one of the 27 triples is composable
    assert_eq!(report.triples_checked, 27);
}

#[test]
fn finite_category_serializes_as_data() {
    let cat = z3_category();
    let json = serde_json::to_string_pretty(&cat).unwrap();
    let back: FiniteCategory = serde_json::from_str(&json).unwrap();

    assert_eq!(cat.objects, back.objects);
    assert_eq!(cat.morphisms, back.morphisms);
    assert_eq!(cat.compositions, back.compositions);
    assert_eq!(cat.identities, back.identities);
    back.verify_laws().unwrap();
}

#[test]
fn composing_misaligned_morphisms_is_a_type_mismatch() {
    let mut cat = FiniteCategory::new("TwoArrows");
    cat.add_object(CatObject::new("A")).unwrap();
    cat.add_object(CatObject::new("B")).unwrap();
    cat.add_object(CatObject::new("C")).unwrap();
    cat.add_morphism(CatMorphism::new("f", "A", "B")).unwrap();
    cat.add_morphism(CatMorphism::new("g", "B", "C")).unwrap();

    // g after f is fine boundary-wise (though undefined in the table);
    // f after g is a boundary error
    let err = cat.compose(&"f".to_string(), &"g".to_string()).unwrap_err();
    match err {
        AlgebraError::TypeMismatch { target, source } => {
            assert_eq!(target, "C");
            assert_eq!(source, "A");
        }
        other => panic!("expected TypeMismatch, got {other}"),
    }
}

#[test]
fn lifting_preserves_the_check_verdict() {
    let samples = vec!["".to_string(), "ab".to_string(), "c".to_string()];

    let monoid_report = check_monoid(&StringConcat, &samples).unwrap();
    let lifted = Lifted::new(StringConcat);
    let category_report = check_category(&lifted, &[()], &samples).unwrap();

    // Same samples, same equations: the two checks evaluate the same work
    assert_eq!(monoid_report, category_report);
}

#[test]
fn lifting_preserves_the_violated_law() {
    struct AbsDiff;
    impl Monoid for AbsDiff {
        type Elem = i64;
        fn unit(&self) -> i64 {
            0
        }
        fn multiply(&self, a: &i64, b: &i64) -> i64 {
            (a - b).abs()
        }
    }

    fn violated_law(result: AlgebraResult<cim_algebra::LawReport>) -> Law {
        match result.unwrap_err() {
            AlgebraError::LawViolation { law, .. } => law,
            other => panic!("expected LawViolation, got {other}"),
        }
    }

    let samples = [2i64, 1];
    let direct = violated_law(check_monoid(&AbsDiff, &samples));
    let lifted = violated_law(check_category(&Lifted::new(AbsDiff), &[()], &samples));
    assert_eq!(direct, lifted);
    assert_eq!(direct, Law::Associativity);
}

/// Integers with a morphism a -> b exactly when a <= b: a thin category
/// with infinitely many objects, enumerated lazily.
struct LeqCategory;

impl Category for LeqCategory {
    type Object = i64;
    type Morphism = (i64, i64);

    fn objects(&self) -> ObjectSet<i64> {
        ObjectSet::generated(|| 0i64..)
    }

    fn source(&self, m: &(i64, i64)) -> AlgebraResult<i64> {
        Ok(m.0)
    }

    fn target(&self, m: &(i64, i64)) -> AlgebraResult<i64> {
        Ok(m.1)
    }

    fn identity(&self, object: &i64) -> AlgebraResult<(i64, i64)> {
        Ok((*object, *object))
    }

    fn compose(&self, g: &(i64, i64), f: &(i64, i64)) -> AlgebraResult<(i64, i64)> {
        if f.1 != g.0 {
            return Err(AlgebraError::TypeMismatch {
                target: f.1.to_string(),
                source: g.0.to_string(),
            });
        }
        Ok((f.0, g.1))
    }
}

#[test]
fn leq_category_objects_stay_lazy() {
    let objects = LeqCategory.objects();
    assert_eq!(objects.len(), None);
    assert_eq!(objects.sample(4), vec![0, 1, 2, 3]);
}

#[test]
fn leq_category_laws_hold_on_samples() {
    let objects = LeqCategory.objects().sample(5);
    let morphisms = vec![(0, 1), (1, 2), (0, 2), (2, 4), (3, 3)];
    let report = check_category(&LeqCategory, &objects, &morphisms).unwrap();
    assert!(report.identities_checked >= morphisms.len() * 2);
}

#[test]
fn leq_category_rejects_gaps() {
    let err = LeqCategory.compose(&(3, 4), &(0, 1)).unwrap_err();
    assert!(matches!(err, AlgebraError::TypeMismatch { .. }));
}
