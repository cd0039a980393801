// Copyright 2025 Cowboy AI, LLC.

//! Typed morphisms with compile-time composition
//!
//! Where [`FiniteCategory`](super::FiniteCategory) names morphisms by id and
//! records composition in a table, typed morphisms make the boundaries part
//! of the type: `compose: (Y -> Z) x (X -> Y) -> (X -> Z)`. A mismatched
//! pair simply does not type-check, so no runtime boundary check is needed.

use std::marker::PhantomData;

/// A morphism from `Source` to `Target`
pub trait Morphism {
    /// Source object type
    type Source;

    /// Target object type
    type Target;

    /// Apply the morphism
    fn apply(&self, source: Self::Source) -> Self::Target;

    /// Get a human-readable description
    fn description(&self) -> String;
}

/// Composition of two morphisms: `second ∘ first`
pub struct MorphismComposition<F, G, A, B, C>
where
    F: Morphism<Source = A, Target = B>,
    G: Morphism<Source = B, Target = C>,
{
    first: F,
    second: G,
    _phantom: PhantomData<(A, B, C)>,
}

impl<F, G, A, B, C> MorphismComposition<F, G, A, B, C>
where
    F: Morphism<Source = A, Target = B>,
    G: Morphism<Source = B, Target = C>,
{
    /// Create a new composition applying `first` then `second`
    pub fn new(first: F, second: G) -> Self {
        Self {
            first,
            second,
            _phantom: PhantomData,
        }
    }
}

impl<F, G, A, B, C> Morphism for MorphismComposition<F, G, A, B, C>
where
    F: Morphism<Source = A, Target = B>,
    G: Morphism<Source = B, Target = C>,
{
    type Source = A;
    type Target = C;

    fn apply(&self, source: Self::Source) -> Self::Target {
        self.second.apply(self.first.apply(source))
    }

    fn description(&self) -> String {
        format!("{} ∘ {}", self.second.description(), self.first.description())
    }
}

/// Compose two morphisms: `compose(g, f)` applies `f` first
pub fn compose<F, G, A, B, C>(g: G, f: F) -> MorphismComposition<F, G, A, B, C>
where
    F: Morphism<Source = A, Target = B>,
    G: Morphism<Source = B, Target = C>,
{
    MorphismComposition::new(f, g)
}

/// Identity morphism
pub struct MorphismIdentity<T> {
    _phantom: PhantomData<T>,
}

impl<T> MorphismIdentity<T> {
    /// Create a new identity morphism that returns its input unchanged
    pub fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<T> Default for MorphismIdentity<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Morphism for MorphismIdentity<T> {
    type Source = T;
    type Target = T;

    fn apply(&self, source: Self::Source) -> Self::Target {
        source
    }

    fn description(&self) -> String {
        "identity".to_string()
    }
}

/// A named morphism wrapping a plain function
pub struct FnMorphism<A, B> {
    name: String,
    f: Box<dyn Fn(A) -> B>,
}

impl<A, B> FnMorphism<A, B> {
    /// Wrap a function as a morphism
    pub fn new(name: impl Into<String>, f: impl Fn(A) -> B + 'static) -> Self {
        Self {
            name: name.into(),
            f: Box::new(f),
        }
    }
}

impl<A, B> Morphism for FnMorphism<A, B> {
    type Source = A;
    type Target = B;

    fn apply(&self, source: Self::Source) -> Self::Target {
        (self.f)(source)
    }

    fn description(&self) -> String {
        self.name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_morphism() {
        let id = MorphismIdentity::<String>::new();
        let input = "test".to_string();
        assert_eq!(id.apply(input.clone()), input);
    }

    #[test]
    fn test_morphism_composition() {
        let add_one = FnMorphism::new("add_one", |n: i32| n + 1);
        let double = FnMorphism::new("double", |n: i32| n * 2);

        let composition = compose(double, add_one);

        // (5 + 1) * 2 = 12
        assert_eq!(composition.apply(5), 12);
        assert_eq!(composition.description(), "double ∘ add_one");
    }

    #[test]
    fn test_composition_across_types() {
        let len = FnMorphism::new("len", |s: String| s.len());
        let is_even = FnMorphism::new("is_even", |n: usize| n % 2 == 0);

        let composition = compose(is_even, len);
        assert!(composition.apply("four".to_string()));
        assert!(!composition.apply("three".to_string()));
    }

    #[test]
    fn test_identity_is_neutral_under_composition() {
        let double = FnMorphism::new("double", |n: i32| n * 2);
        let left = compose(MorphismIdentity::new(), double);
        assert_eq!(left.apply(21), 42);

        let double = FnMorphism::new("double", |n: i32| n * 2);
        let right = compose(double, MorphismIdentity::new());
        assert_eq!(right.apply(21), 42);
    }
}
