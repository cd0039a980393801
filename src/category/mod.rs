// Copyright 2025 Cowboy AI, LLC.

//! Category abstraction - objects, morphisms, composition, identities
//!
//! A category is a collection of objects together with morphisms between
//! them, a composition operator defined on boundary-compatible pairs, and a
//! per-object identity morphism. Composition must be associative and the
//! identities must be two-sided neutral elements; the checkers in
//! [`crate::laws`] verify both on sampled morphisms.

use std::fmt::Debug;

pub mod finite;
pub mod lifted;
pub mod morphism;
pub mod object_set;

pub use finite::{CatMorphism, CatObject, CompositionRule, FiniteCategory};
pub use lifted::Lifted;
pub use morphism::{FnMorphism, Morphism, MorphismComposition, MorphismIdentity};
pub use object_set::ObjectSet;

use crate::errors::AlgebraResult;

/// A category: objects, morphisms, composition, identities
///
/// `compose(g, f)` is `g ∘ f` - apply `f` first, then `g`. It is defined
/// only when `target(f) == source(g)`; otherwise it fails with
/// [`crate::AlgebraError::TypeMismatch`]. No operation has side effects.
pub trait Category {
    /// Objects of the category
    type Object: Clone + Debug + PartialEq;

    /// Morphisms between objects
    type Morphism: Clone + Debug;

    /// The object collection, possibly infinite
    fn objects(&self) -> ObjectSet<Self::Object>;

    /// Source object of a morphism
    fn source(&self, m: &Self::Morphism) -> AlgebraResult<Self::Object>;

    /// Target object of a morphism
    fn target(&self, m: &Self::Morphism) -> AlgebraResult<Self::Object>;

    /// The identity morphism on an object
    fn identity(&self, object: &Self::Object) -> AlgebraResult<Self::Morphism>;

    /// Compose two morphisms: `compose(g, f)` is `g ∘ f`
    fn compose(&self, g: &Self::Morphism, f: &Self::Morphism) -> AlgebraResult<Self::Morphism>;
}
