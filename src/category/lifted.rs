// Copyright 2025 Cowboy AI, LLC.

//! Lifting a monoid to a one-object category
//!
//! The single object is the carrier set itself, the morphisms are its
//! elements, composition is `multiply`, and the identity is `unit`. Since
//! every morphism shares the one object, composition is total and
//! `TypeMismatch` is unreachable.

use super::{Category, ObjectSet};
use crate::errors::AlgebraResult;
use crate::monoid::Monoid;

/// A monoid viewed as a category with one object
#[derive(Debug, Clone)]
pub struct Lifted<M: Monoid> {
    monoid: M,
}

impl<M: Monoid> Lifted<M> {
    /// Lift a monoid into its one-object category
    pub fn new(monoid: M) -> Self {
        Self { monoid }
    }

    /// The underlying monoid
    pub fn monoid(&self) -> &M {
        &self.monoid
    }
}

impl<M: Monoid> Category for Lifted<M> {
    type Object = ();
    type Morphism = M::Elem;

    fn objects(&self) -> ObjectSet<()> {
        ObjectSet::finite(vec![()])
    }

    fn source(&self, _m: &M::Elem) -> AlgebraResult<()> {
        Ok(())
    }

    fn target(&self, _m: &M::Elem) -> AlgebraResult<()> {
        Ok(())
    }

    fn identity(&self, _object: &()) -> AlgebraResult<M::Elem> {
        Ok(self.monoid.unit())
    }

    fn compose(&self, g: &M::Elem, f: &M::Elem) -> AlgebraResult<M::Elem> {
        Ok(self.monoid.multiply(g, f))
    }
}
