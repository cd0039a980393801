// Copyright 2025 Cowboy AI, LLC.

//! Monoid abstraction - a set with an associative operation and identity
//!
//! A monoid is the one-object degenerate case of a category: its morphisms
//! are the elements of the carrier set, composition is `multiply`, and the
//! single identity morphism is `unit`. Instances are stateless values,
//! constructed once and reused for every check.

use std::fmt::Debug;

pub mod instances;

pub use instances::{
    BoolAnd, BoolOr, IntegerAddition, IntegerMultiplication, StringConcat, Trivial, VecConcat,
};

/// A monoid over a carrier set
///
/// Implementations must satisfy the monoid laws:
/// - `multiply` is associative: `multiply(multiply(a, b), c) == multiply(a, multiply(b, c))`
/// - `unit` is a two-sided identity: `multiply(unit(), a) == a == multiply(a, unit())`
///
/// The laws are not enforceable by the type system; use the checkers in
/// [`crate::laws`] to verify them on sampled elements.
pub trait Monoid {
    /// The carrier set of the monoid
    type Elem: Clone + Debug;

    /// The identity element
    fn unit(&self) -> Self::Elem;

    /// The associative binary operation, total over the carrier
    fn multiply(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem;

    /// Fold a sequence of elements down to one, starting from `unit`
    fn multiply_all<'a, I>(&self, elems: I) -> Self::Elem
    where
        Self: Sized,
        I: IntoIterator<Item = &'a Self::Elem>,
        Self::Elem: 'a,
    {
        elems
            .into_iter()
            .fold(self.unit(), |acc, e| self.multiply(&acc, e))
    }

    /// Human-readable description of this instance
    fn description(&self) -> String {
        "monoid".to_string()
    }
}
