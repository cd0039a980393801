// Copyright 2025 Cowboy AI, LLC.

//! # CIM Algebra
//!
//! Category and monoid abstractions with law-checking scaffolding.
//!
//! This crate provides a small set of polymorphic algebraic interfaces and
//! the test scaffolding to verify their laws on sampled inputs:
//! - **Monoid**: a set with an associative operation and identity element
//! - **Category**: objects and morphisms with composition and per-object
//!   identities, including a registry-backed [`FiniteCategory`] and typed
//!   morphisms composed at compile time
//! - **Lifting**: any monoid viewed as a one-object category ([`Lifted`])
//! - **Law checkers**: sampled (or, for finite carriers, exhaustive)
//!   verification of associativity and the identity laws, reporting the
//!   counterexample on failure
//!
//! ## Design Principles
//!
//! 1. **Purity**: every operation is a synchronous function over immutable
//!    values; instances are stateless and reused
//! 2. **Explicit failure**: composition across misaligned boundaries and
//!    law violations are reported as errors, never swallowed
//! 3. **Laws as data**: checks name the violated law and carry the
//!    offending samples
//! 4. **Infinite domains stay lazy**: object collections are enumerated on
//!    demand or described by a predicate, never materialized

#![warn(missing_docs)]

pub mod category;
mod errors;
pub mod laws;
pub mod monoid;

// Re-export core types
pub use category::{
    CatMorphism, CatObject, Category, CompositionRule, FiniteCategory, FnMorphism, Lifted,
    Morphism, MorphismComposition, MorphismIdentity, ObjectSet,
};
pub use errors::{AlgebraError, AlgebraResult};
pub use laws::{
    check_category, check_category_with, check_monoid, check_monoid_generated, check_monoid_with,
    Law, LawReport,
};
pub use monoid::{
    BoolAnd, BoolOr, IntegerAddition, IntegerMultiplication, Monoid, StringConcat, Trivial,
    VecConcat,
};
