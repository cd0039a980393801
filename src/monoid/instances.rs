// Copyright 2025 Cowboy AI, LLC.

//! Concrete monoid instances
//!
//! The standard didactic examples: integers under addition and
//! multiplication, strings and vectors under concatenation, booleans under
//! AND and OR, and the trivial one-element monoid over the unit type.

use std::fmt::Debug;
use std::marker::PhantomData;

use super::Monoid;

/// Integers under addition, unit 0
///
/// Uses wrapping arithmetic so associativity holds over the whole machine
/// range instead of panicking on overflow in debug builds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntegerAddition;

impl Monoid for IntegerAddition {
    type Elem = i64;

    fn unit(&self) -> i64 {
        0
    }

    fn multiply(&self, a: &i64, b: &i64) -> i64 {
        a.wrapping_add(*b)
    }

    fn description(&self) -> String {
        "(i64, +, 0)".to_string()
    }
}

/// Integers under multiplication, unit 1
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntegerMultiplication;

impl Monoid for IntegerMultiplication {
    type Elem = i64;

    fn unit(&self) -> i64 {
        1
    }

    fn multiply(&self, a: &i64, b: &i64) -> i64 {
        a.wrapping_mul(*b)
    }

    fn description(&self) -> String {
        "(i64, *, 1)".to_string()
    }
}

/// Strings under concatenation, unit `""`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringConcat;

impl Monoid for StringConcat {
    type Elem = String;

    fn unit(&self) -> String {
        String::new()
    }

    fn multiply(&self, a: &String, b: &String) -> String {
        let mut out = String::with_capacity(a.len() + b.len());
        out.push_str(a);
        out.push_str(b);
        out
    }

    fn description(&self) -> String {
        "(String, concat, \"\")".to_string()
    }
}

/// Vectors under concatenation, unit `vec![]`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VecConcat<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> VecConcat<T> {
    /// Create the concatenation monoid for `Vec<T>`
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T: Clone + Debug> Monoid for VecConcat<T> {
    type Elem = Vec<T>;

    fn unit(&self) -> Vec<T> {
        Vec::new()
    }

    fn multiply(&self, a: &Vec<T>, b: &Vec<T>) -> Vec<T> {
        let mut out = Vec::with_capacity(a.len() + b.len());
        out.extend_from_slice(a);
        out.extend_from_slice(b);
        out
    }

    fn description(&self) -> String {
        "(Vec, concat, [])".to_string()
    }
}

/// Booleans under AND, unit `true`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoolAnd;

impl Monoid for BoolAnd {
    type Elem = bool;

    fn unit(&self) -> bool {
        true
    }

    fn multiply(&self, a: &bool, b: &bool) -> bool {
        *a && *b
    }

    fn description(&self) -> String {
        "(bool, &&, true)".to_string()
    }
}

/// Booleans under OR, unit `false`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoolOr;

impl Monoid for BoolOr {
    type Elem = bool;

    fn unit(&self) -> bool {
        false
    }

    fn multiply(&self, a: &bool, b: &bool) -> bool {
        *a || *b
    }

    fn description(&self) -> String {
        "(bool, ||, false)".to_string()
    }
}

/// The trivial monoid: one element, which is also the unit
///
/// The carrier is `()` - a set containing exactly one value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Trivial;

impl Monoid for Trivial {
    type Elem = ();

    fn unit(&self) {}

    fn multiply(&self, _a: &(), _b: &()) {}

    fn description(&self) -> String {
        "trivial".to_string()
    }
}
