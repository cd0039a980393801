// Copyright 2025 Cowboy AI, LLC.

//! Object collections, finite or infinite
//!
//! Infinite collections ("all integers") are never materialized: they are
//! either a restartable lazy sequence or an opaque membership predicate.

use std::fmt;

/// A factory producing a fresh iterator over the same sequence each call
type SequenceFactory<O> = Box<dyn Fn() -> Box<dyn Iterator<Item = O>>>;

/// The object collection of a category
pub enum ObjectSet<O> {
    /// A finite, fully enumerated collection
    Finite(Vec<O>),

    /// A lazy, potentially infinite, restartable sequence
    Generated(SequenceFactory<O>),

    /// An opaque membership predicate for domains with no useful enumeration
    Membership(Box<dyn Fn(&O) -> bool>),
}

impl<O> ObjectSet<O> {
    /// A finite collection from a vector
    pub fn finite(objects: Vec<O>) -> Self {
        ObjectSet::Finite(objects)
    }

    /// A lazy sequence; `factory` must yield the same sequence each call
    pub fn generated<F, I>(factory: F) -> Self
    where
        F: Fn() -> I + 'static,
        I: Iterator<Item = O> + 'static,
    {
        ObjectSet::Generated(Box::new(move || Box::new(factory())))
    }

    /// A membership predicate
    pub fn membership<P>(predicate: P) -> Self
    where
        P: Fn(&O) -> bool + 'static,
    {
        ObjectSet::Membership(Box::new(predicate))
    }

    /// Number of objects, if the collection is finite
    pub fn len(&self) -> Option<usize> {
        match self {
            ObjectSet::Finite(objects) => Some(objects.len()),
            _ => None,
        }
    }

    /// Whether the collection is finite and empty
    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }

    /// Iterate the collection; `None` for predicate-only domains
    pub fn iter(&self) -> Option<Box<dyn Iterator<Item = O> + '_>>
    where
        O: Clone,
    {
        match self {
            ObjectSet::Finite(objects) => Some(Box::new(objects.iter().cloned())),
            ObjectSet::Generated(factory) => Some(factory()),
            ObjectSet::Membership(_) => None,
        }
    }

    /// Take up to `n` objects as a sample; empty for predicate-only domains
    pub fn sample(&self, n: usize) -> Vec<O>
    where
        O: Clone,
    {
        self.iter().map(|it| it.take(n).collect()).unwrap_or_default()
    }

    /// Membership test; `None` when the collection cannot decide it
    /// without scanning an unbounded sequence
    pub fn contains(&self, object: &O) -> Option<bool>
    where
        O: PartialEq,
    {
        match self {
            ObjectSet::Finite(objects) => Some(objects.contains(object)),
            ObjectSet::Generated(_) => None,
            ObjectSet::Membership(predicate) => Some(predicate(object)),
        }
    }
}

impl<O> fmt::Debug for ObjectSet<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectSet::Finite(objects) => write!(f, "ObjectSet::Finite(len={})", objects.len()),
            ObjectSet::Generated(_) => write!(f, "ObjectSet::Generated"),
            ObjectSet::Membership(_) => write!(f, "ObjectSet::Membership"),
        }
    }
}
