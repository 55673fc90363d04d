//! # uima-stub
//!
//! A minimal stand-in for the annotation container at the core of the UIMA
//! framework. Code written against the real framework can compile and run
//! with this crate in its place: a [`Cas`] holds an ordered sequence of
//! [`Annotation`] values and exposes plain accessors, nothing more.
//!
//! This is deliberately a data holder, not a framework. There is no
//! annotation indexing, no type system, and no pipeline execution here.

pub mod annotation;
pub mod cas;

pub use annotation::Annotation;
pub use cas::Cas;
