//! The CAS container.
//!
//! A [`Cas`] is the context object for one processing run: it holds the
//! ordered annotation sequence and hands out borrows of it. The sequence is
//! created empty, may be mutated in place through [`Cas::annotations_mut`],
//! or wholly replaced through [`Cas::set_annotations`].
//!
//! Replacing the sequence takes ownership of the caller's vector; the stored
//! sequence is that vector itself, not a copy. An "absent" sequence is
//! unrepresentable: callers wanting to clear the container pass an empty
//! vector.

use crate::annotation::Annotation;
use serde::{Deserialize, Serialize};

/// A processing context holding an ordered sequence of annotations.
///
/// Insertion order is preserved and duplicates are permitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cas {
    annotations: Vec<Annotation>,
}

impl Cas {
    /// Create a container with an empty annotation sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the current annotation sequence.
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Mutably borrow the annotation sequence.
    ///
    /// Changes made through this borrow are visible to later
    /// [`annotations`](Self::annotations) calls.
    pub fn annotations_mut(&mut self) -> &mut Vec<Annotation> {
        &mut self.annotations
    }

    /// Replace the annotation sequence, taking ownership of the argument.
    pub fn set_annotations(&mut self, annotations: Vec<Annotation>) {
        self.annotations = annotations;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_container_is_empty() {
        assert!(Cas::new().annotations().is_empty());
        assert!(Cas::default().annotations().is_empty());
    }

    #[test]
    fn set_annotations_keeps_the_given_allocation() {
        let annotations = vec![Annotation, Annotation];
        let ptr = annotations.as_ptr();

        let mut cas = Cas::new();
        cas.set_annotations(annotations);

        assert_eq!(cas.annotations().as_ptr(), ptr);
    }
}
