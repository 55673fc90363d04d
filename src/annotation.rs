//! Opaque annotation element.
//!
//! The real annotation type belongs to the consuming pipeline and carries
//! whatever attributes that pipeline defines. The container only needs
//! something storable, cloneable, comparable, and serializable, so the
//! placeholder stays fieldless.

use serde::{Deserialize, Serialize};

/// Placeholder for an annotation produced elsewhere in the pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation;
