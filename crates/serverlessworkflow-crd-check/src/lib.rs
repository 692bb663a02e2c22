//! Cross-validates the example custom resources shipped with the operator
//! against their CustomResourceDefinition schemas.
//!
//! The harness walks a deploy tree (by convention `deploy/crds/`), pairs
//! `<prefix>_<type>_crd.yaml` schema files with
//! `<prefix>_<group>_<type>_cr.yaml` example files by the `<type>` token,
//! compiles each CRD's `openAPIV3Schema`, and validates every example
//! document against it.
//!
//! Structural problems abort the run: malformed file names, unreadable or
//! uncompilable CRD schemas, traversal errors, and a walk that discovers
//! nothing at all. Individual non-conforming examples do not; they are
//! collected into a [`ValidationReport`] so one failing pair never hides
//! another.

use std::path::Path;

use snafu::Snafu;

pub mod filename;
pub mod registry;
pub mod schema;
pub mod validate;

pub use registry::{Registry, ValidationPair, discover};
pub use validate::{PairFailure, ValidationReport, validate_pairs};

type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(transparent)]
    Discover { source: registry::Error },
}

/// Discovers all CRD/CR pairs under `root` and checks every pair.
///
/// Returns `Err` for structural errors and a [`ValidationReport`] carrying
/// the per-pair outcomes otherwise.
pub fn check_directory(root: impl AsRef<Path>) -> Result<ValidationReport> {
    let registry = registry::discover(root)?;
    Ok(validate::validate_pairs(&registry))
}
