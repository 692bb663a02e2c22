//! Classifies the files of a `deploy/crds` tree by their name.
//!
//! The deploy layout encodes the resource type into underscore-delimited
//! file names: CRD schemas are named `<prefix>_<type>_crd.yaml` and example
//! custom resources `<prefix>_<group>_<type>_cr.yaml`. The `<type>` token is
//! the key used to pair a schema with its example.

use snafu::{Snafu, ensure};

const SCHEMA_SUFFIX: &str = "_crd.yaml";
const EXAMPLE_SUFFIX: &str = "_cr.yaml";

const SCHEMA_TOKENS: usize = 3;
const EXAMPLE_TOKENS: usize = 4;

type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display(
        "CRD schema file name {file_name:?} must consist of exactly {SCHEMA_TOKENS} underscore-delimited tokens, found {found}"
    ))]
    MalformedSchemaFileName { file_name: String, found: usize },

    #[snafu(display(
        "example CR file name {file_name:?} must consist of exactly {EXAMPLE_TOKENS} underscore-delimited tokens, found {found}"
    ))]
    MalformedExampleFileName { file_name: String, found: usize },
}

/// What role a file plays in a CRD/CR pair, and for which resource type.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Classification {
    /// A CRD schema file (`<prefix>_<type>_crd.yaml`).
    Schema { key: String },

    /// An example custom resource file (`<prefix>_<group>_<type>_cr.yaml`).
    Example { key: String },

    /// A file that is neither a CRD schema nor an example CR. Such files are
    /// excluded from pairing without deriving a key.
    Unrecognized,
}

/// Derives the role and resource type key of `file_name` (a base name, not a
/// path).
///
/// A name matching one of the two suffixes with the wrong number of tokens
/// is an error, not merely unrecognized: the deploy tree is expected to be
/// well-formed, so a near-miss means a misnamed file that would otherwise go
/// silently unvalidated.
pub fn classify(file_name: &str) -> Result<Classification> {
    let tokens: Vec<&str> = file_name.split('_').collect();

    if file_name.ends_with(SCHEMA_SUFFIX) {
        ensure!(
            tokens.len() == SCHEMA_TOKENS,
            MalformedSchemaFileNameSnafu {
                file_name,
                found: tokens.len(),
            }
        );
        Ok(Classification::Schema {
            key: tokens[1].to_owned(),
        })
    } else if file_name.ends_with(EXAMPLE_SUFFIX) {
        ensure!(
            tokens.len() == EXAMPLE_TOKENS,
            MalformedExampleFileNameSnafu {
                file_name,
                found: tokens.len(),
            }
        );
        Ok(Classification::Example {
            key: tokens[2].to_owned(),
        })
    } else {
        Ok(Classification::Unrecognized)
    }
}
