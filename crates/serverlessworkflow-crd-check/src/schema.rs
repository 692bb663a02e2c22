//! Loads and compiles the validation schema declared by a
//! CustomResourceDefinition.

use std::{
    fmt::{self, Display},
    path::{Path, PathBuf},
};

use jsonschema::{Draft, Validator};
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use snafu::{OptionExt, ResultExt, Snafu};

type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("failed to read CRD schema file {path:?}"))]
    ReadSchemaFile {
        source: std::io::Error,
        path: PathBuf,
    },

    #[snafu(display("failed to deserialize {path:?} as a CustomResourceDefinition"))]
    DeserializeCrd {
        source: serde_yaml::Error,
        path: PathBuf,
    },

    #[snafu(display("CRD {name:?} declares no version with an OpenAPI v3 schema"))]
    MissingOpenApiSchema { name: String },

    #[snafu(display("failed to convert the OpenAPI v3 schema of CRD {name:?} to JSON"))]
    SchemaToJson {
        source: serde_json::Error,
        name: String,
    },

    #[snafu(display("failed to compile the OpenAPI v3 schema of CRD {name:?}: {reason}"))]
    CompileSchema { name: String, reason: String },
}

/// The compiled `openAPIV3Schema` of one CustomResourceDefinition, ready to
/// validate decoded custom resource documents.
pub struct CompiledSchema {
    validator: Validator,
    crd_name: String,
}

impl CompiledSchema {
    /// Reads the CRD YAML document at `path` and compiles its validation
    /// schema.
    ///
    /// A CRD can declare several versions; the schema of the storage version
    /// is used, falling back to the first declared version. The schema is
    /// compiled as JSON Schema Draft 4, the dialect `openAPIV3Schema`
    /// properties are based on. Kubernetes vendor keywords
    /// (`x-kubernetes-*`, `nullable`) are ignored by the engine.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).context(ReadSchemaFileSnafu { path })?;

        let crd: CustomResourceDefinition =
            serde_yaml::from_slice(&bytes).context(DeserializeCrdSnafu { path })?;
        let crd_name = crd.metadata.name.clone().unwrap_or_default();

        let props = crd
            .spec
            .versions
            .iter()
            .find(|version| version.storage)
            .or_else(|| crd.spec.versions.first())
            .and_then(|version| version.schema.as_ref())
            .and_then(|validation| validation.open_api_v3_schema.as_ref())
            .context(MissingOpenApiSchemaSnafu {
                name: crd_name.clone(),
            })?;

        let schema = serde_json::to_value(props).context(SchemaToJsonSnafu {
            name: crd_name.clone(),
        })?;
        let validator = jsonschema::options()
            .with_draft(Draft::Draft4)
            .build(&schema)
            .map_err(|err| Error::CompileSchema {
                name: crd_name.clone(),
                reason: err.to_string(),
            })?;

        Ok(Self { validator, crd_name })
    }

    /// The `metadata.name` of the CRD this schema was compiled from.
    pub fn crd_name(&self) -> &str {
        &self.crd_name
    }

    /// Validates a decoded document against this schema, reporting every
    /// violated constraint instead of stopping at the first.
    pub fn validate(&self, document: &serde_json::Value) -> Result<(), Violations> {
        let violations: Vec<Violation> = self
            .validator
            .iter_errors(document)
            .map(|error| Violation {
                instance_path: error.instance_path.to_string(),
                message: error.to_string(),
            })
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(Violations(violations))
        }
    }
}

impl fmt::Debug for CompiledSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledSchema")
            .field("crd_name", &self.crd_name)
            .finish_non_exhaustive()
    }
}

/// A single schema constraint violated by a document.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Violation {
    /// JSON pointer to the offending value inside the document.
    pub instance_path: String,

    /// Human readable description of the violated constraint.
    pub message: String,
}

impl Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", self.instance_path, self.message)
        }
    }
}

/// The non-empty list of constraints a document violated.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Violations(Vec<Violation>);

impl Violations {
    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.0.iter().enumerate() {
            let prefix = match i {
                0 => "",
                _ => "; ",
            };
            write!(f, "{prefix}{violation}")?;
        }
        Ok(())
    }
}
