//! Validates every discovered example CR against its CRD schema.

use std::{
    error::Error as _,
    fmt::{self, Display},
    path::PathBuf,
};

use snafu::{ResultExt, Snafu};
use tracing::debug;

use crate::{
    registry::{Registry, ValidationPair},
    schema::Violations,
};

/// Why one CRD/CR pair failed its check.
///
/// These never abort the run; they are collected into a
/// [`ValidationReport`] so that one broken pair does not hide problems in
/// the others.
#[derive(Debug, Snafu)]
pub enum PairError {
    #[snafu(display("no example CR file was discovered next to CRD schema {schema_file:?}"))]
    MissingExampleFile { schema_file: PathBuf },

    #[snafu(display("no CRD schema file was discovered next to example CR {example_file:?}"))]
    MissingSchemaFile { example_file: PathBuf },

    #[snafu(display("failed to read example CR file {path:?}"))]
    ReadExampleFile {
        source: std::io::Error,
        path: PathBuf,
    },

    #[snafu(display("failed to decode example CR file {path:?} as a YAML document"))]
    DecodeExampleFile {
        source: serde_yaml::Error,
        path: PathBuf,
    },

    #[snafu(display(
        "example CR {path:?} does not validate against CRD {crd_name:?}: {violations}"
    ))]
    DocumentNotValid {
        path: PathBuf,
        crd_name: String,
        violations: Violations,
    },
}

/// One pair that failed, identified by its resource type key.
#[derive(Debug)]
pub struct PairFailure {
    pub key: String,
    pub error: PairError,
}

/// The outcome of checking every pair of a [`Registry`].
#[derive(Debug, Default)]
pub struct ValidationReport {
    checked: usize,
    failures: Vec<PairFailure>,
}

impl ValidationReport {
    /// Whether every checked pair validated successfully.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// How many pairs were checked in total.
    pub fn checked(&self) -> usize {
        self.checked
    }

    pub fn failures(&self) -> &[PairFailure] {
        &self.failures
    }
}

impl Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{checked} resource type pairs checked, {failed} failed",
            checked = self.checked,
            failed = self.failures.len()
        )?;

        for failure in &self.failures {
            write!(f, "\n{key}: {error}", key = failure.key, error = failure.error)?;

            // The snafu display only covers the outermost message, so append
            // the source chain for diagnosable reports.
            let mut source = failure.error.source();
            while let Some(error) = source {
                write!(f, ": {error}")?;
                source = error.source();
            }
        }

        Ok(())
    }
}

/// Validates every pair in `registry`, collecting per-pair failures into the
/// returned report.
///
/// Every pair is attempted; a failing pair never suppresses its siblings.
/// Running this twice over an unchanged registry produces an identical
/// report.
pub fn validate_pairs(registry: &Registry) -> ValidationReport {
    let mut report = ValidationReport::default();

    for (key, pair) in registry.iter() {
        report.checked += 1;
        match validate_pair(pair) {
            Ok(()) => debug!(key, "example CR validates against its CRD schema"),
            Err(error) => report.failures.push(PairFailure {
                key: key.to_owned(),
                error,
            }),
        }
    }

    report
}

fn validate_pair(pair: &ValidationPair) -> Result<(), PairError> {
    match (&pair.schema, &pair.example_file) {
        (Some(schema), Some(example_file)) => {
            let bytes =
                std::fs::read(example_file).context(ReadExampleFileSnafu { path: example_file })?;
            let document: serde_json::Value = serde_yaml::from_slice(&bytes)
                .context(DecodeExampleFileSnafu { path: example_file })?;

            schema
                .validate(&document)
                .map_err(|violations| PairError::DocumentNotValid {
                    path: example_file.clone(),
                    crd_name: schema.crd_name().to_owned(),
                    violations,
                })
        }
        (None, Some(example_file)) => MissingSchemaFileSnafu { example_file }.fail(),
        (_, None) => MissingExampleFileSnafu {
            schema_file: pair.schema_file.clone().unwrap_or_default(),
        }
        .fail(),
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;
    use crate::registry::discover;

    const WIDGET_CRD: &str = indoc! {r#"
        apiVersion: apiextensions.k8s.io/v1
        kind: CustomResourceDefinition
        metadata:
          name: widgets.example.com
        spec:
          group: example.com
          scope: Namespaced
          names:
            kind: Widget
            listKind: WidgetList
            plural: widgets
            singular: widget
          versions:
            - name: v1
              served: true
              storage: true
              schema:
                openAPIV3Schema:
                  type: object
                  properties:
                    spec:
                      type: object
                      required:
                        - parts
                      properties:
                        parts:
                          type: array
                          minItems: 1
                          items:
                            type: string
    "#};

    const GADGET_CRD: &str = indoc! {r#"
        apiVersion: apiextensions.k8s.io/v1
        kind: CustomResourceDefinition
        metadata:
          name: gadgets.example.com
        spec:
          group: example.com
          scope: Namespaced
          names:
            kind: Gadget
            listKind: GadgetList
            plural: gadgets
            singular: gadget
          versions:
            - name: v1
              served: true
              storage: true
              schema:
                openAPIV3Schema:
                  type: object
    "#};

    const WIDGET_CR: &str = indoc! {r#"
        apiVersion: example.com/v1
        kind: Widget
        metadata:
          name: example-widget
        spec:
          parts:
            - gear
    "#};

    const GADGET_CR: &str = indoc! {r#"
        apiVersion: example.com/v1
        kind: Gadget
        metadata:
          name: example-gadget
    "#};

    #[test]
    fn reports_success_when_all_examples_conform() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("example_widget_crd.yaml"), WIDGET_CRD).unwrap();
        std::fs::write(dir.path().join("example_v1_widget_cr.yaml"), WIDGET_CR).unwrap();
        std::fs::write(dir.path().join("example_gadget_crd.yaml"), GADGET_CRD).unwrap();
        std::fs::write(dir.path().join("example_v1_gadget_cr.yaml"), GADGET_CR).unwrap();

        let report = validate_pairs(&discover(dir.path()).unwrap());

        assert!(report.is_success(), "{report}");
        assert_eq!(report.checked(), 2);
    }

    #[test]
    fn a_nonconforming_example_does_not_suppress_its_siblings() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("example_widget_crd.yaml"), WIDGET_CRD).unwrap();
        // Violates minItems: 1 of the parts list.
        std::fs::write(
            dir.path().join("example_v1_widget_cr.yaml"),
            "spec:\n  parts: []\n",
        )
        .unwrap();
        std::fs::write(dir.path().join("example_gadget_crd.yaml"), GADGET_CRD).unwrap();
        std::fs::write(dir.path().join("example_v1_gadget_cr.yaml"), GADGET_CR).unwrap();

        let report = validate_pairs(&discover(dir.path()).unwrap());

        assert_eq!(report.checked(), 2);
        assert_eq!(report.failures().len(), 1);

        let failure = &report.failures()[0];
        assert_eq!(failure.key, "widget");
        assert!(matches!(failure.error, PairError::DocumentNotValid { .. }));
    }

    #[test]
    fn a_schema_without_an_example_fails_that_pair_only() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("example_widget_crd.yaml"), WIDGET_CRD).unwrap();
        std::fs::write(dir.path().join("example_v1_widget_cr.yaml"), WIDGET_CR).unwrap();
        std::fs::write(dir.path().join("example_gadget_crd.yaml"), GADGET_CRD).unwrap();

        let report = validate_pairs(&discover(dir.path()).unwrap());

        assert_eq!(report.checked(), 2);
        assert_eq!(report.failures().len(), 1);
        assert!(matches!(
            report.failures()[0].error,
            PairError::MissingExampleFile { .. }
        ));
    }

    #[test]
    fn an_example_without_a_schema_fails_that_pair_only() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("example_widget_crd.yaml"), WIDGET_CRD).unwrap();
        std::fs::write(dir.path().join("example_v1_widget_cr.yaml"), WIDGET_CR).unwrap();
        std::fs::write(dir.path().join("example_v1_gadget_cr.yaml"), GADGET_CR).unwrap();

        let report = validate_pairs(&discover(dir.path()).unwrap());

        assert_eq!(report.failures().len(), 1);
        assert!(matches!(
            report.failures()[0].error,
            PairError::MissingSchemaFile { .. }
        ));
    }

    #[test]
    fn an_undecodable_example_fails_that_pair_only() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("example_widget_crd.yaml"), WIDGET_CRD).unwrap();
        std::fs::write(dir.path().join("example_v1_widget_cr.yaml"), "{ not yaml").unwrap();
        std::fs::write(dir.path().join("example_gadget_crd.yaml"), GADGET_CRD).unwrap();
        std::fs::write(dir.path().join("example_v1_gadget_cr.yaml"), GADGET_CR).unwrap();

        let report = validate_pairs(&discover(dir.path()).unwrap());

        assert_eq!(report.failures().len(), 1);
        assert!(matches!(
            report.failures()[0].error,
            PairError::DecodeExampleFile { .. }
        ));
    }

    #[test]
    fn rerunning_over_an_unchanged_tree_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("example_widget_crd.yaml"), WIDGET_CRD).unwrap();
        std::fs::write(
            dir.path().join("example_v1_widget_cr.yaml"),
            "spec:\n  parts: []\n",
        )
        .unwrap();
        std::fs::write(dir.path().join("example_gadget_crd.yaml"), GADGET_CRD).unwrap();
        std::fs::write(dir.path().join("example_v1_gadget_cr.yaml"), GADGET_CR).unwrap();

        let first = validate_pairs(&discover(dir.path()).unwrap());
        let second = validate_pairs(&discover(dir.path()).unwrap());

        assert_eq!(first.to_string(), second.to_string());
    }
}
