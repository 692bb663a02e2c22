//! Checks the sample custom resources shipped under `deploy/crds` against
//! their CRD schemas.

use serverlessworkflow_crd_check::{check_directory, discover, validate_pairs};

const CRDS_PATH: &str = "../../deploy/crds";

#[test]
fn sample_custom_resources_validate_against_their_crds() {
    let registry = discover(CRDS_PATH).expect("the deploy tree must yield CRD/CR pairs");

    // One pair per resource type of the operator.
    for key in [
        "eventgroup",
        "functiongroup",
        "workflowdefinition",
        "workflowresource",
    ] {
        let pair = registry.get(key).expect(key);
        assert!(pair.schema_file.is_some(), "{key} has no CRD schema file");
        assert!(pair.example_file.is_some(), "{key} has no example CR file");
    }
    assert_eq!(registry.len(), 4);

    let report = validate_pairs(&registry);
    assert!(report.is_success(), "{report}");
    assert_eq!(report.checked(), 4);
}

#[test]
fn check_directory_reports_the_same_outcome() {
    let report = check_directory(CRDS_PATH).expect("the deploy tree must be structurally valid");
    assert!(report.is_success(), "{report}");
}
