//! Behavioural integration tests for module-manifest validation.
//!
//! These tests exercise end-to-end scenarios for manifest handling,
//! verifying the complete flow from entity construction (in code or from a
//! decoded manifest document) through validation.

use modspec::domain::{DependencyDirection, Module, ModuleDependency, ModuleVersion};
use modspec::error::ValidationError;
use serde_json::json;

// ============================================================================
// Scenario: A well-formed module identity is accepted
// ============================================================================

/// When a registry client declares a module with a valid namespace, name,
/// type, and version, the system should accept it.
#[test]
fn well_formed_module_identity_is_accepted() {
    // Arrange
    let module = Module::new(
        "com.example",
        "product",
        "library",
        ModuleVersion::new("v1.0.0"),
    );

    // Act
    let result = module.validate();

    // Assert
    assert!(result.is_ok(), "valid module identity should be accepted");
}

// ============================================================================
// Scenario: A fully populated manifest is accepted
// ============================================================================

/// When a manifest declares annotations, a superseded version, and
/// dependencies in both directions, validation should cover every element.
#[test]
fn fully_populated_manifest_is_accepted() {
    // Arrange
    let module = Module::new(
        "com.example",
        "product",
        "library",
        ModuleVersion::new("v1.1.0")
            .with_schema("my-version-schema")
            .with_replaces(vec!["v1.0.0".to_owned()]),
    )
    .with_annotation("com.example.team", "platform")
    .with_annotation("release-channel", "stable")
    .with_dependency(ModuleDependency::new(
        "com.example",
        "runtime",
        "library",
        "2021-08-30",
        DependencyDirection::Upstream,
    ))
    .with_dependency(ModuleDependency::new(
        "com.example",
        "plugin-host",
        "application",
        "v2.0.0-rc1",
        DependencyDirection::Downstream,
    ));

    // Act
    let result = module.validate();

    // Assert
    assert!(
        result.is_ok(),
        "fully populated manifest should be accepted"
    );
}

// ============================================================================
// Scenario: A decoded manifest document is validated before acceptance
// ============================================================================

/// When a manifest arrives as a decoded document, the entities deserialise
/// directly and the subsequent validation decides acceptance.
#[test]
fn decoded_manifest_is_validated_before_acceptance() {
    // Arrange
    let document = json!({
        "namespace": "com.example",
        "name": "product",
        "type": "library",
        "version": { "name": "2021.08.30" },
        "dependencies": [{
            "namespace": "com.example",
            "name": "runtime",
            "type": "library",
            "version": "v1.0.0",
            "direction": "UPSTREAM",
        }],
    });

    // Act
    let module: Module = serde_json::from_value(document).expect("manifest should deserialise");
    let result = module.validate();

    // Assert
    assert!(result.is_ok(), "decoded manifest should be accepted");
}

// ============================================================================
// Scenario: A dependency without a direction is rejected
// ============================================================================

/// When a dependency entry omits its direction, the manifest should be
/// rejected with a failure naming the missing field and the entry.
#[test]
fn dependency_without_direction_is_rejected() {
    // Arrange
    let mut dependency = ModuleDependency::new(
        "com.example",
        "runtime",
        "library",
        "v1.0.0",
        DependencyDirection::Upstream,
    );
    dependency.direction = None;
    let module = Module::new(
        "com.example",
        "product",
        "library",
        ModuleVersion::new("v1.0.0"),
    )
    .with_dependency(dependency);

    // Act
    let result = module.validate();

    // Assert
    match result {
        Err(ValidationError::InvalidDependency { index, source }) => {
            assert_eq!(index, 0);
            assert_eq!(*source, ValidationError::required("direction"));
        }
        other => panic!("expected InvalidDependency, got {other:?}"),
    }
}

// ============================================================================
// Scenario: The first violation is reported and nothing is mutated
// ============================================================================

/// When several fields are invalid, the first failing field in the fixed
/// validation order is reported, and repeating the call yields the same
/// result on the unmutated entity.
#[test]
fn first_violation_wins_and_validation_is_repeatable() {
    // Arrange
    let module = Module {
        namespace: "Invalid Namespace".to_owned(),
        name: String::new(),
        module_type: "&%".to_owned(),
        version: None,
        ..Module::default()
    };

    // Act
    let first = module.validate();
    let second = module.validate();

    // Assert
    assert!(matches!(
        first,
        Err(ValidationError::InvalidCharacter { ref field, .. }) if field == "namespace"
    ));
    assert_eq!(first, second, "validation should be a pure, repeatable read");
}

// ============================================================================
// Scenario: A rejected manifest reports a human-readable reason
// ============================================================================

/// The failure carries enough context for a registry to tell the user which
/// manifest element to fix.
#[test]
fn rejection_reason_is_human_readable() {
    // Arrange
    let module = Module::new(
        "com.example",
        "product",
        "library",
        ModuleVersion::new("v1.0.0"),
    )
    .with_annotation("bad key", "value");

    // Act
    let message = module
        .validate()
        .expect_err("annotation key with a space should be rejected")
        .to_string();

    // Assert
    assert!(
        message.contains("bad key"),
        "message should name the offending key: {message}"
    );
}
