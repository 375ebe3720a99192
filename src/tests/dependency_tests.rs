//! Unit tests for dependency entries and the direction enumeration.

use super::fixtures::valid_dependency;
use crate::domain::{DependencyDirection, ModuleDependency};
use crate::error::ValidationError;
use crate::validation::rules;
use rstest::rstest;

#[rstest]
fn empty_list_passes() {
    assert!(rules::validate_module_dependencies(&[]).is_ok());
}

#[rstest]
fn valid_entries_pass(valid_dependency: ModuleDependency) {
    assert!(rules::validate_module_dependencies(&[valid_dependency]).is_ok());
}

#[rstest]
fn invalid_entry_fails_with_its_position(valid_dependency: ModuleDependency) {
    let invalid = ModuleDependency {
        name: "INVALID PRODUCT".to_owned(),
        ..valid_dependency.clone()
    };
    let result = rules::validate_module_dependencies(&[valid_dependency, invalid]);
    assert!(matches!(
        result,
        Err(ValidationError::InvalidDependency { index: 1, .. })
    ));
}

#[rstest]
fn empty_dependency_fails() {
    assert!(ModuleDependency::default().validate().is_err());
}

#[rstest]
fn valid_dependency_passes(valid_dependency: ModuleDependency) {
    assert!(valid_dependency.validate().is_ok());
}

#[rstest]
fn invalid_namespace_fails(valid_dependency: ModuleDependency) {
    let dependency = ModuleDependency {
        namespace: "&%".to_owned(),
        ..valid_dependency
    };
    assert!(dependency.validate().is_err());
}

#[rstest]
fn uppercase_name_fails(valid_dependency: ModuleDependency) {
    let dependency = ModuleDependency {
        name: "PRODUCT".to_owned(),
        ..valid_dependency
    };
    assert!(dependency.validate().is_err());
}

#[rstest]
fn invalid_type_fails(valid_dependency: ModuleDependency) {
    let dependency = ModuleDependency {
        module_type: "&%".to_owned(),
        ..valid_dependency
    };
    assert!(dependency.validate().is_err());
}

#[rstest]
fn invalid_version_fails(valid_dependency: ModuleDependency) {
    let dependency = ModuleDependency {
        version: "&%".to_owned(),
        ..valid_dependency
    };
    assert!(dependency.validate().is_err());
}

#[rstest]
fn date_like_version_passes(valid_dependency: ModuleDependency) {
    let dependency = ModuleDependency {
        version: "2021-08-30".to_owned(),
        ..valid_dependency
    };
    assert!(dependency.validate().is_ok());
}

#[rstest]
fn unset_direction_is_required(valid_dependency: ModuleDependency) {
    let dependency = ModuleDependency {
        direction: None,
        ..valid_dependency
    };
    assert_eq!(
        dependency.validate(),
        Err(ValidationError::required("direction")),
    );
}

#[rstest]
fn setting_direction_makes_the_entry_valid(valid_dependency: ModuleDependency) {
    let mut dependency = ModuleDependency {
        direction: None,
        ..valid_dependency
    };
    assert!(dependency.validate().is_err());

    dependency.direction = Some(DependencyDirection::Upstream);
    assert!(dependency.validate().is_ok());
}

#[rstest]
#[case(DependencyDirection::Upstream, "UPSTREAM")]
#[case(DependencyDirection::Downstream, "DOWNSTREAM")]
fn direction_wire_names(#[case] direction: DependencyDirection, #[case] wire: &str) {
    assert_eq!(direction.as_str(), wire);
    assert_eq!(direction.to_string(), wire);
    assert_eq!(wire.parse::<DependencyDirection>(), Ok(direction));
}

#[rstest]
#[case("")]
#[case("upstream")]
#[case("Upstream")]
#[case("SIDEWAYS")]
fn unrecognised_direction_fails_with_invalid_enum(#[case] value: &str) {
    assert_eq!(
        value.parse::<DependencyDirection>(),
        Err(ValidationError::InvalidEnum {
            field: "direction".to_owned(),
            value: value.to_owned(),
        }),
    );
}

#[rstest]
fn absent_and_unrecognised_direction_are_distinct_failures(valid_dependency: ModuleDependency) {
    let absent = ModuleDependency {
        direction: None,
        ..valid_dependency
    };
    assert!(matches!(
        absent.validate(),
        Err(ValidationError::Required { .. })
    ));
    assert!(matches!(
        "SIDEWAYS".parse::<DependencyDirection>(),
        Err(ValidationError::InvalidEnum { .. })
    ));
}
