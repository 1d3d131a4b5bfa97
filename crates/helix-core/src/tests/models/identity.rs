use crate::{DEFAULT_HR_EMAIL, Identity, UserRole};

use chrono::{TimeZone, Utc};
use googletest::assert_that;
use googletest::prelude::{eq, none, some};

#[test]
fn given_hr_email_when_sign_in_then_hr_profile() {
    // When
    let identity = Identity::sign_in("hr@helix.com", DEFAULT_HR_EMAIL);

    // Then
    assert_that!(identity.role(), eq(UserRole::Hr));
    assert_that!(identity.id(), eq("hr-1"));
    assert_that!(identity.email(), eq("hr@helix.com"));
    assert_that!(identity.name(), some(eq("HR Manager")));
    assert_that!(identity.department(), some(eq("Human Resources")));
    assert!(identity.is_hr());
}

#[test]
fn given_other_email_when_sign_in_then_employee_profile() {
    // When
    let identity = Identity::sign_in("alice@company.com", DEFAULT_HR_EMAIL);

    // Then
    assert_that!(identity.role(), eq(UserRole::Employee));
    assert_that!(identity.id(), eq("emp-1"));
    assert_that!(identity.email(), eq("alice@company.com"));
    assert_that!(identity.name(), some(eq("John Doe")));
    assert_that!(identity.department(), some(eq("Engineering")));
}

#[test]
fn given_near_miss_hr_email_when_sign_in_then_employee() {
    for email in ["HR@helix.com", " hr@helix.com", "hr@helix.com.evil", ""] {
        let identity = Identity::sign_in(email, DEFAULT_HR_EMAIL);
        assert_that!(identity.role(), eq(UserRole::Employee));
    }
}

#[test]
fn given_custom_hr_email_when_sign_in_then_only_that_address_is_hr() {
    let hr = Identity::sign_in("people@acme.io", "people@acme.io");
    let default_hr = Identity::sign_in("hr@helix.com", "people@acme.io");

    assert_that!(hr.role(), eq(UserRole::Hr));
    assert_that!(default_hr.role(), eq(UserRole::Employee));
}

#[test]
fn given_fixed_instant_when_sign_in_at_then_created_at_is_iso_millis_utc() {
    // Given
    let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();

    // When
    let identity = Identity::sign_in_at("alice@company.com", DEFAULT_HR_EMAIL, at);

    // Then
    assert_that!(identity.created_at(), eq("2024-01-02T03:04:05.000Z"));
}

#[test]
fn given_identity_when_serialize_then_uses_wire_field_names() {
    let identity = Identity::sign_in("hr@helix.com", DEFAULT_HR_EMAIL);

    let value = serde_json::to_value(&identity).unwrap();

    assert_that!(value["id"].as_str(), some(eq("hr-1")));
    assert_that!(value["role"].as_str(), some(eq("hr")));
    assert_that!(value["department"].as_str(), some(eq("Human Resources")));
    assert!(value.get("created_at").is_some());
}

#[test]
fn given_valid_data_when_serialize_roundtrip_then_preserves_all_fields() {
    let original = Identity::sign_in("alice@company.com", DEFAULT_HR_EMAIL);

    let json = serde_json::to_string(&original).unwrap();
    let restored: Identity = serde_json::from_str(&json).unwrap();

    assert_eq!(original, restored);
}

#[test]
fn given_missing_optional_fields_when_deserialize_then_defaults_to_none() {
    let json = r#"{"id":"emp-9","email":"x@y.z","role":"employee","created_at":"2024-01-01T00:00:00.000Z"}"#;

    let identity: Identity = serde_json::from_str(json).unwrap();

    assert_that!(identity.name(), none());
    assert_that!(identity.department(), none());
    assert_that!(identity.first_name(), none());
}

#[test]
fn given_missing_role_when_deserialize_then_error() {
    let json = r#"{"id":"emp-1","email":"x@y.z","name":"John Doe","created_at":"2024-01-01T00:00:00.000Z"}"#;

    assert!(serde_json::from_str::<Identity>(json).is_err());
}

#[test]
fn given_multi_word_name_when_first_name_then_first_word() {
    let identity = Identity::sign_in("alice@company.com", DEFAULT_HR_EMAIL);

    assert_that!(identity.first_name(), some(eq("John")));
}
