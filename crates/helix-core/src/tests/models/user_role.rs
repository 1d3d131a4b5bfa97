use crate::UserRole;

use std::str::FromStr;

#[test]
fn test_user_role_as_str() {
    assert_eq!(UserRole::Hr.as_str(), "hr");
    assert_eq!(UserRole::Employee.as_str(), "employee");
}

#[test]
fn test_user_role_from_str() {
    assert_eq!(UserRole::from_str("hr").unwrap(), UserRole::Hr);
    assert_eq!(UserRole::from_str("employee").unwrap(), UserRole::Employee);
    assert!(UserRole::from_str("admin").is_err());
    assert!(UserRole::from_str("HR").is_err());
}

#[test]
fn test_user_role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&UserRole::Hr).unwrap(), "\"hr\"");
    assert_eq!(
        serde_json::to_string(&UserRole::Employee).unwrap(),
        "\"employee\""
    );
}

#[test]
fn test_user_role_rejects_unknown_variant_on_deserialize() {
    assert!(serde_json::from_str::<UserRole>("\"manager\"").is_err());
}
