use crate::View;

#[test]
fn test_view_is_dashboard() {
    assert!(View::HrDashboard.is_dashboard());
    assert!(View::EmployeeDashboard.is_dashboard());
    assert!(!View::LoginForm.is_dashboard());
    assert!(!View::LoadingIndicator.is_dashboard());
}

#[test]
fn test_view_serializes_snake_case() {
    assert_eq!(
        serde_json::to_string(&View::HrDashboard).unwrap(),
        "\"hr_dashboard\""
    );
    assert_eq!(View::LoadingIndicator.as_str(), "loading_indicator");
}
