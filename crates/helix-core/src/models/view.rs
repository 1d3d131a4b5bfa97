use serde::Serialize;

/// The four mutually exclusive render targets.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum View {
    LoadingIndicator,
    LoginForm,
    HrDashboard,
    EmployeeDashboard,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LoadingIndicator => "loading_indicator",
            Self::LoginForm => "login_form",
            Self::HrDashboard => "hr_dashboard",
            Self::EmployeeDashboard => "employee_dashboard",
        }
    }

    pub fn is_dashboard(&self) -> bool {
        matches!(self, Self::HrDashboard | Self::EmployeeDashboard)
    }
}
