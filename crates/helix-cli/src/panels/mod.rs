//! Plain-text renderings of the four views.
//!
//! Panels read the session store for the signed-in identity and otherwise
//! only show fixture data.

mod employee_dashboard;
mod hr_dashboard;
mod loading_indicator;
mod login_form;

pub use employee_dashboard::EmployeeDashboard;
pub use hr_dashboard::HrDashboard;
pub use loading_indicator::LoadingIndicator;
pub use login_form::LoginForm;

use helix_core::Identity;

use std::fmt;

const BRAND: &str = "Helix";
const BAR_WIDTH: usize = 20;

/// `Helix | John Doe (Engineering)` style title line.
fn write_header(f: &mut fmt::Formatter<'_>, title: &str, identity: &Identity) -> fmt::Result {
    write!(f, "{title} | {}", identity.name().unwrap_or(identity.email()))?;
    if let Some(department) = identity.department() {
        write!(f, " ({department})")?;
    }
    writeln!(f)
}

/// Tab strip with the active tab in brackets.
fn write_tabs(f: &mut fmt::Formatter<'_>, labels: &[(&str, bool)]) -> fmt::Result {
    let rendered: Vec<String> = labels
        .iter()
        .map(|(label, active)| {
            if *active {
                format!("[{label}]")
            } else {
                label.to_string()
            }
        })
        .collect();
    writeln!(f, "{}", rendered.join("  "))
}

/// Horizontal bar filled in proportion to `value / max`.
pub(crate) fn bar(value: u32, max: u32) -> String {
    let filled = if max == 0 {
        0
    } else {
        ((value.min(max) as usize) * BAR_WIDTH + (max as usize) / 2) / max as usize
    };
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}
