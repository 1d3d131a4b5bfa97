use crate::{CliError, CliResult};

use clap::ValueEnum;

/// Tab names accepted on the command line, across both dashboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Tab {
    Chat,
    Progress,
    Overview,
    Queries,
    Employees,
    Policies,
}

impl Tab {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chat => "chat",
            Self::Progress => "progress",
            Self::Overview => "overview",
            Self::Queries => "queries",
            Self::Employees => "employees",
            Self::Policies => "policies",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmployeeTab {
    #[default]
    Chat,
    Progress,
}

impl TryFrom<Tab> for EmployeeTab {
    type Error = CliError;

    #[track_caller]
    fn try_from(tab: Tab) -> CliResult<Self> {
        match tab {
            Tab::Chat => Ok(Self::Chat),
            Tab::Progress => Ok(Self::Progress),
            other => Err(CliError::tab(other.as_str(), "employee dashboard")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HrTab {
    #[default]
    Overview,
    Queries,
    Employees,
    Policies,
}

impl HrTab {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Queries => "Query Analytics",
            Self::Employees => "Employee Progress",
            Self::Policies => "Policy Management",
        }
    }
}

impl TryFrom<Tab> for HrTab {
    type Error = CliError;

    #[track_caller]
    fn try_from(tab: Tab) -> CliResult<Self> {
        match tab {
            Tab::Overview => Ok(Self::Overview),
            Tab::Queries => Ok(Self::Queries),
            Tab::Employees => Ok(Self::Employees),
            Tab::Policies => Ok(Self::Policies),
            other => Err(CliError::tab(other.as_str(), "HR dashboard")),
        }
    }
}
