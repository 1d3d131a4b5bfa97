//! helix-cli library
//!
//! Exposes the command surface and the text panels so they can be driven
//! from tests without spawning the binary.

pub(crate) mod app;
pub(crate) mod cli;
pub(crate) mod commands;
pub(crate) mod error;
pub(crate) mod logger;
pub(crate) mod output;
pub(crate) mod panels;
pub(crate) mod tab;

#[cfg(test)]
mod tests;

pub use app::App;
pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, CliResult};
pub use logger::initialize as initialize_logger;
pub use output::report;
pub use panels::{EmployeeDashboard, HrDashboard, LoadingIndicator, LoginForm};
pub use tab::{EmployeeTab, HrTab, Tab};
