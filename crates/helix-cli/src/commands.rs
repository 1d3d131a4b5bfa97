use crate::tab::Tab;

use helix_core::Rating;

use clap::Subcommand;

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Sign in. The role follows from the email address.
    Login {
        #[arg(long)]
        email: String,

        /// Accepted for form parity; never checked
        #[arg(long, default_value = "")]
        password: String,
    },

    /// Sign out and clear the persisted session
    Logout,

    /// Print the signed-in identity
    Whoami,

    /// Render the view selected for the current session
    View {
        /// Dashboard tab (defaults to the first tab of the dashboard)
        #[arg(long, value_enum)]
        tab: Option<Tab>,
    },

    /// Ask the HR assistant a question (employees only)
    Chat {
        question: String,

        /// Rate the answer
        #[arg(long, value_parser = parse_rating)]
        rate: Option<Rating>,
    },

    /// Move a corrupted session slot aside
    Repair,
}

fn parse_rating(value: &str) -> Result<Rating, String> {
    value.parse::<Rating>().map_err(|e| e.to_string())
}
