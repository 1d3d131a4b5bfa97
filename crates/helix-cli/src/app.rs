use crate::{
    CliResult, Commands, EmployeeDashboard, EmployeeTab, HrDashboard, HrTab, LoadingIndicator,
    LoginForm, Tab,
};

use helix_core::{Rating, View};
use helix_session::{FileStorage, LoadOutcome, SessionStore, ViewRouter};

use serde::Serialize;

use log::{info, warn};

const NOT_SIGNED_IN: &str = "not signed in";

/// One CLI invocation: the session store hydrated from disk plus output
/// settings.
#[derive(Debug)]
pub struct App {
    store: SessionStore<FileStorage>,
    outcome: LoadOutcome,
    pretty: bool,
}

impl App {
    /// Hydrates `store` and keeps the load outcome for `repair`.
    pub fn start(mut store: SessionStore<FileStorage>, pretty: bool) -> Self {
        let outcome = store.initialize();
        if outcome.is_corrupted() {
            warn!("Persisted session is corrupted; run `helix repair` to move it aside");
        }

        Self {
            store,
            outcome,
            pretty,
        }
    }

    pub fn store(&self) -> &SessionStore<FileStorage> {
        &self.store
    }

    pub fn outcome(&self) -> &LoadOutcome {
        &self.outcome
    }

    /// Runs `command` and returns what should be printed on stdout.
    pub fn execute(&mut self, command: Commands) -> CliResult<String> {
        match command {
            Commands::Login { email, password } => {
                let pretty = self.pretty;
                let identity = self.store.login(&email, &password)?;
                to_json(identity, pretty)
            }
            Commands::Logout => {
                self.store.logout()?;
                Ok(String::from("signed out"))
            }
            Commands::Whoami => match self.store.identity() {
                Some(identity) => to_json(identity, self.pretty),
                None => Ok(String::from(NOT_SIGNED_IN)),
            },
            Commands::View { tab } => self.render(tab),
            Commands::Chat { question, rate } => self.chat(&question, rate),
            Commands::Repair => self.repair(),
        }
    }

    fn render(&self, tab: Option<Tab>) -> CliResult<String> {
        let rendered = match ViewRouter::new(&self.store).current() {
            View::LoadingIndicator => LoadingIndicator.to_string(),
            View::LoginForm => LoginForm::open(&self.store).to_string(),
            View::HrDashboard => {
                let tab = tab.map(HrTab::try_from).transpose()?.unwrap_or_default();
                HrDashboard::open(&self.store)?.with_tab(tab).to_string()
            }
            View::EmployeeDashboard => {
                let tab = tab
                    .map(EmployeeTab::try_from)
                    .transpose()?
                    .unwrap_or_default();
                EmployeeDashboard::open(&self.store)?
                    .with_tab(tab)
                    .to_string()
            }
        };

        Ok(rendered)
    }

    fn chat(&self, question: &str, rate: Option<Rating>) -> CliResult<String> {
        let mut dashboard = EmployeeDashboard::open(&self.store)?;

        match dashboard.ask(question) {
            Some(id) => {
                if let Some(rating) = rate {
                    dashboard.rate(&id, rating)?;
                }
            }
            None => info!("Ignoring blank question"),
        }

        Ok(dashboard.to_string())
    }

    fn repair(&self) -> CliResult<String> {
        if !self.outcome.is_corrupted() {
            return Ok(String::from("session slot is healthy; nothing to repair"));
        }

        let storage = self.store.storage();
        match storage.backup_corrupted(self.store.key())? {
            Some(path) => Ok(format!("moved corrupted session to {}", path.display())),
            None => Ok(String::from("no session slot found")),
        }
    }
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> CliResult<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
