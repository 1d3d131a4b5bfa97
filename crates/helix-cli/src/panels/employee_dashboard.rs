use crate::panels::{BRAND, bar, write_header, write_tabs};
use crate::{CliError, CliResult, EmployeeTab};

use helix_core::{ChatTranscript, Identity, Rating, UserRole, fixtures};
use helix_session::{SessionStorage, SessionStore};

use std::fmt;

const SKILL_NAME_WIDTH: usize = 20;

/// Chat and career-progress view for employees.
///
/// The chat transcript lives only as long as the dashboard.
#[derive(Debug)]
pub struct EmployeeDashboard<'a> {
    identity: &'a Identity,
    transcript: ChatTranscript,
    tab: EmployeeTab,
}

impl<'a> EmployeeDashboard<'a> {
    #[track_caller]
    pub fn open<S: SessionStorage>(store: &'a SessionStore<S>) -> CliResult<Self> {
        let identity = store.require_identity()?;
        if identity.role() != UserRole::Employee {
            return Err(CliError::wrong_role(UserRole::Employee, identity.role()));
        }

        Ok(Self {
            identity,
            transcript: ChatTranscript::seeded(),
            tab: EmployeeTab::default(),
        })
    }

    pub fn with_tab(mut self, tab: EmployeeTab) -> Self {
        self.tab = tab;
        self
    }

    pub fn tab(&self) -> EmployeeTab {
        self.tab
    }

    pub fn transcript(&self) -> &ChatTranscript {
        &self.transcript
    }

    /// Ask the assistant; returns the new exchange id, or `None` for a blank
    /// question.
    pub fn ask(&mut self, question: &str) -> Option<String> {
        self.transcript.ask(question).map(|exchange| exchange.id.clone())
    }

    pub fn rate(&mut self, id: &str, rating: Rating) -> CliResult<()> {
        self.transcript.rate(id, rating)?;
        Ok(())
    }

    fn write_chat(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Ask me anything about HR policies")?;
        for exchange in self.transcript.exchanges() {
            writeln!(f)?;
            writeln!(f, "  Q: {}", exchange.question)?;
            writeln!(f, "  A: {}", exchange.answer)?;
            let rating = exchange
                .rating
                .as_ref()
                .map(Rating::as_str)
                .unwrap_or("unrated");
            writeln!(f, "  ({}, rating: {rating})", exchange.id)?;
        }

        writeln!(f)?;
        writeln!(f, "Quick topics:")?;
        for topic in fixtures::SUGGESTED_TOPICS {
            writeln!(f, "  - {topic}")?;
        }
        writeln!(
            f,
            "Tip: Be specific in your questions for the most accurate answers."
        )
    }

    fn write_progress(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Skills")?;
        for skill in fixtures::employee_skills() {
            writeln!(
                f,
                "  {:<width$} {} {}%",
                skill.name,
                bar(u32::from(skill.level), 100),
                skill.level,
                width = SKILL_NAME_WIDTH
            )?;
        }

        let recommendation = fixtures::career_recommendation();
        writeln!(f)?;
        writeln!(f, "Career recommendation")?;
        writeln!(f, "  Next role: {}", recommendation.next_role)?;
        writeln!(f, "  Skill gaps: {}", recommendation.skill_gaps.join(", "))?;
        writeln!(f, "  Suggested projects:")?;
        for project in &recommendation.suggested_projects {
            writeln!(f, "    - {project}")?;
        }
        writeln!(f, "  Suggested training:")?;
        for training in &recommendation.suggested_training {
            writeln!(f, "    - {training}")?;
        }
        Ok(())
    }
}

impl fmt::Display for EmployeeDashboard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(f, BRAND, self.identity)?;
        writeln!(
            f,
            "Welcome back, {}!",
            self.identity.first_name().unwrap_or(self.identity.email())
        )?;
        writeln!(f, "How can I help you today?")?;
        writeln!(f)?;
        write_tabs(
            f,
            &[
                ("HR Assistant", self.tab == EmployeeTab::Chat),
                ("My Career Progress", self.tab == EmployeeTab::Progress),
            ],
        )?;
        writeln!(f)?;

        match self.tab {
            EmployeeTab::Chat => self.write_chat(f),
            EmployeeTab::Progress => self.write_progress(f),
        }
    }
}
