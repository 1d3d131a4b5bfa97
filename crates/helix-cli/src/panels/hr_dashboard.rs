use crate::panels::{BRAND, bar, write_header, write_tabs};
use crate::{CliError, CliResult, HrTab};

use helix_core::{Identity, Rating, UserRole, fixtures};
use helix_session::{SessionStorage, SessionStore};

use std::fmt;

/// Analytics view for HR staff.
#[derive(Debug)]
pub struct HrDashboard<'a> {
    identity: &'a Identity,
    tab: HrTab,
}

impl<'a> HrDashboard<'a> {
    #[track_caller]
    pub fn open<S: SessionStorage>(store: &'a SessionStore<S>) -> CliResult<Self> {
        let identity = store.require_identity()?;
        if identity.role() != UserRole::Hr {
            return Err(CliError::wrong_role(UserRole::Hr, identity.role()));
        }

        Ok(Self {
            identity,
            tab: HrTab::default(),
        })
    }

    pub fn with_tab(mut self, tab: HrTab) -> Self {
        self.tab = tab;
        self
    }

    pub fn tab(&self) -> HrTab {
        self.tab
    }

    fn write_overview(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let analytics = fixtures::analytics();
        writeln!(
            f,
            "Total Queries       {:>8}   +12% this month",
            analytics.total_queries
        )?;
        writeln!(
            f,
            "Avg Response Time   {:>7}s   Target: <=3s",
            analytics.avg_response_time
        )?;
        writeln!(
            f,
            "Satisfaction Rate   {:>7}%   Excellent",
            analytics.satisfaction_rate
        )?;
        writeln!(
            f,
            "Active Users        {:>8}   of {} employees",
            analytics.active_users, analytics.total_employees
        )?;

        writeln!(f)?;
        writeln!(f, "Recent Queries")?;
        for query in fixtures::recent_queries() {
            let marker = match query.rating {
                Rating::Up => "+",
                Rating::Down => "!",
            };
            writeln!(
                f,
                "  [{marker}] {} - {} ({})",
                query.employee, query.query, query.time
            )?;
        }

        let top = fixtures::top_queries();
        let max = top.first().map(|q| q.count).unwrap_or(0);
        writeln!(f)?;
        writeln!(f, "Top Queries")?;
        for item in &top {
            writeln!(
                f,
                "  {:<22} {} {}",
                item.query,
                bar(item.count, max),
                item.count
            )?;
        }
        Ok(())
    }
}

/// Heading and body of a tab that has no content yet.
fn write_placeholder(f: &mut fmt::Formatter<'_>, heading: &str, body: &str) -> fmt::Result {
    writeln!(f, "{heading}")?;
    writeln!(f, "{body}")
}

impl fmt::Display for HrDashboard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(f, &format!("{BRAND} HR"), self.identity)?;
        writeln!(f)?;

        let tabs = [
            HrTab::Overview,
            HrTab::Queries,
            HrTab::Employees,
            HrTab::Policies,
        ];
        let labels: Vec<(&str, bool)> = tabs
            .iter()
            .map(|tab| (tab.label(), *tab == self.tab))
            .collect();
        write_tabs(f, &labels)?;
        writeln!(f)?;

        match self.tab {
            HrTab::Overview => self.write_overview(f),
            HrTab::Queries => write_placeholder(
                f,
                "Query Analytics",
                "Detailed query analytics and trends will be displayed here",
            ),
            HrTab::Employees => write_placeholder(
                f,
                "Employee Progress Tracking",
                "Employee career progression data and insights will be displayed here",
            ),
            HrTab::Policies => write_placeholder(
                f,
                "Policy Management",
                "HR policy documents and knowledge base management will be displayed here",
            ),
        }
    }
}
