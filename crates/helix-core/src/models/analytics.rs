use crate::Rating;

use serde::Serialize;

/// Headline counters for the HR overview tab.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsData {
    pub total_queries: u32,
    /// Seconds
    pub avg_response_time: f64,
    /// Percent
    pub satisfaction_rate: f64,
    pub active_users: u32,
    pub total_employees: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecentQuery {
    pub employee: &'static str,
    pub query: &'static str,
    pub rating: Rating,
    pub time: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopQuery {
    pub query: &'static str,
    pub count: u32,
}
