use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CareerRecommendation {
    pub next_role: &'static str,
    pub skill_gaps: Vec<&'static str>,
    pub suggested_projects: Vec<&'static str>,
    pub suggested_training: Vec<&'static str>,
}
