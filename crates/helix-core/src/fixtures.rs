//! Static demo data shown by the dashboards.
//!
//! Nothing here is computed; a real deployment would serve these from a
//! query/analytics service.

use crate::{
    AnalyticsData, CareerRecommendation, ChatExchange, Rating, RecentQuery, Skill, TopQuery,
};

pub const DEMO_ANSWER: &str = "This is a demo response. In production, this would be answered \
     by the RAG system analyzing HR policies.";

pub const SEED_QUESTION: &str = "How many PTO days do I get per year?";

pub const SEED_ANSWER: &str = "Based on our company policy, full-time employees receive 15 PTO \
     days per year in their first year of employment. After 3 years, this increases to 20 days, \
     and after 5 years, you receive 25 days per year.";

pub const SUGGESTED_TOPICS: [&str; 5] = [
    "PTO and Leave Policies",
    "Benefits & Insurance",
    "Remote Work Guidelines",
    "Performance Reviews",
    "Professional Development",
];

pub fn seed_exchange() -> ChatExchange {
    ChatExchange {
        id: String::from("1"),
        question: String::from(SEED_QUESTION),
        answer: String::from(SEED_ANSWER),
        rating: Some(Rating::Up),
    }
}

pub fn employee_skills() -> Vec<Skill> {
    vec![
        Skill { name: "Python", level: 85 },
        Skill { name: "React", level: 75 },
        Skill { name: "SQL", level: 70 },
        Skill { name: "Communication", level: 90 },
        Skill { name: "Project Management", level: 65 },
    ]
}

pub fn career_recommendation() -> CareerRecommendation {
    CareerRecommendation {
        next_role: "Senior Software Engineer",
        skill_gaps: vec!["System Design", "Docker", "Kubernetes"],
        suggested_projects: vec![
            "Lead the microservices migration project",
            "Mentor junior developers",
            "Contribute to architecture decisions",
        ],
        suggested_training: vec![
            "AWS Solutions Architect Certification",
            "Advanced System Design Course",
            "Leadership & Communication Workshop",
        ],
    }
}

pub fn analytics() -> AnalyticsData {
    AnalyticsData {
        total_queries: 1247,
        avg_response_time: 2.3,
        satisfaction_rate: 94.5,
        active_users: 342,
        total_employees: 456,
    }
}

pub fn recent_queries() -> Vec<RecentQuery> {
    vec![
        RecentQuery {
            employee: "Sarah Johnson",
            query: "PTO policy details",
            rating: Rating::Up,
            time: "2 min ago",
        },
        RecentQuery {
            employee: "Michael Chen",
            query: "Remote work guidelines",
            rating: Rating::Up,
            time: "15 min ago",
        },
        RecentQuery {
            employee: "Emily Davis",
            query: "Health insurance coverage",
            rating: Rating::Down,
            time: "1 hour ago",
        },
        RecentQuery {
            employee: "David Wilson",
            query: "Performance review schedule",
            rating: Rating::Up,
            time: "2 hours ago",
        },
    ]
}

pub fn top_queries() -> Vec<TopQuery> {
    vec![
        TopQuery {
            query: "PTO days allowance",
            count: 156,
        },
        TopQuery {
            query: "Remote work policy",
            count: 142,
        },
        TopQuery {
            query: "Health benefits",
            count: 128,
        },
        TopQuery {
            query: "Performance reviews",
            count: 89,
        },
    ]
}
