pub mod error;
pub mod fixtures;
pub mod models;

pub use error::{CoreError, CoreResult};
pub use models::analytics::{AnalyticsData, RecentQuery, TopQuery};
pub use models::career_recommendation::CareerRecommendation;
pub use models::chat_exchange::ChatExchange;
pub use models::chat_transcript::ChatTranscript;
pub use models::identity::Identity;
pub use models::identity_profile::IdentityProfile;
pub use models::rating::Rating;
pub use models::skill::Skill;
pub use models::user_role::UserRole;
pub use models::view::View;

/// Email address that signs in with the HR role unless overridden by config.
pub const DEFAULT_HR_EMAIL: &str = "hr@helix.com";

/// Slot name the signed-in identity is persisted under.
pub const DEFAULT_SESSION_KEY: &str = "helix_user";

#[cfg(test)]
mod tests;
