pub mod analytics;
pub mod career_recommendation;
pub mod chat_exchange;
pub mod chat_transcript;
pub mod identity;
pub mod identity_profile;
pub mod rating;
pub mod skill;
pub mod user_role;
pub mod view;
