mod chat_transcript;
mod identity;
mod rating;
mod user_role;
mod view;
