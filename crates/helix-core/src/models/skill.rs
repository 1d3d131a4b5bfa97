use serde::Serialize;

/// Self-assessed proficiency, 0-100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}
