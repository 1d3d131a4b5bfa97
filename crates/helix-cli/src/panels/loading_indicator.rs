use std::fmt;

#[derive(Debug, Clone, Copy, Default)]
pub struct LoadingIndicator;

impl fmt::Display for LoadingIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Loading...")
    }
}
