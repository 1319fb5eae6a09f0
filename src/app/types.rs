//! Type definitions for the application state.

/// Which panel receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Category navigation list
    #[default]
    Sidebar,
    /// Category filter selector
    Filter,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Sidebar => Focus::Filter,
            Focus::Filter => Focus::Sidebar,
        }
    }
}
