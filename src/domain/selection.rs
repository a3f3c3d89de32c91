/// Holds the at-most-one "current project" reference.
///
/// Pure reference holder: the name is not validated against the board.
/// Callers that read it handle a dangling reference defensively, and the
/// board operations clear it when the referenced project is deleted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    current: Option<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_current(&mut self, name: Option<String>) {
        self.current = name;
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Clears the selection if it points at the given project
    pub fn clear_if_current(&mut self, name: &str) {
        if self.current.as_deref() == Some(name) {
            self.current = None;
        }
    }
}
