use parking_lot::Mutex;

/// What changed when a hook was re-bound to an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Binding {
    /// Same identifier as before; nothing to do.
    Unchanged,
    /// Identifier became undefined.
    Cleared,
    /// A new identifier; a round should start.
    Changed(String),
}

/// The identifier driving a hook (usually a project id).
///
/// An empty string counts as undefined.
#[derive(Debug, Default)]
pub struct IdentifierSlot {
    current: Mutex<Option<String>>,
}

impl IdentifierSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&self, id: Option<&str>) -> Binding {
        let mut current = self.current.lock();
        match id.filter(|id| !id.is_empty()) {
            None => {
                *current = None;
                Binding::Cleared
            }
            Some(id) if current.as_deref() == Some(id) => Binding::Unchanged,
            Some(id) => {
                *current = Some(id.to_string());
                Binding::Changed(id.to_string())
            }
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<String> {
        self.current.lock().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transitions() {
        let slot = IdentifierSlot::new();
        assert_eq!(slot.bind(Some("p-1")), Binding::Changed("p-1".into()));
        assert_eq!(slot.bind(Some("p-1")), Binding::Unchanged);
        assert_eq!(slot.bind(Some("")), Binding::Cleared);
        assert_eq!(slot.current(), None);
        assert_eq!(slot.bind(Some("p-1")), Binding::Changed("p-1".into()));
    }
}
