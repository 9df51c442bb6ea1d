use uuid::Uuid;

/// Identity of a single navigation event
///
/// Deep-link times are applied at most once per id, so re-renders that
/// replay the same navigation do not seek again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NavigationId(Uuid);

impl NavigationId {
    /// Create a new random navigation ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NavigationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for NavigationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
