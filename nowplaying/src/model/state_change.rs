use crate::model::{Field, PlaybackState};

/// Notification delivered to store subscribers after a mutation
///
/// `fields` lists every field the mutation changed; `state` is the complete
/// record after the mutation, so composite changes are never seen half-applied.
#[derive(Debug, Clone, PartialEq)]
pub struct StateChange {
    pub fields: Vec<Field>,
    pub state: PlaybackState,
}

impl StateChange {
    pub fn contains(&self, field: Field) -> bool {
        self.fields.contains(&field)
    }
}
