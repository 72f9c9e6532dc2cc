//! Storage layer for the JSON document store.

pub mod store;

pub use store::JsonStore;

/// Record kinds, each persisted as its own JSON document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Users,
    Progress,
    Community,
}

impl RecordKind {
    /// Every kind, in document order.
    pub const ALL: [RecordKind; 3] = [
        RecordKind::Users,
        RecordKind::Progress,
        RecordKind::Community,
    ];

    /// File name of the persisted document for this kind.
    pub fn file_name(self) -> &'static str {
        match self {
            RecordKind::Users => "users.json",
            RecordKind::Progress => "progress.json",
            RecordKind::Community => "community.json",
        }
    }
}
