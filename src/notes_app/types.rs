#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(super) enum Screen {
    Dashboard,
    Notes,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub(super) enum LoadState {
    Idle,
    Loading,
    Loaded,
    Error(String),
}

/// Lifecycle of the editor draft relative to the backend.
///
/// `Pending` means a debounce timer is armed, `Saving` means a request is in
/// flight. The two never overlap: arming a new timer invalidates the old one,
/// and committing a save disarms any pending timer first.
#[derive(Debug, Clone, Eq, PartialEq)]
pub(super) enum SaveState {
    Idle,
    Pending,
    Saving,
    Error(String),
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub(super) enum DeleteTarget {
    Single { id: NoteId, title: String },
    Selection,
}
