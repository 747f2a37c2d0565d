/// Identifier for one entry, stable for the lifetime of the list.
///
/// Ids are never reused, so a reference to a removed entry can never match
/// a later one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskId(pub(crate) u64);

/// One user-entered line of text, displayed as a removable list entry.
/// The text is non-empty and trimmed by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    pub id: TaskId,
    pub text: String,
}

/// Keys that remove a focused entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalKey {
    Enter,
    Backspace,
    Delete,
}

impl RemovalKey {
    /// Parses a key name, ignoring letter case. Any other key is `None`.
    pub fn parse(key: &str) -> Option<Self> {
        if key.eq_ignore_ascii_case("enter") {
            Some(Self::Enter)
        } else if key.eq_ignore_ascii_case("backspace") {
            Some(Self::Backspace)
        } else if key.eq_ignore_ascii_case("delete") {
            Some(Self::Delete)
        } else {
            None
        }
    }
}
