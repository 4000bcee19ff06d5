use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Identity of one built template definition.
///
/// Hosts use it together with a row key to keep per-row interaction state
/// apart when several templates render the same item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TemplateId(Uuid);

impl TemplateId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
