//! Field-name keyword table shared by the classifier and the templates.
//!
//! Lookups are order sensitive: when several keywords are contained in a
//! field name, the one declared first wins, regardless of how specific it is.

use serde::{Deserialize, Serialize};

use crate::kind::TemplateKind;

/// One keyword → kind association.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    pub keyword: String,
    pub kind: TemplateKind,
}

/// Ordered keyword table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordTable(Vec<Keyword>);

const DEFAULT_KEYWORDS: &[(&str, TemplateKind)] = &[
    ("price", TemplateKind::Currency),
    ("amount", TemplateKind::Currency),
    ("cost", TemplateKind::Currency),
    ("total", TemplateKind::Currency),
    ("salary", TemplateKind::Currency),
    ("revenue", TemplateKind::Currency),
    ("balance", TemplateKind::Currency),
    ("fee", TemplateKind::Currency),
    ("budget", TemplateKind::Currency),
    ("payment", TemplateKind::Currency),
    ("status", TemplateKind::Badge),
    ("state", TemplateKind::Badge),
    ("priority", TemplateKind::Badge),
    ("category", TemplateKind::Badge),
    ("type", TemplateKind::Badge),
    ("level", TemplateKind::Badge),
    ("role", TemplateKind::Badge),
    ("avatar", TemplateKind::Avatar),
    ("author", TemplateKind::Avatar),
    ("owner", TemplateKind::Avatar),
    ("assignee", TemplateKind::Avatar),
    ("user", TemplateKind::Avatar),
    ("customer", TemplateKind::Avatar),
    ("employee", TemplateKind::Avatar),
    ("contact", TemplateKind::Avatar),
    ("progress", TemplateKind::Progress),
    ("completion", TemplateKind::Progress),
    ("percent", TemplateKind::Progress),
    ("percentage", TemplateKind::Progress),
    ("rating", TemplateKind::Rating),
    ("stars", TemplateKind::Rating),
    ("score", TemplateKind::Rating),
    ("description", TemplateKind::Stack),
    ("details", TemplateKind::Stack),
    ("summary", TemplateKind::Stack),
    ("notes", TemplateKind::Stack),
    ("address", TemplateKind::Stack),
];

impl Default for KeywordTable {
    fn default() -> Self {
        Self(
            DEFAULT_KEYWORDS
                .iter()
                .map(|(k, kind)| Keyword {
                    keyword: k.to_string(),
                    kind: *kind,
                })
                .collect(),
        )
    }
}

impl KeywordTable {
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Append a keyword. Keywords are stored lowercase; blank ones and
    /// `TemplateKind::None` are ignored.
    pub fn push(&mut self, keyword: &str, kind: TemplateKind) {
        let keyword = keyword.trim().to_lowercase();
        if keyword.is_empty() || kind.is_none() {
            return;
        }
        self.0.push(Keyword { keyword, kind });
    }

    pub fn iter(&self) -> impl Iterator<Item = &Keyword> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Kind of the first keyword equal to the lowercased name.
    pub fn exact(&self, name: &str) -> Option<TemplateKind> {
        let name = name.trim().to_lowercase();
        self.0.iter().find(|k| k.keyword == name).map(|k| k.kind)
    }

    /// Kind of the first keyword, in declaration order, contained in the
    /// lowercased name.
    pub fn containing(&self, name: &str) -> Option<&Keyword> {
        let name = name.trim().to_lowercase();
        self.0.iter().find(|k| name.contains(k.keyword.as_str()))
    }

    /// Whether any keyword of `kind` equals or is contained in `name`.
    pub fn mentions(&self, kind: TemplateKind, name: &str) -> bool {
        let name = name.trim().to_lowercase();
        self.0
            .iter()
            .filter(|k| k.kind == kind)
            .any(|k| name.contains(k.keyword.as_str()))
    }
}

impl FromIterator<(String, TemplateKind)> for KeywordTable {
    fn from_iter<I: IntoIterator<Item = (String, TemplateKind)>>(iter: I) -> Self {
        let mut table = KeywordTable::empty();
        for (k, kind) in iter {
            table.push(&k, kind);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_lookup_lowercases() {
        let table = KeywordTable::default();
        assert_eq!(table.exact("Amount"), Some(TemplateKind::Currency));
        assert_eq!(table.exact("STATUS"), Some(TemplateKind::Badge));
        assert_eq!(table.exact("order_status"), None);
    }

    #[test]
    fn containing_follows_declaration_order() {
        let table = KeywordTable::default();
        // "status" is declared before "user".
        let hit = table.containing("user_status").unwrap();
        assert_eq!(hit.keyword, "status");
        assert_eq!(hit.kind, TemplateKind::Badge);
        // "amount" is declared before "total".
        assert_eq!(table.containing("total_amount").unwrap().keyword, "amount");
        assert!(table.containing("zzz").is_none());
    }

    #[test]
    fn mentions_checks_one_kind() {
        let table = KeywordTable::default();
        assert!(table.mentions(TemplateKind::Currency, "UnitPrice"));
        assert!(!table.mentions(TemplateKind::Currency, "Status"));
    }

    #[test]
    fn push_normalizes_and_skips_none() {
        let mut table = KeywordTable::empty();
        table.push("  Karma ", TemplateKind::Rating);
        table.push("ignored", TemplateKind::None);
        table.push(" ", TemplateKind::Badge);
        assert_eq!(table.len(), 1);
        assert_eq!(table.exact("karma"), Some(TemplateKind::Rating));
    }
}
