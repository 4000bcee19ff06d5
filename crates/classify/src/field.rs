use serde::{Deserialize, Serialize};

/// A column or property the host wants a template for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field name as the host knows it (e.g. `UnitPrice`, `created_by`).
    pub name: String,
    /// Declared type name (e.g. `decimal`, `string`, `int?`). May be empty.
    #[serde(default, rename = "type")]
    pub type_name: String,
    /// Whether the declared type is an enumeration.
    #[serde(default, rename = "enum")]
    pub is_enum: bool,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            is_enum: false,
        }
    }

    /// A field whose declared type is an enumeration.
    pub fn enumeration(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            is_enum: true,
            ..Self::new(name, type_name)
        }
    }

    /// Declared type with any nullable wrapper removed, lowercased.
    ///
    /// Accepts `T?`, `Nullable<T>` and `Option<T>`, and drops a leading
    /// `System.` namespace.
    pub fn base_type(&self) -> String {
        let mut t = self.type_name.trim().to_lowercase();
        loop {
            let unwrapped = if let Some(inner) = t.strip_suffix('?') {
                inner.trim().to_string()
            } else if let Some(inner) = strip_generic(&t, "nullable<")
                .or_else(|| strip_generic(&t, "option<"))
            {
                inner
            } else {
                break;
            };
            t = unwrapped;
        }
        t.strip_prefix("system.").map(str::to_string).unwrap_or(t)
    }
}

fn strip_generic(t: &str, prefix: &str) -> Option<String> {
    t.strip_prefix(prefix)
        .and_then(|rest| rest.strip_suffix('>'))
        .map(|inner| inner.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_type_unwraps_nullable_forms() {
        assert_eq!(FieldDescriptor::new("a", "decimal?").base_type(), "decimal");
        assert_eq!(FieldDescriptor::new("a", "Nullable<Double>").base_type(), "double");
        assert_eq!(FieldDescriptor::new("a", "Option<f64>").base_type(), "f64");
        assert_eq!(FieldDescriptor::new("a", "System.Decimal").base_type(), "decimal");
        assert_eq!(FieldDescriptor::new("a", " String ").base_type(), "string");
        assert_eq!(FieldDescriptor::new("a", "").base_type(), "");
    }

    #[test]
    fn deserializes_with_short_keys() {
        let field: FieldDescriptor =
            serde_json::from_str(r#"{ "name": "Priority", "type": "Level", "enum": true }"#).unwrap();
        assert_eq!(field, FieldDescriptor::enumeration("Priority", "Level"));

        let bare: FieldDescriptor = serde_json::from_str(r#"{ "name": "x" }"#).unwrap();
        assert_eq!(bare.type_name, "");
        assert!(!bare.is_enum);
    }
}
