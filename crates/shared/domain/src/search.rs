use serde::{Deserialize, Serialize};

/// Value type of a searchable attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeKind {
    String,
    Integer,
    Float,
    Boolean,
    Date,
    Datetime,
}

/// An attribute a manager allows filtering and sorting on.
///
/// `code` is the public name (`supplier.label`), `internal_code` the storage column
/// it maps to (`mssup."label"`). Private attributes are usable internally but hidden
/// from admin interfaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchAttribute {
    pub code: String,
    pub internal_code: String,
    pub label: String,
    pub kind: AttributeKind,
    pub public: bool,
}

impl SearchAttribute {
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        internal_code: impl Into<String>,
        label: impl Into<String>,
        kind: AttributeKind,
    ) -> Self {
        Self {
            code: code.into(),
            internal_code: internal_code.into(),
            label: label.into(),
            kind,
            public: true,
        }
    }

    #[must_use]
    pub fn private(mut self) -> Self {
        self.public = false;
        self
    }
}
