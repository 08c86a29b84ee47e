use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, SecondsFormat, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Int,
    Text,
    Bool,
    Timestamp,
}

/// A field a collection can be ordered and filtered by, with the type its
/// cursor positions must parse as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldDef {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldDef {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }

    /// Find `name` among `fields`; an unknown field cannot be ordered by.
    pub fn lookup(fields: &[FieldDef], name: &str) -> DomainResult<FieldDef> {
        fields
            .iter()
            .find(|field| field.name == name)
            .copied()
            .ok_or_else(|| {
                DomainError::NotImplemented(format!("ordering by `{name}` is not supported"))
            })
    }
}

/// Value of an orderable field.
///
/// Values render to the text stored in a cursor position and parse back from
/// it; ordering is only meaningful between values of the same kind.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldValue {
    Int(i64),
    Text(String),
    Bool(bool),
    Timestamp(DateTime<Utc>),
}

impl FieldValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Int(_) => FieldKind::Int,
            Self::Text(_) => FieldKind::Text,
            Self::Bool(_) => FieldKind::Bool,
            Self::Timestamp(_) => FieldKind::Timestamp,
        }
    }

    pub fn to_position(&self) -> String {
        match self {
            Self::Int(value) => value.to_string(),
            Self::Text(value) => value.clone(),
            Self::Bool(value) => value.to_string(),
            Self::Timestamp(value) => value.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        }
    }

    /// Parse cursor position text as a value of `kind`. Text that does not
    /// fit the kind means the cursor was tampered with or is stale.
    pub fn parse(kind: FieldKind, position: &str) -> DomainResult<Self> {
        match kind {
            FieldKind::Int => position
                .parse::<i64>()
                .map(Self::Int)
                .map_err(|_| DomainError::InvalidCursor),
            FieldKind::Text => Ok(Self::Text(position.to_string())),
            FieldKind::Bool => position
                .parse::<bool>()
                .map(Self::Bool)
                .map_err(|_| DomainError::InvalidCursor),
            FieldKind::Timestamp => DateTime::parse_from_rfc3339(position)
                .map(|dt| Self::Timestamp(dt.with_timezone(&Utc)))
                .map_err(|_| DomainError::InvalidCursor),
        }
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Timestamp(value)
    }
}

/// A row that can expose its fields by name.
pub trait Record {
    fn field(&self, name: &str) -> Option<FieldValue>;

    /// Cursor position of this row for `field`.
    fn position(&self, field: &str) -> DomainResult<String> {
        self.field(field)
            .map(|value| value.to_position())
            .ok_or_else(|| {
                DomainError::NotImplemented(format!("ordering by `{field}` is not supported"))
            })
    }
}
