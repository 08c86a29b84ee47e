use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderField {
    name: String,
    descending: bool,
}

impl OrderField {
    pub fn asc(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            descending: false,
        }
    }

    pub fn desc(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            descending: true,
        }
    }

    /// Parse `name` or `-name`.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let raw = raw.trim();
        let (name, descending) = match raw.strip_prefix('-') {
            Some(rest) => (rest, true),
            None => (raw, false),
        };
        if name.is_empty() || name.starts_with('-') {
            return Err(DomainError::Validation(format!(
                "invalid ordering field `{raw}`"
            )));
        }
        Ok(Self {
            name: name.to_string(),
            descending,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_descending(&self) -> bool {
        self.descending
    }

    pub fn reversed(&self) -> Self {
        Self {
            name: self.name.clone(),
            descending: !self.descending,
        }
    }
}

impl fmt::Display for OrderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.descending {
            f.write_str("-")?;
        }
        f.write_str(&self.name)
    }
}

/// Non-empty list of ordering fields; the first one positions cursors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderingSpec(Vec<OrderField>);

impl OrderingSpec {
    pub fn new(fields: Vec<OrderField>) -> DomainResult<Self> {
        if fields.is_empty() {
            return Err(DomainError::Validation("ordering cannot be empty".into()));
        }
        Ok(Self(fields))
    }

    /// Parse a comma separated list such as `-date_joined,id`.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let fields = raw
            .split(',')
            .map(OrderField::parse)
            .collect::<DomainResult<Vec<_>>>()?;
        Self::new(fields)
    }

    pub fn primary(&self) -> &OrderField {
        // non-empty by construction
        &self.0[0]
    }

    pub fn fields(&self) -> &[OrderField] {
        &self.0
    }

    /// Same fields with every direction flipped, used to walk backwards.
    pub fn reversed(&self) -> Self {
        Self(self.0.iter().map(OrderField::reversed).collect())
    }
}

impl fmt::Display for OrderingSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, field) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            write!(f, "{field}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_directions_and_keeps_order() {
        let spec = OrderingSpec::parse("-date_joined, id").unwrap();
        assert_eq!(spec.primary(), &OrderField::desc("date_joined"));
        assert_eq!(spec.fields()[1], OrderField::asc("id"));
        assert_eq!(spec.to_string(), "-date_joined,id");
    }

    #[test]
    fn reversed_flips_every_field() {
        let spec = OrderingSpec::parse("k,-v").unwrap();
        assert_eq!(spec.reversed().to_string(), "-k,v");
        assert_eq!(spec.reversed().reversed(), spec);
    }

    #[test]
    fn rejects_empty_names() {
        assert!(OrderingSpec::parse("").is_err());
        assert!(OrderingSpec::parse("id,").is_err());
        assert!(OrderingSpec::parse("--id").is_err());
        assert!(OrderingSpec::new(Vec::new()).is_err());
    }
}
