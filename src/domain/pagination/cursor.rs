use crate::domain::errors::{DomainError, DomainResult};
use base64::{Engine, engine::general_purpose::STANDARD};

/// Upper bound applied to decoded offsets so one request never scans further
/// than this many rows past its position.
pub const OFFSET_CUTOFF: u64 = 1000;

const OFFSET_TOKEN: &str = "o";
const REVERSE_TOKEN: &str = "r";
const POSITION_TOKEN: &str = "p";

/// Resume point inside an ordered stream.
///
/// `position` is the textual value of the primary ordering field on the last
/// boundary row, and `offset` counts rows sharing that value which were
/// already emitted. The default value is the first page walked forward.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Cursor {
    pub offset: u64,
    pub reverse: bool,
    pub position: Option<String>,
}

impl Cursor {
    pub fn new(offset: u64, reverse: bool, position: Option<String>) -> Self {
        Self {
            offset,
            reverse,
            position,
        }
    }

    /// Decode the optional `cursor` query parameter; absence means the first page.
    pub fn from_query(token: Option<&str>) -> DomainResult<Self> {
        match token {
            Some(value) => Self::decode(value),
            None => Ok(Self::default()),
        }
    }

    #[cfg(test)]
    pub fn is_initial(&self) -> bool {
        self.offset == 0 && !self.reverse && self.position.is_none()
    }

    pub fn encode(&self) -> String {
        let mut tokens: Vec<(&str, String)> = Vec::with_capacity(3);
        if self.offset != 0 {
            tokens.push((OFFSET_TOKEN, self.offset.to_string()));
        }
        if self.reverse {
            tokens.push((REVERSE_TOKEN, "1".to_string()));
        }
        if let Some(position) = &self.position {
            tokens.push((POSITION_TOKEN, position.clone()));
        }

        // plain string pairs cannot fail to serialize
        let querystring = serde_urlencoded::to_string(&tokens).unwrap_or_default();
        STANDARD.encode(querystring.as_bytes())
    }

    pub fn decode(token: &str) -> DomainResult<Self> {
        let bytes = STANDARD
            .decode(token)
            .map_err(|_| DomainError::InvalidCursor)?;
        let querystring = String::from_utf8(bytes).map_err(|_| DomainError::InvalidCursor)?;
        let pairs: Vec<(String, String)> =
            serde_urlencoded::from_str(&querystring).map_err(|_| DomainError::InvalidCursor)?;

        let lookup = |key: &str| {
            pairs
                .iter()
                .find(|(name, _)| name == key)
                .map(|(_, value)| value.as_str())
        };

        let offset = match lookup(OFFSET_TOKEN) {
            Some(raw) => parse_offset(raw)?,
            None => 0,
        };
        let reverse = match lookup(REVERSE_TOKEN) {
            Some(raw) => {
                raw.trim()
                    .parse::<i64>()
                    .map_err(|_| DomainError::InvalidCursor)?
                    != 0
            }
            None => false,
        };
        let position = lookup(POSITION_TOKEN).map(str::to_owned);

        Ok(Self::new(offset, reverse, position))
    }
}

fn parse_offset(raw: &str) -> DomainResult<u64> {
    let raw = raw.trim();
    if raw.starts_with('-') {
        return Err(DomainError::InvalidCursor);
    }
    let value = raw.parse::<u64>().map_err(|_| DomainError::InvalidCursor)?;
    Ok(value.min(OFFSET_CUTOFF))
}
