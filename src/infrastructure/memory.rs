// src/infrastructure/memory.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::{
    Comparison, FieldDef, FieldValue, OrderingSpec, PageSource, PositionFilter, Record,
    SliceRequest,
};
use async_trait::async_trait;
use std::cmp::Ordering;

/// Vector-backed collection, mostly useful for tests and small fixed datasets.
#[derive(Debug, Clone)]
pub struct MemorySource<T> {
    records: Vec<T>,
    fields: Vec<FieldDef>,
}

impl<T> MemorySource<T> {
    pub fn new(records: Vec<T>, orderable: &[FieldDef]) -> Self {
        Self {
            records,
            fields: orderable.to_vec(),
        }
    }
}

#[async_trait]
impl<T> PageSource for MemorySource<T>
where
    T: Record + Clone + Send + Sync,
{
    type Item = T;

    fn orderable_fields(&self) -> &[FieldDef] {
        &self.fields
    }

    async fn fetch(&self, request: &SliceRequest) -> DomainResult<Vec<T>> {
        slice_records(self.records.iter(), &self.fields, request)
    }
}

/// Apply a slice request to records held in memory: filter past the cursor
/// position, sort by the requested ordering, then cut `offset..offset+limit`.
/// `fields` is the whitelist the ordering and filter must come from.
pub fn slice_records<'a, T, I>(
    records: I,
    fields: &[FieldDef],
    request: &SliceRequest,
) -> DomainResult<Vec<T>>
where
    T: Record + Clone + 'a,
    I: IntoIterator<Item = &'a T>,
{
    for field in request.ordering.fields() {
        FieldDef::lookup(fields, field.name())?;
    }

    let mut selected: Vec<&T> = records.into_iter().collect();
    if let Some(filter) = &request.filter {
        selected = filter_beyond(selected, fields, filter)?;
    }
    selected.sort_by(|a, b| compare_records(*a, *b, &request.ordering));

    let offset = usize::try_from(request.offset).unwrap_or(usize::MAX);
    let limit = usize::try_from(request.limit).unwrap_or(usize::MAX);
    Ok(selected
        .into_iter()
        .skip(offset)
        .take(limit)
        .cloned()
        .collect())
}

fn filter_beyond<'a, T: Record>(
    records: Vec<&'a T>,
    fields: &[FieldDef],
    filter: &PositionFilter,
) -> DomainResult<Vec<&'a T>> {
    // the position must parse even when nothing is left to compare it with
    let field = FieldDef::lookup(fields, &filter.field)?;
    let bound = FieldValue::parse(field.kind, &filter.value)?;

    let mut kept = Vec::with_capacity(records.len());
    for record in records {
        let value = field_of(record, field.name)?;
        let beyond = match filter.comparison {
            Comparison::Gt => value > bound,
            Comparison::Lt => value < bound,
        };
        if beyond {
            kept.push(record);
        }
    }
    Ok(kept)
}

fn field_of<T: Record>(record: &T, name: &str) -> DomainResult<FieldValue> {
    record
        .field(name)
        .ok_or_else(|| DomainError::NotImplemented(format!("ordering by `{name}` is not supported")))
}

fn compare_records<T: Record>(a: &T, b: &T, ordering: &OrderingSpec) -> Ordering {
    ordering
        .fields()
        .iter()
        .map(|field| {
            let order = a.field(field.name()).cmp(&b.field(field.name()));
            if field.is_descending() {
                order.reverse()
            } else {
                order
            }
        })
        .find(|order| order.is_ne())
        .unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pagination::FieldKind;

    const FIELDS: &[FieldDef] = &[
        FieldDef::new("n", FieldKind::Int),
        FieldDef::new("s", FieldKind::Text),
    ];

    #[derive(Debug, Clone, PartialEq)]
    struct Entry(i64, &'static str);

    impl Record for Entry {
        fn field(&self, name: &str) -> Option<FieldValue> {
            match name {
                "n" => Some(self.0.into()),
                "s" => Some(self.1.into()),
                _ => None,
            }
        }
    }

    fn request(raw: &str, filter: Option<PositionFilter>, offset: u64, limit: u64) -> SliceRequest {
        SliceRequest {
            ordering: OrderingSpec::parse(raw).unwrap(),
            filter,
            offset,
            limit,
        }
    }

    #[test]
    fn sorts_by_every_field_then_slices() {
        let rows = vec![Entry(2, "b"), Entry(1, "z"), Entry(2, "a"), Entry(3, "c")];
        let out = slice_records(&rows, FIELDS, &request("-n,s", None, 1, 2)).unwrap();
        assert_eq!(out, vec![Entry(2, "a"), Entry(2, "b")]);
    }

    #[test]
    fn filters_strictly_beyond_position() {
        let rows = vec![Entry(1, "a"), Entry(2, "b"), Entry(3, "c")];
        let filter = PositionFilter {
            field: "n".into(),
            comparison: Comparison::Gt,
            value: "2".into(),
        };
        let out = slice_records(&rows, FIELDS, &request("n", Some(filter), 0, 10)).unwrap();
        assert_eq!(out, vec![Entry(3, "c")]);
    }

    #[test]
    fn unknown_filter_field_is_not_implemented() {
        let rows = vec![Entry(1, "a")];
        let filter = PositionFilter {
            field: "missing".into(),
            comparison: Comparison::Lt,
            value: "1".into(),
        };
        let err = slice_records(&rows, FIELDS, &request("n", Some(filter), 0, 10)).unwrap_err();
        assert!(matches!(err, DomainError::NotImplemented(_)));
    }

    #[test]
    fn malformed_position_is_rejected_without_matching_records() {
        let rows: Vec<Entry> = Vec::new();
        let filter = PositionFilter {
            field: "n".into(),
            comparison: Comparison::Gt,
            value: "abc".into(),
        };
        let err = slice_records(&rows, FIELDS, &request("n", Some(filter), 0, 10)).unwrap_err();
        assert!(matches!(err, DomainError::InvalidCursor));
    }

    #[test]
    fn ordering_outside_the_whitelist_is_not_implemented() {
        let rows = vec![Entry(1, "a")];
        let err = slice_records(&rows, FIELDS, &request("score", None, 0, 10)).unwrap_err();
        assert!(matches!(err, DomainError::NotImplemented(_)));
    }
}
