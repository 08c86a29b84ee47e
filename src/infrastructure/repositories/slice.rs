// src/infrastructure/repositories/slice.rs
use crate::domain::errors::DomainResult;
use crate::domain::pagination::{FieldDef, FieldValue, SliceRequest};
use sqlx::{Postgres, QueryBuilder};

/// Append the cursor filter, ORDER BY, OFFSET and LIMIT for `request`.
/// `has_where` tells whether the query already opened a WHERE clause.
/// Only column names from the `columns` whitelist are pushed into SQL text.
pub fn push_slice(
    builder: &mut QueryBuilder<'_, Postgres>,
    columns: &[FieldDef],
    request: &SliceRequest,
    has_where: bool,
) -> DomainResult<()> {
    if let Some(filter) = &request.filter {
        let column = FieldDef::lookup(columns, &filter.field)?;
        let value = FieldValue::parse(column.kind, &filter.value)?;
        builder.push(if has_where { " AND " } else { " WHERE " });
        builder.push(column.name);
        builder.push(" ");
        builder.push(filter.comparison.as_sql());
        builder.push(" ");
        push_value(builder, value);
    }

    builder.push(" ORDER BY ");
    for (index, field) in request.ordering.fields().iter().enumerate() {
        let column = FieldDef::lookup(columns, field.name())?;
        if index > 0 {
            builder.push(", ");
        }
        builder.push(column.name);
        builder.push(if field.is_descending() { " DESC" } else { " ASC" });
    }

    builder.push(" OFFSET ");
    builder.push_bind(i64::try_from(request.offset).unwrap_or(i64::MAX));
    builder.push(" LIMIT ");
    builder.push_bind(i64::try_from(request.limit).unwrap_or(i64::MAX));
    Ok(())
}

fn push_value(builder: &mut QueryBuilder<'_, Postgres>, value: FieldValue) {
    match value {
        FieldValue::Int(value) => builder.push_bind(value),
        FieldValue::Text(value) => builder.push_bind(value),
        FieldValue::Bool(value) => builder.push_bind(value),
        FieldValue::Timestamp(value) => builder.push_bind(value),
    };
}
