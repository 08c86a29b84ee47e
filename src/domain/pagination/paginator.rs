use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::{
    cursor::Cursor,
    ordering::OrderingSpec,
    source::{Comparison, PageSource, PositionFilter, SliceRequest},
    value::{FieldDef, Record},
};

/// Rows of one page plus the cursors leading away from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorWindow<T> {
    pub items: Vec<T>,
    pub next: Option<Cursor>,
    pub previous: Option<Cursor>,
}

/// Cursor pagination over a single request.
///
/// The paginator owns the decoded cursor, the ordering and the page size. It
/// plans one slice of `page_size + 1` rows (the extra row only tells whether
/// more data follows) and derives the neighbouring cursors from the rows it
/// got back. Rows sharing the primary ordering value are handled by counting
/// them into the cursor offset, so adjacent pages never repeat or skip rows.
#[derive(Debug, Clone)]
pub struct CursorPaginator {
    page_size: u64,
    ordering: OrderingSpec,
    cursor: Cursor,
}

struct Boundaries {
    has_next: bool,
    has_previous: bool,
    next_position: Option<String>,
    previous_position: Option<String>,
}

impl CursorPaginator {
    pub fn new(page_size: u64, ordering: OrderingSpec, cursor: Cursor) -> DomainResult<Self> {
        if page_size == 0 {
            return Err(DomainError::Validation(
                "page size must be positive".into(),
            ));
        }
        Ok(Self {
            page_size,
            ordering,
            cursor,
        })
    }

    /// Fail before fetching when the source cannot order by every field.
    pub fn ensure_orderable(&self, orderable: &[FieldDef]) -> DomainResult<()> {
        for field in self.ordering.fields() {
            FieldDef::lookup(orderable, field.name())?;
        }
        Ok(())
    }

    pub fn slice_request(&self) -> SliceRequest {
        let ordering = if self.cursor.reverse {
            self.ordering.reversed()
        } else {
            self.ordering.clone()
        };

        let filter = self.cursor.position.as_ref().map(|position| {
            let primary = self.ordering.primary();
            let comparison = if self.cursor.reverse != primary.is_descending() {
                Comparison::Lt
            } else {
                Comparison::Gt
            };
            PositionFilter {
                field: primary.name().to_string(),
                comparison,
                value: position.clone(),
            }
        });

        SliceRequest {
            ordering,
            filter,
            offset: self.cursor.offset,
            limit: self.page_size + 1,
        }
    }

    /// Run the planned slice against `source` and build the window.
    pub async fn paginate<S>(&self, source: &S) -> DomainResult<CursorWindow<S::Item>>
    where
        S: PageSource + ?Sized,
    {
        self.ensure_orderable(source.orderable_fields())?;
        let request = self.slice_request();
        tracing::debug!(
            ordering = %request.ordering,
            offset = request.offset,
            limit = request.limit,
            filtered = request.filter.is_some(),
            "fetching cursor slice"
        );
        let rows = source.fetch(&request).await?;
        self.window(rows)
    }

    /// Turn the rows fetched for [`Self::slice_request`] into a page.
    pub fn window<T: Record>(&self, mut rows: Vec<T>) -> DomainResult<CursorWindow<T>> {
        let field = self.ordering.primary().name();
        let page_size = usize::try_from(self.page_size).unwrap_or(usize::MAX);

        rows.truncate(page_size.saturating_add(1));
        let following_position = if rows.len() > page_size {
            match rows.pop() {
                Some(probe) => Some(probe.position(field)?),
                None => None,
            }
        } else {
            None
        };

        let has_position = self.cursor.position.is_some() || self.cursor.offset > 0;
        let boundaries = if self.cursor.reverse {
            rows.reverse();
            Boundaries {
                has_next: has_position,
                has_previous: following_position.is_some(),
                next_position: self.cursor.position.clone(),
                previous_position: following_position,
            }
        } else {
            Boundaries {
                has_next: following_position.is_some(),
                has_previous: has_position,
                next_position: following_position,
                previous_position: self.cursor.position.clone(),
            }
        };

        let positions = rows
            .iter()
            .map(|row| row.position(field))
            .collect::<DomainResult<Vec<_>>>()?;

        let next = self.next_cursor(&positions, &boundaries);
        let previous = self.previous_cursor(&positions, &boundaries);

        Ok(CursorWindow {
            items: rows,
            next,
            previous,
        })
    }

    fn next_cursor(&self, positions: &[String], bounds: &Boundaries) -> Option<Cursor> {
        if !bounds.has_next {
            return None;
        }

        // a reverse page reached through an offset cannot trust the cursor's
        // own position as the marker
        let seed = match positions.last() {
            Some(last) if self.cursor.reverse && self.cursor.offset != 0 => Some(last.as_str()),
            _ => bounds.next_position.as_deref(),
        };
        let (mut offset, mut position, unique) = scan_boundary(positions.iter().rev(), seed);

        if !positions.is_empty() && !unique {
            if !bounds.has_previous {
                offset = self.page_size;
                position = None;
            } else if self.cursor.reverse {
                offset = 0;
                position = bounds.previous_position.clone();
            } else {
                offset = self.cursor.offset + self.page_size;
                position = bounds.previous_position.clone();
            }
        }
        if positions.is_empty() {
            position = bounds.next_position.clone();
        }

        Some(Cursor::new(offset, false, position))
    }

    fn previous_cursor(&self, positions: &[String], bounds: &Boundaries) -> Option<Cursor> {
        if !bounds.has_previous {
            return None;
        }

        let seed = match positions.first() {
            Some(first) if !self.cursor.reverse && self.cursor.offset != 0 => Some(first.as_str()),
            _ => bounds.previous_position.as_deref(),
        };
        let (mut offset, mut position, unique) = scan_boundary(positions.iter(), seed);

        if !positions.is_empty() && !unique {
            if !bounds.has_next {
                offset = self.page_size;
                position = None;
            } else if self.cursor.reverse {
                offset = self.cursor.offset + self.page_size;
                position = bounds.next_position.clone();
            } else {
                offset = 0;
                position = bounds.next_position.clone();
            }
        }
        if positions.is_empty() {
            position = bounds.previous_position.clone();
        }

        Some(Cursor::new(offset, true, position))
    }
}

/// Walk positions from one page edge, counting rows equal to the running
/// marker. Returns the count, the last position inspected, and whether a
/// differing position was found.
fn scan_boundary<'a>(
    positions: impl Iterator<Item = &'a String>,
    seed: Option<&'a str>,
) -> (u64, Option<String>, bool) {
    let mut compare = seed;
    let mut offset = 0;
    let mut position = None;

    for current in positions {
        position = Some(current.clone());
        if Some(current.as_str()) != compare {
            return (offset, position, true);
        }
        compare = Some(current.as_str());
        offset += 1;
    }

    (offset, position, false)
}
