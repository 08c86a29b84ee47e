// src/application/queries/pagination.rs
use crate::application::{
    dto::Page, error::ApplicationResult, ports::links::PageLinks,
};
use crate::domain::pagination::{Cursor, CursorPaginator, OrderingSpec, PageSource};

/// Parameters of one cursor-paginated read.
#[derive(Debug, Clone)]
pub struct PageQuery<'a> {
    pub cursor: Option<&'a str>,
    pub ordering: OrderingSpec,
    pub page_size: u64,
}

/// Decode the request cursor, read one page from `source` and render the
/// neighbouring cursors as links.
pub async fn paginate<S>(
    source: &S,
    query: PageQuery<'_>,
    links: &dyn PageLinks,
) -> ApplicationResult<Page<S::Item>>
where
    S: PageSource + ?Sized,
{
    let cursor = Cursor::from_query(query.cursor).inspect_err(|err| {
        tracing::debug!(error = %err, "rejecting pagination cursor");
    })?;
    let paginator = CursorPaginator::new(query.page_size, query.ordering, cursor)?;
    let window = paginator.paginate(source).await?;

    let next = window.next.map(|cursor| links.page_url(&cursor.encode()));
    let previous = window.previous.map(|cursor| links.page_url(&cursor.encode()));
    Ok(Page::new(window.items, next, previous))
}
