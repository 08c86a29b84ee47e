use crate::domain::errors::DomainResult;
use crate::domain::pagination::{
    ordering::OrderingSpec,
    value::{FieldDef, Record},
};
use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Gt,
    Lt,
}

impl Comparison {
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Gt => ">",
            Self::Lt => "<",
        }
    }
}

/// Keep only rows whose `field` lies strictly beyond `value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionFilter {
    pub field: String,
    pub comparison: Comparison,
    pub value: String,
}

/// One ordered, filtered, bounded read against a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceRequest {
    pub ordering: OrderingSpec,
    pub filter: Option<PositionFilter>,
    pub offset: u64,
    pub limit: u64,
}

/// Ordered, filterable, sliceable collection the paginator reads from.
#[async_trait]
pub trait PageSource: Send + Sync {
    type Item: Record + Send;

    /// Fields this collection can order and compare by.
    fn orderable_fields(&self) -> &[FieldDef];

    async fn fetch(&self, request: &SliceRequest) -> DomainResult<Vec<Self::Item>>;
}
