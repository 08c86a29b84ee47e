pub mod cursor;
pub mod ordering;
pub mod paginator;
pub mod source;
pub mod value;


pub use cursor::{Cursor, OFFSET_CUTOFF};
pub use ordering::{OrderField, OrderingSpec};
pub use paginator::{CursorPaginator, CursorWindow};
pub use source::{Comparison, PageSource, PositionFilter, SliceRequest};
pub use value::{FieldDef, FieldKind, FieldValue, Record};
