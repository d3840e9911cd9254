mod search_kind;
mod search_query;
mod sort_key;

pub use search_kind::SearchKind;
pub use search_query::SearchQuery;
pub use sort_key::SortKey;
