/// Schema document rendering in fixed section order.
pub mod document;
/// Markdown escaping and fencing helpers.
pub mod markdown;
/// Counts of what a rendered document contains.
pub mod summary;
