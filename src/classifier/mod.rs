/// Ordered grouping of export rows by category and by owning table.
pub mod grouping;
/// Handling of rows whose category has no document section.
pub mod unknown_category;
