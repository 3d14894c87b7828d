/// Export row model and JSON deserialization.
pub mod export;
