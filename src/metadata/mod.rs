mod fields;
mod reader;

pub use fields::BookMetadata;
pub use reader::{parse_json, read_metadata};
