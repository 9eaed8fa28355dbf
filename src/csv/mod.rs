//! CSV primitives: record splitting, field tokenizing and field encoding

mod encoder;
mod records;
mod simple;
mod tokenizer;

pub use encoder::{FieldEncoder, NULL_FIELD};
pub use records::{join_records, split_records};
pub use simple::SimpleTokenizer;
pub use tokenizer::{FieldTokenizer, ParsedRecord};

pub(crate) use records::{is_blank_record, strip_line_breaks};
