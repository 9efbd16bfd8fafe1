//! Query parsing: `<amount> [from] [<src>] [to <dest>...]`.

pub mod amount;
pub mod error;
pub mod parser;
pub mod types;


pub use amount::parse_amount;
pub use error::ParseError;
pub use parser::QueryParser;
pub use types::ConversionRequest;
