pub mod errors;
pub mod extract;

pub use errors::BearerError;
pub use extract::extract;
pub use extract::extract_from_headers;
pub use extract::SCHEME_PREFIX;
