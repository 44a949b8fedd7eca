//! Error types for the book search repository.

mod decode_error;
mod operation_error;
mod search_error;
mod transport_error;

pub use decode_error::DecodeError;
pub use operation_error::OperationError;
pub use search_error::SearchError;
pub use transport_error::TransportError;
