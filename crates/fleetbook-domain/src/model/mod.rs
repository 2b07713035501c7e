//! Domain model types

pub mod bulk_input;
pub mod change_request;

pub use bulk_input::BulkFleetInput;
pub use change_request::ChangeRequest;
