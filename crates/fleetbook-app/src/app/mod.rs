//! Application services (use cases)

pub mod change_request_service;
pub mod credentials;
pub mod fleet_service;
pub mod table_service;

pub use change_request_service::ChangeRequestService;
pub use credentials::AdminCredentials;
pub use fleet_service::FleetService;
pub use table_service::TableService;

/// Convert a client-supplied index into a position inside `0..len`
pub(crate) fn checked_index(index: i64, len: usize) -> Option<usize> {
    usize::try_from(index).ok().filter(|i| *i < len)
}
