//! Connection handles and lifecycle management.

pub mod handle;
pub mod manager;

pub use handle::ConnectionHandle;
pub use manager::ConnectionManager;
