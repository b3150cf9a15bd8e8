//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `notifications`, `discovery`) so
//! individual components can depend on small focused models. The session is
//! the only state that outlives a page; it is owned by `store` and written
//! through `persist`.

pub mod discovery;
pub mod notifications;
pub mod persist;
pub mod session;
pub mod store;
