//! Sessions: live tables and the registry that tracks them.
//!
//! - `Table`: one game driven by identities, with automated turns,
//!   status reports and private hand listings
//! - `SessionStore`: session id to table, with explicit create/destroy

mod store;
mod table;

pub use store::{SessionError, SessionStore, SharedTable};
pub use table::{HandListing, StatusReport, Table, TableError, TableEvent};
