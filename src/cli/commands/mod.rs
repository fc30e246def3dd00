//! Command implementations
//!
//! Each command renders its own output and returns whether it succeeded.

mod accept;
mod compare;
mod init;
mod pending;

pub use accept::accept;
pub use compare::compare;
pub use init::init;
pub use pending::pending;
