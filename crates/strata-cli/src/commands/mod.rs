//! Command implementations.

pub mod compare;
pub mod dedup;
pub mod partition;

pub use self::compare::execute_compare;
pub use self::dedup::execute_dedup;
pub use self::partition::execute_partition;
