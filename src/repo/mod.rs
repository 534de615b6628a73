//! Data-access layer. Every function runs on a caller-supplied connection so
//! that a handler can group reads and writes in one transaction.

pub mod attendance;
pub mod employee;
