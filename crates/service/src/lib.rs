//! Service layer for the employee directory.
//! - `directory` holds the request-facing operations and the record-store
//!   abstraction both backends implement.
//! - `db` and `file` are the two store implementations; `storage` carries
//!   the flat-file plumbing the file store sits on.

pub mod db;
pub mod directory;
pub mod errors;
pub mod file;
pub mod storage;
