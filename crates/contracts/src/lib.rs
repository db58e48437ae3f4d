//! Wire-level data model shared by the admin front-end.
//!
//! Every type here mirrors the JSON the catalog backend speaks; the front-end keeps only
//! transient copies of these records.

pub mod domain;
