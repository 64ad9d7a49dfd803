//! In-memory bookkeeping core: named accounts, validated deposits and
//! withdrawals, and an append-only log of every accepted change.

pub mod app;
pub mod common;
pub mod domain;
pub mod io;
pub mod worker;
