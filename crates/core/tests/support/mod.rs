//! Shared test helpers for `intrasync-core` integration tests.
//!
//! These helpers provide a synthetic DOM and a lightweight calendar mock so
//! that extraction and sync tests can focus on behaviour instead of
//! boilerplate.

#![allow(dead_code)]

pub mod calendar;
pub mod dom;
