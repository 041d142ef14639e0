//! Library components for the conditional field editor CLI.

pub mod logging;
