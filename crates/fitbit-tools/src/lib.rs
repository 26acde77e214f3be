//! Command runners behind the `fitbit-import` and `fitbit-stepstreak`
//! binaries.

pub mod bootstrap;
pub mod commands;
