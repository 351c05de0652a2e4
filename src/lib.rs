//! Password reset and login client for Henny Penny tenants.

pub mod api;
pub mod cli;
pub mod reset;
pub mod strength;
