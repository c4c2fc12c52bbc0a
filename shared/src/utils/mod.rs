//! Common utility functions

pub mod phone;
pub mod text;
