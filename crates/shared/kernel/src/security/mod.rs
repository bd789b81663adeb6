//! Input guards applied before any collaborator is invoked.

pub mod username;
