//! Core workspace logic: document model, hide/show transitions, persistence

pub mod document;
pub mod error;
pub mod file_system;
pub mod folders;
pub mod jsonc;
