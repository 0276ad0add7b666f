//! Cross-platform, framework-free core: data model, catalog access, and the
//! per-user date formatter.

pub mod catalog;
pub mod entity;
pub mod format;
pub mod viewer;
