//! Shared UI crate for Linernotes. Cross-platform logic, components, and views live here.

pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // "Last updated on {date}" line (components/last_updated.rs)
    pub mod last_updated;
    pub use last_updated::last_updated_line;
    pub use last_updated::LastUpdated;

    // Entity sidebar hosting the last-updated line (components/entity_sidebar.rs)
    pub mod entity_sidebar;
    pub use entity_sidebar::EntitySidebar;

    // Localized site header with locale switcher (components/site_header.rs)
    pub mod site_header;
    pub use site_header::register_header_links;
    pub use site_header::HeaderLinks;
    pub use site_header::SiteHeader;
}
