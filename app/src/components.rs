//! Reusable UI components: page chrome, icons, loading indicator, error
//! template and the small scroll/sidebar affordances.

pub mod error_template;
pub mod header;
pub mod icons;
pub mod loader;
pub mod scroll_top;
pub mod sidebar;
