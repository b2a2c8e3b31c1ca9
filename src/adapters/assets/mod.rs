//! Embedded template assets.

mod desktop_entry_template;

pub use desktop_entry_template::render_desktop_entry;
