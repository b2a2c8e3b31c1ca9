pub mod config;
pub mod documents;
pub mod error;
pub mod params;
pub mod paths;
pub mod platform;
pub mod profile;

pub use config::{CONFIG_FILE, GeneratorConfig, IconPolicy};
pub use documents::{ConfigDocument, ConfigDocuments};
pub use error::AppError;
pub use params::AppParams;
pub use platform::{Platform, PlatformTarget};
pub use profile::{DesktopEntrySpec, IconSpec, PlatformProfile};
