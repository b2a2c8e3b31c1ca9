pub mod assets;
pub mod filesystem;
