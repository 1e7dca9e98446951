pub mod imports;
pub mod layers;

pub use imports::extract_imports;
pub use layers::{classify_import, classify_path};
