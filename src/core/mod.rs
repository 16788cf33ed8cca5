pub mod analyzer;
pub mod extractor;
pub mod inventory;
pub mod loader;

pub use analyzer::BundleAnalyzer;
pub use extractor::extract_icon_classes;
pub use inventory::IconInventory;
pub use loader::load_css;
