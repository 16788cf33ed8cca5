//! # ICONSIFT
//!
//! Extract usable Font Awesome icon classes from a local CSS bundle.
//!
//! ICONSIFT scans a `fontawesome-all.min.css` build for icon-selector rules
//! and reports the icon class names actually present, partitioned into brand
//! and non-brand sets. Guessing icon names wastes time; parsing what is
//! really in the build avoids invisible (missing) icons.
//!
//! ## Output Formats
//!
//! - **Plain lists**: one class name per line (all / brands / non-brands)
//! - **Markdown**: two-column reference table with usage snippets
//! - **JSON**: counts plus the three sorted arrays
//! - **CSV**: `icon_class,is_brand` rows

pub mod core;
pub mod formatters;
