use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

/// Normalized icon inventory for one CSS bundle.
///
/// All three sequences are sorted ascending and duplicate-free. `brands` is
/// a subset of `icons`; `non_brands` is exactly `icons` minus `brands`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconInventory {
    /// Every usable base-form class (`fa-<name>`).
    pub icons: Vec<String>,
    /// Brand/logo icons (the `fab` style family), in base form.
    pub brands: Vec<String>,
    /// Base icons that are not brands (solid/regular families).
    pub non_brands: Vec<String>,
}

impl IconInventory {
    /// Normalizes raw selector matches into base usable tokens.
    ///
    /// In Font Awesome 5, `fab` = brands, `fas` = solid, `far` = regular.
    /// Base `fa-*` classes are kept verbatim; `fab-*` classes are folded to
    /// `fa-*` and remembered as brands; `fas-*`/`far-*`/`fal-*` fold to
    /// `fa-*` without the brand marker. Any other prefix shape is dropped.
    pub fn from_raw_classes(raw: &HashSet<String>) -> Self {
        let mut base_icons = BTreeSet::new();
        let mut brand_icons = BTreeSet::new();

        for class in raw {
            if class.starts_with("fa-") {
                base_icons.insert(class.clone());
            } else if let Some(rest) = class.strip_prefix("fab-") {
                brand_icons.insert(format!("fa-{rest}"));
            } else if class.starts_with("fas-")
                || class.starts_with("far-")
                || class.starts_with("fal-")
            {
                if let Some((_, rest)) = class.split_once('-') {
                    base_icons.insert(format!("fa-{rest}"));
                }
            }
        }

        // Inferred brand base names merge into the full list, but the brand
        // set stays separate to drive the brands-only outputs.
        let icons: Vec<String> = base_icons.union(&brand_icons).cloned().collect();
        let non_brands: Vec<String> = icons
            .iter()
            .filter(|icon| !brand_icons.contains(icon.as_str()))
            .cloned()
            .collect();

        Self {
            icons,
            brands: brand_icons.into_iter().collect(),
            non_brands,
        }
    }

    pub fn total(&self) -> usize {
        self.icons.len()
    }

    pub fn brand_count(&self) -> usize {
        self.brands.len()
    }

    pub fn non_brand_count(&self) -> usize {
        self.non_brands.len()
    }

    pub fn is_brand(&self, icon: &str) -> bool {
        self.brands.binary_search_by(|b| b.as_str().cmp(icon)).is_ok()
    }
}
