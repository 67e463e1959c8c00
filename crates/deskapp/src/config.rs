//! # Configuration
//!
//! Deskapp configuration is managed by [`clapfig`], which handles layered
//! loading from TOML files and programmatic overrides.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Override Config**: `deskapp.toml` in the directory passed to
//!    [`crate::init::initialize`].
//! 2. **Global Config**: `deskapp.toml` in the OS-appropriate data directory
//!    (via the `directories` crate), or `$DESKAPP_DATA`.
//! 3. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `page_sizes` | `[10, 25, 50, 100]` | Page sizes offered by the pager |
//! | `default_page_size` | `10` | Page size a list starts with |
//! | `min_column_width` | `50` | Floor for column resizing, in pixels |
//! | `default_column_width` | `150` | Width of columns with no built-in default |
//! | `id_digits` | `6` | Zero-padded digits in minted record ids |
//! | `property_aliases` | `street = "st"`, `avenue = "ave"` | Word aliases for property matching |
//! | `create_reservation_preserve` | date, all-day, time | Filters kept by "clear all" when creating a reservation |

use confique::Config;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::filters::AliasTable;
use crate::pagination::DEFAULT_PAGE_SIZES;

fn default_preserve() -> Vec<String> {
    vec![
        "reservationDateRange".to_string(),
        "reservationAllDay".to_string(),
        "reservationTimeRange".to_string(),
    ]
}

/// Configuration for deskapp, stored in `deskapp.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DeskConfig {
    /// Page sizes offered by the pager.
    /// When absent, defaults to [10, 25, 50, 100].
    pub page_sizes: Option<Vec<usize>>,

    /// Page size a list starts with. Must be one of `page_sizes`.
    #[config(default = 10)]
    pub default_page_size: usize,

    /// Minimum column width in pixels when resizing.
    #[config(default = 50)]
    pub min_column_width: u32,

    /// Fallback width for columns without a built-in default.
    #[config(default = 150)]
    pub default_column_width: u32,

    /// Digits in the numeric suffix of minted ids.
    #[config(default = 6)]
    pub id_digits: usize,

    /// Word aliases applied when matching property names.
    /// When absent, `street → st` and `avenue → ave`.
    pub property_aliases: Option<BTreeMap<String, String>>,

    /// Filter keys kept by "clear all" on the create-reservation page.
    pub create_reservation_preserve: Option<Vec<String>>,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            page_sizes: None,
            default_page_size: 10,
            min_column_width: 50,
            default_column_width: 150,
            id_digits: 6,
            property_aliases: None,
            create_reservation_preserve: None,
        }
    }
}

impl DeskConfig {
    /// Allowed page sizes, using defaults if not configured or empty.
    pub fn page_sizes(&self) -> Vec<usize> {
        match &self.page_sizes {
            Some(sizes) if sizes.iter().any(|&s| s > 0) => {
                sizes.iter().copied().filter(|&s| s > 0).collect()
            }
            _ => DEFAULT_PAGE_SIZES.to_vec(),
        }
    }

    /// The configured starting page size if it is allowed, else the first
    /// allowed size.
    pub fn default_page_size(&self) -> usize {
        let sizes = self.page_sizes();
        if sizes.contains(&self.default_page_size) {
            self.default_page_size
        } else {
            sizes.first().copied().unwrap_or(DEFAULT_PAGE_SIZES[0])
        }
    }

    pub fn aliases(&self) -> AliasTable {
        match &self.property_aliases {
            Some(words) => AliasTable::new(words.clone()),
            None => AliasTable::default(),
        }
    }

    pub fn create_reservation_preserve(&self) -> Vec<String> {
        self.create_reservation_preserve
            .clone()
            .unwrap_or_else(default_preserve)
    }
}
