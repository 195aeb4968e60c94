#![allow(dead_code)]

use oskforge::keymap::{KeyDescriptor, KeyType, Keymap, KeymapRow, Margins};
use std::path::PathBuf;
use std::time::{Duration, Instant};

pub fn en_us_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join("keymaps")
        .join("en_us.json")
}

pub fn font_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join("fonts")
        .join("DejaVuSans.ttf")
}

pub fn en_us() -> Keymap {
    Keymap::load_from_file(en_us_path()).unwrap()
}

/// Builder for keymaps to keep test setup short.
pub struct KeymapBuilder {
    km: Keymap,
}

impl KeymapBuilder {
    pub fn new(total_key_width: f64, total_row_height: f64) -> Self {
        Self {
            km: Keymap {
                lang: "test".to_string(),
                kb_margins: Margins::default(),
                total_key_width,
                total_row_height,
                rows: Vec::new(),
            },
        }
    }

    pub fn margins(mut self, top: f64, bottom: f64, left: f64, right: f64) -> Self {
        self.km.kb_margins = Margins::new(top, bottom, left, right);
        self
    }

    pub fn row(mut self, height: f64, keys: Vec<KeyDescriptor>) -> Self {
        self.km.rows.push(KeymapRow::new(height, keys));
        self
    }

    /// A row of 1-unit standard keys, one per character of `chars`.
    pub fn char_row(self, height: f64, chars: &str) -> Self {
        let keys = chars
            .chars()
            .map(|c| KeyDescriptor::char(1.0, &c.to_string()))
            .collect();
        self.row(height, keys)
    }

    pub fn build(self) -> Keymap {
        self.km
    }
}

/// One key filling the whole canvas.
pub fn single_key() -> Keymap {
    KeymapBuilder::new(1.0, 1.0)
        .row(1.0, vec![KeyDescriptor::char(1.0, "a")])
        .build()
}

/// Two rows of two 1-unit keys: "ab" over "cd".
pub fn two_by_two() -> Keymap {
    KeymapBuilder::new(2.0, 2.0)
        .char_row(1.0, "ab")
        .char_row(1.0, "cd")
        .build()
}

pub fn special(width: f64, kt: KeyType) -> KeyDescriptor {
    KeyDescriptor::special(width, kt)
}

/// Synthetic clock: `ms` milliseconds after a fixed base instant.
pub struct Clock {
    base: Instant,
}

impl Clock {
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
        }
    }

    pub fn at(&self, ms: u64) -> Instant {
        self.base + Duration::from_millis(ms)
    }
}
