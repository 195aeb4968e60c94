use crate::error::OskResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum_macros::{Display, EnumIter};
use tracing::info;

pub mod validate;

pub use validate::validate;

/// What a key does when struck. Serialized as the integer code used in
/// keymap files (0 = standard character ... 6 = alt).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumIter, Display, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
#[strum(serialize_all = "snake_case")]
pub enum KeyType {
    #[default]
    Standard,
    Enter,
    Backspace,
    Delete,
    CapsLock,
    Control,
    Alt,
}

impl KeyType {
    /// Short mnemonic drawn on special keys. Standard keys show their character instead.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Self::Standard => None,
            Self::Enter => Some("RET"),
            Self::Backspace => Some("BKSP"),
            Self::Delete => Some("DEL"),
            Self::CapsLock => Some("CPLK"),
            Self::Control => Some("CTRL"),
            Self::Alt => Some("ALT"),
        }
    }
}

impl TryFrom<u8> for KeyType {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Standard),
            1 => Ok(Self::Enter),
            2 => Ok(Self::Backspace),
            3 => Ok(Self::Delete),
            4 => Ok(Self::CapsLock),
            5 => Ok(Self::Control),
            6 => Ok(Self::Alt),
            other => Err(format!("unknown keyType {}", other)),
        }
    }
}

impl From<KeyType> for u8 {
    fn from(kt: KeyType) -> Self {
        match kt {
            KeyType::Standard => 0,
            KeyType::Enter => 1,
            KeyType::Backspace => 2,
            KeyType::Delete => 3,
            KeyType::CapsLock => 4,
            KeyType::Control => 5,
            KeyType::Alt => 6,
        }
    }
}

/// Border around the keyboard, as fractions of the canvas height (top/bottom)
/// and width (left/right).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    #[serde(default)]
    pub top: f64,
    #[serde(default)]
    pub bottom: f64,
    #[serde(default)]
    pub left: f64,
    #[serde(default)]
    pub right: f64,
}

impl Margins {
    pub fn new(top: f64, bottom: f64, left: f64, right: f64) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyDescriptor {
    #[serde(default)]
    pub is_padding: bool,
    #[serde(default)]
    pub key_type: KeyType,
    #[serde(default)]
    pub key_width: f64,
    #[serde(default)]
    pub char: String,
}

impl KeyDescriptor {
    pub fn char(key_width: f64, c: &str) -> Self {
        Self {
            is_padding: false,
            key_type: KeyType::Standard,
            key_width,
            char: c.to_string(),
        }
    }

    pub fn special(key_width: f64, key_type: KeyType) -> Self {
        Self {
            is_padding: false,
            key_type,
            key_width,
            char: String::new(),
        }
    }

    pub fn padding(key_width: f64) -> Self {
        Self {
            is_padding: true,
            key_type: KeyType::Standard,
            key_width,
            char: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeymapRow {
    #[serde(default)]
    pub row_height: f64,
    #[serde(default)]
    pub keys: Vec<KeyDescriptor>,
}

impl KeymapRow {
    pub fn new(row_height: f64, keys: Vec<KeyDescriptor>) -> Self {
        Self { row_height, keys }
    }

    pub fn width_sum(&self) -> f64 {
        self.keys.iter().map(|k| k.key_width).sum()
    }
}

/// Resolution-independent keyboard description, as stored in keymap JSON files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Keymap {
    #[serde(default)]
    pub lang: String,
    #[serde(default)]
    pub kb_margins: Margins,
    #[serde(default)]
    pub total_key_width: f64,
    #[serde(default)]
    pub total_row_height: f64,
    #[serde(default)]
    pub rows: Vec<KeymapRow>,
}

impl Keymap {
    pub fn from_json_str(content: &str) -> OskResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Reads and deserializes a keymap file. The result is not validated.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> OskResult<Self> {
        let content = fs::read_to_string(&path)?;
        let keymap = Self::from_json_str(&content)?;
        info!(
            "Loaded keymap '{}' from {:?}: {} rows",
            keymap.lang,
            path.as_ref(),
            keymap.rows.len()
        );
        Ok(keymap)
    }

    pub fn height_sum(&self) -> f64 {
        self.rows.iter().map(|r| r.row_height).sum()
    }
}
