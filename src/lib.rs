pub mod api;
pub mod config;
pub mod error;
pub mod hit_test;
pub mod keymap;
pub mod layout;
pub mod render;

pub use error::{HitTestError, OskError, OskResult, ValidationError};
pub use hit_test::{HitTester, KeyHit, KeyId};
pub use keymap::{KeyType, Keymap};
pub use layout::{compile, CompiledKey, CompiledKeyboard, CompiledRow, Point};
