use crate::config::Config;
use crate::error::{HitTestError, OskResult};
use crate::hit_test::{DebounceState, HitTester, KeyHit};
use crate::keymap::Keymap;
use crate::layout::CompiledKeyboard;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};
use tracing::info;

/// A compiled keyboard plus the debounce state of its single pointer.
///
/// Pointer events may arrive from any thread; the lock serializes the
/// read-then-write of the debounce state. The keyboard itself is shared
/// read-only, so renderers can hold their own `Arc` to it.
pub struct OskSession {
    keyboard: Arc<CompiledKeyboard>,
    tester: Mutex<HitTester>,
}

impl OskSession {
    pub fn new(keyboard: CompiledKeyboard, debounce: Duration) -> Self {
        Self {
            keyboard: Arc::new(keyboard),
            tester: Mutex::new(HitTester::with_window(debounce)),
        }
    }

    /// Validates and compiles `km` using the canvas and debounce settings in `config`.
    pub fn from_keymap(km: &Keymap, config: &Config) -> OskResult<Self> {
        let kb = CompiledKeyboard::from_keymap(
            km,
            config.canvas.canvas_width,
            config.canvas.canvas_height,
        )?;
        info!(
            "Session ready: {}x{} keyboard at ({}, {}), {} rows",
            kb.width(),
            kb.height(),
            kb.origin().x,
            kb.origin().y,
            kb.rows().len()
        );
        Ok(Self::new(kb, config.debounce.window()))
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P, config: &Config) -> OskResult<Self> {
        let km = Keymap::load_from_file(path)?;
        Self::from_keymap(&km, config)
    }

    pub fn keyboard(&self) -> Arc<CompiledKeyboard> {
        Arc::clone(&self.keyboard)
    }

    // Debounce state is replaced in a single assignment; a poisoned lock is still usable.
    fn tester(&self) -> MutexGuard<'_, HitTester> {
        self.tester.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn press_at(&self, x: i32, y: i32, now: Instant) -> Result<KeyHit, HitTestError> {
        self.tester().hit_test(&self.keyboard, x, y, now)
    }

    pub fn press(&self, x: i32, y: i32) -> Result<KeyHit, HitTestError> {
        self.press_at(x, y, Instant::now())
    }

    pub fn debounce_state(&self) -> DebounceState {
        self.tester().state()
    }

    pub fn reset(&self) {
        self.tester().reset();
    }
}
