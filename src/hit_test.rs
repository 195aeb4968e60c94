use crate::error::HitTestError;
use crate::layout::{CompiledKey, CompiledKeyboard};
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Window within which a repeat of the same key is treated as a bounce.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(50);

/// Position of a key inside a compiled keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyId {
    pub row: usize,
    pub column: usize,
}

/// A key press that survived bounds, padding and debounce filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHit {
    pub id: KeyId,
    pub key: CompiledKey,
}

/// Last accepted key and when it was accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DebounceState {
    pub last_key: Option<KeyId>,
    pub last_event: Option<Instant>,
}

/// Resolves pointer coordinates to keys and filters key bounce.
///
/// The engine holds only debounce state; the keyboard is passed in per call
/// so one compiled layout can serve several engines. A single pointer is
/// assumed: a held key and two fast taps of the same key look identical.
#[derive(Debug, Clone)]
pub struct HitTester {
    window: Duration,
    state: DebounceState,
}

impl Default for HitTester {
    fn default() -> Self {
        Self::new()
    }
}

impl HitTester {
    pub fn new() -> Self {
        Self::with_window(DEFAULT_DEBOUNCE)
    }

    pub fn with_window(window: Duration) -> Self {
        Self {
            window,
            state: DebounceState::default(),
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn state(&self) -> DebounceState {
        self.state
    }

    /// Forget the last struck key.
    pub fn reset(&mut self) {
        self.state = DebounceState::default();
    }

    /// Resolves `(x, y)` at time `now` to a key press.
    ///
    /// Debounce state only changes when a key is accepted. A suppressed
    /// repeat leaves `last_event` at the earlier accepted press, so a burst
    /// is measured from its first hit.
    pub fn hit_test(
        &mut self,
        kb: &CompiledKeyboard,
        x: i32,
        y: i32,
        now: Instant,
    ) -> Result<KeyHit, HitTestError> {
        let id = locate(kb, x, y)?;
        let key = kb.key(id.row, id.column).copied().ok_or(HitTestError::KeyNotFound)?;

        if !key.is_key {
            trace!("({}, {}) hit padding at {:?}", x, y, id);
            return Err(HitTestError::PaddingHit);
        }

        if self.state.last_key == Some(id) {
            if let Some(prev) = self.state.last_event {
                if now.saturating_duration_since(prev) < self.window {
                    debug!("Debounced repeat of {:?}", id);
                    return Err(HitTestError::DebounceSuppressed);
                }
            }
        }

        self.state = DebounceState {
            last_key: Some(id),
            last_event: Some(now),
        };
        Ok(KeyHit { id, key })
    }

    /// [`hit_test`](Self::hit_test) stamped with the current monotonic time.
    pub fn press(&mut self, kb: &CompiledKeyboard, x: i32, y: i32) -> Result<KeyHit, HitTestError> {
        self.hit_test(kb, x, y, Instant::now())
    }
}

/// Finds the key under `(x, y)` without touching any debounce state.
///
/// Rows and keys are scanned linearly; the first row whose bottom edge is at
/// or below `y` wins, then the first key whose right edge is at or right of
/// `x`. Padding keys are returned like any other key.
pub fn locate(kb: &CompiledKeyboard, x: i32, y: i32) -> Result<KeyId, HitTestError> {
    if !kb.contains(x, y) {
        return Err(HitTestError::OutOfBounds);
    }

    let row = kb
        .rows()
        .iter()
        .position(|r| y <= r.bottom())
        .ok_or(HitTestError::KeyNotFound)?;

    let column = kb.rows()[row]
        .keys
        .iter()
        .position(|k| x <= k.right())
        .ok_or(HitTestError::KeyNotFound)?;

    Ok(KeyId { row, column })
}
