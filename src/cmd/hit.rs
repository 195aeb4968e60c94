use crate::reports;
use clap::Args;
use oskforge::api::OskSession;
use oskforge::config::Config;
use oskforge::error::OskResult;
use oskforge::keymap::Keymap;
use std::time::{Duration, Instant};

/// One synthetic pointer event: `x,y` or `x,y@ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub x: i32,
    pub y: i32,
    pub at_ms: Option<u64>,
}

// Events without an explicit time are spaced this far apart.
const DEFAULT_SPACING_MS: u64 = 1000;

pub fn parse_event(s: &str) -> Result<PointerEvent, String> {
    let (coords, at_ms) = match s.split_once('@') {
        Some((c, t)) => {
            let ms = t
                .trim()
                .parse::<u64>()
                .map_err(|_| format!("invalid timestamp in '{}'", s))?;
            (c, Some(ms))
        }
        None => (s, None),
    };

    let (x, y) = coords
        .split_once(',')
        .ok_or_else(|| format!("expected x,y in '{}'", s))?;
    let x = x.trim().parse().map_err(|_| format!("invalid x in '{}'", s))?;
    let y = y.trim().parse().map_err(|_| format!("invalid y in '{}'", s))?;

    Ok(PointerEvent { x, y, at_ms })
}

#[derive(Args, Debug, Clone)]
pub struct HitArgs {
    #[command(flatten)]
    pub config: Config,

    /// Pointer events, e.g. `100,900` or `100,900@10` (milliseconds).
    #[arg(required = true, value_parser = parse_event)]
    pub events: Vec<PointerEvent>,
}

pub fn run(args: HitArgs, keymap: &Keymap) -> OskResult<()> {
    let session = OskSession::from_keymap(keymap, &args.config)?;
    let start = Instant::now();

    let results: Vec<_> = args
        .events
        .iter()
        .enumerate()
        .map(|(i, ev)| {
            let ms = ev.at_ms.unwrap_or(i as u64 * DEFAULT_SPACING_MS);
            let outcome = session.press_at(ev.x, ev.y, start + Duration::from_millis(ms));
            (*ev, ms, outcome)
        })
        .collect();

    reports::print_hits(&results);
    Ok(())
}
