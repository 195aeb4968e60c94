use super::Keymap;
use crate::error::ValidationError;

/// Combined margin fraction beyond which an axis counts as overrun.
pub const MAX_MARGIN_SUM: f64 = 0.8;

/// Checks that a keymap's measurements are geometrically consistent.
///
/// Checks run in a fixed order and the first failure wins:
/// negative margins, excessive margins, per-row width overrun, total height
/// overrun, then unit basis and per-dimension sanity.
///
/// The margin overrun check only fails when *both* axes exceed
/// [`MAX_MARGIN_SUM`]. A keymap with huge vertical margins and no horizontal
/// margins is accepted.
pub fn validate(km: &Keymap) -> Result<(), ValidationError> {
    let m = &km.kb_margins;
    if m.top < 0.0 || m.bottom < 0.0 || m.left < 0.0 || m.right < 0.0 {
        return Err(ValidationError::NegativeMargin);
    }
    if (m.top + m.bottom) > MAX_MARGIN_SUM && (m.left + m.right) > MAX_MARGIN_SUM {
        return Err(ValidationError::ExcessiveMargins);
    }

    for (i, row) in km.rows.iter().enumerate() {
        let sum = row.width_sum();
        if sum > km.total_key_width {
            return Err(ValidationError::RowWidthExceeded {
                row: i,
                sum,
                limit: km.total_key_width,
            });
        }
    }

    let height_sum = km.height_sum();
    if height_sum > km.total_row_height {
        return Err(ValidationError::TotalHeightExceeded {
            sum: height_sum,
            limit: km.total_row_height,
        });
    }

    let basis_ok = |v: f64| v.is_finite() && v > 0.0;
    let margins_finite = [m.top, m.bottom, m.left, m.right]
        .iter()
        .all(|v| v.is_finite());
    if !basis_ok(km.total_key_width) || !basis_ok(km.total_row_height) || !margins_finite {
        return Err(ValidationError::InvalidUnitBasis);
    }

    let dim_ok = |v: f64| v.is_finite() && v >= 0.0;
    for (i, row) in km.rows.iter().enumerate() {
        if !dim_ok(row.row_height) || !row.keys.iter().all(|k| dim_ok(k.key_width)) {
            return Err(ValidationError::NegativeDimension { row: i });
        }
    }

    Ok(())
}
