//! Scrolling arithmetic for the entry list.
//!
//! Everything here is pure so the state machine can re-clamp after every
//! cursor move, reload, and resize without touching the terminal.

/// Rows used when the display height is not known yet
pub const DEFAULT_WINDOW: usize = 20;
/// The list never shrinks below this many rows
pub const MIN_WINDOW: usize = 6;
/// Rows reserved for titles, help, and status lines
const CHROME_ROWS: usize = 10;

/// Number of list rows that fit in a display `height` rows tall.
pub fn window_size(height: Option<u16>) -> usize {
    match height {
        None | Some(0) => DEFAULT_WINDOW,
        Some(h) => usize::from(h).saturating_sub(CHROME_ROWS).max(MIN_WINDOW),
    }
}

/// Move `cursor` by `delta`, clamped to `[0, len - 1]` (0 when empty).
pub fn move_cursor(cursor: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let moved = if delta < 0 {
        cursor.saturating_sub(delta.unsigned_abs())
    } else {
        cursor.saturating_add(delta.unsigned_abs())
    };
    moved.min(len - 1)
}

/// Offset that keeps `cursor` inside `[offset, offset + window)`.
///
/// Scrolls as little as possible from `offset` and never past
/// `max(0, total - window)`.
pub fn clamp_offset(cursor: usize, offset: usize, total: usize, window: usize) -> usize {
    if total == 0 {
        return 0;
    }
    let cursor = cursor.min(total - 1);
    let visible = window.clamp(1, total);
    let max_offset = total - visible;

    let mut offset = offset.min(max_offset);
    if cursor < offset {
        offset = cursor;
    } else if cursor >= offset + visible {
        offset = cursor + 1 - visible;
    }
    offset
}

/// Half-open index range of rows to draw.
pub fn visible_range(offset: usize, total: usize, window: usize) -> std::ops::Range<usize> {
    let start = offset.min(total);
    let end = start.saturating_add(window).min(total);
    start..end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_size_defaults_and_minimum() {
        assert_eq!(window_size(None), DEFAULT_WINDOW);
        assert_eq!(window_size(Some(0)), DEFAULT_WINDOW);
        assert_eq!(window_size(Some(12)), MIN_WINDOW);
        assert_eq!(window_size(Some(40)), 30);
    }

    #[test]
    fn test_move_cursor_clamps() {
        assert_eq!(move_cursor(0, -1, 5), 0);
        assert_eq!(move_cursor(4, 1, 5), 4);
        assert_eq!(move_cursor(2, 1, 5), 3);
        assert_eq!(move_cursor(3, 1, 0), 0);
    }

    #[test]
    fn test_offset_follows_cursor_down_and_up() {
        // window of 6 over 20 rows
        assert_eq!(clamp_offset(5, 0, 20, 6), 0);
        assert_eq!(clamp_offset(6, 0, 20, 6), 1);
        assert_eq!(clamp_offset(19, 1, 20, 6), 14);
        assert_eq!(clamp_offset(3, 14, 20, 6), 3);
    }

    #[test]
    fn test_offset_never_exceeds_max() {
        assert_eq!(clamp_offset(2, 50, 10, 6), 2);
        assert_eq!(clamp_offset(9, 50, 10, 6), 4);
        assert_eq!(clamp_offset(0, 3, 4, 20), 0);
        assert_eq!(clamp_offset(0, 0, 0, 6), 0);
    }

    #[test]
    fn test_invariant_holds_for_every_cursor_and_window() {
        for total in 0..30 {
            for window in MIN_WINDOW..25 {
                let mut offset = 0;
                for cursor in (0..total).chain((0..total).rev()) {
                    offset = clamp_offset(cursor, offset, total, window);
                    assert!(offset <= cursor, "offset {offset} > cursor {cursor}");
                    assert!(cursor < offset + window);
                    assert!(offset <= total.saturating_sub(window));
                }
            }
        }
    }

    #[test]
    fn test_visible_range() {
        assert_eq!(visible_range(3, 20, 6), 3..9);
        assert_eq!(visible_range(17, 20, 6), 17..20);
        assert_eq!(visible_range(0, 0, 6), 0..0);
    }
}
