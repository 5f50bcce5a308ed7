//! Gauge computation for a single countdown frame
//!
//! Everything here is a pure function of `(total_seconds, remaining_seconds)`.

/// Glyph for a filled cell of the minute gauge
pub const MINUTE_GLYPH: char = '\u{25AE}';
/// Glyph for a filled cell of the second gauge
pub const SECOND_GLYPH: char = '\u{25AF}';
/// Minute gauge shown for timers shorter than one minute
pub const PLACEHOLDER: &str = "--";
/// Cells in the second gauge once a timer spans whole minutes
pub const SECOND_CELLS_PER_MINUTE: u64 = 6;

const SECONDS_PER_CELL: u64 = 10;

/// One cell of a gauge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Filled,
    Empty,
}

/// A fixed-width row of cells, or the placeholder used below one minute
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gauge {
    Placeholder,
    Cells(Vec<Cell>),
}

impl Gauge {
    /// Build a gauge of `total` cells where the first `filled` are filled
    fn with_filled(total: u64, filled: u64) -> Self {
        Gauge::Cells(
            (0..total)
                .map(|i| if i < filled { Cell::Filled } else { Cell::Empty })
                .collect(),
        )
    }

    /// Number of cells (0 for the placeholder)
    pub fn len(&self) -> usize {
        match self {
            Gauge::Placeholder => 0,
            Gauge::Cells(cells) => cells.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of filled cells
    pub fn filled(&self) -> usize {
        match self {
            Gauge::Placeholder => 0,
            Gauge::Cells(cells) => cells.iter().filter(|c| **c == Cell::Filled).count(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Gauge::Placeholder)
    }

    /// Render filled cells as `glyph` and empty cells as spaces
    pub fn render(&self, glyph: char) -> String {
        match self {
            Gauge::Placeholder => PLACEHOLDER.to_string(),
            Gauge::Cells(cells) => cells
                .iter()
                .map(|c| match c {
                    Cell::Filled => glyph,
                    Cell::Empty => ' ',
                })
                .collect(),
        }
    }
}

/// Everything drawn for one tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySnapshot {
    pub minutes: u64,
    pub seconds: u64,
    pub minute_gauge: Gauge,
    pub second_gauge: Gauge,
}

impl DisplaySnapshot {
    /// Remaining time as `MM:SS`
    pub fn clock_text(&self) -> String {
        format!("{:02}:{:02}", self.minutes, self.seconds)
    }

    /// The three lines of a frame, top to bottom
    pub fn lines(&self) -> [String; 3] {
        [
            format!("  Time Remaining: {}", self.clock_text()),
            format!("  Minutes: {}", self.minute_gauge.render(MINUTE_GLYPH)),
            format!("  Seconds: {}", self.second_gauge.render(SECOND_GLYPH)),
        ]
    }
}

/// Compute the snapshot for `remaining_seconds` out of `total_seconds`
pub fn render(total_seconds: u64, remaining_seconds: u64) -> DisplaySnapshot {
    debug_assert!(remaining_seconds <= total_seconds);

    DisplaySnapshot {
        minutes: remaining_seconds / 60,
        seconds: remaining_seconds % 60,
        minute_gauge: minute_gauge(total_seconds, remaining_seconds),
        second_gauge: second_gauge(total_seconds, remaining_seconds),
    }
}

/// One cell per whole minute of the total, emptied left to right
pub fn minute_gauge(total_seconds: u64, remaining_seconds: u64) -> Gauge {
    let total_minutes = total_seconds / 60;
    if total_minutes == 0 {
        return Gauge::Placeholder;
    }
    Gauge::with_filled(total_minutes, remaining_seconds / 60)
}

/// Ten-second chunks of the current minute, or of the whole timer below one minute
pub fn second_gauge(total_seconds: u64, remaining_seconds: u64) -> Gauge {
    if total_seconds / 60 > 0 {
        Gauge::with_filled(
            SECOND_CELLS_PER_MINUTE,
            chunks(remaining_seconds % 60),
        )
    } else {
        Gauge::with_filled(chunks(total_seconds), chunks(remaining_seconds))
    }
}

/// Round up so a chunk stays visible while any second of it remains
fn chunks(seconds: u64) -> u64 {
    seconds.div_ceil(SECONDS_PER_CELL)
}

/// Format seconds as `MM:SS`
pub fn format_clock(remaining_seconds: u64) -> String {
    format!("{:02}:{:02}", remaining_seconds / 60, remaining_seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_clock(299), "04:59");
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(render(300, 299).clock_text(), "04:59");
    }

    #[test]
    fn minute_gauge_tracks_whole_minutes() {
        for total in [60, 65, 125, 600, 2400] {
            for remaining in 0..=total {
                let gauge = minute_gauge(total, remaining);
                assert_eq!(gauge.len() as u64, total / 60);
                assert_eq!(gauge.filled() as u64, remaining / 60);
            }
        }
    }

    #[test]
    fn minute_gauge_is_placeholder_below_one_minute() {
        for total in 0..60 {
            let gauge = minute_gauge(total, total);
            assert!(gauge.is_placeholder());
            assert_eq!(gauge.render(MINUTE_GLYPH), "--");
        }
    }

    #[test]
    fn second_gauge_has_six_cells_once_minutes_exist() {
        for total in [60, 61, 119, 300, 1500] {
            for remaining in 0..=total {
                assert_eq!(second_gauge(total, remaining).len(), 6);
            }
        }
    }

    #[test]
    fn sub_minute_second_gauge_never_empties_early() {
        for total in 0..60 {
            let gauge = second_gauge(total, total);
            assert_eq!(gauge.len() as u64, total.div_ceil(10));

            let mut previous = usize::MAX;
            for remaining in (0..=total).rev() {
                let filled = second_gauge(total, remaining).filled();
                assert!(filled <= previous);
                assert_eq!(filled == 0, remaining == 0);
                previous = filled;
            }
        }
    }

    #[test]
    fn sixty_five_second_timer() {
        assert_eq!(minute_gauge(65, 65).filled(), 1);
        assert_eq!(minute_gauge(65, 60).filled(), 1);
        assert_eq!(minute_gauge(65, 59).filled(), 0);
        assert_eq!(minute_gauge(65, 59).len(), 1);

        assert_eq!(second_gauge(65, 65).filled(), 1);
        assert_eq!(second_gauge(65, 60).filled(), 0);
        assert_eq!(second_gauge(65, 59).filled(), 6);
        assert_eq!(second_gauge(65, 11).filled(), 2);
        assert_eq!(second_gauge(65, 10).filled(), 1);
    }

    #[test]
    fn twenty_five_second_timer() {
        let snapshot = render(25, 25);
        assert!(snapshot.minute_gauge.is_placeholder());
        assert_eq!(snapshot.second_gauge.len(), 3);

        assert_eq!(second_gauge(25, 21).filled(), 3);
        assert_eq!(second_gauge(25, 10).filled(), 1);
        assert_eq!(second_gauge(25, 1).filled(), 1);
        assert_eq!(second_gauge(25, 0).filled(), 0);
    }

    #[test]
    fn zero_second_timer_renders_empty_frame() {
        let snapshot = render(0, 0);
        assert_eq!(snapshot.clock_text(), "00:00");
        assert!(snapshot.minute_gauge.is_placeholder());
        assert_eq!(snapshot.second_gauge.len(), 0);
        assert_eq!(snapshot.second_gauge.filled(), 0);
    }

    #[test]
    fn lines_use_distinct_glyphs() {
        let [time, minutes, seconds] = render(180, 150).lines();
        assert_eq!(time, "  Time Remaining: 02:30");
        assert_eq!(minutes, "  Minutes: \u{25AE}\u{25AE} ");
        assert_eq!(seconds, "  Seconds: \u{25AF}\u{25AF}\u{25AF}   ");
    }
}
