//! Screen layout for the carousel and mouse hit testing.

use ratatui::layout::Rect;

/// Columns reserved on each side of the track for the prev/next buttons.
const SIDE_GUTTER: u16 = 4;

/// Width of a single indicator cell, including spacing.
const INDICATOR_PITCH: u16 = 2;

/// Areas of every interactive element on screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CarouselLayout {
    pub title: Rect,
    pub track: Rect,
    pub previous: Rect,
    pub next: Rect,
    pub indicators: Vec<Rect>,
    pub status: Option<Rect>,
}

impl CarouselLayout {
    /// Lay out the carousel inside `area`.
    ///
    /// Rows from the top: title, blank, track, blank, indicators, and the
    /// status bar on the last row when `status_bar` is set. Indicators that
    /// do not fit on the row are dropped.
    pub fn compute(area: Rect, indicator_count: usize, status_bar: bool) -> Self {
        let status = if status_bar && area.height > 0 {
            Some(Rect {
                x: area.x,
                y: area.y + area.height - 1,
                width: area.width,
                height: 1,
            })
        } else {
            None
        };

        let main = Rect {
            height: area.height.saturating_sub(u16::from(status.is_some())),
            ..area
        };

        let title = Rect {
            height: main.height.min(1),
            ..main
        };

        let track = Rect {
            x: main.x + SIDE_GUTTER.min(main.width / 2),
            y: main.y + 2u16.min(main.height),
            width: main.width.saturating_sub(SIDE_GUTTER * 2),
            height: main.height.saturating_sub(4),
        };

        let button_y = track.y + track.height / 2;
        let previous = Rect {
            x: main.x + 1u16.min(main.width),
            y: button_y,
            width: 2u16.min(main.width),
            height: u16::from(main.height > 0),
        };
        let next = Rect {
            x: (main.x + main.width).saturating_sub(3),
            y: button_y,
            width: 2u16.min(main.width),
            height: u16::from(main.height > 0),
        };

        let indicator_row = track.y + track.height + 1;
        let mut indicators = Vec::new();
        if indicator_row < main.y + main.height {
            let fits = (main.width / INDICATOR_PITCH) as usize;
            let shown = indicator_count.min(fits);
            let row_width = shown as u16 * INDICATOR_PITCH;
            let start = main.x + (main.width - row_width) / 2;
            for i in 0..shown {
                indicators.push(Rect {
                    x: start + i as u16 * INDICATOR_PITCH,
                    y: indicator_row,
                    width: 1,
                    height: 1,
                });
            }
        }

        Self {
            title,
            track,
            previous,
            next,
            indicators,
            status,
        }
    }

    /// Index of the indicator under (`col`, `row`), if any.
    pub fn indicator_at(&self, col: u16, row: u16) -> Option<usize> {
        self.indicators
            .iter()
            .position(|rect| contains(*rect, col, row))
    }
}

/// Whether (`col`, `row`) falls inside `rect`.
pub fn contains(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x
        && col < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}
