use ratatui::layout::Rect;

use crate::ui::keypad::{COLS, ROWS};

/// Screen regions: header, display, keypad, footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let display_height = 3.min(area.height.saturating_sub(header_height));
    let footer_height = 3.min(
        area.height
            .saturating_sub(header_height + display_height),
    );
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let display = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: display_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let keypad = Rect {
        x: area.x,
        y: area.y + header_height + display_height,
        width: area.width,
        height: area
            .height
            .saturating_sub(header_height + display_height + footer_height),
    };
    (header, display, keypad, footer)
}

/// Uniform cell size for the keypad grid. Zero when the region is too
/// small to show the grid at all.
fn cell_size(keypad: Rect) -> (u16, u16) {
    (
        keypad.width / COLS as u16,
        keypad.height / ROWS as u16,
    )
}

/// The rect of one keypad button, or `None` when the grid doesn't fit.
pub fn button_rect(keypad: Rect, row: usize, col: usize) -> Option<Rect> {
    if row >= ROWS || col >= COLS {
        return None;
    }
    let (cell_w, cell_h) = cell_size(keypad);
    if cell_w == 0 || cell_h == 0 {
        return None;
    }
    Some(Rect {
        x: keypad.x + col as u16 * cell_w,
        y: keypad.y + row as u16 * cell_h,
        width: cell_w,
        height: cell_h,
    })
}

/// Resolve a screen coordinate to the keypad cell under it.
pub fn hit_test(keypad: Rect, x: u16, y: u16) -> Option<(usize, usize)> {
    let (cell_w, cell_h) = cell_size(keypad);
    if cell_w == 0 || cell_h == 0 {
        return None;
    }
    if x < keypad.x || y < keypad.y {
        return None;
    }
    let col = ((x - keypad.x) / cell_w) as usize;
    let row = ((y - keypad.y) / cell_h) as usize;
    if row < ROWS && col < COLS {
        Some((row, col))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> Rect {
        Rect {
            x: 0,
            y: 0,
            width: 40,
            height: 24,
        }
    }

    #[test]
    fn regions_tile_the_screen_vertically() {
        let (header, display, keypad, footer) = layout_regions(screen());
        assert_eq!(header.y, 0);
        assert_eq!(display.y, header.height);
        assert_eq!(keypad.y, header.height + display.height);
        assert_eq!(footer.y + footer.height, 24);
        assert_eq!(
            header.height + display.height + keypad.height + footer.height,
            24
        );
    }

    #[test]
    fn hit_test_inverts_button_rect() {
        let (_, _, keypad, _) = layout_regions(screen());
        for row in 0..ROWS {
            for col in 0..COLS {
                let rect = button_rect(keypad, row, col).unwrap();
                assert_eq!(hit_test(keypad, rect.x, rect.y), Some((row, col)));
                assert_eq!(
                    hit_test(
                        keypad,
                        rect.x + rect.width - 1,
                        rect.y + rect.height - 1
                    ),
                    Some((row, col))
                );
            }
        }
    }

    #[test]
    fn hit_test_outside_grid_is_none() {
        let (_, _, keypad, _) = layout_regions(screen());
        assert_eq!(hit_test(keypad, 0, 0), None);
    }

    #[test]
    fn tiny_screen_has_no_buttons() {
        let tiny = Rect {
            x: 0,
            y: 0,
            width: 3,
            height: 4,
        };
        let (_, _, keypad, _) = layout_regions(tiny);
        assert_eq!(button_rect(keypad, 0, 0), None);
    }
}
