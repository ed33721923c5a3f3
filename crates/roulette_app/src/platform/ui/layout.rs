use ratatui::prelude::*;

pub struct MainAreas {
    pub header: Rect,
    pub card: Rect,
    pub hint: Rect,
    pub footer: Rect,
}

pub fn main_areas(area: Rect) -> MainAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(7),    // Roulette card
            Constraint::Length(3), // Spin hint
            Constraint::Length(1), // Footer
        ])
        .split(area);
    MainAreas {
        header: chunks[0],
        card: chunks[1],
        hint: chunks[2],
        footer: chunks[3],
    }
}

/// A `width` x `height` rectangle centred in `area`, shrunk to fit.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width.saturating_sub(2));
    let h = height.min(area.height.saturating_sub(2));
    let x = area.x + area.width.saturating_sub(w) / 2;
    let y = area.y + area.height.saturating_sub(h) / 2;
    Rect::new(x, y, w, h)
}

/// First row index to draw so that `selected` stays inside a window of `visible` rows.
pub fn scroll_offset(selected: usize, visible: usize) -> usize {
    if visible == 0 {
        return 0;
    }
    (selected + 1).saturating_sub(visible)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_fits_small_areas() {
        let area = Rect::new(0, 0, 20, 10);
        let rect = centered(area, 60, 22);
        assert_eq!(rect, Rect::new(1, 1, 18, 8));
    }

    #[test]
    fn scroll_keeps_selection_visible() {
        assert_eq!(scroll_offset(0, 5), 0);
        assert_eq!(scroll_offset(4, 5), 0);
        assert_eq!(scroll_offset(7, 5), 3);
        assert_eq!(scroll_offset(3, 0), 0);
    }
}
