use ratatui::layout::Rect;

/// Returns a centered `Rect` that is `percent_x`% wide of `area` and exactly
/// `height` rows tall (clamped to `area`). Minimum 1×1.
pub fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let popup_w = (area.width as u32 * percent_x as u32 / 100).max(1) as u16;
    let popup_h = height.clamp(1, area.height.max(1));

    let x = area.x + (area.width.saturating_sub(popup_w)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_h)) / 2;

    Rect { x, y, width: popup_w.min(area.width), height: popup_h.min(area.height) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let r = centered_rect(50, 5, Rect::new(0, 0, 80, 24));
        assert_eq!(r, Rect::new(20, 9, 40, 5));
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let r = centered_rect(50, 10, Rect::new(0, 0, 10, 4));
        assert_eq!(r.height, 4);
        assert_eq!(r.width, 5);
    }
}
