use ratatui::layout::Rect;

/// Rectangle of at most `width` x `height`, centered in `area`.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centers_inside_area() {
        let rect = centered_rect_by_size(Rect::new(0, 0, 80, 24), 40, 10);
        assert_eq!(rect, Rect::new(20, 7, 40, 10));
    }

    #[test]
    fn clamps_to_area() {
        let rect = centered_rect_by_size(Rect::new(2, 2, 10, 5), 40, 10);
        assert_eq!(rect, Rect::new(2, 2, 10, 5));
    }
}
