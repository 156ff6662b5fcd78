use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Areas inside the body.
pub struct BodyRegions {
    pub draft: Rect,
    pub result: Rect,
    /// Present only in improvement mode.
    pub instructions: Option<Rect>,
    pub notice: Rect,
}

pub fn body_regions(body: Rect, show_instructions: bool) -> BodyRegions {
    let mut constraints = vec![Constraint::Min(5), Constraint::Min(5)];
    if show_instructions {
        constraints.push(Constraint::Length(3));
    }
    constraints.push(Constraint::Length(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(body);

    BodyRegions {
        draft: chunks[0],
        result: chunks[1],
        instructions: show_instructions.then(|| chunks[2]),
        notice: chunks[chunks.len() - 1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_cover_area() {
        let area = Rect::new(0, 0, 80, 24);
        let (header, body, footer) = layout_regions(area);
        assert_eq!(header.height, 3);
        assert_eq!(footer.height, 3);
        assert_eq!(body.height, 18);
        assert_eq!(footer.y, 21);
    }

    #[test]
    fn instructions_only_in_improvement_mode() {
        let body = Rect::new(0, 3, 80, 18);
        assert!(body_regions(body, false).instructions.is_none());

        let regions = body_regions(body, true);
        let instructions = regions.instructions.unwrap();
        assert_eq!(instructions.height, 3);
        assert_eq!(regions.notice.height, 1);
    }
}
