use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

use super::form::FormField;

/// Rows per form field (border + value + border)
const FIELD_HEIGHT: u16 = 3;

/// Form screen layout configuration
pub struct AppLayout {
    pub title_area: Rect,
    pub field_areas: Vec<Rect>,
    pub output_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Create the form layout:
    /// - Title: top row
    /// - One bordered box per form field
    /// - Generated query box
    /// - Status bar: bottom row
    pub fn new(area: Rect) -> Self {
        let vertical_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),            // Title
                Constraint::Min(FIELD_HEIGHT),    // Form fields
                Constraint::Length(FIELD_HEIGHT), // Generated query
                Constraint::Length(1),            // Status bar
            ])
            .split(area);

        let field_areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints(FormField::ALL.map(|_| Constraint::Length(FIELD_HEIGHT)))
            .flex(Flex::Start)
            .split(vertical_chunks[1])
            .to_vec();

        Self {
            title_area: vertical_chunks[0],
            field_areas,
            output_area: vertical_chunks[2],
            status_area: vertical_chunks[3],
        }
    }
}

/// Centered rectangle for the history dialog
pub fn popup_area(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [vertical] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(vertical);
    popup
}
