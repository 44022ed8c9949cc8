use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};

use super::app::{MessageType, StatusMessage};
use super::form::{FormField, FormState};
use super::history_view::HistoryItem;
use super::layout::{AppLayout, popup_area};
use super::palette::Palette;
use crate::utils::sanitize_query_line;

const TITLE: &str = "Advanced Google Search Query Builder";
const OUTPUT_PLACEHOLDER: &str = "Your custom search query will appear here";

/// History dialog contents for one frame
pub struct HistoryRender<'a> {
    pub items: &'a [&'a HistoryItem],
    pub selected_idx: usize,
    pub filter: &'a str,
    pub total_count: usize,
}

/// Everything one frame needs
pub struct RenderState<'a> {
    pub form: &'a FormState,
    pub search_string: &'a str,
    pub palette: Palette,
    pub dark_theme: bool,
    pub status_message: Option<&'a StatusMessage>,
    pub history: Option<HistoryRender<'a>>,
}

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, state: &RenderState) {
    let area = frame.area();
    let palette = state.palette;
    frame.render_widget(Block::default().style(palette.base()), area);

    let layout = AppLayout::new(area);

    render_title(frame, layout.title_area, palette, state.dark_theme);
    for (field, field_area) in FormField::ALL.iter().zip(&layout.field_areas) {
        let focused = state.history.is_none() && state.form.focus == *field;
        render_field(frame, *field_area, state.form, *field, focused, palette);
    }
    render_output(frame, layout.output_area, state.search_string, palette);
    render_status_bar(frame, layout.status_area, state);

    if let Some(history) = &state.history {
        render_history_dialog(frame, popup_area(area, 80, 60), history, palette);
    }
}

fn render_title(frame: &mut Frame, area: Rect, palette: Palette, dark_theme: bool) {
    let theme = if dark_theme { "☾ dark " } else { "☀ light " };
    let title_width = area.width.saturating_sub(theme.chars().count() as u16);

    let title = Paragraph::new(Span::styled(TITLE, palette.base().add_modifier(Modifier::BOLD)));
    frame.render_widget(title, Rect { width: title_width, ..area });

    let indicator = Paragraph::new(Span::styled(theme, palette.muted())).alignment(Alignment::Right);
    frame.render_widget(indicator, area);
}

fn render_field(
    frame: &mut Frame,
    area: Rect,
    form: &FormState,
    field: FormField,
    focused: bool,
    palette: Palette,
) {
    let value = form.value(field);

    let line = if field.is_selector() {
        let style = if focused { palette.base() } else { palette.muted() };
        Line::from(vec![
            Span::styled("‹ ", palette.muted()),
            Span::styled(value.to_string(), style),
            Span::styled(" ›", palette.muted()),
        ])
    } else if value.is_empty() && !focused {
        Line::from(Span::styled(field.placeholder(), palette.muted()))
    } else {
        let mut spans = vec![Span::styled(value.to_string(), palette.base())];
        if focused {
            spans.push(Span::styled("▏", palette.success()));
        }
        Line::from(spans)
    };

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border(focused))
            .title(format!(" {} ", field.label())),
    );

    frame.render_widget(paragraph, area);
}

fn render_output(frame: &mut Frame, area: Rect, search_string: &str, palette: Palette) {
    let content = if search_string.is_empty() {
        Span::styled(OUTPUT_PLACEHOLDER, palette.muted())
    } else {
        Span::styled(sanitize_query_line(search_string), palette.success())
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.muted())
                .title(" Your custom search query "),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn render_history_dialog(frame: &mut Frame, area: Rect, history: &HistoryRender, palette: Palette) {
    frame.render_widget(Clear, area);

    let items: Vec<ListItem> = if history.items.is_empty() {
        let text = if history.total_count == 0 { "No search history" } else { "No matches" };
        vec![ListItem::new(text).style(palette.muted())]
    } else {
        history
            .items
            .iter()
            .enumerate()
            .map(|(idx, item)| {
                let style =
                    if idx == history.selected_idx { palette.highlight() } else { palette.base() };
                ListItem::new(sanitize_query_line(&item.query)).style(style)
            })
            .collect()
    };

    let title = if history.filter.is_empty() {
        format!(" Search History ({}) ", history.total_count)
    } else {
        format!(
            " Search History ({}/{}) filter: {} ",
            history.items.len(),
            history.total_count,
            history.filter
        )
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border(true))
            .style(palette.base())
            .title(title),
    );

    // Keeps the selection scrolled into view
    let mut list_state = ListState::default();
    if !history.items.is_empty() {
        list_state.select(Some(history.selected_idx));
    }

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &RenderState) {
    let palette = state.palette;

    let (status_text, style) = if let Some(message) = state.status_message {
        let style = match message.message_type {
            MessageType::Success => palette.success(),
            MessageType::Error => palette.error(),
        };
        (format!(" {} ", message.text), style)
    } else if state.history.is_some() {
        (
            " Enter: autofill | Ctrl+Y: copy | Ctrl+O: open | Ctrl+X: clear history | Esc: close "
                .to_string(),
            palette.muted(),
        )
    } else {
        let mut parts = vec!["Tab: next field"];
        if state.form.focus.is_selector() {
            parts.push("←/→: change");
        }
        parts.extend([
            "Enter: generate",
            "Ctrl+Y: copy",
            "Ctrl+O: open",
            "Ctrl+H: history",
            "Ctrl+R: reset",
            "Ctrl+T: theme",
            "Esc: quit",
        ]);
        (format!(" {} ", parts.join(" | ")), palette.muted())
    };

    frame.render_widget(Paragraph::new(status_text).style(style), area);
}
