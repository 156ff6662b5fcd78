use crate::notice::{Notice, NoticeLevel};
use crate::ui::app::{App, Focus};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{body_regions, layout_regions};
use crate::ui::theme::{
    ACCENT, FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT, PLACEHOLDER_TEXT, STATUS_ERROR, STATUS_OK,
};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let state = app.snapshot();
    let (header, body, footer) = layout_regions(frame.area());
    let regions = body_regions(body, state.is_improvement_mode());

    frame.render_widget(Header::new(&state, app.animation_tick()).widget(), header);

    let draft_focused = app.focus() == Focus::Draft;
    frame.render_widget(
        text_box(" Draft ", &state.draft, "Paste your post", draft_focused),
        regions.draft,
    );

    frame.render_widget(result_box(state.result_text()), regions.result);

    if let Some(area) = regions.instructions {
        frame.render_widget(
            text_box(
                " How should it improve? ",
                &state.instructions,
                "Enter with nothing typed closes this field",
                !draft_focused,
            ),
            area,
        );
    }

    render_notice(frame, regions.notice, app.active_notices().last());

    frame.render_widget(
        Footer::new(state.is_improvement_mode()).widget(footer),
        footer,
    );
}

fn text_box<'a>(title: &'a str, value: &'a str, placeholder: &'a str, focused: bool) -> Paragraph<'a> {
    let border = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    let text = if value.is_empty() {
        Text::from(Line::from(Span::styled(
            placeholder,
            Style::default().fg(PLACEHOLDER_TEXT),
        )))
    } else {
        let mut text = Text::styled(value, Style::default().fg(HEADER_TEXT));
        if focused {
            text.push_span(Span::styled("▏", Style::default().fg(ACCENT)));
        }
        text
    };

    Paragraph::new(text).block(block).wrap(Wrap { trim: false })
}

fn result_box(result: Option<&str>) -> Paragraph<'_> {
    let block = Block::default()
        .title(Span::styled(" Result ", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    let text = match result {
        Some(result) => Text::styled(result, Style::default().fg(HEADER_TEXT)),
        None => Text::styled(
            "Nothing generated yet",
            Style::default()
                .fg(PLACEHOLDER_TEXT)
                .add_modifier(Modifier::ITALIC),
        ),
    };

    Paragraph::new(text).block(block).wrap(Wrap { trim: false })
}

fn render_notice(frame: &mut Frame<'_>, area: Rect, notice: Option<&Notice>) {
    let Some(notice) = notice else {
        return;
    };
    let (marker, color) = match notice.level {
        NoticeLevel::Success => ("✓", STATUS_OK),
        NoticeLevel::Error => ("✗", STATUS_ERROR),
    };
    let line = Line::from(vec![
        Span::styled(format!(" {} ", marker), Style::default().fg(color)),
        Span::styled(notice.message.clone(), Style::default().fg(HEADER_TEXT)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
