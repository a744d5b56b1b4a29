//! TUI rendering for the lecture deck using ratatui.

mod input;
mod slide;
mod theme;

pub use input::{InputPump, apply_event, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, spinner_frame, styles};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, Clear, Padding, Paragraph, Scrollbar, ScrollbarOrientation,
        ScrollbarState, Wrap,
    },
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use lecture_engine::{Alert, App};

use self::slide::{RenderContext, slide_lines};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &mut App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(3),    // Slide body
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_header(frame, app, chunks[0], &palette, &glyphs);
    draw_body(frame, app, chunks[1], &palette, &glyphs);
    draw_status_bar(frame, app, chunks[2], &palette, &glyphs);

    if let Some(alert) = app.alert() {
        draw_alert(frame, alert, &palette);
    }
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let info = app.info();
    let (current, total) = app.deck().position();
    let position = format!("{current} / {total}");
    let position_width = position.width() as u16;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(position_width + 1)])
        .split(area);

    let title_budget = (chunks[0].width as usize)
        .saturating_sub(info.title.width() + glyphs.separator.width() + 3);
    let title = Line::from(vec![
        Span::styled(info.title, styles::lecture_title(palette)),
        Span::styled(
            format!(" {} ", glyphs.separator),
            Style::default().fg(palette.text_muted),
        ),
        Span::styled(
            truncate_to_width(app.deck().current().title, title_budget),
            Style::default().fg(palette.text_secondary),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), chunks[0]);
    frame.render_widget(
        Paragraph::new(Span::styled(position, Style::default().fg(palette.text_muted)))
            .alignment(Alignment::Right),
        chunks[1],
    );
}

fn draw_body(frame: &mut Frame, app: &mut App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let slide = app.deck().current();
    let cx = RenderContext {
        palette,
        glyphs,
        options: app.ui_options(),
        tick: app.tick_count(),
    };
    let lines = slide_lines(slide, app.live_view(), &cx);

    let body_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.bg_border))
        .title(Span::styled(
            format!(" {} ", slide.title),
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(palette.bg_panel))
        .padding(Padding::horizontal(1));

    let inner = body_block.inner(area);
    let body = Paragraph::new(lines).wrap(Wrap { trim: false });
    let max_scroll = wrapped_row_count(&body, inner.width).saturating_sub(inner.height);
    app.clamp_scroll(max_scroll);
    let scroll_offset = app.scroll_offset();

    let body = body.block(body_block).scroll((scroll_offset, 0));
    frame.render_widget(body, area);

    if max_scroll > 0 {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some(glyphs.arrow_up))
            .end_symbol(Some(glyphs.arrow_down))
            .track_symbol(Some(glyphs.track))
            .thumb_symbol(glyphs.thumb)
            .style(Style::default().fg(palette.text_muted));

        // content_length is the scrollable range so the thumb bottoms out at max_scroll.
        let mut scrollbar_state =
            ScrollbarState::new(max_scroll as usize).position(scroll_offset as usize);

        frame.render_stateful_widget(
            scrollbar,
            area.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut scrollbar_state,
        );
    }
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let hint = |key: &'static str, label: &'static str| {
        [
            Span::styled(key, styles::key_highlight(palette)),
            Span::styled(label, styles::key_hint(palette)),
        ]
    };

    let mut spans = vec![Span::raw(" ")];
    if app.alert().is_some() {
        spans.extend(hint("Enter", " dismiss"));
    } else {
        spans.extend(hint(glyphs.slide_keys, " slide  "));
        if app.live_view().is_some() {
            spans.extend(hint("h/l", " todo  "));
        }
        spans.extend(hint(glyphs.scroll_keys, " scroll  "));
        spans.extend(hint("q", " quit"));
    }

    if let Some(live) = app.live()
        && live.in_flight() > 0
    {
        spans.push(Span::styled(
            format!(
                "  {} loading",
                spinner_frame(app.tick_count(), app.ui_options())
            ),
            Style::default().fg(palette.primary),
        ));
    }

    let info = app.info();
    let meta = format!("{} {} {} ", info.description, glyphs.separator, info.date);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(meta.width() as u16)])
        .split(area);
    frame.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);
    frame.render_widget(
        Paragraph::new(Span::styled(meta, Style::default().fg(palette.text_disabled)))
            .alignment(Alignment::Right),
        chunks[1],
    );
}

fn draw_alert(frame: &mut Frame, alert: &Alert, palette: &Palette) {
    let lines = vec![
        Line::from(Span::styled(
            alert.message().to_string(),
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled("Enter", styles::key_highlight(palette)),
            Span::styled(" to dismiss", styles::key_hint(palette)),
        ]),
    ];

    let content_width = lines.iter().map(Line::width).max().unwrap_or(10) as u16;
    let content_width = content_width.max(20).min(frame.area().width.saturating_sub(4));
    let content_height = lines.len() as u16;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.error))
        .title(Span::styled(
            " Alert ",
            Style::default()
                .fg(palette.error)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(palette.bg_panel))
        .padding(Padding::uniform(1));

    let height = content_height.saturating_add(4);
    let width = content_width.saturating_add(4);
    let area = frame.area();
    let rect = Rect {
        x: area.x + (area.width.saturating_sub(width) / 2),
        y: area.y + (area.height.saturating_sub(height) / 2),
        width: width.min(area.width),
        height: height.min(area.height),
    };

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        rect,
    );
}

/// Rows a wrapping paragraph occupies at `width`, counted by ratatui's own wrapper.
/// Call before attaching a block so borders are not included.
fn wrapped_row_count(paragraph: &Paragraph<'_>, width: u16) -> u16 {
    u16::try_from(paragraph.line_count(width.max(1))).unwrap_or(u16::MAX)
}

fn truncate_to_width(raw: &str, max: usize) -> String {
    if raw.width() <= max {
        return raw.to_string();
    }
    let budget = max.saturating_sub(3);
    let mut out = String::new();
    let mut used = 0;
    for c in raw.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}
