//! Turns slide content into styled lines.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use lecture_engine::ResourceBoundView;
use lecture_types::ui::UiOptions;
use lecture_types::{Block, IconLabel, Inline, Slide, sanitize_display_line};

use crate::theme::{Glyphs, Palette, spinner_frame, styles};

/// Everything block rendering needs besides the block itself.
pub(crate) struct RenderContext<'a> {
    pub palette: &'a Palette,
    pub glyphs: &'a Glyphs,
    pub options: UiOptions,
    pub tick: usize,
}

pub(crate) fn slide_lines(
    slide: &Slide,
    live: Option<&ResourceBoundView>,
    cx: &RenderContext<'_>,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for block in &slide.blocks {
        // Framed blocks get a blank line above them unless they open the slide.
        let framed = matches!(
            block,
            Block::Code { .. } | Block::Callout { .. } | Block::LiveDemo
        );
        if framed && !lines.is_empty() {
            lines.push(Line::default());
        }
        push_block(&mut lines, block, live, cx);
    }
    lines
}

fn push_block(
    lines: &mut Vec<Line<'static>>,
    block: &Block,
    live: Option<&ResourceBoundView>,
    cx: &RenderContext<'_>,
) {
    let palette = cx.palette;
    match block {
        Block::Paragraph(parts) => lines.push(Line::from(inline_spans(parts, palette))),
        Block::Bullets(items) => {
            for item in items {
                let mut spans = vec![Span::styled(
                    format!("  {} ", cx.glyphs.bullet),
                    Style::default().fg(palette.accent),
                )];
                spans.extend(inline_spans(item, palette));
                lines.push(Line::from(spans));
            }
        }
        Block::Code { language, lines: code } => {
            lines.push(Line::from(Span::styled(
                format!("  {language}"),
                Style::default()
                    .fg(palette.text_muted)
                    .add_modifier(Modifier::ITALIC),
            )));
            for code_line in code {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("  {} ", cx.glyphs.code_gutter),
                        Style::default().fg(palette.bg_border),
                    ),
                    Span::styled(*code_line, styles::code_block(palette)),
                ]));
            }
        }
        Block::Link { href, label } => {
            let mut spans = Vec::new();
            if let Some(label) = label {
                spans.push(Span::styled(
                    format!("{label} "),
                    Style::default().fg(palette.text_primary),
                ));
            }
            spans.push(Span::styled(format!("<{href}>"), styles::link(palette)));
            lines.push(Line::from(spans));
        }
        Block::Image { file } => lines.push(Line::from(Span::styled(
            format!("[image: {file}]"),
            Style::default()
                .fg(palette.text_muted)
                .add_modifier(Modifier::ITALIC),
        ))),
        Block::IconRow(icons) => lines.push(icon_row(icons, cx)),
        Block::Callout { heading, body } => {
            let bar = Span::styled(
                format!("{} ", cx.glyphs.callout_bar),
                Style::default().fg(palette.warning),
            );
            lines.push(Line::from(vec![
                bar.clone(),
                Span::styled(
                    *heading,
                    Style::default()
                        .fg(palette.warning)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
            let mut spans = vec![bar];
            spans.extend(inline_spans(body, palette));
            lines.push(Line::from(spans));
        }
        Block::Spacer => lines.push(Line::default()),
        Block::LiveDemo => {
            if let Some(view) = live {
                lines.extend(live_view_lines(view, cx));
            }
        }
    }
}

fn inline_spans(parts: &[Inline], palette: &Palette) -> Vec<Span<'static>> {
    parts
        .iter()
        .map(|part| match part {
            Inline::Text(text) => Span::styled(*text, Style::default().fg(palette.text_primary)),
            Inline::Code(code) => Span::styled(*code, styles::inline_code(palette)),
            Inline::Badge(label) => Span::styled(format!(" {label} "), styles::badge(palette)),
        })
        .collect()
}

fn icon_row(icons: &[IconLabel], cx: &RenderContext<'_>) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, item) in icons.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("      "));
        }
        spans.push(Span::styled(
            format!("{} ", cx.glyphs.icon(item.icon)),
            Style::default().fg(cx.palette.accent),
        ));
        spans.push(Span::styled(
            item.label,
            Style::default()
                .fg(cx.palette.text_primary)
                .add_modifier(Modifier::BOLD),
        ));
    }
    Line::from(spans)
}

/// Two rows: controls around the fields (or a skeleton), then the title.
pub(crate) fn live_view_lines(view: &ResourceBoundView, cx: &RenderContext<'_>) -> Vec<Line<'static>> {
    let palette = cx.palette;
    let glyphs = cx.glyphs;
    let previous = Span::styled(
        glyphs.previous,
        styles::control(palette, view.can_go_previous()),
    );
    let next = Span::styled(glyphs.next, styles::control(palette, view.can_go_next()));
    let muted = Style::default().fg(palette.text_muted);
    let value = Style::default()
        .fg(palette.text_primary)
        .add_modifier(Modifier::BOLD);

    let (fields, title) = match view.resource() {
        Some(todo) => (
            vec![
                Span::styled("id: ", muted),
                Span::styled(todo.id.to_string(), value),
                Span::styled("  completed: ", muted),
                Span::styled(glyphs.completion(todo.completed), value),
            ],
            Span::styled(
                sanitize_display_line(&todo.title).into_owned(),
                Style::default().fg(palette.text_primary),
            ),
        ),
        None => (
            vec![
                Span::styled(
                    format!("{} ", spinner_frame(cx.tick, cx.options)),
                    Style::default().fg(palette.primary),
                ),
                Span::styled(glyphs.placeholder, muted),
            ],
            Span::styled(glyphs.placeholder, muted),
        ),
    };

    let mut row = vec![previous, Span::raw("  ")];
    row.extend(fields);
    row.push(Span::raw("  "));
    row.push(next);

    let bounds = view.bounds();
    vec![
        Line::from(row),
        Line::from(vec![Span::raw("   "), title]),
        Line::from(Span::styled(
            format!("   {} / {}", view.key(), bounds.max()),
            Style::default().fg(palette.text_disabled),
        )),
    ]
}
