//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState`, draw to a ratatui Frame and never touch
//! the cursor. Everything position-dependent is read from the retained
//! `RenderState`; the only write is the hit map of click regions.
//!
//! ```text
//! ┌ header ────────────────────────────────┐
//! │ outline │ slide                         │
//! │ dots                                    │
//! │ progress                                │
//! └ ◀ Prev        3 / 5           Next ▶ ──┘
//! ```

use deck_core::input::NavButton;
use deck_core::{RenderState, SlideMarker};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Gauge, Paragraph, Wrap};

use crate::hit::HitMap;
use crate::state::AppState;
use crate::text::{display_width, truncate_with_ellipsis};

/// Width of the outline sidebar, borders included.
const OUTLINE_WIDTH: u16 = 28;

/// Below this terminal width the outline is hidden even when enabled.
const MIN_WIDTH_FOR_OUTLINE: u16 = 60;

const ACCENT: Color = Color::Cyan;

const KEY_HINT: &str = "←/→ navigate · q quit ";

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let view = app.view();
    let mut hit_map = HitMap::default();

    let mut rows = vec![Constraint::Length(1), Constraint::Min(3)];
    if app.ui.show_dots {
        rows.push(Constraint::Length(1));
    }
    if app.ui.show_progress {
        rows.push(Constraint::Length(1));
    }
    rows.push(Constraint::Length(1));

    let chunks = Layout::vertical(rows).split(area);
    let mut chunks = chunks.iter().copied();
    let header = chunks.next().unwrap_or_default();
    let body = chunks.next().unwrap_or_default();
    let dots = app
        .ui
        .show_dots
        .then(|| chunks.next().unwrap_or_default());
    let progress = app
        .ui
        .show_progress
        .then(|| chunks.next().unwrap_or_default());
    let footer = chunks.next().unwrap_or_default();

    render_header(app, frame, header);

    if app.ui.show_outline && area.width >= MIN_WIDTH_FOR_OUTLINE {
        let [outline, slide] =
            Layout::horizontal([Constraint::Length(OUTLINE_WIDTH), Constraint::Min(0)])
                .areas(body);
        render_outline(app, frame, outline);
        render_slide(app, frame, slide);
    } else {
        render_slide(app, frame, body);
    }

    if let Some(area) = dots {
        render_dots(view, frame, area, &mut hit_map);
    }
    if let Some(area) = progress {
        render_progress(view, frame, area);
    }
    render_footer(view, frame, footer, &mut hit_map);

    app.hit_map.replace(hit_map);
}

fn render_header(app: &AppState, frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled(" deck ", Style::default().fg(Color::Black).bg(ACCENT)),
        Span::raw(" "),
        Span::styled(
            app.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), area);

    // A dot under the pointer names its target in place of the key hint.
    let hint = match app.dot_label() {
        Some(label) => Span::styled(format!("{label} "), Style::default().fg(ACCENT)),
        None => Span::styled(KEY_HINT, Style::default().fg(Color::DarkGray)),
    };
    if area.width > display_width(&app.title).saturating_add(display_width(&hint.content) + 8) {
        frame.render_widget(Paragraph::new(hint).alignment(Alignment::Right), area);
    }
}

fn render_outline(app: &AppState, frame: &mut Frame, area: Rect) {
    let view = app.view();
    let inner_width = usize::from(area.width.saturating_sub(2));

    let lines: Vec<Line> = app
        .deck
        .slides()
        .iter()
        .enumerate()
        .map(|(i, slide)| {
            let marker = view.slides.get(i).copied().unwrap_or_default();
            let (prefix, style) = match marker {
                SlideMarker::Active => (
                    "▸ ",
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                ),
                SlideMarker::Prior => ("✓ ", Style::default().fg(Color::DarkGray)),
                SlideMarker::Upcoming => ("  ", Style::default()),
            };
            let text = format!("{prefix}{}. {}", i + 1, slide.title);
            Line::styled(truncate_with_ellipsis(&text, inner_width), style)
        })
        .collect();

    // Keep the active entry on screen for long decks.
    let visible = usize::from(area.height.saturating_sub(2)).max(1);
    let offset = view
        .active_slide()
        .map_or(0, |active| active.saturating_sub(visible - 1));

    let outline = Paragraph::new(lines)
        .block(Block::bordered().title(" Outline "))
        .scroll((u16::try_from(offset).unwrap_or(u16::MAX), 0));
    frame.render_widget(outline, area);
}

fn render_slide(app: &AppState, frame: &mut Frame, area: Rect) {
    let active = app
        .view()
        .active_slide()
        .and_then(|index| app.deck.get(index));

    let Some(slide) = active else {
        let empty = Paragraph::new(Line::styled(
            format!("No slides in {}", app.title),
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Center)
        .block(Block::bordered());
        frame.render_widget(empty, area);
        return;
    };

    let title = truncate_with_ellipsis(&slide.title, usize::from(area.width.saturating_sub(4)));
    let block = Block::bordered()
        .border_style(Style::default().fg(ACCENT))
        .title(Line::styled(
            format!(" {title} "),
            Style::default().add_modifier(Modifier::BOLD),
        ));

    let lines: Vec<Line> = slide.body.lines().map(body_line).collect();
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// Light styling for Markdown lines: headings and bullets.
fn body_line(line: &str) -> Line<'static> {
    let trimmed = line.trim_start();
    let heading = trimmed.trim_start_matches('#');
    if heading.len() < trimmed.len() && heading.starts_with(' ') {
        return Line::styled(
            heading.trim().to_string(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        );
    }

    let indent = &line[..line.len() - trimmed.len()];
    if let Some(item) = trimmed
        .strip_prefix("- ")
        .or_else(|| trimmed.strip_prefix("* "))
    {
        return Line::from(vec![
            Span::raw(format!("{indent}  ")),
            Span::styled("• ", Style::default().fg(ACCENT)),
            Span::raw(item.to_string()),
        ]);
    }

    Line::raw(line.to_string())
}

fn render_dots(view: &RenderState, frame: &mut Frame, area: Rect, hit_map: &mut HitMap) {
    let total = view.dots.len();
    if total == 0 || area.width == 0 || area.height == 0 {
        return;
    }

    // Two columns per dot when they fit, one otherwise. Rows wider than the
    // terminal show a window around the active dot.
    let width = usize::from(area.width);
    let step = if total * 2 - 1 <= width { 2 } else { 1 };
    let shown = total.min(width.div_ceil(step));
    let first = view
        .active_dot()
        .map_or(0, |active| active.saturating_sub(shown / 2))
        .min(total - shown);
    let used = u16::try_from((shown - 1) * step + 1).unwrap_or(area.width);
    let start = area.x + (area.width - used) / 2;

    let mut spans = Vec::with_capacity(shown * 2);
    for (slot, active) in view.dots[first..first + shown].iter().enumerate() {
        if slot > 0 && step == 2 {
            spans.push(Span::raw(" "));
        }
        spans.push(if *active {
            Span::styled("●", Style::default().fg(ACCENT))
        } else {
            Span::styled("○", Style::default().fg(Color::DarkGray))
        });

        let x = start + u16::try_from(slot * step).unwrap_or(0);
        hit_map.dots.push((first + slot, Rect::new(x, area.y, 1, 1)));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)),
        Rect::new(start, area.y, used, 1),
    );
}

fn render_progress(view: &RenderState, frame: &mut Frame, area: Rect) {
    let ratio = (view.progress / 100.0).clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(ACCENT).bg(Color::Black))
        .use_unicode(true)
        .ratio(ratio)
        .label(format!("{:.0}%", view.progress));
    frame.render_widget(gauge, area);
}

fn render_footer(view: &RenderState, frame: &mut Frame, area: Rect, hit_map: &mut HitMap) {
    let previous = format!(" {} ", NavButton::Previous.label());
    let next = format!(" {} ", NavButton::Next.label());

    let [prev_area, counter_area, next_area] = Layout::horizontal([
        Constraint::Length(display_width(&previous)),
        Constraint::Min(0),
        Constraint::Length(display_width(&next)),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            previous,
            button_style(view.buttons.previous_enabled),
        )),
        prev_area,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(next, button_style(view.buttons.next_enabled))),
        next_area,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            view.counter.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        counter_area,
    );

    // Disabled buttons stay clickable; the controller rejects the move.
    hit_map.previous = Some(prev_area);
    hit_map.next = Some(next_area);
}

fn button_style(enabled: bool) -> Style {
    if enabled {
        Style::default()
            .fg(Color::Black)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}
