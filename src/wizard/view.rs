//! Page rendering
//!
//! Drawing is a pure function of the context, the navigator position and the
//! focused button. The returned [`ButtonAreas`] are what mouse clicks get tested
//! against on the next event.

use anyhow::Result;
use ratatui::{
    Frame, Terminal,
    backend::TestBackend,
    layout::{Alignment, Constraint, Flex, Layout, Margin, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use super::assets::AssetStatus;
use super::context::AppContext;
use super::navigator::{PageNavigator, PageObserver};
use super::pages::{Element, ImageRef, Page, Placement, columns};
use crate::ui::palette::{self, colors};

/// Size of the wizard frame in terminal cells.
pub const FRAME_WIDTH: u16 = 90;
pub const FRAME_HEIGHT: u16 = 32;

const CONTENT_WIDTH: u16 = 46;
const BUTTON_WIDTH: u16 = 10;
const COLUMN_WIDTH: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    Back,
    #[default]
    Next,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Focus::Back => Focus::Next,
            Focus::Next => Focus::Back,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonAreas {
    pub back: Rect,
    pub next: Rect,
}

impl ButtonAreas {
    pub fn hit(&self, column: u16, row: u16) -> Option<Focus> {
        let pos = Position::new(column, row);
        if self.back.contains(pos) {
            Some(Focus::Back)
        } else if self.next.contains(pos) {
            Some(Focus::Next)
        } else {
            None
        }
    }
}

fn text_style() -> Style {
    Style::default()
        .fg(palette::color(colors::TEXT))
        .bg(palette::color(colors::PAGE))
}

/// Draw the navigator's current page centered in the frame.
///
/// Returns `None` when the terminal is too small to hold the wizard or the
/// catalog has no page at that index; nothing clickable is drawn in that case.
pub fn draw<O: PageObserver>(
    frame: &mut Frame,
    ctx: &AppContext,
    navigator: &PageNavigator<O>,
    focus: Focus,
) -> Option<ButtonAreas> {
    let screen = frame.area();
    frame.render_widget(Clear, screen);

    if screen.width < FRAME_WIDTH || screen.height < FRAME_HEIGHT {
        draw_too_small(frame, screen);
        return None;
    }

    let index = navigator.current_index();
    let page = ctx.catalog.get(index)?;

    let [column] = Layout::horizontal([Constraint::Length(FRAME_WIDTH)])
        .flex(Flex::Center)
        .areas(screen);
    let [area] = Layout::vertical([Constraint::Length(FRAME_HEIGHT)])
        .flex(Flex::Center)
        .areas(column);

    let mut window = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette::color(colors::PLACEHOLDER)))
        .title(" Sundial ")
        .title_alignment(Alignment::Center)
        .style(text_style());
    if ctx.config.show_images
        && let Some(image) = page.image_at(Placement::Background)
        && ctx.asset_status(image.file) == AssetStatus::Missing
    {
        window = window.title_bottom(
            Line::from(Span::styled(
                format!(" {} [missing] ", image.file),
                text_style().fg(palette::color(colors::WARNING)),
            ))
            .right_aligned(),
        );
    }
    let inner = window.inner(area);
    frame.render_widget(window, area);

    let [main, footer] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);
    let [left, right] =
        Layout::horizontal([Constraint::Length(CONTENT_WIDTH), Constraint::Min(0)]).areas(main);
    let left = left.inner(Margin::new(3, 0));

    let [_, logo, _, title, _, body, buttons, _] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(5),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(3),
        Constraint::Length(2),
    ])
    .areas(left);

    if ctx.config.show_images {
        if let Some(image) = page.image_at(Placement::Logo) {
            draw_logo(frame, ctx, image, logo);
        }
        if let Some(image) = page.image_at(Placement::Illustration) {
            draw_illustration(frame, ctx, image, right.inner(Margin::new(2, 2)));
        }
    }

    let heading = Paragraph::new(Span::styled(
        page.title,
        text_style().add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(heading, title);

    let body_lines = body_lines(page, body.width as usize);
    frame.render_widget(Paragraph::new(body_lines).style(text_style()), body);

    let areas = draw_buttons(
        frame,
        buttons,
        focus,
        navigator.is_first(),
        navigator.is_last(),
    );

    draw_footer(frame, footer, index, navigator.page_count());

    Some(areas)
}

fn draw_too_small(frame: &mut Frame, screen: Rect) {
    let message = vec![
        Line::from(Span::styled(
            "Terminal too small",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "need {}x{}, have {}x{}",
            FRAME_WIDTH, FRAME_HEIGHT, screen.width, screen.height
        )),
        Line::from("q to quit"),
    ];
    let [middle] = Layout::vertical([Constraint::Length(3)])
        .flex(Flex::Center)
        .areas(screen);
    frame.render_widget(
        Paragraph::new(message)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        middle,
    );
}

fn draw_logo(frame: &mut Frame, ctx: &AppContext, image: &ImageRef, area: Rect) {
    let mut spans = vec![Span::styled(
        format!("◐ {}", image.label),
        text_style()
            .fg(palette::color(colors::NEXT_START))
            .add_modifier(Modifier::BOLD),
    )];
    if ctx.asset_status(image.file) == AssetStatus::Missing {
        spans.push(Span::styled(
            " (logo missing)",
            text_style().fg(palette::color(colors::WARNING)),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_illustration(frame: &mut Frame, ctx: &AppContext, image: &ImageRef, area: Rect) {
    let missing = ctx.asset_status(image.file) == AssetStatus::Missing;
    let border = if missing {
        palette::color(colors::WARNING)
    } else {
        palette::color(colors::PLACEHOLDER)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .title(format!(" {} ", image.label))
        .style(text_style());

    let mut lines = vec![Line::from(image.file)];
    if missing {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "[missing]",
            text_style().fg(palette::color(colors::WARNING)),
        )));
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);
    let [middle] = Layout::vertical([Constraint::Length(lines.len() as u16)])
        .flex(Flex::Center)
        .areas(inner);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(text_style().add_modifier(Modifier::DIM)),
        middle,
    );
}

fn draw_buttons(
    frame: &mut Frame,
    area: Rect,
    focus: Focus,
    is_first: bool,
    is_last: bool,
) -> ButtonAreas {
    let [back, _, next] = Layout::horizontal([
        Constraint::Length(BUTTON_WIDTH),
        Constraint::Length(2),
        Constraint::Length(BUTTON_WIDTH),
    ])
    .areas(area);

    let back_fill = palette::color(colors::BACK);
    let next_fill = palette::blend(colors::NEXT_START, colors::NEXT_END, 0.5);

    frame.render_widget(
        button("Back", back_fill, focus == Focus::Back, is_first),
        back,
    );
    frame.render_widget(
        button("Next", next_fill, focus == Focus::Next, is_last),
        next,
    );

    ButtonAreas { back, next }
}

fn button(label: &str, fill: Color, focused: bool, disabled: bool) -> Paragraph<'_> {
    let (fill, fg) = if disabled {
        (palette::color(colors::PLACEHOLDER), Color::Gray)
    } else {
        (fill, palette::color(colors::BUTTON_TEXT))
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(fill).bg(palette::color(colors::PAGE)));
    let mut style = Style::default().fg(fg).bg(fill);
    if focused {
        block = block.border_type(BorderType::Thick);
        style = style.add_modifier(Modifier::BOLD);
    } else {
        block = block.border_type(BorderType::Rounded);
    }

    Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(style)
        .block(block)
}

fn draw_footer(frame: &mut Frame, area: Rect, index: usize, page_count: usize) {
    let [steps, help] = Layout::horizontal([Constraint::Length(24), Constraint::Min(0)])
        .areas(area.inner(Margin::new(1, 0)));

    frame.render_widget(
        Paragraph::new(step_indicator(index, page_count)).style(text_style()),
        steps,
    );

    let key = |k: &'static str| Span::styled(k, text_style().add_modifier(Modifier::BOLD));
    let hints = Line::from(vec![
        key("←/→"),
        Span::raw(" navigate  "),
        key("Tab"),
        Span::raw(" focus  "),
        key("Enter"),
        Span::raw(" select  "),
        key("q"),
        Span::raw(" quit"),
    ]);
    frame.render_widget(
        Paragraph::new(hints)
            .alignment(Alignment::Right)
            .style(text_style().add_modifier(Modifier::DIM)),
        help,
    );
}

/// `● ○ ○  Page 1 of 3`
pub fn step_indicator(index: usize, page_count: usize) -> String {
    let dots: Vec<&str> = (0..page_count)
        .map(|i| if i == index { "●" } else { "○" })
        .collect();
    format!("{}  Page {} of {}", dots.join(" "), index + 1, page_count)
}

/// Text lines for a page body, wrapped to `width` columns.
pub fn body_lines(page: &Page, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for element in page.body() {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        match element {
            Element::Paragraph { text } => {
                lines.extend(wrap_words(text, width).into_iter().map(Line::from));
            }
            Element::BulletColumns { items, per_column } => {
                lines.extend(bullet_rows(items, *per_column).into_iter().map(Line::from));
            }
            Element::Image(_) => {}
        }
    }
    lines
}

/// Lay out a bullet list as rows across columns.
pub fn bullet_rows(items: &[String], per_column: usize) -> Vec<String> {
    let cols = columns(items, per_column);
    let rows = cols.first().map_or(0, |c| c.len());
    (0..rows)
        .map(|row| {
            let cells: Vec<String> = cols
                .iter()
                .filter_map(|col| col.get(row))
                .map(|item| format!("{:<width$}", format!("• {item}"), width = COLUMN_WIDTH))
                .collect();
            cells.concat().trim_end().to_string()
        })
        .collect()
}

/// Greedy word wrap. Words longer than `width` get a line of their own.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Render the navigator's page off-screen and return the frame as plain
/// text rows.
pub fn render_to_lines<O: PageObserver>(
    ctx: &AppContext,
    navigator: &PageNavigator<O>,
    focus: Focus,
    width: u16,
    height: u16,
) -> Result<Vec<String>> {
    let mut terminal = Terminal::new(TestBackend::new(width, height))?;
    terminal.draw(|frame| {
        draw(frame, ctx, navigator, focus);
    })?;

    let buffer = terminal.backend().buffer();
    let rows = (0..height)
        .map(|y| {
            let row: String = (0..width)
                .filter_map(|x| buffer.cell((x, y)))
                .map(|cell| cell.symbol())
                .collect();
            row.trim_end().to_string()
        })
        .collect();
    Ok(rows)
}
