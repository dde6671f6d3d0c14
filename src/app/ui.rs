use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use crate::app::{Converter, Theme, calc};

pub fn render(
    frame: &mut Frame,
    converter: &Converter,
    theme: Theme,
    show_from_picker: bool,
    show_to_picker: bool,
    from_picker_state: &mut ListState,
    to_picker_state: &mut ListState,
) {
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.bg()).fg(theme.fg())),
        frame.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(frame.area());

    render_title(frame, theme, chunks[0]);
    render_rate_banner(frame, converter, theme, chunks[1]);
    render_amount_row(frame, converter, theme, chunks[2]);
    render_result_row(frame, converter, theme, chunks[3]);
    render_footer(
        frame,
        converter,
        theme,
        show_from_picker || show_to_picker,
        chunks[5],
    );

    if show_from_picker {
        render_picker(
            frame,
            converter,
            theme,
            "Choose source currency",
            from_picker_state,
        );
    } else if show_to_picker {
        render_picker(
            frame,
            converter,
            theme,
            "Choose target currency",
            to_picker_state,
        );
    }
}

fn render_title(frame: &mut Frame, theme: Theme, area: Rect) {
    let title = Paragraph::new("Currency Converter")
        .style(
            Style::default()
                .fg(theme.accent())
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.muted())),
        );
    frame.render_widget(title, area);
}

fn render_rate_banner(frame: &mut Frame, converter: &Converter, theme: Theme, area: Rect) {
    let line = converter.rate_line().unwrap_or_else(|| String::from("-"));
    let banner = Paragraph::new(line)
        .style(Style::default().fg(theme.fg()))
        .block(
            Block::default()
                .title("Exchange rate")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.muted())),
        );
    frame.render_widget(banner, area);
}

fn render_amount_row(frame: &mut Frame, converter: &Converter, theme: Theme, area: Rect) {
    let (text, style) = if converter.amount().is_empty() {
        (String::from("0.00"), Style::default().fg(theme.muted()))
    } else {
        (
            converter.amount().to_string(),
            Style::default().fg(theme.fg()),
        )
    };
    render_currency_row(frame, theme, area, "From", converter.from(), text, style);
}

fn render_result_row(frame: &mut Frame, converter: &Converter, theme: Theme, area: Rect) {
    let (text, style) = match converter.result() {
        Some(value) => (calc::format_amount(value), Style::default().fg(theme.fg())),
        None => (String::from("0.00"), Style::default().fg(theme.muted())),
    };
    render_currency_row(frame, theme, area, "To", converter.to(), text, style);
}

fn render_currency_row(
    frame: &mut Frame,
    theme: Theme,
    area: Rect,
    label: &str,
    code: &str,
    value: String,
    value_style: Style,
) {
    let block = Block::default()
        .title(label.to_string())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.muted()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(8), Constraint::Min(0)])
        .split(inner);

    let tag = Paragraph::new(format!("{} ▾", code)).style(
        Style::default()
            .fg(theme.accent())
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(tag, halves[0]);

    let amount = Paragraph::new(value)
        .style(value_style)
        .alignment(Alignment::Right);
    frame.render_widget(amount, halves[1]);
}

fn render_footer(
    frame: &mut Frame,
    converter: &Converter,
    theme: Theme,
    picker_open: bool,
    area: Rect,
) {
    let status = match converter.rates().as_of() {
        Some(date) => format!("NBP table {} | {}", converter.rates().designation(), date),
        None => String::from("No exchange rates loaded"),
    };
    let keys = if picker_open {
        "Up/Down select | Enter choose | Esc close"
    } else {
        "type amount | F2 source | F3 target | F8 theme | q quit"
    };

    let footer = Paragraph::new(vec![
        Line::from(Span::styled(status, Style::default().fg(theme.muted()))),
        Line::from(Span::styled(keys, Style::default().fg(theme.muted()))),
    ]);
    frame.render_widget(footer, area);
}

fn render_picker(
    frame: &mut Frame,
    converter: &Converter,
    theme: Theme,
    title: &str,
    state: &mut ListState,
) {
    let area = centered_rect(50, 60, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .style(Style::default().bg(theme.bg()))
        .border_style(Style::default().fg(theme.accent()));

    let items: Vec<ListItem> = converter
        .currencies()
        .iter()
        .map(|currency| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<4}", currency.code()),
                    Style::default()
                        .fg(theme.fg())
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}", currency.name()),
                    Style::default().fg(theme.muted()),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    frame.render_stateful_widget(list, area, state);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
