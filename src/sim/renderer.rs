use crate::core::controller::{Phase, Snapshot};
use crate::core::slot::{LampColor, Slot};
use crate::sim::board::{ConsoleLine, SimBoard};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::Instant;

impl From<LampColor> for Color {
    fn from(color: LampColor) -> Self {
        match color {
            LampColor::Yellow => Color::Yellow,
            LampColor::Blue => Color::Blue,
            LampColor::Green => Color::Green,
            LampColor::Red => Color::Red,
        }
    }
}

pub fn render(f: &mut Frame, board: &SimBoard, view: &Snapshot) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(7),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    let phase = match view.phase {
        Phase::WaitingForStart => "waiting for start (type s + Enter)",
        Phase::Running => "running",
    };
    let baud = board.baud().map(|b| b.to_string()).unwrap_or_else(|| "-".into());
    f.render_widget(
        Paragraph::new(format!(
            "{phase}  |  active slot {}  |  transitions {}  |  {baud} baud",
            view.active, view.transitions
        ))
        .block(Block::default().title(" MOLEBOARD ").borders(Borders::ALL))
        .alignment(Alignment::Center),
        chunks[0],
    );

    let lamp_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(chunks[1]);
    let now = Instant::now();
    for slot in Slot::ALL {
        render_lamp(f, board, slot, now, lamp_areas[slot.index()]);
    }

    let height = chunks[2].height.saturating_sub(2) as usize;
    let lines: Vec<Line> = board
        .console()
        .map(|entry| match entry {
            ConsoleLine::Sent(text) => {
                Line::styled(format!("> {text}"), Style::default().fg(Color::Cyan))
            }
            ConsoleLine::Received(text) => Line::raw(format!("< {text}")),
        })
        .collect();
    let skip = lines.len().saturating_sub(height);
    f.render_widget(
        Paragraph::new(lines.into_iter().skip(skip).collect::<Vec<_>>())
            .block(Block::default().title(" SERIAL ").borders(Borders::ALL)),
        chunks[2],
    );

    f.render_widget(
        Paragraph::new(format!(" > {}", board.edit_line()))
            .block(Block::default().title(" SEND ").borders(Borders::ALL)),
        chunks[3],
    );

    f.render_widget(
        Paragraph::new("[F1-F4 / z x c v] Press button  [Enter] Send line  [Esc] Quit")
            .alignment(Alignment::Center),
        chunks[4],
    );
}

fn render_lamp(f: &mut Frame, board: &SimBoard, slot: Slot, now: Instant, area: Rect) {
    let color = Color::from(slot.color());
    let lit = board.lamp(slot).is_high();
    let pressed = !board.button_at(slot, now).is_high();

    let style = if lit {
        Style::default().bg(color).fg(Color::Black).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let label = format!(
        "\n{}\n{}",
        if lit { "ON" } else { "off" },
        if pressed { "[pressed]" } else { "" }
    );

    f.render_widget(
        Paragraph::new(label)
            .style(style)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .title(format!(" {slot} {:?} ", slot.color()))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            ),
        area,
    );
}
