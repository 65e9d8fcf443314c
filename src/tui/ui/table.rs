use crate::cards::Card;
use crate::tui::app::{AppState, ScoreReveal};
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, columns, inner};

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let run = &app.run;
    let status_height: u16 = 3 + 2; // content + borders

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),             // header
            Constraint::Length(4),             // jokers
            Constraint::Length(6),             // hand
            Constraint::Min(4),                // score trace
            Constraint::Length(status_height), // status bar
        ])
        .split(size);

    // Header
    let progress = if run.target() == 0 { 100 } else { run.score().saturating_mul(100) / run.target() };
    let header_lines = vec![
        Line::from(format!(
            "Ante {}   Target {}   Score {} ({}%)",
            run.ante(),
            run.target(),
            run.score(),
            progress.min(100)
        )),
        Line::from(format!(
            "Hands {}   Discards {}   Deck {}   Rules: {}",
            run.hands_left(),
            run.discards_left(),
            run.deck_len(),
            run.rules().variant.label()
        )),
    ];
    let header = Paragraph::new(header_lines)
        .block(Block::default().title("ante-rs").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    // Jokers, in scoring order
    let joker_title = format!("Jokers {}/{}", run.jokers().len(), run.rules().max_jokers);
    let joker_line = if run.jokers().is_empty() {
        Line::from(Span::styled("none (J adds one)", Style::default().add_modifier(Modifier::DIM)))
    } else {
        let mut spans = Vec::with_capacity(run.jokers().len() * 2);
        for (i, j) in run.jokers().iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(
                format!("[{}] {}", j.name, j.kind.describe()),
                Style::default().fg(Color::Magenta),
            ));
        }
        Line::from(spans)
    };
    let jokers = Paragraph::new(joker_line)
        .wrap(Wrap { trim: true })
        .block(Block::default().title(joker_title).borders(Borders::ALL));
    f.render_widget(jokers, chunks[1]);

    // Hand
    let hand_area = chunks[2];
    let hand_title = format!(
        "Hand ({} selected, play {})",
        run.selection().len(),
        if run.rules().play_size_ok(1) { "1-5" } else { "5" }
    );
    f.render_widget(Block::default().title(hand_title).borders(Borders::ALL), hand_area);
    let slots = run.rules().hand_size.max(1);
    let card_chunks = columns(inner(hand_area), slots);
    for (i, area) in card_chunks.iter().enumerate() {
        let card = run.hand().get(i);
        let selected = run.selection().contains(i);
        render_card_widget(f, *area, i, card, selected);
    }

    // Score trace
    let trace_block = Block::default().title("Last Hand").borders(Borders::ALL);
    let trace_text = match app.score_reveal() {
        Some(reveal) => trace_lines(reveal),
        None => vec![Line::from(Span::styled(
            "Select cards with 1-8 and press P to play.",
            Style::default().add_modifier(Modifier::DIM),
        ))],
    };
    let trace = Paragraph::new(trace_text).wrap(Wrap { trim: true }).block(trace_block);
    f.render_widget(trace, chunks[3]);

    // Status bar: message and errors on the left, keys on the right
    let status_area = chunks[4];
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), status_area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(inner(status_area));

    let mut left_info = vec![Line::from(run.last_message().to_string())];
    if run.is_game_over() {
        left_info.push(Line::from(Span::styled(
            "Run over. Press N for a new run.",
            Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD),
        )));
    }
    if let Some(err) = app.action_error() {
        left_info.push(Line::from(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(Color::Red),
        )));
    }

    let enabled = !run.is_game_over();
    let action_style = |on: bool| {
        if on {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        }
    };
    let right_keys = vec![
        Line::from(vec![
            Span::styled("P play", action_style(enabled && run.hands_left() > 0)),
            Span::raw(" • "),
            Span::styled("D discard", action_style(enabled && run.discards_left() > 0)),
            Span::raw(" • "),
            Span::styled("J joker", action_style(enabled)),
        ]),
        Line::from("N new run • ? help • H history • M menu"),
    ];
    let left_para = Paragraph::new(left_info).wrap(Wrap { trim: true });
    let right_para =
        Paragraph::new(right_keys).wrap(Wrap { trim: true }).alignment(Alignment::Right);
    f.render_widget(left_para, cols[0]);
    f.render_widget(right_para, cols[1]);

    if app.help_open() {
        draw_help(f);
    } else if app.history_open() {
        draw_history(f, app);
    }
}

fn trace_lines(reveal: ScoreReveal<'_>) -> Vec<Line<'static>> {
    let b = reveal.breakdown;
    let played: Vec<String> = b.cards.iter().map(Card::to_string).collect();
    let mut lines = vec![
        Line::from(Span::styled(
            format!("{}  [{}]", b.category, played.join(" ")),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("Base: {} × {} = {}", b.base_chips, b.base_mult, b.base_total())),
    ];
    for step in reveal.visible_steps() {
        let mut gain = Vec::new();
        if step.bonus.chips > 0 {
            gain.push(format!("+{} chips", step.bonus.chips));
        }
        if step.bonus.mult > 0 {
            gain.push(format!("+{} mult", step.bonus.mult));
        }
        let gain = if gain.is_empty() { "no effect".to_string() } else { gain.join(", ") };
        let style = if step.bonus.is_empty() {
            Style::default().add_modifier(Modifier::DIM)
        } else {
            Style::default().fg(Color::Magenta)
        };
        lines.push(Line::from(Span::styled(
            format!(
                "{}: {} → {} × {} = {}",
                step.joker.name, gain, step.chips, step.mult, step.subtotal
            ),
            style,
        )));
    }
    if reveal.is_complete() {
        lines.push(Line::from(Span::styled(
            format!("Total: +{}", b.total),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )));
    }
    lines
}

fn draw_history(f: &mut Frame, app: &AppState) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("History").borders(Borders::ALL);
    let mut lines: Vec<Line> = Vec::new();
    let history = app.run.history();
    if history.is_empty() {
        lines.push(Line::from("No history yet."));
    } else {
        // newest first; offset scrolls back in time
        for event in history
            .iter()
            .rev()
            .skip(app.history_offset())
            .take(AppState::HISTORY_PAGE_SIZE)
        {
            lines.push(Line::from(event.describe()));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Up/Down scroll • Close: H or Esc",
        Style::default().add_modifier(Modifier::DIM),
    )));
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let lines = vec![
        Line::from(Span::styled("Table:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- 1-8: select / deselect card"),
        Line::from("- P or Enter: play selected cards"),
        Line::from("- D: discard selected cards"),
        Line::from("- J: add a random joker"),
        Line::from("- N: new run"),
        Line::from("- H: history"),
        Line::from(""),
        Line::from(Span::styled("Scoring:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- Hand category sets base chips and mult"),
        Line::from("- Jokers add chips and mult, left to right"),
        Line::from("- Score = chips × mult; reach the target to clear the ante"),
        Line::from(""),
        Line::from(Span::styled("Menu:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- M: open / close menu"),
        Line::from("- Up / Down: move selection"),
        Line::from("- + / -: adjust value"),
        Line::from("- Enter: start a run with these rules"),
        Line::from("- Esc: back to table"),
        Line::from(""),
        Line::from("Q: quit • Close help: ? or Esc"),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn suit_style(c: Card) -> Style {
    if c.suit().is_red() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::White)
    }
}

fn render_card_widget(f: &mut Frame, area: Rect, index: usize, card: Option<Card>, selected: bool) {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(format!("{}", index + 1))
        .title_alignment(Alignment::Center);
    if selected {
        block = block.border_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
    }
    let inner = inner(area);
    f.render_widget(block, area);
    let content = match card {
        Some(c) => {
            let mut style = suit_style(c);
            if selected {
                style = style.add_modifier(Modifier::REVERSED);
            }
            Line::from(Span::styled(c.to_string(), style))
        }
        None => Line::from("[  ]"),
    };
    let para = Paragraph::new(content).alignment(Alignment::Center);
    f.render_widget(para, inner);
}
