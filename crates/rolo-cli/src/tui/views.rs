//! Screen rendering for the interactive browser.
//!
//! Views are pure functions of [`AppState`]; all mutation happens in the
//! event loop.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use crate::output::empty_message;
use crate::tui::state::{AppState, FORM_LABELS, Mode, RemoteState};
use rolo_types::{Contact, Origin};

pub fn draw(f: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with fetch status
            Constraint::Length(3), // Search input
            Constraint::Min(0),    // Contact list (+ letter index)
            Constraint::Length(1), // Footer (Help)
        ])
        .split(f.area());

    render_header(f, chunks[0], state);
    render_search(f, chunks[1], state);
    render_list_area(f, chunks[2], state);
    render_footer(f, chunks[3], state);

    if state.mode == Mode::AddForm {
        render_add_form(f, state);
    }
    render_toasts(f, state);
}

fn render_header(f: &mut Frame, area: Rect, state: &AppState) {
    let mut spans = vec![Span::styled(
        "ROLO",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    spans.push(Span::raw(" :: "));
    match &state.remote {
        RemoteState::Loading => spans.push(Span::styled(
            "loading contacts...",
            Style::default().fg(Color::Yellow),
        )),
        RemoteState::Failed(msg) => {
            spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Red)))
        }
        RemoteState::Ready(contacts) => spans.push(Span::styled(
            format!("{} remote", contacts.len()),
            Style::default().fg(Color::Green),
        )),
    }

    if !state.can_refresh {
        spans.push(Span::raw(" "));
        spans.push(Span::styled("[OFFLINE]", Style::default().fg(Color::Yellow)));
    }
    if state.grouped {
        spans.push(Span::raw(" "));
        spans.push(Span::styled("[GROUPED]", Style::default().fg(Color::Magenta)));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let count_line = Line::from(spans);
    f.render_widget(Paragraph::new(count_line), inner);
}

fn render_search(f: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.mode == Mode::Search;
    let border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let cursor = if focused { "▏" } else { "" };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title("Search [/]");
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(
        Paragraph::new(format!("{}{}", state.query, cursor)),
        inner,
    );
}

fn contact_item(contact: &Contact) -> ListItem<'static> {
    let mut spans = vec![
        Span::styled(
            format!("{:<26}", contact.full_name()),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("{:<30}", contact.email),
            Style::default().fg(Color::Gray),
        ),
        Span::raw(format!("{:<14}", contact.phone)),
    ];
    if contact.origin == Origin::Local {
        spans.push(Span::styled("local", Style::default().fg(Color::Yellow)));
    }
    ListItem::new(Line::from(spans))
}

fn render_list_area(f: &mut Frame, area: Rect, state: &AppState) {
    let visible = state.visible();

    if visible.is_empty() {
        let text = match &state.remote {
            RemoteState::Loading => "Loading contacts...".to_string(),
            _ => empty_message(Some(&state.query)),
        };
        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
        return;
    }

    if state.grouped {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(5)])
            .split(area);
        render_grouped_list(f, chunks[0], state);
        render_letter_index(f, chunks[1], state);
    } else {
        let items: Vec<ListItem> = visible.iter().map(contact_item).collect();
        render_items(f, area, items, state.selected);
    }
}

fn render_grouped_list(f: &mut Frame, area: Rect, state: &AppState) {
    let grouped = state.grouped_view();

    // Heading rows are interleaved with contact rows, so the selected
    // contact's item index has to account for every heading before it.
    let mut items: Vec<ListItem> = Vec::new();
    let mut selected_item = 0;
    let mut flat_index = 0;
    for group in &grouped.groups {
        items.push(ListItem::new(Line::from(Span::styled(
            format!("── {} ──", group.letter),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ))));
        for contact in &group.contacts {
            if flat_index == state.selected {
                selected_item = items.len();
            }
            items.push(contact_item(contact));
            flat_index += 1;
        }
    }

    render_items(f, area, items, selected_item);
}

fn render_items(f: &mut Frame, area: Rect, items: Vec<ListItem>, selected: usize) {
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    let mut list_state = ListState::default();
    list_state.select(Some(selected));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn render_letter_index(f: &mut Frame, area: Rect, state: &AppState) {
    let grouped = state.grouped_view();

    // Letter owning the current selection, for highlighting.
    let mut current = None;
    let mut offset = 0;
    for group in &grouped.groups {
        if state.selected >= offset && state.selected < offset + group.contacts.len() {
            current = Some(group.letter);
        }
        offset += group.contacts.len();
    }

    let lines: Vec<Line> = grouped
        .index()
        .into_iter()
        .map(|letter| {
            let style = if Some(letter) == current {
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Line::from(Span::styled(letter.to_string(), style))
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_add_form(f: &mut Frame, state: &AppState) {
    let area = centered_rect(f.area(), 50, (FORM_LABELS.len() as u16) * 2 + 4);
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title("Add contact");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = Vec::new();
    for (i, label) in FORM_LABELS.iter().enumerate() {
        let focused = state.form.focus == i;
        let marker = if focused { "> " } else { "  " };
        let label_style = if focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::from(Span::styled(
            format!("{}{}", marker, label),
            label_style,
        )));
        let cursor = if focused { "▏" } else { "" };
        lines.push(Line::from(format!("    {}{}", state.form.fields[i], cursor)));
    }

    let hint = if state.form.is_valid() {
        Span::styled("[Enter] save  [Esc] cancel", Style::default().fg(Color::Green))
    } else {
        Span::styled(
            "fill all required fields  [Esc] cancel",
            Style::default().fg(Color::DarkGray),
        )
    };
    lines.push(Line::from(""));
    lines.push(Line::from(hint));

    f.render_widget(Paragraph::new(lines), inner);
}

fn render_toasts(f: &mut Frame, state: &AppState) {
    let width = 40u16;
    for (i, toast) in state.toasts.iter().enumerate() {
        let frame_area = f.area();
        if frame_area.width <= width + 2 {
            break;
        }
        let y = 1 + i as u16;
        if y >= frame_area.height {
            break;
        }
        let area = Rect::new(frame_area.width - width - 2, y, width, 1);
        f.render_widget(Clear, area);
        f.render_widget(
            Paragraph::new(Span::styled(
                toast.message.clone(),
                Style::default().fg(Color::Black).bg(Color::Green),
            )),
            area,
        );
    }
}

fn render_footer(f: &mut Frame, area: Rect, state: &AppState) {
    let keys: &[(&str, &str)] = match state.mode {
        Mode::Browse => &[
            ("q", "uit "),
            ("/", "search "),
            ("a", "dd "),
            ("d", "elete "),
            ("g", "roup "),
            ("[ ]", "jump "),
            ("r", "efresh"),
        ],
        Mode::Search => &[("Esc/Enter", " done "), ("type", " to filter")],
        Mode::AddForm => &[
            ("Tab", " next field "),
            ("Enter", " save "),
            ("Esc", " cancel"),
        ],
    };

    let mut spans = Vec::with_capacity(keys.len() * 2);
    for (key, rest) in keys {
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Yellow),
        ));
        spans.push(Span::raw(*rest));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn centered_rect(frame: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(frame.width);
    let height = height.min(frame.height);
    Rect::new(
        frame.x + (frame.width - width) / 2,
        frame.y + (frame.height - height) / 2,
        width,
        height,
    )
}
