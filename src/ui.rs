// src/ui.rs
use crate::app::{App, Focus, HashScreen, Mode, Screen, MENU_ITEMS};
use crate::filesystem::EntryKind;
use ratatui::{prelude::*, widgets::*};

pub fn render(f: &mut Frame, app: &mut App) {
    match app.screens.last_mut() {
        Some(Screen::Hash(screen)) => render_hash_screen(f, screen),
        _ => render_menu(f, app.menu_selected),
    }
}

fn render_menu(f: &mut Frame, selected: usize) {
    let area = centered_rect(f.size(), 44, 9);

    let mut lines = vec![
        Line::from(Span::styled(
            "SHA-256 File Checksum Tool",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for (i, item) in MENU_ITEMS.iter().enumerate() {
        let style = if i == selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(format!("  {item}  "), style)));
    }

    let menu = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Menu "));
    f.render_widget(menu, area);
}

fn render_hash_screen(f: &mut Frame, screen: &mut HashScreen) {
    let constraints = match screen.mode {
        Mode::Verify => vec![
            Constraint::Length(1),  // title
            Constraint::Length(3),  // expected hash
            Constraint::Length(3),  // file path
            Constraint::Min(6),     // browser
            Constraint::Length(1),  // status
            Constraint::Length(1),  // help
        ],
        Mode::Generate => vec![
            Constraint::Length(1),
            Constraint::Length(3),  // file path
            Constraint::Min(6),
            Constraint::Length(3),  // generated hash
            Constraint::Length(1),
            Constraint::Length(1),
        ],
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.size());

    let title = match screen.mode {
        Mode::Verify => "SHA-256 Hash Verification",
        Mode::Generate => "SHA-256 Hash Generation",
    };
    f.render_widget(
        Paragraph::new(title).style(Style::default().fg(Color::Cyan)),
        chunks[0],
    );

    match screen.mode {
        Mode::Verify => {
            render_input(
                f,
                chunks[1],
                " Expected SHA-256 Hash ",
                &screen.form.expected,
                screen.focus == Focus::Expected,
            );
            render_input(
                f,
                chunks[2],
                " File Path ",
                &screen.form.path,
                screen.focus == Focus::Path,
            );
            render_browser(f, chunks[3], screen);
        }
        Mode::Generate => {
            render_input(
                f,
                chunks[1],
                " File Path ",
                &screen.form.path,
                screen.focus == Focus::Path,
            );
            render_browser(f, chunks[2], screen);
            render_input(f, chunks[3], " Generated Hash ", &screen.form.output, false);
        }
    }

    let status_area = chunks[chunks.len() - 2];
    f.render_widget(
        Paragraph::new(screen.form.status.as_str()).style(Style::default().fg(Color::Green)),
        status_area,
    );

    let help = "Tab: next field  Enter: run/select  Ctrl+L: clear  Esc: back  Ctrl+C: quit";
    f.render_widget(
        Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
        chunks[chunks.len() - 1],
    );
}

fn render_input(f: &mut Frame, area: Rect, title: &str, value: &str, focused: bool) {
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let text = if focused {
        format!("{value}_")
    } else {
        value.to_string()
    };
    let input = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title),
    );
    f.render_widget(input, area);
}

fn render_browser(f: &mut Frame, area: Rect, screen: &mut HashScreen) {
    let focused = screen.focus == Focus::Browser;
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let items: Vec<ListItem> = screen
        .navigator
        .entries
        .iter()
        .map(|entry| ListItem::new(entry_label(entry.kind, &entry.name)))
        .collect();

    let title = format!(" {} ", screen.navigator.current_path.display());
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(title),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    f.render_stateful_widget(list, area, &mut screen.browser_state);
}

fn entry_label(kind: EntryKind, name: &str) -> String {
    match kind {
        EntryKind::ParentLink => ".. (parent directory)".to_string(),
        EntryKind::Directory => format!("{name}/"),
        EntryKind::File => name.to_string(),
    }
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width - w) / 2;
    let y = area.y + (area.height - h) / 2;
    Rect::new(x, y, w, h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_labels() {
        assert_eq!(entry_label(EntryKind::ParentLink, ".."), ".. (parent directory)");
        assert_eq!(entry_label(EntryKind::Directory, "src"), "src/");
        assert_eq!(entry_label(EntryKind::File, "a.txt"), "a.txt");
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 20, 10);
        let rect = centered_rect(area, 44, 9);
        assert!(rect.width <= area.width);
        assert!(rect.height <= area.height);
        assert_eq!(rect.x, 0);
    }
}
