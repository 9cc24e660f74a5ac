use crate::application::{DraftField, Mode, ViewController};
use crate::domain::Role;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

pub fn render_ui(f: &mut Frame, controller: &ViewController) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, controller, chunks[0]);
    render_role_switch(f, controller, chunks[1]);
    render_menu_list(f, controller, chunks[2]);
    render_status_bar(f, controller, chunks[3]);

    if controller.is_modal_visible() {
        render_menu_form(f, controller);
    }

    if let Some(notification) = controller.notification() {
        render_notification(f, notification.title(), &notification.message());
    }
}

fn render_header(f: &mut Frame, controller: &ViewController, area: Rect) {
    let header = Paragraph::new(format!(
        "Restaurant Management | {} view | {} menus",
        role_label(controller.role()),
        controller.menus().len()
    ))
    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    f.render_widget(header, area);
}

fn render_role_switch(f: &mut Frame, controller: &ViewController, area: Rect) {
    let label = match controller.role() {
        Role::Chef => "[Tab] Switch to User View",
        Role::User => "[Tab] Switch to Chef View",
    };
    let switch = Paragraph::new(label).style(Style::default().fg(Color::LightBlue));
    f.render_widget(switch, area);
}

fn render_menu_list(f: &mut Frame, controller: &ViewController, area: Rect) {
    let (title, empty_text) = match controller.role() {
        Role::Chef => ("Chef Menu Management", "No menus yet. Add one!"),
        Role::User => ("Available Menus", "No menus available."),
    };
    let block = Block::default().borders(Borders::ALL).title(title);

    if controller.menus().is_empty() {
        let empty = Paragraph::new(empty_text)
            .block(block)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = controller
        .menus()
        .iter()
        .map(|menu| {
            let name = Line::from(Span::styled(
                menu.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ));
            match controller.role() {
                Role::Chef => ListItem::new(name),
                Role::User => ListItem::new(vec![
                    name,
                    Line::from(Span::styled(
                        format!("  {}", menu.items_text()),
                        Style::default().fg(Color::Gray),
                    )),
                ]),
            }
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
        .highlight_symbol("> ");
    let mut state = ListState::default().with_selected(Some(controller.selected_index()));
    f.render_stateful_widget(list, area, &mut state);
}

fn render_status_bar(f: &mut Frame, controller: &ViewController, area: Rect) {
    let text = if controller.notification().is_some() {
        "Enter/Esc: dismiss".to_string()
    } else {
        match (controller.mode(), controller.role()) {
            (Mode::Browsing, Role::Chef) => {
                "↑↓/jk: select | a: add menu | Enter/e: edit | Tab/r: switch view | q: quit".to_string()
            }
            (Mode::Browsing, Role::User) => {
                "↑↓/jk: select | Enter/o: request order | Tab/r: switch view | q: quit".to_string()
            }
            (Mode::Composing, _) | (Mode::Editing { .. }, _) => {
                "Tab: next field | Enter: save | Esc: cancel".to_string()
            }
        }
    };

    let style = match controller.mode() {
        Mode::Browsing => Style::default(),
        Mode::Composing => Style::default().fg(Color::Green),
        Mode::Editing { .. } => Style::default().fg(Color::Yellow),
    };
    let status = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Keys"))
        .style(style);
    f.render_widget(status, area);
}

fn render_menu_form(f: &mut Frame, controller: &ViewController) {
    let popup_area = centered_rect(f.area(), 70, 10);
    f.render_widget(Clear, popup_area);

    let title = match controller.mode() {
        Mode::Editing { .. } => "Edit Menu",
        _ => "Create Menu",
    };
    let outer = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().fg(Color::White));
    let inner = outer.inner(popup_area);
    f.render_widget(outer, popup_area);

    let fields = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3), Constraint::Min(0)])
        .split(inner);

    let draft = controller.draft();
    let (name_area, items_area) = (fields[0], fields[1]);
    let name_cursor = match draft.focus {
        DraftField::Name => Some(draft.cursor),
        DraftField::Items => None,
    };
    let items_cursor = match draft.focus {
        DraftField::Items => Some(draft.cursor),
        DraftField::Name => None,
    };
    render_field(f, name_area, "Menu name", &draft.name, name_cursor);
    render_field(f, items_area, "Menu items (comma separated)", &draft.items, items_cursor);
}

/// Draws a single-line text field; the focused one scrolls to keep its cursor visible.
fn render_field(f: &mut Frame, area: Rect, label: &str, value: &str, cursor: Option<usize>) {
    let border_style = if cursor.is_some() {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let visible = area.width.saturating_sub(2);
    let cursor_col = cursor.map(|cursor| cursor_column(value, cursor));
    let scroll = cursor_col.map_or(0, |col| field_scroll(col, visible));

    let field = Paragraph::new(value.to_string())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(label.to_string())
                .border_style(border_style),
        )
        .scroll((0, scroll));
    f.render_widget(field, area);

    if let Some(col) = cursor_col {
        f.set_cursor_position(Position::new(area.x + 1 + (col - scroll), area.y + 1));
    }
}

/// Terminal column of the cursor, counting wide characters as two cells.
fn cursor_column(value: &str, cursor: usize) -> u16 {
    let before: String = value.chars().take(cursor).collect();
    u16::try_from(Span::raw(before).width()).unwrap_or(u16::MAX)
}

/// Horizontal scroll keeping `cursor_col` inside a field `visible` columns wide.
fn field_scroll(cursor_col: u16, visible: u16) -> u16 {
    cursor_col.saturating_sub(visible.saturating_sub(1))
}

fn render_notification(f: &mut Frame, title: &str, message: &str) {
    let popup_area = centered_rect(f.area(), 50, 5);
    f.render_widget(Clear, popup_area);

    let popup = Paragraph::new(message.to_string())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string())
                .style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(popup, popup_area);
}

fn role_label(role: Role) -> &'static str {
    match role {
        Role::Chef => "Chef",
        Role::User => "User",
    }
}

/// Rectangle `percent_x` wide and `height` rows tall, centred in `area`.
fn centered_rect(area: Rect, percent_x: u16, height: u16) -> Rect {
    let width = (u32::from(area.width) * u32::from(percent_x.min(100)) / 100) as u16;
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
