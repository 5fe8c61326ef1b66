use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::icons::IconService;
use crate::routes::{Route, DESTINATIONS};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};

/// Top navigation bar: brand mark, destination tabs, search trigger.
/// The brand mark comes from the icon service, so it follows the active
/// theme the way a logo asset would follow light or dark mode.
pub struct NavbarComponent {
    pub route: Route,
    pub icons: IconService,
}

impl Default for NavbarComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl NavbarComponent {
    pub fn new() -> Self {
        Self {
            route: Route::default(),
            icons: IconService::default(),
        }
    }

    pub fn update_data(&mut self, route: Route, icons: IconService) {
        self.route = route;
        self.icons = icons;
    }
}

impl Component for NavbarComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            // Number keys jump straight to a destination
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                match Route::from_name(DESTINATIONS[index]) {
                    Some(route) => Action::Navigate(route),
                    None => Action::None,
                }
            }
            KeyCode::Char('s') | KeyCode::Char('/') => Action::ShowDialog(DialogType::Search),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let mut spans = vec![
            Span::styled(
                format!("{} taskdeck", self.icons.brand()),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
        ];

        for (index, name) in DESTINATIONS.iter().enumerate() {
            let active = Route::from_name(name) == Some(self.route);
            let style = if active {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(format!("{} {}", index + 1, name), style));
            spans.push(Span::raw("  "));
        }

        spans.push(Span::styled(
            format!("{} search", self.icons.search()),
            Style::default().fg(Color::DarkGray),
        ));

        let navbar = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));

        f.render_widget(navbar, rect);
    }
}
