use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::{
    Component, ACCENT_GOLD, ACCENT_TEAL, BG_BASE, BG_PANEL, LOADING_TEXT, TEXT_DIM, TEXT_MAIN,
};
use crate::action::Action;
use crate::detail::{DetailState, EntryDetail};

pub struct DetailScreenProps<'a> {
    pub detail: Option<&'a DetailState>,
    pub is_focused: bool,
}

pub struct DetailScreen {
    status_bar: StatusBar,
}

impl DetailScreen {
    pub fn new() -> Self {
        Self {
            status_bar: StatusBar::new(),
        }
    }

    fn record_lines(record: &EntryDetail) -> Vec<Line<'static>> {
        let label = Style::default().fg(TEXT_DIM);
        let value = Style::default().fg(TEXT_MAIN);
        let field = |name: &'static str, text: String| {
            Line::from(vec![
                Span::styled(format!("{name}: "), label),
                Span::styled(text, value),
            ])
        };
        vec![
            Line::from(Span::styled(
                record.name.clone(),
                Style::default()
                    .fg(ACCENT_GOLD)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            field("Height", record.height.to_string()),
            field("Weight", record.weight.to_string()),
            field("Types", record.types_label()),
            field(
                "Sprite",
                record.image_url.clone().unwrap_or_else(|| "-".to_string()),
            ),
        ]
    }
}

impl Component<Action> for DetailScreen {
    type Props<'a> = DetailScreenProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }

        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(Action::Quit)
                }
                KeyCode::Esc | KeyCode::Backspace | KeyCode::Left => Some(Action::NavigateBack),
                KeyCode::Char('q') => Some(Action::Quit),
                _ => None,
            },
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        frame.render_widget(Block::default().style(Style::default().bg(BG_BASE)), area);

        let chunks = Layout::vertical([
            Constraint::Min(1),    // Record
            Constraint::Length(1), // Help bar
        ])
        .split(area);

        let title = props
            .detail
            .map(|detail| detail.params.pokemon_name.clone())
            .unwrap_or_default();
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(title, Style::default().fg(ACCENT_TEAL)))
            .style(Style::default().bg(BG_PANEL).fg(TEXT_MAIN));
        let inner = block.inner(chunks[0]);
        frame.render_widget(block, chunks[0]);

        match props.detail.and_then(DetailState::loaded) {
            Some(record) => {
                let body = Paragraph::new(Self::record_lines(record))
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true });
                frame.render_widget(body, inner);
            }
            // Failed fetches stay on the loading indicator.
            None => {
                let loading = Paragraph::new(LOADING_TEXT)
                    .style(Style::default().fg(TEXT_DIM))
                    .alignment(Alignment::Center);
                frame.render_widget(loading, inner);
            }
        }

        <StatusBar as Component<Action>>::render(
            &mut self.status_bar,
            frame,
            chunks[1],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("Esc", "back"),
                    StatusBarHint::new("q", "quit"),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}
