use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    highlight_substring, BaseStyle, Padding, SelectList, SelectListBehavior, SelectListProps,
    SelectListStyle, SelectionStyle, StatusBar, StatusBarHint, StatusBarItem, StatusBarProps,
    StatusBarSection, StatusBarStyle, TextInput, TextInputProps, TextInputStyle,
};

use super::{
    Component, ACCENT_GOLD, ACCENT_TEAL, BG_BASE, BG_HIGHLIGHT, BG_PANEL, LOADING_TEXT, TEXT_DIM,
    TEXT_MAIN,
};
use crate::action::Action;
use crate::catalog::{CatalogState, SortMode};

pub struct CatalogScreenProps<'a> {
    pub catalog: &'a CatalogState,
    pub is_focused: bool,
}

/// The list screen: query input, sort triggers and the filtered list.
pub struct CatalogScreen {
    input: TextInput,
    list: SelectList,
    status_bar: StatusBar,
}

impl CatalogScreen {
    pub fn new() -> Self {
        Self {
            input: TextInput::new(),
            list: SelectList::new(),
            status_bar: StatusBar::new(),
        }
    }

    fn items(catalog: &CatalogState) -> Vec<Line<'static>> {
        let base = Style::default().fg(TEXT_MAIN);
        let highlight = Style::default()
            .fg(ACCENT_GOLD)
            .add_modifier(Modifier::BOLD);
        catalog
            .view
            .iter()
            .map(|entry| highlight_substring(&entry.name, &catalog.query_text, base, highlight))
            .collect()
    }

    fn render_status(&mut self, frame: &mut Frame, area: Rect, catalog: &CatalogState) {
        let status = if catalog.phase.shows_loading() {
            LOADING_TEXT.to_string()
        } else {
            format!(
                "{}/{}  sort: {}",
                catalog.view.len(),
                catalog.canonical.len(),
                catalog.sort_label()
            )
        };
        let status_items = [StatusBarItem::span(Span::styled(
            status,
            Style::default().fg(ACCENT_GOLD),
        ))];
        let hints = [
            StatusBarHint::new("Enter", "Search"),
            StatusBarHint::new("Tab", "Pick"),
            StatusBarHint::new("F2", "Sort by Name"),
            StatusBarHint::new("F3", "Sort by Type"),
            StatusBarHint::new("F5", "Reload"),
            StatusBarHint::new("Esc", "Quit"),
        ];
        let style = StatusBarStyle {
            text: Style::default().fg(TEXT_DIM),
            hint_key: Style::default()
                .fg(ACCENT_TEAL)
                .add_modifier(Modifier::BOLD),
            hint_label: Style::default().fg(TEXT_DIM),
            separator: Style::default().fg(TEXT_DIM),
            ..StatusBarStyle::default()
        };
        <StatusBar as Component<Action>>::render(
            &mut self.status_bar,
            frame,
            area,
            StatusBarProps {
                left: StatusBarSection::hints(&hints).with_separator("  "),
                center: StatusBarSection::empty(),
                right: StatusBarSection::items(&status_items),
                style,
                is_focused: false,
            },
        );
    }
}

impl Component<Action> for CatalogScreen {
    type Props<'a> = CatalogScreenProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }
        let EventKind::Key(key) = event else {
            return Vec::new();
        };
        let catalog = props.catalog;

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return vec![Action::Quit];
            }
            KeyCode::Esc => return vec![Action::Quit],
            KeyCode::Enter => {
                return vec![Action::CatalogSearchSubmit(catalog.query_text.clone())];
            }
            KeyCode::Tab => {
                return catalog
                    .highlighted()
                    .map(|entry| Action::CatalogEntrySelect(entry.name.clone()))
                    .into_iter()
                    .collect();
            }
            KeyCode::F(2) => return vec![Action::CatalogSortSet(SortMode::ByName)],
            KeyCode::F(3) => return vec![Action::CatalogSortSet(SortMode::ByType)],
            KeyCode::F(5) => return vec![Action::CatalogLoad],
            KeyCode::Up | KeyCode::Down | KeyCode::PageUp | KeyCode::PageDown => {
                if catalog.view.is_empty() {
                    return Vec::new();
                }
                let items = Self::items(catalog);
                let list_props = SelectListProps {
                    items: &items,
                    count: items.len(),
                    selected: catalog.cursor.min(items.len().saturating_sub(1)),
                    is_focused: true,
                    style: list_style(),
                    behavior: SelectListBehavior {
                        show_scrollbar: true,
                        wrap_navigation: false,
                    },
                    on_select: Action::CatalogCursorMove,
                    render_item: &|item| item.clone(),
                };
                return self
                    .list
                    .handle_event(event, list_props)
                    .into_iter()
                    .collect();
            }
            _ => {}
        }

        // Everything else edits the query
        let input_props = TextInputProps {
            value: &catalog.query_text,
            placeholder: "Search Pokemon",
            is_focused: true,
            style: input_style(),
            on_change: Action::CatalogQueryChange,
            on_submit: Action::CatalogSearchSubmit,
            on_cursor_move: Some(|_| Action::Render),
        };
        self.input
            .handle_event(event, input_props)
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let catalog = props.catalog;
        frame.render_widget(Block::default().style(Style::default().bg(BG_BASE)), area);

        let chunks = Layout::vertical([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Query input
            Constraint::Min(1),    // Entries
            Constraint::Length(1), // Status
        ])
        .split(area);

        let title = Paragraph::new(Line::from(Span::styled(
            "POKEDEX",
            Style::default()
                .fg(ACCENT_TEAL)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(title, chunks[0]);

        let input_props = TextInputProps {
            value: &catalog.query_text,
            placeholder: "Search Pokemon",
            is_focused: props.is_focused,
            style: input_style(),
            on_change: Action::CatalogQueryChange,
            on_submit: Action::CatalogSearchSubmit,
            on_cursor_move: Some(|_| Action::Render),
        };
        self.input.render(frame, chunks[1], input_props);

        let block = Block::default()
            .borders(Borders::ALL)
            .title("Entries")
            .style(Style::default().bg(BG_PANEL).fg(TEXT_MAIN));
        let inner = block.inner(chunks[2]);
        frame.render_widget(block, chunks[2]);

        if catalog.view.is_empty() && catalog.phase.shows_loading() {
            let loading = Paragraph::new(LOADING_TEXT)
                .style(Style::default().fg(TEXT_DIM))
                .alignment(Alignment::Center);
            frame.render_widget(loading, inner);
        } else {
            let items = Self::items(catalog);
            let list_props = SelectListProps {
                items: &items,
                count: items.len(),
                selected: catalog.cursor.min(items.len().saturating_sub(1)),
                is_focused: props.is_focused,
                style: list_style(),
                behavior: SelectListBehavior {
                    show_scrollbar: true,
                    wrap_navigation: false,
                },
                on_select: Action::CatalogCursorMove,
                render_item: &|item| item.clone(),
            };
            self.list.render(frame, inner, list_props);
        }

        self.render_status(frame, chunks[3], catalog);
    }
}

fn input_style() -> TextInputStyle {
    TextInputStyle {
        base: BaseStyle {
            border: None,
            padding: Padding::xy(1, 1),
            bg: Some(BG_PANEL),
            fg: Some(TEXT_MAIN),
        },
        placeholder_style: None,
        cursor_style: None,
    }
}

fn list_style() -> SelectListStyle {
    SelectListStyle {
        base: BaseStyle {
            border: None,
            padding: Padding::xy(1, 0),
            bg: None,
            fg: Some(TEXT_MAIN),
        },
        selection: SelectionStyle {
            style: Some(
                Style::default()
                    .bg(BG_HIGHLIGHT)
                    .fg(TEXT_MAIN)
                    .add_modifier(Modifier::BOLD),
            ),
            marker: None,
            disabled: false,
        },
        ..SelectListStyle::default()
    }
}
