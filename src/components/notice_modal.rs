use crossterm::event::{KeyCode, KeyEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Borders, Paragraph, Wrap},
    Frame,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    centered_rect, BaseStyle, BorderStyle, Modal, ModalBehavior, ModalProps, ModalStyle, Padding,
};

use super::{Component, ACCENT_GOLD, BG_PANEL, TEXT_DIM, TEXT_MAIN};
use crate::action::Action;
use crate::state::Notice;

pub struct NoticeModalProps<'a> {
    pub notice: &'a Notice,
    pub is_focused: bool,
}

pub struct NoticeModal {
    modal: Modal,
}

pub fn notice_area(area: Rect) -> Rect {
    centered_rect(40, 9, area)
}

fn notice_close() -> Action {
    Action::NoticeDismiss
}

fn notice_style() -> ModalStyle {
    ModalStyle {
        dim_factor: 0.6,
        base: BaseStyle {
            border: Some(BorderStyle {
                borders: Borders::ALL,
                style: Style::default().fg(TEXT_DIM),
                focused_style: Some(Style::default().fg(ACCENT_GOLD)),
            }),
            padding: Padding::all(1),
            bg: Some(BG_PANEL),
            fg: None,
        },
    }
}

impl NoticeModal {
    pub fn new() -> Self {
        Self {
            modal: Modal::new(),
        }
    }
}

impl Component<Action> for NoticeModal {
    type Props<'a> = NoticeModalProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        if let EventKind::Key(key) = event {
            if key.kind == KeyEventKind::Press && key.code == KeyCode::Enter {
                return vec![Action::NoticeDismiss];
            }
        }

        // Esc goes through the modal's own close handling.
        let mut noop_render = |_frame: &mut Frame, _area: Rect| {};
        self.modal
            .handle_event(
                event,
                ModalProps {
                    is_open: true,
                    is_focused: true,
                    area: Rect::default(),
                    style: notice_style(),
                    behavior: ModalBehavior {
                        close_on_esc: true,
                        close_on_backdrop: false,
                    },
                    on_close: notice_close,
                    render_content: &mut noop_render,
                },
            )
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let notice = props.notice;
        let mut render_content = |frame: &mut Frame, content_area: Rect| {
            let chunks = Layout::vertical([
                Constraint::Length(1), // Title
                Constraint::Min(1),    // Message
                Constraint::Length(1), // Hint
            ])
            .split(content_area);

            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    notice.title(),
                    Style::default()
                        .fg(ACCENT_GOLD)
                        .add_modifier(Modifier::BOLD),
                )))
                .alignment(Alignment::Center),
                chunks[0],
            );
            frame.render_widget(
                Paragraph::new(notice.message())
                    .style(Style::default().fg(TEXT_MAIN))
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true }),
                chunks[1],
            );
            frame.render_widget(
                Paragraph::new("Enter: OK")
                    .style(Style::default().fg(TEXT_DIM))
                    .alignment(Alignment::Center),
                chunks[2],
            );
        };

        self.modal.render(
            frame,
            area,
            ModalProps {
                is_open: true,
                is_focused: props.is_focused,
                area: notice_area(area),
                style: notice_style(),
                behavior: ModalBehavior {
                    close_on_esc: true,
                    close_on_backdrop: false,
                },
                on_close: notice_close,
                render_content: &mut render_content,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use tui_dispatch::testing::*;

    fn notice() -> Notice {
        Notice::NotFound {
            query: "agumon".into(),
        }
    }

    fn press(modal: &mut NoticeModal, code: KeyCode) -> Vec<Action> {
        let notice = notice();
        modal
            .handle_event(
                &EventKind::Key(KeyEvent::new(code, KeyModifiers::NONE)),
                NoticeModalProps {
                    notice: &notice,
                    is_focused: true,
                },
            )
            .into_iter()
            .collect()
    }

    #[test]
    fn test_enter_dismisses() {
        let mut modal = NoticeModal::new();
        let actions = press(&mut modal, KeyCode::Enter);
        actions.assert_count(1);
        actions.assert_first(Action::NoticeDismiss);
    }

    #[test]
    fn test_typing_is_swallowed() {
        let mut modal = NoticeModal::new();
        assert!(press(&mut modal, KeyCode::Char('x')).is_empty());
    }

    #[test]
    fn test_renders_message() {
        let mut render = RenderHarness::new(80, 24);
        let mut modal = NoticeModal::new();
        let notice = notice();
        let output = render.render_to_string_plain(|frame| {
            modal.render(
                frame,
                frame.area(),
                NoticeModalProps {
                    notice: &notice,
                    is_focused: true,
                },
            );
        });
        assert!(output.contains("Pokemon not found!"));
        assert!(output.contains("Enter: OK"));
    }
}
