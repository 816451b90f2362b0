//! Screen routing: which component owns the frame and the keyboard

use ratatui::{layout::Rect, Frame};
use tui_dispatch::{
    Component, EventContext, EventKind, EventRoutingState, HandlerResponse, RenderContext,
};

use crate::action::Action;
use crate::components::{
    notice_modal::notice_area, CatalogScreen, CatalogScreenProps, DetailScreen,
    DetailScreenProps, NoticeModal, NoticeModalProps,
};
use crate::state::AppState;

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PokedexComponentId {
    Catalog,
    Detail,
    Notice,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PokedexContext {
    Catalog,
    Detail,
    Notice,
}

impl EventRoutingState<PokedexComponentId, PokedexContext> for AppState {
    fn focused(&self) -> Option<PokedexComponentId> {
        if self.notice.is_some() {
            Some(PokedexComponentId::Notice)
        } else if self.nav.on_detail() {
            Some(PokedexComponentId::Detail)
        } else {
            Some(PokedexComponentId::Catalog)
        }
    }

    fn modal(&self) -> Option<PokedexComponentId> {
        self.notice.as_ref().map(|_| PokedexComponentId::Notice)
    }

    fn binding_context(&self, id: PokedexComponentId) -> PokedexContext {
        match id {
            PokedexComponentId::Catalog => PokedexContext::Catalog,
            PokedexComponentId::Detail => PokedexContext::Detail,
            PokedexComponentId::Notice => PokedexContext::Notice,
        }
    }

    fn default_context(&self) -> PokedexContext {
        PokedexContext::Catalog
    }
}

pub struct PokedexUi {
    catalog: CatalogScreen,
    detail: DetailScreen,
    notice: NoticeModal,
}

impl PokedexUi {
    pub fn new() -> Self {
        Self {
            catalog: CatalogScreen::new(),
            detail: DetailScreen::new(),
            notice: NoticeModal::new(),
        }
    }

    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
        event_ctx: &mut EventContext<PokedexComponentId>,
    ) {
        let focused = render_ctx.is_focused() && state.notice.is_none();

        if state.nav.on_detail() {
            event_ctx.set_component_area(PokedexComponentId::Detail, area);
            event_ctx
                .component_areas
                .remove(&PokedexComponentId::Catalog);
            self.detail.render(
                frame,
                area,
                DetailScreenProps {
                    detail: state.detail.as_ref(),
                    is_focused: focused,
                },
            );
        } else {
            event_ctx.set_component_area(PokedexComponentId::Catalog, area);
            event_ctx.component_areas.remove(&PokedexComponentId::Detail);
            self.catalog.render(
                frame,
                area,
                CatalogScreenProps {
                    catalog: &state.catalog,
                    is_focused: focused,
                },
            );
        }

        match &state.notice {
            Some(notice) => {
                event_ctx.set_component_area(PokedexComponentId::Notice, notice_area(area));
                self.notice.render(
                    frame,
                    area,
                    NoticeModalProps {
                        notice,
                        is_focused: render_ctx.is_focused(),
                    },
                );
            }
            None => {
                event_ctx.component_areas.remove(&PokedexComponentId::Notice);
            }
        }
    }

    pub fn handle_catalog_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        let props = CatalogScreenProps {
            catalog: &state.catalog,
            is_focused: true,
        };
        handler_response(self.catalog.handle_event(event, props).into_iter().collect())
    }

    pub fn handle_detail_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        let props = DetailScreenProps {
            detail: state.detail.as_ref(),
            is_focused: true,
        };
        handler_response(self.detail.handle_event(event, props).into_iter().collect())
    }

    pub fn handle_notice_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        let Some(notice) = state.notice.as_ref() else {
            return HandlerResponse::ignored();
        };
        let props = NoticeModalProps {
            notice,
            is_focused: true,
        };
        let actions: Vec<_> = self.notice.handle_event(event, props).into_iter().collect();
        // The notice is modal: swallow everything else.
        HandlerResponse {
            actions,
            consumed: true,
            needs_render: false,
        }
    }
}

impl Default for PokedexUi {
    fn default() -> Self {
        Self::new()
    }
}

fn handler_response(actions: Vec<Action>) -> HandlerResponse<Action> {
    if actions.is_empty() {
        HandlerResponse::ignored()
    } else {
        HandlerResponse {
            actions,
            consumed: true,
            needs_render: false,
        }
    }
}
