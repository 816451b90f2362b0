//! Pokedex TUI - entry point

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::sync::Arc;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventKind,
    HandlerResponse, Keybindings, TaskKey,
};
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{DebugRunOutput, DebugSession, DebugSessionError, ReplayItem};

use pokedex::action::Action;
use pokedex::api::{CatalogSource, PokeApiClient};
use pokedex::config::Args;
use pokedex::effect::{self, Effect};
use pokedex::reducer::reducer;
use pokedex::state::AppState;
use pokedex::ui::{PokedexComponentId, PokedexContext, PokedexUi};

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();
    let _log_guard = setup_tracing(&args);

    let api_config = args
        .api_config()
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidInput, error))?;
    tracing::info!(base_url = %api_config.base_url, limit = api_config.index_limit, "starting");
    let client = PokeApiClient::new(api_config).map_err(io::Error::other)?;
    let source: Arc<dyn CatalogSource> = Arc::new(client);

    let debug = DebugSession::new(args.debug);

    let state = debug
        .load_state_or_else_async(|| async { Ok::<AppState, io::Error>(AppState::default()) })
        .await
        .map_err(debug_error)?;
    let replay_actions = debug.load_replay_items().map_err(debug_error)?;
    let (middleware, recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    // ===== Terminal setup =====
    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &debug, store, replay_actions, source).await;

    // ===== Cleanup =====
    if use_alt_screen {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug.save_actions(recorder.as_ref()).map_err(debug_error)?;
    tracing::info!("bye");
    Ok(())
}

/// File logging only; stdout belongs to the terminal UI. Hold the guard
/// until exit so buffered lines get flushed.
fn setup_tracing(args: &Args) -> WorkerGuard {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pokedex={}", args.log_level())));

    let log_dir = args
        .log_file
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(std::path::Path::new("."));
    let log_filename = args
        .log_file
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("pokedex.log"));

    let file_appender = tracing_appender::rolling::never(log_dir, log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    guard
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    replay_actions: Vec<ReplayItem<Action>>,
    source: Arc<dyn CatalogSource>,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(PokedexUi::new()));
    let mut bus: EventBus<AppState, Action, PokedexComponentId, PokedexContext> =
        EventBus::new();
    let keybindings: Keybindings<PokedexContext> = Keybindings::new();

    let ui_catalog = Rc::clone(&ui);
    bus.register(PokedexComponentId::Catalog, move |event, state| {
        ui_catalog
            .borrow_mut()
            .handle_catalog_event(&event.kind, state)
    });

    let ui_detail = Rc::clone(&ui);
    bus.register(PokedexComponentId::Detail, move |event, state| {
        ui_detail
            .borrow_mut()
            .handle_detail_event(&event.kind, state)
    });

    let ui_notice = Rc::clone(&ui);
    bus.register(PokedexComponentId::Notice, move |event, state| {
        ui_notice
            .borrow_mut()
            .handle_notice_event(&event.kind, state)
    });

    bus.register_global(|event, _state| match event.kind {
        EventKind::Resize(width, height) => {
            HandlerResponse::action(Action::UiTerminalResize(width, height)).with_render()
        }
        _ => HandlerResponse::ignored(),
    });

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            Some(Action::Init),
            Some(Action::Quit),
            |_runtime| {},
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                ui.borrow_mut()
                    .render(frame, area, state, render_ctx, event_ctx);
            },
            |action| matches!(action, Action::Quit),
            move |effect: Effect, ctx: &mut EffectContext<Action>| {
                handle_effect(&source, effect, ctx)
            },
        )
        .await
}

fn handle_effect(source: &Arc<dyn CatalogSource>, effect: Effect, ctx: &mut EffectContext<Action>) {
    let key = TaskKey::new(effect.task_key());
    let source = Arc::clone(source);
    ctx.tasks()
        .spawn(key, async move { effect::perform(source, effect).await });
}
