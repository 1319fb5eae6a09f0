use trivia_dash::app::App;
use trivia_dash::cli::{parse_args, version_line, CliCommand, USAGE};
use trivia_dash::logging::init_logging;
use trivia_dash::startup::DashboardConfig;
use trivia_dash::terminal::{setup_panic_hook, TerminalManager};
use trivia_dash::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::Terminal;
use std::time::Duration;

/// Tick interval for the spinner and redraw checks
const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    let options = match parse_args(std::env::args()) {
        Ok(CliCommand::Version) => {
            println!("{}", version_line());
            return Ok(());
        }
        Ok(CliCommand::Help) => {
            println!("{}", USAGE);
            return Ok(());
        }
        Ok(CliCommand::Run(options)) => options,
        Err(e) => {
            eprintln!("trivia-dash: {}\n\n{}", e, USAGE);
            std::process::exit(2);
        }
    };

    color_eyre::install()?;
    init_logging();

    let config = DashboardConfig::from_env().apply_cli(&options);
    tracing::info!(
        base_url = %config.base_url,
        amount = config.amount,
        "starting {}",
        version_line()
    );

    // Restore the terminal before the panic message is printed
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run(config))
}

async fn run(config: DashboardConfig) -> Result<()> {
    let mut app = App::from_config(&config);
    let mut term_manager = TerminalManager::new()?;

    app.start_load();
    let result = run_app(term_manager.terminal(), &mut app).await;

    term_manager.restore();
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let Some(mut message_rx) = app.message_rx.take() else {
        return Ok(());
    };

    loop {
        // Redraw on change, and continuously while the spinner is visible
        if app.needs_redraw || app.store.is_loading() {
            terminal.draw(|f| ui::render(f, &*app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = tokio::time::sleep(TICK) => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) => app.handle_key(key),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::error!("terminal event error: {}", e);
                        return Err(e.into());
                    }
                    // Input closed
                    None => app.quit(),
                }
            }

            Some(msg) = message_rx.recv() => {
                app.handle_message(msg);
            }
        }

        if app.should_quit {
            tracing::info!("quitting");
            return Ok(());
        }
    }
}
