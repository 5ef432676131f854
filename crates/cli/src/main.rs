//! Shopfront CLI - Interactive admin client for the store API.
//!
//! # Usage
//!
//! ```bash
//! # Connect to the default server (http://127.0.0.1:5000)
//! shopfront
//!
//! # Connect to another server with a request timeout
//! shopfront --base-url https://shop.example.com --timeout 10
//!
//! # Log as JSON lines
//! shopfront --log-json 2> shopfront.log
//! ```
//!
//! Once running, type `help` for the list of commands.
//!
//! # Environment Variables
//!
//! - `SHOPFRONT_BASE_URL` - Store API origin
//! - `SHOPFRONT_REQUEST_TIMEOUT_SECS` - Per-request timeout
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `RUST_LOG` - Log filter (default: `shopfront_cli=info,shopfront_client=info`)

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::{self, BufRead, Write};
use std::time::Duration;

use clap::Parser;
use sentry::integrations::tracing as sentry_tracing;
use shopfront_client::view::text;
use shopfront_client::{ClientConfig, ElementId, HttpStoreApi, Page, Storefront, UiEvent};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod terminal;

use commands::Command;
use terminal::TerminalView;

#[derive(Parser)]
#[command(name = "shopfront")]
#[command(author, version, about = "Shopfront admin client")]
struct Cli {
    /// Store API origin (overrides `SHOPFRONT_BASE_URL`)
    #[arg(long)]
    base_url: Option<String>,

    /// Per-request timeout in seconds (overrides `SHOPFRONT_REQUEST_TIMEOUT_SECS`)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,
}

type App = Storefront<HttpStoreApi, TerminalView>;

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &ClientConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

/// Load configuration from the environment and apply command-line overrides.
fn load_config(cli: &Cli) -> Result<ClientConfig, shopfront_client::ConfigError> {
    let mut config = ClientConfig::from_env()?;

    if let Some(base_url) = &cli.base_url {
        config.base_url = ClientConfig::new(base_url)?.base_url;
    }
    if let Some(secs) = cli.timeout {
        config = config.with_request_timeout(Some(Duration::from_secs(secs)));
    }

    Ok(config)
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    let config = load_config(&cli);

    // Initialize Sentry (must be done before tracing subscriber)
    let sentry_guard = config.as_ref().ok().and_then(init_sentry);
    let sentry_layer = sentry_guard
        .as_ref()
        .map(|_| sentry_tracing::layer().event_filter(sentry_event_filter));

    // Logs go to stderr so they never interleave with the rendered page
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "shopfront_cli=info,shopfront_client=info".into());

    let json_layer = cli.log_json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(io::stderr)
    });
    let text_layer =
        (!cli.log_json).then(|| tracing_subscriber::fmt::layer().with_writer(io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .with(sentry_layer)
        .init();

    let result = match config {
        Ok(config) => run(&config).await,
        Err(e) => Err(e.into()),
    };

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(config: &ClientConfig) -> Result<(), Box<dyn std::error::Error>> {
    let api = HttpStoreApi::new(config)?;
    tracing::info!(base_url = %api.base_url(), "Connecting to store");

    let mut app = Storefront::new(api, TerminalView::new());
    app.start().await;
    terminal::render(app.view().page(), &mut io::stdout())?;

    let mut line = String::new();
    loop {
        write!(io::stdout(), "> ")?;
        io::stdout().flush()?;

        line.clear();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            break;
        }

        let command = match commands::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => command,
            Err(e) => {
                writeln!(io::stdout(), "{e}")?;
                continue;
            }
        };

        if let Some(control) = execute(&mut app, command).await? {
            writeln!(io::stdout(), "{control} is not available right now")?;
        }
        terminal::render(app.view().page(), &mut io::stdout())?;
        // Alerts were already printed when raised
        app.view_mut().page_mut().take_alerts();
    }

    Ok(())
}

/// Apply one command to the page.
///
/// Returns the name of the control the command hit if that control is not on
/// screen.
async fn execute(app: &mut App, command: Command) -> io::Result<Option<String>> {
    let page = app.view_mut().page_mut();

    let (event, control) = match command {
        Command::Login { email, password } => {
            page.type_login(&email, &password);
            (page.click(ElementId::LoginForm), ElementId::LoginForm.to_string())
        }
        Command::Name(name) => return Ok(type_visible(page, ElementId::ProductName, &name)),
        Command::Price(price) => return Ok(type_visible(page, ElementId::ProductPrice, &price)),
        Command::Save => (
            page.click(ElementId::SubmitProduct),
            ElementId::SubmitProduct.to_string(),
        ),
        Command::Edit(id) => (page.click_edit(id), format!("{} #{id}", text::EDIT_LABEL)),
        Command::Delete(id) => (page.click_delete(id), format!("{} #{id}", text::DELETE_LABEL)),
        Command::Cancel => (
            page.click(ElementId::CancelEdit),
            ElementId::CancelEdit.to_string(),
        ),
        Command::Refresh => (Some(UiEvent::Refresh), String::new()),
        Command::Retry => (page.click_retry(), text::RETRY_LABEL.to_owned()),
        Command::Help => {
            writeln!(io::stdout(), "{}", commands::HELP)?;
            return Ok(None);
        }
        Command::Show | Command::Quit => return Ok(None),
    };

    match event {
        Some(event) => {
            app.dispatch(event).await;
            Ok(None)
        }
        None => Ok(Some(control)),
    }
}

/// Type into a field if it is displayed, otherwise name the hidden field.
fn type_visible(page: &mut Page, element: ElementId, value: &str) -> Option<String> {
    if page.is_visible(element) && page.type_into(element, value) {
        None
    } else {
        Some(element.to_string())
    }
}
