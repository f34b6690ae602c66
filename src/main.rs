//! movie-search: search-as-you-type lookup for a movie listing site
//!
//! Usage:
//!   movie-search                          - Open the search window
//!   movie-search search <query> [--html]  - One-shot search, print results
//!   movie-search config                   - Show resolved configuration
//!   movie-search help                     - Show help

mod app;
mod backend;
mod config;
mod native;
mod ui;
mod widget;

use app::MovieSearch;
use backend::SearchClient;
use config::Config;
use iced::{window, Size};
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use widget::ResultsView;

fn main() -> iced::Result {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("{} (using defaults)", e);
            Config::default()
        }
    }
    .with_env_overrides();

    let args: Vec<String> = env::args().collect();

    if args.len() > 1 {
        return handle_cli_command(&args[1], &args[2..], config);
    }

    start_window(config)
}

fn handle_cli_command(cmd: &str, rest: &[String], config: Config) -> iced::Result {
    match cmd {
        "search" | "s" => {
            let html = rest.iter().any(|a| a == "--html");
            let query = rest
                .iter()
                .filter(|a| a.as_str() != "--html")
                .cloned()
                .collect::<Vec<_>>()
                .join(" ");
            run_search(&config, query.trim(), html);
            Ok(())
        }
        "config" => {
            match Config::path() {
                Some(path) => println!("Config file: {}", path.display()),
                None => println!("Config file: (no config directory)"),
            }
            println!("base_url             = {}", config.base_url);
            println!("debounce_ms          = {}", config.debounce_ms);
            println!("min_query_len        = {}", config.min_query_len);
            println!("request_timeout_secs = {}", config.request_timeout_secs);
            Ok(())
        }
        "help" | "--help" | "-h" => {
            println!("movie-search - search-as-you-type movie lookup\n");
            println!("Usage: movie-search [command]\n");
            println!("Commands:");
            println!("  (none)                  Open the search window");
            println!("  search <query> [--html] Query the backend once and print results");
            println!("  config                  Show resolved configuration");
            println!("  help                    Show this help message");
            println!("\nSet {} to point at another site", config::BASE_URL_ENV);
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {}", cmd);
            eprintln!("Run 'movie-search help' for usage");
            Ok(())
        }
    }
}

fn run_search(config: &Config, query: &str, html: bool) {
    if query.is_empty() {
        eprintln!("Usage: movie-search search <query> [--html]");
        return;
    }

    let client = match SearchClient::new(&config.base_url, config.request_timeout()) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error: failed to create tokio runtime: {}", e);
            return;
        }
    };

    match rt.block_on(client.search(query)) {
        Ok(results) => {
            let view = ResultsView::from_results(&results);
            if html {
                println!("{}", view.to_html());
            } else {
                println!("{}", view.to_text());
            }
        }
        Err(e) => eprintln!("Error: {}", e),
    }
}

fn start_window(config: Config) -> iced::Result {
    let client = match SearchClient::new(&config.base_url, config.request_timeout()) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Could not create HTTP client: {}", e);
            return Ok(());
        }
    };

    tracing::info!("Searching against {}", client.base_url());

    iced::application(MovieSearch::title, MovieSearch::update, MovieSearch::view)
        .subscription(MovieSearch::subscription)
        .theme(MovieSearch::theme)
        .window(window::Settings {
            size: Size::new(640.0, 420.0),
            position: window::Position::Centered,
            exit_on_close_request: false,
            ..Default::default()
        })
        .antialiasing(true)
        .run_with(move || MovieSearch::new(config, client))
}
