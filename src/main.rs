//! portal-search: smart search client for the suppliers' portal
//!
//! Usage:
//!   portal-search                      - Open the search window
//!   portal-search search <query>       - Search without a window
//!   portal-search rate <id> <1-5>      - Rate a result
//!   portal-search config               - Show effective configuration
//!   portal-search help                 - Show help

mod app;
mod backend;
mod commands;
mod config;
mod native;
mod search;
mod ui;

use app::PortalSearch;
use backend::types::{ResultKind, SearchResult};
use backend::BackendClient;
use commands::Command;
use config::Config;
use iced::{window, Size, Task};
use search::{Request, SmartSearch};
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> iced::Result {
    init_logging();

    let args: Vec<String> = env::args().skip(1).collect();
    let config = Config::load();

    match Command::parse(&args) {
        Command::Gui => start_gui(config),
        Command::Search { query } => {
            run_cli(run_search(&config, query));
            Ok(())
        }
        Command::Rate { result_id, stars } => {
            run_cli(run_rate(&config, result_id, stars));
            Ok(())
        }
        Command::Config => {
            match Config::default_path() {
                Some(path) => println!("Config file: {}", path.display()),
                None => println!("Config file: (no config directory on this platform)"),
            }
            println!("backend_url = {:?}", config.backend_url);
            Ok(())
        }
        Command::Help => {
            println!("{}", Command::help_text());
            Ok(())
        }
        Command::Invalid { message } => {
            eprintln!("{}", message);
            std::process::exit(2);
        }
    }
}

fn init_logging() {
    // try_init: tests and embedders may have installed a subscriber already
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("portal_search=info")))
        .try_init();
}

fn run_cli(job: impl std::future::Future<Output = ()>) {
    match tokio::runtime::Runtime::new() {
        Ok(rt) => rt.block_on(job),
        Err(e) => eprintln!("Error: failed to start async runtime: {}", e),
    }
}

async fn run_search(config: &Config, query: String) {
    let backend = BackendClient::new(&config.backend_url);
    let mut search = SmartSearch::new();
    search.set_query(query);

    let Some(Request::Search { seq, query }) = search.submit() else {
        eprintln!("Nothing to search for");
        return;
    };
    let outcome = backend.smart_search(&query).await;
    search.finish_search(seq, &query, outcome);

    println!("Результаты поиска: {}\n", query);
    for result in search.results() {
        print_result(result);
    }
}

fn print_result(result: &SearchResult) {
    let badge = match result.kind {
        ResultKind::Create => "Создание",
        ResultKind::Search => "Поиск",
    };
    println!("[{}] {}  (уверенность {}%)", badge, result.title, result.confidence);
    println!("    {}", result.description);
    if let (Some(amount), Some(category)) = (&result.amount, &result.category) {
        println!("    Сумма: {} руб. | Категория: {}", amount, category);
    }
    println!("    id: {}\n", result.id);
}

async fn run_rate(config: &Config, result_id: String, stars: u8) {
    let Some(Request::Rate(request)) = SmartSearch::new().rate(&result_id, stars) else {
        eprintln!("Rating must be 1-5");
        return;
    };

    let backend = BackendClient::new(&config.backend_url);
    match backend.rate_result(request).await {
        Ok(()) => println!("Rated result {} with {} stars", result_id, stars),
        Err(e) => eprintln!("Error: {}", e),
    }
}

fn start_gui(config: Config) -> iced::Result {
    tracing::info!("Starting portal search window");

    iced::application(PortalSearch::title, PortalSearch::update, PortalSearch::view)
        .subscription(PortalSearch::subscription)
        .theme(PortalSearch::theme)
        .window(window::Settings {
            size: Size::new(1200.0, 820.0),
            position: window::Position::Centered,
            min_size: Some(Size::new(900.0, 600.0)),
            ..Default::default()
        })
        .antialiasing(true)
        .run_with(move || (PortalSearch::new(&config), Task::none()))
}
