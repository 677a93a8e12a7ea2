//! Command line parsing
//!
//! Parses `portal-search [command] [args...]`.

/// Parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open the search window (no arguments)
    Gui,
    /// Run one search without a window: search <text...>
    Search { query: String },
    /// Rate a result: rate <result-id> <1-5>
    Rate { result_id: String, stars: u8 },
    /// Print the effective configuration: config
    Config,
    /// Show help: help
    Help,
    /// Anything we could not make sense of, with a message for the user
    Invalid { message: String },
}

impl Command {
    /// Parse arguments after the program name
    pub fn parse(args: &[String]) -> Self {
        let Some(cmd) = args.first() else {
            return Command::Gui;
        };
        let rest = &args[1..];

        match cmd.as_str() {
            "search" | "s" => {
                let query = rest.join(" ");
                if query.trim().is_empty() {
                    Command::Invalid {
                        message: "Usage: portal-search search <query>".to_string(),
                    }
                } else {
                    Command::Search { query }
                }
            }
            "rate" | "r" => match rest {
                [result_id, stars] => match stars.parse::<u8>() {
                    Ok(stars) if (1..=5).contains(&stars) => Command::Rate {
                        result_id: result_id.clone(),
                        stars,
                    },
                    _ => Command::Invalid {
                        message: format!("Rating must be 1-5, got {}", stars),
                    },
                },
                _ => Command::Invalid {
                    message: "Usage: portal-search rate <result-id> <1-5>".to_string(),
                },
            },
            "config" => Command::Config,
            "help" | "--help" | "-h" => Command::Help,
            other => Command::Invalid {
                message: format!("Unknown command: {}. Run 'portal-search help' for usage.", other),
            },
        }
    }

    pub fn help_text() -> &'static str {
        r#"portal-search - smart search for the suppliers' portal

Usage: portal-search [command]

Commands:
  (none)                  Open the search window
  search <query>          Run a search and print the result cards
  rate <result-id> <1-5>  Rate a search result
  config                  Show the effective configuration
  help                    Show this help

Environment:
  PORTAL_SEARCH_BACKEND_URL  Backend base URL (default http://localhost:8000)
  RUST_LOG                   Log filter, e.g. portal_search=debug"#
    }
}
