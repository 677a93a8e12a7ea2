//! Core application state and Iced Application implementation
//!
//! The page is header, smart search and footer stacked vertically. All
//! search state lives in [`SmartSearch`]; this module only routes messages
//! and runs the backend calls it asks for.

use iced::keyboard::{self, key::Named, Key};
use iced::widget::{column, container, scrollable};
use iced::{Background, Element, Length, Subscription, Task, Theme};

use crate::backend::types::{CreateFormResponse, RateRequest, SearchResult};
use crate::backend::{BackendClient, BackendError};
use crate::config::Config;
use crate::native::browser;
use crate::search::{Action, Request, SmartSearch};
use crate::ui::{self, theme::PortalTheme, NavAction};

// ============================================================================
// Application State
// ============================================================================

pub struct PortalSearch {
    search: SmartSearch,
    backend: BackendClient,
    /// Hands a link to the desktop browser
    open_link: fn(&str) -> Result<(), String>,
}

#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    SearchSubmitted,
    SearchFinished {
        seq: u64,
        query: String,
        outcome: Result<Vec<SearchResult>, BackendError>,
    },
    ExamplePicked(&'static str),
    HistoryToggled,
    HistoryPicked(&'static str),
    ResultActivated(String),
    FormCreated(Result<CreateFormResponse, BackendError>),
    ResultsFetched {
        query: String,
        outcome: Result<serde_json::Value, BackendError>,
    },
    ResultRated {
        result_id: String,
        stars: u8,
    },
    Rated {
        request: RateRequest,
        outcome: Result<(), BackendError>,
    },
    NoticeDismissed,
    Nav(NavAction),
    EscapePressed,
}

impl PortalSearch {
    pub fn new(config: &Config) -> Self {
        tracing::info!("Using search backend at {}", config.backend_url);
        Self {
            search: SmartSearch::new(),
            backend: BackendClient::new(&config.backend_url),
            open_link: browser::open_url,
        }
    }

    pub fn title(&self) -> String {
        String::from("Портал поставщиков · Умный поиск")
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::QueryChanged(query) => {
                self.search.set_query(query);
                Task::none()
            }

            Message::SearchSubmitted => match self.search.submit() {
                Some(request) => self.dispatch(request),
                None => Task::none(),
            },

            Message::SearchFinished { seq, query, outcome } => {
                self.search.finish_search(seq, &query, outcome);
                Task::none()
            }

            Message::ExamplePicked(query) => {
                self.search.set_query(query.to_string());
                Task::none()
            }

            Message::HistoryToggled => {
                self.search.toggle_history();
                Task::none()
            }

            Message::HistoryPicked(entry_id) => {
                self.search.pick_history(entry_id);
                Task::none()
            }

            Message::ResultActivated(result_id) => match self.search.activate(&result_id) {
                Some(request) => self.dispatch(request),
                None => Task::none(),
            },

            Message::FormCreated(Ok(form)) => {
                tracing::info!("Form created: {}", form.form_url);
                let opened = browser::resolve_url(self.backend.base_url(), &form.form_url)
                    .and_then(|url| (self.open_link)(&url));
                if let Err(e) = opened {
                    self.search.report_failure(Action::OpenForm, &e);
                }
                Task::none()
            }

            Message::FormCreated(Err(e)) => {
                self.search.report_failure(Action::CreateForm, &e.to_string());
                Task::none()
            }

            Message::ResultsFetched { query, outcome } => {
                match outcome {
                    Ok(body) => tracing::info!("Search results for {:?}: {}", query, body),
                    Err(e) => self.search.report_failure(Action::FetchResults, &e.to_string()),
                }
                Task::none()
            }

            Message::ResultRated { result_id, stars } => match self.search.rate(&result_id, stars) {
                Some(request) => self.dispatch(request),
                None => Task::none(),
            },

            Message::Rated { request, outcome } => {
                match outcome {
                    Ok(()) => tracing::info!(
                        "Rated result {} with {} stars",
                        request.result_id,
                        request.rating
                    ),
                    Err(e) => self.search.report_failure(Action::Rate, &e.to_string()),
                }
                Task::none()
            }

            Message::NoticeDismissed => {
                self.search.dismiss_notice();
                Task::none()
            }

            Message::Nav(NavAction::Log(label)) => {
                tracing::info!(target: "portal_search::nav", "{}", label);
                Task::none()
            }

            Message::Nav(NavAction::External(url)) => {
                if let Err(e) = (self.open_link)(url) {
                    tracing::warn!("{}", e);
                }
                Task::none()
            }

            Message::EscapePressed => {
                self.search.hide_history();
                self.search.dismiss_notice();
                Task::none()
            }
        }
    }

    /// Run a controller request on the executor and report back as a message
    fn dispatch(&self, request: Request) -> Task<Message> {
        Task::perform(execute(self.backend.clone(), request), std::convert::identity)
    }

    pub fn view(&self) -> Element<'_, Message> {
        let mut body = column![ui::search_bar::view(&self.search)]
            .spacing(24)
            .max_width(768.0);

        if self.search.history_visible() {
            body = body.push(ui::results::history_panel(&self.search));
        }
        if !self.search.results().is_empty() {
            body = body.push(ui::results::results_list(&self.search));
        }

        let main = scrollable(container(body).padding(48).center_x(Length::Fill))
            .height(Length::Fill);

        container(column![ui::header::view(), main, ui::footer::view()])
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(Background::Color(PortalTheme::BACKGROUND)),
                ..Default::default()
            })
            .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(|key, _modifiers| match key {
            Key::Named(Named::Escape) => Some(Message::EscapePressed),
            _ => None,
        })
    }

    pub fn theme(&self) -> Theme {
        Theme::Light
    }
}

// ============================================================================
// Backend calls
// ============================================================================

/// Perform one controller request against the backend
pub async fn execute(backend: BackendClient, request: Request) -> Message {
    match request {
        Request::Search { seq, query } => {
            let outcome = backend.smart_search(&query).await;
            Message::SearchFinished { seq, query, outcome }
        }
        Request::CreateForm(form) => Message::FormCreated(backend.create_form(form).await),
        Request::FetchResults { query } => {
            let outcome = backend.search_results(&query).await;
            Message::ResultsFetched { query, outcome }
        }
        Request::Rate(request) => {
            let outcome = backend.rate_result(request.clone()).await;
            Message::Rated { request, outcome }
        }
    }
}
