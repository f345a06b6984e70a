//! Board state - the single owned container driving the session display.
//!
//! The lookup lifecycle is split into two synchronous transitions
//! ([`Board::begin_search`] and [`Board::complete_search`]) with an async
//! orchestrator ([`Board::search`]) on top. Every mutation goes through
//! `&mut self`, so a host that wants concurrent lookups has to funnel
//! completions through one owner and gets them applied in resolution order.

use crate::model::{CityWeather, same_city};
use crate::provider::{LookupError, WeatherLookup};

/// Message shown for any failed lookup, regardless of cause.
pub const LOOKUP_FAILED_MSG: &str = "Error finding the city. Please try again.";

/// In-memory state of one board session: the card list (most recent search
/// first), the pending query text, and the lookup lifecycle flags.
#[derive(Debug, Default)]
pub struct Board {
    entries: Vec<CityWeather>,
    query: String,
    loading: bool,
    error: Option<String>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cards in display order, most recent search first.
    pub fn entries(&self) -> &[CityWeather] {
        &self.entries
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// True strictly between [`Board::begin_search`] and
    /// [`Board::complete_search`].
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Set only immediately after a failed lookup, cleared when the next
    /// one starts.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Update the pending query text (the input-field binding).
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Start a lookup: trim the query, flip to loading, clear any previous
    /// error, and hand back the trimmed query for the caller to resolve.
    ///
    /// An empty or whitespace-only query returns `None` and leaves every
    /// field untouched, including an error from an earlier attempt.
    pub fn begin_search(&mut self) -> Option<String> {
        let trimmed = self.query.trim();
        if trimmed.is_empty() {
            return None;
        }

        let query = trimmed.to_string();
        self.loading = true;
        self.error = None;
        Some(query)
    }

    /// Apply the outcome of a lookup started with [`Board::begin_search`].
    ///
    /// Success prepends the city unless one with the same name (ignoring
    /// case) is already on the board, and clears the query either way.
    /// Failure sets the generic message and leaves both the card list and
    /// the query as they were. Loading ends on every path.
    pub fn complete_search(&mut self, outcome: Result<CityWeather, LookupError>) {
        match outcome {
            Ok(city) => {
                let duplicate = self
                    .entries
                    .iter()
                    .any(|entry| same_city(&entry.location.name, &city.location.name));
                if !duplicate {
                    self.entries.insert(0, city);
                }
                self.query.clear();
            }
            Err(_) => {
                self.error = Some(LOOKUP_FAILED_MSG.to_string());
            }
        }
        self.loading = false;
    }

    /// Run one full lookup cycle for the pending query against the given
    /// provider. A blank query never reaches the provider.
    pub async fn search(&mut self, provider: &dyn WeatherLookup) {
        let Some(query) = self.begin_search() else {
            return;
        };
        let outcome = provider.current(&query).await;
        self.complete_search(outcome);
    }

    /// Drop every card whose city name matches, ignoring case. Unknown
    /// names are a no-op.
    pub fn remove(&mut self, name: &str) {
        self.entries
            .retain(|entry| !same_city(&entry.location.name, name));
    }
}
