// Explore page - events and businesses side by side, with a shared free-text
// query and a list/map mode toggle. The map mode is a summary of the same
// filtered collections, not a real map.

use async_trait::async_trait;
use tracing::error;

use crate::api::LocalizeApi;
use crate::models::{Business, Event, MapLocation};
use crate::search;
use crate::views::ViewController;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    List,
    Map,
}

pub struct ExplorePage {
    api: LocalizeApi,
    loading: bool,
    view_mode: ViewMode,
    search_query: String,
    events: Vec<Event>,
    businesses: Vec<Business>,
}

impl ExplorePage {
    pub fn new(api: LocalizeApi) -> Self {
        Self {
            api,
            loading: false,
            view_mode: ViewMode::default(),
            search_query: String::new(),
            events: Vec::new(),
            businesses: Vec::new(),
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Events whose title or description contains the query.
    pub fn filtered_events(&self) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| search::matches(&[&e.title, &e.description], &self.search_query))
            .collect()
    }

    /// Businesses whose name or description contains the query. The category
    /// field is not searched here; that is the Engage page's wider match.
    pub fn filtered_businesses(&self) -> Vec<&Business> {
        self.businesses
            .iter()
            .filter(|b| search::matches(&[&b.name, &b.description], &self.search_query))
            .collect()
    }

    /// Pins for the map summary: every filtered event and business.
    pub fn map_locations(&self) -> Vec<MapLocation> {
        self.filtered_events()
            .into_iter()
            .map(MapLocation::from_event)
            .chain(
                self.filtered_businesses()
                    .into_iter()
                    .map(MapLocation::from_business),
            )
            .collect()
    }
}

#[async_trait]
impl ViewController for ExplorePage {
    async fn activate(&mut self) {
        self.loading = true;
        // Events and businesses are independent; fetch them concurrently and
        // join all-or-nothing so a partial page is never shown.
        match tokio::try_join!(self.api.get_events(), self.api.get_businesses()) {
            Ok((events, businesses)) => {
                self.events = events;
                self.businesses = businesses;
            }
            Err(err) => {
                error!("Error loading explore data: {}", err);
                self.events.clear();
                self.businesses.clear();
            }
        }
        self.loading = false;
    }

    fn is_loading(&self) -> bool {
        self.loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::LatencyProfile;
    use crate::fixtures::seed_catalog;
    use crate::models::LocationKind;
    use crate::store::FixtureStore;
    use std::sync::Arc;

    async fn page() -> ExplorePage {
        let api = LocalizeApi::with_latency(
            Arc::new(FixtureStore::new(seed_catalog())),
            LatencyProfile::off(),
        );
        let mut page = ExplorePage::new(api);
        page.activate().await;
        page
    }

    #[tokio::test]
    async fn test_activation_loads_both_collections() {
        let page = page().await;
        assert!(!page.is_loading());
        assert!(!page.filtered_events().is_empty());
        assert!(!page.filtered_businesses().is_empty());
    }

    #[tokio::test]
    async fn test_query_filters_both_collections() {
        let mut page = page().await;
        page.set_query("coffee");

        let events = page.filtered_events();
        assert!(events.iter().all(|e| e.title.to_lowercase().contains("coffee")
            || e.description.to_lowercase().contains("coffee")));
        assert!(!events.is_empty());

        // "Riverside Outfitters" matches on name only in the Engage page's
        // wider search; here the category is not considered.
        page.set_query("outdoors");
        assert!(page.filtered_businesses().is_empty());
    }

    #[tokio::test]
    async fn test_empty_query_shows_everything() {
        let mut page = page().await;
        let all_events = page.filtered_events().len();
        page.set_query("yoga");
        assert!(page.filtered_events().len() < all_events);
        page.set_query("");
        assert_eq!(page.filtered_events().len(), all_events);
    }

    #[tokio::test]
    async fn test_map_summary_reflects_filters() {
        let mut page = page().await;
        page.set_view_mode(ViewMode::Map);
        page.set_query("roastery");

        let pins = page.map_locations();
        assert!(!pins.is_empty());
        assert!(pins
            .iter()
            .any(|p| p.kind == LocationKind::Business && p.name == "The Local Roastery"));
    }
}
