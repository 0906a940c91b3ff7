// Engage page - the business directory. Free-text search and a category
// dropdown narrow the grid; selecting a business swaps to its detail view,
// where the user can check in for points.

use async_trait::async_trait;
use tracing::error;

use crate::api::LocalizeApi;
use crate::core::ids::BusinessId;
use crate::models::Business;
use crate::search::{self, TextSearch, CATEGORY_ALL};
use crate::views::{Notice, ViewController};

pub struct EngagePage {
    api: LocalizeApi,
    loading: bool,
    businesses: Vec<Business>,
    search_query: String,
    selected_category: String,
    selected: Option<BusinessId>,
}

impl EngagePage {
    pub fn new(api: LocalizeApi) -> Self {
        Self {
            api,
            loading: false,
            businesses: Vec::new(),
            search_query: String::new(),
            selected_category: CATEGORY_ALL.to_string(),
            selected: None,
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.selected_category = category.into();
    }

    /// Options for the category dropdown: `"all"` plus the distinct business
    /// categories in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        search::category_list(&self.businesses)
    }

    /// The grid: text match over name, description and category, AND the
    /// selected category (exact, `"all"` passes everything).
    pub fn filtered_businesses(&self) -> Vec<&Business> {
        self.businesses
            .iter()
            .filter(|b| {
                search::matches(&b.searchable_text(), &self.search_query)
                    && search::category_matches(&b.category, &self.selected_category)
            })
            .collect()
    }

    /// Drill into a business; ignored for an id that is not on the page.
    pub fn select(&mut self, id: BusinessId) {
        if self.businesses.iter().any(|b| b.id == id) {
            self.selected = Some(id);
        }
    }

    /// Back to the grid.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected_business(&self) -> Option<&Business> {
        let id = self.selected?;
        self.businesses.iter().find(|b| b.id == id)
    }

    /// Check in at a business and surface the acknowledgment.
    pub async fn check_in(&self, id: BusinessId) -> Notice {
        match self.api.check_in_to_business(id).await {
            Ok(outcome) => Notice::Success(format!(
                "Checked in! +{} points",
                outcome.points_awarded
            )),
            Err(err) => {
                error!("Check-in failed: {}", err);
                Notice::Failure("Failed to check in. Please try again.".to_string())
            }
        }
    }
}

#[async_trait]
impl ViewController for EngagePage {
    async fn activate(&mut self) {
        self.loading = true;
        match self.api.get_businesses().await {
            Ok(businesses) => self.businesses = businesses,
            Err(err) => {
                error!("Error loading businesses: {}", err);
                self.businesses.clear();
            }
        }
        self.loading = false;
    }

    fn is_loading(&self) -> bool {
        self.loading
    }
}
