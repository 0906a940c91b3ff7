// LocalizeApi - the data-access facade. Sole boundary between callers and the
// fixture store; every operation awaits a simulated backend round trip so
// callers behave exactly as they would against a real service. Lookup misses
// are Ok(None), never an error.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;
use tracing::info;

use crate::config::LatencyConfig;
use crate::core::ids::{BusinessId, DiscountId, EventId};
use crate::error::AppResult;
use crate::models::{
    AwardOutcome, Business, Discount, Event, RedemptionOutcome, User, UserInteraction,
};
use crate::search;
use crate::store::FixtureStore;

/// Per-operation simulated round-trip times, mirroring the original service:
/// single-record fetches 300ms, list fetches 400ms, the joined business list
/// and all writes 500ms.
#[derive(Debug, Clone, Copy)]
pub struct LatencyProfile {
    pub fetch_one: Duration,
    pub fetch_list: Duration,
    pub fetch_joined: Duration,
    pub mutate: Duration,
}

impl LatencyProfile {
    pub fn simulated() -> Self {
        Self {
            fetch_one: Duration::from_millis(300),
            fetch_list: Duration::from_millis(400),
            fetch_joined: Duration::from_millis(500),
            mutate: Duration::from_millis(500),
        }
    }

    /// No sleeping at all; used by tests.
    pub fn off() -> Self {
        Self {
            fetch_one: Duration::ZERO,
            fetch_list: Duration::ZERO,
            fetch_joined: Duration::ZERO,
            mutate: Duration::ZERO,
        }
    }

    pub fn from_config(config: &LatencyConfig) -> Self {
        if config.enabled {
            Self::simulated()
        } else {
            Self::off()
        }
    }
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self::simulated()
    }
}

#[derive(Clone)]
pub struct LocalizeApi {
    store: Arc<FixtureStore>,
    latency: LatencyProfile,
}

impl LocalizeApi {
    pub fn new(store: Arc<FixtureStore>) -> Self {
        Self::with_latency(store, LatencyProfile::default())
    }

    pub fn with_latency(store: Arc<FixtureStore>, latency: LatencyProfile) -> Self {
        Self { store, latency }
    }

    async fn round_trip(&self, delay: Duration) {
        if !delay.is_zero() {
            sleep(delay).await;
        }
    }

    pub async fn get_user(&self) -> AppResult<User> {
        self.round_trip(self.latency.fetch_one).await;
        Ok(self.store.user())
    }

    /// All businesses with their owned product lists joined on.
    pub async fn get_businesses(&self) -> AppResult<Vec<Business>> {
        self.round_trip(self.latency.fetch_joined).await;
        Ok(self.store.businesses())
    }

    pub async fn get_business(&self, id: BusinessId) -> AppResult<Option<Business>> {
        self.round_trip(self.latency.fetch_one).await;
        Ok(self.store.business(id))
    }

    pub async fn get_events(&self) -> AppResult<Vec<Event>> {
        self.round_trip(self.latency.fetch_list).await;
        Ok(self.store.events())
    }

    pub async fn get_event(&self, id: EventId) -> AppResult<Option<Event>> {
        self.round_trip(self.latency.fetch_one).await;
        Ok(self.store.event(id))
    }

    /// Every discount, unfiltered; eligibility is the caller's concern.
    pub async fn get_discounts(&self) -> AppResult<Vec<Discount>> {
        self.round_trip(self.latency.fetch_list).await;
        Ok(self.store.discounts())
    }

    /// The current user's interaction history, newest first.
    pub async fn get_user_interactions(&self) -> AppResult<Vec<UserInteraction>> {
        self.round_trip(self.latency.fetch_list).await;
        Ok(self.store.interactions())
    }

    /// Convenience filter re-derived from `get_businesses`: case-insensitive
    /// substring over name, description and category.
    pub async fn search_businesses(&self, query: &str) -> AppResult<Vec<Business>> {
        self.round_trip(self.latency.fetch_one).await;
        let businesses = self.get_businesses().await?;
        Ok(search::filter_by_query(&businesses, query))
    }

    pub async fn businesses_by_category(&self, category: &str) -> AppResult<Vec<Business>> {
        self.round_trip(self.latency.fetch_one).await;
        let businesses = self.get_businesses().await?;
        Ok(search::filter_by_category(&businesses, category))
    }

    pub async fn check_in_to_business(&self, id: BusinessId) -> AppResult<AwardOutcome> {
        self.round_trip(self.latency.mutate).await;
        let outcome = self.store.record_check_in(id)?;
        info!(business_id = %id, points = outcome.points_awarded, "recorded check-in");
        Ok(outcome)
    }

    pub async fn attend_event(&self, id: EventId) -> AppResult<AwardOutcome> {
        self.round_trip(self.latency.mutate).await;
        let outcome = self.store.record_attendance(id)?;
        info!(event_id = %id, points = outcome.points_awarded, "recorded event attendance");
        Ok(outcome)
    }

    pub async fn redeem_discount(&self, id: DiscountId) -> AppResult<RedemptionOutcome> {
        self.round_trip(self.latency.mutate).await;
        let outcome = self.store.record_redemption(id)?;
        info!(
            discount_id = %id,
            points_spent = outcome.points_spent,
            "recorded discount redemption"
        );
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::seed_catalog;

    fn api() -> LocalizeApi {
        LocalizeApi::with_latency(
            Arc::new(FixtureStore::new(seed_catalog())),
            LatencyProfile::off(),
        )
    }

    #[tokio::test]
    async fn test_reads_are_idempotent() {
        let api = api();
        assert_eq!(
            api.get_businesses().await.unwrap(),
            api.get_businesses().await.unwrap()
        );
        assert_eq!(api.get_events().await.unwrap(), api.get_events().await.unwrap());
        assert_eq!(
            api.get_discounts().await.unwrap(),
            api.get_discounts().await.unwrap()
        );
        assert_eq!(api.get_user().await.unwrap(), api.get_user().await.unwrap());
    }

    #[tokio::test]
    async fn test_lookup_miss_is_ok_none() {
        let api = api();
        assert!(api.get_business(BusinessId::new(404)).await.unwrap().is_none());
        assert!(api.get_event(EventId::new(404)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_lookup_hit_matches_list_entry() {
        let api = api();
        let listed = api.get_businesses().await.unwrap();
        let fetched = api.get_business(listed[0].id).await.unwrap().unwrap();
        assert_eq!(fetched, listed[0]);
    }

    #[tokio::test]
    async fn test_search_matches_pure_filter() {
        let api = api();
        let all = api.get_businesses().await.unwrap();
        assert_eq!(
            api.search_businesses("coffee").await.unwrap(),
            search::filter_by_query(&all, "coffee")
        );
        assert_eq!(api.search_businesses("").await.unwrap(), all);
    }

    #[tokio::test]
    async fn test_category_filter_with_wildcard() {
        let api = api();
        let bakeries = api.businesses_by_category("bakery").await.unwrap();
        assert!(bakeries.iter().all(|b| b.category == "bakery"));
        assert!(!bakeries.is_empty());

        let all = api.businesses_by_category("all").await.unwrap();
        assert_eq!(all, api.get_businesses().await.unwrap());
    }

    #[tokio::test]
    async fn test_writes_are_visible_to_subsequent_reads() {
        let api = api();
        let before = api.get_user().await.unwrap().points;

        let outcome = api.check_in_to_business(BusinessId::new(1)).await.unwrap();
        assert_eq!(api.get_user().await.unwrap().points, outcome.balance);
        assert_eq!(outcome.balance, before + outcome.points_awarded);

        let interactions = api.get_user_interactions().await.unwrap();
        assert_eq!(interactions[0].business_id, Some(BusinessId::new(1)));
    }

    #[tokio::test]
    async fn test_redeem_receipt_and_counter() {
        let api = api();
        let discount = api.get_discounts().await.unwrap()[0].clone();
        let outcome = api.redeem_discount(discount.id).await.unwrap();
        assert!(outcome.success);
        assert_eq!(outcome.points_spent, discount.points_cost);

        let after = api
            .get_discounts()
            .await
            .unwrap()
            .into_iter()
            .find(|d| d.id == discount.id)
            .unwrap();
        assert_eq!(after.current_redemptions, discount.current_redemptions + 1);
    }
}
