// Featured page - the rewards storefront. Shows every discount against the
// user's balance, gates redemption on the client-side precondition, and keeps
// the displayed balance in sync with redemption receipts.

use async_trait::async_trait;
use tracing::error;

use crate::api::LocalizeApi;
use crate::core::ids::DiscountId;
use crate::models::Discount;
use crate::views::{Notice, ViewController};

pub struct FeaturedPage {
    api: LocalizeApi,
    loading: bool,
    user_points: u32,
    discounts: Vec<Discount>,
    selected: Option<DiscountId>,
}

impl FeaturedPage {
    pub fn new(api: LocalizeApi) -> Self {
        Self {
            api,
            loading: false,
            user_points: 0,
            discounts: Vec::new(),
            selected: None,
        }
    }

    pub fn user_points(&self) -> u32 {
        self.user_points
    }

    pub fn discounts(&self) -> &[Discount] {
        &self.discounts
    }

    pub fn can_redeem(&self, discount: &Discount) -> bool {
        discount.redeemable_with(self.user_points)
    }

    /// Open the detail modal; ignored for an id that is not on the page.
    pub fn select(&mut self, id: DiscountId) {
        if self.discounts.iter().any(|d| d.id == id) {
            self.selected = Some(id);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected_discount(&self) -> Option<&Discount> {
        let id = self.selected?;
        self.discounts.iter().find(|d| d.id == id)
    }

    /// Redeem a discount. The affordability and availability preconditions
    /// are checked here first, so an ineligible attempt never reaches the
    /// facade; a successful receipt updates the displayed balance and the
    /// discount's redemption counter.
    pub async fn redeem(&mut self, id: DiscountId) -> Notice {
        let Some(discount) = self.discounts.iter().find(|d| d.id == id).cloned() else {
            return Notice::Failure("This discount is no longer available.".to_string());
        };

        if self.user_points < discount.points_cost {
            return Notice::Failure("Not enough points to redeem this discount!".to_string());
        }
        if !discount.is_available() {
            return Notice::Failure("This discount is sold out.".to_string());
        }

        match self.api.redeem_discount(id).await {
            Ok(outcome) => {
                self.user_points = outcome.balance;
                if let Some(d) = self.discounts.iter_mut().find(|d| d.id == id) {
                    d.current_redemptions += 1;
                }
                Notice::Success(format!(
                    "Discount redeemed successfully! You saved {}%",
                    discount.discount_percentage
                ))
            }
            Err(err) => {
                error!("Redemption failed: {}", err);
                Notice::Failure("Failed to redeem discount. Please try again.".to_string())
            }
        }
    }
}

#[async_trait]
impl ViewController for FeaturedPage {
    async fn activate(&mut self) {
        self.loading = true;
        match tokio::try_join!(self.api.get_user(), self.api.get_discounts()) {
            Ok((user, discounts)) => {
                self.user_points = user.points;
                self.discounts = discounts;
            }
            Err(err) => {
                error!("Error loading discounts: {}", err);
                self.discounts.clear();
                self.user_points = 0;
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
    use crate::store::FixtureStore;
    use std::sync::Arc;

    async fn page() -> FeaturedPage {
        let api = LocalizeApi::with_latency(
            Arc::new(FixtureStore::new(seed_catalog())),
            LatencyProfile::off(),
        );
        let mut page = FeaturedPage::new(api);
        page.activate().await;
        page
    }

    #[tokio::test]
    async fn test_eligibility_against_balance() {
        let page = page().await;
        let affordable = page
            .discounts()
            .iter()
            .find(|d| d.points_cost <= page.user_points() && d.is_available())
            .unwrap()
            .clone();
        assert!(page.can_redeem(&affordable));

        let pricey = page
            .discounts()
            .iter()
            .find(|d| d.points_cost > page.user_points())
            .unwrap()
            .clone();
        assert!(!page.can_redeem(&pricey));
    }

    #[tokio::test]
    async fn test_redeem_updates_balance_and_counter() {
        let mut page = page().await;
        let discount = page.discounts()[0].clone();
        let before = page.user_points();

        let notice = page.redeem(discount.id).await;
        assert!(notice.is_success());
        assert_eq!(page.user_points(), before - discount.points_cost);

        let refreshed = page
            .discounts()
            .iter()
            .find(|d| d.id == discount.id)
            .unwrap();
        assert_eq!(
            refreshed.current_redemptions,
            discount.current_redemptions + 1
        );
    }

    #[tokio::test]
    async fn test_unaffordable_redeem_never_reaches_facade() {
        let mut page = page().await;
        let pricey = page
            .discounts()
            .iter()
            .find(|d| d.points_cost > page.user_points())
            .unwrap()
            .clone();
        let before = page.user_points();

        let notice = page.redeem(pricey.id).await;
        assert!(!notice.is_success());
        assert_eq!(notice.message(), "Not enough points to redeem this discount!");
        assert_eq!(page.user_points(), before);
    }

    #[tokio::test]
    async fn test_modal_toggle() {
        let mut page = page().await;
        let id = page.discounts()[0].id;
        page.select(id);
        assert_eq!(page.selected_discount().unwrap().id, id);
        page.clear_selection();
        assert!(page.selected_discount().is_none());
    }
}
