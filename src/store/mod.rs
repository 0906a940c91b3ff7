// Fixture store - the injected, in-process data source behind the facade.
// Seed collections never change after construction; everything a write
// operation is allowed to touch lives in the ledger overlay, so reads of the
// catalog need no locking and writes stay atomic under one lock.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;

use crate::core::ids::{BusinessId, DiscountId, EventId, IdSequence, InteractionId};
use crate::error::{AppError, AppResult};
use crate::models::{
    AwardOutcome, Business, Discount, Event, InteractionKind, Product, RedemptionOutcome, User,
    UserInteraction, CHECK_IN_POINTS, DEFAULT_EVENT_POINTS,
};

/// Seed records handed to the store at construction. Businesses arrive with
/// empty product lists; the store joins products on at read time.
#[derive(Debug, Clone)]
pub struct SeedData {
    pub user: User,
    pub businesses: Vec<Business>,
    pub products: Vec<Product>,
    pub events: Vec<Event>,
    pub discounts: Vec<Discount>,
    pub interactions: Vec<UserInteraction>,
}

/// Session-mutable state: the point balance, the per-discount and per-event
/// counters, and the interaction log. Initialized from the seed records.
#[derive(Debug)]
struct Ledger {
    points: u32,
    redemptions: HashMap<DiscountId, u32>,
    attendance: HashMap<EventId, u32>,
    interactions: Vec<UserInteraction>,
}

#[derive(Debug)]
pub struct FixtureStore {
    user: User,
    businesses: Vec<Business>,
    products: Vec<Product>,
    events: Vec<Event>,
    discounts: Vec<Discount>,
    ledger: RwLock<Ledger>,
    interaction_ids: IdSequence,
}

impl FixtureStore {
    pub fn new(seed: SeedData) -> Self {
        let redemptions = seed
            .discounts
            .iter()
            .map(|d| (d.id, d.current_redemptions))
            .collect();
        let attendance = seed
            .events
            .iter()
            .map(|e| (e.id, e.attendee_count))
            .collect();
        let next_interaction_id = seed
            .interactions
            .iter()
            .map(|i| i.id.value())
            .max()
            .unwrap_or(0)
            + 1;

        let ledger = Ledger {
            points: seed.user.points,
            redemptions,
            attendance,
            interactions: seed.interactions,
        };

        Self {
            user: seed.user,
            businesses: seed.businesses,
            products: seed.products,
            events: seed.events,
            discounts: seed.discounts,
            ledger: RwLock::new(ledger),
            interaction_ids: IdSequence::starting_at(next_interaction_id),
        }
    }

    fn with_products(&self, business: &Business) -> Business {
        let mut business = business.clone();
        business.products = self
            .products
            .iter()
            .filter(|p| p.business_id == business.id)
            .cloned()
            .collect();
        business
    }

    fn with_attendance(&self, event: &Event, ledger: &Ledger) -> Event {
        let mut event = event.clone();
        if let Some(&count) = ledger.attendance.get(&event.id) {
            event.attendee_count = count;
        }
        event
    }

    fn with_redemptions(&self, discount: &Discount, ledger: &Ledger) -> Discount {
        let mut discount = discount.clone();
        if let Some(&count) = ledger.redemptions.get(&discount.id) {
            discount.current_redemptions = count;
        }
        discount
    }

    pub fn user(&self) -> User {
        let ledger = self.ledger.read().expect("ledger lock poisoned");
        let mut user = self.user.clone();
        user.points = ledger.points;
        user
    }

    pub fn businesses(&self) -> Vec<Business> {
        self.businesses
            .iter()
            .map(|b| self.with_products(b))
            .collect()
    }

    pub fn business(&self, id: BusinessId) -> Option<Business> {
        self.businesses
            .iter()
            .find(|b| b.id == id)
            .map(|b| self.with_products(b))
    }

    pub fn events(&self) -> Vec<Event> {
        let ledger = self.ledger.read().expect("ledger lock poisoned");
        self.events
            .iter()
            .map(|e| self.with_attendance(e, &ledger))
            .collect()
    }

    pub fn event(&self, id: EventId) -> Option<Event> {
        let ledger = self.ledger.read().expect("ledger lock poisoned");
        self.events
            .iter()
            .find(|e| e.id == id)
            .map(|e| self.with_attendance(e, &ledger))
    }

    pub fn discounts(&self) -> Vec<Discount> {
        let ledger = self.ledger.read().expect("ledger lock poisoned");
        self.discounts
            .iter()
            .map(|d| self.with_redemptions(d, &ledger))
            .collect()
    }

    pub fn discount(&self, id: DiscountId) -> Option<Discount> {
        let ledger = self.ledger.read().expect("ledger lock poisoned");
        self.discounts
            .iter()
            .find(|d| d.id == id)
            .map(|d| self.with_redemptions(d, &ledger))
    }

    /// The current user's interaction history, newest first.
    pub fn interactions(&self) -> Vec<UserInteraction> {
        let ledger = self.ledger.read().expect("ledger lock poisoned");
        let mut interactions = ledger.interactions.clone();
        interactions.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.id.cmp(&a.id)));
        interactions
    }

    /// Award the flat check-in bonus and log the visit. The business must
    /// exist; the catalog itself is untouched.
    pub fn record_check_in(&self, business_id: BusinessId) -> AppResult<AwardOutcome> {
        if !self.businesses.iter().any(|b| b.id == business_id) {
            return Err(AppError::NotFound(format!(
                "business {} not found",
                business_id
            )));
        }

        let mut ledger = self.ledger.write().expect("ledger lock poisoned");
        ledger.points += CHECK_IN_POINTS;
        let balance = ledger.points;
        let interaction = self.interaction(
            InteractionKind::CheckIn,
            Some(business_id),
            None,
            None,
            CHECK_IN_POINTS,
            0,
        );
        ledger.interactions.push(interaction);

        Ok(AwardOutcome {
            points_awarded: CHECK_IN_POINTS,
            balance,
        })
    }

    /// Record an event attendance. A known event pays its own reward and
    /// counts against capacity; an unknown id still pays the fallback reward
    /// without touching any counter, preserving the facade's original
    /// never-fails-on-missing-event contract.
    pub fn record_attendance(&self, event_id: EventId) -> AppResult<AwardOutcome> {
        let mut ledger = self.ledger.write().expect("ledger lock poisoned");

        let awarded = match self.events.iter().find(|e| e.id == event_id) {
            Some(event) => {
                let attending = ledger
                    .attendance
                    .get(&event_id)
                    .copied()
                    .unwrap_or(event.attendee_count);
                if let Some(max) = event.max_attendees {
                    if attending >= max {
                        return Err(AppError::SoldOut(format!(
                            "event '{}' is at capacity",
                            event.title
                        )));
                    }
                }
                ledger.attendance.insert(event_id, attending + 1);
                event.points_reward
            }
            None => DEFAULT_EVENT_POINTS,
        };

        ledger.points += awarded;
        let balance = ledger.points;
        let interaction = self.interaction(
            InteractionKind::EventAttendance,
            None,
            Some(event_id),
            None,
            awarded,
            0,
        );
        ledger.interactions.push(interaction);

        Ok(AwardOutcome {
            points_awarded: awarded,
            balance,
        })
    }

    /// Redeem a discount: debit the balance and bump the redemption counter in
    /// one write-lock scope, so concurrent attempts can never overspend the
    /// balance or overshoot the cap.
    pub fn record_redemption(&self, discount_id: DiscountId) -> AppResult<RedemptionOutcome> {
        let discount = self
            .discounts
            .iter()
            .find(|d| d.id == discount_id)
            .ok_or_else(|| AppError::NotFound(format!("discount {} not found", discount_id)))?;

        let mut ledger = self.ledger.write().expect("ledger lock poisoned");

        if ledger.points < discount.points_cost {
            return Err(AppError::InsufficientPoints(format!(
                "'{}' costs {} points, balance is {}",
                discount.title, discount.points_cost, ledger.points
            )));
        }

        let redeemed = ledger
            .redemptions
            .get(&discount_id)
            .copied()
            .unwrap_or(discount.current_redemptions);
        if let Some(max) = discount.max_redemptions {
            if redeemed >= max {
                return Err(AppError::SoldOut(format!(
                    "'{}' has no redemptions left",
                    discount.title
                )));
            }
        }

        ledger.points -= discount.points_cost;
        ledger.redemptions.insert(discount_id, redeemed + 1);
        let balance = ledger.points;
        let interaction = self.interaction(
            InteractionKind::DiscountRedemption,
            Some(discount.business_id),
            None,
            Some(discount_id),
            0,
            discount.points_cost,
        );
        ledger.interactions.push(interaction);

        Ok(RedemptionOutcome {
            success: true,
            points_spent: discount.points_cost,
            balance,
        })
    }

    #[allow(clippy::too_many_arguments)]
    fn interaction(
        &self,
        kind: InteractionKind,
        business_id: Option<BusinessId>,
        event_id: Option<EventId>,
        discount_id: Option<DiscountId>,
        points_earned: u32,
        points_spent: u32,
    ) -> UserInteraction {
        UserInteraction {
            id: InteractionId::new(self.interaction_ids.next_id()),
            user_id: self.user.id,
            kind,
            business_id,
            event_id,
            discount_id,
            points_earned,
            points_spent,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::seed_catalog;

    fn store() -> FixtureStore {
        FixtureStore::new(seed_catalog())
    }

    #[test]
    fn test_products_partitioned_by_business() {
        let store = store();
        let businesses = store.businesses();

        let roastery = businesses.iter().find(|b| b.name == "The Local Roastery").unwrap();
        assert_eq!(roastery.products.len(), 2);
        assert!(roastery.products.iter().all(|p| p.business_id == roastery.id));

        let yoga = businesses.iter().find(|b| b.name == "Harbor Yoga Studio").unwrap();
        assert!(yoga.products.is_empty());
    }

    #[test]
    fn test_lookup_miss_is_none_not_error() {
        let store = store();
        assert!(store.business(BusinessId::new(999)).is_none());
        assert!(store.event(EventId::new(999)).is_none());
        assert!(store.discount(DiscountId::new(999)).is_none());
    }

    #[test]
    fn test_check_in_credits_and_logs() {
        let store = store();
        let before = store.user().points;

        let outcome = store.record_check_in(BusinessId::new(1)).unwrap();
        assert_eq!(outcome.points_awarded, CHECK_IN_POINTS);
        assert_eq!(outcome.balance, before + CHECK_IN_POINTS);
        assert_eq!(store.user().points, outcome.balance);

        let latest = &store.interactions()[0];
        assert_eq!(latest.kind, InteractionKind::CheckIn);
        assert_eq!(latest.business_id, Some(BusinessId::new(1)));
        assert_eq!(latest.points_earned, CHECK_IN_POINTS);
    }

    #[test]
    fn test_check_in_unknown_business_is_not_found() {
        let store = store();
        let before = store.user().points;
        assert!(matches!(
            store.record_check_in(BusinessId::new(999)),
            Err(AppError::NotFound(_))
        ));
        assert_eq!(store.user().points, before);
    }

    #[test]
    fn test_attendance_pays_event_reward_and_counts() {
        let store = store();
        let event_id = EventId::new(1);
        let event = store.event(event_id).unwrap();
        let before = store.user().points;

        let outcome = store.record_attendance(event_id).unwrap();
        assert_eq!(outcome.points_awarded, event.points_reward);
        assert_eq!(outcome.balance, before + event.points_reward);
        assert_eq!(
            store.event(event_id).unwrap().attendee_count,
            event.attendee_count + 1
        );
    }

    #[test]
    fn test_attendance_on_full_event_is_sold_out() {
        let store = store();
        let full = store
            .events()
            .into_iter()
            .find(|e| !e.has_capacity())
            .expect("seed includes a full event");
        let before = store.user().points;

        assert!(matches!(
            store.record_attendance(full.id),
            Err(AppError::SoldOut(_))
        ));
        assert_eq!(store.user().points, before);
        assert_eq!(
            store.event(full.id).unwrap().attendee_count,
            full.attendee_count
        );
    }

    #[test]
    fn test_attendance_on_unknown_event_pays_default() {
        let store = store();
        let before = store.user().points;

        let outcome = store.record_attendance(EventId::new(999)).unwrap();
        assert_eq!(outcome.points_awarded, DEFAULT_EVENT_POINTS);
        assert_eq!(store.user().points, before + DEFAULT_EVENT_POINTS);
    }

    #[test]
    fn test_redemption_moves_balance_and_counter_together() {
        let store = store();
        let discount_id = DiscountId::new(1);
        let discount = store.discount(discount_id).unwrap();
        let before = store.user().points;

        let outcome = store.record_redemption(discount_id).unwrap();
        assert!(outcome.success);
        assert_eq!(outcome.points_spent, discount.points_cost);
        assert_eq!(outcome.balance, before - discount.points_cost);
        assert_eq!(
            store.discount(discount_id).unwrap().current_redemptions,
            discount.current_redemptions + 1
        );

        let latest = &store.interactions()[0];
        assert_eq!(latest.kind, InteractionKind::DiscountRedemption);
        assert_eq!(latest.discount_id, Some(discount_id));
        assert_eq!(latest.points_spent, discount.points_cost);
    }

    #[test]
    fn test_redemption_insufficient_points_changes_nothing() {
        let store = store();
        let pricey = store
            .discounts()
            .into_iter()
            .find(|d| d.points_cost > store.user().points)
            .expect("seed includes an unaffordable discount");
        let before = store.user().points;

        assert!(matches!(
            store.record_redemption(pricey.id),
            Err(AppError::InsufficientPoints(_))
        ));
        assert_eq!(store.user().points, before);
        assert_eq!(
            store.discount(pricey.id).unwrap().current_redemptions,
            pricey.current_redemptions
        );
    }

    #[test]
    fn test_redemption_past_cap_is_sold_out() {
        let store = store();
        // Drain an affordable capped discount to its limit, then go one past.
        let capped = store
            .discounts()
            .into_iter()
            .find(|d| d.max_redemptions.is_some() && d.points_cost <= 100)
            .expect("seed includes a cheap capped discount");
        let mut left = capped.remaining_redemptions().unwrap();
        while left > 0 {
            store.record_redemption(capped.id).unwrap();
            left -= 1;
        }

        let before = store.user().points;
        assert!(matches!(
            store.record_redemption(capped.id),
            Err(AppError::SoldOut(_))
        ));
        assert_eq!(store.user().points, before);
    }

    #[test]
    fn test_interactions_newest_first_and_growing() {
        let store = store();
        let seeded = store.interactions();
        assert!(seeded.len() >= 2);
        assert!(seeded
            .windows(2)
            .all(|w| w[0].timestamp >= w[1].timestamp));

        store.record_check_in(BusinessId::new(2)).unwrap();
        let after = store.interactions();
        assert_eq!(after.len(), seeded.len() + 1);
        assert_eq!(after[0].kind, InteractionKind::CheckIn);
    }
}
