use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::ids::{BusinessId, DiscountId, EventId, InteractionId, ProductId, UserId};

/// Points awarded for checking in at a business, matching the flat bonus the
/// app advertises ("Check In (+25 points)").
pub const CHECK_IN_POINTS: u32 = 25;

/// Fallback reward when an attendance is recorded against an unknown event.
pub const DEFAULT_EVENT_POINTS: u32 = 25;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub points: u32,
    pub avatar: Option<String>,
    pub joined_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Business {
    pub id: BusinessId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub address: String,
    pub coordinates: Coordinates,
    pub rating: f64,
    pub review_count: u32,
    pub image: String,
    /// Populated by the store's read-time join; seed records carry this empty.
    pub products: Vec<Product>,
    pub is_verified: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub business_id: BusinessId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    pub category: String,
    pub in_stock: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub business_id: Option<BusinessId>,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub location: String,
    pub coordinates: Coordinates,
    pub image: String,
    pub attendee_count: u32,
    pub max_attendees: Option<u32>,
    pub category: String,
    pub points_reward: u32,
}

impl Event {
    /// Capacity guard: an event without `max_attendees` never fills up.
    pub fn has_capacity(&self) -> bool {
        self.max_attendees
            .map_or(true, |max| self.attendee_count < max)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    pub id: DiscountId,
    pub business_id: BusinessId,
    pub title: String,
    pub description: String,
    pub discount_percentage: u8,
    pub points_cost: u32,
    pub valid_until: DateTime<Utc>,
    pub max_redemptions: Option<u32>,
    pub current_redemptions: u32,
    pub image: String,
    pub terms: String,
}

impl Discount {
    /// Redemptions left before the cap, `None` when unlimited.
    pub fn remaining_redemptions(&self) -> Option<u32> {
        self.max_redemptions
            .map(|max| max.saturating_sub(self.current_redemptions))
    }

    pub fn is_available(&self) -> bool {
        self.max_redemptions
            .map_or(true, |max| self.current_redemptions < max)
    }

    /// The redemption precondition: affordable and not sold out. Expiry is
    /// displayed to the user but deliberately not part of eligibility.
    pub fn redeemable_with(&self, points: u32) -> bool {
        points >= self.points_cost && self.is_available()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InteractionKind {
    Visit,
    CheckIn,
    Review,
    EventAttendance,
    DiscountRedemption,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInteraction {
    pub id: InteractionId,
    pub user_id: UserId,
    #[serde(rename = "type")]
    pub kind: InteractionKind,
    pub business_id: Option<BusinessId>,
    pub event_id: Option<EventId>,
    pub discount_id: Option<DiscountId>,
    pub points_earned: u32,
    pub points_spent: u32,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    Business,
    Event,
}

/// Flattened pin for the map summary view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapLocation {
    pub name: String,
    pub kind: LocationKind,
    pub coordinates: Coordinates,
    pub address: String,
}

impl MapLocation {
    pub fn from_business(business: &Business) -> Self {
        Self {
            name: business.name.clone(),
            kind: LocationKind::Business,
            coordinates: business.coordinates,
            address: business.address.clone(),
        }
    }

    pub fn from_event(event: &Event) -> Self {
        Self {
            name: event.title.clone(),
            kind: LocationKind::Event,
            coordinates: event.coordinates,
            address: event.location.clone(),
        }
    }
}

// Outcome records returned by the write operations (the response shapes of
// the facade's POST surface).

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AwardOutcome {
    pub points_awarded: u32,
    pub balance: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RedemptionOutcome {
    pub success: bool,
    pub points_spent: u32,
    pub balance: u32,
}
