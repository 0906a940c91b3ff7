// Seed catalog - the canonical demo data set. One current user, a handful of
// neighborhood businesses with their products, upcoming events, and the
// featured discounts. Handed to FixtureStore::new at startup.

use chrono::{DateTime, TimeZone, Utc};

use crate::core::ids::{BusinessId, DiscountId, EventId, InteractionId, ProductId, UserId};
use crate::models::{
    Business, Coordinates, Discount, Event, InteractionKind, Product, User, UserInteraction,
};
use crate::store::SeedData;

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("fixture timestamps are valid")
}

pub fn seed_catalog() -> SeedData {
    let user = User {
        id: UserId::new(1),
        name: "Maya Chen".to_string(),
        email: "maya.chen@example.com".to_string(),
        points: 1250,
        avatar: None,
        joined_date: at(2025, 11, 8, 9, 0),
    };

    let businesses = vec![
        Business {
            id: BusinessId::new(1),
            name: "The Local Roastery".to_string(),
            description: "Small-batch coffee roasted in the neighborhood every morning."
                .to_string(),
            category: "coffee".to_string(),
            address: "14 Alder St".to_string(),
            coordinates: Coordinates {
                lat: 45.5231,
                lng: -122.6765,
            },
            rating: 4.8,
            review_count: 214,
            image: "/images/businesses/local-roastery.jpg".to_string(),
            products: Vec::new(),
            is_verified: true,
        },
        Business {
            id: BusinessId::new(2),
            name: "Paper Lantern Books".to_string(),
            description: "Independent bookshop with a reading nook and weekly author nights."
                .to_string(),
            category: "books".to_string(),
            address: "220 Hawthorne Ave".to_string(),
            coordinates: Coordinates {
                lat: 45.5122,
                lng: -122.6532,
            },
            rating: 4.6,
            review_count: 128,
            image: "/images/businesses/paper-lantern.jpg".to_string(),
            products: Vec::new(),
            is_verified: true,
        },
        Business {
            id: BusinessId::new(3),
            name: "Golden Crust Bakery".to_string(),
            description: "Family bakery known for sourdough and seasonal fruit tarts."
                .to_string(),
            category: "bakery".to_string(),
            address: "87 Market St".to_string(),
            coordinates: Coordinates {
                lat: 45.5189,
                lng: -122.6704,
            },
            rating: 4.7,
            review_count: 342,
            image: "/images/businesses/golden-crust.jpg".to_string(),
            products: Vec::new(),
            is_verified: true,
        },
        Business {
            id: BusinessId::new(4),
            name: "Riverside Outfitters".to_string(),
            description: "Gear rentals and trail advice for the river paths.".to_string(),
            category: "outdoors".to_string(),
            address: "5 Esplanade Way".to_string(),
            coordinates: Coordinates {
                lat: 45.5266,
                lng: -122.6691,
            },
            rating: 4.4,
            review_count: 76,
            image: "/images/businesses/riverside-outfitters.jpg".to_string(),
            products: Vec::new(),
            is_verified: true,
        },
        Business {
            id: BusinessId::new(5),
            name: "Harbor Yoga Studio".to_string(),
            description: "Sunrise flows and community classes on the pier.".to_string(),
            category: "fitness".to_string(),
            address: "31 Pier Rd".to_string(),
            coordinates: Coordinates {
                lat: 45.5301,
                lng: -122.6822,
            },
            rating: 4.9,
            review_count: 58,
            image: "/images/businesses/harbor-yoga.jpg".to_string(),
            products: Vec::new(),
            is_verified: false,
        },
    ];

    let products = vec![
        Product {
            id: ProductId::new(1),
            business_id: BusinessId::new(1),
            name: "Single Origin Pour Over".to_string(),
            description: "Rotating single origin, brewed to order.".to_string(),
            price: 4.50,
            image: "/images/products/pour-over.jpg".to_string(),
            category: "coffee".to_string(),
            in_stock: true,
        },
        Product {
            id: ProductId::new(2),
            business_id: BusinessId::new(1),
            name: "House Blend, 12oz Bag".to_string(),
            description: "Chocolate and stone fruit notes, roasted weekly.".to_string(),
            price: 14.00,
            image: "/images/products/house-blend.jpg".to_string(),
            category: "coffee".to_string(),
            in_stock: true,
        },
        Product {
            id: ProductId::new(3),
            business_id: BusinessId::new(2),
            name: "Staff Pick Novel".to_string(),
            description: "This month's staff favorite, wrapped with a handwritten note."
                .to_string(),
            price: 18.00,
            image: "/images/products/staff-pick.jpg".to_string(),
            category: "books".to_string(),
            in_stock: true,
        },
        Product {
            id: ProductId::new(4),
            business_id: BusinessId::new(3),
            name: "Sourdough Loaf".to_string(),
            description: "Naturally leavened, baked every morning.".to_string(),
            price: 7.00,
            image: "/images/products/sourdough.jpg".to_string(),
            category: "bakery".to_string(),
            in_stock: false,
        },
        Product {
            id: ProductId::new(5),
            business_id: BusinessId::new(4),
            name: "Day Pass Kayak Rental".to_string(),
            description: "Single kayak, paddle and vest included.".to_string(),
            price: 45.00,
            image: "/images/products/kayak.jpg".to_string(),
            category: "outdoors".to_string(),
            in_stock: true,
        },
    ];

    let events = vec![
        Event {
            id: EventId::new(1),
            business_id: Some(BusinessId::new(1)),
            title: "Coffee Brewing Workshop".to_string(),
            description: "Hands-on cupping and pour-over techniques with the head roaster."
                .to_string(),
            date: at(2026, 8, 20, 18, 0),
            end_date: None,
            location: "The Local Roastery".to_string(),
            coordinates: Coordinates {
                lat: 45.5231,
                lng: -122.6765,
            },
            image: "/images/events/brewing-workshop.jpg".to_string(),
            attendee_count: 12,
            max_attendees: Some(20),
            category: "coffee".to_string(),
            points_reward: 50,
        },
        Event {
            id: EventId::new(2),
            business_id: Some(BusinessId::new(4)),
            title: "Riverside Trail Cleanup".to_string(),
            description: "Morning volunteer cleanup along the north river trail.".to_string(),
            date: at(2026, 8, 22, 9, 0),
            end_date: None,
            location: "North Trailhead".to_string(),
            coordinates: Coordinates {
                lat: 45.5312,
                lng: -122.6675,
            },
            image: "/images/events/trail-cleanup.jpg".to_string(),
            attendee_count: 38,
            max_attendees: None,
            category: "outdoors".to_string(),
            points_reward: 75,
        },
        Event {
            id: EventId::new(3),
            business_id: None,
            title: "Night Market on Market St".to_string(),
            description: "Food stalls, makers and live music through the evening.".to_string(),
            date: at(2026, 9, 5, 17, 0),
            end_date: Some(at(2026, 9, 5, 22, 0)),
            location: "Market Street Plaza".to_string(),
            coordinates: Coordinates {
                lat: 45.5195,
                lng: -122.6712,
            },
            image: "/images/events/night-market.jpg".to_string(),
            attendee_count: 480,
            max_attendees: Some(500),
            category: "market".to_string(),
            points_reward: 25,
        },
        Event {
            id: EventId::new(4),
            business_id: Some(BusinessId::new(5)),
            title: "Sunrise Yoga on the Pier".to_string(),
            description: "All-levels flow as the sun comes up over the harbor.".to_string(),
            date: at(2026, 8, 16, 6, 30),
            end_date: None,
            location: "Pier 31".to_string(),
            coordinates: Coordinates {
                lat: 45.5301,
                lng: -122.6822,
            },
            image: "/images/events/sunrise-yoga.jpg".to_string(),
            attendee_count: 15,
            max_attendees: Some(15),
            category: "fitness".to_string(),
            points_reward: 30,
        },
    ];

    let discounts = vec![
        Discount {
            id: DiscountId::new(1),
            business_id: BusinessId::new(1),
            title: "20% Off Any Drink".to_string(),
            description: "Good for one handcrafted drink of any size.".to_string(),
            discount_percentage: 20,
            points_cost: 100,
            valid_until: at(2026, 12, 31, 23, 59),
            max_redemptions: Some(20),
            current_redemptions: 18,
            image: "/images/discounts/roastery-drink.jpg".to_string(),
            terms: "One per visit. Not valid with other offers.".to_string(),
        },
        Discount {
            id: DiscountId::new(2),
            business_id: BusinessId::new(3),
            title: "Half Off a Second Loaf".to_string(),
            description: "Buy any loaf, get a second at half price.".to_string(),
            discount_percentage: 50,
            points_cost: 250,
            valid_until: at(2026, 10, 31, 23, 59),
            max_redemptions: None,
            current_redemptions: 64,
            image: "/images/discounts/second-loaf.jpg".to_string(),
            terms: "Second loaf of equal or lesser value.".to_string(),
        },
        Discount {
            id: DiscountId::new(3),
            business_id: BusinessId::new(4),
            title: "30% Off a Full-Day Rental".to_string(),
            description: "Any kayak or bike, all day.".to_string(),
            discount_percentage: 30,
            points_cost: 2000,
            valid_until: at(2026, 9, 30, 23, 59),
            max_redemptions: Some(10),
            current_redemptions: 10,
            image: "/images/discounts/full-day-rental.jpg".to_string(),
            terms: "Advance booking required. Subject to availability.".to_string(),
        },
    ];

    let interactions = vec![
        UserInteraction {
            id: InteractionId::new(1),
            user_id: UserId::new(1),
            kind: InteractionKind::CheckIn,
            business_id: Some(BusinessId::new(1)),
            event_id: None,
            discount_id: None,
            points_earned: 25,
            points_spent: 0,
            timestamp: at(2026, 7, 28, 10, 30),
        },
        UserInteraction {
            id: InteractionId::new(2),
            user_id: UserId::new(1),
            kind: InteractionKind::EventAttendance,
            business_id: None,
            event_id: Some(EventId::new(1)),
            discount_id: None,
            points_earned: 50,
            points_spent: 0,
            timestamp: at(2026, 7, 25, 14, 0),
        },
    ];

    SeedData {
        user,
        businesses,
        products,
        events,
        discounts,
        interactions,
    }
}
