// Domain model - plain data records plus the pure derivations computed from them

pub mod domain;
pub mod rank;

pub use domain::{
    AwardOutcome, Business, Coordinates, Discount, Event, InteractionKind, LocationKind,
    MapLocation, Product, RedemptionOutcome, User, UserInteraction, CHECK_IN_POINTS,
    DEFAULT_EVENT_POINTS,
};
pub use rank::{Rank, RankProgress};
