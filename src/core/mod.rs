// Core types and primitives

pub mod ids;

pub use ids::{
    BusinessId, DiscountId, EventId, IdSequence, InteractionId, ProductId, UserId,
};
