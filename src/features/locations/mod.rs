pub mod model;
pub mod service;
pub mod share;

pub use model::{
    Category, Location, LocationCreate, LocationUpdate, SubscriptionPlan, UserSubscription,
};
pub use service::{LocationQuery, LocationService};
