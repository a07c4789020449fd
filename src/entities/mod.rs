mod coordinates;
mod estimate;
mod order;

pub use coordinates::Coordinates;
pub use estimate::Estimate;
pub use order::{Field, LocationKind, Order, TravelMode};
