mod booked;
mod feasibility;
mod order;
mod order_status;
mod price;
mod scene;
mod time_slot;
mod venue;

pub use booked::BookedMap;
pub use feasibility::{Feasibility, SubmitAck};
pub use order::{APPOINTMENT_ORDER_TYPE, OrderQuery, OrderRecord};
pub use order_status::OrderStatus;
pub use price::{PriceInfo, PriceTable};
pub use scene::SceneDescriptor;
pub use time_slot::TimeSlot;
pub use venue::Venue;
