use async_trait::async_trait;
use courtside_core::{
    BookedMap, BookingDay, Feasibility, OrderQuery, OrderRecord, PriceTable, SceneDescriptor,
    SubmitAck, TimeSlot, Venue, VenueGroupId,
};

use crate::GatewayResult;

/// Port onto the remote booking service
///
/// Read operations feed the availability matrix and slot resolution;
/// write operations are the feasibility check and order submission.
/// Implementations must surface every failure as a `GatewayError`,
/// never swallow it.
#[async_trait]
pub trait BookingGateway: Send + Sync {
    /// Courts of a venue group, sorted by venue key
    async fn fetch_venues(&self, group: VenueGroupId) -> GatewayResult<Vec<Venue>>;

    /// Time slots of a venue group, in the order the service returns them
    async fn fetch_time_slots(&self, group: VenueGroupId) -> GatewayResult<Vec<TimeSlot>>;

    /// Occupancy snapshot for one day
    async fn fetch_booked_map(
        &self,
        group: VenueGroupId,
        day: BookingDay,
    ) -> GatewayResult<BookedMap>;

    /// Price table for a day; `weekday` is Monday = 1 ... Sunday = 7
    async fn fetch_price_table(
        &self,
        group: VenueGroupId,
        weekday: u32,
        day: BookingDay,
    ) -> GatewayResult<PriceTable>;

    /// Validate a scene and price it without creating an order
    async fn check_feasibility(
        &self,
        group: VenueGroupId,
        scene: &SceneDescriptor,
    ) -> GatewayResult<Feasibility>;

    /// Submit an order; the ack is not proof the order exists
    async fn submit_order(
        &self,
        group: VenueGroupId,
        total_amount: i64,
        scene: &SceneDescriptor,
    ) -> GatewayResult<SubmitAck>;

    /// Snapshot of the remote order list, filtered server-side
    async fn fetch_orders(&self, query: &OrderQuery) -> GatewayResult<Vec<OrderRecord>>;
}
