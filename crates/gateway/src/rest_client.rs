use async_trait::async_trait;
use courtside_core::{
    APPOINTMENT_ORDER_TYPE, BookedMap, BookingDay, Feasibility, OrderQuery, OrderRecord,
    PriceTable, SceneDescriptor, SubmitAck, TimeSlot, Venue, VenueGroupId,
};
use courtside_ports::{BookingGateway, GatewayResult};
use log::debug;
use reqwest::{Client, RequestBuilder};

use crate::config::GatewayConfig;
use crate::error::RestError;
use crate::wire::{
    CheckDto, Envelope, HourDto, OrderListDto, PriceDto, VenueDto, into_booked_map,
    into_price_table, into_venues,
};

/// Payment channel the service expects on appointment submissions
const PAY_TYPE: &str = "bitpay";

/// REST API client for the remote booking service
/// Infrastructure component - handles HTTP communication
#[derive(Clone)]
pub struct RestClient {
    client: Client,
    config: GatewayConfig,
}

impl RestClient {
    pub fn new(config: GatewayConfig) -> Result<Self, RestError> {
        let mut builder = Client::builder().timeout(config.timeout());
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.clone());
        }

        Ok(RestClient {
            client: builder.build()?,
            config,
        })
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Courts of a venue group, sorted by key
    pub async fn get_venues(&self, group: VenueGroupId) -> Result<Vec<Venue>, RestError> {
        debug!("Fetching venues of group {}", group);
        let path = format!("/api/sport_events/field/id/{}", group);
        let envelope = self.get(&path, &[], false).await?;
        Ok(into_venues(envelope.decode_map::<VenueDto>()?))
    }

    /// Time slots of a venue group
    pub async fn get_time_slots(&self, group: VenueGroupId) -> Result<Vec<TimeSlot>, RestError> {
        debug!("Fetching time slots of group {}", group);
        let path = format!("/api/sport_events/hour/id/{}", group);
        let envelope = self.get(&path, &[], false).await?;
        let hours: Vec<HourDto> = envelope.decode()?;
        Ok(hours.into_iter().map(TimeSlot::from).collect())
    }

    /// Occupancy of every court/slot pair on `day`
    pub async fn get_booked_map(
        &self,
        group: VenueGroupId,
        day: BookingDay,
    ) -> Result<BookedMap, RestError> {
        debug!("Fetching booked slots of group {} on {}", group, day);
        let path = format!("/api/sport_schedule/booked/id/{}", group);
        let envelope = self.get(&path, &[("day", format_day(day))], false).await?;
        Ok(into_booked_map(day, envelope.decode_map::<i64>()?))
    }

    /// Price table for `day`; `weekday` is Monday = 1 ... Sunday = 7
    pub async fn get_price_table(
        &self,
        group: VenueGroupId,
        weekday: u32,
        day: BookingDay,
    ) -> Result<PriceTable, RestError> {
        debug!(
            "Fetching prices of group {} for weekday {} on {}",
            group, weekday, day
        );
        let path = format!("/api/sport_events/price/id/{}", group);
        let query = [("week", weekday.to_string()), ("day", format_day(day))];
        let envelope = self.get(&path, &query, true).await?;
        Ok(into_price_table(envelope.decode_map::<PriceDto>()?))
    }

    /// Validate and price a scene without creating an order
    pub async fn check_schedule(
        &self,
        group: VenueGroupId,
        scene: &SceneDescriptor,
    ) -> Result<Feasibility, RestError> {
        let wire = scene.to_wire();
        debug!("Checking scene {} in group {}", wire, group);
        let path = format!("/api/sport_schedule/check/id/{}", group);
        let envelope = self.post_form(&path, &[("scene", wire)]).await?;
        let check: CheckDto = envelope.decode()?;
        Ok(check.into())
    }

    /// Submit an appointment order for `scene`
    pub async fn submit(
        &self,
        group: VenueGroupId,
        total_amount: i64,
        scene: &SceneDescriptor,
    ) -> Result<SubmitAck, RestError> {
        debug!(
            "Submitting order in group {} for {} ({})",
            group,
            total_amount,
            scene.to_wire()
        );
        let form = [
            ("orderid", String::new()),
            ("card_id", String::new()),
            ("sport_events_id", group.to_string()),
            ("money", total_amount.to_string()),
            ("ordertype", APPOINTMENT_ORDER_TYPE.to_string()),
            ("paytype", PAY_TYPE.to_string()),
            ("scene", scene.to_wire()),
            ("openid", self.config.openid.clone()),
        ];
        let envelope = self.post_form("/api/order/submit", &form).await?;
        Ok(SubmitAck {
            message: envelope.message(),
        })
    }

    /// One page of the order list
    pub async fn get_orders(&self, query: &OrderQuery) -> Result<Vec<OrderRecord>, RestError> {
        debug!(
            "Fetching orders type={} status={} orderid={} page={} limit={}",
            query.order_type, query.status, query.order_no, query.page, query.limit
        );
        let params = [
            ("ordertype", query.order_type.clone()),
            ("status", query.status.as_wire().to_string()),
            ("orderid", query.order_no.clone()),
            ("page", query.page.to_string()),
            ("limit", query.limit.to_string()),
        ];
        let envelope = self.get("/api/order/index", &params, true).await?;
        let list: OrderListDto = envelope.decode()?;
        debug!("Order list reports {} matching orders", list.total);
        Ok(list.list.into_iter().map(OrderRecord::from).collect())
    }

    async fn get(
        &self,
        path: &str,
        query: &[(&str, String)],
        authenticated: bool,
    ) -> Result<Envelope, RestError> {
        let url = format!("{}{}", self.config.base_url(), path);
        let mut request = self.client.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if authenticated {
            request = self.authenticate(request);
        }

        self.handle_response(request.send().await?).await
    }

    async fn post_form(&self, path: &str, form: &[(&str, String)]) -> Result<Envelope, RestError> {
        let url = format!("{}{}", self.config.base_url(), path);
        let request = self.authenticate(self.client.post(&url).form(form));

        self.handle_response(request.send().await?).await
    }

    fn authenticate(&self, request: RequestBuilder) -> RequestBuilder {
        request.header("token", &self.config.token)
    }

    async fn handle_response(&self, resp: reqwest::Response) -> Result<Envelope, RestError> {
        let status = resp.status();
        let text = resp.text().await?;

        let parsed = serde_json::from_str::<Envelope>(&text);

        if !status.is_success() {
            if let Ok(envelope) = parsed {
                if !envelope.is_success() {
                    return Err(RestError::Api {
                        code: envelope.code,
                        msg: envelope.message(),
                    });
                }
            }
            return Err(RestError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let envelope = parsed?;
        if !envelope.is_success() {
            return Err(RestError::Api {
                code: envelope.code,
                msg: envelope.message(),
            });
        }
        Ok(envelope)
    }
}

fn format_day(day: BookingDay) -> String {
    day.format("%Y-%m-%d").to_string()
}

/// Implement BookingGateway for RestClient (Dependency Inversion)
///
/// Converts infrastructure RestError to domain GatewayError to maintain
/// proper dependency direction (infrastructure -> domain).
#[async_trait]
impl BookingGateway for RestClient {
    async fn fetch_venues(&self, group: VenueGroupId) -> GatewayResult<Vec<Venue>> {
        Ok(self.get_venues(group).await?)
    }

    async fn fetch_time_slots(&self, group: VenueGroupId) -> GatewayResult<Vec<TimeSlot>> {
        Ok(self.get_time_slots(group).await?)
    }

    async fn fetch_booked_map(
        &self,
        group: VenueGroupId,
        day: BookingDay,
    ) -> GatewayResult<BookedMap> {
        Ok(self.get_booked_map(group, day).await?)
    }

    async fn fetch_price_table(
        &self,
        group: VenueGroupId,
        weekday: u32,
        day: BookingDay,
    ) -> GatewayResult<PriceTable> {
        Ok(self.get_price_table(group, weekday, day).await?)
    }

    async fn check_feasibility(
        &self,
        group: VenueGroupId,
        scene: &SceneDescriptor,
    ) -> GatewayResult<Feasibility> {
        Ok(self.check_schedule(group, scene).await?)
    }

    async fn submit_order(
        &self,
        group: VenueGroupId,
        total_amount: i64,
        scene: &SceneDescriptor,
    ) -> GatewayResult<SubmitAck> {
        Ok(self.submit(group, total_amount, scene).await?)
    }

    async fn fetch_orders(&self, query: &OrderQuery) -> GatewayResult<Vec<OrderRecord>> {
        Ok(self.get_orders(query).await?)
    }
}
