//! Payload shapes of the remote booking service and their conversion
//! into domain types.

use courtside_core::{
    BookedMap, BookingDay, Feasibility, OrderRecord, OrderStatus, PriceInfo, PriceTable,
    TimeSlot, Venue, VenueGroupId,
};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

use crate::error::RestError;

/// Uniform `{code, msg|message, time, data}` wrapper around every payload
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope {
    pub code: i64,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    pub data: Value,
}

impl Envelope {
    pub fn message(&self) -> String {
        self.msg
            .clone()
            .or_else(|| self.message.clone())
            .unwrap_or_default()
    }

    pub fn is_success(&self) -> bool {
        self.code == 1
    }

    /// Decode the payload into the shape the caller expects
    pub fn decode<T: DeserializeOwned>(self) -> Result<T, RestError> {
        Ok(serde_json::from_value(self.data)?)
    }

    /// Decode an object payload; an empty array counts as an empty object
    pub fn decode_map<T: DeserializeOwned>(self) -> Result<BTreeMap<String, T>, RestError> {
        match self.data {
            Value::Array(items) if items.is_empty() => Ok(BTreeMap::new()),
            Value::Null => Ok(BTreeMap::new()),
            data => Ok(serde_json::from_value(data)?),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct VenueDto {
    id: u32,
    name: String,
    #[serde(default)]
    maxnums: u32,
}

pub(crate) fn into_venues(dtos: BTreeMap<String, VenueDto>) -> Vec<Venue> {
    // BTreeMap iteration keeps venues sorted by key
    dtos.into_iter()
        .map(|(key, dto)| Venue::new(key, dto.id, dto.name, dto.maxnums))
        .collect()
}

#[derive(Debug, Deserialize)]
pub(crate) struct HourDto {
    id: u32,
    #[serde(default)]
    sport_events_id: u32,
    #[serde(default)]
    begintime: i64,
    #[serde(default)]
    endtime: i64,
    begintime_text: String,
    endtime_text: String,
    #[serde(default)]
    daytype: String,
}

impl From<HourDto> for TimeSlot {
    fn from(dto: HourDto) -> Self {
        TimeSlot {
            id: dto.id,
            venue_group: VenueGroupId::new(dto.sport_events_id),
            begin: dto.begintime,
            end: dto.endtime,
            begin_text: dto.begintime_text,
            end_text: dto.endtime_text,
            day_type: dto.daytype,
        }
    }
}

pub(crate) fn into_booked_map(day: BookingDay, entries: BTreeMap<String, i64>) -> BookedMap {
    BookedMap::new(day, entries.into_iter().collect::<HashMap<_, _>>())
}

#[derive(Debug, Deserialize)]
pub(crate) struct PriceDto {
    #[serde(default)]
    daytype: String,
    price: i64,
    #[serde(default)]
    half_price: i64,
}

pub(crate) fn into_price_table(dtos: BTreeMap<String, PriceDto>) -> PriceTable {
    PriceTable::new(
        dtos.into_iter()
            .map(|(day_type, dto)| {
                let info = PriceInfo {
                    day_type: if dto.daytype.is_empty() {
                        day_type.clone()
                    } else {
                        dto.daytype
                    },
                    price: dto.price,
                    half_price: dto.half_price,
                };
                (day_type, info)
            })
            .collect(),
    )
}

#[derive(Debug, Deserialize)]
pub(crate) struct CheckDto {
    total_amount: i64,
    #[serde(default)]
    venue_name: String,
    #[serde(default)]
    sport_events_name: String,
    #[serde(default)]
    pay_valid_time: u32,
}

impl From<CheckDto> for Feasibility {
    fn from(dto: CheckDto) -> Self {
        Feasibility {
            venue_name: dto.venue_name,
            venue_group_name: dto.sport_events_name,
            total_amount: dto.total_amount,
            pay_valid_minutes: dto.pay_valid_time,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct OrderListDto {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub list: Vec<OrderItemDto>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OrderItemDto {
    id: u64,
    #[serde(default)]
    orderid: String,
    #[serde(default)]
    ordertype: String,
    sport_events_id: u32,
    #[serde(default)]
    venue_id: u32,
    #[serde(default)]
    venue_name: String,
    #[serde(default)]
    amount: i64,
    status: String,
}

impl From<OrderItemDto> for OrderRecord {
    fn from(dto: OrderItemDto) -> Self {
        OrderRecord {
            id: dto.id,
            order_no: dto.orderid,
            order_type: dto.ordertype,
            venue_group: VenueGroupId::new(dto.sport_events_id),
            venue_id: dto.venue_id,
            venue_name: dto.venue_name,
            amount: dto.amount,
            status: OrderStatus::from_wire(&dto.status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(value: Value) -> Envelope {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_message_from_either_field() {
        let env = envelope(json!({"code": 0, "message": "闭馆"}));
        assert_eq!(env.message(), "闭馆");
        assert!(!env.is_success());

        let env = envelope(json!({"code": 0, "msg": "未登录", "time": "1714521600"}));
        assert_eq!(env.message(), "未登录");
    }

    #[test]
    fn test_venues_sorted_by_key() {
        let env = envelope(json!({
            "code": 1,
            "data": {
                "B1": {"id": 3, "name": "Court3", "maxnums": 4},
                "A2": {"id": 2, "name": "Court2", "maxnums": 4},
                "A1": {"id": 1, "name": "Court1"}
            }
        }));

        let venues = into_venues(env.decode_map().unwrap());
        let keys: Vec<_> = venues.iter().map(|v| v.key.as_str()).collect();
        assert_eq!(keys, vec!["A1", "A2", "B1"]);
        assert_eq!(venues[0].capacity, 0);
        assert_eq!(venues[1].name, "Court2");
    }

    #[test]
    fn test_empty_array_is_empty_map() {
        let env = envelope(json!({"code": 1, "data": []}));
        let booked: BTreeMap<String, i64> = env.decode_map().unwrap();
        assert!(booked.is_empty());
    }

    #[test]
    fn test_wrong_shape_is_parse_error() {
        let env = envelope(json!({"code": 1, "data": {"total": "many"}}));
        let result = env.decode::<OrderListDto>();
        assert!(matches!(result, Err(RestError::Parse(_))));
    }

    #[test]
    fn test_order_item_conversion() {
        let item: OrderItemDto = serde_json::from_value(json!({
            "id": 981,
            "orderid": "A2024050112",
            "ordertype": "makeappointment",
            "sport_events_id": 25,
            "venue_id": 4,
            "venue_name": "Court1",
            "amount": 40,
            "status": "created",
            "paytime": null
        }))
        .unwrap();

        let record = OrderRecord::from(item);
        assert_eq!(record.venue_group, VenueGroupId::new(25));
        assert_eq!(record.status, OrderStatus::Created);
        assert_eq!(record.order_no, "A2024050112");
    }

    #[test]
    fn test_price_day_type_falls_back_to_key() {
        let env = envelope(json!({
            "code": 1,
            "data": {
                "weekday": {"daytype": "weekday", "price": 30, "half_price": 15},
                "weekend": {"price": 50}
            }
        }));
        let table = into_price_table(env.decode_map().unwrap());
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("weekend").unwrap().day_type, "weekend");
        assert_eq!(table.get("weekday").unwrap().half_price, 15);
    }
}
