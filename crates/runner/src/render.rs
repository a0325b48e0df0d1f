//! Text rendering of fetched data

use courtside_core::{Feasibility, OrderRecord, PriceTable};
use std::fmt::Write;

const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Name of an ISO weekday number, Monday = 1
pub fn weekday_name(weekday: u32) -> &'static str {
    weekday
        .checked_sub(1)
        .and_then(|index| WEEKDAYS.get(index as usize))
        .copied()
        .unwrap_or("?")
}

/// One line per pricing bucket
pub fn render_price_table(prices: &PriceTable, weekday: u32) -> String {
    let mut out = format!("Prices for {} (day {}):\n", weekday_name(weekday), weekday);
    if prices.is_empty() {
        out.push_str("  no prices published\n");
    }
    for (day_type, info) in prices.iter() {
        let _ = writeln!(
            out,
            "  {:<10} price {:>4}  half price {:>4}",
            day_type, info.price, info.half_price
        );
    }
    out
}

pub fn render_feasibility(check: &Feasibility) -> String {
    format!(
        "Venue: {} ({})\nTotal amount: {}\nPayment valid for: {} minutes",
        check.venue_name, check.venue_group_name, check.total_amount, check.pay_valid_minutes
    )
}

pub fn render_found(order: &OrderRecord) -> String {
    format!(
        "Order {} ({}) detected for {}, amount {}, awaiting payment",
        order.id, order.order_no, order.venue_name, order.amount
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use courtside_core::PriceInfo;
    use std::collections::BTreeMap;

    #[test]
    fn test_weekday_names() {
        assert_eq!(weekday_name(1), "Monday");
        assert_eq!(weekday_name(7), "Sunday");
        assert_eq!(weekday_name(0), "?");
        assert_eq!(weekday_name(8), "?");
    }

    #[test]
    fn test_render_price_table() {
        let prices = PriceTable::new(BTreeMap::from([
            (
                "evening".to_string(),
                PriceInfo {
                    day_type: "evening".to_string(),
                    price: 40,
                    half_price: 20,
                },
            ),
            (
                "day".to_string(),
                PriceInfo {
                    day_type: "day".to_string(),
                    price: 30,
                    half_price: 15,
                },
            ),
        ]));

        assert_eq!(
            render_price_table(&prices, 3),
            "Prices for Wednesday (day 3):\n  \
             day        price   30  half price   15\n  \
             evening    price   40  half price   20\n"
        );
    }

    #[test]
    fn test_render_empty_price_table() {
        assert_eq!(
            render_price_table(&PriceTable::default(), 7),
            "Prices for Sunday (day 7):\n  no prices published\n"
        );
    }
}
