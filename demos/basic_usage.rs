// ============================================================================
// Basic Usage Example
// ============================================================================

use chrono::{DateTime, TimeZone, Utc};
use orderbook_matcher::prelude::*;
use rust_decimal::Decimal;

fn main() {
    println!("=== Orderbook Matcher Example ===");

    println!("\n--- Orders matched by price-time ---");
    let mut price_time_batch = vec![
        order("A", "A1", Side::Buy, 100, "4.99", ts(9, 27)),
        order("B", "B1", Side::Buy, 200, "5.00", ts(10, 21)),
        order("C", "C1", Side::Buy, 150, "5.00", ts(10, 26)),
        order("D", "D1", Side::Sell, 150, "5.00", ts(10, 32)),
        order("E", "E1", Side::Sell, 100, "5.00", ts(10, 33)),
    ];

    println!("Before matching:");
    print_batch(&price_time_batch);

    let matcher = create_matcher(MatchingPolicy::PriceTime);
    matcher.match_orders(&mut price_time_batch);

    println!("\nAfter matching:");
    print_batch(&price_time_batch);

    println!("\n--- Orders matched by pro-rata ---");
    let mut pro_rata_batch = vec![
        order("A", "A1", Side::Buy, 50, "5.00", ts(9, 27)),
        order("B", "B1", Side::Buy, 200, "5.00", ts(10, 21)),
        order("C", "C1", Side::Sell, 200, "5.00", ts(10, 26)),
        order("D", "D1", Side::Buy, 300, "6.00", ts(9, 27)),
        order("E", "E1", Side::Sell, 50, "6.00", ts(10, 21)),
        order("F", "F1", Side::Sell, 150, "6.00", ts(10, 26)),
    ];

    println!("Before matching:");
    print_batch(&pro_rata_batch);

    let matcher = create_matcher(MatchingPolicy::ProRata);
    matcher.match_orders(&mut pro_rata_batch);

    println!("\nAfter matching:");
    print_batch(&pro_rata_batch);
}

fn order(
    party: &str,
    id: &str,
    side: Side,
    volume: i64,
    notional: &str,
    timestamp: DateTime<Utc>,
) -> Order {
    Order::new(
        party,
        id,
        side,
        volume,
        notional.parse::<Decimal>().unwrap(),
        timestamp,
    )
}

fn ts(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, hour, minute, 0).unwrap()
}

fn print_batch(orders: &[Order]) {
    let mut sorted: Vec<&Order> = orders.iter().collect();
    sorted.sort_by(|a, b| a.id.cmp(&b.id));

    for order in sorted {
        println!(
            "OrderId {} {:?} - {:?}, Notional {}, Original {}, Remaining {}",
            order.id,
            order.side,
            order.state(),
            order.notional,
            order.volume,
            order.remaining_volume()
        );
        for fill in order.fills() {
            println!(
                "  - Matched with {}, Notional {}, Volume {}",
                fill.counterparty, fill.notional, fill.volume
            );
        }
    }
}
