//! Pure aggregation folds over order records. The repository narrows the
//! set by date range; the folds themselves run in memory so ordering and
//! tie-breaking stay deterministic regardless of the store.

use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};

use bigdecimal::{BigDecimal, Zero};
use chrono::NaiveDate;
use uuid::Uuid;

use super::order::OrderRecord;
use super::status::OrderStatus;

#[derive(Debug, Clone, PartialEq)]
pub struct DailySales {
    pub date: NaiveDate,
    pub amount: BigDecimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemSales {
    pub menu_item_id: Uuid,
    pub name: String,
    pub quantity: i64,
}

/// Revenue per UTC calendar day of `created_at`, ascending by date.
/// Cancelled orders never count towards sales.
pub fn sales_by_day(orders: &[OrderRecord]) -> Vec<DailySales> {
    let mut days: BTreeMap<NaiveDate, BigDecimal> = BTreeMap::new();
    for order in orders {
        if order.status == OrderStatus::Cancelled {
            continue;
        }
        let day = order.created_at.date_naive();
        *days.entry(day).or_insert_with(BigDecimal::zero) += order.total_amount.clone();
    }
    days.into_iter()
        .map(|(date, amount)| DailySales { date, amount })
        .collect()
}

/// Order count per status. Statuses with no orders are absent, not zero.
/// Cancelled orders are counted here, unlike in sales.
pub fn status_distribution(orders: &[OrderRecord]) -> HashMap<OrderStatus, i64> {
    let mut counts = HashMap::new();
    for order in orders {
        *counts.entry(order.status).or_insert(0) += 1;
    }
    counts
}

/// Total quantity sold per menu item over non-cancelled orders, descending.
/// Ties keep first-encountered order (the input is iterated in the order
/// the repository returned it, and the sort is stable).
pub fn top_selling_items(orders: &[OrderRecord], limit: usize) -> Vec<ItemSales> {
    let mut index: HashMap<Uuid, usize> = HashMap::new();
    let mut items: Vec<ItemSales> = Vec::new();
    for order in orders {
        if order.status == OrderStatus::Cancelled {
            continue;
        }
        for line in &order.items {
            match index.entry(line.menu_item_id) {
                Entry::Occupied(slot) => {
                    items[*slot.get()].quantity += i64::from(line.quantity);
                }
                Entry::Vacant(slot) => {
                    slot.insert(items.len());
                    items.push(ItemSales {
                        menu_item_id: line.menu_item_id,
                        name: line.name.clone(),
                        quantity: i64::from(line.quantity),
                    });
                }
            }
        }
    }
    items.sort_by(|a, b| b.quantity.cmp(&a.quantity));
    items.truncate(limit);
    items
}

/// Gross revenue over the given orders, all statuses included.
pub fn total_revenue(orders: &[OrderRecord]) -> BigDecimal {
    orders
        .iter()
        .fold(BigDecimal::zero(), |acc, o| acc + o.total_amount.clone())
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use chrono::{DateTime, Utc};

    use super::*;
    use crate::domain::order::LineItem;
    use crate::domain::status::{PaymentMethod, PaymentStatus};

    fn ts(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    fn order(created: &str, status: OrderStatus, total: &str, items: Vec<LineItem>) -> OrderRecord {
        OrderRecord {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            items,
            total_amount: dec(total),
            delivery_address: "somewhere".to_string(),
            payment_method: PaymentMethod::Cod,
            payment_status: PaymentStatus::Pending,
            status,
            created_at: ts(created),
            delivered_at: None,
            cancelled_at: None,
        }
    }

    fn line(item_id: Uuid, name: &str, qty: i32) -> LineItem {
        LineItem {
            menu_item_id: item_id,
            name: name.to_string(),
            unit_price: dec("10"),
            quantity: qty,
            outlet_id: Uuid::new_v4(),
        }
    }

    #[test]
    fn sales_by_day_excludes_cancelled_orders() {
        let orders = vec![
            order("2025-06-01T09:00:00Z", OrderStatus::Delivered, "100", vec![]),
            order("2025-06-02T09:00:00Z", OrderStatus::Cancelled, "500", vec![]),
            order("2025-06-02T12:00:00Z", OrderStatus::Pending, "40", vec![]),
            order("2025-06-03T09:00:00Z", OrderStatus::Ready, "60", vec![]),
        ];
        let sales = sales_by_day(&orders);
        assert_eq!(sales.len(), 3);
        assert_eq!(sales[0].date, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        assert_eq!(sales[0].amount, dec("100"));
        // day 2 holds only the non-cancelled order
        assert_eq!(sales[1].amount, dec("40"));
        assert_eq!(sales[2].amount, dec("60"));
    }

    #[test]
    fn sales_by_day_sums_within_a_day_and_sorts_ascending() {
        let orders = vec![
            order("2025-06-02T20:00:00Z", OrderStatus::Pending, "30", vec![]),
            order("2025-06-01T09:00:00Z", OrderStatus::Pending, "10", vec![]),
            order("2025-06-02T08:00:00Z", OrderStatus::Pending, "20", vec![]),
        ];
        let sales = sales_by_day(&orders);
        assert_eq!(sales.len(), 2);
        assert_eq!(sales[0].amount, dec("10"));
        assert_eq!(sales[1].amount, dec("50"));
    }

    #[test]
    fn status_distribution_counts_all_statuses_present() {
        let orders = vec![
            order("2025-06-01T09:00:00Z", OrderStatus::Pending, "1", vec![]),
            order("2025-06-01T10:00:00Z", OrderStatus::Pending, "1", vec![]),
            order("2025-06-01T11:00:00Z", OrderStatus::Cancelled, "1", vec![]),
        ];
        let counts = status_distribution(&orders);
        assert_eq!(counts.get(&OrderStatus::Pending), Some(&2));
        assert_eq!(counts.get(&OrderStatus::Cancelled), Some(&1));
        assert_eq!(counts.get(&OrderStatus::Delivered), None);
    }

    #[test]
    fn top_selling_items_sums_quantity_and_breaks_ties_by_first_seen() {
        let dosa = Uuid::new_v4();
        let coffee = Uuid::new_v4();
        let samosa = Uuid::new_v4();
        let orders = vec![
            order(
                "2025-06-01T09:00:00Z",
                OrderStatus::Delivered,
                "1",
                vec![line(dosa, "Dosa", 2), line(coffee, "Coffee", 3)],
            ),
            order(
                "2025-06-01T10:00:00Z",
                OrderStatus::Pending,
                "1",
                vec![line(samosa, "Samosa", 3), line(dosa, "Dosa", 1)],
            ),
        ];
        let top = top_selling_items(&orders, 10);
        assert_eq!(top.len(), 3);
        // all three tie at 3; first-encountered order wins
        assert_eq!(top[0].menu_item_id, dosa);
        assert_eq!(top[0].quantity, 3);
        assert_eq!(top[1].menu_item_id, coffee);
        assert_eq!(top[2].menu_item_id, samosa);
    }

    #[test]
    fn top_selling_items_skips_cancelled_and_honours_limit() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let orders = vec![
            order(
                "2025-06-01T09:00:00Z",
                OrderStatus::Cancelled,
                "1",
                vec![line(a, "A", 100)],
            ),
            order(
                "2025-06-01T10:00:00Z",
                OrderStatus::Pending,
                "1",
                vec![line(a, "A", 1), line(b, "B", 2)],
            ),
        ];
        let top = top_selling_items(&orders, 1);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].menu_item_id, b);
        assert_eq!(top[0].quantity, 2);
    }

    #[test]
    fn total_revenue_includes_every_status() {
        let orders = vec![
            order("2025-06-01T09:00:00Z", OrderStatus::Cancelled, "10", vec![]),
            order("2025-06-01T10:00:00Z", OrderStatus::Pending, "15", vec![]),
        ];
        assert_eq!(total_revenue(&orders), dec("25"));
    }
}
