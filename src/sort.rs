//! Column-keyed ordering for tables of equal-width string rows.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    Ascending,
    Descending,
}

/// Sorts `rows` in place by the values in `column`, using plain string
/// comparison. Rows move as whole units and the sort is stable, so ties keep
/// their input order. A row shorter than `column` compares as empty.
pub fn by_column(rows: &mut [Vec<String>], column: usize, order: Order) {
    rows.sort_by(|a, b| {
        let lhs = a.get(column).map(String::as_str).unwrap_or("");
        let rhs = b.get(column).map(String::as_str).unwrap_or("");
        match order {
            Order::Ascending => lhs.cmp(rhs),
            Order::Descending => rhs.cmp(lhs),
        }
    });
}
