//! Order line parsing.
//!
//! ```text
//! 3          ← item count N
//! 1 15       ← <orderIndex> <price>, becomes Item "Order-1" priced 15
//! 2 30
//! 1 15
//! ```
//!
//! Every token must be an integer. The order index is kept exactly as
//! written, so `07` names `Order-07`. Tokens after the price are ignored.

use std::io::BufRead;

use tiercart_core::validation::{validate_item_count, validate_unit_price};
use tiercart_core::{Item, ORDER_NAME_PREFIX};
use tracing::{debug, trace};

use crate::error::{CliError, CliResult};

/// Reads the item count and then that many order lines.
pub fn read_orders<R: BufRead>(reader: R) -> CliResult<Vec<Item>> {
    let mut lines = reader.lines().enumerate().map(|(i, line)| (i + 1, line));

    // Item count: first non-blank line
    let (count_line, count) = loop {
        let Some((number, line)) = lines.next() else {
            return Err(CliError::input(1, "missing item count"));
        };
        let line = line?;
        let token = line.trim();
        if token.is_empty() {
            continue;
        }
        let count = parse_integer(number, "item count", token)?;
        let count = validate_item_count(count).map_err(|e| CliError::input(number, e.to_string()))?;
        break (number, count);
    };
    debug!(count, "Reading order lines");

    let mut items = Vec::with_capacity(count.min(1024));
    for expected in 1..=count {
        let Some((number, line)) = lines.next() else {
            return Err(CliError::input(
                count_line + expected,
                format!("expected {count} order lines, found {}", expected - 1),
            ));
        };
        let item = parse_order_line(number, &line?)?;
        trace!(line = number, name = item.name(), price = %item.unit_price(), "Parsed order line");
        items.push(item);
    }

    Ok(items)
}

/// Parses `<orderIndex> <price>` into an item.
pub fn parse_order_line(number: usize, line: &str) -> CliResult<Item> {
    let mut tokens = line.split_whitespace();

    let index = tokens
        .next()
        .ok_or_else(|| CliError::input(number, "missing order index"))?;
    parse_integer(number, "order index", index)?;

    let price = tokens
        .next()
        .ok_or_else(|| CliError::input(number, "missing price"))?;
    let price = parse_integer(number, "price", price)?;
    let price = validate_unit_price(price).map_err(|e| CliError::input(number, e.to_string()))?;

    Ok(Item::new(format!("{ORDER_NAME_PREFIX}{index}"), price))
}

fn parse_integer(number: usize, field: &str, token: &str) -> CliResult<i64> {
    token
        .parse::<i64>()
        .map_err(|e| CliError::input(number, format!("{field} '{token}' is not an integer ({e})")))
}
