//! # Cart Store
//!
//! Holds the distinct items currently selected and their quantities.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  Caller Action            Store Method            Entry Change          │
//! │  ─────────────            ────────────            ────────────          │
//! │                                                                         │
//! │  New name ───────────────► add() ───────────────► push(qty = 1)         │
//! │                                                                         │
//! │  Known name ─────────────► add() ───────────────► qty += 1              │
//! │                                                   (price unchanged)     │
//! │                                                                         │
//! │  Known name ─────────────► remove() ────────────► qty -= 1              │
//! │                                                   qty == 0 → removed    │
//! │                                                                         │
//! │  Unknown name ───────────► remove() ────────────► (no-op)               │
//! │                                                                         │
//! │  Report ─────────────────► entries() ───────────► (read only)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! A store has exactly one owner for the length of a session. Nothing
//! here locks; callers that share a store across threads must serialise
//! access themselves.

use tracing::debug;

use crate::money::Money;
use crate::types::Item;

/// The store's record for one distinct item name.
///
/// Never handed out by reference. Callers read entries through
/// [`EntryView`].
#[derive(Debug, Clone, PartialEq, Eq)]
struct CartEntry {
    name: String,

    /// Price captured from the first `add` for this name.
    unit_price: Money,

    /// Always > 0 while the entry is stored.
    quantity: u32,
}

/// A read-only view of one cart entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryView<'a> {
    pub name: &'a str,
    pub unit_price: Money,
    pub quantity: u32,
}

impl CartEntry {
    fn view(&self) -> EntryView<'_> {
        EntryView {
            name: &self.name,
            unit_price: self.unit_price,
            quantity: self.quantity,
        }
    }
}

/// The cart for one session.
///
/// ## Invariants
/// - Entries are unique by name (adding the same name increases quantity)
/// - Iteration follows first-insertion order
/// - No stored entry has quantity 0
///
/// Entries live in a `Vec` searched linearly by name. Carts are small and
/// the vector gives insertion order for free.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    entries: Vec<CartEntry>,
}

impl CartStore {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        CartStore {
            entries: Vec::new(),
        }
    }

    /// Adds one occurrence of `item`.
    ///
    /// ## Behavior
    /// - Name not in cart: appends an entry with quantity 1
    /// - Name already in cart: quantity += 1, the stored price is kept
    pub fn add(&mut self, item: &Item) {
        if let Some(entry) = self.find_mut(item.name()) {
            entry.quantity += 1;
            debug!(name = item.name(), quantity = entry.quantity, "Merged item into cart");
            return;
        }

        self.entries.push(CartEntry {
            name: item.name().to_string(),
            unit_price: item.unit_price(),
            quantity: 1,
        });
        debug!(name = item.name(), price = %item.unit_price(), "Added new item to cart");
    }

    /// Removes one occurrence of `item`.
    ///
    /// Dropping to zero deletes the entry without disturbing the order of the
    /// rest. Removing a name that is not in the cart does nothing.
    pub fn remove(&mut self, item: &Item) {
        let Some(index) = self.position(item.name()) else {
            debug!(name = item.name(), "Remove ignored, item not in cart");
            return;
        };

        let entry = &mut self.entries[index];
        entry.quantity -= 1;
        if entry.quantity == 0 {
            self.entries.remove(index);
            debug!(name = item.name(), "Removed item from cart");
        } else {
            debug!(name = item.name(), quantity = entry.quantity, "Decremented item in cart");
        }
    }

    /// Iterates `(name, unit_price, quantity)` views in insertion order.
    ///
    /// The iterator is `Clone`, and calling `entries()` again starts over.
    pub fn entries(&self) -> impl Iterator<Item = EntryView<'_>> + Clone + '_ {
        self.entries.iter().map(CartEntry::view)
    }

    /// Current quantity for `name`, or `None` if it is not in the cart.
    pub fn quantity_of(&self, name: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.quantity)
    }

    /// Returns the number of distinct names in the cart.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the total quantity across all entries.
    pub fn total_quantity(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.quantity)).sum()
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.name == name)
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut CartEntry> {
        self.entries.iter_mut().find(|e| e.name == name)
    }
}
