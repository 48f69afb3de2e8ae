// Inventory module: the in-memory state layer behind the interactive UI.
// It owns the product list and the id counter, and every mutation goes
// through a validated operation so the non-negative price/stock rules
// cannot be bypassed from the UI side.

use rust_decimal::Decimal;
use thiserror::Error;

/// One inventory line item. `id` is assigned by [`Inventory::add`] and is
/// never changed or reused afterwards; `stock` is the only field mutated
/// post-creation (via sell/restock).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub stock: i64,
}

/// Rule violations reported by the inventory operations. Each one aborts
/// the operation with no mutation; the UI prints the message and returns
/// to the menu.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    #[error("Name cannot be empty.")]
    EmptyName,

    #[error("Price cannot be negative.")]
    NegativePrice,

    #[error("Stock cannot be negative.")]
    NegativeStock,

    #[error("Product not found.")]
    NotFound(i64),

    #[error("Quantity must be > 0.")]
    NonPositiveQuantity,

    #[error("Not enough stock to sell that many.")]
    InsufficientStock { requested: i64, available: i64 },
}

/// The product collection for one session, insertion order preserved.
///
/// Ids start at 1 and only ever move forward: the counter advances when a
/// product is actually created, never on a rejected add, and removal does
/// not hand the id back.
#[derive(Debug)]
pub struct Inventory {
    products: Vec<Product>,
    next_id: i64,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl Inventory {
    pub fn new() -> Self {
        Inventory {
            products: Vec::new(),
            next_id: 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// The id the next successful add will receive.
    pub fn next_id(&self) -> i64 {
        self.next_id
    }

    /// Iterate over all products in insertion order. Lazy and restartable;
    /// call it again for a fresh pass.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// First product with the given id, if any. Linear scan; the expected
    /// scale is a handful of entries, so no index is kept.
    pub fn get(&self, id: i64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    fn get_mut(&mut self, id: i64) -> Result<&mut Product, InventoryError> {
        self.products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(InventoryError::NotFound(id))
    }

    /// Validate and append a new product, returning its assigned id.
    ///
    /// All checks run before the id is allocated, so a rejected add leaves
    /// the counter where it was.
    pub fn add(&mut self, name: &str, price: Decimal, stock: i64) -> Result<i64, InventoryError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(InventoryError::EmptyName);
        }
        if price < Decimal::ZERO {
            return Err(InventoryError::NegativePrice);
        }
        if stock < 0 {
            return Err(InventoryError::NegativeStock);
        }

        let id = self.next_id;
        self.next_id += 1;
        self.products.push(Product {
            id,
            name: name.to_string(),
            price,
            stock,
        });
        Ok(id)
    }

    /// Decrease stock by `quantity`, returning the new stock level.
    /// Selling more than is available is rejected, so stock stays >= 0.
    pub fn sell(&mut self, id: i64, quantity: i64) -> Result<i64, InventoryError> {
        let product = self.get_mut(id)?;
        if quantity <= 0 {
            return Err(InventoryError::NonPositiveQuantity);
        }
        if quantity > product.stock {
            return Err(InventoryError::InsufficientStock {
                requested: quantity,
                available: product.stock,
            });
        }
        product.stock -= quantity;
        Ok(product.stock)
    }

    /// Increase stock by `quantity`, returning the new stock level.
    pub fn restock(&mut self, id: i64, quantity: i64) -> Result<i64, InventoryError> {
        let product = self.get_mut(id)?;
        if quantity <= 0 {
            return Err(InventoryError::NonPositiveQuantity);
        }
        product.stock += quantity;
        Ok(product.stock)
    }

    /// Delete the product with the given id (matched by id, not position)
    /// and return the removed id. The id is retired, not recycled.
    pub fn remove(&mut self, id: i64) -> Result<i64, InventoryError> {
        let index = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or(InventoryError::NotFound(id))?;
        self.products.remove(index);
        Ok(id)
    }
}

/// Render a price as fixed en-US style currency: `$` plus a
/// thousands-grouped integer part and exactly two decimals, e.g.
/// `$1,234.56`. Host locale is deliberately ignored.
///
/// Callers only pass prices that already satisfy the `price >= 0`
/// invariant, so no sign handling is needed.
pub fn format_currency(amount: Decimal) -> String {
    let fixed = format!("{:.2}", amount.round_dp(2));
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some(parts) => parts,
        None => (fixed.as_str(), "00"),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 1);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("${}.{}", grouped, frac_part)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn price(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn add_assigns_sequential_ids_and_preserves_order() {
        let mut inventory = Inventory::new();
        assert_eq!(inventory.add("Widget", price("9.99"), 10), Ok(1));
        assert_eq!(inventory.add("Gadget", price("1.50"), 3), Ok(2));
        assert_eq!(inventory.add("Gizmo", price("0"), 0), Ok(3));

        let ids: Vec<i64> = inventory.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(inventory.len(), 3);
    }

    #[test]
    fn add_trims_the_name() {
        let mut inventory = Inventory::new();
        inventory.add("  Widget  ", price("1"), 1).unwrap();
        assert_eq!(inventory.get(1).unwrap().name, "Widget");
    }

    #[test]
    fn rejected_add_leaves_inventory_and_counter_untouched() {
        let mut inventory = Inventory::new();

        assert_eq!(
            inventory.add("Widget", price("-1"), 5),
            Err(InventoryError::NegativePrice)
        );
        assert_eq!(
            inventory.add("Widget", price("1"), -5),
            Err(InventoryError::NegativeStock)
        );
        assert_eq!(
            inventory.add("   ", price("1"), 5),
            Err(InventoryError::EmptyName)
        );

        assert!(inventory.is_empty());
        assert_eq!(inventory.next_id(), 1);
    }

    #[test]
    fn sell_subtracts_within_available_stock() {
        let mut inventory = Inventory::new();
        let id = inventory.add("Widget", price("9.99"), 10).unwrap();

        assert_eq!(inventory.sell(id, 3), Ok(7));
        assert_eq!(inventory.get(id).unwrap().stock, 7);
    }

    #[test]
    fn sell_rejects_overdraw_and_non_positive_quantities() {
        let mut inventory = Inventory::new();
        let id = inventory.add("Widget", price("9.99"), 10).unwrap();

        assert_eq!(
            inventory.sell(id, 100),
            Err(InventoryError::InsufficientStock {
                requested: 100,
                available: 10,
            })
        );
        assert_eq!(inventory.sell(id, 0), Err(InventoryError::NonPositiveQuantity));
        assert_eq!(inventory.sell(id, -4), Err(InventoryError::NonPositiveQuantity));
        assert_eq!(inventory.get(id).unwrap().stock, 10);
    }

    #[test]
    fn restock_adds_and_rejects_non_positive_quantities() {
        let mut inventory = Inventory::new();
        let id = inventory.add("Widget", price("9.99"), 10).unwrap();

        assert_eq!(inventory.restock(id, 5), Ok(15));
        assert_eq!(inventory.restock(id, 0), Err(InventoryError::NonPositiveQuantity));
        assert_eq!(inventory.restock(id, -1), Err(InventoryError::NonPositiveQuantity));
        assert_eq!(inventory.get(id).unwrap().stock, 15);
    }

    #[test]
    fn operations_on_unknown_ids_report_not_found_without_mutation() {
        let mut inventory = Inventory::new();
        inventory.add("Widget", price("9.99"), 10).unwrap();

        assert_eq!(inventory.sell(42, 1), Err(InventoryError::NotFound(42)));
        assert_eq!(inventory.restock(42, 1), Err(InventoryError::NotFound(42)));
        assert_eq!(inventory.remove(42), Err(InventoryError::NotFound(42)));
        assert_eq!(inventory.remove(-3), Err(InventoryError::NotFound(-3)));

        assert_eq!(inventory.len(), 1);
        assert_eq!(inventory.get(1).unwrap().stock, 10);
    }

    #[test]
    fn remove_deletes_exactly_the_matching_entry() {
        let mut inventory = Inventory::new();
        inventory.add("Widget", price("1"), 1).unwrap();
        inventory.add("Gadget", price("2"), 2).unwrap();
        inventory.add("Gizmo", price("3"), 3).unwrap();

        assert_eq!(inventory.remove(2), Ok(2));

        let remaining: Vec<(i64, &str)> =
            inventory.iter().map(|p| (p.id, p.name.as_str())).collect();
        assert_eq!(remaining, vec![(1, "Widget"), (3, "Gizmo")]);
    }

    #[test]
    fn ids_are_never_reused_after_removal() {
        // The scenario from the requirements: full widget lifecycle, then a
        // fresh add must get id 2 even though the inventory emptied out.
        let mut inventory = Inventory::new();
        let id = inventory.add("Widget", price("9.99"), 10).unwrap();
        assert_eq!(id, 1);

        assert_eq!(inventory.sell(id, 3), Ok(7));
        assert_eq!(inventory.restock(id, 5), Ok(12));
        assert_eq!(inventory.remove(id), Ok(1));
        assert!(inventory.is_empty());

        assert_eq!(inventory.add("Gadget", price("0"), 0), Ok(2));
    }

    #[test]
    fn empty_inventory_iterates_nothing() {
        let inventory = Inventory::new();
        assert!(inventory.is_empty());
        assert_eq!(inventory.iter().count(), 0);
    }

    #[test]
    fn iter_is_restartable() {
        let mut inventory = Inventory::new();
        inventory.add("Widget", price("1"), 1).unwrap();
        inventory.add("Gadget", price("2"), 2).unwrap();

        let first: Vec<i64> = inventory.iter().map(|p| p.id).collect();
        let second: Vec<i64> = inventory.iter().map(|p| p.id).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn currency_is_grouped_and_two_decimal() {
        assert_eq!(format_currency(price("9.99")), "$9.99");
        assert_eq!(format_currency(price("0")), "$0.00");
        assert_eq!(format_currency(price("12")), "$12.00");
        assert_eq!(format_currency(price("1234.56")), "$1,234.56");
        assert_eq!(format_currency(price("1234567.891")), "$1,234,567.89");
        assert_eq!(format_currency(price("100000")), "$100,000.00");
    }

    proptest! {
        #[test]
        fn ids_strictly_increase_in_creation_order(
            names in proptest::collection::vec("[A-Za-z]{1,12}", 1..32)
        ) {
            let mut inventory = Inventory::new();
            let mut last_id = 0;
            for name in &names {
                let id = inventory.add(name, Decimal::ZERO, 0).unwrap();
                prop_assert!(id > last_id);
                last_id = id;
            }
            prop_assert_eq!(inventory.len(), names.len());
            prop_assert_eq!(inventory.next_id(), last_id + 1);
        }
    }
}
