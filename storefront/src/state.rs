//! The application state: catalog, order ledger, cart, and navigation.
//!
//! [`StorefrontState`] is the single source of truth. The collections are
//! owned by explicit store structs constructed once at process start; the
//! reducer mutates them through the methods here and describes persistence
//! as effects. None of these methods perform I/O.

use crate::types::{Article, Order, Product, View};

/// The set of purchasable products.
///
/// The durable document is the bare product array, not this wrapper; see
/// [`crate::persistence`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Wrap a loaded (or seeded) product list.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The products, in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of catalog entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Append a new entry. Duplicate names are permitted; ids are assumed
    /// fresh (the reducer mints them).
    pub fn add(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Replace the entry whose id matches. Returns whether a replacement
    /// happened; a miss leaves the catalog untouched.
    pub fn update(&mut self, product: Product) -> bool {
        match self.products.iter_mut().find(|p| p.id == product.id) {
            Some(slot) => {
                *slot = product;
                true
            }
            None => false,
        }
    }

    /// Delete the entry with the given id, if present. Never touches
    /// orders holding snapshots of the entry.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        self.products.len() != before
    }
}

/// The append-only log of placed orders, most recent first.
///
/// Write-once per entry from the storefront's perspective: no update or
/// delete operations exist.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ledger {
    orders: Vec<Order>,
}

impl Ledger {
    /// Wrap a loaded order list (already most-recent-first).
    #[must_use]
    pub const fn new(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    /// The orders, most recent first.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Number of recorded orders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Whether any order has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Prepend a newly placed order.
    pub fn record(&mut self, order: Order) {
        self.orders.insert(0, order);
    }
}

/// The session-scoped cart.
///
/// A line is a product snapshot with implicit quantity 1; multiple lines
/// for the same product represent multiple units. The cart is never
/// persisted; a process restart always starts empty.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cart {
    lines: Vec<Product>,
}

impl Cart {
    /// The lines, in addition order.
    #[must_use]
    pub fn lines(&self) -> &[Product] {
        &self.lines
    }

    /// Number of lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Append a line holding a snapshot of the product as it is now.
    pub fn add_line(&mut self, product: Product) {
        self.lines.push(product);
    }

    /// Remove the line at `index`. Out-of-range is a no-op returning
    /// `false`; the remaining lines keep their order.
    pub fn remove_line(&mut self, index: usize) -> bool {
        if index < self.lines.len() {
            self.lines.remove(index);
            true
        } else {
            false
        }
    }

    /// Empty the cart. Called by checkout after a successful placement.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of line prices. Pure.
    #[must_use]
    pub fn subtotal(&self) -> f64 {
        self.lines.iter().map(|line| line.price).sum()
    }
}

/// The whole application state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StorefrontState {
    /// Purchasable products; durable.
    pub catalog: Catalog,
    /// Placed orders, most recent first; durable.
    pub ledger: Ledger,
    /// Session cart; never persisted.
    pub cart: Cart,
    /// Built-in journal articles.
    pub articles: Vec<Article>,
    /// The active screen.
    pub view: View,
    /// Whether the cart drawer is open.
    pub cart_open: bool,
}

impl StorefrontState {
    /// Assemble the state at process start. Cart starts empty, the view
    /// starts at [`View::Home`], and the drawer starts closed.
    #[must_use]
    pub fn new(products: Vec<Product>, orders: Vec<Order>, articles: Vec<Article>) -> Self {
        Self {
            catalog: Catalog::new(products),
            ledger: Ledger::new(orders),
            cart: Cart::default(),
            articles,
            view: View::Home,
            cart_open: false,
        }
    }

    /// Look up a built-in article by id.
    #[must_use]
    pub fn article(&self, id: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, Customer, OrderStatus, ProductDraft};
    use proptest::prelude::*;

    fn product(id: &str, price: f64) -> Product {
        let mut p = Product::from_draft(
            ProductDraft {
                name: format!("Product {id}"),
                ..ProductDraft::default()
            },
            id.to_string(),
        );
        p.price = price;
        p
    }

    #[test]
    fn catalog_update_miss_changes_nothing() {
        let mut catalog = Catalog::new(vec![product("p1", 10.0), product("p2", 20.0)]);
        let before = catalog.clone();

        let replaced = catalog.update(product("p404", 99.0));

        assert!(!replaced);
        assert_eq!(catalog, before);
    }

    #[test]
    fn catalog_update_replaces_in_place() {
        let mut catalog = Catalog::new(vec![product("p1", 10.0), product("p2", 20.0)]);
        let mut edited = product("p1", 15.0);
        edited.category = Category::Audio;

        assert!(catalog.update(edited.clone()));
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("p1"), Some(&edited));
        // Position preserved.
        assert_eq!(catalog.products()[0].id, "p1");
    }

    #[test]
    fn catalog_remove_miss_is_noop() {
        let mut catalog = Catalog::new(vec![product("p1", 10.0)]);
        assert!(!catalog.remove("p404"));
        assert_eq!(catalog.len(), 1);
        assert!(catalog.remove("p1"));
        assert!(catalog.is_empty());
    }

    #[test]
    fn ledger_records_most_recent_first() {
        let mut ledger = Ledger::default();
        for id in ["A", "B", "C"] {
            ledger.record(Order {
                id: id.to_string(),
                items: vec![],
                total: 0.0,
                date: "01/01/2025".to_string(),
                customer: Customer {
                    name: "Ada".to_string(),
                    email: "ada@example.com".to_string(),
                },
                status: OrderStatus::Completed,
            });
        }
        let ids: Vec<_> = ledger.orders().iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["C", "B", "A"]);
    }

    #[test]
    fn cart_remove_out_of_range_is_noop() {
        let mut cart = Cart::default();
        cart.add_line(product("p1", 29.0));
        cart.add_line(product("p2", 49.0));

        assert!(!cart.remove_line(2));
        assert_eq!(cart.len(), 2);

        assert!(cart.remove_line(0));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].id, "p2");
    }

    #[test]
    fn cart_subtotal_is_exact_sum() {
        let mut cart = Cart::default();
        cart.add_line(product("p1", 29.0));
        cart.add_line(product("p2", 49.0));
        assert_eq!(cart.subtotal(), 78.0);
    }

    #[test]
    fn same_product_twice_is_two_lines() {
        let mut cart = Cart::default();
        cart.add_line(product("p1", 29.0));
        cart.add_line(product("p1", 29.0));
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.subtotal(), 58.0);
    }

    #[derive(Clone, Debug)]
    enum CartOp {
        Add(f64),
        Remove(usize),
    }

    fn cart_op() -> impl Strategy<Value = CartOp> {
        prop_oneof![
            (0.0f64..500.0).prop_map(CartOp::Add),
            (0usize..12).prop_map(CartOp::Remove),
        ]
    }

    proptest! {
        // Line count equals adds minus in-range removes, out-of-range
        // removes never change it, and the subtotal tracks the lines
        // exactly.
        #[test]
        fn cart_count_and_subtotal_follow_ops(ops in prop::collection::vec(cart_op(), 0..64)) {
            let mut cart = Cart::default();
            let mut model: Vec<f64> = Vec::new();

            for op in ops {
                match op {
                    CartOp::Add(price) => {
                        cart.add_line(product("px", price));
                        model.push(price);
                    }
                    CartOp::Remove(index) => {
                        let removed = cart.remove_line(index);
                        prop_assert_eq!(removed, index < model.len());
                        if index < model.len() {
                            model.remove(index);
                        }
                    }
                }
                prop_assert_eq!(cart.len(), model.len());
            }

            let expected: f64 = model.iter().sum();
            prop_assert_eq!(cart.subtotal(), expected);
        }
    }
}
