//! Single Responsibility: the cart holds products and totals them, nothing else.
//! Printing an invoice and talking to a database each get their own type.

use itertools::Itertools;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub name: String,
    pub price: f64,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct ShoppingCart {
    products: Vec<Product>,
}

impl ShoppingCart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_product(&mut self, product: Product) {
        self.products.push(product);
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn total_bill(&self) -> f64 {
        self.products.iter().fold(0.0, |total, p| total + p.price)
    }
}

impl FromIterator<Product> for ShoppingCart {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Self {
            products: iter.into_iter().collect(),
        }
    }
}

/// Renders a cart as an invoice. Borrows, never owns, the cart.
pub struct InvoicePrinter<'a> {
    cart: &'a ShoppingCart,
}

impl<'a> InvoicePrinter<'a> {
    pub fn new(cart: &'a ShoppingCart) -> Self {
        Self { cart }
    }

    pub fn invoice(&self) -> String {
        let lines = self
            .cart
            .products()
            .iter()
            .map(|p| format!("{} : {}", p.name, p.price));

        std::iter::once("Invoice".to_string())
            .chain(lines)
            .chain(std::iter::once(format!("Total Bill : {}", self.cart.total_bill())))
            .join("\n")
    }

    pub fn print_invoice(&self) {
        println!("{}", self.invoice());
    }
}

pub struct DbConnection<'a> {
    cart: &'a ShoppingCart,
}

impl<'a> DbConnection<'a> {
    pub fn new(cart: &'a ShoppingCart) -> Self {
        Self { cart }
    }

    pub fn connect(&self) -> &'static str {
        tracing::debug!(products = self.cart.products().len(), "opening database connection");
        "Connecting to database"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample_cart() -> ShoppingCart {
        let mut cart = ShoppingCart::new();
        cart.add_product(Product::new("Product1", 100.0));
        cart.add_product(Product::new("Product2", 200.0));
        cart
    }

    #[test]
    fn empty_cart_totals_zero() {
        assert_eq!(ShoppingCart::new().total_bill(), 0.0);
    }

    #[test]
    fn products_keep_insertion_order() {
        let cart = sample_cart();
        let names: Vec<&str> = cart.products().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Product1", "Product2"]);
        assert_eq!(cart.total_bill(), 300.0);
    }

    #[test]
    fn invoice_layout() {
        let cart = sample_cart();
        assert_eq!(
            InvoicePrinter::new(&cart).invoice(),
            "Invoice\nProduct1 : 100\nProduct2 : 200\nTotal Bill : 300"
        );
    }

    #[test]
    fn invoice_prints_fractional_prices() {
        let cart: ShoppingCart = vec![Product::new("Tea", 2.5)].into_iter().collect();
        assert!(InvoicePrinter::new(&cart).invoice().ends_with("Tea : 2.5\nTotal Bill : 2.5"));
    }

    #[test]
    fn db_connection_message() {
        let cart = sample_cart();
        assert_eq!(DbConnection::new(&cart).connect(), "Connecting to database");
    }

    proptest! {
        #[test]
        fn total_ignores_order(a in 0.0f64..1e6, b in 0.0f64..1e6) {
            let ab: ShoppingCart = vec![Product::new("a", a), Product::new("b", b)].into_iter().collect();
            let ba: ShoppingCart = vec![Product::new("b", b), Product::new("a", a)].into_iter().collect();
            prop_assert_eq!(ab.total_bill(), ba.total_bill());
        }
    }
}
