//! # Order Store
//!
//! Orders link a customer to a medicine by id.
//!
//! ## Placing an Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  customers.identifiers() ──┐                                           │
//! │                            ├──► choices() ──► pick-lists for the user  │
//! │  medicines.identifiers() ──┘                                           │
//! │                                                                         │
//! │  OrderForm ──► parse ──► place()                                       │
//! │                            │                                            │
//! │                            ├─ Unchecked: store as given                │
//! │                            └─ Enforce:   ids must be in the lists      │
//! │                                   │                                     │
//! │                                   ▼                                     │
//! │                           append + rewrite Order.txt                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The identifier lists are read at the moment they're asked for, so a
//! customer added a second ago shows up.
//!
//! ## File Format
//! ```text
//! order_id,customer_id,medicine_id,quantity
//! 100,10,1,3
//! ```

use std::path::Path;

use pharmacy_core::validation::{check_reference, parse_integer, ValidationResult};
use pharmacy_core::{Order, OrderForm};
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::{MalformedLinePolicy, ReferencePolicy};
use crate::error::StoreResult;
use crate::record::Record;
use crate::store::{IdentifierSource, LoadReport, Store};

impl Record for Order {
    const ENTITY: &'static str = "Order";
    const FIELDS: &'static [&'static str] =
        &["order_id", "customer_id", "medicine_id", "quantity"];

    fn identifier(&self) -> i64 {
        self.order_id
    }

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.order_id.to_string(),
            self.customer_id.to_string(),
            self.medicine_id.to_string(),
            self.quantity.to_string(),
        ]
    }

    fn from_fields(fields: &[String]) -> ValidationResult<Self> {
        Ok(Order {
            order_id: parse_integer("order_id", &fields[0])?,
            customer_id: parse_integer("customer_id", &fields[1])?,
            medicine_id: parse_integer("medicine_id", &fields[2])?,
            quantity: parse_integer("quantity", &fields[3])?,
        })
    }

    fn validate(&self) -> ValidationResult<()> {
        Ok(())
    }
}

// =============================================================================
// Choices
// =============================================================================

/// Pick-lists offered when placing an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrderChoices {
    pub customer_ids: Vec<String>,
    pub medicine_ids: Vec<String>,
}

impl OrderChoices {
    /// True when there is nothing to order or nobody to order for.
    pub fn is_incomplete(&self) -> bool {
        self.customer_ids.is_empty() || self.medicine_ids.is_empty()
    }
}

// =============================================================================
// Order Store
// =============================================================================

/// The order store.
///
/// ## Example
/// ```rust,no_run
/// use pharmacy_core::{Customer, Medicine, Money, OrderForm};
/// use pharmacy_store::{
///     CustomerStore, MalformedLinePolicy, MedicineStore, OrderStore, ReferencePolicy,
/// };
///
/// let policy = MalformedLinePolicy::Skip;
/// let mut medicines = MedicineStore::open("data/Medicine.txt", policy)?;
/// let mut customers = CustomerStore::open("data/Customer.txt", policy)?;
/// let mut orders = OrderStore::open("data/Order.txt", policy, ReferencePolicy::Enforce)?;
///
/// medicines.add(Medicine::new(1, "Aspirin", 50, Money::from_cents(500)))?;
/// customers.add(Customer::new(10, "Jane Doe", "555-0101"))?;
///
/// let choices = OrderStore::choices(&customers, &medicines);
/// assert_eq!(choices.customer_ids, vec!["10"]);
///
/// orders.place_form(&OrderForm::new("100", "10", "1", "3"), &customers, &medicines)?;
/// # Ok::<(), pharmacy_store::StoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct OrderStore {
    store: Store<Order>,
    references: ReferencePolicy,
}

impl OrderStore {
    /// Creates the store and loads its backing file.
    pub fn open(
        path: impl AsRef<Path>,
        malformed_lines: MalformedLinePolicy,
        references: ReferencePolicy,
    ) -> StoreResult<Self> {
        Ok(OrderStore {
            store: Store::open(path.as_ref(), malformed_lines)?,
            references,
        })
    }

    /// Current customer and medicine identifiers, in insertion order.
    pub fn choices(
        customers: &dyn IdentifierSource,
        medicines: &dyn IdentifierSource,
    ) -> OrderChoices {
        OrderChoices {
            customer_ids: customers.identifiers(),
            medicine_ids: medicines.identifiers(),
        }
    }

    /// Appends an order without looking at its customer or medicine ids.
    pub fn add(&mut self, order: Order) -> StoreResult<Order> {
        self.store.add(order)
    }

    /// Appends an order, checking its ids when the policy says so.
    ///
    /// ## Returns
    /// * `Err(StoreError::DanglingReference)` - Enforce policy and an id
    ///   isn't in its store; nothing changed
    /// * otherwise as [`Store::add`]
    pub fn place(
        &mut self,
        order: Order,
        customers: &dyn IdentifierSource,
        medicines: &dyn IdentifierSource,
    ) -> StoreResult<Order> {
        if self.references.is_enforced() {
            check_reference(customers.entity(), order.customer_id, &customers.identifiers())
                .inspect_err(|_| {
                    warn!(
                        order_id = order.order_id,
                        customer_id = order.customer_id,
                        "Unknown customer"
                    )
                })?;
            check_reference(medicines.entity(), order.medicine_id, &medicines.identifiers())
                .inspect_err(|_| {
                    warn!(
                        order_id = order.order_id,
                        medicine_id = order.medicine_id,
                        "Unknown medicine"
                    )
                })?;
        }

        debug!(
            order_id = order.order_id,
            customer_id = order.customer_id,
            medicine_id = order.medicine_id,
            references = %self.references,
            "Placing order"
        );
        self.add(order)
    }

    /// Parses raw form text, then places the order.
    pub fn place_form(
        &mut self,
        form: &OrderForm,
        customers: &dyn IdentifierSource,
        medicines: &dyn IdentifierSource,
    ) -> StoreResult<Order> {
        let order = form.parse()?;
        self.place(order, customers, medicines)
    }

    /// First order with the given order id.
    pub fn find(&self, order_id: i64) -> Option<&Order> {
        self.store.list().iter().find(|o| o.order_id == order_id)
    }

    pub fn list(&self) -> &[Order] {
        self.store.list()
    }

    pub fn identifiers(&self) -> Vec<String> {
        self.store.identifiers()
    }

    pub fn load(&mut self) -> StoreResult<&LoadReport> {
        self.store.load()
    }

    pub fn save(&self) -> StoreResult<()> {
        self.store.save()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn path(&self) -> &Path {
        self.store.path()
    }

    pub fn load_report(&self) -> &LoadReport {
        self.store.load_report()
    }

    pub fn references(&self) -> ReferencePolicy {
        self.references
    }
}

impl IdentifierSource for OrderStore {
    fn entity(&self) -> &'static str {
        Order::ENTITY
    }

    fn identifiers(&self) -> Vec<String> {
        self.store.identifiers()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::record::{from_line, to_line};
    use crate::repository::{CustomerStore, MedicineStore};
    use pharmacy_core::{Customer, Medicine, Money};
    use tempfile::TempDir;

    struct Fixture {
        _dir: TempDir,
        medicines: MedicineStore,
        customers: CustomerStore,
        orders: OrderStore,
    }

    fn fixture(references: ReferencePolicy) -> Fixture {
        let dir = TempDir::new().unwrap();
        let policy = MalformedLinePolicy::Skip;

        let mut medicines = MedicineStore::open(dir.path().join("Medicine.txt"), policy).unwrap();
        medicines
            .add(Medicine::new(1, "Aspirin", 50, Money::from_cents(500)))
            .unwrap();

        let mut customers = CustomerStore::open(dir.path().join("Customer.txt"), policy).unwrap();
        customers
            .add(Customer::new(10, "Jane Doe", "555-0101"))
            .unwrap();

        let orders = OrderStore::open(dir.path().join("Order.txt"), policy, references).unwrap();

        Fixture {
            _dir: dir,
            medicines,
            customers,
            orders,
        }
    }

    #[test]
    fn test_line_format() {
        let order = Order::new(100, 10, 1, 3);
        assert_eq!(to_line(&order), "100,10,1,3");
        assert_eq!(from_line::<Order>("100,10,1,3").unwrap(), order);
    }

    #[test]
    fn test_choices_follow_stores() {
        let mut f = fixture(ReferencePolicy::Unchecked);

        let choices = OrderStore::choices(&f.customers, &f.medicines);
        assert_eq!(choices.customer_ids, vec!["10"]);
        assert_eq!(choices.medicine_ids, vec!["1"]);

        f.customers.add(Customer::new(11, "John Roe", "")).unwrap();
        let choices = OrderStore::choices(&f.customers, &f.medicines);
        assert_eq!(choices.customer_ids, vec!["10", "11"]);
        assert!(!choices.is_incomplete());
    }

    #[test]
    fn test_unchecked_accepts_dangling_ids() {
        let mut f = fixture(ReferencePolicy::Unchecked);

        f.orders
            .place(Order::new(100, 99, 1, 3), &f.customers, &f.medicines)
            .unwrap();

        assert_eq!(f.orders.len(), 1);
    }

    #[test]
    fn test_enforce_rejects_dangling_ids() {
        let mut f = fixture(ReferencePolicy::Enforce);

        let err = f
            .orders
            .place(Order::new(100, 99, 1, 3), &f.customers, &f.medicines)
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::DanglingReference { ref entity, id: 99 } if entity == "Customer"
        ));

        let err = f
            .orders
            .place(Order::new(100, 10, 7, 3), &f.customers, &f.medicines)
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::DanglingReference { ref entity, id: 7 } if entity == "Medicine"
        ));

        assert!(f.orders.is_empty());
        assert!(!f.orders.path().exists());

        f.orders
            .place(Order::new(100, 10, 1, 3), &f.customers, &f.medicines)
            .unwrap();
        assert_eq!(f.orders.identifiers(), vec!["100"]);
    }

    #[test]
    fn test_place_form_rejects_text_quantity() {
        let mut f = fixture(ReferencePolicy::Enforce);

        let err = f
            .orders
            .place_form(&OrderForm::new("100", "10", "1", "three"), &f.customers, &f.medicines)
            .unwrap_err();

        assert!(matches!(err, StoreError::Validation(_)));
        assert!(f.orders.is_empty());
    }

    #[test]
    fn test_plain_add_skips_reference_check() {
        let mut f = fixture(ReferencePolicy::Enforce);
        f.orders.add(Order::new(101, 42, 42, 1)).unwrap();
        assert_eq!(f.orders.find(101), Some(&Order::new(101, 42, 42, 1)));
        assert_eq!(f.orders.len(), 1);
    }
}
