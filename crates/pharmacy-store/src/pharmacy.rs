//! # Pharmacy
//!
//! The three stores opened together from one [`StoreConfig`].
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Pharmacy::open(&config)                                                │
//! │       │                                                                 │
//! │       ├──► MedicineStore  (config.medicine_path())                     │
//! │       ├──► CustomerStore  (config.customer_path())                     │
//! │       └──► OrderStore     (config.order_path(), config.references)     │
//! │                                                                         │
//! │  place_order() hands the order store read-only views of the other two. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use pharmacy_core::{Money, Order, OrderForm};
use serde::Serialize;
use tracing::{info, warn};

use crate::config::StoreConfig;
use crate::error::StoreResult;
use crate::repository::{CustomerStore, MedicineStore, OrderChoices, OrderStore};

/// Counts and stock value across the three stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub medicines: usize,
    pub customers: usize,
    pub orders: usize,
    /// `None` when the total does not fit in [`Money`].
    pub stock_value: Option<Money>,
}

/// All three stores.
///
/// ## Example
/// ```rust,no_run
/// use pharmacy_core::OrderForm;
/// use pharmacy_store::{Pharmacy, StoreConfig};
///
/// let mut pharmacy = Pharmacy::open(&StoreConfig::new("./data"))?;
///
/// let choices = pharmacy.order_choices();
/// if !choices.is_incomplete() {
///     pharmacy.place_order_form(&OrderForm::new(
///         "100",
///         &choices.customer_ids[0],
///         &choices.medicine_ids[0],
///         "1",
///     ))?;
/// }
/// # Ok::<(), pharmacy_store::StoreError>(())
/// ```
#[derive(Debug)]
pub struct Pharmacy {
    config: StoreConfig,
    medicines: MedicineStore,
    customers: CustomerStore,
    orders: OrderStore,
}

impl Pharmacy {
    /// Opens and loads every store.
    pub fn open(config: &StoreConfig) -> StoreResult<Self> {
        let medicines = MedicineStore::open(config.medicine_path(), config.malformed_lines)?;
        let customers = CustomerStore::open(config.customer_path(), config.malformed_lines)?;
        let orders = OrderStore::open(
            config.order_path(),
            config.malformed_lines,
            config.references,
        )?;

        info!(
            data_dir = %config.data_dir.display(),
            medicines = medicines.len(),
            customers = customers.len(),
            orders = orders.len(),
            "Pharmacy opened"
        );

        Ok(Pharmacy {
            config: config.clone(),
            medicines,
            customers,
            orders,
        })
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn medicines(&self) -> &MedicineStore {
        &self.medicines
    }

    pub fn medicines_mut(&mut self) -> &mut MedicineStore {
        &mut self.medicines
    }

    pub fn customers(&self) -> &CustomerStore {
        &self.customers
    }

    pub fn customers_mut(&mut self) -> &mut CustomerStore {
        &mut self.customers
    }

    pub fn orders(&self) -> &OrderStore {
        &self.orders
    }

    /// Current customer and medicine pick-lists.
    pub fn order_choices(&self) -> OrderChoices {
        OrderStore::choices(&self.customers, &self.medicines)
    }

    /// Places an order under the configured reference policy.
    pub fn place_order(&mut self, order: Order) -> StoreResult<Order> {
        self.orders.place(order, &self.customers, &self.medicines)
    }

    /// Parses raw form text and places the order.
    pub fn place_order_form(&mut self, form: &OrderForm) -> StoreResult<Order> {
        self.orders.place_form(form, &self.customers, &self.medicines)
    }

    /// Reloads every store from disk.
    pub fn reload(&mut self) -> StoreResult<()> {
        self.medicines.load()?;
        self.customers.load()?;
        self.orders.load()?;
        Ok(())
    }

    /// Total lines skipped across the three most recent loads.
    pub fn skipped_lines(&self) -> usize {
        self.medicines.load_report().skipped.len()
            + self.customers.load_report().skipped.len()
            + self.orders.load_report().skipped.len()
    }

    pub fn summary(&self) -> Summary {
        let stock_value = self.medicines.total_stock_value();
        if stock_value.is_none() {
            warn!(
                medicines = self.medicines.len(),
                "Stock value overflows and is not reported"
            );
        }

        Summary {
            medicines: self.medicines.len(),
            customers: self.customers.len(),
            orders: self.orders.len(),
            stock_value,
        }
    }
}
