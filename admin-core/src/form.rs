use jiff::Timestamp;
use rust_decimal::Decimal;

use payloads::{
    CategoryId, Order, OrderLine, OrderStatus, ProductId, UserId, requests,
};

/// Which modal a CRUD page is showing, if any. At most one of create or
/// update is open per page.
///
/// Carrying the source id inside `Update` keeps the invariant that an
/// update draft always knows which row it came from; a create draft has no
/// id until the backend assigns one.
#[derive(Debug, Clone, PartialEq)]
pub enum FormMode<Id, D> {
    Closed,
    Create(D),
    Update { id: Id, draft: D },
}

impl<Id, D> FormMode<Id, D> {
    pub fn is_open(&self) -> bool {
        !matches!(self, FormMode::Closed)
    }

    pub fn is_update(&self) -> bool {
        matches!(self, FormMode::Update { .. })
    }

    pub fn draft(&self) -> Option<&D> {
        match self {
            FormMode::Closed => None,
            FormMode::Create(draft) => Some(draft),
            FormMode::Update { draft, .. } => Some(draft),
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut D> {
        match self {
            FormMode::Closed => None,
            FormMode::Create(draft) => Some(draft),
            FormMode::Update { draft, .. } => Some(draft),
        }
    }

    /// Open the create modal with a fresh draft.
    pub fn open_create(&mut self, draft: D) {
        *self = FormMode::Create(draft);
    }

    /// Open the update modal over an existing row.
    pub fn open_update(&mut self, id: Id, draft: D) {
        *self = FormMode::Update { id, draft };
    }

    /// Explicit cancel or successful submit; the draft is discarded.
    pub fn close(&mut self) {
        *self = FormMode::Closed;
    }

    /// Apply a submit outcome: success closes the modal, failure keeps it
    /// open with the draft intact so the user can correct and retry.
    pub fn resolve_submit<T, E>(&mut self, outcome: &Result<T, E>) {
        if outcome.is_ok() {
            self.close();
        }
    }
}

/// Draft validation failures, surfaced next to the form instead of being
/// submitted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{0} must be a number")]
    NotANumber(&'static str),
    #[error("{0} must be at least 1")]
    BelowMinimum(&'static str),
}

/// String-backed draft behind the comment create modal; values mirror the
/// raw input and select contents.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommentForm {
    pub text: String,
    pub user_id: String,
    pub product_id: String,
}

impl CommentForm {
    /// `posted_at` is passed in rather than read from a clock so submit
    /// behavior is deterministic under test.
    pub fn to_request(
        &self,
        posted_at: Timestamp,
    ) -> Result<requests::CreateComment, FormError> {
        if self.text.trim().is_empty() {
            return Err(FormError::Missing("text"));
        }
        if self.user_id.is_empty() {
            return Err(FormError::Missing("user"));
        }
        if self.product_id.is_empty() {
            return Err(FormError::Missing("product"));
        }
        Ok(requests::CreateComment {
            text: self.text.trim().to_string(),
            user_id: UserId(self.user_id.clone()),
            product_id: ProductId(self.product_id.clone()),
            posted_at,
        })
    }
}

/// One editable product line in the order modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineForm {
    pub product_id: String,
    pub quantity: String,
}

impl Default for LineForm {
    fn default() -> Self {
        LineForm {
            product_id: String::new(),
            quantity: "1".to_string(),
        }
    }
}

/// Draft behind the order modal. `status` is only submitted on update;
/// creation leaves the status assignment to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderForm {
    pub user_id: String,
    pub status: OrderStatus,
    pub lines: Vec<LineForm>,
}

impl Default for OrderForm {
    fn default() -> Self {
        OrderForm {
            user_id: String::new(),
            status: OrderStatus::Pending,
            lines: vec![LineForm::default()],
        }
    }
}

impl OrderForm {
    /// Prefill from an existing order for the update modal.
    pub fn from_order(order: &Order) -> Self {
        OrderForm {
            user_id: order.user_id.0.clone(),
            status: order.status,
            lines: order
                .lines
                .iter()
                .map(|line| LineForm {
                    product_id: line.product_id.0.clone(),
                    quantity: line.quantity.to_string(),
                })
                .collect(),
        }
    }

    pub fn add_line(&mut self) {
        self.lines.push(LineForm::default());
    }

    /// Remove one line. Removing the last remaining line is allowed; the
    /// draft may hold no lines at all.
    pub fn remove_line(&mut self, index: usize) {
        if index < self.lines.len() {
            self.lines.remove(index);
        }
    }

    pub fn set_line_product(&mut self, index: usize, product_id: String) {
        if let Some(line) = self.lines.get_mut(index) {
            line.product_id = product_id;
        }
    }

    pub fn set_line_quantity(&mut self, index: usize, quantity: String) {
        if let Some(line) = self.lines.get_mut(index) {
            line.quantity = quantity;
        }
    }

    pub fn to_create_request(
        &self,
    ) -> Result<requests::CreateOrder, FormError> {
        Ok(requests::CreateOrder {
            user_id: self.user_id_checked()?,
            lines: self.lines_checked()?,
        })
    }

    pub fn to_update_request(
        &self,
    ) -> Result<requests::UpdateOrder, FormError> {
        Ok(requests::UpdateOrder {
            user_id: self.user_id_checked()?,
            status: self.status,
            lines: self.lines_checked()?,
        })
    }

    fn user_id_checked(&self) -> Result<UserId, FormError> {
        if self.user_id.is_empty() {
            return Err(FormError::Missing("user"));
        }
        Ok(UserId(self.user_id.clone()))
    }

    /// An empty line list is valid; each present line needs a product and
    /// a positive quantity.
    fn lines_checked(&self) -> Result<Vec<OrderLine>, FormError> {
        self.lines
            .iter()
            .map(|line| {
                if line.product_id.is_empty() {
                    return Err(FormError::Missing("product"));
                }
                let quantity: u32 = line
                    .quantity
                    .trim()
                    .parse()
                    .map_err(|_| FormError::NotANumber("quantity"))?;
                if quantity == 0 {
                    return Err(FormError::BelowMinimum("quantity"));
                }
                Ok(OrderLine {
                    product_id: ProductId(line.product_id.clone()),
                    quantity,
                })
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl UserForm {
    pub fn to_request(&self) -> Result<requests::CreateUser, FormError> {
        if self.first_name.trim().is_empty() {
            return Err(FormError::Missing("first name"));
        }
        if self.last_name.trim().is_empty() {
            return Err(FormError::Missing("last name"));
        }
        if self.email.trim().is_empty() {
            return Err(FormError::Missing("email"));
        }
        Ok(requests::CreateUser {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    /// Empty string means no category.
    pub category_id: String,
}

impl ProductForm {
    pub fn to_request(&self) -> Result<requests::CreateProduct, FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::Missing("name"));
        }
        let price: Decimal = self
            .price
            .trim()
            .parse()
            .map_err(|_| FormError::NotANumber("price"))?;
        let category_id = if self.category_id.is_empty() {
            None
        } else {
            Some(CategoryId(self.category_id.clone()))
        };
        Ok(requests::CreateProduct {
            name: self.name.trim().to_string(),
            price,
            category_id,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryForm {
    pub name: String,
}

impl CategoryForm {
    pub fn to_request(&self) -> Result<requests::CreateCategory, FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::Missing("name"));
        }
        Ok(requests::CreateCategory {
            name: self.name.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use payloads::OrderId;

    #[test]
    fn test_form_mode_transitions() {
        let mut mode: FormMode<OrderId, OrderForm> = FormMode::Closed;
        assert!(!mode.is_open());

        mode.open_create(OrderForm::default());
        assert!(mode.is_open());
        assert!(!mode.is_update());

        mode.close();
        assert_eq!(mode, FormMode::Closed);

        mode.open_update(
            OrderId("o1".to_string()),
            OrderForm {
                user_id: "u1".to_string(),
                ..OrderForm::default()
            },
        );
        assert!(mode.is_update());
        assert_eq!(mode.draft().map(|d| d.user_id.as_str()), Some("u1"));
    }

    #[test]
    fn test_failed_submit_keeps_modal_open_with_draft() {
        let mut mode: FormMode<OrderId, OrderForm> = FormMode::Closed;
        let draft = OrderForm {
            user_id: "u1".to_string(),
            ..OrderForm::default()
        };
        mode.open_update(OrderId("o1".to_string()), draft);

        let outcome: Result<(), &str> = Err("backend rejected it");
        mode.resolve_submit(&outcome);

        assert!(mode.is_update());
        assert_eq!(mode.draft().map(|d| d.user_id.as_str()), Some("u1"));

        let outcome: Result<(), &str> = Ok(());
        mode.resolve_submit(&outcome);
        assert_eq!(mode, FormMode::Closed);
    }

    #[test]
    fn test_comment_form_requires_all_fields() {
        let now = Timestamp::UNIX_EPOCH;
        let mut form = CommentForm::default();
        assert_eq!(
            form.to_request(now).unwrap_err(),
            FormError::Missing("text")
        );

        form.text = "Great keyboard".to_string();
        assert_eq!(
            form.to_request(now).unwrap_err(),
            FormError::Missing("user")
        );

        form.user_id = "u1".to_string();
        form.product_id = "p1".to_string();
        let request = form.to_request(now).unwrap();
        assert_eq!(request.text, "Great keyboard");
        assert_eq!(request.user_id, UserId("u1".to_string()));
    }

    #[test]
    fn test_order_form_line_editing() {
        let mut form = OrderForm::default();
        assert_eq!(form.lines.len(), 1);

        form.add_line();
        form.set_line_product(0, "p1".to_string());
        form.set_line_product(1, "p2".to_string());
        form.set_line_quantity(1, "3".to_string());
        form.user_id = "u1".to_string();

        let request = form.to_create_request().unwrap();
        assert_eq!(request.lines.len(), 2);
        assert_eq!(request.lines[1].quantity, 3);

        form.remove_line(0);
        assert_eq!(form.lines.len(), 1);
        assert_eq!(form.lines[0].product_id, "p2");
    }

    #[test]
    fn test_order_form_allows_removing_last_line() {
        let mut form = OrderForm {
            user_id: "u1".to_string(),
            ..OrderForm::default()
        };
        form.remove_line(0);
        assert!(form.lines.is_empty());

        // An empty line list still submits; the backend prices it at zero.
        let request = form.to_create_request().unwrap();
        assert!(request.lines.is_empty());
    }

    #[test]
    fn test_order_form_rejects_bad_quantities() {
        let mut form = OrderForm {
            user_id: "u1".to_string(),
            ..OrderForm::default()
        };
        form.set_line_product(0, "p1".to_string());

        form.set_line_quantity(0, "zero".to_string());
        assert_eq!(
            form.to_create_request().unwrap_err(),
            FormError::NotANumber("quantity")
        );

        form.set_line_quantity(0, "0".to_string());
        assert_eq!(
            form.to_create_request().unwrap_err(),
            FormError::BelowMinimum("quantity")
        );
    }

    #[test]
    fn test_order_form_prefills_from_order() {
        use jiff::Timestamp;
        use rust_decimal::Decimal;

        let order = Order {
            id: OrderId("o1".to_string()),
            user_id: UserId("u1".to_string()),
            status: OrderStatus::Shipped,
            lines: vec![OrderLine {
                product_id: ProductId("p1".to_string()),
                quantity: 2,
            }],
            total_price: Decimal::new(999, 2),
            placed_at: Timestamp::UNIX_EPOCH,
        };

        let form = OrderForm::from_order(&order);
        assert_eq!(form.user_id, "u1");
        assert_eq!(form.status, OrderStatus::Shipped);
        assert_eq!(form.lines[0].quantity, "2");
    }

    #[test]
    fn test_product_form_price_parsing() {
        let mut form = ProductForm {
            name: "Keyboard".to_string(),
            price: "abc".to_string(),
            ..ProductForm::default()
        };
        assert_eq!(
            form.to_request().unwrap_err(),
            FormError::NotANumber("price")
        );

        form.price = "49.90".to_string();
        let request = form.to_request().unwrap();
        assert_eq!(request.price.to_string(), "49.90");
        assert_eq!(request.category_id, None);
    }
}
