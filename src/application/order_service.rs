use bigdecimal::{BigDecimal, Zero};
use chrono::Utc;
use uuid::Uuid;

use crate::config::ServiceConfig;
use crate::domain::auth::Identity;
use crate::domain::errors::DomainError;
use crate::domain::order::{CreateOrderInput, OrderFilter, OrderRecord, StatusChange};
use crate::domain::ports::OrderRepository;
use crate::domain::status::{ensure_admin_transition, ensure_cancellable, OrderStatus, PaymentStatus};

/// The order lifecycle manager: owns checkout validation, the status state
/// machine, and the ownership rule. Stateless apart from the repository, so
/// any number of request workers may share it.
pub struct OrderService<R> {
    repo: R,
    config: ServiceConfig,
}

impl<R: OrderRepository> OrderService<R> {
    pub fn new(repo: R, config: ServiceConfig) -> Self {
        Self { repo, config }
    }

    pub fn create_order(
        &self,
        identity: &Identity,
        input: CreateOrderInput,
    ) -> Result<OrderRecord, DomainError> {
        self.validate_checkout(&input)?;

        let order = OrderRecord {
            id: Uuid::new_v4(),
            user_id: identity.user_id,
            items: input.items,
            total_amount: input.total_amount,
            delivery_address: input.delivery_address,
            payment_method: input.payment_method,
            payment_status: PaymentStatus::Pending,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
            delivered_at: None,
            cancelled_at: None,
        };
        self.repo.insert(&order)?;
        log::info!("order {} created for user {}", order.id, order.user_id);
        Ok(order)
    }

    pub fn get_order(&self, identity: &Identity, id: Uuid) -> Result<OrderRecord, DomainError> {
        let order = self
            .repo
            .find_by_id(id)?
            .ok_or(DomainError::NotFound("Order"))?;
        identity.authorize_order_access(order.user_id)?;
        Ok(order)
    }

    /// All orders of the calling user, newest first. A fresh query per call,
    /// no cursor state.
    pub fn list_orders_for_user(&self, identity: &Identity) -> Result<Vec<OrderRecord>, DomainError> {
        self.repo.list_for_user(identity.user_id)
    }

    /// Admin listing with optional status and date-range filters, newest
    /// first, unpaginated.
    pub fn admin_list_orders(
        &self,
        identity: &Identity,
        filter: &OrderFilter,
    ) -> Result<Vec<OrderRecord>, DomainError> {
        identity.require_admin()?;
        self.repo.list_filtered(filter)
    }

    /// Admin override: move a non-terminal order to any status. Entering
    /// `delivered` or `cancelled` stamps the matching timestamp exactly once.
    pub fn update_order_status(
        &self,
        identity: &Identity,
        id: Uuid,
        new_status: OrderStatus,
    ) -> Result<OrderRecord, DomainError> {
        identity.require_admin()?;
        let current = self
            .repo
            .find_by_id(id)?
            .ok_or(DomainError::NotFound("Order"))?;
        ensure_admin_transition(current.status, new_status)?;
        let updated = self
            .repo
            .apply_status(id, &StatusChange::entering(new_status, Utc::now()))?;
        log::info!("order {} moved {} -> {}", id, current.status, new_status);
        Ok(updated)
    }

    /// Owner (or admin) cancellation, allowed only from `pending` or
    /// `preparing`. Repeating the call on a cancelled order fails with the
    /// same transition error, never silently succeeds.
    pub fn cancel_order(&self, identity: &Identity, id: Uuid) -> Result<OrderRecord, DomainError> {
        let order = self
            .repo
            .find_by_id(id)?
            .ok_or(DomainError::NotFound("Order"))?;
        identity.authorize_order_access(order.user_id)?;
        ensure_cancellable(order.status)?;
        let updated = self
            .repo
            .apply_status(id, &StatusChange::entering(OrderStatus::Cancelled, Utc::now()))?;
        log::info!("order {} cancelled", id);
        Ok(updated)
    }

    fn validate_checkout(&self, input: &CreateOrderInput) -> Result<(), DomainError> {
        if input.items.is_empty() {
            return Err(DomainError::Validation(
                "order must contain at least one item".to_string(),
            ));
        }
        for item in &input.items {
            if item.quantity < 1 {
                return Err(DomainError::Validation(format!(
                    "quantity for '{}' must be at least 1",
                    item.name
                )));
            }
            if item.unit_price < BigDecimal::zero() {
                return Err(DomainError::Validation(format!(
                    "unit price for '{}' must not be negative",
                    item.name
                )));
            }
        }
        if input.delivery_address.trim().is_empty() {
            return Err(DomainError::Validation(
                "delivery address is required".to_string(),
            ));
        }
        if input.total_amount < BigDecimal::zero() {
            return Err(DomainError::Validation(
                "total amount must be a positive number".to_string(),
            ));
        }
        if self.config.verify_order_total {
            let expected = input.line_item_total();
            if input.total_amount != expected {
                return Err(DomainError::Validation(format!(
                    "total amount {} does not match line item total {}",
                    input.total_amount, expected
                )));
            }
        }
        Ok(())
    }
}
