use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::errors::DomainError;

/// Lifecycle of an order. The happy path moves forward only
/// (pending → preparing → ready → delivered); `cancelled` is reachable from
/// `pending` or `preparing`. `delivered` and `cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Preparing,
    Ready,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Owners may cancel only while the kitchen has not finished the order.
    pub fn is_cancellable(&self) -> bool {
        matches!(self, OrderStatus::Pending | OrderStatus::Preparing)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "preparing" => Ok(OrderStatus::Preparing),
            "ready" => Ok(OrderStatus::Ready),
            "delivered" => Ok(OrderStatus::Delivered),
            "cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(DomainError::Validation(format!(
                "unknown order status '{}'",
                other
            ))),
        }
    }
}

/// Admin status updates may jump to any status, including backwards; the one
/// rule is that a terminal order can never be moved again.
pub fn ensure_admin_transition(from: OrderStatus, _to: OrderStatus) -> Result<(), DomainError> {
    if from.is_terminal() {
        return Err(DomainError::InvalidTransition(format!(
            "cannot change status of order in {} status",
            from
        )));
    }
    Ok(())
}

/// Cancellation is allowed only from `pending` or `preparing`. A repeated
/// cancel lands here with `from = cancelled` and fails the same way.
pub fn ensure_cancellable(from: OrderStatus) -> Result<(), DomainError> {
    if from.is_cancellable() {
        Ok(())
    } else {
        Err(DomainError::InvalidTransition(format!(
            "cannot cancel order in {} status",
            from
        )))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cod,
    Card,
    Upi,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cod => "cod",
            PaymentMethod::Card => "card",
            PaymentMethod::Upi => "upi",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cod" => Ok(PaymentMethod::Cod),
            "card" => Ok(PaymentMethod::Card),
            "upi" => Ok(PaymentMethod::Upi),
            other => Err(DomainError::Validation(format!(
                "invalid payment method '{}'",
                other
            ))),
        }
    }
}

/// Settled independently of the order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Completed => "completed",
            PaymentStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(PaymentStatus::Pending),
            "completed" => Ok(PaymentStatus::Completed),
            "failed" => Ok(PaymentStatus::Failed),
            other => Err(DomainError::Validation(format!(
                "invalid payment status '{}'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_states_are_delivered_and_cancelled() {
        assert!(OrderStatus::Delivered.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
        assert!(!OrderStatus::Pending.is_terminal());
        assert!(!OrderStatus::Preparing.is_terminal());
        assert!(!OrderStatus::Ready.is_terminal());
    }

    #[test]
    fn admin_may_move_any_non_terminal_order() {
        for from in [OrderStatus::Pending, OrderStatus::Preparing, OrderStatus::Ready] {
            for to in [
                OrderStatus::Pending,
                OrderStatus::Preparing,
                OrderStatus::Ready,
                OrderStatus::Delivered,
                OrderStatus::Cancelled,
            ] {
                assert!(ensure_admin_transition(from, to).is_ok());
            }
        }
    }

    #[test]
    fn admin_may_not_move_a_terminal_order() {
        for from in [OrderStatus::Delivered, OrderStatus::Cancelled] {
            let err = ensure_admin_transition(from, OrderStatus::Pending).unwrap_err();
            assert!(matches!(err, DomainError::InvalidTransition(_)));
        }
    }

    #[test]
    fn cancellation_allowed_only_before_ready() {
        assert!(ensure_cancellable(OrderStatus::Pending).is_ok());
        assert!(ensure_cancellable(OrderStatus::Preparing).is_ok());
        for from in [OrderStatus::Ready, OrderStatus::Delivered, OrderStatus::Cancelled] {
            assert!(ensure_cancellable(from).is_err());
        }
    }

    #[test]
    fn cancel_error_names_the_current_status() {
        let err = ensure_cancellable(OrderStatus::Delivered).unwrap_err();
        assert_eq!(err.to_string(), "cannot cancel order in delivered status");
    }

    #[test]
    fn status_round_trips_through_strings() {
        for s in ["pending", "preparing", "ready", "delivered", "cancelled"] {
            assert_eq!(s.parse::<OrderStatus>().unwrap().as_str(), s);
        }
        assert!(matches!(
            "shipped".parse::<OrderStatus>(),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn payment_method_rejects_unknown_values() {
        assert!("cod".parse::<PaymentMethod>().is_ok());
        assert!("cheque".parse::<PaymentMethod>().is_err());
    }
}
