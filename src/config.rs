use std::env;

/// Runtime settings read from the environment at startup.
#[derive(Debug, Clone, Copy)]
pub struct ServiceConfig {
    /// When set, checkout rejects a `total_amount` that does not equal the
    /// sum of its line items. When cleared the caller-supplied total is
    /// accepted as-is. The stored total is never recomputed either way.
    pub verify_order_total: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            verify_order_total: true,
        }
    }
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        Self {
            verify_order_total: env::var("VERIFY_ORDER_TOTAL")
                .map(|v| !matches!(v.as_str(), "false" | "0" | "off"))
                .unwrap_or(true),
        }
    }
}
