use uuid::Uuid;

use super::catalog::{MenuItem, MenuItemDraft, Outlet, OutletDraft, OutletSearch};
use super::errors::DomainError;
use super::order::{DateRange, OrderFilter, OrderRecord, StatusChange};

/// Persistence contract for orders. Implementations persist records
/// verbatim; all invariants are enforced by the services above.
pub trait OrderRepository: Send + Sync + 'static {
    fn insert(&self, order: &OrderRecord) -> Result<(), DomainError>;

    fn find_by_id(&self, id: Uuid) -> Result<Option<OrderRecord>, DomainError>;

    /// Orders of one user, newest first, items included.
    fn list_for_user(&self, user_id: Uuid) -> Result<Vec<OrderRecord>, DomainError>;

    /// Filtered admin listing, newest first, items included.
    fn list_filtered(&self, filter: &OrderFilter) -> Result<Vec<OrderRecord>, DomainError>;

    /// Apply a validated status change to a single order row and return the
    /// updated record. Fails with `NotFound` if the order vanished.
    fn apply_status(&self, id: Uuid, change: &StatusChange) -> Result<OrderRecord, DomainError>;

    /// Orders within the range, oldest first, items included. Feed for the
    /// analytics folds.
    fn load_in_range(&self, range: &DateRange) -> Result<Vec<OrderRecord>, DomainError>;
}

/// Persistence contract for outlets and their menus.
pub trait CatalogRepository: Send + Sync + 'static {
    fn list_outlets(&self) -> Result<Vec<Outlet>, DomainError>;

    fn search_outlets(&self, search: &OutletSearch) -> Result<Vec<Outlet>, DomainError>;

    fn find_outlet(&self, id: Uuid) -> Result<Option<Outlet>, DomainError>;

    fn insert_outlet(&self, outlet: &Outlet) -> Result<(), DomainError>;

    /// Full-field update; `None` when no outlet has this id.
    fn update_outlet(&self, id: Uuid, draft: &OutletDraft) -> Result<Option<Outlet>, DomainError>;

    /// `true` when a row was deleted.
    fn delete_outlet(&self, id: Uuid) -> Result<bool, DomainError>;

    fn menu_for_outlet(&self, outlet_id: Uuid) -> Result<Vec<MenuItem>, DomainError>;

    fn insert_menu_item(&self, item: &MenuItem) -> Result<(), DomainError>;

    /// Update matching both the outlet and the item id, as the admin routes
    /// address menu items through their outlet.
    fn update_menu_item(
        &self,
        outlet_id: Uuid,
        item_id: Uuid,
        draft: &MenuItemDraft,
    ) -> Result<Option<MenuItem>, DomainError>;

    fn delete_menu_item(&self, outlet_id: Uuid, item_id: Uuid) -> Result<bool, DomainError>;

    fn count_open_outlets(&self) -> Result<i64, DomainError>;
}
