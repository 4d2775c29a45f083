//! In-memory repository doubles for service-level tests. Behave like the
//! Diesel implementations: verbatim persistence, newest-first listings.

use std::sync::Mutex;

use uuid::Uuid;

use crate::domain::catalog::{MenuItem, MenuItemDraft, Outlet, OutletDraft, OutletSearch};
use crate::domain::errors::DomainError;
use crate::domain::order::{DateRange, OrderFilter, OrderRecord, StatusChange};
use crate::domain::ports::{CatalogRepository, OrderRepository};

#[derive(Default)]
pub struct InMemoryOrderRepository {
    orders: Mutex<Vec<OrderRecord>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn newest_first(mut matched: Vec<OrderRecord>) -> Vec<OrderRecord> {
        // reverse first so that created_at ties resolve to latest-inserted
        matched.reverse();
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        matched
    }
}

impl OrderRepository for InMemoryOrderRepository {
    fn insert(&self, order: &OrderRecord) -> Result<(), DomainError> {
        self.orders.lock().unwrap().push(order.clone());
        Ok(())
    }

    fn find_by_id(&self, id: Uuid) -> Result<Option<OrderRecord>, DomainError> {
        Ok(self
            .orders
            .lock()
            .unwrap()
            .iter()
            .find(|o| o.id == id)
            .cloned())
    }

    fn list_for_user(&self, user_id: Uuid) -> Result<Vec<OrderRecord>, DomainError> {
        let matched = self
            .orders
            .lock()
            .unwrap()
            .iter()
            .filter(|o| o.user_id == user_id)
            .cloned()
            .collect();
        Ok(Self::newest_first(matched))
    }

    fn list_filtered(&self, filter: &OrderFilter) -> Result<Vec<OrderRecord>, DomainError> {
        let matched = self
            .orders
            .lock()
            .unwrap()
            .iter()
            .filter(|o| filter.status.map_or(true, |s| o.status == s))
            .filter(|o| filter.range.contains(o.created_at))
            .cloned()
            .collect();
        Ok(Self::newest_first(matched))
    }

    fn apply_status(&self, id: Uuid, change: &StatusChange) -> Result<OrderRecord, DomainError> {
        let mut orders = self.orders.lock().unwrap();
        let order = orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or(DomainError::NotFound("Order"))?;
        order.status = change.status;
        if let Some(at) = change.delivered_at {
            order.delivered_at = Some(at);
        }
        if let Some(at) = change.cancelled_at {
            order.cancelled_at = Some(at);
        }
        Ok(order.clone())
    }

    fn load_in_range(&self, range: &DateRange) -> Result<Vec<OrderRecord>, DomainError> {
        let mut matched: Vec<OrderRecord> = self
            .orders
            .lock()
            .unwrap()
            .iter()
            .filter(|o| range.contains(o.created_at))
            .cloned()
            .collect();
        matched.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(matched)
    }
}

#[derive(Default)]
pub struct InMemoryCatalogRepository {
    outlets: Mutex<Vec<Outlet>>,
    menu_items: Mutex<Vec<MenuItem>>,
}

impl InMemoryCatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

impl CatalogRepository for InMemoryCatalogRepository {
    fn list_outlets(&self) -> Result<Vec<Outlet>, DomainError> {
        Ok(self.outlets.lock().unwrap().clone())
    }

    fn search_outlets(&self, search: &OutletSearch) -> Result<Vec<Outlet>, DomainError> {
        Ok(self
            .outlets
            .lock()
            .unwrap()
            .iter()
            .filter(|o| {
                search
                    .query
                    .as_deref()
                    .map_or(true, |q| contains_ci(&o.name, q) || contains_ci(&o.description, q))
            })
            .filter(|o| {
                search
                    .cuisine
                    .as_deref()
                    .map_or(true, |c| contains_ci(&o.cuisine, c))
            })
            .filter(|o| {
                search
                    .location
                    .as_deref()
                    .map_or(true, |l| contains_ci(&o.location, l))
            })
            .cloned()
            .collect())
    }

    fn find_outlet(&self, id: Uuid) -> Result<Option<Outlet>, DomainError> {
        Ok(self
            .outlets
            .lock()
            .unwrap()
            .iter()
            .find(|o| o.id == id)
            .cloned())
    }

    fn insert_outlet(&self, outlet: &Outlet) -> Result<(), DomainError> {
        self.outlets.lock().unwrap().push(outlet.clone());
        Ok(())
    }

    fn update_outlet(&self, id: Uuid, draft: &OutletDraft) -> Result<Option<Outlet>, DomainError> {
        let mut outlets = self.outlets.lock().unwrap();
        let Some(outlet) = outlets.iter_mut().find(|o| o.id == id) else {
            return Ok(None);
        };
        outlet.name = draft.name.clone();
        outlet.description = draft.description.clone();
        outlet.cuisine = draft.cuisine.clone();
        outlet.location = draft.location.clone();
        outlet.image = draft.image.clone();
        outlet.delivery_time_minutes = draft.delivery_time_minutes;
        outlet.is_open = draft.is_open;
        Ok(Some(outlet.clone()))
    }

    fn delete_outlet(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut outlets = self.outlets.lock().unwrap();
        let before = outlets.len();
        outlets.retain(|o| o.id != id);
        Ok(outlets.len() != before)
    }

    fn menu_for_outlet(&self, outlet_id: Uuid) -> Result<Vec<MenuItem>, DomainError> {
        Ok(self
            .menu_items
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.outlet_id == outlet_id)
            .cloned()
            .collect())
    }

    fn insert_menu_item(&self, item: &MenuItem) -> Result<(), DomainError> {
        self.menu_items.lock().unwrap().push(item.clone());
        Ok(())
    }

    fn update_menu_item(
        &self,
        outlet_id: Uuid,
        item_id: Uuid,
        draft: &MenuItemDraft,
    ) -> Result<Option<MenuItem>, DomainError> {
        let mut items = self.menu_items.lock().unwrap();
        let Some(item) = items
            .iter_mut()
            .find(|m| m.id == item_id && m.outlet_id == outlet_id)
        else {
            return Ok(None);
        };
        item.name = draft.name.clone();
        item.description = draft.description.clone();
        item.price = draft.price.clone();
        item.image = draft.image.clone();
        item.category = draft.category.clone();
        item.is_veg = draft.is_veg;
        item.is_available = draft.is_available;
        Ok(Some(item.clone()))
    }

    fn delete_menu_item(&self, outlet_id: Uuid, item_id: Uuid) -> Result<bool, DomainError> {
        let mut items = self.menu_items.lock().unwrap();
        let before = items.len();
        items.retain(|m| !(m.id == item_id && m.outlet_id == outlet_id));
        Ok(items.len() != before)
    }

    fn count_open_outlets(&self) -> Result<i64, DomainError> {
        Ok(self.outlets.lock().unwrap().iter().filter(|o| o.is_open).count() as i64)
    }
}
