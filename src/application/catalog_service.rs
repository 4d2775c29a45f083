use bigdecimal::{BigDecimal, Zero};
use chrono::Utc;
use uuid::Uuid;

use crate::domain::auth::Identity;
use crate::domain::catalog::{MenuItem, MenuItemDraft, Outlet, OutletDraft, OutletSearch};
use crate::domain::errors::DomainError;
use crate::domain::ports::CatalogRepository;

/// Outlet browsing plus the admin back-office for outlets and menus.
/// Menu edits never touch existing orders; line items are snapshots.
pub struct CatalogService<C> {
    repo: C,
}

impl<C: CatalogRepository> CatalogService<C> {
    pub fn new(repo: C) -> Self {
        Self { repo }
    }

    pub fn list_outlets(&self) -> Result<Vec<Outlet>, DomainError> {
        self.repo.list_outlets()
    }

    pub fn search_outlets(&self, search: &OutletSearch) -> Result<Vec<Outlet>, DomainError> {
        self.repo.search_outlets(search)
    }

    pub fn get_outlet(&self, id: Uuid) -> Result<Outlet, DomainError> {
        self.repo
            .find_outlet(id)?
            .ok_or(DomainError::NotFound("Outlet"))
    }

    pub fn outlet_menu(&self, outlet_id: Uuid) -> Result<Vec<MenuItem>, DomainError> {
        self.repo.menu_for_outlet(outlet_id)
    }

    pub fn create_outlet(
        &self,
        identity: &Identity,
        draft: OutletDraft,
    ) -> Result<Outlet, DomainError> {
        identity.require_admin()?;
        validate_outlet(&draft)?;
        let outlet = Outlet {
            id: Uuid::new_v4(),
            name: draft.name,
            description: draft.description,
            cuisine: draft.cuisine,
            location: draft.location,
            image: draft.image,
            delivery_time_minutes: draft.delivery_time_minutes,
            is_open: draft.is_open,
            rating: BigDecimal::zero(),
            created_at: Utc::now(),
        };
        self.repo.insert_outlet(&outlet)?;
        log::info!("outlet {} '{}' created", outlet.id, outlet.name);
        Ok(outlet)
    }

    pub fn update_outlet(
        &self,
        identity: &Identity,
        id: Uuid,
        draft: OutletDraft,
    ) -> Result<Outlet, DomainError> {
        identity.require_admin()?;
        validate_outlet(&draft)?;
        self.repo
            .update_outlet(id, &draft)?
            .ok_or(DomainError::NotFound("Outlet"))
    }

    pub fn delete_outlet(&self, identity: &Identity, id: Uuid) -> Result<(), DomainError> {
        identity.require_admin()?;
        if self.repo.delete_outlet(id)? {
            log::info!("outlet {} deleted", id);
            Ok(())
        } else {
            Err(DomainError::NotFound("Outlet"))
        }
    }

    pub fn add_menu_item(
        &self,
        identity: &Identity,
        outlet_id: Uuid,
        draft: MenuItemDraft,
    ) -> Result<MenuItem, DomainError> {
        identity.require_admin()?;
        validate_menu_item(&draft)?;
        if self.repo.find_outlet(outlet_id)?.is_none() {
            return Err(DomainError::NotFound("Outlet"));
        }
        let item = MenuItem {
            id: Uuid::new_v4(),
            outlet_id,
            name: draft.name,
            description: draft.description,
            price: draft.price,
            image: draft.image,
            category: draft.category,
            is_veg: draft.is_veg,
            is_available: draft.is_available,
            rating: BigDecimal::zero(),
            created_at: Utc::now(),
        };
        self.repo.insert_menu_item(&item)?;
        Ok(item)
    }

    pub fn update_menu_item(
        &self,
        identity: &Identity,
        outlet_id: Uuid,
        item_id: Uuid,
        draft: MenuItemDraft,
    ) -> Result<MenuItem, DomainError> {
        identity.require_admin()?;
        validate_menu_item(&draft)?;
        self.repo
            .update_menu_item(outlet_id, item_id, &draft)?
            .ok_or(DomainError::NotFound("Menu item"))
    }

    pub fn delete_menu_item(
        &self,
        identity: &Identity,
        outlet_id: Uuid,
        item_id: Uuid,
    ) -> Result<(), DomainError> {
        identity.require_admin()?;
        if self.repo.delete_menu_item(outlet_id, item_id)? {
            Ok(())
        } else {
            Err(DomainError::NotFound("Menu item"))
        }
    }
}

fn require_field(value: &str, message: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        Err(DomainError::Validation(message.to_string()))
    } else {
        Ok(())
    }
}

fn validate_outlet(draft: &OutletDraft) -> Result<(), DomainError> {
    require_field(&draft.name, "outlet name is required")?;
    require_field(&draft.description, "description is required")?;
    require_field(&draft.cuisine, "cuisine type is required")?;
    require_field(&draft.location, "location is required")?;
    require_field(&draft.image, "image URL is required")?;
    if draft.delivery_time_minutes < 1 {
        return Err(DomainError::Validation(
            "delivery time must be a positive number of minutes".to_string(),
        ));
    }
    Ok(())
}

fn validate_menu_item(draft: &MenuItemDraft) -> Result<(), DomainError> {
    require_field(&draft.name, "item name is required")?;
    require_field(&draft.description, "description is required")?;
    require_field(&draft.category, "category is required")?;
    require_field(&draft.image, "image URL is required")?;
    if draft.price < BigDecimal::zero() {
        return Err(DomainError::Validation(
            "price must be a positive number".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::application::memory::InMemoryCatalogRepository;
    use crate::domain::auth::Role;

    fn admin() -> Identity {
        Identity {
            user_id: Uuid::new_v4(),
            role: Role::Admin,
        }
    }

    fn service() -> CatalogService<InMemoryCatalogRepository> {
        CatalogService::new(InMemoryCatalogRepository::new())
    }

    fn outlet_draft(name: &str) -> OutletDraft {
        OutletDraft {
            name: name.to_string(),
            description: "North Indian thalis and snacks".to_string(),
            cuisine: "North Indian".to_string(),
            location: "Academic Block".to_string(),
            image: "https://example.com/outlet.jpg".to_string(),
            delivery_time_minutes: 20,
            is_open: true,
        }
    }

    fn item_draft(name: &str) -> MenuItemDraft {
        MenuItemDraft {
            name: name.to_string(),
            description: "Crisp and spicy".to_string(),
            price: BigDecimal::from_str("45").unwrap(),
            image: "https://example.com/item.jpg".to_string(),
            category: "Snacks".to_string(),
            is_veg: true,
            is_available: true,
        }
    }

    #[test]
    fn create_and_fetch_outlet() {
        let svc = service();
        let created = svc.create_outlet(&admin(), outlet_draft("Annapurna")).unwrap();
        let fetched = svc.get_outlet(created.id).unwrap();
        assert_eq!(fetched.name, "Annapurna");
        assert!(fetched.is_open);
    }

    #[test]
    fn outlet_crud_requires_admin() {
        let svc = service();
        let user = Identity {
            user_id: Uuid::new_v4(),
            role: Role::User,
        };
        assert!(matches!(
            svc.create_outlet(&user, outlet_draft("Nope")).unwrap_err(),
            DomainError::Forbidden(_)
        ));
    }

    #[test]
    fn create_outlet_rejects_blank_name_and_bad_delivery_time() {
        let svc = service();
        let mut draft = outlet_draft(" ");
        assert!(svc.create_outlet(&admin(), draft.clone()).is_err());
        draft.name = "Annapurna".to_string();
        draft.delivery_time_minutes = 0;
        assert!(svc.create_outlet(&admin(), draft).is_err());
    }

    #[test]
    fn search_matches_name_cuisine_and_location_case_insensitively() {
        let svc = service();
        svc.create_outlet(&admin(), outlet_draft("Annapurna")).unwrap();
        let mut south = outlet_draft("Dosa Plaza");
        south.cuisine = "South Indian".to_string();
        svc.create_outlet(&admin(), south).unwrap();

        let hits = svc
            .search_outlets(&OutletSearch {
                query: Some("dosa".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Dosa Plaza");

        let hits = svc
            .search_outlets(&OutletSearch {
                cuisine: Some("north".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Annapurna");
    }

    #[test]
    fn menu_items_live_under_their_outlet() {
        let svc = service();
        let outlet = svc.create_outlet(&admin(), outlet_draft("Annapurna")).unwrap();
        let other = svc.create_outlet(&admin(), outlet_draft("Dosa Plaza")).unwrap();

        let item = svc
            .add_menu_item(&admin(), outlet.id, item_draft("Samosa"))
            .unwrap();
        assert_eq!(svc.outlet_menu(outlet.id).unwrap().len(), 1);
        assert!(svc.outlet_menu(other.id).unwrap().is_empty());

        // addressing the item through the wrong outlet misses
        assert!(matches!(
            svc.update_menu_item(&admin(), other.id, item.id, item_draft("Kachori"))
                .unwrap_err(),
            DomainError::NotFound("Menu item")
        ));

        let renamed = svc
            .update_menu_item(&admin(), outlet.id, item.id, item_draft("Kachori"))
            .unwrap();
        assert_eq!(renamed.name, "Kachori");

        svc.delete_menu_item(&admin(), outlet.id, item.id).unwrap();
        assert!(svc.outlet_menu(outlet.id).unwrap().is_empty());
    }

    #[test]
    fn add_menu_item_requires_existing_outlet() {
        let svc = service();
        assert!(matches!(
            svc.add_menu_item(&admin(), Uuid::new_v4(), item_draft("Samosa"))
                .unwrap_err(),
            DomainError::NotFound("Outlet")
        ));
    }

    #[test]
    fn delete_outlet_is_not_found_when_absent() {
        let svc = service();
        assert!(matches!(
            svc.delete_outlet(&admin(), Uuid::new_v4()).unwrap_err(),
            DomainError::NotFound("Outlet")
        ));
    }
}
