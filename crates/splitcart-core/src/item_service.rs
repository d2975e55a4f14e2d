//! Mutation helpers for shopping items.

use uuid::Uuid;

use splitcart_domain::{ShoppingItem, ShoppingList};

use crate::CoreError;

/// Provides mutation helpers for [`ShoppingItem`] entries in a list.
pub struct ItemService;

impl ItemService {
    /// Adds an item to the list and returns its identifier. The `added_by`
    /// member must exist in the roster.
    pub fn add(list: &mut ShoppingList, item: ShoppingItem) -> Result<Uuid, CoreError> {
        if item.name.trim().is_empty() {
            return Err(CoreError::Validation("item name must not be empty".into()));
        }
        if item.quantity == 0 {
            return Err(CoreError::Validation("quantity must be at least 1".into()));
        }
        if list.member(item.added_by).is_none() {
            return Err(CoreError::MemberNotFound(item.added_by.to_string()));
        }
        Ok(list.add_item(item))
    }

    /// Deletes an item irreversibly.
    pub fn remove(list: &mut ShoppingList, item_id: Uuid) -> Result<ShoppingItem, CoreError> {
        list.remove_item(item_id)
            .ok_or(CoreError::ItemNotFound(item_id))
    }

    /// Marks an item purchased, atomically setting `purchased`,
    /// `actual_price` and `purchased_by`. Price defaults to the item's
    /// effective price, purchaser to whoever added the item.
    pub fn mark_purchased(
        list: &mut ShoppingList,
        item_id: Uuid,
        price: Option<f64>,
        purchaser: Option<Uuid>,
    ) -> Result<(), CoreError> {
        if let Some(buyer) = purchaser {
            if list.member(buyer).is_none() {
                return Err(CoreError::MemberNotFound(buyer.to_string()));
            }
        }
        let item = list
            .item_mut(item_id)
            .ok_or(CoreError::ItemNotFound(item_id))?;
        item.mark_purchased(price, purchaser);
        list.touch();
        Ok(())
    }

    /// Reverts a purchase, clearing the purchaser and the actual price.
    pub fn mark_unpurchased(list: &mut ShoppingList, item_id: Uuid) -> Result<(), CoreError> {
        let item = list
            .item_mut(item_id)
            .ok_or(CoreError::ItemNotFound(item_id))?;
        item.mark_unpurchased();
        list.touch();
        Ok(())
    }

    /// Updates the estimate used for planning and for unpurchased fallback.
    pub fn set_estimated_price(
        list: &mut ShoppingList,
        item_id: Uuid,
        price: f64,
    ) -> Result<(), CoreError> {
        let item = list
            .item_mut(item_id)
            .ok_or(CoreError::ItemNotFound(item_id))?;
        item.estimated_price = price;
        list.touch();
        Ok(())
    }

    /// Re-records the price paid for an already purchased item. Rejected for
    /// unpurchased items, which must not carry an actual price.
    pub fn set_actual_price(
        list: &mut ShoppingList,
        item_id: Uuid,
        price: f64,
    ) -> Result<(), CoreError> {
        let item = list
            .item_mut(item_id)
            .ok_or(CoreError::ItemNotFound(item_id))?;
        if !item.purchased {
            return Err(CoreError::InvalidOperation(
                "actual price can only be set on a purchased item".into(),
            ));
        }
        item.actual_price = Some(price);
        list.touch();
        Ok(())
    }
}
