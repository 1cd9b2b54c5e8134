use serde::Deserialize;

use crate::domain::store::ItemCategory;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogQuery {
    #[serde(default)]
    pub category: Option<ItemCategory>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddCartItemRequest {
    pub item_id: String,
}
