//! Static accessory catalog.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::Price;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemCategory {
    FitnessTracker,
    HealthMonitor,
    Wearable,
    Wellness,
}

/// A product in the accessory store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreItem {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub price: Price,
    pub image_url: &'static str,
    pub category: ItemCategory,
}

const IMG_TRACKER: &str =
    "https://images.pexels.com/photos/267394/pexels-photo-267394.jpeg?auto=compress&cs=tinysrgb&w=400";
const IMG_MONITOR: &str =
    "https://images.pexels.com/photos/4386466/pexels-photo-4386466.jpeg?auto=compress&cs=tinysrgb&w=400";
const IMG_RING: &str =
    "https://images.pexels.com/photos/5473298/pexels-photo-5473298.jpeg?auto=compress&cs=tinysrgb&w=400";
const IMG_BODY: &str =
    "https://images.pexels.com/photos/6975474/pexels-photo-6975474.jpeg?auto=compress&cs=tinysrgb&w=400";
const IMG_BOTTLE: &str =
    "https://images.pexels.com/photos/416528/pexels-photo-416528.jpeg?auto=compress&cs=tinysrgb&w=400";

fn item(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    dollars: i64,
    image_url: &'static str,
    category: ItemCategory,
) -> StoreItem {
    StoreItem {
        id,
        name,
        description,
        price: Price::usd(dollars),
        image_url,
        category,
    }
}

static CATALOG: Lazy<Vec<StoreItem>> = Lazy::new(|| {
    use ItemCategory::*;
    vec![
        item("fitbit-charge-5", "Fitbit Charge 5", "Heart rate, steps, sleep & stress monitoring", 130, IMG_TRACKER, FitnessTracker),
        item("omron-bp-monitor", "Omron BP Monitor", "Bluetooth-enabled blood pressure monitor", 80, IMG_MONITOR, HealthMonitor),
        item("oura-ring-gen3", "Oura Ring Gen 3", "Sleep, HRV, body temp & recovery tracking", 299, IMG_RING, Wearable),
        item("xiaomi-mi-band-7", "Xiaomi Mi Band 7", "Budget fitness band with HR, SpO₂ & sleep tracking", 45, IMG_TRACKER, FitnessTracker),
        item("upright-go-2", "Upright Go 2", "Wearable posture corrector", 75, IMG_BODY, Wellness),
        item("withings-smart-scale", "Withings Smart Scale", "Weight, BMI, fat %, water %, sync with health apps", 100, IMG_BODY, HealthMonitor),
        item("hidratespark-pro", "HidrateSpark Pro", "Smart bottle reminding you to hydrate", 60, IMG_BOTTLE, Wellness),
        item("kinsa-smart-thermometer", "Kinsa Smart Thermometer", "App-connected digital thermometer", 35, IMG_MONITOR, HealthMonitor),
    ]
});

/// Every catalog item, in display order.
pub fn catalog() -> &'static [StoreItem] {
    &CATALOG
}

pub fn find_item(id: &str) -> Option<&'static StoreItem> {
    CATALOG.iter().find(|item| item.id == id)
}

/// Catalog items, optionally restricted to one category.
pub fn items_in(category: Option<ItemCategory>) -> Vec<&'static StoreItem> {
    CATALOG
        .iter()
        .filter(|item| category.map_or(true, |c| item.category == c))
        .collect()
}
