//! Catalog and cart domain types. All money is integer cents.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Upper bound for stored prices, 1 billion in cents. Keeps discount and
/// line-total arithmetic inside i64.
pub const MAX_PRICE_CENTS: i64 = 100_000_000_000;

/// Brand or category text in the three supported locales. English is the
/// canonical `name`; the rest are optional overlays.
#[derive(Debug, Clone)]
pub struct LocalizedEntry {
    pub id: Uuid,
    pub name: String,
    pub name_it: Option<String>,
    pub name_de: Option<String>,
    pub description: Option<String>,
    pub description_it: Option<String>,
    pub description_de: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Color {
    pub id: Uuid,
    pub name: String,
    pub hex_code: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Unisex,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Unisex => "unisex",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            "unisex" => Some(Self::Unisex),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Size {
    pub id: Uuid,
    pub label: String,
    pub gender: Option<Gender>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Product {
    pub id: Uuid,
    pub category_id: Uuid,
    pub brand_id: Option<Uuid>,
    pub size_id: Option<Uuid>,
    pub name_en: String,
    pub name_it: Option<String>,
    pub name_de: Option<String>,
    pub description_en: Option<String>,
    pub description_it: Option<String>,
    pub description_de: Option<String>,
    pub price_cents: i64,
    /// 0–100. The discounted price is derived, see [`Product::discounted_price_cents`].
    pub discount_percentage: i16,
    pub stock: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Price after discount, rounded down to the cent.
    pub fn discounted_price_cents(&self) -> i64 {
        self.price_cents - self.price_cents * i64::from(self.discount_percentage) / 100
    }
}

#[derive(Debug, Clone)]
pub struct ProductVariant {
    pub id: Uuid,
    pub product_id: Uuid,
    pub size_id: Option<Uuid>,
    pub stock: i32,
    pub price_override_cents: Option<i64>,
    pub sku: Option<String>,
    pub color_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductVariant {
    /// Variant price: the override when set, the product price otherwise.
    pub fn effective_price_cents(&self, product: &Product) -> i64 {
        self.price_override_cents.unwrap_or(product.price_cents)
    }
}

#[derive(Debug, Clone)]
pub struct Cart {
    pub id: Uuid,
    pub account_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CartItem {
    pub id: Uuid,
    pub cart_id: Uuid,
    pub product_id: Uuid,
    pub variant_id: Option<Uuid>,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Filters accepted by the public product listing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductFilter {
    pub category_id: Option<Uuid>,
    pub brand_id: Option<Uuid>,
}
