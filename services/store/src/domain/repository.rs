#![allow(async_fn_in_trait)]

use uuid::Uuid;

use emporia_core::pagination::PageRequest;

use crate::domain::types::{
    Cart, CartItem, Color, LocalizedEntry, Product, ProductFilter, ProductVariant, Size,
};
use crate::error::StoreServiceError;

/// Repository for brands.
pub trait BrandRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<LocalizedEntry>, StoreServiceError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<LocalizedEntry>, StoreServiceError>;

    async fn find_by_name(&self, name: &str)
    -> Result<Option<LocalizedEntry>, StoreServiceError>;

    async fn create(&self, brand: &LocalizedEntry) -> Result<(), StoreServiceError>;
}

/// Repository for categories. Same surface as brands; the two tables are
/// structurally identical but deliberately separate.
pub trait CategoryRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<LocalizedEntry>, StoreServiceError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<LocalizedEntry>, StoreServiceError>;

    async fn find_by_name(&self, name: &str)
    -> Result<Option<LocalizedEntry>, StoreServiceError>;

    async fn create(&self, category: &LocalizedEntry) -> Result<(), StoreServiceError>;
}

/// Repository for colors.
pub trait ColorRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Color>, StoreServiceError>;

    async fn create(&self, color: &Color) -> Result<(), StoreServiceError>;
}

/// Repository for sizes.
pub trait SizeRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Size>, StoreServiceError>;

    async fn create(&self, size: &Size) -> Result<(), StoreServiceError>;
}

/// Repository for products and their variants.
pub trait ProductRepository: Send + Sync {
    /// Active products only, ordered by `name_en`, paginated.
    async fn list_active(
        &self,
        filter: ProductFilter,
        page: PageRequest,
    ) -> Result<Vec<Product>, StoreServiceError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, StoreServiceError>;

    async fn create(&self, product: &Product) -> Result<(), StoreServiceError>;

    async fn list_variants(
        &self,
        product_id: Uuid,
    ) -> Result<Vec<ProductVariant>, StoreServiceError>;

    async fn find_variant(
        &self,
        variant_id: Uuid,
    ) -> Result<Option<ProductVariant>, StoreServiceError>;

    /// Insert a variant together with its color links.
    async fn create_variant(&self, variant: &ProductVariant) -> Result<(), StoreServiceError>;
}

/// Repository for carts and their items.
pub trait CartRepository: Send + Sync {
    /// The account's cart, created on the spot when absent.
    async fn find_or_create(&self, account_id: Uuid) -> Result<Cart, StoreServiceError>;

    async fn list_items(&self, cart_id: Uuid) -> Result<Vec<CartItem>, StoreServiceError>;

    /// The item for (cart, product, variant), if already present.
    async fn find_item(
        &self,
        cart_id: Uuid,
        product_id: Uuid,
        variant_id: Option<Uuid>,
    ) -> Result<Option<CartItem>, StoreServiceError>;

    async fn find_item_by_id(
        &self,
        cart_id: Uuid,
        item_id: Uuid,
    ) -> Result<Option<CartItem>, StoreServiceError>;

    async fn insert_item(&self, item: &CartItem) -> Result<(), StoreServiceError>;

    async fn set_item_quantity(
        &self,
        item_id: Uuid,
        quantity: i32,
    ) -> Result<(), StoreServiceError>;

    async fn delete_item(&self, item_id: Uuid) -> Result<(), StoreServiceError>;
}
