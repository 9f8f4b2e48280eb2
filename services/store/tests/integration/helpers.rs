use std::sync::{Arc, Mutex};

use chrono::Utc;
use uuid::Uuid;

use emporia_core::pagination::PageRequest;
use emporia_store::domain::repository::{
    BrandRepository, CartRepository, CategoryRepository, ProductRepository,
};
use emporia_store::domain::types::{
    Cart, CartItem, LocalizedEntry, Product, ProductFilter, ProductVariant,
};
use emporia_store::error::StoreServiceError;

// ── Builders ─────────────────────────────────────────────────────────────────

pub fn test_entry(name: &str) -> LocalizedEntry {
    let now = Utc::now();
    LocalizedEntry {
        id: Uuid::new_v4(),
        name: name.to_owned(),
        name_it: None,
        name_de: None,
        description: None,
        description_it: None,
        description_de: None,
        created_at: now,
        updated_at: now,
    }
}

pub fn test_product(category_id: Uuid, name_en: &str, price_cents: i64) -> Product {
    let now = Utc::now();
    Product {
        id: Uuid::new_v4(),
        category_id,
        brand_id: None,
        size_id: None,
        name_en: name_en.to_owned(),
        name_it: None,
        name_de: None,
        description_en: None,
        description_it: None,
        description_de: None,
        price_cents,
        discount_percentage: 0,
        stock: 10,
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

pub fn test_variant(product_id: Uuid, price_override_cents: Option<i64>) -> ProductVariant {
    let now = Utc::now();
    ProductVariant {
        id: Uuid::new_v4(),
        product_id,
        size_id: None,
        stock: 5,
        price_override_cents,
        sku: None,
        color_ids: vec![],
        created_at: now,
        updated_at: now,
    }
}

// ── MockBrandRepo / MockCategoryRepo ─────────────────────────────────────────

pub struct MockBrandRepo {
    pub entries: Arc<Mutex<Vec<LocalizedEntry>>>,
}

impl MockBrandRepo {
    pub fn new(entries: Vec<LocalizedEntry>) -> Self {
        Self {
            entries: Arc::new(Mutex::new(entries)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }
}

impl BrandRepository for MockBrandRepo {
    async fn list(&self) -> Result<Vec<LocalizedEntry>, StoreServiceError> {
        Ok(self.entries.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<LocalizedEntry>, StoreServiceError> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.id == id)
            .cloned())
    }

    async fn find_by_name(
        &self,
        name: &str,
    ) -> Result<Option<LocalizedEntry>, StoreServiceError> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.name == name)
            .cloned())
    }

    async fn create(&self, brand: &LocalizedEntry) -> Result<(), StoreServiceError> {
        self.entries.lock().unwrap().push(brand.clone());
        Ok(())
    }
}

pub struct MockCategoryRepo {
    pub entries: Arc<Mutex<Vec<LocalizedEntry>>>,
}

impl MockCategoryRepo {
    pub fn new(entries: Vec<LocalizedEntry>) -> Self {
        Self {
            entries: Arc::new(Mutex::new(entries)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }
}

impl CategoryRepository for MockCategoryRepo {
    async fn list(&self) -> Result<Vec<LocalizedEntry>, StoreServiceError> {
        Ok(self.entries.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<LocalizedEntry>, StoreServiceError> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.id == id)
            .cloned())
    }

    async fn find_by_name(
        &self,
        name: &str,
    ) -> Result<Option<LocalizedEntry>, StoreServiceError> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.name == name)
            .cloned())
    }

    async fn create(&self, category: &LocalizedEntry) -> Result<(), StoreServiceError> {
        self.entries.lock().unwrap().push(category.clone());
        Ok(())
    }
}

// ── MockProductRepo ──────────────────────────────────────────────────────────

pub struct MockProductRepo {
    pub products: Arc<Mutex<Vec<Product>>>,
    pub variants: Arc<Mutex<Vec<ProductVariant>>>,
}

impl MockProductRepo {
    pub fn new(products: Vec<Product>, variants: Vec<ProductVariant>) -> Self {
        Self {
            products: Arc::new(Mutex::new(products)),
            variants: Arc::new(Mutex::new(variants)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![], vec![])
    }
}

impl ProductRepository for MockProductRepo {
    async fn list_active(
        &self,
        filter: ProductFilter,
        page: PageRequest,
    ) -> Result<Vec<Product>, StoreServiceError> {
        let mut products: Vec<Product> = self
            .products
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.is_active)
            .filter(|p| filter.category_id.is_none_or(|id| p.category_id == id))
            .filter(|p| filter.brand_id.is_none_or(|id| p.brand_id == Some(id)))
            .cloned()
            .collect();
        products.sort_by(|a, b| a.name_en.cmp(&b.name_en));
        Ok(products
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.per_page as usize)
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, StoreServiceError> {
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn create(&self, product: &Product) -> Result<(), StoreServiceError> {
        self.products.lock().unwrap().push(product.clone());
        Ok(())
    }

    async fn list_variants(
        &self,
        product_id: Uuid,
    ) -> Result<Vec<ProductVariant>, StoreServiceError> {
        Ok(self
            .variants
            .lock()
            .unwrap()
            .iter()
            .filter(|v| v.product_id == product_id)
            .cloned()
            .collect())
    }

    async fn find_variant(
        &self,
        variant_id: Uuid,
    ) -> Result<Option<ProductVariant>, StoreServiceError> {
        Ok(self
            .variants
            .lock()
            .unwrap()
            .iter()
            .find(|v| v.id == variant_id)
            .cloned())
    }

    async fn create_variant(&self, variant: &ProductVariant) -> Result<(), StoreServiceError> {
        self.variants.lock().unwrap().push(variant.clone());
        Ok(())
    }
}

// ── MockCartRepo ─────────────────────────────────────────────────────────────

pub struct MockCartRepo {
    pub carts: Arc<Mutex<Vec<Cart>>>,
    pub items: Arc<Mutex<Vec<CartItem>>>,
}

impl MockCartRepo {
    pub fn empty() -> Self {
        Self {
            carts: Arc::new(Mutex::new(vec![])),
            items: Arc::new(Mutex::new(vec![])),
        }
    }

    pub fn items_handle(&self) -> Arc<Mutex<Vec<CartItem>>> {
        Arc::clone(&self.items)
    }
}

impl CartRepository for MockCartRepo {
    async fn find_or_create(&self, account_id: Uuid) -> Result<Cart, StoreServiceError> {
        let mut carts = self.carts.lock().unwrap();
        if let Some(cart) = carts.iter().find(|c| c.account_id == account_id) {
            return Ok(cart.clone());
        }
        let now = Utc::now();
        let cart = Cart {
            id: Uuid::new_v4(),
            account_id,
            created_at: now,
            updated_at: now,
        };
        carts.push(cart.clone());
        Ok(cart)
    }

    async fn list_items(&self, cart_id: Uuid) -> Result<Vec<CartItem>, StoreServiceError> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|i| i.cart_id == cart_id)
            .cloned()
            .collect())
    }

    async fn find_item(
        &self,
        cart_id: Uuid,
        product_id: Uuid,
        variant_id: Option<Uuid>,
    ) -> Result<Option<CartItem>, StoreServiceError> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .find(|i| {
                i.cart_id == cart_id && i.product_id == product_id && i.variant_id == variant_id
            })
            .cloned())
    }

    async fn find_item_by_id(
        &self,
        cart_id: Uuid,
        item_id: Uuid,
    ) -> Result<Option<CartItem>, StoreServiceError> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.cart_id == cart_id && i.id == item_id)
            .cloned())
    }

    async fn insert_item(&self, item: &CartItem) -> Result<(), StoreServiceError> {
        self.items.lock().unwrap().push(item.clone());
        Ok(())
    }

    async fn set_item_quantity(
        &self,
        item_id: Uuid,
        quantity: i32,
    ) -> Result<(), StoreServiceError> {
        let mut items = self.items.lock().unwrap();
        if let Some(item) = items.iter_mut().find(|i| i.id == item_id) {
            item.quantity = quantity;
            item.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn delete_item(&self, item_id: Uuid) -> Result<(), StoreServiceError> {
        self.items.lock().unwrap().retain(|i| i.id != item_id);
        Ok(())
    }
}
