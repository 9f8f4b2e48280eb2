use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, TransactionTrait,
};
use uuid::Uuid;

use emporia_core::pagination::PageRequest;
use emporia_store_schema::{
    brands, cart_items, carts, categories, colors, product_variants, products, sizes,
    variant_colors,
};

use crate::domain::repository::{
    BrandRepository, CartRepository, CategoryRepository, ColorRepository, ProductRepository,
    SizeRepository,
};
use crate::domain::types::{
    Cart, CartItem, Color, Gender, LocalizedEntry, Product, ProductFilter, ProductVariant, Size,
};
use crate::error::StoreServiceError;

// ── Brand repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbBrandRepository {
    pub db: DatabaseConnection,
}

impl BrandRepository for DbBrandRepository {
    async fn list(&self) -> Result<Vec<LocalizedEntry>, StoreServiceError> {
        let models = brands::Entity::find()
            .order_by_asc(brands::Column::Name)
            .all(&self.db)
            .await
            .context("list brands")?;
        Ok(models.into_iter().map(brand_from_model).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<LocalizedEntry>, StoreServiceError> {
        let model = brands::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find brand by id")?;
        Ok(model.map(brand_from_model))
    }

    async fn find_by_name(
        &self,
        name: &str,
    ) -> Result<Option<LocalizedEntry>, StoreServiceError> {
        let model = brands::Entity::find()
            .filter(brands::Column::Name.eq(name))
            .one(&self.db)
            .await
            .context("find brand by name")?;
        Ok(model.map(brand_from_model))
    }

    async fn create(&self, brand: &LocalizedEntry) -> Result<(), StoreServiceError> {
        brands::ActiveModel {
            id: Set(brand.id),
            name: Set(brand.name.clone()),
            name_it: Set(brand.name_it.clone()),
            name_de: Set(brand.name_de.clone()),
            description: Set(brand.description.clone()),
            description_it: Set(brand.description_it.clone()),
            description_de: Set(brand.description_de.clone()),
            created_at: Set(brand.created_at),
            updated_at: Set(brand.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create brand")?;
        Ok(())
    }
}

fn brand_from_model(model: brands::Model) -> LocalizedEntry {
    LocalizedEntry {
        id: model.id,
        name: model.name,
        name_it: model.name_it,
        name_de: model.name_de,
        description: model.description,
        description_it: model.description_it,
        description_de: model.description_de,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Category repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCategoryRepository {
    pub db: DatabaseConnection,
}

impl CategoryRepository for DbCategoryRepository {
    async fn list(&self) -> Result<Vec<LocalizedEntry>, StoreServiceError> {
        let models = categories::Entity::find()
            .order_by_asc(categories::Column::Name)
            .all(&self.db)
            .await
            .context("list categories")?;
        Ok(models.into_iter().map(category_from_model).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<LocalizedEntry>, StoreServiceError> {
        let model = categories::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find category by id")?;
        Ok(model.map(category_from_model))
    }

    async fn find_by_name(
        &self,
        name: &str,
    ) -> Result<Option<LocalizedEntry>, StoreServiceError> {
        let model = categories::Entity::find()
            .filter(categories::Column::Name.eq(name))
            .one(&self.db)
            .await
            .context("find category by name")?;
        Ok(model.map(category_from_model))
    }

    async fn create(&self, category: &LocalizedEntry) -> Result<(), StoreServiceError> {
        categories::ActiveModel {
            id: Set(category.id),
            name: Set(category.name.clone()),
            name_it: Set(category.name_it.clone()),
            name_de: Set(category.name_de.clone()),
            description: Set(category.description.clone()),
            description_it: Set(category.description_it.clone()),
            description_de: Set(category.description_de.clone()),
            created_at: Set(category.created_at),
            updated_at: Set(category.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create category")?;
        Ok(())
    }
}

fn category_from_model(model: categories::Model) -> LocalizedEntry {
    LocalizedEntry {
        id: model.id,
        name: model.name,
        name_it: model.name_it,
        name_de: model.name_de,
        description: model.description,
        description_it: model.description_it,
        description_de: model.description_de,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Color repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbColorRepository {
    pub db: DatabaseConnection,
}

impl ColorRepository for DbColorRepository {
    async fn list(&self) -> Result<Vec<Color>, StoreServiceError> {
        let models = colors::Entity::find()
            .order_by_asc(colors::Column::Name)
            .all(&self.db)
            .await
            .context("list colors")?;
        Ok(models
            .into_iter()
            .map(|m| Color {
                id: m.id,
                name: m.name,
                hex_code: m.hex_code,
                created_at: m.created_at,
            })
            .collect())
    }

    async fn create(&self, color: &Color) -> Result<(), StoreServiceError> {
        colors::ActiveModel {
            id: Set(color.id),
            name: Set(color.name.clone()),
            hex_code: Set(color.hex_code.clone()),
            created_at: Set(color.created_at),
        }
        .insert(&self.db)
        .await
        .context("create color")?;
        Ok(())
    }
}

// ── Size repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbSizeRepository {
    pub db: DatabaseConnection,
}

impl SizeRepository for DbSizeRepository {
    async fn list(&self) -> Result<Vec<Size>, StoreServiceError> {
        let models = sizes::Entity::find()
            .order_by_asc(sizes::Column::Label)
            .all(&self.db)
            .await
            .context("list sizes")?;
        models.into_iter().map(size_from_model).collect()
    }

    async fn create(&self, size: &Size) -> Result<(), StoreServiceError> {
        sizes::ActiveModel {
            id: Set(size.id),
            label: Set(size.label.clone()),
            gender: Set(size.gender.map(|g| g.as_str().to_owned())),
            created_at: Set(size.created_at),
        }
        .insert(&self.db)
        .await
        .context("create size")?;
        Ok(())
    }
}

fn size_from_model(model: sizes::Model) -> Result<Size, StoreServiceError> {
    let gender = model
        .gender
        .map(|s| {
            Gender::from_str(&s).ok_or_else(|| anyhow::anyhow!("unknown size gender: {s}"))
        })
        .transpose()?;
    Ok(Size {
        id: model.id,
        label: model.label,
        gender,
        created_at: model.created_at,
    })
}

// ── Product repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbProductRepository {
    pub db: DatabaseConnection,
}

impl ProductRepository for DbProductRepository {
    async fn list_active(
        &self,
        filter: ProductFilter,
        page: PageRequest,
    ) -> Result<Vec<Product>, StoreServiceError> {
        let mut query = products::Entity::find()
            .filter(products::Column::IsActive.eq(true))
            .order_by_asc(products::Column::NameEn);
        if let Some(category_id) = filter.category_id {
            query = query.filter(products::Column::CategoryId.eq(category_id));
        }
        if let Some(brand_id) = filter.brand_id {
            query = query.filter(products::Column::BrandId.eq(brand_id));
        }
        let models = query
            .offset(page.offset())
            .limit(u64::from(page.per_page))
            .all(&self.db)
            .await
            .context("list products")?;
        Ok(models.into_iter().map(product_from_model).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, StoreServiceError> {
        let model = products::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find product by id")?;
        Ok(model.map(product_from_model))
    }

    async fn create(&self, product: &Product) -> Result<(), StoreServiceError> {
        products::ActiveModel {
            id: Set(product.id),
            category_id: Set(product.category_id),
            brand_id: Set(product.brand_id),
            size_id: Set(product.size_id),
            name_en: Set(product.name_en.clone()),
            name_it: Set(product.name_it.clone()),
            name_de: Set(product.name_de.clone()),
            description_en: Set(product.description_en.clone()),
            description_it: Set(product.description_it.clone()),
            description_de: Set(product.description_de.clone()),
            price_cents: Set(product.price_cents),
            discount_percentage: Set(product.discount_percentage),
            stock: Set(product.stock),
            is_active: Set(product.is_active),
            created_at: Set(product.created_at),
            updated_at: Set(product.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create product")?;
        Ok(())
    }

    async fn list_variants(
        &self,
        product_id: Uuid,
    ) -> Result<Vec<ProductVariant>, StoreServiceError> {
        let models = product_variants::Entity::find()
            .filter(product_variants::Column::ProductId.eq(product_id))
            .order_by_asc(product_variants::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list variants")?;
        let mut variants = Vec::with_capacity(models.len());
        for model in models {
            variants.push(self.variant_with_colors(model).await?);
        }
        Ok(variants)
    }

    async fn find_variant(
        &self,
        variant_id: Uuid,
    ) -> Result<Option<ProductVariant>, StoreServiceError> {
        let model = product_variants::Entity::find_by_id(variant_id)
            .one(&self.db)
            .await
            .context("find variant by id")?;
        match model {
            Some(model) => Ok(Some(self.variant_with_colors(model).await?)),
            None => Ok(None),
        }
    }

    async fn create_variant(&self, variant: &ProductVariant) -> Result<(), StoreServiceError> {
        // The variant row and its color links land together or not at all.
        let txn = self.db.begin().await.context("begin variant txn")?;

        product_variants::ActiveModel {
            id: Set(variant.id),
            product_id: Set(variant.product_id),
            size_id: Set(variant.size_id),
            stock: Set(variant.stock),
            price_override_cents: Set(variant.price_override_cents),
            sku: Set(variant.sku.clone()),
            created_at: Set(variant.created_at),
            updated_at: Set(variant.updated_at),
        }
        .insert(&txn)
        .await
        .context("create variant")?;

        for color_id in &variant.color_ids {
            variant_colors::ActiveModel {
                variant_id: Set(variant.id),
                color_id: Set(*color_id),
            }
            .insert(&txn)
            .await
            .context("link variant color")?;
        }

        txn.commit().await.context("commit variant txn")?;
        Ok(())
    }
}

impl DbProductRepository {
    async fn variant_with_colors(
        &self,
        model: product_variants::Model,
    ) -> Result<ProductVariant, StoreServiceError> {
        let color_ids = variant_colors::Entity::find()
            .filter(variant_colors::Column::VariantId.eq(model.id))
            .all(&self.db)
            .await
            .context("list variant colors")?
            .into_iter()
            .map(|link| link.color_id)
            .collect();
        Ok(variant_from_model(model, color_ids))
    }
}

fn product_from_model(model: products::Model) -> Product {
    Product {
        id: model.id,
        category_id: model.category_id,
        brand_id: model.brand_id,
        size_id: model.size_id,
        name_en: model.name_en,
        name_it: model.name_it,
        name_de: model.name_de,
        description_en: model.description_en,
        description_it: model.description_it,
        description_de: model.description_de,
        price_cents: model.price_cents,
        discount_percentage: model.discount_percentage,
        stock: model.stock,
        is_active: model.is_active,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

fn variant_from_model(model: product_variants::Model, color_ids: Vec<Uuid>) -> ProductVariant {
    ProductVariant {
        id: model.id,
        product_id: model.product_id,
        size_id: model.size_id,
        stock: model.stock,
        price_override_cents: model.price_override_cents,
        sku: model.sku,
        color_ids,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Cart repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCartRepository {
    pub db: DatabaseConnection,
}

impl CartRepository for DbCartRepository {
    async fn find_or_create(&self, account_id: Uuid) -> Result<Cart, StoreServiceError> {
        if let Some(model) = carts::Entity::find()
            .filter(carts::Column::AccountId.eq(account_id))
            .one(&self.db)
            .await
            .context("find cart")?
        {
            return Ok(cart_from_model(model));
        }

        let now = Utc::now();
        let model = carts::ActiveModel {
            id: Set(Uuid::new_v4()),
            account_id: Set(account_id),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await
        .context("create cart")?;
        Ok(cart_from_model(model))
    }

    async fn list_items(&self, cart_id: Uuid) -> Result<Vec<CartItem>, StoreServiceError> {
        let models = cart_items::Entity::find()
            .filter(cart_items::Column::CartId.eq(cart_id))
            .order_by_asc(cart_items::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list cart items")?;
        Ok(models.into_iter().map(item_from_model).collect())
    }

    async fn find_item(
        &self,
        cart_id: Uuid,
        product_id: Uuid,
        variant_id: Option<Uuid>,
    ) -> Result<Option<CartItem>, StoreServiceError> {
        let mut query = cart_items::Entity::find()
            .filter(cart_items::Column::CartId.eq(cart_id))
            .filter(cart_items::Column::ProductId.eq(product_id));
        query = match variant_id {
            Some(variant_id) => query.filter(cart_items::Column::VariantId.eq(variant_id)),
            None => query.filter(cart_items::Column::VariantId.is_null()),
        };
        let model = query.one(&self.db).await.context("find cart item")?;
        Ok(model.map(item_from_model))
    }

    async fn find_item_by_id(
        &self,
        cart_id: Uuid,
        item_id: Uuid,
    ) -> Result<Option<CartItem>, StoreServiceError> {
        let model = cart_items::Entity::find_by_id(item_id)
            .filter(cart_items::Column::CartId.eq(cart_id))
            .one(&self.db)
            .await
            .context("find cart item by id")?;
        Ok(model.map(item_from_model))
    }

    async fn insert_item(&self, item: &CartItem) -> Result<(), StoreServiceError> {
        cart_items::ActiveModel {
            id: Set(item.id),
            cart_id: Set(item.cart_id),
            product_id: Set(item.product_id),
            variant_id: Set(item.variant_id),
            quantity: Set(item.quantity),
            created_at: Set(item.created_at),
            updated_at: Set(item.updated_at),
        }
        .insert(&self.db)
        .await
        .context("insert cart item")?;
        Ok(())
    }

    async fn set_item_quantity(
        &self,
        item_id: Uuid,
        quantity: i32,
    ) -> Result<(), StoreServiceError> {
        cart_items::ActiveModel {
            id: Set(item_id),
            quantity: Set(quantity),
            updated_at: Set(Utc::now()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("set cart item quantity")?;
        Ok(())
    }

    async fn delete_item(&self, item_id: Uuid) -> Result<(), StoreServiceError> {
        cart_items::Entity::delete_by_id(item_id)
            .exec(&self.db)
            .await
            .context("delete cart item")?;
        Ok(())
    }
}

fn cart_from_model(model: carts::Model) -> Cart {
    Cart {
        id: model.id,
        account_id: model.account_id,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

fn item_from_model(model: cart_items::Model) -> CartItem {
    CartItem {
        id: model.id,
        cart_id: model.cart_id,
        product_id: model.product_id,
        variant_id: model.variant_id,
        quantity: model.quantity,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}
