//! Catalog reads and partner-gated writes.

use chrono::Utc;
use uuid::Uuid;

use emporia_core::pagination::PageRequest;

use crate::domain::repository::{
    BrandRepository, CategoryRepository, ColorRepository, ProductRepository, SizeRepository,
};
use crate::domain::types::{
    Color, Gender, LocalizedEntry, MAX_PRICE_CENTS, Product, ProductFilter, ProductVariant, Size,
};
use crate::error::StoreServiceError;

// ── Brands ───────────────────────────────────────────────────────────────────

pub struct ListBrandsUseCase<B: BrandRepository> {
    pub brands: B,
}

impl<B: BrandRepository> ListBrandsUseCase<B> {
    pub async fn execute(&self) -> Result<Vec<LocalizedEntry>, StoreServiceError> {
        self.brands.list().await
    }
}

pub struct GetBrandUseCase<B: BrandRepository> {
    pub brands: B,
}

impl<B: BrandRepository> GetBrandUseCase<B> {
    pub async fn execute(&self, id: Uuid) -> Result<LocalizedEntry, StoreServiceError> {
        self.brands
            .find_by_id(id)
            .await?
            .ok_or(StoreServiceError::BrandNotFound)
    }
}

pub struct CreateLocalizedInput {
    pub name: String,
    pub name_it: Option<String>,
    pub name_de: Option<String>,
    pub description: Option<String>,
    pub description_it: Option<String>,
    pub description_de: Option<String>,
}

impl CreateLocalizedInput {
    fn into_entry(self) -> LocalizedEntry {
        let now = Utc::now();
        LocalizedEntry {
            id: Uuid::new_v4(),
            name: self.name,
            name_it: self.name_it,
            name_de: self.name_de,
            description: self.description,
            description_it: self.description_it,
            description_de: self.description_de,
            created_at: now,
            updated_at: now,
        }
    }
}

pub struct CreateBrandUseCase<B: BrandRepository> {
    pub brands: B,
}

impl<B: BrandRepository> CreateBrandUseCase<B> {
    pub async fn execute(
        &self,
        input: CreateLocalizedInput,
    ) -> Result<LocalizedEntry, StoreServiceError> {
        if input.name.trim().is_empty() {
            return Err(StoreServiceError::MissingData);
        }
        if self.brands.find_by_name(&input.name).await?.is_some() {
            return Err(StoreServiceError::BrandAlreadyExists);
        }
        let brand = input.into_entry();
        self.brands.create(&brand).await?;
        Ok(brand)
    }
}

// ── Categories ───────────────────────────────────────────────────────────────

pub struct ListCategoriesUseCase<C: CategoryRepository> {
    pub categories: C,
}

impl<C: CategoryRepository> ListCategoriesUseCase<C> {
    pub async fn execute(&self) -> Result<Vec<LocalizedEntry>, StoreServiceError> {
        self.categories.list().await
    }
}

pub struct GetCategoryUseCase<C: CategoryRepository> {
    pub categories: C,
}

impl<C: CategoryRepository> GetCategoryUseCase<C> {
    pub async fn execute(&self, id: Uuid) -> Result<LocalizedEntry, StoreServiceError> {
        self.categories
            .find_by_id(id)
            .await?
            .ok_or(StoreServiceError::CategoryNotFound)
    }
}

pub struct CreateCategoryUseCase<C: CategoryRepository> {
    pub categories: C,
}

impl<C: CategoryRepository> CreateCategoryUseCase<C> {
    pub async fn execute(
        &self,
        input: CreateLocalizedInput,
    ) -> Result<LocalizedEntry, StoreServiceError> {
        if input.name.trim().is_empty() {
            return Err(StoreServiceError::MissingData);
        }
        if self.categories.find_by_name(&input.name).await?.is_some() {
            return Err(StoreServiceError::CategoryAlreadyExists);
        }
        let category = input.into_entry();
        self.categories.create(&category).await?;
        Ok(category)
    }
}

// ── Colors ───────────────────────────────────────────────────────────────────

pub struct ListColorsUseCase<R: ColorRepository> {
    pub colors: R,
}

impl<R: ColorRepository> ListColorsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Color>, StoreServiceError> {
        self.colors.list().await
    }
}

pub struct CreateColorInput {
    pub name: String,
    pub hex_code: Option<String>,
}

pub struct CreateColorUseCase<R: ColorRepository> {
    pub colors: R,
}

impl<R: ColorRepository> CreateColorUseCase<R> {
    pub async fn execute(&self, input: CreateColorInput) -> Result<Color, StoreServiceError> {
        if input.name.trim().is_empty() {
            return Err(StoreServiceError::MissingData);
        }
        let color = Color {
            id: Uuid::new_v4(),
            name: input.name,
            hex_code: input.hex_code,
            created_at: Utc::now(),
        };
        self.colors.create(&color).await?;
        Ok(color)
    }
}

// ── Sizes ────────────────────────────────────────────────────────────────────

pub struct ListSizesUseCase<R: SizeRepository> {
    pub sizes: R,
}

impl<R: SizeRepository> ListSizesUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Size>, StoreServiceError> {
        self.sizes.list().await
    }
}

pub struct CreateSizeInput {
    pub label: String,
    /// `male` / `female` / `unisex`, anything else is rejected.
    pub gender: Option<String>,
}

pub struct CreateSizeUseCase<R: SizeRepository> {
    pub sizes: R,
}

impl<R: SizeRepository> CreateSizeUseCase<R> {
    pub async fn execute(&self, input: CreateSizeInput) -> Result<Size, StoreServiceError> {
        if input.label.trim().is_empty() {
            return Err(StoreServiceError::MissingData);
        }
        let gender = match input.gender.as_deref() {
            Some(s) => Some(Gender::from_str(s).ok_or(StoreServiceError::MissingData)?),
            None => None,
        };
        let size = Size {
            id: Uuid::new_v4(),
            label: input.label,
            gender,
            created_at: Utc::now(),
        };
        self.sizes.create(&size).await?;
        Ok(size)
    }
}

// ── Products ─────────────────────────────────────────────────────────────────

pub struct ListProductsUseCase<P: ProductRepository> {
    pub products: P,
}

impl<P: ProductRepository> ListProductsUseCase<P> {
    pub async fn execute(
        &self,
        filter: ProductFilter,
        page: PageRequest,
    ) -> Result<Vec<Product>, StoreServiceError> {
        self.products.list_active(filter, page.clamped()).await
    }
}

pub struct GetProductUseCase<P: ProductRepository> {
    pub products: P,
}

impl<P: ProductRepository> GetProductUseCase<P> {
    pub async fn execute(&self, id: Uuid) -> Result<Product, StoreServiceError> {
        self.products
            .find_by_id(id)
            .await?
            .ok_or(StoreServiceError::ProductNotFound)
    }
}

pub struct CreateProductInput {
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
    pub discount_percentage: i16,
    pub stock: i32,
}

pub struct CreateProductUseCase<P, C>
where
    P: ProductRepository,
    C: CategoryRepository,
{
    pub products: P,
    pub categories: C,
}

impl<P, C> CreateProductUseCase<P, C>
where
    P: ProductRepository,
    C: CategoryRepository,
{
    pub async fn execute(&self, input: CreateProductInput) -> Result<Product, StoreServiceError> {
        if input.name_en.trim().is_empty()
            || !(0..=MAX_PRICE_CENTS).contains(&input.price_cents)
            || !(0..=100).contains(&input.discount_percentage)
            || input.stock < 0
        {
            return Err(StoreServiceError::MissingData);
        }
        if self.categories.find_by_id(input.category_id).await?.is_none() {
            return Err(StoreServiceError::CategoryNotFound);
        }

        let now = Utc::now();
        let product = Product {
            id: Uuid::new_v4(),
            category_id: input.category_id,
            brand_id: input.brand_id,
            size_id: input.size_id,
            name_en: input.name_en,
            name_it: input.name_it,
            name_de: input.name_de,
            description_en: input.description_en,
            description_it: input.description_it,
            description_de: input.description_de,
            price_cents: input.price_cents,
            discount_percentage: input.discount_percentage,
            stock: input.stock,
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        self.products.create(&product).await?;
        Ok(product)
    }
}

// ── Variants ─────────────────────────────────────────────────────────────────

pub struct ListVariantsUseCase<P: ProductRepository> {
    pub products: P,
}

impl<P: ProductRepository> ListVariantsUseCase<P> {
    pub async fn execute(
        &self,
        product_id: Uuid,
    ) -> Result<Vec<ProductVariant>, StoreServiceError> {
        if self.products.find_by_id(product_id).await?.is_none() {
            return Err(StoreServiceError::ProductNotFound);
        }
        self.products.list_variants(product_id).await
    }
}

pub struct GetVariantUseCase<P: ProductRepository> {
    pub products: P,
}

impl<P: ProductRepository> GetVariantUseCase<P> {
    /// The variant must belong to the product named in the path.
    pub async fn execute(
        &self,
        product_id: Uuid,
        variant_id: Uuid,
    ) -> Result<ProductVariant, StoreServiceError> {
        let variant = self
            .products
            .find_variant(variant_id)
            .await?
            .ok_or(StoreServiceError::VariantNotFound)?;
        if variant.product_id != product_id {
            return Err(StoreServiceError::VariantNotFound);
        }
        Ok(variant)
    }
}

pub struct CreateVariantInput {
    pub size_id: Option<Uuid>,
    pub stock: i32,
    pub price_override_cents: Option<i64>,
    pub sku: Option<String>,
    pub color_ids: Vec<Uuid>,
}

pub struct CreateVariantUseCase<P: ProductRepository> {
    pub products: P,
}

impl<P: ProductRepository> CreateVariantUseCase<P> {
    pub async fn execute(
        &self,
        product_id: Uuid,
        input: CreateVariantInput,
    ) -> Result<ProductVariant, StoreServiceError> {
        if self.products.find_by_id(product_id).await?.is_none() {
            return Err(StoreServiceError::ProductNotFound);
        }
        if input.stock < 0
            || input
                .price_override_cents
                .is_some_and(|p| !(0..=MAX_PRICE_CENTS).contains(&p))
        {
            return Err(StoreServiceError::MissingData);
        }

        let now = Utc::now();
        let variant = ProductVariant {
            id: Uuid::new_v4(),
            product_id,
            size_id: input.size_id,
            stock: input.stock,
            price_override_cents: input.price_override_cents,
            sku: input.sku,
            color_ids: input.color_ids,
            created_at: now,
            updated_at: now,
        };
        self.products.create_variant(&variant).await?;
        Ok(variant)
    }
}
