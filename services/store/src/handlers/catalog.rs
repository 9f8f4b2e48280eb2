use axum::{
    Json,
    extract::{Path, RawQuery, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use emporia_auth_types::session::Session;
use emporia_core::pagination::PageRequest;

use crate::domain::types::{Color, LocalizedEntry, Product, ProductFilter, ProductVariant, Size};
use crate::error::StoreServiceError;
use crate::state::AppState;
use crate::usecase::catalog::{
    CreateBrandUseCase, CreateCategoryUseCase, CreateColorInput, CreateColorUseCase,
    CreateLocalizedInput, CreateProductInput, CreateProductUseCase, CreateSizeInput,
    CreateSizeUseCase, CreateVariantInput, CreateVariantUseCase, GetBrandUseCase,
    GetCategoryUseCase, GetProductUseCase, GetVariantUseCase, ListBrandsUseCase,
    ListCategoriesUseCase, ListColorsUseCase, ListProductsUseCase, ListSizesUseCase,
    ListVariantsUseCase,
};

/// Catalog writes are reserved for partner accounts.
fn require_partner(session: &Session) -> Result<(), StoreServiceError> {
    if !session.is_partner {
        return Err(StoreServiceError::Forbidden);
    }
    Ok(())
}

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct LocalizedResponse {
    pub id: String,
    pub name: String,
    pub name_it: Option<String>,
    pub name_de: Option<String>,
    pub description: Option<String>,
    pub description_it: Option<String>,
    pub description_de: Option<String>,
    #[serde(serialize_with = "emporia_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<LocalizedEntry> for LocalizedResponse {
    fn from(e: LocalizedEntry) -> Self {
        Self {
            id: e.id.to_string(),
            name: e.name,
            name_it: e.name_it,
            name_de: e.name_de,
            description: e.description,
            description_it: e.description_it,
            description_de: e.description_de,
            created_at: e.created_at,
        }
    }
}

#[derive(Serialize)]
pub struct ColorResponse {
    pub id: String,
    pub name: String,
    pub hex_code: Option<String>,
}

impl From<Color> for ColorResponse {
    fn from(c: Color) -> Self {
        Self {
            id: c.id.to_string(),
            name: c.name,
            hex_code: c.hex_code,
        }
    }
}

#[derive(Serialize)]
pub struct SizeResponse {
    pub id: String,
    pub label: String,
    pub gender: Option<&'static str>,
}

impl From<Size> for SizeResponse {
    fn from(s: Size) -> Self {
        Self {
            id: s.id.to_string(),
            label: s.label,
            gender: s.gender.map(|g| g.as_str()),
        }
    }
}

#[derive(Serialize)]
pub struct ProductResponse {
    pub id: String,
    pub category_id: String,
    pub brand_id: Option<String>,
    pub size_id: Option<String>,
    pub name_en: String,
    pub name_it: Option<String>,
    pub name_de: Option<String>,
    pub description_en: Option<String>,
    pub description_it: Option<String>,
    pub description_de: Option<String>,
    pub price_cents: i64,
    pub discount_percentage: i16,
    pub discounted_price_cents: i64,
    pub stock: i32,
    pub is_active: bool,
    #[serde(serialize_with = "emporia_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        let discounted_price_cents = p.discounted_price_cents();
        Self {
            id: p.id.to_string(),
            category_id: p.category_id.to_string(),
            brand_id: p.brand_id.map(|id| id.to_string()),
            size_id: p.size_id.map(|id| id.to_string()),
            name_en: p.name_en,
            name_it: p.name_it,
            name_de: p.name_de,
            description_en: p.description_en,
            description_it: p.description_it,
            description_de: p.description_de,
            price_cents: p.price_cents,
            discount_percentage: p.discount_percentage,
            discounted_price_cents,
            stock: p.stock,
            is_active: p.is_active,
            created_at: p.created_at,
        }
    }
}

#[derive(Serialize)]
pub struct VariantResponse {
    pub id: String,
    pub product_id: String,
    pub size_id: Option<String>,
    pub stock: i32,
    pub price_override_cents: Option<i64>,
    pub sku: Option<String>,
    pub color_ids: Vec<String>,
}

impl From<ProductVariant> for VariantResponse {
    fn from(v: ProductVariant) -> Self {
        Self {
            id: v.id.to_string(),
            product_id: v.product_id.to_string(),
            size_id: v.size_id.map(|id| id.to_string()),
            stock: v.stock,
            price_override_cents: v.price_override_cents,
            sku: v.sku,
            color_ids: v.color_ids.iter().map(|id| id.to_string()).collect(),
        }
    }
}

// ── Brands ───────────────────────────────────────────────────────────────────

pub async fn list_brands(
    State(state): State<AppState>,
) -> Result<Json<Vec<LocalizedResponse>>, StoreServiceError> {
    let uc = ListBrandsUseCase {
        brands: state.brand_repo(),
    };
    let brands = uc.execute().await?;
    Ok(Json(brands.into_iter().map(Into::into).collect()))
}

pub async fn get_brand(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<LocalizedResponse>, StoreServiceError> {
    let uc = GetBrandUseCase {
        brands: state.brand_repo(),
    };
    Ok(Json(uc.execute(id).await?.into()))
}

#[derive(Deserialize)]
pub struct CreateLocalizedRequest {
    pub name: String,
    pub name_it: Option<String>,
    pub name_de: Option<String>,
    pub description: Option<String>,
    pub description_it: Option<String>,
    pub description_de: Option<String>,
}

impl CreateLocalizedRequest {
    fn into_input(self) -> CreateLocalizedInput {
        CreateLocalizedInput {
            name: self.name,
            name_it: self.name_it,
            name_de: self.name_de,
            description: self.description,
            description_it: self.description_it,
            description_de: self.description_de,
        }
    }
}

pub async fn create_brand(
    session: Session,
    State(state): State<AppState>,
    Json(body): Json<CreateLocalizedRequest>,
) -> Result<(StatusCode, Json<LocalizedResponse>), StoreServiceError> {
    require_partner(&session)?;
    let uc = CreateBrandUseCase {
        brands: state.brand_repo(),
    };
    let brand = uc.execute(body.into_input()).await?;
    Ok((StatusCode::CREATED, Json(brand.into())))
}

// ── Categories ───────────────────────────────────────────────────────────────

pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<LocalizedResponse>>, StoreServiceError> {
    let uc = ListCategoriesUseCase {
        categories: state.category_repo(),
    };
    let categories = uc.execute().await?;
    Ok(Json(categories.into_iter().map(Into::into).collect()))
}

pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<LocalizedResponse>, StoreServiceError> {
    let uc = GetCategoryUseCase {
        categories: state.category_repo(),
    };
    Ok(Json(uc.execute(id).await?.into()))
}

pub async fn create_category(
    session: Session,
    State(state): State<AppState>,
    Json(body): Json<CreateLocalizedRequest>,
) -> Result<(StatusCode, Json<LocalizedResponse>), StoreServiceError> {
    require_partner(&session)?;
    let uc = CreateCategoryUseCase {
        categories: state.category_repo(),
    };
    let category = uc.execute(body.into_input()).await?;
    Ok((StatusCode::CREATED, Json(category.into())))
}

// ── Colors ───────────────────────────────────────────────────────────────────

pub async fn list_colors(
    State(state): State<AppState>,
) -> Result<Json<Vec<ColorResponse>>, StoreServiceError> {
    let uc = ListColorsUseCase {
        colors: state.color_repo(),
    };
    let colors = uc.execute().await?;
    Ok(Json(colors.into_iter().map(Into::into).collect()))
}

#[derive(Deserialize)]
pub struct CreateColorRequest {
    pub name: String,
    pub hex_code: Option<String>,
}

pub async fn create_color(
    session: Session,
    State(state): State<AppState>,
    Json(body): Json<CreateColorRequest>,
) -> Result<(StatusCode, Json<ColorResponse>), StoreServiceError> {
    require_partner(&session)?;
    let uc = CreateColorUseCase {
        colors: state.color_repo(),
    };
    let color = uc
        .execute(CreateColorInput {
            name: body.name,
            hex_code: body.hex_code,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(color.into())))
}

// ── Sizes ────────────────────────────────────────────────────────────────────

pub async fn list_sizes(
    State(state): State<AppState>,
) -> Result<Json<Vec<SizeResponse>>, StoreServiceError> {
    let uc = ListSizesUseCase {
        sizes: state.size_repo(),
    };
    let sizes = uc.execute().await?;
    Ok(Json(sizes.into_iter().map(Into::into).collect()))
}

#[derive(Deserialize)]
pub struct CreateSizeRequest {
    pub label: String,
    pub gender: Option<String>,
}

pub async fn create_size(
    session: Session,
    State(state): State<AppState>,
    Json(body): Json<CreateSizeRequest>,
) -> Result<(StatusCode, Json<SizeResponse>), StoreServiceError> {
    require_partner(&session)?;
    let uc = CreateSizeUseCase {
        sizes: state.size_repo(),
    };
    let size = uc
        .execute(CreateSizeInput {
            label: body.label,
            gender: body.gender,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(size.into())))
}

// ── Products ─────────────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct ProductListQuery {
    pub category_id: Option<Uuid>,
    pub brand_id: Option<Uuid>,
    pub per_page: Option<u32>,
    pub page: Option<u32>,
}

pub async fn list_products(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<Vec<ProductResponse>>, StoreServiceError> {
    let query: ProductListQuery = raw_query
        .as_deref()
        .map(serde_qs::from_str)
        .transpose()
        .map_err(|_| StoreServiceError::MissingData)?
        .unwrap_or_default();

    let page = PageRequest {
        per_page: query.per_page.unwrap_or(25),
        page: query.page.unwrap_or(1),
    };
    let filter = ProductFilter {
        category_id: query.category_id,
        brand_id: query.brand_id,
    };

    let uc = ListProductsUseCase {
        products: state.product_repo(),
    };
    let products = uc.execute(filter, page).await?;
    Ok(Json(products.into_iter().map(Into::into).collect()))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProductResponse>, StoreServiceError> {
    let uc = GetProductUseCase {
        products: state.product_repo(),
    };
    Ok(Json(uc.execute(id).await?.into()))
}

#[derive(Deserialize)]
pub struct CreateProductRequest {
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
    #[serde(default)]
    pub discount_percentage: i16,
    #[serde(default)]
    pub stock: i32,
}

pub async fn create_product(
    session: Session,
    State(state): State<AppState>,
    Json(body): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), StoreServiceError> {
    require_partner(&session)?;
    let uc = CreateProductUseCase {
        products: state.product_repo(),
        categories: state.category_repo(),
    };
    let product = uc
        .execute(CreateProductInput {
            category_id: body.category_id,
            brand_id: body.brand_id,
            size_id: body.size_id,
            name_en: body.name_en,
            name_it: body.name_it,
            name_de: body.name_de,
            description_en: body.description_en,
            description_it: body.description_it,
            description_de: body.description_de,
            price_cents: body.price_cents,
            discount_percentage: body.discount_percentage,
            stock: body.stock,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(product.into())))
}

// ── Variants ─────────────────────────────────────────────────────────────────

pub async fn list_variants(
    State(state): State<AppState>,
    Path(product_id): Path<Uuid>,
) -> Result<Json<Vec<VariantResponse>>, StoreServiceError> {
    let uc = ListVariantsUseCase {
        products: state.product_repo(),
    };
    let variants = uc.execute(product_id).await?;
    Ok(Json(variants.into_iter().map(Into::into).collect()))
}

pub async fn get_variant(
    State(state): State<AppState>,
    Path((product_id, variant_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<VariantResponse>, StoreServiceError> {
    let uc = GetVariantUseCase {
        products: state.product_repo(),
    };
    Ok(Json(uc.execute(product_id, variant_id).await?.into()))
}

#[derive(Deserialize)]
pub struct CreateVariantRequest {
    pub size_id: Option<Uuid>,
    #[serde(default)]
    pub stock: i32,
    pub price_override_cents: Option<i64>,
    pub sku: Option<String>,
    #[serde(default)]
    pub color_ids: Vec<Uuid>,
}

pub async fn create_variant(
    session: Session,
    State(state): State<AppState>,
    Path(product_id): Path<Uuid>,
    Json(body): Json<CreateVariantRequest>,
) -> Result<(StatusCode, Json<VariantResponse>), StoreServiceError> {
    require_partner(&session)?;
    let uc = CreateVariantUseCase {
        products: state.product_repo(),
    };
    let variant = uc
        .execute(
            product_id,
            CreateVariantInput {
                size_id: body.size_id,
                stock: body.stock,
                price_override_cents: body.price_override_cents,
                sku: body.sku,
                color_ids: body.color_ids,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(variant.into())))
}
