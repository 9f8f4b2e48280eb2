use uuid::Uuid;

use emporia_core::pagination::PageRequest;
use emporia_store::domain::types::{MAX_PRICE_CENTS, ProductFilter};
use emporia_store::error::StoreServiceError;
use emporia_store::usecase::catalog::{
    CreateBrandUseCase, CreateLocalizedInput, CreateProductInput, CreateProductUseCase,
    CreateVariantInput, CreateVariantUseCase, GetVariantUseCase, ListProductsUseCase,
};

use crate::helpers::{
    MockBrandRepo, MockCategoryRepo, MockProductRepo, test_entry, test_product, test_variant,
};

fn localized_input(name: &str) -> CreateLocalizedInput {
    CreateLocalizedInput {
        name: name.to_owned(),
        name_it: None,
        name_de: None,
        description: None,
        description_it: None,
        description_de: None,
    }
}

#[tokio::test]
async fn should_create_brand() {
    let uc = CreateBrandUseCase {
        brands: MockBrandRepo::empty(),
    };
    let brand = uc.execute(localized_input("Acme")).await.unwrap();
    assert_eq!(brand.name, "Acme");
}

#[tokio::test]
async fn should_reject_duplicate_brand_name() {
    let uc = CreateBrandUseCase {
        brands: MockBrandRepo::new(vec![test_entry("Acme")]),
    };
    let result = uc.execute(localized_input("Acme")).await;
    assert!(matches!(result, Err(StoreServiceError::BrandAlreadyExists)));
}

#[tokio::test]
async fn should_reject_blank_brand_name() {
    let uc = CreateBrandUseCase {
        brands: MockBrandRepo::empty(),
    };
    let result = uc.execute(localized_input("   ")).await;
    assert!(matches!(result, Err(StoreServiceError::MissingData)));
}

// ── Products ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_create_product_in_existing_category() {
    let category = test_entry("Shirts");
    let uc = CreateProductUseCase {
        products: MockProductRepo::empty(),
        categories: MockCategoryRepo::new(vec![category.clone()]),
    };

    let product = uc
        .execute(CreateProductInput {
            category_id: category.id,
            brand_id: None,
            size_id: None,
            name_en: "Linen Shirt".to_owned(),
            name_it: Some("Camicia di lino".to_owned()),
            name_de: None,
            description_en: None,
            description_it: None,
            description_de: None,
            price_cents: 4_999,
            discount_percentage: 10,
            stock: 20,
        })
        .await
        .unwrap();

    assert!(product.is_active, "new products are live immediately");
    assert_eq!(product.discounted_price_cents(), 4_500);
}

#[tokio::test]
async fn should_reject_product_in_unknown_category() {
    let uc = CreateProductUseCase {
        products: MockProductRepo::empty(),
        categories: MockCategoryRepo::empty(),
    };

    let result = uc
        .execute(CreateProductInput {
            category_id: Uuid::new_v4(),
            brand_id: None,
            size_id: None,
            name_en: "Orphan".to_owned(),
            name_it: None,
            name_de: None,
            description_en: None,
            description_it: None,
            description_de: None,
            price_cents: 100,
            discount_percentage: 0,
            stock: 1,
        })
        .await;
    assert!(matches!(result, Err(StoreServiceError::CategoryNotFound)));
}

#[tokio::test]
async fn should_reject_out_of_range_discount() {
    let category = test_entry("Shirts");
    let uc = CreateProductUseCase {
        products: MockProductRepo::empty(),
        categories: MockCategoryRepo::new(vec![category.clone()]),
    };

    let result = uc
        .execute(CreateProductInput {
            category_id: category.id,
            brand_id: None,
            size_id: None,
            name_en: "Too Cheap".to_owned(),
            name_it: None,
            name_de: None,
            description_en: None,
            description_it: None,
            description_de: None,
            price_cents: 100,
            discount_percentage: 101,
            stock: 1,
        })
        .await;
    assert!(matches!(result, Err(StoreServiceError::MissingData)));
}

#[tokio::test]
async fn should_reject_price_above_cap() {
    let category = test_entry("Shirts");
    let uc = CreateProductUseCase {
        products: MockProductRepo::empty(),
        categories: MockCategoryRepo::new(vec![category.clone()]),
    };

    let result = uc
        .execute(CreateProductInput {
            category_id: category.id,
            brand_id: None,
            size_id: None,
            name_en: "Priceless".to_owned(),
            name_it: None,
            name_de: None,
            description_en: None,
            description_it: None,
            description_de: None,
            price_cents: MAX_PRICE_CENTS + 1,
            discount_percentage: 1,
            stock: 1,
        })
        .await;
    assert!(matches!(result, Err(StoreServiceError::MissingData)));
}

#[tokio::test]
async fn should_derive_discount_at_price_cap_without_overflow() {
    let mut product = test_product(Uuid::new_v4(), "Cap", MAX_PRICE_CENTS);
    product.discount_percentage = 25;
    assert_eq!(product.discounted_price_cents(), MAX_PRICE_CENTS / 4 * 3);
}

#[tokio::test]
async fn should_reject_variant_override_above_cap() {
    let product = test_product(Uuid::new_v4(), "Shirt", 4_999);
    let uc = CreateVariantUseCase {
        products: MockProductRepo::new(vec![product.clone()], vec![]),
    };

    let result = uc
        .execute(
            product.id,
            CreateVariantInput {
                size_id: None,
                stock: 1,
                price_override_cents: Some(MAX_PRICE_CENTS + 1),
                sku: None,
                color_ids: vec![],
            },
        )
        .await;
    assert!(matches!(result, Err(StoreServiceError::MissingData)));
}

#[tokio::test]
async fn should_list_only_active_products_sorted_by_name() {
    let category_id = Uuid::new_v4();
    let mut hidden = test_product(category_id, "Hidden", 100);
    hidden.is_active = false;
    let products = MockProductRepo::new(
        vec![
            test_product(category_id, "Zip Jacket", 100),
            hidden,
            test_product(category_id, "Anorak", 100),
        ],
        vec![],
    );

    let uc = ListProductsUseCase { products };
    let listed = uc
        .execute(ProductFilter::default(), PageRequest::default())
        .await
        .unwrap();

    let names: Vec<&str> = listed.iter().map(|p| p.name_en.as_str()).collect();
    assert_eq!(names, ["Anorak", "Zip Jacket"]);
}

#[tokio::test]
async fn should_filter_products_by_category() {
    let shirts = Uuid::new_v4();
    let shoes = Uuid::new_v4();
    let products = MockProductRepo::new(
        vec![
            test_product(shirts, "Shirt", 100),
            test_product(shoes, "Sneaker", 100),
        ],
        vec![],
    );

    let uc = ListProductsUseCase { products };
    let listed = uc
        .execute(
            ProductFilter {
                category_id: Some(shirts),
                brand_id: None,
            },
            PageRequest::default(),
        )
        .await
        .unwrap();

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name_en, "Shirt");
}

// ── Variants ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_create_variant_for_existing_product() {
    let product = test_product(Uuid::new_v4(), "Shirt", 4_999);
    let uc = CreateVariantUseCase {
        products: MockProductRepo::new(vec![product.clone()], vec![]),
    };

    let variant = uc
        .execute(
            product.id,
            CreateVariantInput {
                size_id: None,
                stock: 3,
                price_override_cents: Some(5_499),
                sku: Some("SH-L-BLUE".to_owned()),
                color_ids: vec![Uuid::new_v4()],
            },
        )
        .await
        .unwrap();

    assert_eq!(variant.product_id, product.id);
    assert_eq!(variant.effective_price_cents(&product), 5_499);
}

#[tokio::test]
async fn should_reject_variant_for_unknown_product() {
    let uc = CreateVariantUseCase {
        products: MockProductRepo::empty(),
    };

    let result = uc
        .execute(
            Uuid::new_v4(),
            CreateVariantInput {
                size_id: None,
                stock: 1,
                price_override_cents: None,
                sku: None,
                color_ids: vec![],
            },
        )
        .await;
    assert!(matches!(result, Err(StoreServiceError::ProductNotFound)));
}

#[tokio::test]
async fn should_not_serve_variant_through_wrong_product_path() {
    let product = test_product(Uuid::new_v4(), "Shirt", 100);
    let other = test_product(Uuid::new_v4(), "Shoe", 100);
    let variant = test_variant(product.id, None);

    let uc = GetVariantUseCase {
        products: MockProductRepo::new(vec![product, other.clone()], vec![variant.clone()]),
    };

    let result = uc.execute(other.id, variant.id).await;
    assert!(matches!(result, Err(StoreServiceError::VariantNotFound)));
}
