use sea_orm::entity::prelude::*;

/// Size/stock variant of a product. Colors attach through the
/// `variant_colors` join table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "product_variants")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub product_id: Uuid,
    pub size_id: Option<Uuid>,
    pub stock: i32,
    pub price_override_cents: Option<i64>,
    #[sea_orm(unique)]
    pub sku: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::products::Entity",
        from = "Column::ProductId",
        to = "super::products::Column::Id"
    )]
    Product,
    #[sea_orm(has_many = "super::variant_colors::Entity")]
    VariantColors,
}

impl Related<super::products::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl Related<super::variant_colors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VariantColors.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
