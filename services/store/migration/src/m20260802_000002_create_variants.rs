use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProductVariants::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProductVariants::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ProductVariants::ProductId).uuid().not_null())
                    .col(ColumnDef::new(ProductVariants::SizeId).uuid())
                    .col(
                        ColumnDef::new(ProductVariants::Stock)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(ProductVariants::PriceOverrideCents).big_integer())
                    .col(ColumnDef::new(ProductVariants::Sku).string().unique_key())
                    .col(
                        ColumnDef::new(ProductVariants::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProductVariants::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ProductVariants::Table, ProductVariants::ProductId)
                            .to(Products::Table, Products::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ProductVariants::Table, ProductVariants::SizeId)
                            .to(Sizes::Table, Sizes::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(ProductVariants::Table)
                    .col(ProductVariants::ProductId)
                    .name("idx_product_variants_product_id")
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(VariantColors::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(VariantColors::VariantId).uuid().not_null())
                    .col(ColumnDef::new(VariantColors::ColorId).uuid().not_null())
                    .primary_key(
                        Index::create()
                            .col(VariantColors::VariantId)
                            .col(VariantColors::ColorId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(VariantColors::Table, VariantColors::VariantId)
                            .to(ProductVariants::Table, ProductVariants::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(VariantColors::Table, VariantColors::ColorId)
                            .to(Colors::Table, Colors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VariantColors::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ProductVariants::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum ProductVariants {
    Table,
    Id,
    ProductId,
    SizeId,
    Stock,
    PriceOverrideCents,
    Sku,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum VariantColors {
    Table,
    VariantId,
    ColorId,
}

#[derive(Iden)]
enum Products {
    Table,
    Id,
}

#[derive(Iden)]
enum Sizes {
    Table,
    Id,
}

#[derive(Iden)]
enum Colors {
    Table,
    Id,
}
