use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

fn localized_table(table: impl Iden + Copy + 'static) -> TableCreateStatement {
    Table::create()
        .table(table)
        .if_not_exists()
        .col(ColumnDef::new(Localized::Id).uuid().not_null().primary_key())
        .col(
            ColumnDef::new(Localized::Name)
                .string()
                .not_null()
                .unique_key(),
        )
        .col(ColumnDef::new(Localized::NameIt).string())
        .col(ColumnDef::new(Localized::NameDe).string())
        .col(ColumnDef::new(Localized::Description).text())
        .col(ColumnDef::new(Localized::DescriptionIt).text())
        .col(ColumnDef::new(Localized::DescriptionDe).text())
        .col(
            ColumnDef::new(Localized::CreatedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(
            ColumnDef::new(Localized::UpdatedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Brands and categories share the same localized column set.
        manager.create_table(localized_table(Brands::Table)).await?;
        manager
            .create_table(localized_table(Categories::Table))
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Colors::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Colors::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Colors::Name).string().not_null().unique_key())
                    .col(ColumnDef::new(Colors::HexCode).string())
                    .col(
                        ColumnDef::new(Colors::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Sizes::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Sizes::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Sizes::Label).string().not_null().unique_key())
                    .col(ColumnDef::new(Sizes::Gender).string())
                    .col(
                        ColumnDef::new(Sizes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Products::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Products::CategoryId).uuid().not_null())
                    .col(ColumnDef::new(Products::BrandId).uuid())
                    .col(ColumnDef::new(Products::SizeId).uuid())
                    .col(ColumnDef::new(Products::NameEn).string().not_null())
                    .col(ColumnDef::new(Products::NameIt).string())
                    .col(ColumnDef::new(Products::NameDe).string())
                    .col(ColumnDef::new(Products::DescriptionEn).text())
                    .col(ColumnDef::new(Products::DescriptionIt).text())
                    .col(ColumnDef::new(Products::DescriptionDe).text())
                    .col(ColumnDef::new(Products::PriceCents).big_integer().not_null())
                    .col(
                        ColumnDef::new(Products::DiscountPercentage)
                            .small_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Products::Stock).integer().not_null().default(0))
                    .col(
                        ColumnDef::new(Products::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Products::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Products::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Products::Table, Products::CategoryId)
                            .to(Categories::Table, Localized::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Products::Table, Products::BrandId)
                            .to(Brands::Table, Localized::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Products::Table, Products::SizeId)
                            .to(Sizes::Table, Sizes::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // The public listing filters on category/brand and sorts by name_en.
        manager
            .create_index(
                Index::create()
                    .table(Products::Table)
                    .col(Products::CategoryId)
                    .name("idx_products_category_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Products::Table)
                    .col(Products::BrandId)
                    .name("idx_products_brand_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Products::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Sizes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Colors::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Categories::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Brands::Table).to_owned())
            .await
    }
}

/// Column set shared by brands and categories.
#[derive(Iden)]
enum Localized {
    Id,
    Name,
    NameIt,
    NameDe,
    Description,
    DescriptionIt,
    DescriptionDe,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone, Copy)]
enum Brands {
    Table,
}

#[derive(Iden, Clone, Copy)]
enum Categories {
    Table,
}

#[derive(Iden)]
enum Colors {
    Table,
    Id,
    Name,
    HexCode,
    CreatedAt,
}

#[derive(Iden)]
enum Sizes {
    Table,
    Id,
    Label,
    Gender,
    CreatedAt,
}

#[derive(Iden)]
enum Products {
    Table,
    Id,
    CategoryId,
    BrandId,
    SizeId,
    NameEn,
    NameIt,
    NameDe,
    DescriptionEn,
    DescriptionIt,
    DescriptionDe,
    PriceCents,
    DiscountPercentage,
    Stock,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
