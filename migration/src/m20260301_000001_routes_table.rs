use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Route::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Route::Name)
                            .string_len(128)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Route::Url).text().not_null())
                    .col(
                        ColumnDef::new(Route::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 按创建时间列出路由
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_routes_created_at")
                    .table(Route::Table)
                    .col(Route::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_routes_created_at").to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Route::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Route {
    #[sea_orm(iden = "routes")]
    Table,
    Name,
    Url,
    CreatedAt,
}
