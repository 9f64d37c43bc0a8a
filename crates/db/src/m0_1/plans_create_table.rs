use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use crate::table::Plans;

pub struct Operation;

fn up_statement() -> TableCreateStatement {
    Table::create()
        .table(Plans::Table)
        .col(
            ColumnDef::new(Plans::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(Plans::Date).string().not_null().string_len(10))
        .col(
            ColumnDef::new(Plans::MealType)
                .string()
                .not_null()
                .string_len(25),
        )
        .col(ColumnDef::new(Plans::Items).text().not_null().default(""))
        .col(ColumnDef::new(Plans::Calories).double().not_null().default(0.0))
        .col(ColumnDef::new(Plans::Protein).double().not_null().default(0.0))
        .col(ColumnDef::new(Plans::Carbs).double().not_null().default(0.0))
        .col(ColumnDef::new(Plans::Fat).double().not_null().default(0.0))
        .to_owned()
}

fn down_statement() -> TableDropStatement {
    Table::drop().table(Plans::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for Operation {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statment = up_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statment).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statment = down_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statment).execute(connection).await?;

        Ok(())
    }
}
