use sqlx_migrator::{Info, Migrator};

mod export;
mod m0_1;
mod plan;
pub mod table;

pub use export::*;
pub use plan::*;

pub fn migrator<DB: sqlx::Database>() -> Result<Migrator<DB>, sqlx_migrator::Error>
where
    m0_1::Migration: sqlx_migrator::Migration<DB>,
{
    let mut migrator = Migrator::default();
    migrator.add_migrations(vec![Box::new(m0_1::Migration)])?;

    Ok(migrator)
}
