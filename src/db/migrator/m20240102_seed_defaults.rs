use crate::constants::auth::{BOOTSTRAP_PASSWORD, BOOTSTRAP_USERNAME};
use crate::entities::{inventory, prelude::*, users};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

fn hash_bootstrap_password() -> Result<String, DbErr> {
    use argon2::{
        Argon2,
        password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
    };

    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(BOOTSTRAP_PASSWORD.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| DbErr::Custom(format!("Failed to hash bootstrap password: {e}")))
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let now = chrono::Utc::now().to_rfc3339();
        let password_hash = hash_bootstrap_password()?;

        let mut admin = Query::insert();
        admin
            .into_table(Users)
            .columns([
                users::Column::Username,
                users::Column::PasswordHash,
                users::Column::Role,
                users::Column::CreatedAt,
            ])
            .values([
                BOOTSTRAP_USERNAME.into(),
                password_hash.into(),
                "admin".into(),
                now.into(),
            ])
            .map_err(|e| DbErr::Custom(e.to_string()))?
            .on_conflict(
                OnConflict::column(users::Column::Username)
                    .do_nothing()
                    .to_owned(),
            );

        manager.exec_stmt(admin).await?;

        let mut sample = Query::insert();
        sample
            .into_table(Inventory)
            .columns([
                inventory::Column::Id,
                inventory::Column::Name,
                inventory::Column::Quantity,
                inventory::Column::Price,
            ])
            .values([1.into(), "Laptop".into(), 10.into(), 999.99.into()])
            .map_err(|e| DbErr::Custom(e.to_string()))?
            .on_conflict(OnConflict::column(inventory::Column::Id).do_nothing().to_owned());

        manager.exec_stmt(sample).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let sample = Query::delete()
            .from_table(Inventory)
            .and_where(Expr::col(inventory::Column::Id).eq(1))
            .to_owned();

        manager.exec_stmt(sample).await?;

        let admin = Query::delete()
            .from_table(Users)
            .and_where(Expr::col(users::Column::Username).eq(BOOTSTRAP_USERNAME))
            .to_owned();

        manager.exec_stmt(admin).await
    }
}
