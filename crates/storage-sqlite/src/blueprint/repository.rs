use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use blueprint_core::blueprint::{
    BlueprintCategory, BlueprintRepositoryTrait, NecRef, NewBlueprintCategory, NewNecRef,
};
use blueprint_core::errors::{DatabaseError, Error, Result};

use super::model::{BlueprintCategoryDB, NecRefDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::{IntoCore, StorageError};
use crate::schema::{blueprint_categories, nec_refs};

pub struct BlueprintRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl BlueprintRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        BlueprintRepository { pool, writer }
    }

    fn into_domain(rows: Vec<BlueprintCategoryDB>) -> Result<Vec<BlueprintCategory>> {
        rows.into_iter()
            .map(|row| BlueprintCategory::try_from(row).map_err(Error::from))
            .collect()
    }
}

#[async_trait]
impl BlueprintRepositoryTrait for BlueprintRepository {
    fn load_active_categories(&self) -> Result<Vec<BlueprintCategory>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = blueprint_categories::table
            .filter(blueprint_categories::is_active.eq(true))
            .order(blueprint_categories::code.asc())
            .select(BlueprintCategoryDB::as_select())
            .load::<BlueprintCategoryDB>(&mut conn)
            .into_core()?;
        Self::into_domain(rows)
    }

    fn load_categories(&self) -> Result<Vec<BlueprintCategory>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = blueprint_categories::table
            .order(blueprint_categories::code.asc())
            .select(BlueprintCategoryDB::as_select())
            .load::<BlueprintCategoryDB>(&mut conn)
            .into_core()?;
        Self::into_domain(rows)
    }

    fn get_category(&self, code: &str) -> Result<BlueprintCategory> {
        let mut conn = get_connection(&self.pool)?;
        let row = blueprint_categories::table
            .find(code)
            .select(BlueprintCategoryDB::as_select())
            .first::<BlueprintCategoryDB>(&mut conn)
            .optional()
            .into_core()?
            .ok_or_else(|| {
                Error::Database(DatabaseError::NotFound(format!(
                    "Blueprint category {}",
                    code
                )))
            })?;
        Ok(BlueprintCategory::try_from(row)?)
    }

    async fn upsert_categories(&self, categories: Vec<NewBlueprintCategory>) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let now = Utc::now().naive_utc();
                let mut affected_rows = 0;
                for category in categories {
                    let row = BlueprintCategoryDB::from_new(category, now);
                    affected_rows += diesel::insert_into(blueprint_categories::table)
                        .values(&row)
                        .on_conflict(blueprint_categories::code)
                        .do_update()
                        .set((
                            blueprint_categories::name.eq(&row.name),
                            blueprint_categories::description.eq(&row.description),
                            blueprint_categories::weight.eq(&row.weight),
                            blueprint_categories::is_active.eq(row.is_active),
                            blueprint_categories::updated_at.eq(row.updated_at),
                        ))
                        .execute(conn)
                        .map_err(StorageError::from)?;
                }
                Ok(affected_rows)
            })
            .await
    }

    fn load_nec_refs(&self) -> Result<Vec<NecRef>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = nec_refs::table
            .order((
                nec_refs::article.asc(),
                nec_refs::section.asc(),
                nec_refs::edition.asc(),
            ))
            .select(NecRefDB::as_select())
            .load::<NecRefDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(NecRef::from).collect())
    }

    async fn insert_nec_refs(&self, refs: Vec<NewNecRef>) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let mut inserted = 0;
                for nec_ref in refs {
                    let row = NecRefDB::from_new(Uuid::new_v4().to_string(), nec_ref);
                    inserted += diesel::insert_into(nec_refs::table)
                        .values(&row)
                        .on_conflict((nec_refs::article, nec_refs::section, nec_refs::edition))
                        .do_nothing()
                        .execute(conn)
                        .map_err(StorageError::from)?;
                }
                Ok(inserted)
            })
            .await
    }

    fn ping(&self) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        diesel::sql_query("SELECT 1").execute(&mut conn).into_core()?;
        Ok(())
    }
}
