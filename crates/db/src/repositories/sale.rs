//! Sale repository for owner-scoped database operations.
//!
//! Rows belonging to another owner behave exactly like missing rows: reads
//! skip them and writes report "not found".

use chrono::NaiveDate;
use sea_orm::sea_query::{Expr, LikeExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use salesbook_core::sales::{Sale, SaleStatus, SalesFilter, client_search_key};
use salesbook_shared::types::{SaleId, UserId};

use crate::entities::{sales, sea_orm_active_enums};

/// Sale repository.
#[derive(Debug, Clone)]
pub struct SaleRepository {
    db: DatabaseConnection,
}

impl From<sales::Model> for Sale {
    fn from(model: sales::Model) -> Self {
        Self {
            id: SaleId::from_uuid(model.id),
            owner_id: UserId::from_uuid(model.user_id),
            client_name: model.client_name,
            item_sold: model.item_sold,
            value: model.value,
            date: model.date,
            status: model.status.into(),
            paid_at: model.paid_at,
        }
    }
}

impl SaleRepository {
    /// Creates a new sale repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the owner's sales matching `filter`, newest first.
    ///
    /// Client matching is a case-insensitive substring against the stored
    /// search key, folded the same way as the in-memory filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_by_owner(
        &self,
        owner_id: UserId,
        filter: &SalesFilter,
    ) -> Result<Vec<Sale>, DbErr> {
        let mut query =
            sales::Entity::find().filter(sales::Column::UserId.eq(owner_id.into_inner()));

        let needle = filter.normalized_query();
        if !needle.is_empty() {
            let pattern = format!("%{}%", escape_like(&needle));
            query = query.filter(
                Expr::col(sales::Column::ClientKey).like(LikeExpr::new(pattern).escape('\\')),
            );
        }
        if let Some(start) = filter.start_date {
            query = query.filter(sales::Column::Date.gte(start));
        }
        if let Some(end) = filter.end_date {
            query = query.filter(sales::Column::Date.lte(end));
        }
        if let Some(status) = filter.status {
            query = query.filter(
                sales::Column::Status.eq(sea_orm_active_enums::SaleStatus::from(status)),
            );
        }

        let rows = query
            .order_by_desc(sales::Column::Date)
            .order_by_desc(sales::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(Sale::from).collect())
    }

    /// Lists the owner's sales for one client, matched by exact name, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_by_client(
        &self,
        owner_id: UserId,
        client_name: &str,
    ) -> Result<Vec<Sale>, DbErr> {
        let rows = sales::Entity::find()
            .filter(sales::Column::UserId.eq(owner_id.into_inner()))
            .filter(sales::Column::ClientName.eq(client_name))
            .order_by_desc(sales::Column::Date)
            .order_by_desc(sales::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(Sale::from).collect())
    }

    /// Finds one of the owner's sales.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find(&self, id: SaleId, owner_id: UserId) -> Result<Option<Sale>, DbErr> {
        let row = self.find_model(id, owner_id).await?;
        Ok(row.map(Sale::from))
    }

    /// Persists a new sale as given.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails or violates a table constraint.
    pub async fn insert(&self, sale: &Sale) -> Result<Sale, DbErr> {
        let now = chrono::Utc::now().into();
        let model = sales::ActiveModel {
            id: Set(sale.id.into_inner()),
            user_id: Set(sale.owner_id.into_inner()),
            client_name: Set(sale.client_name.clone()),
            client_key: Set(client_search_key(&sale.client_name)),
            item_sold: Set(sale.item_sold.clone()),
            value: Set(sale.value),
            date: Set(sale.date),
            status: Set(sale.status.into()),
            paid_at: Set(sale.paid_at),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&self.db).await?;
        tracing::info!(
            sale_id = %inserted.id,
            user_id = %inserted.user_id,
            "Sale created"
        );

        Ok(inserted.into())
    }

    /// Moves one of the owner's sales to `status`, stamping `paid_at` with `today`
    /// when paid and clearing it when pending.
    ///
    /// Returns `None` when the sale does not exist or belongs to someone else.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn update_status(
        &self,
        id: SaleId,
        owner_id: UserId,
        status: SaleStatus,
        today: NaiveDate,
    ) -> Result<Option<Sale>, DbErr> {
        let Some(existing) = self.find_model(id, owner_id).await? else {
            return Ok(None);
        };

        let mut sale = Sale::from(existing.clone());
        sale.set_status(status, today);

        let mut model: sales::ActiveModel = existing.into();
        model.status = Set(sale.status.into());
        model.paid_at = Set(sale.paid_at);
        model.updated_at = Set(chrono::Utc::now().into());

        let updated = model.update(&self.db).await?;
        tracing::info!(
            sale_id = %updated.id,
            status = %status,
            "Sale status updated"
        );

        Ok(Some(updated.into()))
    }

    /// Deletes one of the owner's sales. Returns whether a row was removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn delete(&self, id: SaleId, owner_id: UserId) -> Result<bool, DbErr> {
        let result = sales::Entity::delete_many()
            .filter(sales::Column::Id.eq(id.into_inner()))
            .filter(sales::Column::UserId.eq(owner_id.into_inner()))
            .exec(&self.db)
            .await?;

        if result.rows_affected > 0 {
            tracing::info!(sale_id = %id, "Sale deleted");
        }

        Ok(result.rows_affected > 0)
    }

    async fn find_model(
        &self,
        id: SaleId,
        owner_id: UserId,
    ) -> Result<Option<sales::Model>, DbErr> {
        sales::Entity::find_by_id(id.into_inner())
            .filter(sales::Column::UserId.eq(owner_id.into_inner()))
            .one(&self.db)
            .await
    }
}

/// Escapes `LIKE` wildcards so user input matches literally.
fn escape_like(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
