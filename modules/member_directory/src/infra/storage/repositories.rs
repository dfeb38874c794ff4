//! SeaORM repository implementations

use crate::contract::{Member, MemberFilter};
use crate::domain::repository::{MemberField, MemberRepository, NewMemberRecord};
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{
    sea_query::{Expr, LikeExpr},
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Select,
};
use std::sync::Arc;

use super::entity;
use super::mapper::search_key;

// ===== Member Repository =====

pub struct SeaOrmMemberRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmMemberRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// Translate the domain filter into WHERE clauses
fn filtered(filter: &MemberFilter) -> Select<entity::Entity> {
    let mut query = entity::Entity::find();

    if let Some(search) = &filter.search {
        let pattern = format!("%{}%", escape_like(&search_key(search)));
        query = query.filter(
            Expr::col(entity::Column::FullNameSearch).like(LikeExpr::new(pattern).escape('\\')),
        );
    }
    if let Some(department) = &filter.department {
        query = query.filter(entity::Column::Department.eq(department.as_str()));
    }
    if let Some(state) = &filter.state_of_origin {
        query = query.filter(entity::Column::StateOfOrigin.eq(state.as_str()));
    }

    query
}

/// Escape LIKE wildcards so the search text matches literally
fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[async_trait]
impl MemberRepository for SeaOrmMemberRepository {
    async fn insert(&self, record: &NewMemberRecord) -> Result<Member> {
        let active: entity::ActiveModel = record.into();
        let model = active.insert(&*self.db).await?;

        Ok(model.into())
    }

    async fn count(&self, filter: &MemberFilter) -> Result<u64> {
        let total = filtered(filter).count(&*self.db).await?;

        Ok(total)
    }

    async fn find(&self, filter: &MemberFilter, skip: u64, limit: u64) -> Result<Vec<Member>> {
        let results = filtered(filter)
            .order_by_asc(entity::Column::Id)
            .offset(skip)
            .limit(limit)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn find_by_id_number(&self, id_number: &str) -> Result<Option<Member>> {
        let result = entity::Entity::find()
            .filter(entity::Column::IdNumber.eq(id_number))
            .order_by_asc(entity::Column::Id)
            .one(&*self.db)
            .await?;

        Ok(result.map(|e| e.into()))
    }

    async fn distinct(&self, field: MemberField) -> Result<Vec<String>> {
        let column = match field {
            MemberField::Department => entity::Column::Department,
            MemberField::StateOfOrigin => entity::Column::StateOfOrigin,
        };

        let values = entity::Entity::find()
            .select_only()
            .column(column)
            .distinct()
            .order_by_asc(column)
            .into_tuple::<String>()
            .all(&*self.db)
            .await?;

        Ok(values)
    }

    async fn list_all(&self) -> Result<Vec<Member>> {
        let results = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }
}
