use chrono::Utc;
use contracts::domain::a001_team::aggregate::Team;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_team")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub access_code: String,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Team {
    fn from(m: Model) -> Self {
        Team {
            id: m.id,
            name: m.name,
            access_code: m.access_code,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

pub async fn list_all(conn: &DatabaseConnection) -> Result<Vec<Team>, DbErr> {
    let items = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .order_by_asc(Column::Name)
        .all(conn)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(conn: &DatabaseConnection, id: &str) -> Result<Option<Team>, DbErr> {
    let result = Entity::find_by_id(id.to_string())
        .filter(Column::IsDeleted.eq(false))
        .one(conn)
        .await?;
    Ok(result.map(Into::into))
}

pub async fn insert(conn: &DatabaseConnection, team: &Team) -> Result<(), DbErr> {
    let now = Utc::now();
    let active = ActiveModel {
        id: Set(team.id.clone()),
        name: Set(team.name.clone()),
        access_code: Set(team.access_code.clone()),
        is_deleted: Set(false),
        created_at: Set(Some(team.created_at.unwrap_or(now))),
        updated_at: Set(Some(team.updated_at.unwrap_or(now))),
    };
    active.insert(conn).await?;
    Ok(())
}

/// Persist name and access code; returns the stored row
pub async fn update(conn: &DatabaseConnection, team: &Team) -> Result<Team, DbErr> {
    let active = ActiveModel {
        id: Set(team.id.clone()),
        name: Set(team.name.clone()),
        access_code: Set(team.access_code.clone()),
        updated_at: Set(Some(Utc::now())),
        is_deleted: ActiveValue::NotSet,
        created_at: ActiveValue::NotSet,
    };
    let model = active.update(conn).await?;
    Ok(model.into())
}
