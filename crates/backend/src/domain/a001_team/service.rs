use super::repository;
use crate::shared::error::ApiError;
use contracts::domain::a001_team::aggregate::{
    generate_access_code, validate_access_code, CreateTeamDto, Team, TeamUpdateDto,
};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

fn validate_name(name: &str) -> Result<String, ApiError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ApiError::Validation("Name is required".to_string()));
    }
    Ok(trimmed.to_string())
}

pub async fn list_all(conn: &DatabaseConnection) -> Result<Vec<Team>, ApiError> {
    Ok(repository::list_all(conn).await?)
}

pub async fn get_by_id(conn: &DatabaseConnection, id: &str) -> Result<Team, ApiError> {
    repository::get_by_id(conn, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Team {}", id)))
}

/// Create a team with a freshly generated access code
pub async fn create(conn: &DatabaseConnection, dto: CreateTeamDto) -> Result<Team, ApiError> {
    let team = Team {
        id: Uuid::new_v4().to_string(),
        name: validate_name(&dto.name)?,
        access_code: generate_access_code(),
        created_at: None,
        updated_at: None,
    };
    repository::insert(conn, &team).await?;
    tracing::info!("team {} created", team.id);
    get_by_id(conn, &team.id).await
}

/// Apply the fields present in `dto`; absent fields keep their value
pub async fn update(
    conn: &DatabaseConnection,
    id: &str,
    dto: TeamUpdateDto,
) -> Result<Team, ApiError> {
    let mut team = get_by_id(conn, id).await?;

    if let Some(name) = dto.name {
        team.name = validate_name(&name)?;
    }
    if let Some(code) = dto.access_code {
        validate_access_code(&code).map_err(ApiError::Validation)?;
        if code != team.access_code {
            tracing::info!("team {}: access code changed", id);
        }
        team.access_code = code;
    }

    Ok(repository::update(conn, &team).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::connect_in_memory;

    async fn seeded() -> (DatabaseConnection, Team) {
        let conn = connect_in_memory().await.unwrap();
        let team = create(
            &conn,
            CreateTeamDto {
                name: "Growth".to_string(),
            },
        )
        .await
        .unwrap();
        (conn, team)
    }

    #[tokio::test]
    async fn test_create_generates_access_code() {
        let (_conn, team) = seeded().await;
        assert_eq!(team.name, "Growth");
        assert!(validate_access_code(&team.access_code).is_ok());
        assert!(team.created_at.is_some());
    }

    #[tokio::test]
    async fn test_create_rejects_blank_name() {
        let conn = connect_in_memory().await.unwrap();
        let err = create(
            &conn,
            CreateTeamDto {
                name: "  ".to_string(),
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_name_keeps_access_code() {
        let (conn, team) = seeded().await;
        let updated = update(
            &conn,
            &team.id,
            TeamUpdateDto {
                name: Some(" Growth Team ".to_string()),
                access_code: None,
            },
        )
        .await
        .unwrap();
        assert_eq!(updated.name, "Growth Team");
        assert_eq!(updated.access_code, team.access_code);
    }

    #[tokio::test]
    async fn test_update_access_code() {
        let (conn, team) = seeded().await;
        let code = generate_access_code();
        update(
            &conn,
            &team.id,
            TeamUpdateDto {
                name: None,
                access_code: Some(code.clone()),
            },
        )
        .await
        .unwrap();
        assert_eq!(get_by_id(&conn, &team.id).await.unwrap().access_code, code);
    }

    #[tokio::test]
    async fn test_update_rejects_invalid_input() {
        let (conn, team) = seeded().await;
        let err = update(
            &conn,
            &team.id,
            TeamUpdateDto {
                name: Some(String::new()),
                access_code: None,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));

        let err = update(
            &conn,
            &team.id,
            TeamUpdateDto {
                name: None,
                access_code: Some("short".to_string()),
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));

        // nothing was written
        assert_eq!(get_by_id(&conn, &team.id).await.unwrap().name, "Growth");
    }

    #[tokio::test]
    async fn test_update_unknown_team() {
        let conn = connect_in_memory().await.unwrap();
        let err = update(&conn, "missing", TeamUpdateDto::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_list_sorted_by_name() {
        let (conn, _) = seeded().await;
        create(
            &conn,
            CreateTeamDto {
                name: "Analytics".to_string(),
            },
        )
        .await
        .unwrap();
        let names: Vec<String> = list_all(&conn)
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, vec!["Analytics", "Growth"]);
    }
}
