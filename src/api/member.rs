//! Member Endpoints
//!
//! `/integrantes` resource.

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{Member, MemberUpdate};
use super::{ensure_success, http};

pub fn members_path() -> &'static str {
    "integrantes"
}

pub fn member_path(id: u32) -> String {
    format!("integrantes/{}", id)
}

pub async fn list_members(config: ApiConfig) -> Result<Vec<Member>, ApiError> {
    let response = http().get(config.url(members_path())).send().await?;
    let members = ensure_success(response)?.json::<Vec<Member>>().await?;
    Ok(members)
}

/// Replace a member's fields. The backend's echo is not used; the roster
/// refetches after a successful update.
pub async fn update_member(config: ApiConfig, id: u32, update: &MemberUpdate<'_>) -> Result<(), ApiError> {
    let response = http()
        .put(config.url(&member_path(id)))
        .json(update)
        .send()
        .await?;
    ensure_success(response)?;
    Ok(())
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod request_tests {
    use super::*;
    use crate::api::test_server::serve_once;
    use crate::models::MemberDraft;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_members() {
        let (config, server) = serve_once(
            "200 OK",
            r#"[{"id":1,"nombre":"Ana","codigo":"A-1","edad":20},{"id":2,"nombre":"Luis","codigo":"L-2","edad":31}]"#,
        ).await;

        let members = list_members(config).await.expect("list members");
        assert_eq!(members.len(), 2);
        assert_eq!(members[1].name, "Luis");
        assert_eq!(members[1].age, 31);

        let request = server.await.unwrap();
        assert_eq!(request.request_line(), "GET /integrantes HTTP/1.1");
    }

    #[tokio::test]
    async fn test_list_members_rejects_status_before_body() {
        // Valid JSON body, but the status wins
        let (config, server) = serve_once("500 Internal Server Error", "[]").await;

        let err = list_members(config).await.unwrap_err();
        assert!(matches!(err, ApiError::Status(500)));
        assert_eq!(err.to_string(), "HTTP error! status: 500");
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_list_members_reports_decode_cause() {
        let (config, server) = serve_once(
            "200 OK",
            r#"[{"id":1,"nombre":"Ana","codigo":"A-1","edad":20.5}]"#,
        ).await;

        let err = list_members(config).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
        let message = err.to_string();
        assert!(message.starts_with("invalid response body: error decoding response body"), "{}", message);
        assert!(message.contains("expected i32"), "{}", message);
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_update_member_ignores_response_body() {
        let (config, server) = serve_once("200 OK", "").await;
        let draft = MemberDraft { name: "Sara".into(), code: "S-4".into(), age: 22 };

        update_member(config, 4, &draft.to_update()).await.expect("update member");

        let request = server.await.unwrap();
        assert_eq!(request.request_line(), "PUT /integrantes/4 HTTP/1.1");
        assert_eq!(request.json_body(), json!({ "nombre": "Sara", "codigo": "S-4", "edad": 22 }));
    }

    #[tokio::test]
    async fn test_update_member_failure_status() {
        let (config, server) = serve_once("404 Not Found", r#"{"error":"not found"}"#).await;
        let draft = MemberDraft::default();

        let err = update_member(config, 99, &draft.to_update()).await.unwrap_err();
        assert!(matches!(err, ApiError::Status(404)));
        server.await.unwrap();
    }
}
