//! API Integration Tests
//!
//! These tests require a running PostgreSQL instance; set `DATABASE_URL`
//! (and optionally `JWT_SECRET`). Migrations are applied on startup.
//!
//! Run with: cargo test -p rollcall-integration-tests --test api_tests

use reqwest::StatusCode;
use rollcall_integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use serde_json::json;

/// Register a fresh user and log in as them
async fn register_and_login(server: &TestServer) -> (RegisterRequest, LoginResponse) {
    let register = RegisterRequest::unique();
    let response = server.post("/api/users", &register).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post("/api/auth/login", &LoginRequest::from_register(&register))
        .await
        .unwrap();
    let login: LoginResponse = assert_json(response, StatusCode::OK).await.unwrap();
    (register, login)
}

async fn create_member(server: &TestServer, token: &str, request: &CreateMemberRequest) -> String {
    let response = server.post_auth("/api/members", token, request).await.unwrap();
    let created: CreatedResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    created.id
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_endpoints() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/health").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get("/health/ready").await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["database"], "healthy");
}

#[tokio::test]
async fn test_index_is_served() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/").await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.text().await.unwrap().contains("/static/js/app.js"));
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_and_login() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register, login) = register_and_login(&server).await;

    assert!(!login.token.is_empty());
    assert_eq!(login.user.email, register.email);
    assert_eq!(login.user.name, register.name);

    let response = server.get_auth("/api/users/me", &login.token).await.unwrap();
    let me: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(me.id, login.user.id);
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/api/users", &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.post("/api/users", &request).await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body["message"], "Email already registered");
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register, _) = register_and_login(&server).await;

    let wrong_password = LoginRequest {
        email: register.email.clone(),
        password: "not-the-password".to_string(),
    };
    let unknown_email = LoginRequest {
        email: format!("missing{}@example.com", unique_suffix()),
        password: register.password.clone(),
    };

    let first: serde_json::Value = assert_json(
        server.post("/api/auth/login", &wrong_password).await.unwrap(),
        StatusCode::UNAUTHORIZED,
    )
    .await
    .unwrap();
    let second: serde_json::Value = assert_json(
        server.post("/api/auth/login", &unknown_email).await.unwrap(),
        StatusCode::UNAUTHORIZED,
    )
    .await
    .unwrap();

    // No hint about which half was wrong
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_protected_routes_require_token() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    for path in ["/api/users/me", "/api/members", "/api/roles", "/api/attendance?date=2024-01-01"] {
        let response = server.get(path).await.unwrap();
        assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
    }

    let response = server.get_auth("/api/members", "not-a-token").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Member Tests
// ============================================================================

#[tokio::test]
async fn test_roles_are_seeded() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, login) = register_and_login(&server).await;

    let response = server.get_auth("/api/roles", &login.token).await.unwrap();
    let roles: Vec<String> = assert_json(response, StatusCode::OK).await.unwrap();

    for seeded in ["Aluno", "Líder", "Professor"] {
        assert!(roles.iter().any(|r| r == seeded), "missing {seeded}");
    }
}

#[tokio::test]
async fn test_member_create_list_update() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, login) = register_and_login(&server).await;
    let token = login.token.as_str();

    let request = CreateMemberRequest::unique(&["Professor", "Aluno"]);
    let id = create_member(&server, token, &request).await;

    let response = server.get_auth("/api/members", token).await.unwrap();
    let members: Vec<MemberResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let member = members.iter().find(|m| m.id == id).expect("created member listed");
    assert_eq!(member.name, request.name);
    assert_eq!(member.status, "frequente");
    assert_eq!(member.roles, vec!["Aluno".to_string(), "Professor".to_string()]);
    assert!(!member.created_at.is_empty());

    let response = server
        .put_auth(
            &format!("/api/members/{id}"),
            token,
            &json!({"status": "licenca", "roles": ["Líder"]}),
        )
        .await
        .unwrap();
    let message: MessageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(message.message, "Member updated successfully");

    let response = server.get_auth("/api/members", token).await.unwrap();
    let members: Vec<MemberResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let member = members.iter().find(|m| m.id == id).unwrap();
    assert_eq!(member.name, request.name);
    assert_eq!(member.status, "licenca");
    assert_eq!(member.roles, vec!["Líder".to_string()]);
}

#[tokio::test]
async fn test_member_update_unknown_id() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, login) = register_and_login(&server).await;

    let response = server
        .put_auth(
            &format!("/api/members/{}", i64::MAX),
            &login.token,
            &json!({"name": "Ninguém"}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Attendance Tests
// ============================================================================

#[tokio::test]
async fn test_attendance_upsert_round_trip() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, login) = register_and_login(&server).await;
    let token = login.token.as_str();

    let first = create_member(&server, token, &CreateMemberRequest::unique(&[])).await;
    let second = create_member(&server, token, &CreateMemberRequest::unique(&["Aluno"])).await;
    let date = unique_date();

    let body = json!({"entries": [
        {"memberId": first, "presence": "P"},
        {"memberId": second, "presence": "FJ", "observation": "atestado"},
    ]});
    let response = server
        .put_auth(&format!("/api/attendance/{date}"), token, &body)
        .await
        .unwrap();
    let message: MessageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(message.message, "Attendance updated successfully");

    // Same date again: the row for `first` is replaced, not duplicated
    let body = json!({"entries": [{"memberId": first, "presence": "F"}]});
    let response = server
        .put_auth(&format!("/api/attendance/{date}"), token, &body)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .get_auth(&format!("/api/attendance?date={date}"), token)
        .await
        .unwrap();
    let records: Vec<AttendanceResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    let for_first: Vec<_> = records.iter().filter(|r| r.member_id == first).collect();
    assert_eq!(for_first.len(), 1);
    assert_eq!(for_first[0].presence, "F");

    let for_second = records.iter().find(|r| r.member_id == second).unwrap();
    assert_eq!(for_second.presence, "FJ");
    assert_eq!(for_second.observation, "atestado");
}

#[tokio::test]
async fn test_attendance_rejects_unknown_member_atomically() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, login) = register_and_login(&server).await;
    let token = login.token.as_str();

    let member = create_member(&server, token, &CreateMemberRequest::unique(&[])).await;
    let date = unique_date();

    let body = json!({"entries": [
        {"memberId": member, "presence": "P"},
        {"memberId": i64::MAX.to_string(), "presence": "P"},
    ]});
    let response = server
        .put_auth(&format!("/api/attendance/{date}"), token, &body)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .get_auth(&format!("/api/attendance?date={date}"), token)
        .await
        .unwrap();
    let records: Vec<AttendanceResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(records.iter().all(|r| r.member_id != member));
}

#[tokio::test]
async fn test_attendance_invalid_date() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, login) = register_and_login(&server).await;

    let response = server
        .get_auth("/api/attendance?date=31/12/2024", &login.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .put_auth("/api/attendance/2024-02-30", &login.token, &json!({"entries": []}))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}
