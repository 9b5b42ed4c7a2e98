//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance with the estate schema
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (user_id, email) = seed_user().await.unwrap();

    let login_req = LoginRequest {
        email: email.clone(),
        password: TEST_PASSWORD.to_string(),
    };
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.user.id, user_id);
    assert_eq!(auth.user.email, email);
    assert_eq!(auth.token_type, "Bearer");
    assert!(auth.expires_in > 0);
    assert!(!auth.access_token.is_empty());
}

#[tokio::test]
async fn test_login_wrong_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, email) = seed_user().await.unwrap();

    let login_req = LoginRequest {
        email,
        password: "definitely-wrong-1!".to_string(),
    };
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_login_unknown_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login_req = LoginRequest {
        email: "nonexistent@example.com".to_string(),
        password: TEST_PASSWORD.to_string(),
    };

    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_current_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = login_seeded(&server).await.unwrap();

    let response = server
        .get_auth("/api/v1/auth/me", &auth.access_token)
        .await
        .unwrap();
    let me: CurrentUserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(me.id, auth.user.id);
    assert_eq!(me.email, auth.user.email);
    assert_eq!(me.status, "active");
}

#[tokio::test]
async fn test_current_user_unauthorized() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/auth/me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_logout_blacklists_session() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = login_seeded(&server).await.unwrap();

    // Logout
    let response = server
        .post_auth("/api/v1/auth/logout", &auth.access_token, &())
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // The token still carries a valid signature, but the session is dead
    let response = server
        .get_auth("/api/v1/auth/me", &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_create_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = login_seeded(&server).await.unwrap();

    let request = CreateUserRequest::unique();
    let response = server
        .post_auth("/api/v1/users", &auth.access_token, &request)
        .await
        .unwrap();
    let user: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(user.email, request.email);
    assert_eq!(user.name, request.name);
    assert_eq!(user.status, "active");
}

#[tokio::test]
async fn test_create_user_duplicate_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = login_seeded(&server).await.unwrap();

    let request = CreateUserRequest::unique();
    server
        .post_auth("/api/v1/users", &auth.access_token, &request)
        .await
        .unwrap();

    let response = server
        .post_auth("/api/v1/users", &auth.access_token, &request)
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(error.error.code, "EMAIL_ALREADY_EXISTS");
}

#[tokio::test]
async fn test_create_user_requires_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateUserRequest::unique();

    let response = server.post("/api/v1/users", &request).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_get_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = login_seeded(&server).await.unwrap();

    let request = CreateUserRequest::unique();
    let response = server
        .post_auth("/api/v1/users", &auth.access_token, &request)
        .await
        .unwrap();
    let created: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_auth(&format!("/api/v1/users/{}", created.id), &auth.access_token)
        .await
        .unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(user.id, created.id);
    assert_eq!(user.email, request.email);
}

#[tokio::test]
async fn test_get_user_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = login_seeded(&server).await.unwrap();

    let response = server
        .get_auth("/api/v1/users/999999999", &auth.access_token)
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error.error.code, "UNKNOWN_USER");
}

#[tokio::test]
async fn test_update_user_partial() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = login_seeded(&server).await.unwrap();

    let request = CreateUserRequest::unique();
    let response = server
        .post_auth("/api/v1/users", &auth.access_token, &request)
        .await
        .unwrap();
    let created: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Only the name changes, everything else must survive
    let update = UpdateUserRequest {
        name: Some("Renamed User".to_string()),
        ..UpdateUserRequest::default()
    };
    let response = server
        .patch_auth(
            &format!("/api/v1/users/{}", created.id),
            &auth.access_token,
            &update,
        )
        .await
        .unwrap();
    let updated: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(updated.name.as_deref(), Some("Renamed User"));
    assert_eq!(updated.email, request.email);
    assert_eq!(updated.number, request.number);
}

#[tokio::test]
async fn test_update_user_status() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = login_seeded(&server).await.unwrap();

    let request = CreateUserRequest::unique();
    let response = server
        .post_auth("/api/v1/users", &auth.access_token, &request)
        .await
        .unwrap();
    let created: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let update = UpdateUserRequest {
        status: Some("block".to_string()),
        ..UpdateUserRequest::default()
    };
    let response = server
        .patch_auth(
            &format!("/api/v1/users/{}", created.id),
            &auth.access_token,
            &update,
        )
        .await
        .unwrap();
    let updated: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(updated.status, "block");
}

#[tokio::test]
async fn test_update_user_invalid_status() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = login_seeded(&server).await.unwrap();

    let request = CreateUserRequest::unique();
    let response = server
        .post_auth("/api/v1/users", &auth.access_token, &request)
        .await
        .unwrap();
    let created: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let update = UpdateUserRequest {
        status: Some("frozen".to_string()),
        ..UpdateUserRequest::default()
    };
    let response = server
        .patch_auth(
            &format!("/api/v1/users/{}", created.id),
            &auth.access_token,
            &update,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_update_password_then_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = login_seeded(&server).await.unwrap();

    let request = CreateUserRequest::unique();
    let response = server
        .post_auth("/api/v1/users", &auth.access_token, &request)
        .await
        .unwrap();
    let created: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let new_password = "NewTestPass456!";
    let response = server
        .put_auth(
            &format!("/api/v1/users/{}/password", created.id),
            &auth.access_token,
            &UpdatePasswordRequest {
                password: new_password.to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Old password is rejected, new one works
    let response = server
        .post(
            "/api/v1/auth/login",
            &LoginRequest {
                email: request.email.clone(),
                password: TEST_PASSWORD.to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server
        .post(
            "/api/v1/auth/login",
            &LoginRequest {
                email: request.email,
                password: new_password.to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_trash_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = login_seeded(&server).await.unwrap();

    let request = CreateUserRequest::unique();
    let response = server
        .post_auth("/api/v1/users", &auth.access_token, &request)
        .await
        .unwrap();
    let created: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/users/{}/trash", created.id),
            &auth.access_token,
            &(),
        )
        .await
        .unwrap();
    let message: MessageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!message.message.is_empty());

    // Trashed users keep their row but switch status
    let response = server
        .get_auth(&format!("/api/v1/users/{}", created.id), &auth.access_token)
        .await
        .unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(user.status, "trash");
}

#[tokio::test]
async fn test_delete_user_cascades_assignments() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = login_seeded(&server).await.unwrap();

    // Create a user and a role, then link them
    let user_req = CreateUserRequest::unique();
    let response = server
        .post_auth("/api/v1/users", &auth.access_token, &user_req)
        .await
        .unwrap();
    let user: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let role_req = CreateRoleRequest::unique();
    let response = server
        .post_auth("/api/v1/roles", &auth.access_token, &role_req)
        .await
        .unwrap();
    let role: RoleResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/roles/assignments",
            &auth.access_token,
            &AssignRoleRequest {
                user_id: user.id,
                role_id: role.id,
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // Delete the user
    let response = server
        .delete_auth(&format!("/api/v1/users/{}", user.id), &auth.access_token)
        .await
        .unwrap();
    let deleted: DeletedResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(deleted.id, user.id);
    assert!(!deleted.message.is_empty());

    // User is gone
    let response = server
        .get_auth(&format!("/api/v1/users/{}", user.id), &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    // Its assignments are gone with it
    let response = server
        .get_auth("/api/v1/roles/assignments", &auth.access_token)
        .await
        .unwrap();
    let assignments: Vec<AssignmentResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert!(assignments.iter().all(|a| a.user_id != user.id));

    // The role itself survives
    let response = server
        .get_auth(&format!("/api/v1/roles/{}", role.id), &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_delete_user_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = login_seeded(&server).await.unwrap();

    let response = server
        .delete_auth("/api/v1/users/999999999", &auth.access_token)
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error.error.code, "UNKNOWN_USER");
}

// ============================================================================
// Role Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_list_roles() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = login_seeded(&server).await.unwrap();

    let request = CreateRoleRequest::unique();
    let response = server
        .post_auth("/api/v1/roles", &auth.access_token, &request)
        .await
        .unwrap();
    let role: RoleResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(role.name, request.name);

    let response = server
        .get_auth("/api/v1/roles", &auth.access_token)
        .await
        .unwrap();
    let roles: Vec<RoleResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(roles.iter().any(|r| r.id == role.id));
}

#[tokio::test]
async fn test_create_role_duplicate_name() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = login_seeded(&server).await.unwrap();

    let request = CreateRoleRequest::unique();
    server
        .post_auth("/api/v1/roles", &auth.access_token, &request)
        .await
        .unwrap();

    let response = server
        .post_auth("/api/v1/roles", &auth.access_token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_update_role() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = login_seeded(&server).await.unwrap();

    let request = CreateRoleRequest::unique();
    let response = server
        .post_auth("/api/v1/roles", &auth.access_token, &request)
        .await
        .unwrap();
    let role: RoleResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let rename = CreateRoleRequest::unique();
    let response = server
        .patch_auth(
            &format!("/api/v1/roles/{}", role.id),
            &auth.access_token,
            &rename,
        )
        .await
        .unwrap();
    let updated: RoleResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.name, rename.name);
}

#[tokio::test]
async fn test_delete_role() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = login_seeded(&server).await.unwrap();

    let request = CreateRoleRequest::unique();
    let response = server
        .post_auth("/api/v1/roles", &auth.access_token, &request)
        .await
        .unwrap();
    let role: RoleResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete_auth(&format!("/api/v1/roles/{}", role.id), &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth(&format!("/api/v1/roles/{}", role.id), &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_assign_role_duplicate() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = login_seeded(&server).await.unwrap();

    let user_req = CreateUserRequest::unique();
    let response = server
        .post_auth("/api/v1/users", &auth.access_token, &user_req)
        .await
        .unwrap();
    let user: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let role_req = CreateRoleRequest::unique();
    let response = server
        .post_auth("/api/v1/roles", &auth.access_token, &role_req)
        .await
        .unwrap();
    let role: RoleResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let assignment = AssignRoleRequest {
        user_id: user.id,
        role_id: role.id,
    };
    let response = server
        .post_auth("/api/v1/roles/assignments", &auth.access_token, &assignment)
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth("/api/v1/roles/assignments", &auth.access_token, &assignment)
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_assign_role_unknown_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = login_seeded(&server).await.unwrap();

    let role_req = CreateRoleRequest::unique();
    let response = server
        .post_auth("/api/v1/roles", &auth.access_token, &role_req)
        .await
        .unwrap();
    let role: RoleResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let assignment = AssignRoleRequest {
        user_id: 999_999_999,
        role_id: role.id,
    };
    let response = server
        .post_auth("/api/v1/roles/assignments", &auth.access_token, &assignment)
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error.error.code, "UNKNOWN_USER");
}

#[tokio::test]
async fn test_user_assignments_and_unassign() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = login_seeded(&server).await.unwrap();

    let user_req = CreateUserRequest::unique();
    let response = server
        .post_auth("/api/v1/users", &auth.access_token, &user_req)
        .await
        .unwrap();
    let user: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let role_req = CreateRoleRequest::unique();
    let response = server
        .post_auth("/api/v1/roles", &auth.access_token, &role_req)
        .await
        .unwrap();
    let role: RoleResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/roles/assignments",
            &auth.access_token,
            &AssignRoleRequest {
                user_id: user.id,
                role_id: role.id,
            },
        )
        .await
        .unwrap();
    let assigned: AssignedResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Listed under the user with the joined role name
    let response = server
        .get_auth(
            &format!("/api/v1/users/{}/roles", user.id),
            &auth.access_token,
        )
        .await
        .unwrap();
    let assignments: Vec<AssignmentResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(assignments.len(), 1);
    assert_eq!(assignments[0].role_name, role_req.name);
    assert_eq!(assignments[0].user_email, user_req.email);

    // Unassign
    let response = server
        .delete_auth(
            &format!("/api/v1/roles/assignments/{}", assigned.id),
            &auth.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth(
            &format!("/api/v1/users/{}/roles", user.id),
            &auth.access_token,
        )
        .await
        .unwrap();
    let assignments: Vec<AssignmentResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert!(assignments.is_empty());
}

// ============================================================================
// Authorization Tests
// ============================================================================

#[tokio::test]
async fn test_update_other_user_requires_admin() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let member = login_member(&server).await.unwrap();
    let (target_id, _) = seed_user().await.unwrap();

    let update = UpdateUserRequest {
        name: Some("Hijacked".to_string()),
        ..UpdateUserRequest::default()
    };
    let response = server
        .patch_auth(
            &format!("/api/v1/users/{target_id}"),
            &member.access_token,
            &update,
        )
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(error.error.code, "FORBIDDEN");

    // An admin may edit anyone
    let admin = login_seeded(&server).await.unwrap();
    let response = server
        .patch_auth(
            &format!("/api/v1/users/{target_id}"),
            &admin.access_token,
            &update,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_update_own_profile_allowed() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let member = login_member(&server).await.unwrap();

    let update = UpdateUserRequest {
        name: Some("Self Edit".to_string()),
        ..UpdateUserRequest::default()
    };
    let response = server
        .patch_auth(
            &format!("/api/v1/users/{}", member.user.id),
            &member.access_token,
            &update,
        )
        .await
        .unwrap();
    let updated: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.name.as_deref(), Some("Self Edit"));
}

#[tokio::test]
async fn test_change_other_password_requires_admin() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let member = login_member(&server).await.unwrap();
    let (target_id, _) = seed_user().await.unwrap();

    let response = server
        .put_auth(
            &format!("/api/v1/users/{target_id}/password"),
            &member.access_token,
            &UpdatePasswordRequest {
                password: "StolenPass789!".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_assign_role_requires_admin() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let member = login_member(&server).await.unwrap();

    let role_req = CreateRoleRequest::unique();
    let response = server
        .post_auth("/api/v1/roles", &member.access_token, &role_req)
        .await
        .unwrap();
    let role: RoleResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // A member cannot grant roles, not even to themselves
    let response = server
        .post_auth(
            "/api/v1/roles/assignments",
            &member.access_token,
            &AssignRoleRequest {
                user_id: member.user.id,
                role_id: role.id,
            },
        )
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(error.error.code, "FORBIDDEN");
}

// ============================================================================
// Property Tests
// ============================================================================

#[tokio::test]
async fn test_property_crud() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = login_seeded(&server).await.unwrap();

    // Create
    let request = CreatePropertyRequest::unique();
    let response = server
        .post_auth("/api/v1/properties", &auth.access_token, &request)
        .await
        .unwrap();
    let property: PropertyResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(property.title, request.title);
    assert_eq!(property.status, "available");

    // List
    let response = server
        .get_auth("/api/v1/properties", &auth.access_token)
        .await
        .unwrap();
    let properties: Vec<PropertyResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(properties.iter().any(|p| p.id == property.id));

    // Update price and mark sold
    let update = UpdatePropertyRequest {
        price: Some(275_000.0),
        status: Some("sold".to_string()),
        ..UpdatePropertyRequest::default()
    };
    let response = server
        .patch_auth(
            &format!("/api/v1/properties/{}", property.id),
            &auth.access_token,
            &update,
        )
        .await
        .unwrap();
    let updated: PropertyResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.status, "sold");
    assert!((updated.price - 275_000.0).abs() < f64::EPSILON);

    // Delete
    let response = server
        .delete_auth(
            &format!("/api/v1/properties/{}", property.id),
            &auth.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth(
            &format!("/api/v1/properties/{}", property.id),
            &auth.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Sale Booking Tests
// ============================================================================

#[tokio::test]
async fn test_booking_lifecycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = login_seeded(&server).await.unwrap();

    // A booking needs an existing property
    let property_req = CreatePropertyRequest::unique();
    let response = server
        .post_auth("/api/v1/properties", &auth.access_token, &property_req)
        .await
        .unwrap();
    let property: PropertyResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Create
    let request = CreateBookingRequest::for_property(property.id);
    let response = server
        .post_auth("/api/v1/sales", &auth.access_token, &request)
        .await
        .unwrap();
    let booking: BookingResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(booking.property_id, Some(property.id));
    assert_eq!(booking.client_name, request.client_name);
    assert_eq!(booking.status, "pending");

    // Confirm
    let update = UpdateBookingRequest {
        status: Some("confirmed".to_string()),
        ..UpdateBookingRequest::default()
    };
    let response = server
        .patch_auth(
            &format!("/api/v1/sales/{}", booking.id),
            &auth.access_token,
            &update,
        )
        .await
        .unwrap();
    let updated: BookingResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.status, "confirmed");

    // Delete
    let response = server
        .delete_auth(&format!("/api/v1/sales/{}", booking.id), &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth(&format!("/api/v1/sales/{}", booking.id), &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_booking_unknown_property() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = login_seeded(&server).await.unwrap();

    let request = CreateBookingRequest::for_property(999_999_999);
    let response = server
        .post_auth("/api/v1/sales", &auth.access_token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}
