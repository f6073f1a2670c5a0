use oldcarhat_api::{
    config::AppConfig,
    dto::auth::TokenRequest,
    error::AppError,
    middleware::auth::{AuthUser, decode_token, ensure_owner},
    services::auth_service,
};

fn test_config(expires_in_secs: i64) -> AppConfig {
    AppConfig {
        database_url: String::new(),
        host: "127.0.0.1".into(),
        port: 0,
        jwt_secret: "gate-test-secret".into(),
        jwt_expires_in_secs: expires_in_secs,
        stripe_secret_key: "sk_test_dummy".into(),
        legacy_role_gate: false,
    }
}

fn issue(config: &AppConfig, uid: &str) -> String {
    let resp = auth_service::issue_token(
        config,
        TokenRequest {
            uid: uid.into(),
            email: Some(format!("{uid}@example.com")),
        },
    )
    .expect("token issued");
    resp.data.expect("token data").token
}

#[test]
fn issued_token_round_trips() {
    let config = test_config(3600);
    let token = issue(&config, "buyer-1");

    let claims = decode_token(&config.jwt_secret, &token).expect("valid token");
    assert_eq!(claims.uid, "buyer-1");
    assert_eq!(claims.email.as_deref(), Some("buyer-1@example.com"));
}

#[test]
fn token_with_wrong_secret_is_rejected() {
    let config = test_config(3600);
    let token = issue(&config, "buyer-1");

    let result = decode_token("some-other-secret", &token);
    assert!(matches!(result, Err(AppError::Unauthorized)));
}

#[test]
fn expired_token_is_rejected() {
    // Issue a token that expired well past the validator's leeway.
    let config = test_config(-300);
    let token = issue(&config, "buyer-1");

    let result = decode_token(&config.jwt_secret, &token);
    assert!(matches!(result, Err(AppError::Unauthorized)));
}

#[test]
fn garbage_token_is_rejected() {
    let config = test_config(3600);
    let result = decode_token(&config.jwt_secret, "not-a-jwt");
    assert!(matches!(result, Err(AppError::Unauthorized)));
}

#[test]
fn ownership_requires_matching_uid() {
    let user = AuthUser {
        uid: "buyer-1".into(),
        email: None,
    };

    assert!(ensure_owner(&user, "buyer-1").is_ok());
    assert!(matches!(
        ensure_owner(&user, "seller-1"),
        Err(AppError::Forbidden)
    ));
}
