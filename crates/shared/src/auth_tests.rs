//! Tests for auth payloads and claims.

#[cfg(test)]
mod tests {
    use crate::auth::{AuthResponse, Claims, LoginRequest, RegisterRequest, UserInfo};
    use chrono::{Duration, Utc};
    use serde_json::json;
    use uuid::Uuid;

    #[test]
    fn claims_sets_expiration_and_iat() {
        let user = Uuid::new_v4();
        let expires_at = Utc::now() + Duration::minutes(30);
        let before = Utc::now().timestamp();
        let claims = Claims::new(user, "a@b.com", expires_at);
        let after = Utc::now().timestamp();

        assert_eq!(claims.sub, user);
        assert_eq!(claims.email, "a@b.com");
        assert!(claims.iat >= before);
        assert!(claims.iat <= after);
        assert_eq!(claims.exp, expires_at.timestamp());
    }

    #[test]
    fn register_request_deserializes() {
        let payload: RegisterRequest = serde_json::from_value(json!({
            "email": "ana@example.com",
            "password": "secret1",
            "name": "Ana"
        }))
        .unwrap();

        assert_eq!(payload.email, "ana@example.com");
        assert_eq!(payload.name, "Ana");
    }

    #[test]
    fn login_request_requires_password() {
        let result = serde_json::from_value::<LoginRequest>(json!({ "email": "a@b.com" }));
        assert!(result.is_err());
    }

    #[test]
    fn auth_response_shape() {
        let id = Uuid::new_v4();
        let response = AuthResponse {
            user: UserInfo {
                id,
                email: "ana@example.com".to_string(),
                name: "Ana".to_string(),
            },
            token: "t".to_string(),
        };

        let value = serde_json::to_value(response).unwrap();
        assert_eq!(value["user"]["id"], json!(id));
        assert_eq!(value["user"]["name"], "Ana");
        assert_eq!(value["token"], "t");
    }
}
