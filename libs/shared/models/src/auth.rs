use serde::{Deserialize, Serialize};

/// Claims carried by an access token issued from `/getToken/{email}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

/// Identity attached to a request once its bearer token has been verified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub email: String,
}

impl From<JwtClaims> for AuthUser {
    fn from(claims: JwtClaims) -> Self {
        Self { email: claims.email }
    }
}
