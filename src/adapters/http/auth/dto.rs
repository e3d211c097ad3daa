//! DTOs for the login/logout endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::AuthenticatedUser;

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUserResponse {
    pub user_id: String,
    pub email: Option<String>,
    pub display_name: String,
    pub is_staff: bool,
}

impl From<&AuthenticatedUser> for CurrentUserResponse {
    fn from(user: &AuthenticatedUser) -> Self {
        Self {
            user_id: user.id.to_string(),
            email: user.email.clone(),
            display_name: user.display_name_or_id().to_string(),
            is_staff: user.is_staff,
        }
    }
}
