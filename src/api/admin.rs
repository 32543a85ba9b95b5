//! Admin Endpoints
//!
//! Moderation of every user's entries and of user roles. The backend
//! answers 403 for non-admin tokens.

use reqwest::Method;
use serde::Serialize;

use super::{request, send_json, send_unit};
use crate::error::ApiError;
use crate::models::{FoodEntry, Role, RoleUpdate, User};

pub const ADMIN_FOODS_PATH: &str = "/auth/admin/foods/";
pub const ADMIN_USERS_PATH: &str = "/auth/admin/users/";

pub fn admin_food_entry_path(id: u32) -> String {
    format!("/auth/admin/food_entry/{}", id)
}

pub fn user_role_path(user_id: u32) -> String {
    format!("/auth/admin/users/{}/role", user_id)
}

#[derive(Serialize)]
struct SafetyQuery {
    is_safe: bool,
}

pub async fn list_all_food_entries() -> Result<Vec<FoodEntry>, ApiError> {
    send_json(request(Method::GET, ADMIN_FOODS_PATH)).await
}

pub async fn set_food_entry_safety(id: u32, is_safe: bool) -> Result<(), ApiError> {
    let builder = request(Method::PUT, &admin_food_entry_path(id)).query(&SafetyQuery { is_safe });
    send_unit(builder).await
}

pub async fn admin_delete_food_entry(id: u32) -> Result<(), ApiError> {
    send_unit(request(Method::DELETE, &admin_food_entry_path(id))).await
}

pub async fn list_users() -> Result<Vec<User>, ApiError> {
    send_json(request(Method::GET, ADMIN_USERS_PATH)).await
}

pub async fn update_user_role(user_id: u32, role: Role) -> Result<(), ApiError> {
    send_unit(request(Method::PUT, &user_role_path(user_id)).json(&RoleUpdate { role })).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::food_entry_path;

    #[test]
    fn test_paths() {
        assert_eq!(admin_food_entry_path(12), "/auth/admin/food_entry/12");
        assert_eq!(user_role_path(3), "/auth/admin/users/3/role");
        assert_eq!(food_entry_path(5), "/food_entry/5");
    }
}
