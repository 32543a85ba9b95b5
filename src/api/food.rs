//! Food Entry Endpoints
//!
//! CRUD on the signed-in user's own entries.

use reqwest::Method;

use super::{request, send_json, send_unit};
use crate::error::ApiError;
use crate::models::{FoodEntry, FoodEntryInput};

pub const FOODS_PATH: &str = "/foods/";
pub const FOOD_ENTRY_PATH: &str = "/food_entry/";

pub fn food_entry_path(id: u32) -> String {
    format!("/food_entry/{}", id)
}

pub async fn list_food_entries() -> Result<Vec<FoodEntry>, ApiError> {
    send_json(request(Method::GET, FOODS_PATH)).await
}

pub async fn create_food_entry(input: &FoodEntryInput) -> Result<(), ApiError> {
    send_unit(request(Method::POST, FOOD_ENTRY_PATH).json(input)).await
}

pub async fn update_food_entry(id: u32, input: &FoodEntryInput) -> Result<(), ApiError> {
    send_unit(request(Method::PUT, &food_entry_path(id)).json(input)).await
}

pub async fn delete_food_entry(id: u32) -> Result<(), ApiError> {
    send_unit(request(Method::DELETE, &food_entry_path(id))).await
}
