//! Frontend Models
//!
//! Data structures matching backend JSON shapes.

use serde::{Deserialize, Serialize};

/// User role. Anything the server sends that is not `admin` is treated as a plain user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::User, Role::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }

    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("admin") {
            Role::Admin
        } else {
            Role::User
        }
    }

    /// Translation key for the role label
    pub fn label_key(&self) -> &'static str {
        match self {
            Role::User => "admin.user",
            Role::Admin => "admin.administrator",
        }
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(Role::parse).unwrap_or_default())
    }
}

/// User data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Full name when present, username otherwise
    pub fn display_name(&self) -> &str {
        match self.full_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => &self.username,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Bearer token returned by `/auth/tokens`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthToken {
    pub access_token: String,
    pub token_type: String,
}

/// Login form fields, sent form-urlencoded
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

/// Signup request body
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SignupData {
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    pub password: String,
    pub role: Role,
}

/// Food entry (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FoodEntry {
    pub id: u32,
    #[serde(default)]
    pub user: String,
    pub food: String,
    pub quantity: i32,
    pub is_safe: bool,
    #[serde(default)]
    pub date: Option<String>,
}

/// Create/update body for `/food_entry/`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodEntryInput {
    /// Filled in by the server on create
    pub user: String,
    pub food: String,
    pub quantity: i32,
    pub is_safe: bool,
    /// `YYYY-MM-DD`
    pub date: String,
}

impl FoodEntryInput {
    /// Blank form dated `today`
    pub fn blank(today: &str) -> Self {
        Self {
            user: String::new(),
            food: String::new(),
            quantity: 1,
            is_safe: false,
            date: today.to_string(),
        }
    }

    /// Prefill for editing; keeps only the date part of the stored timestamp
    pub fn from_entry(entry: &FoodEntry, today: &str) -> Self {
        let date = entry
            .date
            .as_deref()
            .and_then(|d| d.get(..10))
            .filter(|d| chrono::NaiveDate::parse_from_str(d, "%Y-%m-%d").is_ok())
            .unwrap_or(today)
            .to_string();
        Self {
            user: entry.user.clone(),
            food: entry.food.clone(),
            quantity: entry.quantity,
            is_safe: entry.is_safe,
            date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleUpdate {
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PasswordChange {
    pub username: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_from_server_json() {
        let json = r#"{"id":7,"username":"ana","email":"ana@x.io","full_name":null,"role":"admin","is_active":true,"hashed_password":"x"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 7);
        assert!(user.is_admin());
        assert_eq!(user.display_name(), "ana");
    }

    #[test]
    fn test_unknown_or_missing_role_is_user() {
        let json = r#"{"id":1,"username":"bob","email":"b@x.io","role":"superuser"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, Role::User);
        assert!(user.is_active);

        let json = r#"{"id":2,"username":"eve","role":null}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, Role::User);
    }

    #[test]
    fn test_display_name_prefers_full_name() {
        let mut user = User {
            id: 1,
            username: "jo".into(),
            email: String::new(),
            full_name: Some("Joana Silva".into()),
            role: Role::User,
            is_active: true,
        };
        assert_eq!(user.display_name(), "Joana Silva");
        user.full_name = Some("   ".into());
        assert_eq!(user.display_name(), "jo");
    }

    #[test]
    fn test_food_entry_null_date() {
        let json = r#"{"id":3,"user":"ana","food":"Rice","quantity":2,"is_safe":true,"date":null,"owner_id":null}"#;
        let entry: FoodEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.date, None);
        assert!(entry.is_safe);
    }

    #[test]
    fn test_signup_serializes_lowercase_role() {
        let data = SignupData {
            username: "ana".into(),
            email: "ana@x.io".into(),
            full_name: None,
            password: "secret1".into(),
            role: Role::Admin,
        };
        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(value["role"], "admin");
        assert!(value.get("full_name").is_none());
    }

    #[test]
    fn test_input_from_entry_trims_timestamp() {
        let entry = FoodEntry {
            id: 1,
            user: "ana".into(),
            food: "Milk".into(),
            quantity: 1,
            is_safe: false,
            date: Some("2024-03-05T10:00:00".into()),
        };
        assert_eq!(FoodEntryInput::from_entry(&entry, "2024-01-01").date, "2024-03-05");

        let undated = FoodEntry { date: None, ..entry };
        assert_eq!(FoodEntryInput::from_entry(&undated, "2024-01-01").date, "2024-01-01");
    }
}
