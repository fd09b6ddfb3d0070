use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Field limits shared by every item payload and the `items` table.
///
/// The `#[validate]` attributes below repeat these numbers as literals; the
/// tests at the bottom of this file pin them together.
pub mod constraints {
    pub const NAME_MIN_LEN: usize = 1;
    pub const NAME_MAX_LEN: usize = 100;
    pub const DESCRIPTION_MAX_LEN: usize = 500;
    pub const LIST_LIMIT_MAX: u64 = 1000;
    pub const LIST_LIMIT_DEFAULT: u64 = 100;
}

/// Item as stored and returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Store-generated identifier
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    /// Unit price, always greater than zero
    pub price: f64,
    /// Units in stock
    pub quantity: i32,
    /// `false` once the item has been deactivated
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    /// Unset until the first update
    pub updated_at: Option<DateTime<Utc>>,
}

/// DTO for creating a new item
#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateItem {
    #[validate(length(min = 1, max = 100))]
    #[schema(min_length = 1, max_length = 100, example = "Widget")]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 500))]
    #[schema(max_length = 500)]
    pub description: Option<String>,
    #[validate(range(exclusive_min = 0.0))]
    #[schema(exclusive_minimum = 0.0, example = 9.99)]
    pub price: f64,
    #[serde(default)]
    #[validate(range(min = 0))]
    #[schema(minimum = 0)]
    pub quantity: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// DTO for a partial update. Absent fields are left unchanged.
///
/// `description` distinguishes an absent key (`None`) from an explicit
/// `null` (`Some(None)`), which clears the stored description.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate, ToSchema)]
pub struct UpdateItem {
    #[validate(length(min = 1, max = 100))]
    #[schema(min_length = 1, max_length = 100)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "present_or_null")]
    #[validate(length(max = 500))]
    #[schema(value_type = Option<String>, max_length = 500)]
    pub description: Option<Option<String>>,
    #[validate(range(exclusive_min = 0.0))]
    #[schema(exclusive_minimum = 0.0)]
    pub price: Option<f64>,
    #[validate(range(min = 0))]
    #[schema(minimum = 0)]
    pub quantity: Option<i32>,
    pub is_active: Option<bool>,
}

impl UpdateItem {
    /// Update that only flips `is_active` off.
    pub fn deactivate() -> Self {
        Self {
            is_active: Some(false),
            ..Self::default()
        }
    }
}

/// Pagination and filtering for the item listing
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Number of items to skip
    #[serde(default)]
    #[param(minimum = 0, default = 0)]
    pub skip: u64,
    /// Maximum number of items to return
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 1000))]
    #[param(minimum = 1, maximum = 1000, default = 100)]
    pub limit: u64,
    /// Only return active items
    #[serde(default)]
    pub active_only: bool,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: constraints::LIST_LIMIT_DEFAULT,
            active_only: false,
        }
    }
}

/// Item counts by state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ItemStats {
    pub total: u64,
    pub active: u64,
    /// `total - active`
    pub inactive: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteResponse {
    #[schema(example = "Item deleted successfully")]
    pub message: String,
}

fn default_true() -> bool {
    true
}

fn default_limit() -> u64 {
    constraints::LIST_LIMIT_DEFAULT
}

/// Maps a present key to `Some(_)` so that `null` survives as `Some(None)`.
/// Absent keys fall back to `#[serde(default)]`.
fn present_or_null<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}
