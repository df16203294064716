use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct MemberDto {
    pub user_id: u64,
    pub username: String,
    pub display_name: String,
    pub avatar_url: Option<String>,
    /// `None` when the member has no economy account yet.
    pub balance: Option<i64>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct CustomRoleDto {
    pub role_id: u64,
    pub role_name: String,
    pub role_color: String,
    pub role_style: Option<String>,
    pub gradient_color_1: Option<String>,
    pub gradient_color_2: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct MemberDetailDto {
    pub user_id: u64,
    pub guild_id: u64,
    /// `None` when Discord did not return a profile.
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub balance: i64,
    pub fake_boosts: i32,
    pub custom_role: Option<CustomRoleDto>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct UpdateBalanceDto {
    pub balance: i64,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct BalanceChangeDto {
    pub previous_balance: i64,
    pub new_balance: i64,
    pub amount_changed: i64,
    /// Audit row id; `None` when the balance did not change.
    pub transaction_id: Option<i32>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct UpdateCustomRoleDto {
    pub role_name: String,
    pub role_color: String,
    pub role_style: Option<String>,
    pub gradient_color_1: Option<String>,
    pub gradient_color_2: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct UpdatedCustomRoleDto {
    pub custom_role: CustomRoleDto,
    pub warnings: Vec<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct MemberPageDto {
    pub members: Vec<MemberDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

/// Query parameters of the member list.
#[derive(Serialize, Deserialize, IntoParams, Clone, Debug, PartialEq)]
#[into_params(parameter_in = Query)]
pub struct MemberQueryDto {
    /// Case-insensitive match on username or display name.
    pub search: Option<String>,
    /// Zero-based page index.
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_per_page() -> u64 {
    50
}
