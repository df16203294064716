//! Shop role domain models.

/// Purchasable role tracked locally with its price and owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopRole {
    /// Discord role ID.
    pub role_id: u64,
    pub guild_id: u64,
    /// Price in currency units.
    pub price: i64,
    /// Member who created the role, if it was not created by an admin.
    pub creator_id: Option<u64>,
}

impl ShopRole {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::shop_role::Model) -> Self {
        Self {
            role_id: entity.role_id as u64,
            guild_id: entity.guild_id as u64,
            price: entity.price,
            creator_id: entity.creator_id.map(|id| id as u64),
        }
    }
}

/// Insert-or-update parameters for a shop role.
///
/// On conflict only the price is updated; `creator_id` is written on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpsertShopRoleParam {
    pub role_id: u64,
    pub guild_id: u64,
    pub price: i64,
    pub creator_id: Option<u64>,
}

/// One submitted shop role row from the configuration form.
///
/// `role_id` absent means "create this role"; present means "edit the tracked role".
/// Price and color are kept as submitted so the reconciler can apply its skip and
/// fallback rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopRoleRow {
    pub role_id: Option<u64>,
    pub name: String,
    pub price: Option<i64>,
    pub color: String,
}
