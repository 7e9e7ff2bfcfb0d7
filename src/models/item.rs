use serde::{Deserialize, Serialize};

/// Core inventory record.
///
/// `name` and `quantity` are nullable: an update that omits either field
/// clears it rather than keeping the stored value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Item {
    pub id: i64,
    pub name: Option<String>,
    pub quantity: Option<i64>,
    pub image_src: Option<String>,
}

// ── Request payloads ─────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateItem {
    pub name: String,
    pub quantity: i64,
}

/// Full replacement of `name` and `quantity`; absent fields become null.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateItem {
    pub name: Option<String>,
    pub quantity: Option<i64>,
}
