use serde::{Deserialize, Serialize};

/// Типы сущностей, для которых API отдаёт списки выбора
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Asset,
    AssetType,
    Part,
    Vendor,
    Customer,
    Location,
    Meter,
    Team,
    User,
    Category,
}

impl EntityKind {
    /// URL segment of `/api/options/{code}`
    pub fn code(&self) -> &'static str {
        match self {
            EntityKind::Asset => "assets",
            EntityKind::AssetType => "asset-types",
            EntityKind::Part => "parts",
            EntityKind::Vendor => "vendors",
            EntityKind::Customer => "customers",
            EntityKind::Location => "locations",
            EntityKind::Meter => "meters",
            EntityKind::Team => "teams",
            EntityKind::User => "users",
            EntityKind::Category => "categories",
        }
    }

    /// Человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            EntityKind::Asset => "Asset",
            EntityKind::AssetType => "Asset type",
            EntityKind::Part => "Part",
            EntityKind::Vendor => "Vendor",
            EntityKind::Customer => "Customer",
            EntityKind::Location => "Location",
            EntityKind::Meter => "Meter",
            EntityKind::Team => "Team",
            EntityKind::User => "User",
            EntityKind::Category => "Category",
        }
    }

    pub fn all() -> Vec<EntityKind> {
        vec![
            EntityKind::Asset,
            EntityKind::AssetType,
            EntityKind::Part,
            EntityKind::Vendor,
            EntityKind::Customer,
            EntityKind::Location,
            EntityKind::Meter,
            EntityKind::Team,
            EntityKind::User,
            EntityKind::Category,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|kind| kind.code() == code)
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip_for_all_kinds() {
        for kind in EntityKind::all() {
            assert_eq!(EntityKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(EntityKind::from_code("work-orders"), None);
    }

    #[test]
    fn test_display_uses_code() {
        assert_eq!(EntityKind::AssetType.to_string(), "asset-types");
    }
}
