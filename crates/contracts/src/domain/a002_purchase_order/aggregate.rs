use serde::{Deserialize, Serialize};

/// DTO формы заказа на закупку
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrderDto {
    pub id: Option<String>,

    #[serde(rename = "vendorId")]
    pub vendor_id: Option<String>,

    #[serde(rename = "partIds", default)]
    pub part_ids: Vec<String>,

    #[serde(rename = "locationId")]
    pub location_id: Option<String>,

    #[serde(rename = "assetId")]
    pub asset_id: Option<String>,

    pub comment: Option<String>,

    /// `(id, name)` pairs for the referenced vendor, parts, location and asset
    #[serde(default)]
    pub labels: Vec<(String, String)>,
}

impl PurchaseOrderDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.vendor_id.is_none() {
            return Err("Vendor is required".into());
        }
        if self.part_ids.is_empty() {
            return Err("At least one part is required".into());
        }
        Ok(())
    }
}
