use serde::{Deserialize, Serialize};

/// DTO формы актива
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetDto {
    pub id: Option<String>,
    pub name: String,

    #[serde(rename = "assetTypeIds", default)]
    pub asset_type_ids: Vec<String>,

    #[serde(rename = "locationId")]
    pub location_id: Option<String>,

    #[serde(rename = "vendorId")]
    pub vendor_id: Option<String>,

    /// Display names of the referenced records, as returned with a saved asset.
    /// Used to label selections before the option lists are fetched.
    #[serde(default)]
    pub labels: Vec<(String, String)>,
}
