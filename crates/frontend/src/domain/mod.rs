pub mod a001_asset;
pub mod a002_purchase_order;
pub mod a003_part;
pub mod a004_vendor;
pub mod a005_asset_type;
pub mod a006_location;
