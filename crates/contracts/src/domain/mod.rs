pub mod a001_asset;
pub mod a002_purchase_order;
