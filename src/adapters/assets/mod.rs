pub mod payload_assets;
