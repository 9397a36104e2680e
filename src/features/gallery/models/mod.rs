mod gallery_asset;

pub use gallery_asset::{AssetStatus, GalleryAsset};
