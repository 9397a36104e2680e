mod gallery_dto;

pub use gallery_dto::{
    BulkInsertGalleryDto, GalleryAssetResponseDto, GalleryAssetSeed, GalleryForm,
    ListGalleryQuery,
};
