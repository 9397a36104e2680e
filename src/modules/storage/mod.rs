mod image_store;

pub use image_store::{
    build_image_host, CloudImageHost, ImageHost, LocalImageStore, UploadedImage,
    ALLOWED_IMAGE_TYPES, MAX_IMAGE_SIZE,
};
