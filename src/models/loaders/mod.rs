pub mod image_loader;

pub use image_loader::{load_sheet_image, load_sheet_images_from_dir};
