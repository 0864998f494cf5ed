use crate::error::{AppError, AppResult};
use crate::models::form::SheetImage;
use std::path::{Path, PathBuf};
use tokio::fs;

/// File extensions recognized as scanned answer sheets
const IMAGE_EXTENSIONS: [&str; 8] = ["png", "jpg", "jpeg", "bmp", "gif", "webp", "tif", "tiff"];

/// Load a single answer-sheet image from disk
pub async fn load_sheet_image(path: &Path) -> AppResult<SheetImage> {
    if !path.exists() {
        return Err(AppError::file_not_found(path.to_string_lossy()));
    }

    let bytes = fs::read(path)
        .await
        .map_err(|e| AppError::file_read_failed(path.to_string_lossy(), e))?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "sheet".to_string());

    Ok(SheetImage::new(file_name, bytes))
}

/// Load every recognized image in a folder, skipping unreadable files
pub async fn load_sheet_images_from_dir(folder_path: &str) -> AppResult<Vec<SheetImage>> {
    let folder = PathBuf::from(folder_path);

    if !folder.exists() {
        return Err(AppError::directory_not_found(folder_path));
    }

    let mut paths = Vec::new();
    let mut entries = fs::read_dir(&folder).await?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if is_image_path(&path) {
            paths.push(path);
        }
    }

    // Stable order keeps sheet numbering reproducible across runs
    paths.sort();

    let mut images = Vec::new();
    for path in &paths {
        tracing::info!(
            "Loading: {}",
            path.file_name().unwrap_or_default().to_string_lossy()
        );

        match load_sheet_image(path).await {
            Ok(image) => {
                tracing::info!("Loaded {} bytes", image.bytes.len());
                images.push(image);
            }
            Err(e) => {
                tracing::warn!("Skipping {}: {}", path.display(), e);
            }
        }
    }

    if images.is_empty() {
        tracing::warn!("No image files found in {}", folder_path);
    }

    Ok(images)
}

fn is_image_path(path: &Path) -> bool {
    match path.extension().and_then(|s| s.to_str()) {
        Some(ext) => IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()),
        None => false,
    }
}
