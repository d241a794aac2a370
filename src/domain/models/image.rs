#[cfg(test)]
#[path = "image_test.rs"]
mod tests;

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use anyhow::bail;
use anyhow::Result;

const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "webp", "bmp"];

/// Media-type precondition for uploads. Anything without a known image
/// extension fails fast before a request is made.
pub fn is_image_file(source: &Path) -> bool {
    let ext = source
        .extension()
        .map(|e| return e.to_string_lossy().to_lowercase());

    if let Some(ext) = ext {
        return IMAGE_EXTENSIONS.contains(&ext.as_str());
    }

    return false;
}

/// The raw bytes sent as the multipart `image` part.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn read(source: &Path) -> Result<ImageUpload> {
        let file_name = match source.file_name() {
            Some(name) => name.to_string_lossy().to_string(),
            None => bail!("{} has no file name", source.display()),
        };

        let bytes = fs::read(source)?;

        return Ok(ImageUpload { file_name, bytes });
    }
}

/// Local display copy of a selected image, created at upload time so the
/// result view can show the picture without waiting on the network. The
/// copy is removed exactly once: either through [`ImageHandle::release`] or
/// when the owning view drops the handle.
#[derive(Debug)]
pub struct ImageHandle {
    display_path: PathBuf,
    released: bool,
}

impl ImageHandle {
    pub fn create(source: &Path) -> Result<ImageHandle> {
        let dir = dirs::cache_dir().unwrap().join("foodlens/previews");

        return ImageHandle::create_in(&dir, source);
    }

    pub fn create_in(dir: &Path, source: &Path) -> Result<ImageHandle> {
        let file_name = match source.file_name() {
            Some(name) => name.to_os_string(),
            None => bail!("{} has no file name", source.display()),
        };

        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }

        let display_path = dir.join(file_name);
        fs::copy(source, &display_path)?;

        return Ok(ImageHandle {
            display_path,
            released: false,
        });
    }

    pub fn display_path(&self) -> &Path {
        return &self.display_path;
    }

    pub fn is_released(&self) -> bool {
        return self.released;
    }

    pub fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;

        if let Err(err) = fs::remove_file(&self.display_path) {
            tracing::warn!(err = ?err, path = ?self.display_path, "Failed to remove image display copy");
        }
    }
}

impl Drop for ImageHandle {
    fn drop(&mut self) {
        self.release();
    }
}
