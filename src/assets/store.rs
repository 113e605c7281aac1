//! Filesystem side of the asset store: resolves asset names against a directory
//! and decodes background images into RGBA pixels.

use super::AssetError;
use std::fs;
use std::io;
use std::path::PathBuf;

/// RGBA8 pixels ready to be uploaded as a texture.
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

#[derive(Clone, Debug)]
pub struct DirectoryAssets {
    root: PathBuf,
}

impl DirectoryAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    pub fn exists(&self, name: &str) -> bool {
        self.path(name).is_file()
    }

    pub fn decode(&self, name: &str) -> Result<DecodedImage, AssetError> {
        let bytes = fs::read(self.path(name)).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => AssetError::Missing(name.to_string()),
            _ => AssetError::Io {
                name: name.to_string(),
                source,
            },
        })?;

        let image = image::load_from_memory(&bytes)
            .map_err(|source| AssetError::Decode {
                name: name.to_string(),
                source,
            })?
            .to_rgba8();
        let (width, height) = image.dimensions();

        Ok(DecodedImage {
            width,
            height,
            rgba: image.into_raw(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn write_png(dir: &Path, name: &str, width: u32, height: u32) {
        let img = image::RgbaImage::from_pixel(width, height, image::Rgba([10, 20, 30, 255]));
        img.save(dir.join(name)).unwrap();
    }

    #[test]
    fn test_decode_png() {
        let dir = Path::new("test_assets_decode");
        fs::create_dir_all(dir).unwrap();
        write_png(dir, "01.png", 4, 3);

        let assets = DirectoryAssets::new(dir);
        assert!(assets.exists("01.png"));
        assert!(!assets.exists("02.png"));

        let decoded = assets.decode("01.png").unwrap();
        assert_eq!(decoded.width, 4);
        assert_eq!(decoded.height, 3);
        assert_eq!(decoded.rgba.len(), 4 * 3 * 4);
        assert_eq!(&decoded.rgba[..4], &[10, 20, 30, 255]);

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_decode_missing() {
        let assets = DirectoryAssets::new("nonexistent_asset_dir_xyz123");

        let result = assets.decode("01.png");
        assert!(matches!(result, Err(AssetError::Missing(_))));
    }

    #[test]
    fn test_decode_corrupt() {
        let dir = Path::new("test_assets_corrupt");
        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join("02.png"), "this is not a png").unwrap();

        let assets = DirectoryAssets::new(dir);
        let result = assets.decode("02.png");
        assert!(matches!(result, Err(AssetError::Decode { .. })));

        let _ = fs::remove_dir_all(dir);
    }
}
