use crate::errors::{GalleryError, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "webp", "tiff", "tif", "ico",
];

pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| SUPPORTED_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// A single image reference paired with its caption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    image: String,
    description: String,
}

impl Photo {
    pub fn new(image: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            description: description.into(),
        }
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Album {
    id: String,
    title: String,
    photos: Vec<Photo>,
}

impl Album {
    pub fn new(id: impl Into<String>, photos: Vec<Photo>) -> Self {
        let id = id.into();
        Self {
            title: id.clone(),
            id,
            photos,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }
}

/// Ordered, validated set of albums. Every album holds at least one photo
/// and album ids are unique; the catalog itself may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlbumCatalog {
    albums: Vec<Album>,
}

impl AlbumCatalog {
    pub fn new(albums: Vec<Album>) -> Result<Self> {
        let mut seen = HashSet::new();
        for album in &albums {
            if album.photos.is_empty() {
                return Err(GalleryError::EmptyAlbum {
                    album_id: album.id.clone(),
                });
            }
            if !seen.insert(album.id.as_str()) {
                return Err(GalleryError::DuplicateAlbum {
                    album_id: album.id.clone(),
                });
            }
        }
        Ok(Self { albums })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.albums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.albums.is_empty()
    }

    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    /// Album ids in catalog order.
    pub fn album_ids(&self) -> impl Iterator<Item = &str> {
        self.albums.iter().map(|a| a.id.as_str())
    }

    pub fn first_album_id(&self) -> Option<&str> {
        self.albums.first().map(|a| a.id.as_str())
    }

    pub fn contains(&self, album_id: &str) -> bool {
        self.position(album_id).is_some()
    }

    pub fn position(&self, album_id: &str) -> Option<usize> {
        self.albums.iter().position(|a| a.id == album_id)
    }

    pub fn album(&self, album_id: &str) -> Option<&Album> {
        self.albums.iter().find(|a| a.id == album_id)
    }

    pub fn album_at(&self, position: usize) -> Option<&Album> {
        self.albums.get(position)
    }

    pub fn photos(&self, album_id: &str) -> Option<&[Photo]> {
        self.album(album_id).map(Album::photos)
    }

    /// Load a catalog from a `.json` manifest or from a folder of albums.
    pub fn load(path: &Path) -> Result<Self> {
        let _span = tracing::info_span!("load_catalog", path = %path.display()).entered();

        if path.is_dir() {
            Self::from_folder(path)
        } else if path
            .extension()
            .map(|e| e.eq_ignore_ascii_case("json"))
            .unwrap_or(false)
        {
            Self::from_manifest(path)
        } else {
            Err(GalleryError::UnsupportedCatalog {
                path: path.to_path_buf(),
            })
        }
    }

    pub fn from_manifest(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
        let catalog = Self::from_manifest_str(&content, base_dir)?;
        log::info!(
            "Loaded {} album(s) from manifest {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Parse manifest JSON; relative image paths are resolved against `base_dir`.
    pub fn from_manifest_str(content: &str, base_dir: &Path) -> Result<Self> {
        let manifest: Manifest = serde_json::from_str(content)?;

        let albums = manifest
            .albums
            .into_iter()
            .map(|album| {
                let photos = album
                    .photos
                    .into_iter()
                    .map(|photo| {
                        let image = resolve_image(&photo.image, base_dir);
                        let description = photo
                            .description
                            .unwrap_or_else(|| file_stem(&photo.image));
                        Photo::new(image, description)
                    })
                    .collect();
                let built = Album::new(album.id, photos);
                match album.title {
                    Some(title) => built.with_title(title),
                    None => built,
                }
            })
            .collect();

        Self::new(albums)
    }

    /// Build a catalog from a directory tree. Images directly under `root`
    /// form the first album; every sub-directory with images is another.
    pub fn from_folder(root: &Path) -> Result<Self> {
        let mut albums = Vec::new();

        let root_name = root
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| root.to_string_lossy().to_string());
        let root_photos = collect_photos(root);
        if !root_photos.is_empty() {
            albums.push(Album::new(root_name, root_photos));
        }

        let mut dirs: Vec<PathBuf> = WalkDir::new(root)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_dir())
            .filter(|e| !e.file_name().to_string_lossy().starts_with('.'))
            .map(|e| e.into_path())
            .collect();
        dirs.sort_by(|a, b| natord::compare(&lower_name(a), &lower_name(b)));

        for dir in dirs {
            let photos = collect_photos(&dir);
            if photos.is_empty() {
                log::debug!("Skipping folder without images: {}", dir.display());
                continue;
            }
            let id = dir
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            if albums.iter().any(|a: &Album| a.id == id) {
                log::warn!("Folder '{}' clashes with an existing album id, skipping", id);
                continue;
            }
            albums.push(Album::new(id, photos));
        }

        if albums.is_empty() {
            return Err(GalleryError::NoImagesFound {
                path: root.to_path_buf(),
            });
        }

        log::info!("Loaded {} album(s) from {}", albums.len(), root.display());
        Self::new(albums)
    }
}

#[derive(Debug, Deserialize)]
struct Manifest {
    albums: Vec<ManifestAlbum>,
}

#[derive(Debug, Deserialize)]
struct ManifestAlbum {
    id: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    photos: Vec<ManifestPhoto>,
}

#[derive(Debug, Deserialize)]
struct ManifestPhoto {
    image: String,
    #[serde(default)]
    description: Option<String>,
}

fn collect_photos(dir: &Path) -> Vec<Photo> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| is_supported_image(p))
        .collect();
    files.sort_by(|a, b| natord::compare(&lower_name(a), &lower_name(b)));

    files
        .into_iter()
        .map(|path| {
            let description = file_stem(&path.to_string_lossy());
            Photo::new(path.to_string_lossy().to_string(), description)
        })
        .collect()
}

fn resolve_image(image: &str, base_dir: &Path) -> String {
    if image.contains("://") {
        return image.to_string();
    }
    let path = Path::new(image);
    if path.is_absolute() {
        image.to_string()
    } else {
        base_dir.join(path).to_string_lossy().to_string()
    }
}

fn file_stem(image: &str) -> String {
    Path::new(image)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

fn lower_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}
