use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("Unknown album: {album_id}")]
    UnknownAlbum { album_id: String },

    #[error("Album '{album_id}' has no photos")]
    EmptyAlbum { album_id: String },

    #[error("Album '{album_id}' is defined more than once")]
    DuplicateAlbum { album_id: String },

    #[error("Presentation element missing: {element}")]
    MissingPresentationElement { element: String },

    #[error("Photo index {index} is out of range for an album of {total}")]
    IndexOutOfRange { index: usize, total: usize },

    #[error("No images found in '{path}'")]
    NoImagesFound { path: PathBuf },

    #[error("Not a catalog manifest or folder: {path}")]
    UnsupportedCatalog { path: PathBuf },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("JSON parsing error: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, GalleryError>;

impl GalleryError {
    /// Returns true if the application can carry on after this error
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GalleryError::UnknownAlbum { .. }
                | GalleryError::MissingPresentationElement { .. }
                | GalleryError::IndexOutOfRange { .. }
                | GalleryError::IoError { .. }
        )
    }

    /// Returns a user-friendly error message with recovery suggestions
    pub fn user_message(&self) -> String {
        let base_message = self.to_string();
        let suggestion = match self {
            GalleryError::EmptyAlbum { .. } => "Add at least one photo to the album or remove it from the catalog.",
            GalleryError::DuplicateAlbum { .. } => "Give every album in the catalog a unique id.",
            GalleryError::NoImagesFound { .. } => "Choose a folder that contains images or album sub-folders.",
            GalleryError::UnsupportedCatalog { .. } => "Open a .json catalog manifest or a folder of images.",
            GalleryError::JsonError { .. } => "The catalog manifest is not valid JSON. Check its syntax.",
            GalleryError::IoError { .. } => "File system error occurred. Check that the path exists and is readable.",
            _ => "An unexpected error occurred.",
        };

        format!("{}\n\n{}", base_message, suggestion)
    }

    /// Returns an error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            GalleryError::UnknownAlbum { .. } => "UNKNOWN_ALBUM",
            GalleryError::EmptyAlbum { .. } => "EMPTY_ALBUM",
            GalleryError::DuplicateAlbum { .. } => "DUPLICATE_ALBUM",
            GalleryError::MissingPresentationElement { .. } => "MISSING_PRESENTATION_ELEMENT",
            GalleryError::IndexOutOfRange { .. } => "INDEX_OUT_OF_RANGE",
            GalleryError::NoImagesFound { .. } => "NO_IMAGES_FOUND",
            GalleryError::UnsupportedCatalog { .. } => "UNSUPPORTED_CATALOG",
            GalleryError::IoError { .. } => "IO_ERROR",
            GalleryError::JsonError { .. } => "JSON_ERROR",
        }
    }

    /// Logs the error at a level matching its severity
    pub fn log(&self) {
        if self.is_recoverable() {
            log::warn!("[{}] {}", self.error_code(), self);
        } else {
            log::error!("[{}] {}", self.error_code(), self);
        }
    }
}
