use crate::errors::{GalleryError, Result};

/// Sink for everything the gallery controller renders.
///
/// Implementations own the presentation elements; a call that targets an
/// element that does not exist reports `MissingPresentationElement` and the
/// controller carries on with the remaining updates.
pub trait PresentationSurface {
    fn set_image(&mut self, image: &str) -> Result<()>;
    fn set_description(&mut self, text: &str) -> Result<()>;
    fn set_counter(&mut self, text: &str) -> Result<()>;
    fn set_album_active(&mut self, album_id: &str) -> Result<()>;
    fn clear_all_album_active(&mut self) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumSelector {
    pub album_id: String,
    pub title: String,
    pub active: bool,
}

/// Surface read by the egui shell every frame.
#[derive(Debug, Clone, Default)]
pub struct DisplaySurface {
    pub image: Option<String>,
    pub description: String,
    pub counter: String,
    pub selectors: Vec<AlbumSelector>,
}

impl DisplaySurface {
    pub fn new<'a>(albums: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            selectors: albums
                .into_iter()
                .map(|(id, title)| AlbumSelector {
                    album_id: id.to_string(),
                    title: title.to_string(),
                    active: false,
                })
                .collect(),
            ..Default::default()
        }
    }

    pub fn active_album(&self) -> Option<&AlbumSelector> {
        self.selectors.iter().find(|s| s.active)
    }

    /// egui image loaders expect a URI; bare paths become `file://` URIs.
    pub fn image_uri(&self) -> Option<String> {
        self.image.as_ref().map(|image| {
            if image.contains("://") {
                image.clone()
            } else {
                format!("file://{}", image)
            }
        })
    }
}

impl PresentationSurface for DisplaySurface {
    fn set_image(&mut self, image: &str) -> Result<()> {
        self.image = Some(image.to_string());
        Ok(())
    }

    fn set_description(&mut self, text: &str) -> Result<()> {
        self.description = text.to_string();
        Ok(())
    }

    fn set_counter(&mut self, text: &str) -> Result<()> {
        self.counter = text.to_string();
        Ok(())
    }

    fn set_album_active(&mut self, album_id: &str) -> Result<()> {
        match self.selectors.iter_mut().find(|s| s.album_id == album_id) {
            Some(selector) => {
                selector.active = true;
                Ok(())
            }
            None => Err(GalleryError::MissingPresentationElement {
                element: format!("album selector '{}'", album_id),
            }),
        }
    }

    fn clear_all_album_active(&mut self) -> Result<()> {
        for selector in &mut self.selectors {
            selector.active = false;
        }
        Ok(())
    }
}
