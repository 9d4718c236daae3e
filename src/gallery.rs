use crate::catalog::{Album, AlbumCatalog, Photo};
use crate::errors::{GalleryError, Result};
use crate::surface::PresentationSurface;

/// Current position in the catalog.
///
/// Invariant: `album_id` names a catalog album and `index` is below that
/// album's photo count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub album_id: String,
    pub index: usize,
}

/// Album/photo navigation state machine.
///
/// The state stays `None` until `initialize` runs against a non-empty
/// catalog; every navigation operation is a no-op until then.
pub struct GalleryController<S: PresentationSurface> {
    catalog: AlbumCatalog,
    surface: S,
    state: Option<NavigationState>,
}

impl<S: PresentationSurface> GalleryController<S> {
    pub fn new(catalog: AlbumCatalog, surface: S) -> Self {
        Self {
            catalog,
            surface,
            state: None,
        }
    }

    pub fn catalog(&self) -> &AlbumCatalog {
        &self.catalog
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[cfg(test)]
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn state(&self) -> Option<&NavigationState> {
        self.state.as_ref()
    }

    pub fn current_album(&self) -> Option<&Album> {
        self.state
            .as_ref()
            .and_then(|s| self.catalog.album(&s.album_id))
    }

    pub fn current_photo(&self) -> Option<&Photo> {
        let state = self.state.as_ref()?;
        self.catalog.photos(&state.album_id)?.get(state.index)
    }

    pub fn is_last_photo(&self) -> bool {
        match (&self.state, self.current_total()) {
            (Some(state), Some(total)) => state.index + 1 == total,
            _ => false,
        }
    }

    pub fn initialize(&mut self) {
        let Some(first) = self.catalog.first_album_id().map(str::to_string) else {
            log::debug!("Catalog is empty, gallery stays idle");
            return;
        };

        self.state = Some(NavigationState {
            album_id: first.clone(),
            index: 0,
        });
        self.render();
        self.mark_active(&first);
    }

    /// Push the current photo, its description and the `n/total` counter to
    /// the surface. Never touches navigation state.
    pub fn render(&mut self) {
        let Some(state) = &self.state else {
            return;
        };
        let Some(photos) = self.catalog.photos(&state.album_id) else {
            return;
        };
        let Some(photo) = photos.get(state.index) else {
            return;
        };

        let counter = format!("{}/{}", state.index + 1, photos.len());
        report(self.surface.set_image(photo.image()));
        report(self.surface.set_description(photo.description()));
        report(self.surface.set_counter(&counter));
    }

    pub fn advance(&mut self) {
        self.step(|index, total| (index + 1) % total);
    }

    pub fn retreat(&mut self) {
        self.step(|index, total| (index + total - 1) % total);
    }

    pub fn first(&mut self) {
        self.step(|_, _| 0);
    }

    pub fn last(&mut self) {
        self.step(|_, total| total - 1);
    }

    /// Jump to `index` within the current album.
    pub fn go_to(&mut self, index: usize) -> Result<()> {
        let Some(total) = self.current_total() else {
            return Ok(());
        };
        if index >= total {
            return Err(GalleryError::IndexOutOfRange { index, total });
        }
        self.step(|_, _| index);
        Ok(())
    }

    pub fn select_album(&mut self, album_id: &str) {
        if !self.catalog.contains(album_id) {
            log::debug!(
                "{}",
                GalleryError::UnknownAlbum {
                    album_id: album_id.to_string()
                }
            );
            return;
        }

        self.mark_active(album_id);
        self.state = Some(NavigationState {
            album_id: album_id.to_string(),
            index: 0,
        });
        self.render();
    }

    pub fn next_album(&mut self) {
        self.cycle_album(|position, count| (position + 1) % count);
    }

    pub fn previous_album(&mut self) {
        self.cycle_album(|position, count| (position + count - 1) % count);
    }

    fn cycle_album(&mut self, next: impl FnOnce(usize, usize) -> usize) {
        let Some(state) = &self.state else {
            return;
        };
        let Some(position) = self.catalog.position(&state.album_id) else {
            return;
        };
        let target = next(position, self.catalog.len());
        if let Some(album_id) = self.catalog.album_at(target).map(|a| a.id().to_string()) {
            self.select_album(&album_id);
        }
    }

    fn step(&mut self, next: impl FnOnce(usize, usize) -> usize) {
        let Some(total) = self.current_total() else {
            return;
        };
        if let Some(state) = self.state.as_mut() {
            state.index = next(state.index, total);
        }
        self.render();
    }

    fn current_total(&self) -> Option<usize> {
        let state = self.state.as_ref()?;
        self.catalog
            .photos(&state.album_id)
            .map(<[Photo]>::len)
            .filter(|&total| total > 0)
    }

    fn mark_active(&mut self, album_id: &str) {
        report(self.surface.clear_all_album_active());
        report(self.surface.set_album_active(album_id));
    }
}

/// Surface failures are never fatal for navigation.
fn report(result: Result<()>) {
    if let Err(e) = result {
        log::warn!("Presentation update skipped: {}", e);
    }
}
