use crate::catalog::AlbumCatalog;
use crate::errors::Result;
use crate::gallery::GalleryController;
use crate::settings::Settings;
use crate::slideshow::{Slideshow, SlideshowStep};
use crate::surface::DisplaySurface;

use std::path::PathBuf;
use std::time::Instant;

mod file_ops;

/// Startup choices coming from the command line.
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    pub catalog: Option<PathBuf>,
    pub album: Option<String>,
    pub slideshow: bool,
    pub interval: Option<f32>,
}

/// Navigation requested during a frame, applied once rendering is done.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingNavigation {
    pub next: bool,
    pub prev: bool,
    pub first: bool,
    pub last: bool,
    pub next_album: bool,
    pub prev_album: bool,
    pub select_album: Option<String>,
}

pub struct GalleryApp {
    pub settings: Settings,
    pub gallery: GalleryController<DisplaySurface>,
    pub catalog_path: Option<PathBuf>,
    pub slideshow: Slideshow,
    pub pending: PendingNavigation,
    pub is_fullscreen: bool,
    pub status_message: Option<(String, Instant)>,
    pub load_error: Option<String>,
}

impl GalleryApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, options: LaunchOptions) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);
        crate::ui::theme::apply_theme(&cc.egui_ctx, &settings);
        Self::with_settings(settings, options)
    }

    /// Build the app state without a window.
    pub fn with_settings(settings: Settings, options: LaunchOptions) -> Self {
        let mut slideshow = Slideshow::new(
            options.interval.unwrap_or(settings.slideshow_interval),
            settings.slideshow_loop,
        );
        if options.slideshow {
            slideshow.start();
        }

        let mut app = Self {
            gallery: build_gallery(AlbumCatalog::empty()),
            settings,
            catalog_path: None,
            slideshow,
            pending: PendingNavigation::default(),
            is_fullscreen: false,
            status_message: None,
            load_error: None,
        };

        let session_catalog = if app.settings.restore_session {
            app.settings.last_catalog.clone()
        } else {
            None
        };
        let requested_album = options.album.or_else(|| {
            if app.settings.restore_session {
                app.settings.last_album.clone()
            } else {
                None
            }
        });

        if let Some(path) = options.catalog.or(session_catalog) {
            app.open_catalog_or_report(path);
            if let Some(album_id) = requested_album {
                app.gallery.select_album(&album_id);
            }
        }

        app
    }

    pub fn open_catalog(&mut self, path: PathBuf) -> Result<()> {
        let catalog = AlbumCatalog::load(&path)?;
        self.set_catalog(catalog);
        self.set_status_message(format!("Opened {}", path.display()));
        self.settings.add_recent_catalog(path.clone());
        self.catalog_path = Some(path);
        Ok(())
    }

    /// Like `open_catalog`, but a failure only reaches the log, the status
    /// bar and the error window.
    pub fn open_catalog_or_report(&mut self, path: PathBuf) {
        if let Err(e) = self.open_catalog(path) {
            log::error!("Failed to open catalog [{}]: {}", e.error_code(), e);
            self.set_status_message(e.to_string());
            self.load_error = Some(e.user_message());
        }
    }

    pub fn set_catalog(&mut self, catalog: AlbumCatalog) {
        self.gallery = build_gallery(catalog);
        self.gallery.initialize();
        self.pending = PendingNavigation::default();
    }

    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    pub fn current_album_id(&self) -> Option<&str> {
        self.gallery.state().map(|s| s.album_id.as_str())
    }

    pub fn toggle_slideshow(&mut self) {
        self.slideshow.toggle();
        let state = if self.slideshow.is_active() { "started" } else { "stopped" };
        self.set_status_message(format!("Slideshow {}", state));
    }

    /// Advance the slideshow by `dt` seconds.
    pub fn update_slideshow(&mut self, dt: f32) {
        match self.slideshow.tick(dt, self.gallery.is_last_photo()) {
            SlideshowStep::Advance => self.gallery.advance(),
            SlideshowStep::Finished => self.set_status_message("Slideshow finished".to_string()),
            SlideshowStep::Idle => {}
        }
    }

    /// Apply the navigation collected during the frame, then clear it.
    pub fn apply_pending_navigation(&mut self) {
        let pending = std::mem::take(&mut self.pending);

        if let Some(album_id) = pending.select_album {
            self.gallery.select_album(&album_id);
        }
        if pending.prev_album {
            self.gallery.previous_album();
        }
        if pending.next_album {
            self.gallery.next_album();
        }
        if pending.prev {
            self.gallery.retreat();
        }
        if pending.next {
            self.gallery.advance();
        }
        if pending.first {
            self.gallery.first();
        }
        if pending.last {
            self.gallery.last();
        }
    }

    pub fn remember_session(&mut self) {
        self.settings.last_album = self.current_album_id().map(str::to_string);
        self.settings.slideshow_interval = self.slideshow.interval();
    }
}

fn build_gallery(catalog: AlbumCatalog) -> GalleryController<DisplaySurface> {
    let surface = DisplaySurface::new(catalog.albums().iter().map(|a| (a.id(), a.title())));
    GalleryController::new(catalog, surface)
}
