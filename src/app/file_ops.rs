use eframe::egui;

use super::GalleryApp;

impl GalleryApp {
    // File dialogs
    pub fn open_manifest_dialog(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Album catalog", &["json"])
            .pick_file()
        {
            self.open_catalog_or_report(path);
        }
    }

    pub fn open_folder_dialog(&mut self) {
        if let Some(path) = rfd::FileDialog::new().pick_folder() {
            self.open_catalog_or_report(path);
        }
    }

    /// A dropped folder or manifest replaces the catalog; the first usable
    /// entry wins.
    pub fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());

        for file in dropped {
            if let Some(path) = file.path {
                log::debug!("Dropped {}", path.display());
                self.open_catalog_or_report(path);
                break;
            }
        }
    }
}
