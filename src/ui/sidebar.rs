use crate::app::GalleryApp;
use egui::{self, Color32, Margin, RichText, Stroke};

const PANEL_BG: Color32 = Color32::from_rgb(38, 38, 38);
const PANEL_BORDER: Color32 = Color32::from_rgb(28, 28, 28);

impl GalleryApp {
    /// Album selectors on the left; clicking one queues a `select_album`.
    pub fn render_album_panel(&mut self, ctx: &egui::Context) {
        if !self.settings.show_sidebar {
            return;
        }

        let mut clicked: Option<String> = None;

        egui::SidePanel::left("album_panel")
            .resizable(true)
            .default_width(200.0)
            .min_width(140.0)
            .max_width(320.0)
            .frame(
                egui::Frame::NONE
                    .fill(PANEL_BG)
                    .stroke(Stroke::new(1.0, PANEL_BORDER))
                    .inner_margin(Margin::same(8)),
            )
            .show(ctx, |ui| {
                ui.label(RichText::new("Albums").strong().size(13.0));
                ui.separator();

                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        let catalog = self.gallery.catalog();
                        for (n, selector) in self.gallery.surface().selectors.iter().enumerate() {
                            let count = catalog
                                .photos(&selector.album_id)
                                .map(|p| p.len())
                                .unwrap_or(0);
                            let label = if n < 9 {
                                format!("{}  {} ({})", n + 1, selector.title, count)
                            } else {
                                format!("   {} ({})", selector.title, count)
                            };
                            if ui.selectable_label(selector.active, label).clicked() {
                                clicked = Some(selector.album_id.clone());
                            }
                        }

                        if catalog.is_empty() {
                            ui.label(
                                RichText::new("Drop a folder or catalog here")
                                    .color(Color32::GRAY)
                                    .italics(),
                            );
                        }
                    });
            });

        if let Some(album_id) = clicked {
            self.pending.select_album = Some(album_id);
        }
    }
}
