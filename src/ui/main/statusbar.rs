use crate::app::GalleryApp;
use egui::{self, Color32, Margin, RichText};

impl GalleryApp {
    pub(crate) fn render_statusbar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("statusbar")
            .frame(
                egui::Frame::NONE
                    .fill(Color32::from_rgb(25, 25, 28))
                    .inner_margin(Margin::symmetric(12, 4)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if let Some(album) = self.gallery.current_album() {
                        ui.label(RichText::new(album.title()).color(Color32::WHITE).size(12.0));
                    }

                    if let Some(photo) = self.gallery.current_photo() {
                        let file_name = std::path::Path::new(photo.image())
                            .file_name()
                            .map(|n| n.to_string_lossy().to_string())
                            .unwrap_or_default();
                        ui.label(RichText::new(file_name).color(Color32::GRAY).size(11.0));
                    }

                    let surface = self.gallery.surface();
                    if !surface.description.is_empty() {
                        ui.label(
                            RichText::new(&surface.description)
                                .color(Color32::GRAY)
                                .size(11.0),
                        );
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if !surface.counter.is_empty() {
                            ui.label(
                                RichText::new(&surface.counter)
                                    .color(Color32::GRAY)
                                    .size(11.0),
                            );
                        }

                        if self.slideshow.is_active() {
                            ui.label(
                                RichText::new(format!("▶ {:.1}s", self.slideshow.interval()))
                                    .color(Color32::from_rgb(255, 200, 100))
                                    .size(11.0),
                            );
                        }

                        if let Some((msg, time)) = &self.status_message {
                            if time.elapsed().as_secs() < 3 {
                                ui.label(
                                    RichText::new(msg)
                                        .color(Color32::from_rgb(100, 200, 100))
                                        .size(11.0),
                                );
                            }
                        }
                    });
                });
            });
    }
}
