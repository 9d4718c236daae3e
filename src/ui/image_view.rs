use crate::app::GalleryApp;
use egui::{self, Color32, RichText};

impl GalleryApp {
    pub fn render_main_view(&mut self, ctx: &egui::Context) {
        let background = self.settings.background_color.to_color();

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(background))
            .show(ctx, |ui| {
                let surface = self.gallery.surface();
                let Some(uri) = surface.image_uri() else {
                    ui.centered_and_justified(|ui| {
                        ui.label(
                            RichText::new("No album loaded. Open a folder or an album catalog.")
                                .color(Color32::GRAY)
                                .size(16.0),
                        );
                    });
                    return;
                };

                let show_description =
                    self.settings.show_description && !surface.description.is_empty();
                let caption_height = if show_description { 32.0 } else { 0.0 };
                let mut image_size = ui.available_size();
                image_size.y = (image_size.y - caption_height).max(0.0);

                ui.vertical_centered(|ui| {
                    let response = ui.add_sized(
                        image_size,
                        egui::Image::from_uri(uri)
                            .maintain_aspect_ratio(true)
                            .fit_to_exact_size(image_size)
                            .sense(egui::Sense::click()),
                    );

                    // Click halves: left retreats, right advances
                    if response.clicked() {
                        if let Some(pos) = response.interact_pointer_pos() {
                            if pos.x < response.rect.center().x {
                                self.pending.prev = true;
                            } else {
                                self.pending.next = true;
                            }
                        }
                    }

                    if show_description {
                        ui.label(
                            RichText::new(&surface.description)
                                .color(Color32::LIGHT_GRAY)
                                .size(14.0),
                        );
                    }
                });
            });
    }
}
