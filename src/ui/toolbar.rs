use crate::app::GalleryApp;
use crate::slideshow::INTERVAL_RANGE;
use egui::{self, Color32, Margin, RichText};

impl GalleryApp {
    pub fn render_toolbar(&mut self, ctx: &egui::Context) {
        let has_photos = self.gallery.state().is_some();
        let slideshow_active = self.slideshow.is_active();
        let show_sidebar = self.settings.show_sidebar;
        let mut slideshow_loop = self.settings.slideshow_loop;

        // Collect actions to perform after UI
        let mut open_folder = false;
        let mut open_manifest = false;
        let mut go_prev = false;
        let mut go_next = false;
        let mut toggle_slideshow = false;
        let mut toggle_sidebar = false;
        let mut new_interval: Option<f32> = None;
        let mut go_to: Option<usize> = None;

        let total = self.gallery.current_album().map(|a| a.photos().len()).unwrap_or(0);
        let mut position = self.gallery.state().map(|s| s.index + 1).unwrap_or(0);

        egui::TopBottomPanel::top("toolbar")
            .frame(
                egui::Frame::NONE
                    .fill(Color32::from_rgb(32, 32, 36))
                    .inner_margin(Margin::symmetric(8, 6)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui.button("📁 Folder").on_hover_text("Open a folder of albums").clicked() {
                        open_folder = true;
                    }
                    if ui.button("📄 Catalog").on_hover_text("Open an album catalog (.json)").clicked() {
                        open_manifest = true;
                    }

                    ui.separator();

                    ui.add_enabled_ui(has_photos, |ui| {
                        if ui.button("◀").on_hover_text("Previous (←)").clicked() {
                            go_prev = true;
                        }
                        if ui.button("▶").on_hover_text("Next (→)").clicked() {
                            go_next = true;
                        }

                        let jump = ui.add(
                            egui::DragValue::new(&mut position)
                                .range(1..=total.max(1))
                                .suffix(format!(" / {}", total)),
                        );
                        if jump.changed() {
                            go_to = Some(position.saturating_sub(1));
                        }

                        ui.separator();

                        let label = if slideshow_active { "⏸ Slideshow" } else { "⏵ Slideshow" };
                        if ui
                            .selectable_label(slideshow_active, label)
                            .on_hover_text("Toggle slideshow (Space)")
                            .clicked()
                        {
                            toggle_slideshow = true;
                        }

                        let mut interval = self.slideshow.interval();
                        let slider = ui.add(
                            egui::Slider::new(&mut interval, INTERVAL_RANGE)
                                .suffix(" s")
                                .step_by(0.5),
                        );
                        if slider.changed() {
                            new_interval = Some(interval);
                        }
                        ui.checkbox(&mut slideshow_loop, "Loop")
                            .on_hover_text("Start the album over after the last photo");
                    });

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .selectable_label(show_sidebar, RichText::new("Albums"))
                            .on_hover_text("Toggle album list (S)")
                            .clicked()
                        {
                            toggle_sidebar = true;
                        }
                    });
                });
            });

        if open_folder {
            self.open_folder_dialog();
        }
        if open_manifest {
            self.open_manifest_dialog();
        }
        if go_prev {
            self.pending.prev = true;
        }
        if go_next {
            self.pending.next = true;
        }
        if let Some(index) = go_to {
            if let Err(e) = self.gallery.go_to(index) {
                e.log();
            }
        }
        if toggle_slideshow {
            self.toggle_slideshow();
        }
        if toggle_sidebar {
            self.settings.show_sidebar = !self.settings.show_sidebar;
        }
        if slideshow_loop != self.settings.slideshow_loop {
            self.settings.slideshow_loop = slideshow_loop;
            self.slideshow.set_loop(slideshow_loop);
        }
        if let Some(interval) = new_interval {
            self.slideshow.set_interval(interval);
        }
    }
}
