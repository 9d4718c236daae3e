use crate::app::GalleryApp;

impl eframe::App for GalleryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Handle keyboard input
        self.handle_keyboard(ctx);

        // Update slideshow
        self.tick_slideshow(ctx);

        // Handle dropped files
        self.handle_dropped_files(ctx);

        if self.settings.show_toolbar {
            self.render_toolbar(ctx);
        }
        if self.settings.show_statusbar {
            self.render_statusbar(ctx);
        }
        self.render_album_panel(ctx);
        self.render_main_view(ctx);
        self.render_load_error(ctx);

        // Navigation is deferred until the frame has been laid out
        if self.pending != Default::default() {
            self.apply_pending_navigation();
            ctx.request_repaint();
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.remember_session();
        self.settings.save();
    }
}

impl GalleryApp {
    fn render_load_error(&mut self, ctx: &egui::Context) {
        let Some(message) = &self.load_error else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new("Could not open catalog")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(message.as_str());
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });

        if dismissed {
            self.load_error = None;
        }
    }
}
