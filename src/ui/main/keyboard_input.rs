use crate::app::GalleryApp;

const ALBUM_KEYS: [egui::Key; 9] = [
    egui::Key::Num1,
    egui::Key::Num2,
    egui::Key::Num3,
    egui::Key::Num4,
    egui::Key::Num5,
    egui::Key::Num6,
    egui::Key::Num7,
    egui::Key::Num8,
    egui::Key::Num9,
];

impl GalleryApp {
    pub fn handle_keyboard(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            if self.slideshow.is_active() {
                self.slideshow.stop();
                return;
            }
            if self.is_fullscreen {
                self.is_fullscreen = false;
                ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(false));
                return;
            }
        }

        // Shortcuts stay out of the way while a text field has focus
        if ctx.wants_keyboard_input() {
            return;
        }

        let mut toggle_slideshow = false;
        let mut toggle_fullscreen = false;

        ctx.input(|i| {
            let ctrl = i.modifiers.ctrl;

            if i.key_pressed(egui::Key::ArrowLeft) || i.key_pressed(egui::Key::A) {
                self.pending.prev = true;
            }
            if i.key_pressed(egui::Key::ArrowRight) || i.key_pressed(egui::Key::D) {
                self.pending.next = true;
            }
            if i.key_pressed(egui::Key::Home) {
                self.pending.first = true;
            }
            if i.key_pressed(egui::Key::End) {
                self.pending.last = true;
            }
            if i.key_pressed(egui::Key::PageUp) {
                self.pending.prev_album = true;
            }
            if i.key_pressed(egui::Key::PageDown) {
                self.pending.next_album = true;
            }

            // Albums by position
            if !ctrl {
                for (n, key) in ALBUM_KEYS.iter().enumerate() {
                    if i.key_pressed(*key) {
                        if let Some(album_id) = self.gallery.catalog().album_ids().nth(n) {
                            self.pending.select_album = Some(album_id.to_string());
                        }
                    }
                }
            }

            if i.key_pressed(egui::Key::Space) {
                toggle_slideshow = true;
            }
            if i.key_pressed(egui::Key::F11) || (i.key_pressed(egui::Key::F) && !ctrl) {
                toggle_fullscreen = true;
            }
            if i.key_pressed(egui::Key::S) && !ctrl {
                self.settings.show_sidebar = !self.settings.show_sidebar;
            }
        });

        if toggle_slideshow {
            self.toggle_slideshow();
        }
        if toggle_fullscreen {
            self.is_fullscreen = !self.is_fullscreen;
            ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(self.is_fullscreen));
        }
    }
}
