use crate::app::GalleryApp;

impl GalleryApp {
    pub fn tick_slideshow(&mut self, ctx: &egui::Context) {
        if !self.slideshow.is_active() {
            return;
        }

        let dt = ctx.input(|i| i.stable_dt);
        self.update_slideshow(dt);

        ctx.request_repaint();
    }
}
