use std::fs;
use std::path::Path;
use std::sync::Mutex;

use crate::app::{GalleryApp, LaunchOptions, PendingNavigation};
use crate::catalog::{Album, AlbumCatalog, Photo};
use crate::gallery::GalleryController;
use crate::settings::Settings;
use crate::surface::testing::RecordingSurface;
use crate::surface::DisplaySurface;

fn sample_catalog() -> AlbumCatalog {
    AlbumCatalog::new(vec![
        Album::new(
            "A",
            vec![
                Photo::new("p0.jpg", "first"),
                Photo::new("p1.jpg", "second"),
                Photo::new("p2.jpg", "third"),
            ],
        ),
        Album::new(
            "B",
            vec![Photo::new("q0.jpg", "one"), Photo::new("q1.jpg", "two")],
        ),
    ])
    .unwrap()
}

fn sample_gallery() -> GalleryController<RecordingSurface> {
    let mut gallery = GalleryController::new(sample_catalog(), RecordingSurface::default());
    gallery.initialize();
    gallery
}

fn position(gallery: &GalleryController<RecordingSurface>) -> (String, usize) {
    let state = gallery.state().unwrap();
    (state.album_id.clone(), state.index)
}

fn session_settings() -> Settings {
    Settings {
        restore_session: false,
        ..Default::default()
    }
}

fn write_album_tree(root: &Path) {
    for (album, files) in [("beach", ["b1.jpg", "b2.jpg"]), ("city", ["c1.png", "c2.png"])] {
        let dir = root.join(album);
        fs::create_dir(&dir).unwrap();
        for file in files {
            fs::write(dir.join(file), b"img").unwrap();
        }
    }
}

#[test]
fn initialize_starts_at_first_album() {
    let gallery = sample_gallery();
    assert_eq!(position(&gallery), ("A".to_string(), 0));
    assert_eq!(gallery.surface().last_counter(), Some("1/3"));
}

#[test]
fn advancing_three_times_wraps() {
    let mut gallery = sample_gallery();
    let mut seen = Vec::new();
    for _ in 0..3 {
        gallery.advance();
        seen.push(position(&gallery).1);
    }
    assert_eq!(seen, vec![1, 2, 0]);
    assert_eq!(gallery.surface().last_counter(), Some("1/3"));
}

#[test]
fn retreat_from_start_wraps_to_last() {
    let mut gallery = sample_gallery();
    gallery.retreat();
    assert_eq!(position(&gallery), ("A".to_string(), 2));
    assert_eq!(gallery.surface().last_counter(), Some("3/3"));
}

#[test]
fn selecting_album_resets_position() {
    let mut gallery = sample_gallery();
    gallery.retreat();
    gallery.select_album("B");
    assert_eq!(position(&gallery), ("B".to_string(), 0));
    assert_eq!(gallery.surface().last_counter(), Some("1/2"));
}

#[test]
fn selecting_unknown_album_is_ignored() {
    let mut gallery = sample_gallery();
    gallery.advance();
    let calls_before = gallery.surface().calls.len();

    gallery.select_album("Z");

    assert_eq!(position(&gallery), ("A".to_string(), 1));
    assert_eq!(gallery.surface().calls.len(), calls_before);
}

#[test]
fn display_surface_tracks_controller() {
    let catalog = sample_catalog();
    let surface = DisplaySurface::new(catalog.albums().iter().map(|a| (a.id(), a.title())));
    let mut gallery = GalleryController::new(catalog, surface);
    gallery.initialize();
    gallery.select_album("B");
    gallery.advance();

    let surface = gallery.surface();
    assert_eq!(surface.image.as_deref(), Some("q1.jpg"));
    assert_eq!(surface.description, "two");
    assert_eq!(surface.counter, "2/2");
    assert_eq!(surface.active_album().map(|s| s.album_id.as_str()), Some("B"));
}

#[test]
fn app_opens_folder_and_selects_requested_album() {
    let dir = tempfile::tempdir().unwrap();
    write_album_tree(dir.path());

    let app = GalleryApp::with_settings(
        session_settings(),
        LaunchOptions {
            catalog: Some(dir.path().to_path_buf()),
            album: Some("city".to_string()),
            ..Default::default()
        },
    );

    assert_eq!(app.current_album_id(), Some("city"));
    assert_eq!(app.gallery.surface().counter, "1/2");
    assert_eq!(app.catalog_path.as_deref(), Some(dir.path()));
    assert_eq!(app.settings.recent_catalogs.len(), 1);
}

#[test]
fn app_survives_a_bad_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let app = GalleryApp::with_settings(
        session_settings(),
        LaunchOptions {
            catalog: Some(dir.path().join("missing.json")),
            ..Default::default()
        },
    );

    assert!(app.gallery.state().is_none());
    assert!(app.catalog_path.is_none());
    assert!(app.status_message.is_some());
}

#[test]
fn pending_navigation_is_applied_once() {
    let mut app = GalleryApp::with_settings(session_settings(), LaunchOptions::default());
    app.set_catalog(sample_catalog());

    app.pending.next = true;
    app.pending.next_album = true;
    app.apply_pending_navigation();

    // Album change happens before photo moves
    assert_eq!(app.current_album_id(), Some("B"));
    assert_eq!(app.gallery.state().unwrap().index, 1);
    assert_eq!(app.pending, PendingNavigation::default());

    app.apply_pending_navigation();
    assert_eq!(app.gallery.state().unwrap().index, 1);
}

#[test]
fn slideshow_drives_the_gallery() {
    let mut app = GalleryApp::with_settings(
        session_settings(),
        LaunchOptions {
            slideshow: true,
            interval: Some(1.0),
            ..Default::default()
        },
    );
    app.set_catalog(sample_catalog());

    app.update_slideshow(0.5);
    assert_eq!(app.gallery.state().unwrap().index, 0);
    app.update_slideshow(0.5);
    assert_eq!(app.gallery.state().unwrap().index, 1);
    app.update_slideshow(1.0);
    app.update_slideshow(1.0);
    assert_eq!(app.gallery.state().unwrap().index, 0);
}

#[test]
fn slideshow_without_loop_stops_on_last_photo() {
    let settings = Settings {
        slideshow_loop: false,
        ..session_settings()
    };
    let mut app = GalleryApp::with_settings(
        settings,
        LaunchOptions {
            slideshow: true,
            interval: Some(1.0),
            ..Default::default()
        },
    );
    app.set_catalog(sample_catalog());

    for _ in 0..5 {
        app.update_slideshow(1.0);
    }

    assert_eq!(app.gallery.state().unwrap().index, 2);
    assert!(!app.slideshow.is_active());
}

#[test]
fn remember_session_stores_album_and_interval() {
    let mut app = GalleryApp::with_settings(
        session_settings(),
        LaunchOptions {
            interval: Some(7.5),
            ..Default::default()
        },
    );
    app.set_catalog(sample_catalog());
    app.gallery.select_album("B");

    app.remember_session();

    assert_eq!(app.settings.last_album.as_deref(), Some("B"));
    assert_eq!(app.settings.slideshow_interval, 7.5);
}

#[test]
fn error_messages_carry_suggestions() {
    use crate::errors::GalleryError;

    let error = GalleryError::EmptyAlbum {
        album_id: "holiday".to_string(),
    };
    assert!(!error.is_recoverable());
    assert_eq!(error.error_code(), "EMPTY_ALBUM");
    assert!(error.user_message().contains("Add at least one photo"));

    let error = GalleryError::UnknownAlbum {
        album_id: "Z".to_string(),
    };
    assert!(error.is_recoverable());
}

fn key_press(key: egui::Key) -> egui::Event {
    egui::Event::Key {
        key,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers: egui::Modifiers::NONE,
    }
}

fn typed_two_then_d() -> egui::RawInput {
    egui::RawInput {
        events: vec![
            key_press(egui::Key::Num2),
            egui::Event::Text("2".to_string()),
            key_press(egui::Key::D),
        ],
        ..Default::default()
    }
}

fn keyboard_app() -> GalleryApp {
    let mut app = GalleryApp::with_settings(session_settings(), LaunchOptions::default());
    app.set_catalog(sample_catalog());
    app
}

#[test]
fn shortcuts_navigate_without_text_focus() {
    let ctx = egui::Context::default();
    let mut app = keyboard_app();

    let _ = ctx.run(typed_two_then_d(), |ctx| {
        app.handle_keyboard(ctx);
    });
    app.apply_pending_navigation();

    assert_eq!(app.current_album_id(), Some("B"));
    assert_eq!(app.gallery.state().unwrap().index, 1);
}

#[test]
fn shortcuts_are_ignored_while_typing() {
    let ctx = egui::Context::default();
    let mut app = keyboard_app();
    let mut text = String::new();
    let field = egui::Id::new("photo_number");

    let _ = ctx.run(egui::RawInput::default(), |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add(egui::TextEdit::singleline(&mut text).id(field))
                .request_focus();
        });
    });

    let _ = ctx.run(typed_two_then_d(), |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add(egui::TextEdit::singleline(&mut text).id(field));
        });
        assert!(ctx.wants_keyboard_input());
        app.handle_keyboard(ctx);
    });
    app.apply_pending_navigation();

    assert_eq!(app.current_album_id(), Some("A"));
    assert_eq!(app.gallery.state().unwrap().index, 0);
}

static CAPTURED_LOGS: Mutex<Vec<(log::Level, String)>> = Mutex::new(Vec::new());

struct CapturingLogger;

impl log::Log for CapturingLogger {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        if let Ok(mut logs) = CAPTURED_LOGS.lock() {
            logs.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

#[test]
fn catalog_load_failure_is_logged_as_error() {
    static LOGGER: CapturingLogger = CapturingLogger;
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(log::LevelFilter::Trace);

    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("unreadable-catalog.json");
    let mut app = GalleryApp::with_settings(session_settings(), LaunchOptions::default());
    app.open_catalog_or_report(missing);

    let logs = CAPTURED_LOGS.lock().unwrap();
    let failure = logs
        .iter()
        .find(|(_, message)| message.contains("IO_ERROR"))
        .expect("load failure should be logged");
    assert_eq!(failure.0, log::Level::Error);
    assert!(app.load_error.is_some());
}
