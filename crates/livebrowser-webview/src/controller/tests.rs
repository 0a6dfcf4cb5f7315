use super::*;
use crate::surface::InMemorySurface;
use livebrowser_common::ConfigError;
use livebrowser_config::MemoryConfigStore;
use std::path::Path;

type Controller = EmbeddedViewController<MemoryConfigStore, InMemorySurface>;

fn resolved() -> Controller {
    let mut controller = Controller::new(MemoryConfigStore::new());
    controller.resolve_panel(InMemorySurface::new()).unwrap();
    controller
}

fn document(controller: &Controller) -> &str {
    controller.surface().unwrap().document().unwrap()
}

fn write_file(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

/// Store whose writes always fail.
struct ReadOnlyStore;

impl ConfigStore for ReadOnlyStore {
    fn get(&self, _key: &str, default: &str) -> String {
        default.to_string()
    }

    fn set(&mut self, key: &str, _value: &str) -> Result<(), ConfigError> {
        Err(ConfigError::UnknownKey(key.to_string()))
    }
}

/// Surface that refuses every document.
struct BrokenSurface;

impl PanelSurface for BrokenSurface {
    fn render(&mut self, _html: &str) -> Result<(), ViewError> {
        Err(ViewError::Surface("webview destroyed".into()))
    }
}

/// Surface whose failures can be switched on after it is attached.
struct FlakySurface {
    fail: bool,
}

impl PanelSurface for FlakySurface {
    fn render(&mut self, _html: &str) -> Result<(), ViewError> {
        if self.fail {
            Err(ViewError::Surface("render refused".into()))
        } else {
            Ok(())
        }
    }
}

impl EmbeddedViewController<MemoryConfigStore, FlakySurface> {
    fn surface_fail(&mut self, fail: bool) {
        if let Some(surface) = self.surface.as_mut() {
            surface.fail = fail;
        }
    }
}

// -- Initialization --

#[test]
fn initialize_renders_shell_with_address_value() {
    let mut controller = Controller::new(MemoryConfigStore::new());
    controller.attach_surface(InMemorySurface::new());
    controller.initialize("https://a.example").unwrap();

    assert!(document(&controller).contains(r#"value="https://a.example""#));
    assert_eq!(controller.current_url(), "https://a.example");
    assert_eq!(controller.mode(), ViewMode::ShowingUrl);
}

#[test]
fn resolve_panel_uses_default_url_when_unconfigured() {
    let controller = resolved();
    assert_eq!(controller.current_url(), DEFAULT_URL);
    assert!(document(&controller).contains(r#"src="https://example.com""#));
}

#[test]
fn resolve_panel_uses_configured_url() {
    let store = MemoryConfigStore::new().with(URL_KEY, "https://docs.rs");
    let mut controller = Controller::new(store);
    controller.resolve_panel(InMemorySurface::new()).unwrap();

    assert_eq!(controller.current_url(), "https://docs.rs");
    assert!(document(&controller).contains(r#"value="https://docs.rs""#));
}

#[test]
fn initialize_does_not_persist() {
    let mut controller = resolved();
    controller.initialize("https://a.example").unwrap();
    assert_eq!(controller.config().value(URL_KEY), None);
}

// -- Operations before the surface exists --

#[test]
fn operations_before_resolution_are_no_ops() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(dir.path(), "x.html", "<p>hi</p>");
    let mut controller = Controller::new(MemoryConfigStore::new());

    assert!(!controller.is_resolved());
    controller.initialize("https://a.example").unwrap();
    controller.navigate_to_url("b.example").unwrap();
    controller.load_local_file(&file).unwrap();
    assert!(!controller.notify_file_saved(&file).unwrap());
    controller.reload().unwrap();

    assert_eq!(controller.config().value(URL_KEY), None);
    assert_eq!(controller.watched_file_path(), None);
    assert_eq!(controller.current_url(), DEFAULT_URL);
}

// -- Navigation --

#[test]
fn navigate_persists_url_verbatim() {
    let mut controller = resolved();
    controller.navigate_to_url("b.example").unwrap();

    assert_eq!(controller.current_url(), "b.example");
    assert_eq!(controller.config().value(URL_KEY), Some("b.example"));
    assert!(document(&controller).contains(r#"value="b.example""#));
    assert!(document(&controller).contains(r#"src="b.example""#));
}

#[test]
fn navigate_clears_watched_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(dir.path(), "x.html", "<p>hi</p>");
    let mut controller = resolved();

    controller.load_local_file(&file).unwrap();
    assert_eq!(controller.mode(), ViewMode::ShowingFile);

    controller.navigate_to_url("https://c.example").unwrap();
    assert_eq!(controller.watched_file_path(), None);
    assert_eq!(controller.mode(), ViewMode::ShowingUrl);
    assert!(document(&controller).contains("https://c.example"));
}

#[test]
fn navigate_survives_config_write_failure() {
    let mut controller: EmbeddedViewController<ReadOnlyStore, InMemorySurface> =
        EmbeddedViewController::new(ReadOnlyStore);
    controller.resolve_panel(InMemorySurface::new()).unwrap();

    controller.navigate_to_url("https://a.example").unwrap();
    assert_eq!(controller.current_url(), "https://a.example");
    assert!(controller
        .surface()
        .unwrap()
        .document()
        .unwrap()
        .contains("https://a.example"));
}

#[test]
fn navigate_reports_surface_failure() {
    let mut controller: EmbeddedViewController<MemoryConfigStore, BrokenSurface> =
        EmbeddedViewController::new(MemoryConfigStore::new());
    controller.attach_surface(BrokenSurface);

    let err = controller.navigate_to_url("https://a.example").unwrap_err();
    assert!(matches!(err, ViewError::Surface(_)));
}

#[test]
fn navigate_leaves_state_untouched_when_surface_rejects_shell() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(dir.path(), "x.html", "<p>hi</p>");

    let mut broken: EmbeddedViewController<MemoryConfigStore, BrokenSurface> =
        EmbeddedViewController::new(MemoryConfigStore::new());
    broken.attach_surface(BrokenSurface);
    assert!(broken.navigate_to_url("https://b.example").is_err());
    assert_eq!(broken.current_url(), DEFAULT_URL);
    assert_eq!(broken.mode(), ViewMode::ShowingUrl);
    assert_eq!(broken.config().value(URL_KEY), None);

    // Same contract while a file is watched
    let mut watched: EmbeddedViewController<MemoryConfigStore, FlakySurface> =
        EmbeddedViewController::new(MemoryConfigStore::new());
    watched.attach_surface(FlakySurface { fail: false });
    watched.load_local_file(&file).unwrap();
    watched.surface_fail(true);
    assert!(watched.navigate_to_url("https://b.example").is_err());
    assert_eq!(watched.watched_file_path(), Some(file.as_str()));
    assert_eq!(watched.mode(), ViewMode::ShowingFile);
    assert_eq!(watched.current_url(), DEFAULT_URL);
    assert_eq!(watched.config().value(URL_KEY), None);
}

// -- Local files --

#[test]
fn load_local_file_shows_raw_content() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(dir.path(), "x.html", "<p>hi</p>");
    let mut controller = resolved();

    controller.load_local_file(&file).unwrap();
    assert_eq!(document(&controller), "<p>hi</p>");
    assert_eq!(controller.watched_file_path(), Some(file.as_str()));
}

#[test]
fn load_local_file_keeps_stored_url() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(dir.path(), "x.html", "<p>hi</p>");
    let mut controller = resolved();
    controller.navigate_to_url("https://a.example").unwrap();

    controller.load_local_file(&file).unwrap();
    assert_eq!(controller.current_url(), "https://a.example");
    assert_eq!(controller.config().value(URL_KEY), Some("https://a.example"));
}

#[test]
fn load_missing_file_reports_error_and_keeps_state() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(dir.path(), "x.html", "<p>hi</p>");
    let missing = dir.path().join("missing.html").to_string_lossy().into_owned();
    let mut controller = resolved();
    controller.load_local_file(&file).unwrap();

    let err = controller.load_local_file(&missing).unwrap_err();
    match err {
        ViewError::FileRead { path, source } => {
            assert_eq!(path, missing);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected FileRead, got {other:?}"),
    }
    assert_eq!(controller.watched_file_path(), Some(file.as_str()));
    assert_eq!(document(&controller), "<p>hi</p>");
}

#[test]
fn load_non_utf8_file_reports_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bin.html");
    std::fs::write(&path, [0xff, 0xfe, 0xfd]).unwrap();
    let mut controller = resolved();
    let before = document(&controller).to_string();

    let err = controller
        .load_local_file(&path.to_string_lossy())
        .unwrap_err();
    assert!(matches!(err, ViewError::FileRead { .. }));
    assert_eq!(controller.watched_file_path(), None);
    assert_eq!(document(&controller), before);
}

#[test]
fn panel_stays_usable_after_failed_load() {
    let mut controller = resolved();
    assert!(controller.load_local_file("/nonexistent/livebrowser.html").is_err());

    controller.navigate_to_url("https://a.example").unwrap();
    assert!(document(&controller).contains("https://a.example"));
}

// -- Save events --

#[test]
fn save_of_watched_file_rereads_it() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(dir.path(), "x.html", "<p>hi</p>");
    let mut controller = resolved();
    controller.load_local_file(&file).unwrap();

    std::fs::write(&file, "<p>updated</p>").unwrap();
    assert!(controller.notify_file_saved(&file).unwrap());
    assert_eq!(document(&controller), "<p>updated</p>");
    assert_eq!(controller.watched_file_path(), Some(file.as_str()));
}

#[test]
fn save_of_other_file_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(dir.path(), "x.html", "<p>hi</p>");
    let other = write_file(dir.path(), "other.html", "<p>other</p>");
    let mut controller = resolved();
    controller.load_local_file(&file).unwrap();
    let renders = controller.surface().unwrap().render_count();

    assert!(!controller.notify_file_saved(&other).unwrap());
    assert_eq!(document(&controller), "<p>hi</p>");
    assert_eq!(controller.surface().unwrap().render_count(), renders);
}

#[test]
fn save_without_watched_file_is_ignored() {
    let mut controller = resolved();
    let before = document(&controller).to_string();

    assert!(!controller.notify_file_saved("/tmp/x.html").unwrap());
    assert_eq!(document(&controller), before);
}

#[test]
fn save_path_comparison_is_exact() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(dir.path(), "x.html", "<p>hi</p>");
    let mut controller = resolved();
    controller.load_local_file(&file).unwrap();

    let dotted = format!("{}/./x.html", dir.path().to_string_lossy());
    assert!(!controller.notify_file_saved(&dotted).unwrap());
}

#[test]
fn save_of_deleted_watched_file_reports_error() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(dir.path(), "x.html", "<p>hi</p>");
    let mut controller = resolved();
    controller.load_local_file(&file).unwrap();

    std::fs::remove_file(&file).unwrap();
    assert!(controller.notify_file_saved(&file).is_err());
    assert_eq!(document(&controller), "<p>hi</p>");
    assert_eq!(controller.watched_file_path(), Some(file.as_str()));
}

// -- Reload --

#[test]
fn reload_rerenders_shell_in_url_mode() {
    let mut controller = resolved();
    controller.navigate_to_url("https://a.example").unwrap();
    let renders = controller.surface().unwrap().render_count();

    controller.reload().unwrap();
    assert_eq!(controller.surface().unwrap().render_count(), renders + 1);
    assert!(document(&controller).contains("https://a.example"));
}

#[test]
fn reload_rereads_watched_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(dir.path(), "x.html", "<p>hi</p>");
    let mut controller = resolved();
    controller.load_local_file(&file).unwrap();

    std::fs::write(&file, "<p>edited</p>").unwrap();
    controller.reload().unwrap();
    assert_eq!(document(&controller), "<p>edited</p>");
}

// -- Surface management --

#[test]
fn detach_surface_returns_to_unresolved() {
    let mut controller = resolved();
    assert!(controller.detach_surface().is_some());
    assert!(!controller.is_resolved());
    controller.navigate_to_url("https://a.example").unwrap();
    assert_eq!(controller.config().value(URL_KEY), None);
}

#[test]
fn view_state_mode_follows_watched_path() {
    let mut state = ViewState::default();
    assert_eq!(state.mode(), ViewMode::ShowingUrl);
    state.watched_file_path = Some("/tmp/x.html".into());
    assert_eq!(state.mode(), ViewMode::ShowingFile);
}
