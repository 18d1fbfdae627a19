//! tests/tree_view.rs
//! ============================================================================
//! End-to-end tests against a real on-disk directory: filesystem listing
//! through flattening, layout, navigation and events, wired the way a host
//! widget would wire them.

use std::fs;
use std::time::{Duration, Instant};

use std::cell::RefCell;
use std::rc::Rc;

use tempfile::TempDir;

use ftv_core::{
    Dispatch, FsDataSource, InputDispatcher, RawKey, TreeController, TreeEvent, TreeTheme,
};

const ROW_H: f64 = 16.0;

/// ```text
/// <tmp>
/// ├── lib/
/// │   ├── core/
/// │   └── ui/
/// └── README.md
/// ```
fn fixture() -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("lib/core")).unwrap();
    fs::create_dir_all(tmp.path().join("lib/ui")).unwrap();
    fs::write(tmp.path().join("README.md"), b"# readme\n").unwrap();
    tmp
}

fn controller(tmp: &TempDir) -> TreeController<FsDataSource> {
    TreeController::new(FsDataSource::new(tmp.path()), ROW_H)
}

fn row_names(ctl: &mut TreeController<FsDataSource>) -> Vec<String> {
    ctl.ensure_layout();
    ctl.layout()
        .rows()
        .iter()
        .map(|r| r.entry.name.to_string())
        .collect()
}

#[test]
fn expanding_lib_splices_children_after_it() {
    let tmp = fixture();
    let mut ctl = controller(&tmp);

    assert_eq!(row_names(&mut ctl), vec!["..", "lib", "README.md"]);

    let lib = ctl.entry_at(5.0, ROW_H + 2.0).unwrap();
    assert_eq!(lib.name, "lib");
    ctl.expand_item(&lib);

    // core immediately follows lib, both children at depth 1
    assert_eq!(
        row_names(&mut ctl),
        vec!["..", "lib", "core", "ui", "README.md"]
    );
    ctl.ensure_layout();
    let depths: Vec<usize> = ctl.layout().rows().iter().map(|r| r.depth).collect();
    assert_eq!(depths, vec![0, 0, 1, 1, 0]);
}

#[test]
fn change_directory_resets_state_and_relists() {
    let tmp = fixture();
    let mut ctl = controller(&tmp);

    let events: Rc<RefCell<Vec<TreeEvent>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    ctl.events_mut()
        .subscribe(move |ev| sink.borrow_mut().push(ev.clone()));

    let lib = ctl.entry_at(5.0, ROW_H + 2.0).unwrap();
    ctl.expand_item(&lib);
    ctl.select_next();

    let lib_path = tmp.path().join("lib");
    ctl.change_directory(&lib_path);

    assert_eq!(ctl.current_path(), lib_path.as_path());
    assert!(ctl.selected_entry().is_none());
    assert_eq!(ctl.state().expanded_count(), 0);
    assert_eq!(ctl.state().scroll_offset(), 0.0);
    assert_eq!(row_names(&mut ctl), vec!["..", "core", "ui"]);

    assert!(
        events
            .borrow()
            .iter()
            .any(|ev| matches!(ev, TreeEvent::DirectoryChanged(p) if p == &lib_path))
    );
}

#[test]
fn double_click_on_parent_link_activates_it() {
    let tmp = fixture();
    let mut ctl = controller(&tmp);
    let mut dispatcher = InputDispatcher::default();

    let opened: Rc<RefCell<Option<std::path::PathBuf>>> = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&opened);
    ctl.events_mut().subscribe(move |ev| {
        if let TreeEvent::ItemActivated(entry) = ev {
            *sink.borrow_mut() = Some(entry.path.clone());
        }
    });

    let t0 = Instant::now();
    dispatcher.handle_click(&mut ctl, 5.0, 2.0, t0);
    let second = dispatcher.handle_click(&mut ctl, 5.0, 2.0, t0 + Duration::from_millis(120));

    assert_eq!(second, Dispatch::Handled);
    assert_eq!(opened.borrow().as_deref(), tmp.path().parent());
}

#[test]
fn keyboard_walk_through_the_tree() {
    let tmp = fixture();
    let mut ctl = controller(&tmp);
    let mut dispatcher = InputDispatcher::default();

    // Down selects the first row, Down again moves to lib
    dispatcher.handle_key_press(&mut ctl, RawKey::Name("Down"));
    dispatcher.handle_key_press(&mut ctl, RawKey::Name("Down"));
    assert_eq!(ctl.selected_entry().unwrap().name, "lib");

    // Right expands lib, Right again steps into core
    dispatcher.handle_key_press(&mut ctl, RawKey::Name("Right"));
    assert_eq!(row_names(&mut ctl).len(), 5);
    dispatcher.handle_key_press(&mut ctl, RawKey::Name("Right"));
    assert_eq!(ctl.selected_entry().unwrap().name, "core");

    // Left walks back up to lib, Left again collapses it
    dispatcher.handle_key_press(&mut ctl, RawKey::Name("Left"));
    assert_eq!(ctl.selected_entry().unwrap().name, "lib");
    dispatcher.handle_key_press(&mut ctl, RawKey::Name("Left"));
    assert_eq!(row_names(&mut ctl), vec!["..", "lib", "README.md"]);

    // Numeric keyvals work the same as names
    assert_eq!(
        dispatcher.handle_key_press(&mut ctl, RawKey::Code(0xFF57)), // End
        Dispatch::Handled
    );
    assert_eq!(ctl.selected_entry().unwrap().name, "README.md");
}

#[test]
fn renderer_draws_through_an_adapter_surface() {
    use ftv_core::view::icons::IconKind;
    use ftv_core::{DrawSurface, Rgba, TreeRenderer};

    #[derive(Default)]
    struct CountingSurface {
        rects: usize,
        texts: Vec<String>,
        icons: Vec<IconKind>,
    }

    impl DrawSurface for CountingSurface {
        fn width(&self) -> f64 {
            240.0
        }
        fn height(&self) -> f64 {
            48.0
        }
        fn clear_background(&mut self, _color: Rgba) {}
        fn draw_rectangle(&mut self, _x: f64, _y: f64, _w: f64, _h: f64, _c: Rgba) {
            self.rects += 1;
        }
        fn draw_text(&mut self, _x: f64, _y: f64, text: &str, _s: f64, _c: Rgba) {
            self.texts.push(text.to_string());
        }
        fn draw_icon(&mut self, _x: f64, _y: f64, icon: IconKind) {
            self.icons.push(icon);
        }
        fn draw_line(&mut self, _x1: f64, _y1: f64, _x2: f64, _y2: f64, _c: Rgba, _w: f64) {}
    }

    let tmp = fixture();
    let mut ctl = controller(&tmp);
    ctl.ensure_layout();

    let renderer = TreeRenderer::new(TreeTheme::default());
    let mut surface = CountingSurface::default();
    renderer.render_tree(&mut surface, ctl.layout(), ctl.state());

    // 48px viewport at 16px rows: all three rows drawn
    assert_eq!(surface.texts, vec!["..", "lib", "README.md"]);
    assert_eq!(
        surface.icons,
        vec![IconKind::ParentArrow, IconKind::Folder, IconKind::File]
    );
    assert_eq!(surface.rects, 3);
}
