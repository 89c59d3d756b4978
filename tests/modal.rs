use cgmath::{Point2, Vector2};
use crossbeam::channel;
use scrim::events::{Pointer, PointerPhase};
use scrim::modal::{self, ModalOptions, BACKDROP, CONTENT, CONTENT_BACKGROUND, MODAL};
use scrim::style::keys;
use scrim::viewport::SharedViewport;
use scrim::{Component, Event, Graph, GroupBuilder, Host, Input, Size, SpecValue, Styles};

/// A confirmation dialog with a single button.
#[derive(Debug)]
struct Confirm;

impl Component for Confirm {
    fn name(&self) -> &str {
        "confirm"
    }

    fn extend(&self, group: &mut GroupBuilder<'_>) {
        let styles = Styles::new()
            .with_id("ok")
            .with(keys::TRANSLATE, Vector2::new(10., 10.));
        group.rect(Vector2::new(50., 20.), styles);
    }
}

fn pointer(phase: PointerPhase, x: f64, y: f64) -> Input {
    Input::Pointer(Pointer::new(phase, Point2::new(x, y)))
}

#[test]
fn modal_lifecycle() {
    let viewport = SharedViewport::new(Vector2::new(700., 600.));
    let options = ModalOptions::new(viewport.handle())
        .with_styles(Styles::new().with(keys::SIZE, Size::new(200., 150.)));

    let graph = modal::open(Graph::new(), SpecValue::component(Confirm), options);
    assert!(graph.contains(MODAL));

    let (upward, events) = channel::unbounded();
    let mut host = Host::start(&graph, upward)
        .expect("modal should start")
        .expect("modal should be open");

    // resizing after construction doesn't change the open modal
    viewport.resize(Vector2::new(1000., 1000.));

    let pushed = host.modal().graph();
    for id in &[BACKDROP, CONTENT, CONTENT_BACKGROUND, "ok"] {
        assert!(pushed.contains(id), "missing {}", id);
    }
    assert_eq!(
        pushed.get(CONTENT).unwrap().styles.translate(),
        Some(Vector2::new(250., 225.))
    );

    // pressing and releasing inside the content does nothing
    host.send_input(pointer(PointerPhase::Press, 300., 300.));
    host.send_input(pointer(PointerPhase::Release, 300., 300.));
    host.send_event(Event::Click("ok".into()), "ok");
    // pressing the backdrop does nothing, releasing it dismisses
    host.send_input(pointer(PointerPhase::Press, 5., 5.));
    host.send_input(pointer(PointerPhase::Release, 5., 5.));
    assert_eq!(host.poll(), 5);

    let received: Vec<_> = events.try_iter().collect();
    assert_eq!(
        received,
        vec![Event::modal(Event::Click("ok".into())), Event::dismiss()]
    );

    let graph = modal::dismiss(graph);
    assert!(!graph.contains(MODAL));
    assert_eq!(modal::dismiss(graph.clone()), graph);
}

#[test]
fn hit_testing_finds_the_content() {
    let viewport = SharedViewport::new(Vector2::new(700., 600.));
    let graph = modal::open(
        Graph::new(),
        SpecValue::component(Confirm),
        ModalOptions::new(viewport.handle()),
    );
    let (upward, _) = channel::unbounded();
    let host = Host::start(&graph, upward).unwrap().unwrap();
    let pushed = host.modal().graph();

    // default size: content at (70, 120), button 10px further in
    assert_eq!(pushed.hit_test(Point2::new(85., 135.)), Some("ok"));
    assert_eq!(pushed.hit_test(Point2::new(300., 300.)), Some(CONTENT_BACKGROUND));
    assert_eq!(pushed.hit_test(Point2::new(10., 10.)), Some(BACKDROP));
    assert_eq!(pushed.hit_test(Point2::new(-1., 10.)), None);
}
