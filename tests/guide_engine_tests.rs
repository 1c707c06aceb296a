use chart_guides::ChartError;
use chart_guides::api::{CrosshairGuideConfig, GuideEngine, GuideFrameState};
use chart_guides::core::{AestheticRecord, Coord, RectCoordConv, Viewport};
use chart_guides::interaction::{SelectionState, Selector};
use chart_guides::render::{NullRenderer, SceneLayer};
use kurbo::{Point, Rect};

fn frame(selection: SelectionState) -> GuideFrameState {
    let coord = Coord::Rect(
        RectCoordConv::full(Rect::new(20.0, 10.0, 620.0, 410.0), false).expect("coord"),
    );
    GuideFrameState::new(coord)
        .with_element(vec![
            vec![
                AestheticRecord::new(0, Point::new(80.0, 300.0)),
                AestheticRecord::new(1, Point::new(200.0, 250.0)),
            ],
            vec![AestheticRecord::new(2, Point::new(320.0, 100.0))],
        ])
        .with_selection(selection)
}

fn engine() -> GuideEngine<NullRenderer> {
    GuideEngine::new(NullRenderer::default(), Viewport::new(640, 420)).expect("engine init")
}

#[test]
fn engine_rejects_invalid_viewport() {
    let err = GuideEngine::new(NullRenderer::default(), Viewport::new(0, 420))
        .err()
        .expect("zero width must fail");
    assert!(matches!(err, ChartError::InvalidViewport { width: 0, .. }));
}

#[test]
fn idle_guides_render_empty_frames() {
    let mut engine = engine();
    engine
        .add_crosshair(CrosshairGuideConfig::default())
        .expect("guide");

    let composed = engine
        .build_frame(&frame(SelectionState::idle()))
        .expect("frame");
    assert!(composed.is_empty());

    engine.render(&frame(SelectionState::idle())).expect("render");
    assert_eq!(engine.renderer().last_pass_count, 0);
    assert_eq!(engine.renderer().frames_rendered, 1);
}

#[test]
fn guides_compose_in_z_order_with_region_clip() {
    let mut engine = engine();
    let top = engine
        .add_crosshair(
            CrosshairGuideConfig::default()
                .with_selections(["tap"])
                .with_z_index(5),
        )
        .expect("top guide");
    engine
        .add_crosshair(
            CrosshairGuideConfig::default()
                .with_selections(["tap"])
                .with_styles([None, Some(Default::default())])
                .with_z_index(-1),
        )
        .expect("bottom guide");

    let selection =
        SelectionState::idle().with_selection("tap", Selector::at(Point::new(0.0, 0.0)), [1, 2]);
    let composed = engine.build_frame(&frame(selection)).expect("frame");

    assert_eq!(composed.passes.len(), 2);
    assert_eq!(composed.passes[0].z_index, -1);
    assert_eq!(composed.passes[0].figures.len(), 1);
    assert_eq!(composed.passes[1].z_index, 5);
    assert_eq!(composed.passes[1].figures.len(), 2);
    assert!(
        composed
            .passes
            .iter()
            .all(|pass| pass.layer == SceneLayer::Crosshair
                && pass.clip == Some(Rect::new(20.0, 10.0, 620.0, 410.0)))
    );
    assert_eq!(
        engine.guide(top).map(|guide| guide.scene().figure_count()),
        Some(2)
    );
}

#[test]
fn render_counts_figures_through_null_renderer() {
    let mut engine = engine();
    engine
        .add_crosshair(CrosshairGuideConfig::default())
        .expect("guide");
    let selection =
        SelectionState::idle().with_selection("hover", Selector::at(Point::new(0.0, 0.0)), [0]);
    engine.render(&frame(selection)).expect("render");

    let renderer = engine.into_renderer();
    assert_eq!(renderer.last_pass_count, 1);
    assert_eq!(renderer.last_figure_count, 2);
}

#[test]
fn reconfigure_reports_rebuilds_and_unknown_ids_fail() {
    let mut engine = engine();
    let id = engine
        .add_crosshair(CrosshairGuideConfig::default())
        .expect("guide");

    assert!(
        !engine
            .reconfigure(id, CrosshairGuideConfig::default())
            .expect("same config")
    );
    assert!(
        engine
            .reconfigure(id, CrosshairGuideConfig::default().with_element(0).with_z_index(1))
            .expect("new config")
    );

    let mut other = self::engine();
    let foreign = other
        .add_crosshair(CrosshairGuideConfig::default())
        .expect("guide");
    other
        .add_crosshair(CrosshairGuideConfig::default())
        .expect("guide");
    let second = other
        .add_crosshair(CrosshairGuideConfig::default())
        .expect("guide");
    assert_ne!(foreign, second);
    let err = engine
        .reconfigure(second, CrosshairGuideConfig::default())
        .expect_err("id from another engine");
    assert!(matches!(err, ChartError::UnknownGuide { guide: 2, available: 1 }));
}

#[test]
fn failed_frame_keeps_every_guide_on_previous_scene() {
    let mut engine = engine();
    let first = engine
        .add_crosshair(CrosshairGuideConfig::default())
        .expect("first guide");
    let second = engine
        .add_crosshair(CrosshairGuideConfig::default().with_element(1))
        .expect("second guide");

    let selection =
        SelectionState::idle().with_selection("hover", Selector::at(Point::new(0.0, 0.0)), [0]);
    let two_elements = frame(selection).with_element(vec![vec![AestheticRecord::new(
        0,
        Point::new(400.0, 200.0),
    )]]);
    engine.build_frame(&two_elements).expect("both elements wired");
    assert_eq!(engine.guide(first).map(|g| g.scene().figure_count()), Some(2));
    assert_eq!(engine.guide(second).map(|g| g.scene().figure_count()), Some(2));

    // Idle selection would clear the first guide, but the second guide's
    // element is missing so nothing is committed.
    let err = engine
        .build_frame(&frame(SelectionState::idle()))
        .expect_err("element 1 is missing");
    assert!(matches!(err, ChartError::ElementOutOfRange { element: 1, available: 1 }));
    assert_eq!(engine.guide(first).map(|g| g.scene().figure_count()), Some(2));
    assert_eq!(engine.guide(second).map(|g| g.scene().figure_count()), Some(2));
}

#[test]
fn missing_element_fails_the_frame() {
    let mut engine = engine();
    engine
        .add_crosshair(CrosshairGuideConfig::default().with_element(3))
        .expect("guide");
    let err = engine
        .build_frame(&frame(SelectionState::idle()))
        .expect_err("element 3 is not wired");
    assert!(matches!(err, ChartError::ElementOutOfRange { element: 3, .. }));
}
