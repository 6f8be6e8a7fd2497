use morph_engine::Engine;
use morph_engine::catalog::{ShapeCatalog, categories};
use morph_engine::morph::{DisplayState, MorphPhase, TOTAL_MORPH_STEPS};

#[test]
fn engine_initializes() {
    let engine = Engine::new();
    assert_eq!(engine.shape_count(), 35);
    assert!(!engine.is_transitioning());
}

#[test]
fn engine_ticks_idle_without_a_request() {
    let mut engine = Engine::new();
    assert_eq!(engine.tick(), "idle");
    assert_eq!(engine.tick(), "idle");
}

#[test]
fn engine_runs_a_full_transition() {
    let mut engine = Engine::new();
    engine.set_shape("icosahedron", 3).expect("set icosahedron");
    engine.request_morph("sphere", 32).expect("morph request");
    assert!(engine.is_transitioning());

    let mut last = String::new();
    for _ in 0..TOTAL_MORPH_STEPS {
        last = engine.tick();
    }
    assert_eq!(last, "completed");
    assert!(!engine.is_transitioning());
    assert_eq!(engine.tick(), "idle");
}

#[test]
fn engine_rejects_unknown_geometry_slot() {
    let engine = Engine::new();
    assert!(engine.geometry("flurb").is_err());
    // No transition running, so there is no target slot yet.
    assert!(engine.geometry("target").is_err());
}

#[test]
fn morph_swaps_current_shape_on_completion() {
    let catalog = ShapeCatalog::default();
    let mut display = DisplayState::new(&catalog);
    assert_eq!(display.current().shape_id, "cube");

    display
        .request_morph(&catalog, "torusKnot", 24)
        .expect("morph request");
    let target_revision = display.target().expect("target present").revision;

    let mut phases = Vec::new();
    for _ in 0..TOTAL_MORPH_STEPS {
        phases.push(display.tick());
    }

    assert!(phases[..31].iter().all(|&p| p == MorphPhase::Shrinking));
    assert!(
        phases[31..59].iter().all(|&p| p == MorphPhase::Growing),
        "growth phase expected after the halfway point"
    );
    assert_eq!(phases[59], MorphPhase::Completed);

    assert_eq!(display.current().shape_id, "torusKnot");
    assert_eq!(display.current().revision, target_revision);
    assert!((display.current().scale - 1.0).abs() < 1e-12);
    assert!(display.target().is_none());
}

#[test]
fn morph_target_resolution_respects_descriptor_range() {
    let catalog = ShapeCatalog::default();
    let mut display = DisplayState::new(&catalog);

    // kleinBottle advises at least 16; a lower request is raised to that.
    display
        .request_morph(&catalog, "kleinBottle", 1)
        .expect("morph request");
    let target = display.target().expect("target present");
    assert_eq!(target.resolution, 16);
    assert_eq!(target.mesh.vertex_count(), 17 * 17);
}

#[test]
fn retarget_midway_continues_from_live_scale() {
    let catalog = ShapeCatalog::default();
    let mut display = DisplayState::new(&catalog);

    display
        .request_morph(&catalog, "sphere", 32)
        .expect("first request");
    for _ in 0..30 {
        display.tick();
    }
    let live_scale = display.current().scale;
    assert!(live_scale < 1.0, "source should have shrunk by now");

    // A new request replaces the in-flight one without a visible jump.
    display
        .request_morph(&catalog, "torus", 32)
        .expect("second request");
    assert_eq!(display.target().expect("new target").shape_id, "torus");
    assert_eq!(display.elapsed_steps(), 0);

    for _ in 0..TOTAL_MORPH_STEPS {
        display.tick();
    }
    assert_eq!(display.current().shape_id, "torus");
    assert!((display.current().scale - live_scale).abs() < 1e-12);
}

#[test]
fn unknown_morph_target_falls_back_to_cube() {
    let catalog = ShapeCatalog::default();
    let mut display = DisplayState::new(&catalog);

    display
        .set_shape(&catalog, "sphere", 32)
        .expect("set sphere");
    display
        .request_morph(&catalog, "doesnotexist", 32)
        .expect("fallback request");
    assert_eq!(display.target().expect("target present").shape_id, "cube");
}

#[test]
fn resolution_change_keeps_the_current_pose() {
    let catalog = ShapeCatalog::default();
    let mut display = DisplayState::new(&catalog);

    // Spin up some pose state first.
    display
        .request_morph(&catalog, "sphere", 16)
        .expect("morph request");
    for _ in 0..TOTAL_MORPH_STEPS {
        display.tick();
    }
    let rotation_x = display.current().rotation_x;
    assert!(rotation_x > 0.0);

    display
        .set_shape(&catalog, "sphere", 64)
        .expect("resolution change");
    assert_eq!(display.current().resolution, 64);
    assert_eq!(display.current().rotation_x, rotation_x);
    assert!((display.current().scale - 1.0).abs() < 1e-12);
    assert!(!display.is_transitioning());
}

#[test]
fn search_results_generate_cleanly() {
    let catalog = ShapeCatalog::default();
    let knots = catalog.search("knot");
    assert!(!knots.is_empty());

    for descriptor in knots {
        let mesh = catalog
            .generate(descriptor.id, descriptor.resolution_range.default)
            .expect("search hit should generate");
        assert!(mesh.triangle_count() > 0, "{} is empty", descriptor.id);
    }
}

#[test]
fn catalog_selector_layout_is_stable() {
    let catalog = ShapeCatalog::default();
    assert_eq!(catalog.categories(), categories::CANONICAL_ORDER.to_vec());

    let all = catalog.all();
    assert_eq!(all.len(), 35);
    assert_eq!(all[0].id, "cube");
    assert_eq!(all[34].id, "mengerSponge");
}
