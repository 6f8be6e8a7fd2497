#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod geom;
pub mod morph;

use std::fmt;

use catalog::{ShapeCatalog, ShapeDescriptor};
use morph::{DisplayState, MeshInstance, TOTAL_MORPH_STEPS};
use serde::Serialize;
use wasm_bindgen::JsError;
use wasm_bindgen::prelude::*;

cfg_if::cfg_if! {
    if #[cfg(all(feature = "console_error_panic_hook", target_arch = "wasm32"))] {
        #[wasm_bindgen(start)]
        pub fn initialize() {
            console_error_panic_hook::set_once();
            init_logger();
        }
    } else {
        #[wasm_bindgen(start)]
        pub fn initialize() {
            // no-op fallback when panic hook is disabled
            init_logger();
        }
    }
}

#[cfg(feature = "debug_logs")]
fn init_logger() {
    use log::LevelFilter;
    use wasm_bindgen_console_logger::DEFAULT_LOGGER;
    log::set_logger(&DEFAULT_LOGGER).expect("error initializing logger");
    log::set_max_level(LevelFilter::Debug);
}

#[cfg(not(feature = "debug_logs"))]
fn init_logger() {
    // no-op fallback when debug logs are disabled
}

#[macro_export]
macro_rules! debug_log {
    ($($t:tt)*) => {{
        #[cfg(feature = "debug_logs")]
        {
            #[cfg(target_arch = "wasm32")]
            {
                ::web_sys::console::log_1(&::wasm_bindgen::JsValue::from_str(&format!($($t)*)));
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                println!("{}", format!($($t)*));
            }
        }
    }};
}

// ─── Exportstructuren ────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ResolutionRangeExport {
    min: i32,
    max: i32,
    default: i32,
}

/// Descriptor-metadata zoals die naar de UI gaat; generator-internals blijven
/// binnen de engine.
#[derive(Debug, Serialize)]
struct ShapeSummary {
    id: &'static str,
    name: &'static str,
    category: &'static str,
    description: &'static str,
    tags: &'static [&'static str],
    difficulty: u8,
    resolution: ResolutionRangeExport,
    strategy: &'static str,
}

impl From<&ShapeDescriptor> for ShapeSummary {
    fn from(descriptor: &ShapeDescriptor) -> Self {
        Self {
            id: descriptor.id,
            name: descriptor.name,
            category: descriptor.category,
            description: descriptor.description,
            tags: descriptor.tags,
            difficulty: descriptor.difficulty,
            resolution: ResolutionRangeExport {
                min: descriptor.resolution_range.min,
                max: descriptor.resolution_range.max,
                default: descriptor.resolution_range.default,
            },
            strategy: descriptor.generator.strategy_name(),
        }
    }
}

#[derive(Debug, Serialize)]
struct InstanceExport<'a> {
    slot: &'static str,
    id: &'a str,
    resolution: i32,
    scale: f64,
    rotation_x: f64,
    rotation_y: f64,
    revision: u64,
}

impl<'a> InstanceExport<'a> {
    fn new(slot: &'static str, instance: &'a MeshInstance) -> Self {
        Self {
            slot,
            id: &instance.shape_id,
            resolution: instance.resolution,
            scale: instance.scale,
            rotation_x: instance.rotation_x,
            rotation_y: instance.rotation_y,
            revision: instance.revision,
        }
    }
}

/// Rendercontract per frame: welke instanties in beeld staan en hoe ver de
/// overgang is. Geometrie gaat apart via [`Engine::geometry`] zodat een
/// renderer alleen bij een nieuwe `revision` hoeft te uploaden.
#[derive(Debug, Serialize)]
struct FrameExport<'a> {
    transitioning: bool,
    step: u32,
    total: u32,
    instances: Vec<InstanceExport<'a>>,
}

#[derive(Debug, Serialize)]
struct GeometryExport<'a> {
    positions: &'a [f64],
    indices: &'a [u32],
    #[serde(skip_serializing_if = "Option::is_none")]
    normals: Option<&'a [f64]>,
    revision: u64,
}

const SLOT_CURRENT: &str = "current";
const SLOT_TARGET: &str = "target";

// ─── Engine ──────────────────────────────────────────────────────────────────

/// Public entry point for consumers.
#[wasm_bindgen]
pub struct Engine {
    catalog: ShapeCatalog,
    display: DisplayState,
}

#[wasm_bindgen]
impl Engine {
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new() -> Engine {
        let catalog = ShapeCatalog::default();
        let display = DisplayState::new(&catalog);
        debug_log!("Engine gestart met {} shapes", catalog.len());
        Engine { catalog, display }
    }

    /// Aantal geregistreerde shapes.
    #[wasm_bindgen]
    #[must_use]
    pub fn shape_count(&self) -> usize {
        self.catalog.len()
    }

    /// Categorielabels in weergavevolgorde.
    #[wasm_bindgen]
    pub fn categories(&self) -> Result<JsValue, JsValue> {
        to_js_value(&self.catalog.categories())
    }

    /// Alle shapes, gegroepeerd op categorie.
    #[wasm_bindgen]
    pub fn list_shapes(&self) -> Result<JsValue, JsValue> {
        to_js_value(&summaries(self.catalog.all()))
    }

    /// Shapes binnen één categorielabel, in registratievolgorde.
    #[wasm_bindgen]
    pub fn shapes_by_category(&self, category: &str) -> Result<JsValue, JsValue> {
        to_js_value(&summaries(self.catalog.by_category(category)))
    }

    /// Vrije zoekopdracht over naam, categorie, tags en beschrijving.
    #[wasm_bindgen]
    pub fn search(&self, query: &str) -> Result<JsValue, JsValue> {
        to_js_value(&summaries(self.catalog.search(query)))
    }

    /// Metadata van één shape. Een onbekende id is hier een fout; de
    /// foutboodschap noemt de dichtstbijzijnde geregistreerde id.
    #[wasm_bindgen]
    pub fn shape_info(&self, id: &str) -> Result<JsValue, JsValue> {
        match self.catalog.get(id) {
            Some(descriptor) => to_js_value(&ShapeSummary::from(descriptor)),
            None => match self.catalog.closest_id(id) {
                Some(suggestion) => Err(js_error(&format!(
                    "onbekende shape-id `{id}`, bedoelde je `{suggestion}`?"
                ))),
                None => Err(js_error(&format!("onbekende shape-id `{id}`"))),
            },
        }
    }

    /// Directe wissel zonder overgang, bijvoorbeeld bij een
    /// resolutiewijziging.
    #[wasm_bindgen]
    pub fn set_shape(&mut self, id: &str, resolution: i32) -> Result<(), JsValue> {
        self.display
            .set_shape(&self.catalog, id, resolution)
            .map_err(to_js_error)
    }

    /// Plant een morph-overgang naar `id`. Onbekende id's vallen terug op de
    /// kubus; een generatiefout laat de huidige toestand staan en komt als
    /// fout terug.
    #[wasm_bindgen]
    pub fn request_morph(&mut self, id: &str, resolution: i32) -> Result<(), JsValue> {
        debug_log!("Morph-verzoek: `{id}` op resolutie {resolution}");
        self.display
            .request_morph(&self.catalog, id, resolution)
            .map_err(to_js_error)
    }

    /// Zet één animatiestap en rapporteert de fase als tekst
    /// (`idle`, `shrinking`, `growing` of `completed`).
    #[wasm_bindgen]
    pub fn tick(&mut self) -> String {
        self.display.tick().as_str().to_owned()
    }

    #[wasm_bindgen]
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.display.is_transitioning()
    }

    /// Pose-informatie voor het huidige frame: één instantie in rust, twee
    /// tijdens een overgang.
    #[wasm_bindgen]
    pub fn frame(&self) -> Result<JsValue, JsValue> {
        let mut instances = vec![InstanceExport::new(SLOT_CURRENT, self.display.current())];
        if let Some(target) = self.display.target() {
            instances.push(InstanceExport::new(SLOT_TARGET, target));
        }

        to_js_value(&FrameExport {
            transitioning: self.display.is_transitioning(),
            step: self.display.elapsed_steps(),
            total: TOTAL_MORPH_STEPS,
            instances,
        })
    }

    /// Platte mesh-buffers voor een slot (`current` of `target`).
    #[wasm_bindgen]
    pub fn geometry(&self, slot: &str) -> Result<JsValue, JsValue> {
        let instance = match slot {
            SLOT_CURRENT => self.display.current(),
            SLOT_TARGET => match self.display.target() {
                Some(target) => target,
                None => return Err(js_error("geen overgang actief")),
            },
            other => return Err(js_error(&format!("onbekend geometrie-slot `{other}`"))),
        };

        to_js_value(&GeometryExport {
            positions: instance.mesh.positions_flat(),
            indices: &instance.mesh.indices,
            normals: instance.mesh.normals_flat(),
            revision: instance.revision,
        })
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

fn summaries(descriptors: Vec<&ShapeDescriptor>) -> Vec<ShapeSummary> {
    descriptors.into_iter().map(ShapeSummary::from).collect()
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsError::new(&err.to_string()).into())
}

fn to_js_error<E: fmt::Display>(error: E) -> JsValue {
    js_error(&error.to_string())
}

fn js_error(message: &str) -> JsValue {
    #[cfg(target_arch = "wasm32")]
    {
        JsError::new(message).into()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
        JsValue::NULL
    }
}

#[cfg(test)]
mod tests {
    use super::{Engine, ShapeSummary};

    #[test]
    fn engine_boots_with_cube_on_display() {
        let engine = Engine::new();
        assert_eq!(engine.shape_count(), 35);
        assert!(!engine.is_transitioning());
    }

    #[test]
    fn tick_reports_phases_as_text() {
        let mut engine = Engine::new();
        assert_eq!(engine.tick(), "idle");

        engine
            .request_morph("sphere", 32)
            .expect("morph naar sphere");
        assert_eq!(engine.tick(), "shrinking");
        for _ in 1..59 {
            engine.tick();
        }
        assert_eq!(engine.tick(), "completed");
        assert!(!engine.is_transitioning());
    }

    #[test]
    fn shape_summary_carries_descriptor_metadata() {
        let engine = Engine::new();
        let descriptor = engine.catalog.get("sierpinski").expect("sierpinski");
        let summary = ShapeSummary::from(descriptor);
        assert_eq!(summary.name, "Sierpinski Pyramid");
        assert_eq!(summary.strategy, "fractal");
        assert_eq!(summary.resolution.default, 16);
    }
}
