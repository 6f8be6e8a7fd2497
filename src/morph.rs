//! Overgangsplanner voor het morphen tussen twee shapes.
//!
//! Een overgang duurt een vast aantal stappen met cosinus-easing: de eerste
//! helft krimpt de zichtbare shape naar nul, de tweede helft groeit het doel
//! vanuit bijna-nul naar de vastgelegde bronschaal. Beide instanties draaien
//! tijdens de overgang om hun x- en y-as. Er is hoogstens één overgang
//! tegelijk; een nieuw verzoek vervangt de lopende zonder schaalsprong.

use log::{debug, warn};

use crate::catalog::{CatalogError, FALLBACK_SHAPE_ID, ShapeCatalog, ShapeDescriptor};
use crate::geom::ShapeMesh;

/// Aantal tick-stappen van een volledige overgang.
pub const TOTAL_MORPH_STEPS: u32 = 60;
/// Rotatie in radialen die elke tick bij beide assen opgeteld wordt.
pub const MORPH_SPIN_RATE: f64 = 0.1;
/// Schaal waarmee het doel in beeld staat zolang de groeifase nog niet
/// begonnen is.
pub const TARGET_SEED_SCALE: f64 = 0.001;
/// Resolutieniveau van de shape die bij het opstarten getoond wordt.
pub const DEFAULT_RESOLUTION: i32 = 32;
/// Uniforme schaal van een rustende shape.
pub const DEFAULT_SCALE: f64 = 1.0;

/// Cosinus-easing over `[0, 1]`: traag begin, traag einde.
fn ease(progress: f64) -> f64 {
    0.5 - (progress * std::f64::consts::PI).cos() / 2.0
}

/// Fase die een [`DisplayState::tick`] rapporteert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MorphPhase {
    /// Geen overgang actief; de tick deed niets.
    Idle,
    /// Eerste helft: de bron krimpt.
    Shrinking,
    /// Tweede helft: het doel groeit mee.
    Growing,
    /// Deze tick rondde de overgang af; het doel is nu de actieve shape.
    Completed,
}

impl MorphPhase {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Shrinking => "shrinking",
            Self::Growing => "growing",
            Self::Completed => "completed",
        }
    }
}

/// Een shape zoals hij in beeld staat: mesh plus pose.
///
/// De `revision` telt per nieuw gegenereerde mesh op, zodat een renderer
/// alleen bij een verandering opnieuw hoeft te uploaden.
#[derive(Debug, Clone)]
pub struct MeshInstance {
    pub shape_id: String,
    pub resolution: i32,
    pub mesh: ShapeMesh,
    pub revision: u64,
    pub scale: f64,
    pub rotation_x: f64,
    pub rotation_y: f64,
}

/// Lopende overgang naar een nieuw doel.
#[derive(Debug, Clone)]
struct TransitionState {
    target: MeshInstance,
    elapsed: u32,
    total: u32,
    /// Schaal van de bron op het moment van het verzoek; het doel eindigt
    /// exact op deze waarde.
    source_scale: f64,
}

/// Actuele weergavetoestand: de zichtbare shape plus een eventuele overgang.
#[derive(Debug, Clone)]
pub struct DisplayState {
    current: MeshInstance,
    transition: Option<TransitionState>,
    revision_counter: u64,
}

impl DisplayState {
    /// Begintoestand: de standaardkubus op het standaardresolutieniveau.
    #[must_use]
    pub fn new(catalog: &ShapeCatalog) -> Self {
        let mesh = catalog.generate_or_fallback(FALLBACK_SHAPE_ID, DEFAULT_RESOLUTION);
        Self {
            current: MeshInstance {
                shape_id: FALLBACK_SHAPE_ID.to_owned(),
                resolution: DEFAULT_RESOLUTION,
                mesh,
                revision: 1,
                scale: DEFAULT_SCALE,
                rotation_x: 0.0,
                rotation_y: 0.0,
            },
            transition: None,
            revision_counter: 1,
        }
    }

    /// De shape die nu in beeld staat. Tijdens een overgang is dit de
    /// krimpende bron.
    #[must_use]
    pub fn current(&self) -> &MeshInstance {
        &self.current
    }

    /// Het groeiende doel van de lopende overgang, indien aanwezig.
    #[must_use]
    pub fn target(&self) -> Option<&MeshInstance> {
        self.transition.as_ref().map(|transition| &transition.target)
    }

    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    /// Stappen die de lopende overgang al gezet heeft.
    #[must_use]
    pub fn elapsed_steps(&self) -> u32 {
        self.transition
            .as_ref()
            .map_or(0, |transition| transition.elapsed)
    }

    fn next_revision(&mut self) -> u64 {
        self.revision_counter += 1;
        self.revision_counter
    }

    fn build_instance(
        &mut self,
        catalog: &ShapeCatalog,
        id: &str,
        resolution: i32,
    ) -> Result<MeshInstance, CatalogError> {
        let (shape_id, descriptor) = resolve_or_fallback(catalog, id)?;
        let resolution = descriptor.resolution_range.clamp(resolution);
        let mesh = catalog.generate(shape_id, resolution)?;
        Ok(MeshInstance {
            shape_id: shape_id.to_owned(),
            resolution,
            mesh,
            revision: self.next_revision(),
            scale: TARGET_SEED_SCALE,
            rotation_x: 0.0,
            rotation_y: 0.0,
        })
    }

    /// Directe wissel zonder overgang; de pose van de zichtbare shape blijft
    /// staan. Wordt gebruikt bij het opstarten en bij resolutiewijzigingen.
    pub fn set_shape(
        &mut self,
        catalog: &ShapeCatalog,
        id: &str,
        resolution: i32,
    ) -> Result<(), CatalogError> {
        let mut instance = self.build_instance(catalog, id, resolution)?;
        instance.scale = self.current.scale;
        instance.rotation_x = self.current.rotation_x;
        instance.rotation_y = self.current.rotation_y;

        self.transition = None;
        self.current = instance;
        Ok(())
    }

    /// Plant een overgang naar `id`. Een onbekende id wordt vervangen door de
    /// kubus; een generatiefout laat de huidige toestand ongemoeid en komt
    /// als `Err` terug. Een lopende overgang wordt vervangen: de huidige
    /// (deels gekrompen) shape wordt de nieuwe bron en zijn momentane schaal
    /// het nieuwe eindpunt, zodat er geen sprong in beeld komt.
    pub fn request_morph(
        &mut self,
        catalog: &ShapeCatalog,
        id: &str,
        resolution: i32,
    ) -> Result<(), CatalogError> {
        let target = self.build_instance(catalog, id, resolution)?;

        if let Some(abandoned) = self.transition.take() {
            debug!(
                "Overgang naar `{}` vervangen door `{}`",
                abandoned.target.shape_id, target.shape_id
            );
        }

        self.transition = Some(TransitionState {
            target,
            elapsed: 0,
            total: TOTAL_MORPH_STEPS,
            source_scale: self.current.scale,
        });
        Ok(())
    }

    /// Zet één animatiestap. De aanroeper bepaalt de cadans (één tick per
    /// beeldframe). Zonder lopende overgang is dit een no-op.
    pub fn tick(&mut self) -> MorphPhase {
        let Some(transition) = self.transition.as_mut() else {
            return MorphPhase::Idle;
        };

        let progress = f64::from(transition.elapsed) / f64::from(transition.total);
        self.current.scale = transition.source_scale * (1.0 - ease(progress));
        self.current.rotation_x += MORPH_SPIN_RATE;
        self.current.rotation_y += MORPH_SPIN_RATE;

        let growing = progress > 0.5;
        if growing {
            let grow = (progress - 0.5) * 2.0;
            transition.target.scale = transition.source_scale * ease(grow);
            transition.target.rotation_x += MORPH_SPIN_RATE;
            transition.target.rotation_y += MORPH_SPIN_RATE;
        }

        transition.elapsed += 1;
        if transition.elapsed == transition.total {
            if let Some(TransitionState {
                mut target,
                source_scale,
                ..
            }) = self.transition.take()
            {
                target.scale = source_scale;
                debug!("Overgang afgerond: `{}` is nu actief", target.shape_id);
                self.current = target;
            }
            return MorphPhase::Completed;
        }

        if growing {
            MorphPhase::Growing
        } else {
            MorphPhase::Shrinking
        }
    }
}

/// Zoekt de descriptor voor `id` op, of valt met een waarschuwing terug op de
/// kubus. Alleen als ook de kubus ontbreekt komt de fout naar buiten.
fn resolve_or_fallback<'c>(
    catalog: &'c ShapeCatalog,
    id: &str,
) -> Result<(&'c str, &'c ShapeDescriptor), CatalogError> {
    if let Some(descriptor) = catalog.get(id) {
        return Ok((descriptor.id, descriptor));
    }

    let error = CatalogError::UnknownShape {
        id: id.to_owned(),
        suggestion: catalog.closest_id(id).map(str::to_owned),
    };
    match &error {
        CatalogError::UnknownShape {
            suggestion: Some(suggestion),
            ..
        } => warn!("{error} (bedoelde je `{suggestion}`?); valt terug op `{FALLBACK_SHAPE_ID}`"),
        _ => warn!("{error}; valt terug op `{FALLBACK_SHAPE_ID}`"),
    }

    catalog
        .get(FALLBACK_SHAPE_ID)
        .map(|descriptor| (descriptor.id, descriptor))
        .ok_or(error)
}

#[cfg(test)]
mod tests {
    use super::{DisplayState, MorphPhase, TARGET_SEED_SCALE, TOTAL_MORPH_STEPS, ease};
    use crate::catalog::ShapeCatalog;

    fn booted() -> (ShapeCatalog, DisplayState) {
        let catalog = ShapeCatalog::default();
        let state = DisplayState::new(&catalog);
        (catalog, state)
    }

    #[test]
    fn boots_with_default_cube() {
        let (_, state) = booted();
        assert_eq!(state.current().shape_id, "cube");
        assert!(!state.is_transitioning());
        assert_eq!(state.current().scale, 1.0);
    }

    #[test]
    fn tick_without_transition_is_noop() {
        let (_, mut state) = booted();
        let before = state.current().clone();
        assert_eq!(state.tick(), MorphPhase::Idle);
        assert_eq!(state.current().scale, before.scale);
        assert_eq!(state.current().rotation_x, before.rotation_x);
    }

    #[test]
    fn full_transition_takes_exactly_sixty_ticks() {
        let (catalog, mut state) = booted();
        state
            .request_morph(&catalog, "sphere", 32)
            .expect("morph naar sphere");

        let phases: Vec<MorphPhase> = (0..TOTAL_MORPH_STEPS).map(|_| state.tick()).collect();

        assert!(phases[..31].iter().all(|&phase| phase == MorphPhase::Shrinking));
        assert!(phases[31..59].iter().all(|&phase| phase == MorphPhase::Growing));
        assert_eq!(phases[59], MorphPhase::Completed);

        assert!(!state.is_transitioning());
        assert_eq!(state.current().shape_id, "sphere");
        // De afronding zet de bronschaal er exact op terug.
        assert_eq!(state.current().scale, 1.0);
        assert_eq!(state.tick(), MorphPhase::Idle);
    }

    #[test]
    fn target_waits_for_the_growth_phase() {
        let (catalog, mut state) = booted();
        state
            .request_morph(&catalog, "torus", 24)
            .expect("morph naar torus");

        for _ in 0..31 {
            state.tick();
        }
        let seeded = state.target().map(|target| target.scale);
        assert_eq!(seeded, Some(TARGET_SEED_SCALE));

        state.tick();
        let grown = state.target().map(|target| target.scale);
        assert!(grown > seeded);
    }

    #[test]
    fn source_shrinks_monotonically() {
        let (catalog, mut state) = booted();
        state
            .request_morph(&catalog, "icosahedron", 32)
            .expect("morph naar icosahedron");

        let mut previous = state.current().scale;
        for _ in 0..30 {
            state.tick();
            let scale = state.current().scale;
            assert!(scale <= previous, "schaal {scale} groeide tijdens de krimp");
            previous = scale;
        }
        assert!(previous < 0.6);
    }

    #[test]
    fn retarget_keeps_live_scale_without_pop() {
        let (catalog, mut state) = booted();
        state
            .request_morph(&catalog, "sphere", 32)
            .expect("eerste morph");
        for _ in 0..30 {
            state.tick();
        }
        let live = state.current().scale;
        assert!(live < 1.0 && live > 0.0);

        state
            .request_morph(&catalog, "torus", 32)
            .expect("tweede morph");
        assert_eq!(state.elapsed_steps(), 0);
        assert_eq!(state.current().shape_id, "cube");
        assert_eq!(
            state.target().map(|target| target.shape_id.as_str()),
            Some("torus")
        );

        // Eerste tick van de nieuwe overgang start op de levende schaal.
        state.tick();
        assert!((state.current().scale - live).abs() < 1e-12);

        for _ in 1..TOTAL_MORPH_STEPS {
            state.tick();
        }
        assert_eq!(state.current().shape_id, "torus");
        assert_eq!(state.current().scale, live);
    }

    #[test]
    fn unknown_target_falls_back_to_cube() {
        let (catalog, mut state) = booted();
        state
            .request_morph(&catalog, "doesnotexist", 32)
            .expect("onbekende id valt terug in plaats van te falen");
        assert_eq!(
            state.target().map(|target| target.shape_id.as_str()),
            Some("cube")
        );

        for _ in 0..TOTAL_MORPH_STEPS {
            state.tick();
        }
        assert_eq!(state.current().shape_id, "cube");
        assert!(!state.is_transitioning());
    }

    #[test]
    fn request_clamps_to_descriptor_range() {
        let (catalog, mut state) = booted();
        state
            .request_morph(&catalog, "kleinBottle", 1)
            .expect("morph naar klein bottle");
        let target = state.target().expect("doel aanwezig");
        assert_eq!(target.resolution, 16);
        assert_eq!(target.mesh.vertex_count(), 17 * 17);
    }

    #[test]
    fn set_shape_swaps_without_transition_and_keeps_pose() {
        let (catalog, mut state) = booted();
        state
            .request_morph(&catalog, "sphere", 32)
            .expect("morph naar sphere");
        for _ in 0..3 {
            state.tick();
        }
        let rotation = state.current().rotation_x;
        assert!(rotation > 0.0);

        state
            .set_shape(&catalog, "torus", 16)
            .expect("directe wissel");
        assert!(!state.is_transitioning());
        assert_eq!(state.current().shape_id, "torus");
        assert_eq!(state.current().rotation_x, rotation);
    }

    #[test]
    fn revisions_increase_per_generated_mesh() {
        let (catalog, mut state) = booted();
        let boot_revision = state.current().revision;
        state
            .set_shape(&catalog, "sphere", 32)
            .expect("wissel naar sphere");
        assert!(state.current().revision > boot_revision);
    }

    #[test]
    fn ease_is_anchored_and_symmetric() {
        assert!(ease(0.0).abs() < 1e-12);
        assert!((ease(0.5) - 0.5).abs() < 1e-12);
        assert!((ease(1.0) - 1.0).abs() < 1e-12);
        assert!((ease(0.25) + ease(0.75) - 1.0).abs() < 1e-12);
    }
}
