//! Shape-catalogus: registratie, zoekindex en generatie-dispatch.
//!
//! De catalogus koppelt stabiele shape-id's aan descriptors met metadata en
//! een generatiestrategie. Opvragen kan per id, per categorie of via een
//! vrije zoekterm; genereren loopt altijd via [`ShapeCatalog::generate`] zodat
//! resolutie-klem en terugval op de kubus op één plek zitten.

use std::collections::HashMap;

use log::{debug, warn};
use thiserror::Error;

use crate::geom::{
    self, Point3, ShapeMesh, SurfaceDomain, depth_for_resolution, sample_surface_in_domain,
};

pub mod advanced;
pub mod artistic;
pub mod basic;
pub mod fractals;
pub mod geometric;
pub mod mathematical;
pub mod platonic;

/// Canonieke categorielabels zoals de selectielijst ze toont.
pub mod categories {
    pub const BASIC: &str = "BASIC SHAPES";
    pub const PLATONIC: &str = "PLATONIC SOLIDS";
    pub const MATHEMATICAL: &str = "MATHEMATICAL SHAPES";
    pub const GEOMETRIC: &str = "GEOMETRIC VARIATIONS";
    pub const ARTISTIC: &str = "ARTISTIC SHAPES";
    pub const ADVANCED: &str = "ADVANCED MATHEMATICAL";
    pub const FRACTALS: &str = "FRACTALS AND COMPLEX";

    /// Vaste weergavevolgorde; niet-canonieke categorieën komen hierna.
    pub const CANONICAL_ORDER: [&str; 7] = [
        BASIC,
        PLATONIC,
        MATHEMATICAL,
        GEOMETRIC,
        ARTISTIC,
        ADVANCED,
        FRACTALS,
    ];
}

/// Ondergrens voor het effectieve resolutieniveau.
pub const MIN_RESOLUTION: i32 = 3;
/// Bovengrens voor het effectieve resolutieniveau.
pub const MAX_RESOLUTION: i32 = 128;
/// Id waarop wordt teruggevallen bij onbekende of falende shapes.
pub const FALLBACK_SHAPE_ID: &str = "cube";

/// Maximale Levenshtein-afstand waarbij nog een suggestie wordt gedaan.
const MAX_SUGGESTION_DISTANCE: usize = 3;

/// Klemt een resolutieverzoek op `[MIN_RESOLUTION, MAX_RESOLUTION]`.
#[must_use]
pub fn clamp_resolution(resolution: i32) -> usize {
    resolution.clamp(MIN_RESOLUTION, MAX_RESOLUTION) as usize
}

// ─── Fouten ──────────────────────────────────────────────────────────────────

/// Fouttype voor catalogusoperaties.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// De gevraagde shape-id is niet geregistreerd.
    #[error("onbekende shape-id `{id}`")]
    UnknownShape {
        id: String,
        /// Dichtstbijzijnde geregistreerde id, indien er een in de buurt ligt.
        suggestion: Option<String>,
    },
    /// Een descriptor mist verplichte velden.
    #[error("ongeldige shape-descriptor `{id}`: {reason}")]
    InvalidDescriptor { id: String, reason: String },
    /// Een generator leverde een mesh op die de validatie niet doorstaat.
    #[error("genereren van `{id}` mislukt: {reason}")]
    Generation { id: String, reason: String },
}

// ─── Descriptor ──────────────────────────────────────────────────────────────

/// Generatiefunctie voor gesloten-vorm solids; het argument is het geklemde
/// resolutieniveau (vormen zonder zinvolle resolutie negeren het).
pub type ClosedFormFn = fn(usize) -> ShapeMesh;
/// Oppervlakte-vergelijking over het eigen (u, v)-domein.
pub type EquationFn = fn(f64, f64) -> Point3;
/// Generatiefunctie voor recursieve fractals; het argument is de diepte.
pub type FractalFn = fn(u32) -> ShapeMesh;

/// Generatiestrategie van een shape.
#[derive(Debug, Clone, Copy)]
pub enum Generator {
    /// Directe constructie van vertices en faces.
    ClosedForm(ClosedFormFn),
    /// Uniform bemonsterd parametrisch oppervlak.
    Parametric {
        equation: EquationFn,
        domain: SurfaceDomain,
    },
    /// Recursieve onderverdeling met diepte afgeleid van de resolutie.
    Fractal(FractalFn),
}

impl Generator {
    /// Genereert de mesh voor het gevraagde resolutieniveau. Het verzoek
    /// wordt eerst geklemd, dus elke `i32` is toegestaan.
    #[must_use]
    pub fn produce(&self, resolution: i32) -> ShapeMesh {
        let segments = clamp_resolution(resolution);
        match self {
            Self::ClosedForm(build) => build(segments),
            Self::Parametric { equation, domain } => {
                sample_surface_in_domain(*equation, *domain, segments, segments)
            }
            Self::Fractal(build) => build(depth_for_resolution(segments)),
        }
    }

    #[must_use]
    pub fn strategy_name(&self) -> &'static str {
        match self {
            Self::ClosedForm(_) => "closed-form",
            Self::Parametric { .. } => "parametric",
            Self::Fractal(_) => "fractal",
        }
    }
}

/// Aanbevolen resolutiebereik van een shape. Het bereik is advies voor de
/// UI-slider; de harde klem naar `[MIN_RESOLUTION, MAX_RESOLUTION]` gebeurt
/// pas bij het genereren.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolutionRange {
    pub min: i32,
    pub max: i32,
    pub default: i32,
}

impl ResolutionRange {
    /// Standaardbereik voor shapes zonder eigen voorkeur.
    pub const DEFAULT: Self = Self::new(8, 64, 32);
    /// Bereik voor vormen waarvan de geometrie niet van resolutie afhangt.
    pub const FIXED: Self = Self::new(MIN_RESOLUTION, MIN_RESOLUTION, MIN_RESOLUTION);

    #[must_use]
    pub const fn new(min: i32, max: i32, default: i32) -> Self {
        Self { min, max, default }
    }

    /// Klemt een verzoek op dit bereik.
    #[must_use]
    pub fn clamp(&self, resolution: i32) -> i32 {
        resolution.clamp(self.min, self.max)
    }
}

/// Volledige beschrijving van één shape in de catalogus.
#[derive(Debug, Clone, Copy)]
pub struct ShapeDescriptor {
    /// Stabiele identifier, tevens sleutel in de catalogus.
    pub id: &'static str,
    /// Weergavenaam voor de UI.
    pub name: &'static str,
    /// Categorielabel; zie [`categories`] voor de canonieke set.
    pub category: &'static str,
    /// Lopende beschrijving; de woorden hieruit zijn doorzoekbaar.
    pub description: &'static str,
    /// Losse zoektermen naast naam en categorie.
    pub tags: &'static [&'static str],
    /// Moeilijkheidsgraad 1 t/m 5.
    pub difficulty: u8,
    pub resolution_range: ResolutionRange,
    pub generator: Generator,
}

impl ShapeDescriptor {
    fn validate(&self) -> Result<(), CatalogError> {
        let invalid = |reason: &str| CatalogError::InvalidDescriptor {
            id: self.id.to_owned(),
            reason: reason.to_owned(),
        };
        if self.id.trim().is_empty() {
            return Err(invalid("id ontbreekt"));
        }
        if self.name.trim().is_empty() {
            return Err(invalid("naam ontbreekt"));
        }
        if self.category.trim().is_empty() {
            return Err(invalid("categorie ontbreekt"));
        }
        Ok(())
    }
}

/// Bouwt de zoektermen van een descriptor: naam, categorie, tags en de losse
/// woorden uit de beschrijving, alles in kleine letters en ontdubbeld.
fn search_terms(descriptor: &ShapeDescriptor) -> Vec<String> {
    let mut terms = vec![
        descriptor.name.to_lowercase(),
        descriptor.category.to_lowercase(),
    ];
    terms.extend(descriptor.tags.iter().map(|tag| tag.to_lowercase()));
    terms.extend(
        descriptor
            .description
            .to_lowercase()
            .split_whitespace()
            .map(str::to_owned),
    );
    terms.sort();
    terms.dedup();
    terms
}

// ─── Catalogus ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
struct CatalogEntry {
    descriptor: ShapeDescriptor,
    search_terms: Vec<String>,
}

/// Register van shape-descriptors met zoekindex en categorie-indeling.
#[derive(Debug, Clone)]
pub struct ShapeCatalog {
    entries: Vec<CatalogEntry>,
    by_id: HashMap<String, usize>,
    category_order: Vec<&'static str>,
    by_category: HashMap<&'static str, Vec<usize>>,
}

impl Default for ShapeCatalog {
    fn default() -> Self {
        let mut catalog = Self::new();

        for registrations in [
            basic::REGISTRATIONS,
            platonic::REGISTRATIONS,
            mathematical::REGISTRATIONS,
            geometric::REGISTRATIONS,
            artistic::REGISTRATIONS,
            advanced::REGISTRATIONS,
            fractals::REGISTRATIONS,
        ] {
            for descriptor in registrations {
                if let Err(error) = catalog.register(*descriptor) {
                    warn!("Registratie overgeslagen: {error}");
                }
            }
        }

        debug!("Catalogus geïnitialiseerd met {} shapes", catalog.len());
        catalog
    }
}

impl ShapeCatalog {
    /// Lege catalogus zonder registraties.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            by_id: HashMap::new(),
            category_order: Vec::new(),
            by_category: HashMap::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registreert een descriptor. Een bestaande id wordt overschreven
    /// zonder de categorielijst te dupliceren; de laatste registratie wint.
    pub fn register(&mut self, descriptor: ShapeDescriptor) -> Result<(), CatalogError> {
        descriptor.validate()?;
        let entry = CatalogEntry {
            search_terms: search_terms(&descriptor),
            descriptor,
        };

        if let Some(&index) = self.by_id.get(descriptor.id) {
            let previous = self.entries[index].descriptor.category;
            if previous != descriptor.category {
                if let Some(members) = self.by_category.get_mut(previous) {
                    members.retain(|&member| member != index);
                }
                self.category_members(descriptor.category).push(index);
            }
            self.entries[index] = entry;
            debug!("Shape `{}` opnieuw geregistreerd", descriptor.id);
            return Ok(());
        }

        let index = self.entries.len();
        self.by_id.insert(descriptor.id.to_owned(), index);
        self.category_members(descriptor.category).push(index);
        self.entries.push(entry);
        Ok(())
    }

    fn category_members(&mut self, category: &'static str) -> &mut Vec<usize> {
        let order = &mut self.category_order;
        self.by_category.entry(category).or_insert_with(|| {
            order.push(category);
            Vec::new()
        })
    }

    /// Zoekt een descriptor op id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ShapeDescriptor> {
        self.by_id
            .get(id)
            .map(|&index| &self.entries[index].descriptor)
    }

    /// Alle descriptors binnen één categorie, in registratievolgorde.
    #[must_use]
    pub fn by_category(&self, category: &str) -> Vec<&ShapeDescriptor> {
        self.by_category
            .get(category)
            .map(|members| {
                members
                    .iter()
                    .map(|&index| &self.entries[index].descriptor)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Aanwezige categorieën: eerst de canonieke volgorde, daarna overige
    /// categorieën op volgorde van eerste registratie.
    #[must_use]
    pub fn categories(&self) -> Vec<&'static str> {
        let mut ordered: Vec<&'static str> = categories::CANONICAL_ORDER
            .iter()
            .copied()
            .filter(|category| self.by_category.contains_key(category))
            .collect();
        for &category in &self.category_order {
            if !categories::CANONICAL_ORDER.contains(&category) {
                ordered.push(category);
            }
        }
        ordered
    }

    fn grouped_indices(&self) -> Vec<usize> {
        let mut indices = Vec::with_capacity(self.entries.len());
        for category in self.categories() {
            if let Some(members) = self.by_category.get(category) {
                indices.extend_from_slice(members);
            }
        }
        indices
    }

    /// Alle descriptors, gegroepeerd op categorie in canonieke volgorde.
    #[must_use]
    pub fn all(&self) -> Vec<&ShapeDescriptor> {
        self.grouped_indices()
            .into_iter()
            .map(|index| &self.entries[index].descriptor)
            .collect()
    }

    /// Vrije zoekopdracht over naam, categorie, tags en beschrijving.
    /// Hoofdletterongevoelig; een lege of witruimte-zoekterm levert de
    /// volledige catalogus op. Resultaten behouden de categorievolgorde.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&ShapeDescriptor> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.all();
        }
        self.grouped_indices()
            .into_iter()
            .filter(|&index| {
                self.entries[index]
                    .search_terms
                    .iter()
                    .any(|term| term.contains(&needle))
            })
            .map(|index| &self.entries[index].descriptor)
            .collect()
    }

    /// Dichtstbijzijnde geregistreerde id voor een tikfout-suggestie.
    #[must_use]
    pub fn closest_id(&self, id: &str) -> Option<&str> {
        let wanted = id.to_lowercase();
        self.by_id
            .keys()
            .map(|known| (levenshtein::levenshtein(&wanted, &known.to_lowercase()), known))
            .min_by_key(|&(distance, _)| distance)
            .filter(|&(distance, _)| distance <= MAX_SUGGESTION_DISTANCE)
            .map(|(_, known)| known.as_str())
    }

    /// Genereert de mesh van een shape op het gevraagde resolutieniveau.
    /// De resolutie wordt geklemd; de mesh wordt gevalideerd voordat hij
    /// wordt teruggegeven.
    pub fn generate(&self, id: &str, resolution: i32) -> Result<ShapeMesh, CatalogError> {
        let descriptor = self.get(id).ok_or_else(|| CatalogError::UnknownShape {
            id: id.to_owned(),
            suggestion: self.closest_id(id).map(str::to_owned),
        })?;

        let mesh = descriptor.generator.produce(resolution);
        mesh.validate().map_err(|reason| CatalogError::Generation {
            id: id.to_owned(),
            reason,
        })?;
        Ok(mesh)
    }

    /// Als [`ShapeCatalog::generate`], maar elke fout wordt gelogd en
    /// vervangen door de kubus zodat de aanroeper altijd een mesh krijgt.
    #[must_use]
    pub fn generate_or_fallback(&self, id: &str, resolution: i32) -> ShapeMesh {
        match self.generate(id, resolution) {
            Ok(mesh) => mesh,
            Err(error) => {
                match &error {
                    CatalogError::UnknownShape {
                        suggestion: Some(suggestion),
                        ..
                    } => warn!(
                        "{error} (bedoelde je `{suggestion}`?); valt terug op `{FALLBACK_SHAPE_ID}`"
                    ),
                    _ => warn!("{error}; valt terug op `{FALLBACK_SHAPE_ID}`"),
                }
                self.generate(FALLBACK_SHAPE_ID, resolution)
                    .unwrap_or_else(|_| geom::cube())
            }
        }
    }
}
