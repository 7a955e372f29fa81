//! Name-keyed effect registry.

use crate::catalog::{
    DecimatePro, DecimateQuadraticClustering, Delaunay3D, FeatureEdges, FillHoles, Identity,
    MaskPoints, PointSampling, SmoothLaplacian, SmoothWindowedSinc, TubeFilter,
};
use crate::decimate::DecimateQuadricEffect;
use crate::effect::MeshEffect;
use crate::volume::VolumeSamplingEffect;

/// Constructs one effect instance.
pub type EffectConstructor = fn() -> Box<dyn MeshEffect>;

/// Effect constructors keyed by name.
///
/// Registration order is preserved, so hosts can list effects the way they
/// were registered. [`EffectRegistry::default`] carries the built-in
/// catalogue.
pub struct EffectRegistry {
    entries: Vec<(&'static str, EffectConstructor)>,
}

impl EffectRegistry {
    /// An empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Registers `constructor` under `name`.
    ///
    /// Re-registering a name replaces its constructor but keeps its place
    /// in the listing order.
    pub fn register(&mut self, name: &'static str, constructor: EffectConstructor) {
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = constructor;
        } else {
            self.entries.push((name, constructor));
        }
    }

    /// Registers a default-constructible effect under its own name.
    pub fn register_effect<E: MeshEffect + Default + 'static>(&mut self) {
        let name = E::default().name();
        self.register(name, || Box::new(E::default()) as Box<dyn MeshEffect>);
    }

    /// Instantiates the effect registered under `name`, if any.
    #[must_use]
    pub fn create(&self, name: &str) -> Option<Box<dyn MeshEffect>> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, constructor)| constructor())
    }

    /// Registered names, in registration order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(name, _)| *name).collect()
    }

    /// Number of registered effects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for EffectRegistry {
    /// The built-in catalogue, in presentation order.
    fn default() -> Self {
        let mut registry = Self::new();
        registry.register_effect::<SmoothLaplacian>();
        registry.register_effect::<SmoothWindowedSinc>();
        registry.register_effect::<PointSampling>();
        registry.register_effect::<MaskPoints>();
        registry.register_effect::<FeatureEdges>();
        registry.register_effect::<VolumeSamplingEffect>();
        registry.register_effect::<Delaunay3D>();
        registry.register_effect::<FillHoles>();
        registry.register_effect::<TubeFilter>();
        registry.register_effect::<DecimateQuadricEffect>();
        registry.register_effect::<DecimatePro>();
        registry.register_effect::<DecimateQuadraticClustering>();
        registry.register_effect::<Identity>();
        registry
    }
}
