use ndarray::prelude::*;
use ndarray_rand::rand::distributions::{Distribution, WeightedIndex};
use ndarray_rand::rand::prelude::*;
use ndarray_rand::rand_distr::{StandardNormal, Uniform};
use ndarray_rand::RandomExt;

use crate::error::Error;
use crate::model::CentroidModel;
use crate::row::{Row, Schema};

/// Configures a [`RandomRbfGenerator`]. Defaults: both seeds 1, 2 classes,
/// 10 attributes, 50 centroids.
pub struct RbfStreamBuilder {
    model_seed: u64,
    instance_seed: u64,
    num_classes: usize,
    num_attributes: usize,
    num_centroids: usize,
}

impl Default for RbfStreamBuilder {
    fn default() -> Self {
        Self {
            model_seed: 1,
            instance_seed: 1,
            num_classes: 2,
            num_attributes: 10,
            num_centroids: 50,
        }
    }
}

impl RbfStreamBuilder {
    /// Seeds the centroid geometry.
    pub fn with_model_seed(self, model_seed: u64) -> Self {
        Self { model_seed, ..self }
    }

    /// Seeds the per-row sampling stream, independently of the model seed.
    pub fn with_instance_seed(self, instance_seed: u64) -> Self {
        Self {
            instance_seed,
            ..self
        }
    }

    pub fn with_classes(self, num_classes: usize) -> Self {
        Self {
            num_classes,
            ..self
        }
    }

    pub fn with_attributes(self, num_attributes: usize) -> Self {
        Self {
            num_attributes,
            ..self
        }
    }

    pub fn with_centroids(self, num_centroids: usize) -> Self {
        Self {
            num_centroids,
            ..self
        }
    }

    pub fn build(self) -> Result<RandomRbfGenerator, Error> {
        let model = CentroidModel::build(
            self.model_seed,
            self.num_centroids,
            self.num_attributes,
            self.num_classes,
        )?;
        RandomRbfGenerator::from_model(model, self.instance_seed)
    }
}

/// An infinite stream of labeled rows drawn around the centroids of a
/// [`CentroidModel`]. The model and schema are fixed at construction; the
/// only mutable state is the instance RNG cursor, advanced once per row, so
/// equal seeds replay the identical sequence.
#[derive(Debug)]
pub struct RandomRbfGenerator {
    model: CentroidModel,
    schema: Schema,
    selector: WeightedIndex<f64>,
    rng: StdRng,
}

impl RandomRbfGenerator {
    pub fn builder() -> RbfStreamBuilder {
        RbfStreamBuilder::default()
    }

    /// Builds a sampler over an existing model. Cloning one model into
    /// several generators with distinct instance seeds gives independent
    /// cursors over the same geometry.
    pub fn from_model(model: CentroidModel, instance_seed: u64) -> Result<Self, Error> {
        let selector = WeightedIndex::new(model.weights().iter())
            .map_err(|e| Error::InvalidConfiguration(format!("unusable selection weights: {e}")))?;
        let schema = Schema::new(model.num_attributes(), model.num_classes());
        Ok(Self {
            model,
            schema,
            selector,
            rng: StdRng::seed_from_u64(instance_seed),
        })
    }

    /// The column layout of every row this generator will produce.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn model(&self) -> &CentroidModel {
        &self.model
    }

    /// Draws the next row: pick a centroid (weighted), draw a raw direction
    /// in `[-1, 1)` per attribute, rescale it to a Gaussian-distributed
    /// magnitude times the centroid's spread, and add the centroid's center.
    pub fn next_row(&mut self) -> Row {
        let centroid = self.model.centroid(self.selector.sample(&mut self.rng));
        let raw = Array1::random_using(
            centroid.center.len(),
            Uniform::new(-1.0, 1.0),
            &mut self.rng,
        );
        let gaussian: f64 = self.rng.sample(StandardNormal);
        let scale = rescale(&raw, gaussian * centroid.spread);
        let values = &raw * scale + &centroid.center;
        Row::new(values, centroid.class)
    }

    #[cfg(test)]
    fn select_centroid(&mut self) -> usize {
        self.selector.sample(&mut self.rng)
    }
}

/// The factor that stretches `raw` to the desired magnitude. A negative
/// magnitude flips the perturbation direction. An all-zero raw vector has no
/// direction to stretch; the fallback is zero perturbation.
fn rescale(raw: &Array1<f64>, desired_magnitude: f64) -> f64 {
    let norm = raw.dot(raw).sqrt();
    if norm == 0.0 {
        0.0
    } else {
        desired_magnitude / norm
    }
}

/// The stream never ends; `next` always yields a row.
impl Iterator for RandomRbfGenerator {
    type Item = Row;

    fn next(&mut self) -> Option<Row> {
        Some(self.next_row())
    }
}
