use ndarray::prelude::*;
use ndarray_rand::rand::prelude::*;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;

use crate::error::Error;

/// A fixed reference point in attribute space: generated rows are scattered
/// around `center`, labeled with `class`, at distances scaled by `spread`.
#[derive(Clone, Debug, PartialEq)]
pub struct Centroid {
    pub center: Array1<f64>,
    pub class: usize,
    pub spread: f64,
}

/// The centroid table plus a parallel vector of selection weights. Built
/// once from a model seed and read-only afterwards; the same arguments
/// always rebuild the identical model.
#[derive(Clone, Debug, PartialEq)]
pub struct CentroidModel {
    centroids: Vec<Centroid>,
    weights: Array1<f64>,
    num_classes: usize,
}

impl CentroidModel {
    pub fn build(
        model_seed: u64,
        num_centroids: usize,
        num_attributes: usize,
        num_classes: usize,
    ) -> Result<Self, Error> {
        if num_centroids == 0 {
            return Err(Error::InvalidConfiguration(
                "num_centroids must be positive".into(),
            ));
        }
        if num_attributes == 0 {
            return Err(Error::InvalidConfiguration(
                "num_attributes must be positive".into(),
            ));
        }
        if num_classes == 0 {
            return Err(Error::InvalidConfiguration(
                "num_classes must be positive".into(),
            ));
        }

        // One stream seeds the whole geometry: first each centroid in order
        // (center coordinates, class, spread), then the weight vector. The
        // stream is dropped afterwards and never reused for sampling.
        let mut rng = StdRng::seed_from_u64(model_seed);
        let unit = Uniform::new(0.0, 1.0);

        let centroids = (0..num_centroids)
            .map(|_| Centroid {
                center: Array1::random_using(num_attributes, unit, &mut rng),
                class: rng.gen_range(0..num_classes),
                spread: rng.sample(unit),
            })
            .collect();
        let weights = Array1::random_using(num_centroids, unit, &mut rng);

        log::debug!(
            "built model: {} centroids, {} attributes, {} classes",
            num_centroids,
            num_attributes,
            num_classes
        );

        Ok(Self {
            centroids,
            weights,
            num_classes,
        })
    }

    #[cfg(test)]
    pub(crate) fn from_parts(
        centroids: Vec<Centroid>,
        weights: Array1<f64>,
        num_classes: usize,
    ) -> Self {
        Self {
            centroids,
            weights,
            num_classes,
        }
    }

    pub fn centroid(&self, index: usize) -> &Centroid {
        &self.centroids[index]
    }

    pub fn num_centroids(&self) -> usize {
        self.centroids.len()
    }

    pub fn num_attributes(&self) -> usize {
        self.centroids[0].center.len()
    }

    pub fn num_classes(&self) -> usize {
        self.num_classes
    }

    pub fn weights(&self) -> ArrayView1<f64> {
        self.weights.view()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_build_deterministic() {
        let a = CentroidModel::build(7, 20, 5, 3).unwrap();
        let b = CentroidModel::build(7, 20, 5, 3).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_seeds_differ() {
        let a = CentroidModel::build(1, 20, 5, 3).unwrap();
        let b = CentroidModel::build(2, 20, 5, 3).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_ranges() {
        let model = CentroidModel::build(42, 50, 10, 4).unwrap();
        assert_eq!(model.num_centroids(), 50);
        assert_eq!(model.weights().len(), 50);
        for i in 0..model.num_centroids() {
            let c = model.centroid(i);
            assert_eq!(c.center.len(), 10);
            assert!(c.center.iter().all(|x| (0.0..1.0).contains(x)));
            assert!(c.class < 4);
            assert!((0.0..1.0).contains(&c.spread));
        }
        assert!(model.weights().iter().all(|w| (0.0..1.0).contains(w)));
    }

    #[test]
    fn test_zero_counts_rejected() {
        assert!(matches!(
            CentroidModel::build(1, 0, 10, 2),
            Err(Error::InvalidConfiguration(_))
        ));
        assert!(matches!(
            CentroidModel::build(1, 50, 0, 2),
            Err(Error::InvalidConfiguration(_))
        ));
        assert!(matches!(
            CentroidModel::build(1, 50, 10, 0),
            Err(Error::InvalidConfiguration(_))
        ));
    }
}
