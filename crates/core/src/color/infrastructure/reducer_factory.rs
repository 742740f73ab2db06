use crate::color::domain::color_method::ColorMethod;
use crate::color::domain::color_reducer::ColorReducer;

use super::average_color_reducer::AverageColorReducer;
use super::dominant_color_reducer::DominantColorReducer;

/// Creates the reducer for `method`.
///
/// `seed` only affects [`ColorMethod::Dominant`]; without one the k-means
/// generator is seeded from system entropy.
pub fn create_reducer(method: ColorMethod, seed: Option<u64>) -> Box<dyn ColorReducer> {
    match method {
        ColorMethod::Average => {
            log::info!("Using average color reducer");
            Box::new(AverageColorReducer::new())
        }
        ColorMethod::Dominant => {
            match seed {
                Some(seed) => log::info!("Using dominant color reducer (seed={seed})"),
                None => log::info!("Using dominant color reducer (unseeded)"),
            }
            Box::new(DominantColorReducer::new(seed))
        }
    }
}
