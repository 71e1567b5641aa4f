//! Uniform sampling of catalog URLs without replacement.

use rand::seq::index;
use rand::Rng;
use thiserror::Error;

use crate::catalog::Catalog;

/// How many tabs a default run opens.
pub const SAMPLE_SIZE: usize = 30;

/// Raised when the catalog cannot cover the requested sample. This is a
/// programming/configuration error, checked before any launch attempt.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("catalog holds {available} URLs but {requested} were requested")]
    InsufficientCatalog { available: usize, requested: usize },
}

/// Draws `amount` distinct URLs from the catalog, each equally likely, with
/// the result order fully randomized (the same contract as Python's
/// `random.sample`). The catalog itself is untouched.
pub fn sample_urls<R>(
    rng: &mut R,
    catalog: &Catalog,
    amount: usize,
) -> Result<Vec<String>, SelectionError>
where
    R: Rng + ?Sized,
{
    let available = catalog.len();
    if available < amount {
        return Err(SelectionError::InsufficientCatalog {
            available,
            requested: amount,
        });
    }

    let urls = catalog.urls();
    // index::sample returns `amount` distinct indices in random order.
    let picked = index::sample(rng, available, amount);
    Ok(picked.into_iter().map(|i| urls[i].clone()).collect())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn numbered_catalog(n: usize) -> Catalog {
        Catalog::from_urls((0..n).map(|i| format!("https://site-{i}.example")))
    }

    #[test]
    fn selection_is_distinct_and_from_catalog() {
        let catalog = numbered_catalog(31);
        let mut rng = StdRng::seed_from_u64(7);
        let selection = sample_urls(&mut rng, &catalog, SAMPLE_SIZE).unwrap();

        assert_eq!(selection.len(), SAMPLE_SIZE);
        let distinct: HashSet<&str> = selection.iter().map(String::as_str).collect();
        assert_eq!(distinct.len(), SAMPLE_SIZE);
        for url in &selection {
            assert!(catalog.urls().contains(url), "{url} not in catalog");
        }
    }

    #[test]
    fn catalog_untouched_by_sampling() {
        let catalog = numbered_catalog(31);
        let before = catalog.urls().to_vec();
        let mut rng = StdRng::seed_from_u64(7);
        sample_urls(&mut rng, &catalog, SAMPLE_SIZE).unwrap();
        assert_eq!(catalog.urls(), before.as_slice());
    }

    #[test]
    fn same_seed_same_selection() {
        let catalog = numbered_catalog(40);
        let a = sample_urls(&mut StdRng::seed_from_u64(42), &catalog, SAMPLE_SIZE).unwrap();
        let b = sample_urls(&mut StdRng::seed_from_u64(42), &catalog, SAMPLE_SIZE).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_differ() {
        let catalog = numbered_catalog(40);
        let a = sample_urls(&mut StdRng::seed_from_u64(1), &catalog, SAMPLE_SIZE).unwrap();
        let b = sample_urls(&mut StdRng::seed_from_u64(2), &catalog, SAMPLE_SIZE).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn insufficient_catalog_is_an_error() {
        let catalog = numbered_catalog(29);
        let mut rng = StdRng::seed_from_u64(7);
        let err = sample_urls(&mut rng, &catalog, SAMPLE_SIZE).unwrap_err();
        assert_eq!(
            err,
            SelectionError::InsufficientCatalog {
                available: 29,
                requested: 30,
            }
        );
    }

    #[test]
    fn whole_catalog_sample_is_a_permutation() {
        let catalog = numbered_catalog(30);
        let mut rng = StdRng::seed_from_u64(9);
        let selection = sample_urls(&mut rng, &catalog, SAMPLE_SIZE).unwrap();
        let mut sorted = selection.clone();
        sorted.sort();
        let mut expected = catalog.urls().to_vec();
        expected.sort();
        assert_eq!(sorted, expected);
    }
}
