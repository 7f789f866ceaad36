/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Single-slot memoisation keyed by ion charge

/// Keeps the value loaded for the most recent ion.
///
/// Input rows are grouped by ion, so one slot is enough: the value is
/// reloaded only when the ion changes.
#[derive(Debug)]
pub struct PerIonCache<T> {
    current: Option<(u32, T)>,
    loads: usize,
}

impl<T> Default for PerIonCache<T> {
    fn default() -> Self {
        Self {
            current: None,
            loads: 0,
        }
    }
}

impl<T> PerIonCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value for `ion`, calling `load` only if the cached ion differs
    pub fn get_or_try_load<E, F>(&mut self, ion: u32, load: F) -> Result<&T, E>
    where
        F: FnOnce(u32) -> Result<T, E>,
    {
        let entry = match self.current.take() {
            Some((cached, value)) if cached == ion => (cached, value),
            _ => {
                self.loads += 1;
                (ion, load(ion)?)
            }
        };
        Ok(&self.current.insert(entry).1)
    }

    /// Ion of the cached value
    pub fn ion(&self) -> Option<u32> {
        self.current.as_ref().map(|(ion, _)| *ion)
    }

    /// Number of times `load` was called
    pub fn loads(&self) -> usize {
        self.loads
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reloads_only_on_ion_change() {
        let mut cache = PerIonCache::new();
        for ion in [14, 14, 15, 15, 15, 14] {
            let value = cache
                .get_or_try_load(ion, |ion| Ok::<_, ()>(ion * 10))
                .unwrap();
            assert_eq!(*value, ion * 10);
        }
        assert_eq!(cache.loads(), 3);
        assert_eq!(cache.ion(), Some(14));
    }

    #[test]
    fn test_failed_load_clears_slot() {
        let mut cache: PerIonCache<u32> = PerIonCache::new();
        cache.get_or_try_load(1, |_| Ok::<_, &str>(1)).unwrap();
        assert!(cache.get_or_try_load(2, |_| Err("missing")).is_err());
        assert_eq!(cache.ion(), None);
    }
}
