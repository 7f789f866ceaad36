/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Mapping from RDCA states to their fine-structure sublevels

use std::collections::HashMap;

use log::{debug, warn};

use super::state::{is_correspondent, AtomicState};
use crate::configuration::Labelled;
use crate::utils::group_indices;

/// A fine-structure state tagged with the RDCA state it belongs to
#[derive(Debug, Clone, PartialEq)]
pub struct FsMember {
    pub state: AtomicState,
    pub rdca_id: u32,
}

/// An RDCA state and its correspondent fine-structure states
#[derive(Debug, Clone, PartialEq)]
pub struct Bucket {
    pub rdca: AtomicState,
    /// In level-file order; empty when the FS data has no match
    pub members: Vec<FsMember>,
}

impl Bucket {
    pub fn has_members(&self) -> bool {
        !self.members.is_empty()
    }

    /// Sum of the nominal FS degeneracies
    pub fn fs_degeneracy(&self) -> f64 {
        self.members.iter().map(|m| m.state.degeneracy).sum()
    }
}

/// Buckets keyed by correspondence key, in RDCA level-file order
#[derive(Debug, Clone, Default)]
pub struct CorrespondenceMap {
    buckets: Vec<Bucket>,
    index: HashMap<String, usize>,
}

impl CorrespondenceMap {
    /// Bucket of a correspondence key
    pub fn get(&self, key: &str) -> Option<&Bucket> {
        self.index.get(key).map(|&i| &self.buckets[i])
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bucket> {
        self.buckets.iter()
    }

    fn insert(&mut self, bucket: Bucket) {
        let key = bucket.rdca.correspondence_key();
        if let Some(&existing) = self.index.get(&key) {
            warn!(
                "RDCA states {} and {} share the correspondence key {}; keeping the later one",
                self.buckets[existing].rdca.id, bucket.rdca.id, key
            );
            self.buckets[existing] = bucket;
        } else {
            self.index.insert(key, self.buckets.len());
            self.buckets.push(bucket);
        }
    }
}

/// Match every RDCA state with the FS states that belong to it.
///
/// FS states are first narrowed to those sharing `ncomplex` and `sname`, then
/// kept when their name with coupling suffixes stripped equals the RDCA name.
pub fn build_correspondence(rdca_states: &[AtomicState], fs_states: &[AtomicState]) -> CorrespondenceMap {
    let shells = group_indices(fs_states, |s| (s.ncomplex.clone(), s.sname.clone()));

    let mut map = CorrespondenceMap::default();
    for rdca in rdca_states {
        let members: Vec<FsMember> = shells
            .get(&(rdca.ncomplex.clone(), rdca.sname.clone()))
            .map(|candidates| {
                candidates
                    .iter()
                    .map(|&i| &fs_states[i])
                    .filter(|fs| is_correspondent(fs, rdca))
                    .map(|fs| FsMember {
                        state: fs.clone(),
                        rdca_id: rdca.id,
                    })
                    .collect()
            })
            .unwrap_or_default();

        if members.is_empty() {
            debug!("RDCA state {} ({}) has no FS correspondents", rdca.id, rdca.name);
        }

        map.insert(Bucket {
            rdca: rdca.clone(),
            members,
        });
    }

    map
}
