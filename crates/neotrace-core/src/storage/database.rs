//! In-memory linking database for NEOs and their close approaches
//!
//! Owns the full set of both entity kinds, indexes NEOs by designation and
//! by name, and cross-links every approach to exactly one NEO. Built once;
//! read-only afterwards.

use std::collections::HashMap;

use crate::query::{ApproachFilter, Query};
use crate::types::{CloseApproach, NearEarthObject};

/// The linked database of near-Earth objects and close approaches.
///
/// Construction wires every approach to its parent object through
/// index-based links, so that after [`NeoDatabase::new`] returns:
/// - every approach resolves to exactly one NEO,
/// - the union of all NEOs' approach collections is the full approach set,
/// - no approach is listed under two NEOs.
///
/// An approach whose designation matches no loaded object is linked to a
/// synthetic placeholder NEO carrying just that designation, so the
/// back-link is never missing.
pub struct NeoDatabase {
    neos: Vec<NearEarthObject>,
    approaches: Vec<CloseApproach>,
    by_designation: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
}

impl NeoDatabase {
    /// Build the database from loaded records, linking as it goes.
    pub fn new(mut neos: Vec<NearEarthObject>, mut approaches: Vec<CloseApproach>) -> Self {
        let mut by_designation = HashMap::with_capacity(neos.len());
        let mut by_name = HashMap::new();
        for (idx, neo) in neos.iter().enumerate() {
            // Last row wins if the source ever repeats a designation.
            by_designation.insert(neo.designation.clone(), idx);
            if let Some(name) = &neo.name {
                // First object under a shared name wins.
                by_name.entry(name.clone()).or_insert(idx);
            }
        }

        let mut orphans = 0usize;
        for (approach_idx, approach) in approaches.iter_mut().enumerate() {
            let neo_idx = match by_designation.get(&approach.designation) {
                Some(&idx) => idx,
                None => {
                    orphans += 1;
                    let idx = neos.len();
                    neos.push(NearEarthObject::placeholder(approach.designation.as_str()));
                    by_designation.insert(approach.designation.clone(), idx);
                    idx
                }
            };
            neos[neo_idx].approaches.push(approach_idx);
            approach.neo = Some(neo_idx);
        }

        if orphans > 0 {
            tracing::warn!(
                orphans,
                "close approaches referenced unknown designations; placeholders created"
            );
        }
        tracing::info!(
            neos = neos.len(),
            approaches = approaches.len(),
            "database linked"
        );

        Self {
            neos,
            approaches,
            by_designation,
            by_name,
        }
    }

    /// Look up an object by its primary designation. Absence is a normal
    /// outcome, not an error.
    pub fn get_neo_by_designation(&self, designation: &str) -> Option<&NearEarthObject> {
        self.by_designation
            .get(designation)
            .map(|&idx| &self.neos[idx])
    }

    /// Look up an object by its exact, case-sensitive name.
    pub fn get_neo_by_name(&self, name: &str) -> Option<&NearEarthObject> {
        self.by_name.get(name).map(|&idx| &self.neos[idx])
    }

    /// Every object, including any placeholders created during linking
    pub fn neos(&self) -> &[NearEarthObject] {
        &self.neos
    }

    /// Every close approach, in insertion order
    pub fn approaches(&self) -> &[CloseApproach] {
        &self.approaches
    }

    /// Resolve an approach's back-link to its parent object.
    pub fn neo_for(&self, approach: &CloseApproach) -> &NearEarthObject {
        let idx = approach.neo.expect("approach linked during construction");
        &self.neos[idx]
    }

    /// The close approaches of one object, in insertion order
    pub fn approaches_of<'a>(
        &'a self,
        neo: &'a NearEarthObject,
    ) -> impl Iterator<Item = &'a CloseApproach> + 'a {
        neo.approaches.iter().map(move |&idx| &self.approaches[idx])
    }

    /// Lazily iterate the approaches matching `filter`, in insertion order.
    pub fn query(&self, filter: ApproachFilter) -> Query<'_> {
        Query::new(self, filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CloseApproach;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn neo(designation: &str, name: Option<&str>, diameter: f64, hazardous: bool) -> NearEarthObject {
        NearEarthObject::new(designation, name.map(str::to_string), diameter, hazardous)
    }

    fn approach(designation: &str, time: &str, distance: f64, velocity: f64) -> CloseApproach {
        CloseApproach::new(
            designation,
            CloseApproach::parse_time(time).unwrap(),
            distance,
            velocity,
        )
    }

    fn sample_db() -> NeoDatabase {
        let neos = vec![
            neo("433", Some("Eros"), 16.84, false),
            neo("2101", Some("Adonis"), 0.6, true),
            neo("2019 SC8", None, f64::NAN, false),
        ];
        let approaches = vec![
            approach("433", "2020-Jan-15 08:00", 0.3, 5.2),
            approach("2101", "2020-Feb-01 12:30", 0.02, 11.0),
            approach("433", "2020-Mar-20 23:59", 0.25, 4.9),
            approach("2019 SC8", "2020-Apr-10 00:01", 0.1, 8.8),
        ];
        NeoDatabase::new(neos, approaches)
    }

    #[test]
    fn test_every_approach_is_linked() {
        let db = sample_db();
        for approach in db.approaches() {
            // neo_for panics if any back-link were left unset
            let neo = db.neo_for(approach);
            assert_eq!(neo.designation, approach.designation);
        }
    }

    #[test]
    fn test_neos_collectively_exhaust_approaches() {
        let db = sample_db();
        let mut seen: HashSet<(String, String)> = HashSet::new();
        for neo in db.neos() {
            for approach in db.approaches_of(neo) {
                let key = (approach.designation.clone(), approach.time_str());
                assert!(seen.insert(key), "approach listed under two NEOs");
            }
        }
        assert_eq!(seen.len(), db.approaches().len());
    }

    #[test]
    fn test_get_neo_by_designation() {
        let db = sample_db();
        let adonis = db.get_neo_by_designation("2101").unwrap();
        assert_eq!(adonis.name.as_deref(), Some("Adonis"));
        assert_eq!(adonis.diameter, 0.6);
        assert!(adonis.hazardous);
    }

    #[test]
    fn test_get_neo_by_designation_missing() {
        let db = sample_db();
        assert!(db.get_neo_by_designation("not-real").is_none());
    }

    #[test]
    fn test_get_neo_by_name() {
        let db = sample_db();
        let eros = db.get_neo_by_name("Eros").unwrap();
        assert_eq!(eros.designation, "433");
        assert!(db.get_neo_by_name("eros").is_none(), "name match is case-sensitive");
        assert!(db.get_neo_by_name("Ceres").is_none());
    }

    #[test]
    fn test_unnamed_neos_are_not_name_indexed() {
        let db = sample_db();
        assert!(db.get_neo_by_name("").is_none());
    }

    #[test]
    fn test_name_collision_first_wins() {
        let neos = vec![
            neo("100", Some("Twin"), 1.0, false),
            neo("200", Some("Twin"), 2.0, true),
        ];
        let db = NeoDatabase::new(neos, vec![]);
        assert_eq!(db.get_neo_by_name("Twin").unwrap().designation, "100");
    }

    #[test]
    fn test_orphan_approach_gets_placeholder() {
        let neos = vec![neo("433", Some("Eros"), 16.84, false)];
        let approaches = vec![approach("9999", "2020-Jun-01 06:00", 0.4, 3.3)];
        let db = NeoDatabase::new(neos, approaches);

        let ghost = db.neo_for(&db.approaches()[0]);
        assert_eq!(ghost.designation, "9999");
        assert!(ghost.name.is_none());
        assert!(ghost.diameter.is_nan());
        assert!(!ghost.hazardous);

        // The placeholder is reachable through the primary index too.
        assert!(db.get_neo_by_designation("9999").is_some());
    }

    #[test]
    fn test_approach_order_preserved_per_neo() {
        let db = sample_db();
        let eros = db.get_neo_by_designation("433").unwrap();
        let times: Vec<String> = db.approaches_of(eros).map(|a| a.time_str()).collect();
        assert_eq!(times, vec!["2020-01-15 08:00", "2020-03-20 23:59"]);
    }

    proptest! {
        /// Partition property: however approaches reference objects, the
        /// per-NEO collections exhaust the approach set without overlap.
        #[test]
        fn prop_partition_invariant(refs in prop::collection::vec(0usize..12, 0..50)) {
            let neos: Vec<NearEarthObject> =
                (0..8).map(|i| neo(&format!("N{i}"), None, f64::NAN, false)).collect();
            // Designations N8..N11 are orphans and exercise the placeholder path.
            let approaches: Vec<CloseApproach> = refs
                .iter()
                .enumerate()
                .map(|(minute, &r)| {
                    approach(
                        &format!("N{r}"),
                        &format!("2020-Jan-01 00:{:02}", minute % 60),
                        0.1,
                        1.0,
                    )
                })
                .collect();
            let total = approaches.len();
            let db = NeoDatabase::new(neos, approaches);

            let mut counted = 0usize;
            let mut seen = HashSet::new();
            for neo in db.neos() {
                for idx in &neo.approaches {
                    prop_assert!(seen.insert(*idx), "approach index {} under two NEOs", idx);
                    counted += 1;
                }
            }
            prop_assert_eq!(counted, total);

            for approach in db.approaches() {
                prop_assert_eq!(&db.neo_for(approach).designation, &approach.designation);
            }
        }
    }
}
