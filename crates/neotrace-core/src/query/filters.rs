//! Predicate chains over linked close approaches

use chrono::NaiveDate;

use crate::storage::NeoDatabase;
use crate::types::{CloseApproach, NearEarthObject};

/// A close approach paired with its resolved parent object
#[derive(Debug, Clone, Copy)]
pub struct LinkedApproach<'a> {
    pub approach: &'a CloseApproach,
    pub neo: &'a NearEarthObject,
}

/// Filter criteria over close approaches.
///
/// Every criterion is independently optional; configured criteria are
/// ANDed together and an unset criterion always matches. Date criteria
/// compare the approach's calendar date, not the full timestamp. All
/// numeric bounds are inclusive.
#[derive(Debug, Clone, Default)]
pub struct ApproachFilter {
    date: Option<NaiveDate>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    min_distance: Option<f64>,
    max_distance: Option<f64>,
    min_velocity: Option<f64>,
    max_velocity: Option<f64>,
    min_diameter: Option<f64>,
    max_diameter: Option<f64>,
    hazardous: Option<bool>,
}

impl ApproachFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only approaches on exactly this calendar date
    pub fn on_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Only approaches on or after this date
    pub fn start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Only approaches on or before this date
    pub fn end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    pub fn min_distance(mut self, au: f64) -> Self {
        self.min_distance = Some(au);
        self
    }

    pub fn max_distance(mut self, au: f64) -> Self {
        self.max_distance = Some(au);
        self
    }

    pub fn min_velocity(mut self, km_s: f64) -> Self {
        self.min_velocity = Some(km_s);
        self
    }

    pub fn max_velocity(mut self, km_s: f64) -> Self {
        self.max_velocity = Some(km_s);
        self
    }

    /// Lower bound on the parent object's diameter; an unknown (NaN)
    /// diameter never matches
    pub fn min_diameter(mut self, km: f64) -> Self {
        self.min_diameter = Some(km);
        self
    }

    /// Upper bound on the parent object's diameter; an unknown (NaN)
    /// diameter never matches
    pub fn max_diameter(mut self, km: f64) -> Self {
        self.max_diameter = Some(km);
        self
    }

    /// Only approaches of objects with this hazard classification
    pub fn hazardous(mut self, hazardous: bool) -> Self {
        self.hazardous = Some(hazardous);
        self
    }

    /// True when every configured predicate accepts the linked pair.
    /// Evaluation short-circuits on the first failing predicate.
    pub fn matches(&self, approach: &CloseApproach, neo: &NearEarthObject) -> bool {
        let date = approach.time.date_naive();
        if let Some(d) = self.date {
            if date != d {
                return false;
            }
        }
        if let Some(d) = self.start_date {
            if date < d {
                return false;
            }
        }
        if let Some(d) = self.end_date {
            if date > d {
                return false;
            }
        }
        if let Some(lo) = self.min_distance {
            if approach.distance < lo {
                return false;
            }
        }
        if let Some(hi) = self.max_distance {
            if approach.distance > hi {
                return false;
            }
        }
        if let Some(lo) = self.min_velocity {
            if approach.velocity < lo {
                return false;
            }
        }
        if let Some(hi) = self.max_velocity {
            if approach.velocity > hi {
                return false;
            }
        }
        // Negated comparisons so a NaN diameter fails both bounds instead
        // of slipping through.
        if let Some(lo) = self.min_diameter {
            if !(neo.diameter >= lo) {
                return false;
            }
        }
        if let Some(hi) = self.max_diameter {
            if !(neo.diameter <= hi) {
                return false;
            }
        }
        if let Some(h) = self.hazardous {
            if neo.hazardous != h {
                return false;
            }
        }
        true
    }
}

/// Lazy iterator over the approaches matching a filter, in insertion
/// order.
///
/// A `Query` is a single forward pass over the database; it is not
/// restartable. Call [`NeoDatabase::query`] again for a fresh traversal.
pub struct Query<'a> {
    db: &'a NeoDatabase,
    filter: ApproachFilter,
    next: usize,
}

impl<'a> Query<'a> {
    pub(crate) fn new(db: &'a NeoDatabase, filter: ApproachFilter) -> Self {
        Self {
            db,
            filter,
            next: 0,
        }
    }
}

impl<'a> Iterator for Query<'a> {
    type Item = LinkedApproach<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let approaches = self.db.approaches();
        while self.next < approaches.len() {
            let approach = &approaches[self.next];
            self.next += 1;
            let neo = self.db.neo_for(approach);
            if self.filter.matches(approach, neo) {
                return Some(LinkedApproach { approach, neo });
            }
        }
        None
    }
}

/// Truncate a result stream to at most `limit` items.
///
/// `None` and `Some(0)` pass the stream through unbounded. Truncation is
/// lazy: the underlying iterator is never advanced past the cap, so a
/// limited query over a huge dataset stops scanning after the `n`th match.
pub fn limit<I: Iterator>(results: I, limit: Option<usize>) -> std::iter::Take<I> {
    let cap = match limit {
        Some(n) if n > 0 => n,
        _ => usize::MAX,
    };
    results.take(cap)
}
