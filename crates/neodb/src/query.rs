//! Lazy, limited evaluation of filters against a database.
//!
//! [`Database::query`] returns a [`Matches`] iterator that walks the close
//! approaches in ingestion order and yields only those accepted by the
//! predicate. Nothing is tested until the iterator is advanced, so a
//! consumer that stops early (for example through [`limit`]) never pays
//! for the approaches it did not reach.

use crate::database::{Approach, Database};
use crate::filters::{FilterSet, Predicate};
use std::iter::{FusedIterator, Take};

/// Iterator over the approaches of a database that match a predicate.
///
/// Created by [`Database::query`].
#[derive(Debug)]
pub struct Matches<'a, P: ?Sized> {
    db: &'a Database,
    predicate: &'a P,
    next: usize,
}

impl<'a, P: Predicate + ?Sized> Matches<'a, P> {
    pub(crate) fn new(db: &'a Database, predicate: &'a P) -> Self {
        Self {
            db,
            predicate,
            next: 0,
        }
    }
}

impl<'a, P: Predicate + ?Sized> Iterator for Matches<'a, P> {
    type Item = Approach<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(approach) = self.db.approach_at(self.next) {
            self.next += 1;
            if self.predicate.matches(&approach) {
                return Some(approach);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.db.approach_count().saturating_sub(self.next);
        (0, Some(remaining))
    }
}

impl<P: Predicate + ?Sized> FusedIterator for Matches<'_, P> {}

/// Bound an iterator to at most `limit` items.
///
/// `None` and `Some(0)` both mean no bound. The items kept are a prefix
/// of the input, in the same order.
///
/// ```
/// use neodb::query::limit;
///
/// assert_eq!(limit(1..10, Some(3)).collect::<Vec<_>>(), [1, 2, 3]);
/// assert_eq!(limit(1..4, Some(0)).count(), 3);
/// assert_eq!(limit(1..4, None).count(), 3);
/// ```
pub fn limit<I: Iterator>(iter: I, limit: Option<usize>) -> Take<I> {
    let n = match limit {
        None | Some(0) => usize::MAX,
        Some(n) => n,
    };
    iter.take(n)
}

/// A set of filters and an optional result limit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    /// Conjunction every result must satisfy
    pub filters: FilterSet,
    /// Maximum number of results; `None` or `Some(0)` means unbounded
    pub limit: Option<usize>,
}

impl Query {
    /// An unbounded query with the given filters.
    #[must_use]
    pub fn new(filters: impl Into<FilterSet>) -> Self {
        Self {
            filters: filters.into(),
            limit: None,
        }
    }

    /// Set the result limit.
    #[must_use]
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Lazily run the query, yielding at most `limit` matches in ingestion
    /// order.
    pub fn run<'a>(&'a self, db: &'a Database) -> Take<Matches<'a, FilterSet>> {
        tracing::debug!(filters = %self.filters, limit = ?self.limit, "Running query");
        limit(db.query(&self.filters), self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NearEarthObject, NewCloseApproach};
    use crate::filters::{Criteria, Filter};
    use rstest::{fixture, rstest};
    use std::cell::Cell;

    fn predicate<F: Fn(&Approach<'_>) -> bool>(f: F) -> F {
        f
    }

    /// Ten approaches of one object, on consecutive days of June 2020,
    /// with distance 0.01 * day.
    #[fixture]
    fn db() -> Database {
        let approaches = (1..=10).map(|day| NewCloseApproach {
            designation: "433".to_string(),
            time: format!("2020-06-{day:02} 12:00").parse().unwrap(),
            distance: 0.01 * f64::from(day),
            velocity: 10.0,
        });
        Database::new(
            [NearEarthObject::new("433", None, Some(16.84), false)],
            approaches,
        )
    }

    fn days<'a>(matches: impl Iterator<Item = Approach<'a>>) -> Vec<u32> {
        use chrono::Datelike;
        matches.map(|a| a.time.date().day()).collect()
    }

    #[rstest]
    fn query_yields_matches_in_ingestion_order(db: Database) {
        let filters = FilterSet::from_iter([Filter::MinDistance(0.045)]);
        assert_eq!(days(db.query(&filters)), [5, 6, 7, 8, 9, 10]);
    }

    #[rstest]
    fn query_without_filters_yields_everything(db: Database) {
        assert_eq!(db.query(&FilterSet::new()).count(), db.approach_count());
    }

    #[rstest]
    fn query_is_lazy(db: Database) {
        let tested = Cell::new(0);
        let counting = predicate(|_| {
            tested.set(tested.get() + 1);
            true
        });

        let mut matches = db.query(&counting);
        assert_eq!(tested.get(), 0);

        matches.next();
        matches.next();
        assert_eq!(tested.get(), 2);
    }

    #[rstest]
    fn limit_stops_testing_after_last_match(db: Database) {
        let tested = Cell::new(0);
        let second_or_fourth = predicate(|a| {
            tested.set(tested.get() + 1);
            (a.distance > 0.015 && a.distance < 0.025) || (a.distance > 0.035 && a.distance < 0.045)
        });

        let found: Vec<_> = limit(db.query(&second_or_fourth), Some(2)).collect();
        assert_eq!(days(found.into_iter()), [2, 4]);
        assert_eq!(tested.get(), 4);
    }

    #[rstest]
    #[case::unbounded_none(None, 10)]
    #[case::unbounded_zero(Some(0), 10)]
    #[case::smaller(Some(3), 3)]
    #[case::exact(Some(10), 10)]
    #[case::larger(Some(50), 10)]
    fn limit_truncates(db: Database, #[case] n: Option<usize>, #[case] expected: usize) {
        let query = Query::new(FilterSet::new()).with_limit(n);
        assert_eq!(query.run(&db).count(), expected);
    }

    #[rstest]
    fn run_combines_filters_and_limit(db: Database) {
        let query = Query::new(Criteria {
            start_date: chrono::NaiveDate::from_ymd_opt(2020, 6, 3),
            max_distance: Some(0.08),
            ..Criteria::default()
        })
        .with_limit(Some(4));

        assert_eq!(days(query.run(&db)), [3, 4, 5, 6]);
    }

    #[rstest]
    fn matches_is_fused(db: Database) {
        let none = FilterSet::from_iter([Filter::Hazardous(true)]);
        let mut matches = db.query(&none);
        assert!(matches.next().is_none());
        assert!(matches.next().is_none());
        assert_eq!(matches.size_hint(), (0, Some(0)));
    }

    #[rstest]
    fn dyn_predicates_are_accepted(db: Database) {
        let boxed: Box<dyn Predicate> = Box::new(Filter::MaxDistance(0.02));
        assert_eq!(days(db.query(boxed.as_ref())), [1, 2]);
    }
}
