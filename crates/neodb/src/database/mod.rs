//! In-memory database of near-Earth objects and their close approaches.
//!
//! The database is built once from two ordered collections and is
//! read-only afterwards. Construction links every close approach to its
//! object through the designation index:
//!
//! - the approach stores the object's [`NeoId`]
//! - the object appends the approach's [`ApproachId`] to its own list
//!
//! # Data problems
//!
//! Construction never fails. Problems in the input are recorded as
//! [`LinkWarning`]s, logged, and resolved as follows:
//!
//! - **Orphaned approach**: an approach whose designation matches no
//!   object is dropped, so queries never see an unlinked approach.
//! - **Duplicate designation**: the first object wins; later objects with
//!   the same designation are left out of the database.
//! - **Duplicate name**: the first object keeps the name in the name
//!   index; later objects stay reachable by designation only.
//!
//! # Ordering
//!
//! Objects and approaches keep the order in which they were supplied.
//! [`Database::approaches`] and [`Database::query`] yield approaches in
//! that order and never sort them.

mod load;
mod view;

pub use load::LoadWarning;
pub use view::{Approach, ApproachSummary};

use crate::domain::{
    ApproachId, ApproachTime, CloseApproach, NearEarthObject, NeoId, NewCloseApproach,
};
use crate::filters::Predicate;
use crate::query::Matches;
use std::collections::HashMap;
use std::fmt;

/// A data problem found while linking the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkWarning {
    /// A close approach referenced an unknown designation and was dropped.
    OrphanedApproach {
        /// Designation the approach referenced
        designation: String,
        /// When the dropped approach happens
        time: ApproachTime,
    },

    /// A second object used an existing designation and was ignored.
    DuplicateDesignation {
        /// The repeated designation
        designation: String,
    },

    /// A second object used an existing name and is not indexed by name.
    DuplicateName {
        /// The repeated name
        name: String,
        /// Designation of the object that keeps the name
        kept: String,
        /// Designation of the object left out of the name index
        ignored: String,
    },
}

impl fmt::Display for LinkWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OrphanedApproach { designation, time } => write!(
                f,
                "close approach of unknown object '{designation}' at {time} was dropped"
            ),
            Self::DuplicateDesignation { designation } => {
                write!(f, "duplicate designation '{designation}', later object ignored")
            }
            Self::DuplicateName {
                name,
                kept,
                ignored,
            } => write!(
                f,
                "name '{name}' is used by '{kept}' and '{ignored}'; only '{kept}' is found by name"
            ),
        }
    }
}

/// Linked collection of near-Earth objects and close approaches.
#[derive(Debug, Clone, Default)]
pub struct Database {
    /// Objects in ingestion order; `NeoId` indexes this
    neos: Vec<NearEarthObject>,

    /// Linked approaches in ingestion order; `ApproachId` indexes this
    approaches: Vec<CloseApproach>,

    by_designation: HashMap<String, NeoId>,

    /// Only named objects appear here
    by_name: HashMap<String, NeoId>,

    warnings: Vec<LinkWarning>,
}

impl Database {
    /// Build a database, linking each approach to its object.
    ///
    /// Objects and approaches keep the order given. See the module
    /// documentation for how orphans and duplicates are handled; every
    /// such case is available afterwards through [`Database::warnings`].
    ///
    /// # Examples
    ///
    /// ```
    /// use neodb::database::Database;
    /// use neodb::domain::{NearEarthObject, NewCloseApproach};
    ///
    /// let eros = NearEarthObject::new("433", Some("Eros".to_string()), Some(16.84), false);
    /// let approach = NewCloseApproach {
    ///     designation: "433".to_string(),
    ///     time: "1900-12-27 01:30".parse()?,
    ///     distance: 0.314,
    ///     velocity: 5.56,
    /// };
    ///
    /// let db = Database::new([eros], [approach]);
    /// let neo = db.get_neo_by_name("Eros").expect("indexed by name");
    /// assert_eq!(db.approaches_of(neo).count(), 1);
    /// assert!(db.get_neo_by_designation("99942").is_none());
    /// # Ok::<(), neodb::error::Error>(())
    /// ```
    pub fn new<N, A>(neos: N, approaches: A) -> Self
    where
        N: IntoIterator<Item = NearEarthObject>,
        A: IntoIterator<Item = NewCloseApproach>,
    {
        let mut db = Self::default();

        for mut neo in neos {
            if db.by_designation.contains_key(&neo.designation) {
                db.warn(LinkWarning::DuplicateDesignation {
                    designation: neo.designation,
                });
                continue;
            }

            let id = NeoId(db.neos.len());
            neo.clear_approaches();
            db.by_designation.insert(neo.designation.clone(), id);

            if let Some(name) = neo.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
                if let Some(&existing) = db.by_name.get(name) {
                    let warning = LinkWarning::DuplicateName {
                        name: name.to_string(),
                        kept: db.neos[existing.0].designation.clone(),
                        ignored: neo.designation.clone(),
                    };
                    db.warn(warning);
                } else {
                    db.by_name.insert(name.to_string(), id);
                }
            }

            db.neos.push(neo);
        }

        for approach in approaches {
            let Some(&neo_id) = db.by_designation.get(&approach.designation) else {
                db.warn(LinkWarning::OrphanedApproach {
                    designation: approach.designation,
                    time: approach.time,
                });
                continue;
            };

            let id = ApproachId(db.approaches.len());
            db.neos[neo_id.0].attach(id);
            db.approaches.push(CloseApproach::link(approach, neo_id));
        }

        tracing::debug!(
            neos = db.neos.len(),
            approaches = db.approaches.len(),
            warnings = db.warnings.len(),
            "Linked database"
        );

        db
    }

    fn warn(&mut self, warning: LinkWarning) {
        tracing::warn!("{warning}");
        self.warnings.push(warning);
    }

    /// Find an object by its exact designation.
    ///
    /// Returns `None` when no object has that designation.
    #[must_use]
    pub fn get_neo_by_designation(&self, designation: &str) -> Option<&NearEarthObject> {
        self.by_designation
            .get(designation)
            .map(|id| &self.neos[id.0])
    }

    /// Find an object by its exact, case-sensitive name.
    ///
    /// Unnamed objects are never found this way.
    #[must_use]
    pub fn get_neo_by_name(&self, name: &str) -> Option<&NearEarthObject> {
        self.by_name.get(name).map(|id| &self.neos[id.0])
    }

    /// Look up an object by id.
    #[must_use]
    pub fn neo(&self, id: NeoId) -> Option<&NearEarthObject> {
        self.neos.get(id.0)
    }

    /// Look up an approach by id, together with its object.
    #[must_use]
    pub fn approach(&self, id: ApproachId) -> Option<Approach<'_>> {
        self.approach_at(id.0)
    }

    /// All objects, in ingestion order.
    #[must_use]
    pub fn neos(&self) -> &[NearEarthObject] {
        &self.neos
    }

    /// All linked approaches with their objects, in ingestion order.
    pub fn approaches(&self) -> impl ExactSizeIterator<Item = Approach<'_>> + '_ {
        self.approaches
            .iter()
            .map(|approach| Approach::new(approach, &self.neos[approach.neo_id().0]))
    }

    /// The approaches of one object, in ingestion order.
    ///
    /// Objects from another database yield only ids that exist here.
    pub fn approaches_of<'a>(
        &'a self,
        neo: &'a NearEarthObject,
    ) -> impl Iterator<Item = Approach<'a>> + 'a {
        neo.approach_ids()
            .iter()
            .filter_map(move |&id| self.approach(id))
    }

    /// Lazily yield the approaches matching `predicate`, in ingestion order.
    ///
    /// Nothing is evaluated until the returned iterator is advanced, and
    /// each call to `next` tests approaches only until the next match.
    pub fn query<'a, P>(&'a self, predicate: &'a P) -> Matches<'a, P>
    where
        P: Predicate + ?Sized,
    {
        Matches::new(self, predicate)
    }

    /// Number of objects.
    #[must_use]
    pub fn neo_count(&self) -> usize {
        self.neos.len()
    }

    /// Number of linked approaches.
    #[must_use]
    pub fn approach_count(&self) -> usize {
        self.approaches.len()
    }

    /// Data problems found while linking, in the order they were found.
    #[must_use]
    pub fn warnings(&self) -> &[LinkWarning] {
        &self.warnings
    }

    pub(crate) fn approach_at(&self, index: usize) -> Option<Approach<'_>> {
        self.approaches
            .get(index)
            .map(|approach| Approach::new(approach, &self.neos[approach.neo_id().0]))
    }
}
