//! Borrowed view of a close approach together with its object.

use crate::domain::{CloseApproach, NearEarthObject};
use std::fmt;
use std::ops::Deref;

/// A close approach paired with the object that makes it.
///
/// Views are handed out by the [`Database`](super::Database); they borrow
/// from it and are cheap to copy. Field access goes through to the
/// [`CloseApproach`]:
///
/// ```
/// use neodb::database::Database;
/// use neodb::domain::{NearEarthObject, NewCloseApproach};
///
/// let db = Database::new(
///     [NearEarthObject::new("433", Some("Eros".to_string()), None, false)],
///     [NewCloseApproach {
///         designation: "433".to_string(),
///         time: "1900-12-27 01:30".parse()?,
///         distance: 0.314,
///         velocity: 5.56,
///     }],
/// );
///
/// let approach = db.approaches().next().expect("one approach");
/// assert_eq!(approach.distance, 0.314);
/// assert_eq!(approach.neo().full_name(), "433 (Eros)");
/// # Ok::<(), neodb::error::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Approach<'db> {
    approach: &'db CloseApproach,
    neo: &'db NearEarthObject,
}

impl<'db> Approach<'db> {
    pub(crate) fn new(approach: &'db CloseApproach, neo: &'db NearEarthObject) -> Self {
        Self { approach, neo }
    }

    /// The linked object.
    #[must_use]
    pub fn neo(&self) -> &'db NearEarthObject {
        self.neo
    }

    /// The underlying close approach.
    #[must_use]
    pub fn approach(&self) -> &'db CloseApproach {
        self.approach
    }

    /// The `Display` sentence, with `name` in place of the object's full name.
    #[must_use]
    pub fn summary<'a>(&'a self, name: &'a str) -> ApproachSummary<'a> {
        ApproachSummary {
            approach: self.approach,
            name,
        }
    }
}

/// One-line summary of an approach with the object's name rendered as given.
///
/// Returned by [`Approach::summary`].
#[derive(Debug, Clone, Copy)]
pub struct ApproachSummary<'a> {
    approach: &'a CloseApproach,
    name: &'a str,
}

impl fmt::Display for ApproachSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "On {}, '{}' approaches Earth at a distance of {:.2} au and a velocity of {:.2} km/s.",
            self.approach.time, self.name, self.approach.distance, self.approach.velocity
        )
    }
}

impl Deref for Approach<'_> {
    type Target = CloseApproach;

    fn deref(&self) -> &Self::Target {
        self.approach
    }
}

impl fmt::Display for Approach<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary(&self.neo.full_name()))
    }
}
