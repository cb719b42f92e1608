//! Discrepancy reports
//!
//! A check returns a [`Report`]: the ordered list of objects that failed it.
//! An empty report means every inspected object passed.

use serde::{Deserialize, Serialize};

use super::{ComponentRef, ObjectRef};

/// One failing object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discrepancy {
    /// The object that failed
    pub object: ObjectRef,

    /// Human-readable reason
    pub message: String,

    /// Sub-elements implicated in the failure (e.g. specific faces)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<ComponentRef>>,
}

impl Discrepancy {
    /// Create a discrepancy for a whole object
    #[must_use]
    pub fn new(object: ObjectRef, message: impl Into<String>) -> Self {
        Self {
            object,
            message: message.into(),
            components: None,
        }
    }

    /// Attach the implicated sub-elements
    #[must_use]
    pub fn with_components(mut self, components: Vec<ComponentRef>) -> Self {
        self.components = Some(components);
        self
    }

    /// Names to hand to the host selection for this failure
    ///
    /// The implicated components when there are any, otherwise the object itself.
    #[must_use]
    pub fn selection_targets(&self) -> Vec<String> {
        match &self.components {
            Some(components) if !components.is_empty() => {
                components.iter().map(|c| c.as_str().to_string()).collect()
            },
            _ => vec![self.object.as_str().to_string()],
        }
    }
}

/// Ordered discrepancies produced by one check over one object set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Report {
    entries: Vec<Discrepancy>,
}

impl Report {
    /// Create an empty (passing) report
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a discrepancy
    pub fn push(&mut self, entry: Discrepancy) {
        self.entries.push(entry);
    }

    /// True when every inspected object passed
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of failing objects
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Same as [`Report::is_clean`]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All discrepancies in report order
    #[must_use]
    pub fn entries(&self) -> &[Discrepancy] {
        &self.entries
    }

    /// Iterate over the discrepancies
    pub fn iter(&self) -> std::slice::Iter<'_, Discrepancy> {
        self.entries.iter()
    }

    /// The discrepancy recorded for an object, if it failed
    #[must_use]
    pub fn find(&self, object: &ObjectRef) -> Option<&Discrepancy> {
        self.entries.iter().find(|d| &d.object == object)
    }

    /// Every node the host should select to show all failures
    #[must_use]
    pub fn selection_targets(&self) -> Vec<String> {
        self.entries.iter().flat_map(Discrepancy::selection_targets).collect()
    }
}

impl<'a> IntoIterator for &'a Report {
    type Item = &'a Discrepancy;
    type IntoIter = std::slice::Iter<'a, Discrepancy>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<Discrepancy> for Report {
    fn from_iter<I: IntoIterator<Item = Discrepancy>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
