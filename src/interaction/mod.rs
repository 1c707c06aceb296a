//! Selection state consumed by interaction-driven guides.
//!
//! Selections are captured elsewhere (pointer/gesture handling); guides only
//! read the latest snapshot and never mutate it.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use kurbo::Point;
use smallvec::SmallVec;

/// Pointer/gesture history backing one named selection.
///
/// Event points are canvas positions in recording order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selector {
    event_points: SmallVec<[Point; 4]>,
}

impl Selector {
    #[must_use]
    pub fn new(event_points: impl IntoIterator<Item = Point>) -> Self {
        Self {
            event_points: event_points.into_iter().collect(),
        }
    }

    /// Selector holding one recorded point, the common tap/hover case.
    #[must_use]
    pub fn at(point: Point) -> Self {
        Self::new([point])
    }

    pub fn record(&mut self, point: Point) {
        self.event_points.push(point);
    }

    #[must_use]
    pub fn event_points(&self) -> &[Point] {
        &self.event_points
    }

    /// Current pointer position in canvas space.
    #[must_use]
    pub fn last_point(&self) -> Option<Point> {
        self.event_points.last().copied()
    }
}

/// Snapshot of every active selection.
///
/// Either map may be absent, which means no selection is active at all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    selectors: Option<IndexMap<String, Selector>>,
    selects: Option<IndexMap<String, BTreeSet<usize>>>,
}

impl SelectionState {
    #[must_use]
    pub fn new(
        selectors: Option<IndexMap<String, Selector>>,
        selects: Option<IndexMap<String, BTreeSet<usize>>>,
    ) -> Self {
        Self { selectors, selects }
    }

    /// State with no active selection.
    #[must_use]
    pub fn idle() -> Self {
        Self::default()
    }

    /// Adds (or replaces) one active selection with its selector and indices.
    #[must_use]
    pub fn with_selection(
        mut self,
        name: impl Into<String>,
        selector: Selector,
        indices: impl IntoIterator<Item = usize>,
    ) -> Self {
        let name = name.into();
        self.selectors
            .get_or_insert_with(IndexMap::new)
            .insert(name.clone(), selector);
        self.selects
            .get_or_insert_with(IndexMap::new)
            .insert(name, indices.into_iter().collect());
        self
    }

    #[must_use]
    pub fn selectors(&self) -> Option<&IndexMap<String, Selector>> {
        self.selectors.as_ref()
    }

    #[must_use]
    pub fn selects(&self) -> Option<&IndexMap<String, BTreeSet<usize>>> {
        self.selects.as_ref()
    }

    /// Names of selections that currently have a selector.
    pub fn active_selector_names(&self) -> impl Iterator<Item = &str> {
        self.selectors
            .iter()
            .flat_map(|selectors| selectors.keys().map(String::as_str))
    }

    #[must_use]
    pub fn selector(&self, name: &str) -> Option<&Selector> {
        self.selectors.as_ref()?.get(name)
    }

    #[must_use]
    pub fn selected_indices(&self, name: &str) -> Option<&BTreeSet<usize>> {
        self.selects.as_ref()?.get(name)
    }
}

/// Resolves the one active selection a guide reacts to.
///
/// `selections` of `None` or an empty set matches any active name. Returns
/// `None` when no name or more than one name qualifies; callers treat both
/// as "nothing to draw".
#[must_use]
pub fn resolve_selection<'a>(
    selections: Option<&BTreeSet<String>>,
    active_names: impl IntoIterator<Item = &'a str>,
) -> Option<&'a str> {
    let accepts = |name: &str| match selections {
        Some(set) if !set.is_empty() => set.contains(name),
        _ => true,
    };

    let mut candidates = active_names.into_iter().filter(|name| accepts(*name));
    let first = candidates.next()?;
    match candidates.next() {
        Some(_) => None,
        None => Some(first),
    }
}
