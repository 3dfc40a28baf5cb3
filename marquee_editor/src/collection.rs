// Copyright 2025 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::Point;
use marquee_geometry::{DisplayRect, NormPoint};
use marquee_shapes::Annotation;

use crate::config::CountPolicy;

/// An ordered list of shapes with an optional selection.
///
/// Besides the editable shapes the collection carries two read-only inputs
/// supplied by the host: *hints* (reference shapes that are shown but never
/// edited) and *candidates* (detected points that freshly drawn corners snap
/// to). Both are replaced wholesale.
///
/// The selection is an index into the shape list and is kept valid by every
/// mutation: removing the selected shape clears it and removing an earlier
/// shape shifts it.
#[derive(Clone, Debug)]
pub struct ShapeCollection<S> {
    shapes: Vec<S>,
    selected: Option<usize>,
    policy: CountPolicy,
    hints: Vec<S>,
    candidates: Vec<NormPoint>,
}

impl<S> Default for ShapeCollection<S> {
    fn default() -> Self {
        Self::new(CountPolicy::default())
    }
}

impl<S> ShapeCollection<S> {
    /// Creates an empty collection governed by `policy`.
    #[must_use]
    pub fn new(policy: CountPolicy) -> Self {
        Self {
            shapes: Vec::new(),
            selected: None,
            policy,
            hints: Vec::new(),
            candidates: Vec::new(),
        }
    }

    /// The eviction policy applied by [`ShapeCollection::commit`].
    #[must_use]
    pub fn policy(&self) -> CountPolicy {
        self.policy
    }

    /// Replaces the eviction policy. Existing shapes are kept until the next commit.
    pub fn set_policy(&mut self, policy: CountPolicy) {
        self.policy = policy;
    }

    /// All shapes, oldest first.
    #[must_use]
    pub fn shapes(&self) -> &[S] {
        &self.shapes
    }

    /// Number of shapes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns `true` if there are no shapes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Returns the shape at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&S> {
        self.shapes.get(index)
    }

    /// Returns the shape at `index` mutably.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut S> {
        self.shapes.get_mut(index)
    }

    /// Index of the selected shape.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The selected shape.
    #[must_use]
    pub fn selected_shape(&self) -> Option<&S> {
        self.selected.and_then(|i| self.shapes.get(i))
    }

    /// The selected shape, mutably.
    pub fn selected_shape_mut(&mut self) -> Option<&mut S> {
        self.selected.and_then(|i| self.shapes.get_mut(i))
    }

    /// Selects the shape at `index`. Returns `false` if there is no such shape.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.shapes.len() {
            self.selected = Some(index);
            true
        } else {
            false
        }
    }

    /// Clears the selection.
    pub fn unselect(&mut self) {
        self.selected = None;
    }

    /// Appends a drawn shape, evicting as the policy demands.
    ///
    /// [`CountPolicy::ExactlyOne`] pops the most recently added shape if there
    /// is one. [`CountPolicy::ExactlyTwo`] pops it only when exactly two are
    /// present, so `[A, B]` becomes `[A, C]`. At most one shape is evicted, even
    /// if merged shapes left the collection over capacity.
    /// Returns the number of shapes evicted.
    pub fn commit(&mut self, shape: S) -> usize {
        let evict = match self.policy {
            CountPolicy::Unlimited => false,
            CountPolicy::ExactlyOne => !self.shapes.is_empty(),
            CountPolicy::ExactlyTwo => self.shapes.len() == 2,
        };
        let evicted = usize::from(evict && self.pop().is_some());
        self.shapes.push(shape);
        evicted
    }

    /// Appends a shape without applying the eviction policy.
    pub fn append(&mut self, shape: S) {
        self.shapes.push(shape);
    }

    /// Removes the shape at `index`, keeping the selection pointed at the same shape.
    pub fn remove(&mut self, index: usize) -> Option<S> {
        if index >= self.shapes.len() {
            return None;
        }
        let shape = self.shapes.remove(index);
        self.selected = match self.selected {
            Some(s) if s == index => None,
            Some(s) if s > index => Some(s - 1),
            other => other,
        };
        Some(shape)
    }

    /// Removes the selected shape. No-op if nothing is selected.
    pub fn delete_selected(&mut self) -> Option<S> {
        let index = self.selected?;
        self.remove(index)
    }

    /// Removes the most recently appended shape.
    pub fn pop(&mut self) -> Option<S> {
        let last = self.shapes.len().checked_sub(1)?;
        self.remove(last)
    }

    /// Removes every shape and clears the selection. Hints and candidates are kept.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.selected = None;
    }

    /// Iterates over the shapes, oldest first.
    pub fn iter(&self) -> core::slice::Iter<'_, S> {
        self.shapes.iter()
    }

    /// Iterates mutably over the shapes, oldest first.
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, S> {
        self.shapes.iter_mut()
    }

    /// Reference shapes supplied by the host.
    #[must_use]
    pub fn hints(&self) -> &[S] {
        &self.hints
    }

    /// Replaces the reference shapes.
    pub fn set_hints(&mut self, hints: Vec<S>) {
        self.hints = hints;
    }

    /// Detected snap candidates.
    #[must_use]
    pub fn candidates(&self) -> &[NormPoint] {
        &self.candidates
    }

    /// Replaces the detected snap candidates.
    pub fn set_candidates(&mut self, candidates: Vec<NormPoint>) {
        self.candidates = candidates;
    }
}

impl<S: Annotation> ShapeCollection<S> {
    /// Returns `true` if a shape with exactly this primary and opposite corner exists.
    #[must_use]
    pub fn contains_diagonal(&self, primary: NormPoint, opposite: NormPoint) -> bool {
        self.shapes
            .iter()
            .any(|s| s.primary() == primary && s.opposite() == opposite)
    }

    /// Index of the first shape hit by display point `p` for which `accept` holds.
    pub fn hit(
        &self,
        p: Point,
        frame: &DisplayRect,
        mut accept: impl FnMut(&S) -> bool,
    ) -> Option<usize> {
        self.shapes
            .iter()
            .position(|s| accept(s) && s.contains(p, frame))
    }
}

impl<'a, S> IntoIterator for &'a ShapeCollection<S> {
    type Item = &'a S;
    type IntoIter = core::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.iter()
    }
}

#[cfg(test)]
mod tests {
    use marquee_geometry::NormPoint;
    use marquee_shapes::BoundingBox;

    use super::ShapeCollection;
    use crate::config::CountPolicy;

    fn shape(x: f64) -> BoundingBox {
        BoundingBox::new(NormPoint::new(x, 0.1), NormPoint::new(x + 0.2, 0.5))
    }

    #[test]
    fn unlimited_never_evicts() {
        let mut c = ShapeCollection::new(CountPolicy::Unlimited);
        for i in 0..5 {
            assert_eq!(c.commit(shape(f64::from(i) * 0.1)), 0);
        }
        assert_eq!(c.len(), 5);
    }

    #[test]
    fn exactly_one_replaces() {
        let mut c = ShapeCollection::new(CountPolicy::ExactlyOne);
        c.commit(shape(0.1));
        assert_eq!(c.commit(shape(0.2)), 1);
        assert_eq!(c.shapes(), &[shape(0.2)]);
    }

    #[test]
    fn exactly_two_evicts_the_newest() {
        let mut c = ShapeCollection::new(CountPolicy::ExactlyTwo);
        c.commit(shape(0.1));
        assert_eq!(c.commit(shape(0.2)), 0);
        assert_eq!(c.commit(shape(0.3)), 1);
        assert_eq!(c.shapes(), &[shape(0.1), shape(0.3)]);
    }

    #[test]
    fn appended_overflow_evicts_at_most_one() {
        let mut two = ShapeCollection::new(CountPolicy::ExactlyTwo);
        for i in 0..3 {
            two.append(shape(f64::from(i) * 0.1));
        }
        assert_eq!(two.commit(shape(0.5)), 0);
        assert_eq!(two.len(), 4);

        let mut one = ShapeCollection::new(CountPolicy::ExactlyOne);
        one.append(shape(0.1));
        one.append(shape(0.2));
        one.append(shape(0.3));
        assert_eq!(one.commit(shape(0.5)), 1);
        assert_eq!(one.shapes(), &[shape(0.1), shape(0.2), shape(0.5)]);
    }

    #[test]
    fn selection_follows_removals() {
        let mut c = ShapeCollection::new(CountPolicy::Unlimited);
        c.commit(shape(0.1));
        c.commit(shape(0.2));
        c.commit(shape(0.3));
        assert!(c.select(2));
        assert!(c.remove(0).is_some());
        assert_eq!(c.selected(), Some(1));
        assert_eq!(c.selected_shape(), Some(&shape(0.3)));
        assert!(c.pop().is_some());
        assert_eq!(c.selected(), None);
        assert!(!c.select(5));
    }

    #[test]
    fn delete_without_selection_is_a_no_op() {
        let mut c = ShapeCollection::new(CountPolicy::Unlimited);
        c.commit(shape(0.1));
        assert!(c.delete_selected().is_none());
        assert_eq!(c.len(), 1);
        assert!(c.remove(3).is_none());
    }

    #[test]
    fn dedup_lookup_matches_exact_diagonals() {
        let mut c = ShapeCollection::new(CountPolicy::Unlimited);
        c.commit(shape(0.1));
        assert!(c.contains_diagonal(NormPoint::new(0.1, 0.1), NormPoint::new(0.1 + 0.2, 0.5)));
        assert!(!c.contains_diagonal(NormPoint::new(0.1 + 0.2, 0.5), NormPoint::new(0.1, 0.1)));
    }
}
