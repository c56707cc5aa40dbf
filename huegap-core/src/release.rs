//! Release membership lookups used to synthesise release edges.

use std::collections::{BTreeMap, BTreeSet};

use crate::edge::{CandidateId, ReleaseId};

/// Which release each candidate belongs to, and which candidates each release
/// contains.
///
/// Both views are maintained together so they can never disagree.
///
/// # Examples
/// ```
/// use huegap_core::ReleaseMembership;
///
/// let releases: ReleaseMembership = [("a", "r1"), ("b", "r1"), ("c", "r2")]
///     .into_iter()
///     .collect();
/// assert_eq!(releases.members(&"r1".into()).count(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReleaseMembership {
    memberships: BTreeSet<(CandidateId, ReleaseId)>,
    members: BTreeMap<ReleaseId, BTreeSet<CandidateId>>,
}

impl ReleaseMembership {
    /// Creates an empty membership table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `candidate` ships in `release`.
    ///
    /// Returns `false` if the pair was already known.
    pub fn insert(&mut self, candidate: CandidateId, release: ReleaseId) -> bool {
        if !self
            .memberships
            .insert((candidate.clone(), release.clone()))
        {
            return false;
        }
        self.members.entry(release).or_default().insert(candidate);
        true
    }

    /// Iterates `(candidate, release)` pairs in ascending order.
    pub fn memberships(&self) -> impl Iterator<Item = (&CandidateId, &ReleaseId)> {
        self.memberships
            .iter()
            .map(|(candidate, release)| (candidate, release))
    }

    /// Iterates the candidates belonging to `release`.
    pub fn members(&self, release: &ReleaseId) -> impl Iterator<Item = &CandidateId> {
        self.members.get(release).into_iter().flatten()
    }

    /// Number of `(candidate, release)` pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.memberships.len()
    }

    /// Returns whether no memberships are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.memberships.is_empty()
    }
}

impl<C, R> FromIterator<(C, R)> for ReleaseMembership
where
    C: Into<CandidateId>,
    R: Into<ReleaseId>,
{
    fn from_iter<T: IntoIterator<Item = (C, R)>>(iter: T) -> Self {
        let mut membership = Self::new();
        for (candidate, release) in iter {
            membership.insert(candidate.into(), release.into());
        }
        membership
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_keeps_both_views_in_sync() {
        let mut releases = ReleaseMembership::new();
        assert!(releases.insert("a".into(), "r1".into()));
        assert!(releases.insert("b".into(), "r1".into()));
        assert!(!releases.insert("a".into(), "r1".into()));

        assert_eq!(releases.len(), 2);
        let members: Vec<&str> = releases
            .members(&"r1".into())
            .map(CandidateId::as_str)
            .collect();
        assert_eq!(members, vec!["a", "b"]);
    }

    #[test]
    fn unknown_release_has_no_members() {
        let releases = ReleaseMembership::new();
        assert!(releases.is_empty());
        assert_eq!(releases.members(&"missing".into()).count(), 0);
    }

    #[test]
    fn candidate_may_ship_in_several_releases() {
        let releases: ReleaseMembership = [("a", "r1"), ("a", "r2")].into_iter().collect();
        let pairs: Vec<(&str, &str)> = releases
            .memberships()
            .map(|(c, r)| (c.as_str(), r.as_str()))
            .collect();
        assert_eq!(pairs, vec![("a", "r1"), ("a", "r2")]);
    }
}
