//! Ability sets: what one identity may do, derived from its permission ids.
//!
//! Grants and denials are kept as per-subject action masks, the wildcard
//! subject under its own key. A check consults the subject and the wildcard,
//! and `manage` satisfies any action. Denials always win.

use std::collections::HashMap;

use tracing::debug;

use crate::caps::{Action, Capability, Subject};
use crate::catalog::{PermissionCatalog, PermissionId};
use crate::constants::MANAGE;

/// Immutable capability set for one authorization context
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AbilitySet {
    granted: HashMap<Subject, u8>,
    denied: HashMap<Subject, u8>,
}

impl AbilitySet {
    /// Set that cannot manage all, i.e. can do nothing
    pub fn deny_all() -> Self {
        let mut b = AbilityBuilder::new();
        b.cannot(Action::Manage, Subject::All);
        b.build()
    }

    /// Granted `(action, subject)` or `(manage, subject)` or `(action, all)`
    /// or `(manage, all)`, and no matching denial.
    pub fn can(&self, action: Action, subject: Subject) -> bool {
        covers(&self.granted, action, subject) && !covers(&self.denied, action, subject)
    }

    #[inline]
    pub fn cannot(&self, action: Action, subject: Subject) -> bool {
        !self.can(action, subject)
    }

    #[inline]
    pub fn allows(&self, capability: Capability) -> bool {
        self.can(capability.action, capability.subject)
    }

    /// Actions this set allows on `subject`
    pub fn actions_on(&self, subject: Subject) -> Vec<Action> {
        Action::ALL.into_iter().filter(|a| self.can(*a, subject)).collect()
    }

    /// Explicit grants, sorted
    pub fn grants(&self) -> Vec<Capability> {
        rules(&self.granted)
    }

    /// Explicit denials, sorted
    pub fn denials(&self) -> Vec<Capability> {
        rules(&self.denied)
    }

    /// True when nothing was granted
    pub fn is_empty(&self) -> bool {
        self.granted.values().all(|m| *m == 0)
    }
}

/// Accumulates rules before freezing them into an [`AbilitySet`]
#[derive(Debug, Default)]
pub struct AbilityBuilder {
    set: AbilitySet,
}

impl AbilityBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn can(&mut self, action: Action, subject: Subject) -> &mut Self {
        *self.set.granted.entry(subject).or_insert(0) |= action.bit();
        self
    }

    pub fn cannot(&mut self, action: Action, subject: Subject) -> &mut Self {
        *self.set.denied.entry(subject).or_insert(0) |= action.bit();
        self
    }

    pub fn grant(&mut self, capability: Capability) -> &mut Self {
        self.can(capability.action, capability.subject)
    }

    pub fn build(self) -> AbilitySet {
        self.set
    }
}

/// Build the ability set for an identity.
///
/// `None` means "no session" and yields the deny-all set. Ids the catalog
/// does not know are skipped; they never grant and never fail the build.
pub fn build(held: Option<&[PermissionId]>, catalog: &PermissionCatalog) -> AbilitySet {
    let Some(ids) = held else {
        debug!("no session, denying all");
        return AbilitySet::deny_all();
    };

    let mut b = AbilityBuilder::new();
    let mut skipped = 0usize;
    for id in ids {
        match catalog.resolve(*id) {
            Some(cap) => {
                b.grant(cap);
            }
            None => {
                skipped += 1;
                debug!(permission_id = *id, "unknown permission id ignored");
            }
        }
    }
    let set = b.build();
    debug!(held = ids.len(), skipped, grants = set.granted.len(), "ability set built");
    set
}

#[inline]
fn covers(masks: &HashMap<Subject, u8>, action: Action, subject: Subject) -> bool {
    let need = action.bit() | MANAGE;
    let hit = |s: Subject| masks.get(&s).is_some_and(|m| m & need != 0);
    hit(subject) || hit(Subject::All)
}

fn rules(masks: &HashMap<Subject, u8>) -> Vec<Capability> {
    let mut out: Vec<Capability> = masks
        .iter()
        .flat_map(|(s, m)| {
            Action::ALL
                .into_iter()
                .filter(move |a| m & a.bit() != 0)
                .map(move |a| Capability::new(a, *s))
        })
        .collect();
    out.sort();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_denies() {
        let a = AbilitySet::default();
        assert!(a.is_empty());
        assert!(!a.can(Action::Read, Subject::User));
        assert!(a.actions_on(Subject::User).is_empty());
    }

    #[test]
    fn builder_grants_and_denies() {
        let mut b = AbilityBuilder::new();
        b.can(Action::Manage, Subject::Projects).cannot(Action::Delete, Subject::Projects);
        let a = b.build();
        assert!(a.can(Action::Read, Subject::Projects));
        assert!(a.can(Action::Update, Subject::Projects));
        assert!(!a.can(Action::Delete, Subject::Projects));
        assert_eq!(a.grants(), vec![Capability::manage(Subject::Projects)]);
        assert_eq!(a.denials(), vec![Capability::new(Action::Delete, Subject::Projects)]);
    }

    #[test]
    fn deny_all_beats_grants() {
        let mut b = AbilityBuilder::new();
        b.can(Action::Manage, Subject::All).cannot(Action::Manage, Subject::All);
        let a = b.build();
        assert!(!a.can(Action::Read, Subject::User));
        assert!(!a.can(Action::Manage, Subject::All));
    }

    #[test]
    fn read_does_not_imply_manage() {
        let mut b = AbilityBuilder::new();
        b.can(Action::Read, Subject::User);
        let a = b.build();
        assert!(a.can(Action::Read, Subject::User));
        assert!(!a.can(Action::Manage, Subject::User));
        assert!(!a.can(Action::Create, Subject::User));
    }
}
