//! Guard boundary
//!
//! Enforcement primitives consumed by the presentation layer:
//!
//! - [`PermissionGate`] decides whether a guarded block renders, with a
//!   caller-supplied fallback for the negative case.
//! - [`Guarded`] wraps a unit of behavior so that it only runs when the
//!   granted set satisfies its [`Requirement`]. When permitted the inner
//!   function is called unchanged; when denied it is never called.
//!
//! Both are stateless: the granted set is passed in on every call.

use std::future::Future;

use tracing::debug;

use crate::query::Requirement;
use crate::types::PermissionSet;

/// Conditional gate for rendering or executing a guarded block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionGate {
    requirement: Requirement,
}

impl PermissionGate {
    /// Gate on a permission, or on a requirement built with
    /// [`Requirement::any`] / [`Requirement::all`]
    pub fn new(requirement: impl Into<Requirement>) -> Self {
        Self {
            requirement: requirement.into(),
        }
    }

    /// The gate's requirement
    pub fn requirement(&self) -> &Requirement {
        &self.requirement
    }

    /// Whether `granted` passes the gate
    pub fn allows(&self, granted: &PermissionSet) -> bool {
        self.requirement.is_satisfied_by(granted)
    }

    /// Produce `content` when allowed, `fallback` otherwise.
    ///
    /// Only the chosen closure runs.
    pub fn render<T>(
        &self,
        granted: &PermissionSet,
        content: impl FnOnce() -> T,
        fallback: impl FnOnce() -> T,
    ) -> T {
        if self.allows(granted) {
            content()
        } else {
            debug!(requirement = ?self.requirement, "permission gate closed, rendering fallback");
            fallback()
        }
    }

    /// Produce `content` when allowed, `T::default()` otherwise
    pub fn render_or_default<T: Default>(&self, granted: &PermissionSet, content: impl FnOnce() -> T) -> T {
        self.render(granted, content, T::default)
    }
}

/// Result of invoking a [`Guarded`] unit
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum GuardOutcome<T> {
    /// The requirement held and the inner unit ran
    Permitted(T),
    /// The requirement failed; nothing ran
    Denied,
}

impl<T> GuardOutcome<T> {
    /// Whether the inner unit ran
    pub fn is_permitted(&self) -> bool {
        matches!(self, GuardOutcome::Permitted(_))
    }

    /// Whether the call was denied
    pub fn is_denied(&self) -> bool {
        matches!(self, GuardOutcome::Denied)
    }

    /// The inner result, if permitted
    pub fn into_option(self) -> Option<T> {
        match self {
            GuardOutcome::Permitted(value) => Some(value),
            GuardOutcome::Denied => None,
        }
    }

    /// Map the permitted value
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> GuardOutcome<U> {
        match self {
            GuardOutcome::Permitted(value) => GuardOutcome::Permitted(f(value)),
            GuardOutcome::Denied => GuardOutcome::Denied,
        }
    }
}

/// A unit of behavior wrapped behind a permission requirement
#[derive(Debug, Clone)]
pub struct Guarded<F> {
    requirement: Requirement,
    inner: F,
}

/// Wrap `inner` so it only runs when its requirement is satisfied
pub fn with_permission<F>(inner: F, requirement: impl Into<Requirement>) -> Guarded<F> {
    Guarded::new(inner, requirement)
}

impl<F> Guarded<F> {
    /// Wrap `inner` behind `requirement`
    pub fn new(inner: F, requirement: impl Into<Requirement>) -> Self {
        Self {
            requirement: requirement.into(),
            inner,
        }
    }

    /// The wrapper's requirement
    pub fn requirement(&self) -> &Requirement {
        &self.requirement
    }

    /// Unwrap, returning the wrapped unit
    pub fn into_inner(self) -> F {
        self.inner
    }

    fn permits(&self, granted: &PermissionSet) -> bool {
        let allowed = self.requirement.is_satisfied_by(granted);
        if !allowed {
            debug!(requirement = ?self.requirement, "guarded call denied");
        }
        allowed
    }

    /// Invoke the inner unit with `input` if permitted
    pub fn call<I, O>(&self, granted: &PermissionSet, input: I) -> GuardOutcome<O>
    where
        F: Fn(I) -> O,
    {
        if self.permits(granted) {
            GuardOutcome::Permitted((self.inner)(input))
        } else {
            GuardOutcome::Denied
        }
    }

    /// Invoke an inner unit that needs mutable state
    pub fn call_mut<I, O>(&mut self, granted: &PermissionSet, input: I) -> GuardOutcome<O>
    where
        F: FnMut(I) -> O,
    {
        if self.permits(granted) {
            GuardOutcome::Permitted((self.inner)(input))
        } else {
            GuardOutcome::Denied
        }
    }

    /// Invoke an async inner unit if permitted.
    ///
    /// When denied the inner function is not called, so no future is created.
    pub async fn call_async<I, Fut>(&self, granted: &PermissionSet, input: I) -> GuardOutcome<Fut::Output>
    where
        F: Fn(I) -> Fut,
        Fut: Future,
    {
        if self.permits(granted) {
            GuardOutcome::Permitted((self.inner)(input).await)
        } else {
            GuardOutcome::Denied
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Permission;
    use std::cell::Cell;

    fn granted() -> PermissionSet {
        PermissionSet::from([Permission::UploadContent, Permission::LoginSso])
    }

    #[test]
    fn test_gate_renders_content_or_fallback() {
        let gate = PermissionGate::new(Permission::UploadContent);
        assert_eq!(gate.render(&granted(), || "upload form", || "hidden"), "upload form");

        let gate = PermissionGate::new(Permission::ManageUsers);
        assert_eq!(gate.render(&granted(), || "user admin", || "hidden"), "hidden");
        assert_eq!(gate.render_or_default(&granted(), || Some("user admin")), None);
    }

    #[test]
    fn test_gate_only_runs_chosen_branch() {
        let content_runs = Cell::new(0);
        let gate = PermissionGate::new(Permission::ManageUsers);

        gate.render(&granted(), || content_runs.set(content_runs.get() + 1), || ());
        assert_eq!(content_runs.get(), 0);
    }

    #[test]
    fn test_gate_modes() {
        let any = PermissionGate::new(Requirement::any([Permission::ManageUsers, Permission::LoginSso]));
        let all = PermissionGate::new(Requirement::all([Permission::ManageUsers, Permission::LoginSso]));
        assert!(any.allows(&granted()));
        assert!(!all.allows(&granted()));
    }

    #[test]
    fn test_wrapped_call_delegates_unchanged() {
        let double = with_permission(|x: i32| x * 2, Permission::UploadContent);
        assert_eq!(double.call(&granted(), 21), GuardOutcome::Permitted(42));
        assert_eq!((double.into_inner())(21), 42);
    }

    #[test]
    fn test_denied_call_has_no_side_effects() {
        let calls = Cell::new(0);
        let handler = with_permission(
            |_: ()| calls.set(calls.get() + 1),
            Permission::ManageUsers,
        );

        let outcome = handler.call(&granted(), ());
        assert!(outcome.is_denied());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_call_mut() {
        let mut log = Vec::new();
        {
            let mut handler = with_permission(|entry: &str| log.push(entry.to_string()), Permission::LoginSso);
            assert!(handler.call_mut(&granted(), "first").is_permitted());
            assert!(handler.call_mut(&PermissionSet::new(), "second").is_denied());
        }
        assert_eq!(log, vec!["first".to_string()]);
    }

    #[test]
    fn test_outcome_helpers() {
        assert_eq!(GuardOutcome::Permitted(2).map(|v| v + 1).into_option(), Some(3));
        assert_eq!(GuardOutcome::<i32>::Denied.into_option(), None);
    }
}
