//! Route guard decision for protected pages.

use super::Session;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session restoration has not finished; show a loading indicator.
    Pending,
    /// Resolved with no session.
    RedirectToLogin,
    Allow,
}

pub fn decide(restored: bool, session: Option<&Session>) -> GuardDecision {
    match (restored, session) {
        (false, _) => GuardDecision::Pending,
        (true, None) => GuardDecision::RedirectToLogin,
        (true, Some(_)) => GuardDecision::Allow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_until_restored() {
        let session = Session::for_email("a@b.com", None);
        assert_eq!(decide(false, None), GuardDecision::Pending);
        assert_eq!(decide(false, Some(&session)), GuardDecision::Pending);
    }

    #[test]
    fn resolved_decisions() {
        let session = Session::for_email("a@b.com", None);
        assert_eq!(decide(true, None), GuardDecision::RedirectToLogin);
        assert_eq!(decide(true, Some(&session)), GuardDecision::Allow);
    }
}
