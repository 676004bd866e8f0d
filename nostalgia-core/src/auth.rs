use std::fmt;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("a password is required")]
    Missing,
    #[error("incorrect password")]
    Rejected,
}

/// Password check run before any journal command.
///
/// Plain string equality against the configured credential. With no credential
/// configured the gate is open.
#[derive(Clone, Default)]
pub struct Gate {
    credential: Option<String>,
}

impl Gate {
    pub fn new(credential: Option<String>) -> Self {
        Self {
            credential: credential.filter(|c| !c.is_empty()),
        }
    }

    pub fn is_open(&self) -> bool {
        self.credential.is_none()
    }

    pub fn check(&self, supplied: Option<&str>) -> Result<(), AuthError> {
        match (&self.credential, supplied) {
            (None, _) => Ok(()),
            (Some(_), None) => Err(AuthError::Missing),
            (Some(expected), Some(given)) if expected == given => Ok(()),
            (Some(_), Some(_)) => Err(AuthError::Rejected),
        }
    }
}

impl fmt::Debug for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gate")
            .field("open", &self.is_open())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_gate_accepts_anything() {
        let gate = Gate::new(None);
        assert!(gate.is_open());
        assert_eq!(gate.check(None), Ok(()));
        assert_eq!(gate.check(Some("whatever")), Ok(()));
    }

    #[test]
    fn empty_credential_means_open() {
        assert!(Gate::new(Some(String::new())).is_open());
    }

    #[test]
    fn closed_gate_requires_exact_match() {
        let gate = Gate::new(Some("hunter2".to_string()));
        assert_eq!(gate.check(Some("hunter2")), Ok(()));
        assert_eq!(gate.check(Some("Hunter2")), Err(AuthError::Rejected));
        assert_eq!(gate.check(Some("hunter2 ")), Err(AuthError::Rejected));
        assert_eq!(gate.check(None), Err(AuthError::Missing));
    }

    #[test]
    fn debug_does_not_leak_credential() {
        let gate = Gate::new(Some("hunter2".to_string()));
        assert!(!format!("{gate:?}").contains("hunter2"));
    }
}
