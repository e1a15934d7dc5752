use std::path::{Path, PathBuf};

/// A named group of translation directories selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetGroup {
    Backend,
    Keycloak,
}

/// One directory to check, relative to the working root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetDir {
    /// Human-readable name used in the report banners
    pub label: &'static str,
    pub relative_path: &'static str,
}

impl TargetDir {
    pub fn resolve(&self, root: &Path) -> PathBuf {
        root.join(self.relative_path)
    }
}

impl TargetGroup {
    /// Parse the positional group argument. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "backend" => Some(Self::Backend),
            "keycloak" => Some(Self::Keycloak),
            _ => None,
        }
    }

    pub fn directories(self) -> Vec<TargetDir> {
        match self {
            Self::Backend => vec![TargetDir {
                label: "backend",
                relative_path: "../backend/src/main/resources/",
            }],
            Self::Keycloak => vec![
                TargetDir {
                    label: "Keycloak email",
                    relative_path: "../keycloak/themes/caseform-email/email/messages/",
                },
                TargetDir {
                    label: "Keycloak login",
                    relative_path: "../keycloak/themes/caseform-login/login/messages/",
                },
            ],
        }
    }
}
