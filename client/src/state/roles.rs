//! Portal roles and the canonical Role→Route table.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every guarded dashboard, the login select, and the session store resolve
//! role strings through this module, so there is exactly one spelling per
//! role and one route per role.

#[cfg(test)]
#[path = "roles_test.rs"]
mod roles_test;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Public landing route; also the destination for unknown roles.
pub const HOME_ROUTE: &str = "/";

/// Canonical dashboard route for every role.
pub const ROLE_ROUTES: [(Role, &str); 5] = [
    (Role::SuperAdmin, "/dashboard/superadmin"),
    (Role::Contributor, "/dashboard/contributor"),
    (Role::Annotator, "/dashboard/annotator"),
    (Role::Researcher, "/dashboard/researcher"),
    (Role::EthicsOfficer, "/dashboard/ethicsofficer"),
];

/// Spelling written by older builds for `ethics-officer`. Accepted, never emitted.
const LEGACY_ETHICS_OFFICER: &str = "ethicsofficer";

/// Access role. Exactly one per user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    SuperAdmin,
    Contributor,
    Annotator,
    Researcher,
    EthicsOfficer,
}

/// One entry in a role's dashboard navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub title: &'static str,
    pub href: &'static str,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::SuperAdmin,
        Role::Contributor,
        Role::Annotator,
        Role::Researcher,
        Role::EthicsOfficer,
    ];

    /// Wire spelling, as persisted and sent to the auth endpoint.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::SuperAdmin => "super-admin",
            Role::Contributor => "contributor",
            Role::Annotator => "annotator",
            Role::Researcher => "researcher",
            Role::EthicsOfficer => "ethics-officer",
        }
    }

    /// Parse a wire role string. Unknown strings yield `None`.
    pub fn parse(raw: &str) -> Option<Role> {
        if raw == LEGACY_ETHICS_OFFICER {
            return Some(Role::EthicsOfficer);
        }
        Role::ALL.into_iter().find(|role| role.as_str() == raw)
    }

    /// Dashboard route owned by this role.
    pub fn route(self) -> &'static str {
        ROLE_ROUTES
            .iter()
            .find(|(role, _)| *role == self)
            .map_or(HOME_ROUTE, |(_, route)| *route)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Role::SuperAdmin => "Super Admin",
            Role::Contributor => "Contributor",
            Role::Annotator => "Annotator",
            Role::Researcher => "Researcher",
            Role::EthicsOfficer => "Ethics Officer",
        }
    }

    /// Label shown in the login role select.
    pub fn login_label(self) -> &'static str {
        match self {
            Role::SuperAdmin => "Super Admin (NCIR/Algorizmi)",
            Role::Contributor => "Contributor (Hospital/Clinic)",
            Role::Annotator => "Annotator (Medical Expert)",
            Role::Researcher => "Researcher (Academic/Industry)",
            Role::EthicsOfficer => "Ethics Officer (Audit)",
        }
    }

    /// Badge modifier class for the dashboard header.
    pub fn badge_class(self) -> &'static str {
        match self {
            Role::SuperAdmin => "role-badge role-badge--red",
            Role::Contributor => "role-badge role-badge--blue",
            Role::Annotator => "role-badge role-badge--green",
            Role::Researcher => "role-badge role-badge--purple",
            Role::EthicsOfficer => "role-badge role-badge--orange",
        }
    }

    /// Placeholder text shown while a guarded view waits for a session.
    pub fn loading_message(self) -> &'static str {
        match self {
            Role::SuperAdmin => "Loading administration console…",
            Role::Contributor => "Loading contributor workspace…",
            Role::Annotator => "Loading annotator workspace…",
            Role::Researcher => "Loading researcher portal…",
            Role::EthicsOfficer => "Loading ethics & compliance workspace…",
        }
    }

    pub fn nav_items(self) -> &'static [NavItem] {
        match self {
            Role::SuperAdmin => &[
                NavItem { title: "Overview", href: "/dashboard/superadmin" },
                NavItem { title: "Analytics", href: "/dashboard/superadmin/analytics" },
                NavItem { title: "Users", href: "/dashboard/superadmin/users" },
                NavItem { title: "Settings", href: "/dashboard/superadmin/settings" },
            ],
            Role::Contributor => &[
                NavItem { title: "Overview", href: "/dashboard/contributor" },
                NavItem { title: "Upload", href: "/dashboard/contributor/upload" },
                NavItem { title: "My Submissions", href: "/dashboard/contributor/submissions" },
            ],
            Role::Annotator => &[
                NavItem { title: "Overview", href: "/dashboard/annotator" },
                NavItem { title: "Annotate", href: "/dashboard/annotator/queue" },
                NavItem { title: "Review", href: "/dashboard/annotator/review" },
            ],
            Role::Researcher => &[
                NavItem { title: "Overview", href: "/dashboard/researcher" },
                NavItem { title: "Datasets", href: "/dashboard/researcher/datasets" },
                NavItem { title: "Requests", href: "/dashboard/researcher/requests" },
            ],
            Role::EthicsOfficer => &[
                NavItem { title: "Overview", href: "/dashboard/ethicsofficer" },
                NavItem { title: "Audits", href: "/dashboard/ethicsofficer/audits" },
                NavItem { title: "Compliance", href: "/dashboard/ethicsofficer/compliance" },
            ],
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error as _;

        let raw = String::deserialize(deserializer)?;
        Role::parse(&raw).ok_or_else(|| D::Error::custom(format!("unknown role: {raw}")))
    }
}

/// Resolve any role string to its dashboard route, falling back to `/`.
pub fn route_for_role(raw: &str) -> &'static str {
    Role::parse(raw).map_or(HOME_ROUTE, Role::route)
}

/// Display name for a role string; `"User"` when unrecognized.
pub fn display_name_for(raw: &str) -> &'static str {
    Role::parse(raw).map_or("User", Role::display_name)
}
