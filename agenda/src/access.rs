//! Role-based route guarding.
//!
//! The API reports a user's kind in its `Tipo` field. Each screen of the
//! application admits a fixed set of roles; an unauthenticated visitor is
//! sent to the login page and an authenticated user without the role is sent
//! back home.

use std::str::FromStr;

use agenda_core::errors::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Kind of user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Clinic administrator.
    Admin,
    /// Psychologist (appointment provider).
    Psicologo,
    /// Student (patient).
    Aluno,
}

impl Role {
    /// Canonical `Tipo` value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Psicologo => "Psicologo",
            Role::Aluno => "Aluno",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    /// Case-insensitive; accepts the accented `Psicólogo`.
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace('ó', "o");
        match normalized.as_str() {
            "admin" | "administrador" => Ok(Role::Admin),
            "psicologo" => Ok(Role::Psicologo),
            "aluno" => Ok(Role::Aluno),
            _ => Err(Error::InvalidArgument(format!("unknown Tipo {s:?}"))),
        }
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Screens of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Area {
    /// Landing page after login.
    Home,
    /// Student records.
    Students,
    /// Psychologist records.
    Psychologists,
    /// Appointment calendar and booking.
    Appointments,
    /// Session notes.
    Notes,
    /// Provider availability blocks.
    Availability,
    /// PDF reports.
    Reports,
}

impl Area {
    /// Every screen.
    pub const ALL: [Area; 7] = [
        Area::Home,
        Area::Students,
        Area::Psychologists,
        Area::Appointments,
        Area::Notes,
        Area::Availability,
        Area::Reports,
    ];

    /// Roles admitted to this screen.
    pub fn allowed_roles(&self) -> &'static [Role] {
        match self {
            Area::Home | Area::Appointments => &[Role::Admin, Role::Psicologo, Role::Aluno],
            Area::Students | Area::Psychologists => &[Role::Admin],
            Area::Notes => &[Role::Psicologo],
            Area::Availability | Area::Reports => &[Role::Admin, Role::Psicologo],
        }
    }

    /// Route path.
    pub fn path(&self) -> &'static str {
        match self {
            Area::Home => "/home",
            Area::Students => "/alunos",
            Area::Psychologists => "/psicologos",
            Area::Appointments => "/agendamentos",
            Area::Notes => "/anotacoes",
            Area::Availability => "/disponibilidade",
            Area::Reports => "/relatorios",
        }
    }

    /// The screen served at `path`, if any.
    pub fn from_path(path: &str) -> Option<Area> {
        Self::ALL.into_iter().find(|a| a.path() == path)
    }
}

/// Path of the login page.
pub const LOGIN_PATH: &str = "/login";

/// Result of a guard check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuardOutcome {
    /// Render the screen.
    Granted,
    /// Not authenticated.
    RedirectToLogin,
    /// Authenticated, but the role is not admitted.
    RedirectToHome,
}

impl GuardOutcome {
    /// Where to navigate, or `None` when access is granted.
    pub fn redirect_path(&self) -> Option<&'static str> {
        match self {
            GuardOutcome::Granted => None,
            GuardOutcome::RedirectToLogin => Some(LOGIN_PATH),
            GuardOutcome::RedirectToHome => Some(Area::Home.path()),
        }
    }
}

/// A membership check against a set of roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteGuard {
    allowed: Vec<Role>,
}

impl RouteGuard {
    /// Guard admitting `allowed`.
    pub fn new(allowed: &[Role]) -> Self {
        Self {
            allowed: allowed.to_vec(),
        }
    }

    /// Guard for a screen.
    pub fn for_area(area: Area) -> Self {
        Self::new(area.allowed_roles())
    }

    /// Check an (optional) authenticated role.
    pub fn check(&self, role: Option<Role>) -> GuardOutcome {
        match role {
            None => GuardOutcome::RedirectToLogin,
            Some(r) if self.allowed.contains(&r) => GuardOutcome::Granted,
            Some(_) => GuardOutcome::RedirectToHome,
        }
    }

    /// Check a raw `Tipo` value. An unrecognised value counts as
    /// unauthenticated.
    pub fn check_tipo(&self, tipo: Option<&str>) -> GuardOutcome {
        let role = match tipo.map(str::parse::<Role>) {
            None => None,
            Some(Ok(role)) => Some(role),
            Some(Err(err)) => {
                tracing::warn!(error = %err, "rejecting session with unrecognised Tipo");
                None
            }
        };
        self.check(role)
    }
}
