use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where an application currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
pub enum Status {
    #[default]
    Applied,
    Interview,
    Offer,
    Rejected,
}

impl Status {
    /// All variants, in the order the status selector offers them.
    pub const ALL: [Status; 4] = [
        Status::Applied,
        Status::Interview,
        Status::Offer,
        Status::Rejected,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Applied => "Applied",
            Status::Interview => "Interview",
            Status::Offer => "Offer",
            Status::Rejected => "Rejected",
        }
    }

    fn position(self) -> usize {
        Self::ALL
            .iter()
            .position(|s| *s == self)
            .unwrap_or_default()
    }

    /// Next status in selector order, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    /// Previous status in selector order, wrapping around.
    pub fn previous(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.position() + len - 1) % len]
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown status: {0:?}")]
pub struct UnknownStatus(pub String);

impl FromStr for Status {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// A recorded job application.
///
/// Field names match the stored JSON layout exactly, so a list written by any
/// earlier version of the tracker loads unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Application {
    pub id: i64,
    pub company: String,
    pub role: String,
    #[serde(default)]
    pub status: Status,
    pub date: String,
    #[serde(default)]
    pub notes: String,
}

/// Field overrides applied to an existing application. `None` keeps the current value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApplicationPatch {
    pub company: Option<String>,
    pub role: Option<String>,
    pub status: Option<Status>,
    pub date: Option<String>,
    pub notes: Option<String>,
}

impl ApplicationPatch {
    /// Merge the patch into `application`. The id is never touched.
    pub fn apply(&self, application: &Application) -> Application {
        Application {
            id: application.id,
            company: self
                .company
                .clone()
                .unwrap_or_else(|| application.company.clone()),
            role: self.role.clone().unwrap_or_else(|| application.role.clone()),
            status: self.status.unwrap_or(application.status),
            date: self.date.clone().unwrap_or_else(|| application.date.clone()),
            notes: self.notes.clone().unwrap_or_else(|| application.notes.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acme() -> Application {
        Application {
            id: 1,
            company: "Acme".to_string(),
            role: "Engineer".to_string(),
            status: Status::Applied,
            date: "2024-01-10".to_string(),
            notes: String::new(),
        }
    }

    #[test]
    fn status_cycles_in_selector_order() {
        assert_eq!(Status::Applied.next(), Status::Interview);
        assert_eq!(Status::Rejected.next(), Status::Applied);
        assert_eq!(Status::Applied.previous(), Status::Rejected);
        assert_eq!(Status::Offer.previous(), Status::Interview);
    }

    #[test]
    fn status_parses_only_known_literals() {
        assert_eq!("Offer".parse::<Status>(), Ok(Status::Offer));
        assert_eq!(
            "offer".parse::<Status>(),
            Err(UnknownStatus("offer".to_string()))
        );
    }

    #[test]
    fn deserializes_stored_browser_layout() {
        let raw = r#"[{"id":1704844800000,"company":"Globex","role":"Analyst","status":"Interview","date":"2024-01-12","notes":"phone screen"}]"#;
        let parsed: Vec<Application> = serde_json::from_str(raw).unwrap();

        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].id, 1704844800000);
        assert_eq!(parsed[0].status, Status::Interview);
        assert_eq!(parsed[0].notes, "phone screen");
    }

    #[test]
    fn missing_notes_default_to_empty() {
        let raw = r#"{"id":7,"company":"Acme","role":"Engineer","status":"Offer","date":"2024-01-10"}"#;
        let parsed: Application = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.notes, "");
    }

    #[test]
    fn status_serializes_as_literal() {
        let json = serde_json::to_value(acme()).unwrap();
        assert_eq!(json["status"], "Applied");
        assert_eq!(json["date"], "2024-01-10");
    }

    #[test]
    fn patch_overrides_only_present_fields() {
        let patch = ApplicationPatch {
            status: Some(Status::Offer),
            ..Default::default()
        };
        let patched = patch.apply(&acme());

        assert_eq!(patched.status, Status::Offer);
        assert_eq!(patched.company, "Acme");
        assert_eq!(patched.role, "Engineer");
        assert_eq!(patched.id, 1);
    }
}
