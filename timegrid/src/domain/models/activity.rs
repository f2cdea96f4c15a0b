use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::{DayKey, ListId, Timing, UserId};

/// Which dimension a subject row (and the plans attached to it) lives in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TargetKind {
    List,
    User,
    Tag,
}

/// Day-keyed totals for one subject row.
pub type DayEntries = BTreeMap<DayKey, Timing>;

/// A row that recurring time plans can attach to.
///
/// Implemented by the three dimension row types; the overlay calculator is
/// generic over this capability instead of assuming a shared row shape.
pub trait PlanTarget {
    fn target_kind(&self) -> TargetKind;
    fn target_id(&self) -> Cow<'_, str>;
    fn entries(&self) -> &DayEntries;
}

/// Hours booked against one list, broken down per user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListActivity {
    pub id: ListId,
    pub space: String,
    pub name: String,
    pub entries: DayEntries,
}

impl PlanTarget for ListActivity {
    fn target_kind(&self) -> TargetKind {
        TargetKind::List
    }

    fn target_id(&self) -> Cow<'_, str> {
        Cow::Owned(self.id.to_string())
    }

    fn entries(&self) -> &DayEntries {
        &self.entries
    }
}

/// Hours booked by one user, broken down per `"<space> > <list>"` path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserActivity {
    pub id: UserId,
    pub name: String,
    pub entries: DayEntries,
}

impl PlanTarget for UserActivity {
    fn target_kind(&self) -> TargetKind {
        TargetKind::User
    }

    fn target_id(&self) -> Cow<'_, str> {
        Cow::Owned(self.id.to_string())
    }

    fn entries(&self) -> &DayEntries {
        &self.entries
    }
}

/// Hours booked under one tag name, broken down per
/// `"<space> > <list> > <user>"` path. A tag's identity is its name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagActivity {
    pub name: String,
    pub entries: DayEntries,
}

impl PlanTarget for TagActivity {
    fn target_kind(&self) -> TargetKind {
        TargetKind::Tag
    }

    fn target_id(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }

    fn entries(&self) -> &DayEntries {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_kind_round_trips_wire_names() {
        assert_eq!(TargetKind::List.to_string(), "list");
        assert_eq!("user".parse::<TargetKind>().ok(), Some(TargetKind::User));
        assert_eq!("tag".parse::<TargetKind>().ok(), Some(TargetKind::Tag));
        assert!("sprint".parse::<TargetKind>().is_err());
    }

    #[test]
    fn rows_expose_their_plan_identity() {
        let list = ListActivity {
            id: ListId::new(901),
            space: "Acme".to_string(),
            name: "Onboarding".to_string(),
            entries: DayEntries::new(),
        };
        assert_eq!(list.target_kind(), TargetKind::List);
        assert_eq!(list.target_id(), "901");

        let tag = TagActivity {
            name: "support".to_string(),
            entries: DayEntries::new(),
        };
        assert_eq!(tag.target_kind(), TargetKind::Tag);
        assert_eq!(tag.target_id(), "support");
    }
}
