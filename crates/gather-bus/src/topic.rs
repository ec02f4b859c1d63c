//! Topic naming for lifecycle change notifications.
//!
//! A [`Topic`] is the pair of an entity kind and a lifecycle phase -- 12
//! topics in total. On the wire (WebSocket routes, logs) a topic reads as
//! `"user.created"`, `"participant.deleted"`, and so on.

use core::str::FromStr;

use gather_types::EntityKind;
use serde::{Deserialize, Serialize};

/// A lifecycle phase of an entity record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lifecycle {
    /// The record was inserted.
    Created,
    /// The record was partially updated.
    Updated,
    /// The record was removed.
    Deleted,
}

impl Lifecycle {
    /// All lifecycle phases, in declaration order.
    pub const ALL: [Self; 3] = [Self::Created, Self::Updated, Self::Deleted];

    /// The lowercase wire name of this phase.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Deleted => "deleted",
        }
    }
}

impl core::fmt::Display for Lifecycle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A change-notification channel name: entity kind plus lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Topic {
    /// The entity collection this topic covers.
    pub entity: EntityKind,
    /// The lifecycle phase this topic covers.
    pub lifecycle: Lifecycle,
}

impl Topic {
    /// Construct a topic from its two halves.
    pub const fn new(entity: EntityKind, lifecycle: Lifecycle) -> Self {
        Self { entity, lifecycle }
    }

    /// Every topic the bus carries: 4 entity kinds x 3 lifecycle phases.
    pub const ALL: [Self; 12] = [
        Self::new(EntityKind::User, Lifecycle::Created),
        Self::new(EntityKind::User, Lifecycle::Updated),
        Self::new(EntityKind::User, Lifecycle::Deleted),
        Self::new(EntityKind::Event, Lifecycle::Created),
        Self::new(EntityKind::Event, Lifecycle::Updated),
        Self::new(EntityKind::Event, Lifecycle::Deleted),
        Self::new(EntityKind::Location, Lifecycle::Created),
        Self::new(EntityKind::Location, Lifecycle::Updated),
        Self::new(EntityKind::Location, Lifecycle::Deleted),
        Self::new(EntityKind::Participant, Lifecycle::Created),
        Self::new(EntityKind::Participant, Lifecycle::Updated),
        Self::new(EntityKind::Participant, Lifecycle::Deleted),
    ];
}

impl core::fmt::Display for Topic {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{}", self.entity, self.lifecycle)
    }
}

/// Parse error for a malformed topic string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown topic: {0}")]
pub struct TopicParseError(pub String);

impl FromStr for Topic {
    type Err = TopicParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (entity, lifecycle) = s
            .split_once('.')
            .ok_or_else(|| TopicParseError(s.to_string()))?;

        let entity: EntityKind = entity
            .parse()
            .map_err(|_| TopicParseError(s.to_string()))?;

        let lifecycle = match lifecycle {
            "created" => Lifecycle::Created,
            "updated" => Lifecycle::Updated,
            "deleted" => Lifecycle::Deleted,
            _ => return Err(TopicParseError(s.to_string())),
        };

        Ok(Self::new(entity, lifecycle))
    }
}
