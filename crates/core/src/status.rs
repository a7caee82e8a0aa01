//! Status enums mirroring the TEXT + CHECK columns of the database schema.
//!
//! Each variant's wire name matches the value stored in the corresponding
//! column (`projects.status`, `milestones.status`, ...). Parsing is strict:
//! anything outside the enumerated set is rejected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

macro_rules! define_status_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $val:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
        #[serde(rename_all = "snake_case")]
        #[ts(export)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Return the value stored in the database column.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $val),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($val => Ok($name::$variant),)+
                    other => Err(CoreError::Validation(format!(
                        "Unknown {} '{other}'",
                        stringify!($name)
                    ))),
                }
            }
        }
    };
}

define_status_enum! {
    /// Project lifecycle status.
    ProjectStatus {
        Pending = "pending",
        Ongoing = "ongoing",
        Completed = "completed",
        Delayed = "delayed",
    }
}

define_status_enum! {
    /// Milestone verification status.
    MilestoneStatus {
        Pending = "pending",
        Verified = "verified",
        Rejected = "rejected",
    }
}

define_status_enum! {
    /// Funds-ledger entry status.
    FundStatus {
        Allocated = "allocated",
        Released = "released",
        Utilized = "utilized",
    }
}

define_status_enum! {
    /// Alert severity.
    AlertSeverity {
        Low = "low",
        Medium = "medium",
        High = "high",
    }
}

impl ProjectStatus {
    /// Key used by status filters and badge tones.
    ///
    /// Ongoing projects are presented as "active" everywhere in the UI.
    pub fn display_key(self) -> &'static str {
        match self {
            ProjectStatus::Pending => "pending",
            ProjectStatus::Ongoing => "active",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Delayed => "delayed",
        }
    }

    /// Human-readable label for badges and filter tabs.
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Pending => "Pending",
            ProjectStatus::Ongoing => "Active",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::Delayed => "Delayed",
        }
    }

    /// Parse either the stored value or the display key (`active`).
    pub fn from_display_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "active" | "ongoing" => Some(ProjectStatus::Ongoing),
            "pending" => Some(ProjectStatus::Pending),
            "completed" => Some(ProjectStatus::Completed),
            "delayed" => Some(ProjectStatus::Delayed),
            _ => None,
        }
    }
}

impl MilestoneStatus {
    /// Whether a milestone may move from `self` to `next`.
    ///
    /// Only pending milestones are decided; verified and rejected are final.
    pub fn can_transition_to(self, next: MilestoneStatus) -> bool {
        matches!(
            (self, next),
            (MilestoneStatus::Pending, MilestoneStatus::Verified)
                | (MilestoneStatus::Pending, MilestoneStatus::Rejected)
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            MilestoneStatus::Pending => "Pending",
            MilestoneStatus::Verified => "Verified",
            MilestoneStatus::Rejected => "Rejected",
        }
    }
}

impl FundStatus {
    pub fn label(self) -> &'static str {
        match self {
            FundStatus::Allocated => "Allocated",
            FundStatus::Released => "Released",
            FundStatus::Utilized => "Utilized",
        }
    }
}
