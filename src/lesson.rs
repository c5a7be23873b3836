//! Static lesson seed data and per-status display metadata.
//!
//! The lesson list is mock data: statuses never transition, and no
//! progression engine exists. Each status carries its display metadata
//! (label, color, icon name) in one table so screens render a card without
//! branching on the status themselves.

use serde::Serialize;

use crate::palette::{ColorToken, Palette};

/// Where a lesson sits in the (static) progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonStatus {
    Done,
    Active,
    Locked,
}

/// Display metadata for one lesson status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusMeta {
    /// Badge label shown next to the status icon.
    pub label: &'static str,
    /// Accent color for the status dot, icon, and badge text.
    pub color: ColorToken,
    /// Icon name in the rendering layer's icon set.
    pub icon: &'static str,
}

/// Card background and border for one lesson status under one palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardColors {
    pub bg: ColorToken,
    pub border: ColorToken,
}

impl LessonStatus {
    /// Returns the display metadata for this status.
    pub fn meta(self) -> &'static StatusMeta {
        match self {
            LessonStatus::Done => &StatusMeta {
                label: "Completed",
                color: "#16a34a",
                icon: "checkmark-circle",
            },
            LessonStatus::Active => &StatusMeta {
                label: "Ready to start",
                color: "#2563eb",
                icon: "play-circle",
            },
            LessonStatus::Locked => &StatusMeta {
                label: "Locked",
                color: "#9ca3af",
                icon: "lock-closed",
            },
        }
    }

    /// Returns the card colors for this status under a palette.
    ///
    /// Only the active card overrides the default border.
    pub fn card_colors(self, palette: &Palette) -> CardColors {
        match self {
            LessonStatus::Done => CardColors {
                bg: palette.card_done,
                border: palette.card_border,
            },
            LessonStatus::Active => CardColors {
                bg: palette.card_active,
                border: palette.card_active_border,
            },
            LessonStatus::Locked => CardColors {
                bg: palette.card_locked,
                border: palette.card_border,
            },
        }
    }

    /// Whether the lesson rejects interaction.
    pub fn is_locked(self) -> bool {
        self == LessonStatus::Locked
    }
}

/// One entry in the lesson list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Lesson {
    pub id: u32,
    pub title: &'static str,
    pub status: LessonStatus,
}

/// The lesson list, in display order.
pub const LESSONS: &[Lesson] = &[
    Lesson {
        id: 1,
        title: "Welcome Journey",
        status: LessonStatus::Done,
    },
    Lesson {
        id: 2,
        title: "Switching Focus",
        status: LessonStatus::Active,
    },
    Lesson {
        id: 3,
        title: "Source of Inspiration",
        status: LessonStatus::Locked,
    },
    Lesson {
        id: 4,
        title: "Space for Ideas",
        status: LessonStatus::Locked,
    },
    Lesson {
        id: 5,
        title: "Final Quiz",
        status: LessonStatus::Locked,
    },
];
