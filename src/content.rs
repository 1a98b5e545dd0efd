// SPDX-License-Identifier: MPL-2.0
//! Static conference content: programme sessions and sponsor roster.
//!
//! This data changes once per edition and ships with the binary; everything
//! dynamic (registrations, event date) comes from configuration or the
//! backend.

/// One programme slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    /// 1-based conference day.
    pub day: u8,
    /// Local start time, `HH:MM`.
    pub time: &'static str,
    pub title: &'static str,
    pub speaker: &'static str,
    pub room: &'static str,
}

/// Sponsor tiers, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    Platinum,
    Gold,
    Silver,
}

impl Tier {
    /// Returns the i18n key for the tier heading.
    pub fn i18n_key(self) -> &'static str {
        match self {
            Tier::Platinum => "sponsors-tier-platinum",
            Tier::Gold => "sponsors-tier-gold",
            Tier::Silver => "sponsors-tier-silver",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sponsor {
    pub name: &'static str,
    pub tier: Tier,
    pub tagline: &'static str,
}

pub const SESSIONS: &[Session] = &[
    Session {
        day: 1,
        time: "09:00",
        title: "Opening keynote: the decade of mRNA",
        speaker: "Prof. L. Moreau",
        room: "Auditorium A",
    },
    Session {
        day: 1,
        time: "10:30",
        title: "Continuous manufacturing in small-molecule production",
        speaker: "Dr. K. Tanaka",
        room: "Room 2",
    },
    Session {
        day: 1,
        time: "14:00",
        title: "Regulatory pathways for biosimilars in the EU",
        speaker: "A. Fernandez",
        room: "Room 3",
    },
    Session {
        day: 1,
        time: "16:00",
        title: "Poster session and exhibition walk",
        speaker: "—",
        room: "Exhibition floor",
    },
    Session {
        day: 2,
        time: "09:30",
        title: "AI-assisted lead optimization: beyond the hype",
        speaker: "Dr. S. Okafor",
        room: "Auditorium A",
    },
    Session {
        day: 2,
        time: "11:00",
        title: "Cold-chain logistics for cell therapies",
        speaker: "M. Lindqvist",
        room: "Room 2",
    },
    Session {
        day: 2,
        time: "15:00",
        title: "Closing panel: pricing, access, and the next pandemic",
        speaker: "Panel",
        room: "Auditorium A",
    },
];

pub const SPONSORS: &[Sponsor] = &[
    Sponsor {
        name: "Helvetica Pharma",
        tier: Tier::Platinum,
        tagline: "Global partner in oncology research",
    },
    Sponsor {
        name: "Boreal Biologics",
        tier: Tier::Platinum,
        tagline: "Biologics from bench to bedside",
    },
    Sponsor {
        name: "Meridian Labs",
        tier: Tier::Gold,
        tagline: "Analytical services for GMP environments",
    },
    Sponsor {
        name: "Cascade Therapeutics",
        tier: Tier::Gold,
        tagline: "Rare disease, first",
    },
    Sponsor {
        name: "Atlas CRO",
        tier: Tier::Silver,
        tagline: "Trials that run on time",
    },
    Sponsor {
        name: "Vertex Packaging",
        tier: Tier::Silver,
        tagline: "Compliant packaging at scale",
    },
];

/// Sessions for one conference day, in programme order.
pub fn sessions_for_day(day: u8) -> impl Iterator<Item = &'static Session> {
    SESSIONS.iter().filter(move |s| s.day == day)
}

/// Sponsors of one tier, in roster order, with their roster index. The
/// index identifies a sponsor card across the whole roster (hover tracking
/// on the sponsors screen keys on it).
pub fn sponsors_in_tier(tier: Tier) -> impl Iterator<Item = (usize, &'static Sponsor)> {
    SPONSORS
        .iter()
        .enumerate()
        .filter(move |(_, s)| s.tier == tier)
}
