//! Graha relationship and dignity tables.
//!
//! Provides natural friendship as tabulated for the jamakkol system, the
//! per-graha dignity profile (own signs, exaltation, debilitation), dignity
//! determination, and the weekday lord mapper.
//!
//! The friendship table is deliberately not symmetric: a relation is read
//! from the first graha's perspective only. Rahu and Ketu carry rows of
//! their own (they are not forced to neutral).

use serde::Serialize;

use crate::graha::{Graha, rashi_lord};
use crate::labels::Language;
use crate::rashi::Rashi;
use crate::vaar::Vaar;

// ---------------------------------------------------------------------------
// Natural friendship
// ---------------------------------------------------------------------------

/// Relationship of one graha towards another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Relation {
    Friend,
    Neutral,
    Enemy,
}

impl Relation {
    pub const fn label(self, lang: Language) -> &'static str {
        match self {
            Self::Friend => lang.pick("Friendly", "நட்பு"),
            Self::Neutral => lang.pick("Neutral", "சமம்"),
            Self::Enemy => lang.pick("Enemy", "பகை"),
        }
    }
}

/// One row of the friendship table: how a graha regards the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelationRow {
    pub friends: &'static [Graha],
    pub neutral: &'static [Graha],
    pub enemies: &'static [Graha],
}

/// Friendship row for a graha.
pub const fn relation_row(graha: Graha) -> RelationRow {
    use Graha::*;

    match graha {
        Surya => RelationRow {
            friends: &[Chandra, Mangal, Guru],
            neutral: &[Buddh],
            enemies: &[Shukra, Shani],
        },
        Chandra => RelationRow {
            friends: &[Surya, Buddh],
            neutral: &[Mangal, Guru, Shukra, Shani],
            enemies: &[Rahu, Ketu],
        },
        Mangal => RelationRow {
            friends: &[Surya, Chandra, Guru],
            neutral: &[Shukra, Shani],
            enemies: &[Buddh],
        },
        Buddh => RelationRow {
            friends: &[Surya, Shukra],
            neutral: &[Mangal, Guru, Shani],
            enemies: &[Chandra],
        },
        Guru => RelationRow {
            friends: &[Surya, Chandra, Mangal],
            neutral: &[Shani],
            enemies: &[Buddh, Shukra],
        },
        Shukra => RelationRow {
            friends: &[Buddh, Shani],
            neutral: &[Mangal, Guru],
            enemies: &[Surya, Chandra],
        },
        Shani => RelationRow {
            friends: &[Buddh, Shukra],
            neutral: &[Guru],
            enemies: &[Surya, Chandra, Mangal],
        },
        Rahu => RelationRow {
            friends: &[Shukra, Shani, Buddh],
            neutral: &[Guru],
            enemies: &[Surya, Chandra, Mangal],
        },
        Ketu => RelationRow {
            friends: &[Mangal, Shukra, Shani],
            neutral: &[Buddh, Guru],
            enemies: &[Surya, Chandra],
        },
    }
}

/// How `graha` regards `other`.
///
/// Friend if `other` is in the friend set, Enemy if in the enemy set,
/// otherwise Neutral (including `graha == other`, which no row lists).
pub fn relation_of(graha: Graha, other: Graha) -> Relation {
    let row = relation_row(graha);
    if row.friends.contains(&other) {
        Relation::Friend
    } else if row.enemies.contains(&other) {
        Relation::Enemy
    } else {
        Relation::Neutral
    }
}

// ---------------------------------------------------------------------------
// Dignity
// ---------------------------------------------------------------------------

/// Own signs, exaltation and debilitation for one graha.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DignityProfile {
    pub own_signs: &'static [Rashi],
    pub exaltation: Option<Rashi>,
    pub debilitation: Option<Rashi>,
}

/// Dignity profile of a graha. The nodes have no own, exaltation or debilitation sign.
pub const fn dignity_profile(graha: Graha) -> DignityProfile {
    use Rashi::*;

    match graha {
        Graha::Surya => DignityProfile {
            own_signs: &[Simha],
            exaltation: Some(Mesha),
            debilitation: Some(Tula),
        },
        Graha::Chandra => DignityProfile {
            own_signs: &[Karka],
            exaltation: Some(Vrishabha),
            debilitation: Some(Vrischika),
        },
        Graha::Mangal => DignityProfile {
            own_signs: &[Mesha, Vrischika],
            exaltation: Some(Makara),
            debilitation: Some(Karka),
        },
        Graha::Buddh => DignityProfile {
            own_signs: &[Mithuna, Kanya],
            exaltation: Some(Kanya),
            debilitation: Some(Meena),
        },
        Graha::Guru => DignityProfile {
            own_signs: &[Dhanu, Meena],
            exaltation: Some(Karka),
            debilitation: Some(Makara),
        },
        Graha::Shukra => DignityProfile {
            own_signs: &[Vrishabha, Tula],
            exaltation: Some(Meena),
            debilitation: Some(Kanya),
        },
        Graha::Shani => DignityProfile {
            own_signs: &[Makara, Kumbha],
            exaltation: Some(Tula),
            debilitation: Some(Mesha),
        },
        Graha::Rahu | Graha::Ketu => DignityProfile {
            own_signs: &[],
            exaltation: None,
            debilitation: None,
        },
    }
}

/// Strength of a graha placed in a rashi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Dignity {
    Exalted,
    OwnHouse,
    Debilitated,
    FriendHouse,
    EnemyHouse,
    Neutral,
}

impl Dignity {
    pub const fn label(self, lang: Language) -> &'static str {
        match self {
            Self::Exalted => lang.pick("Exalted", "உச்சம்"),
            Self::OwnHouse => lang.pick("Own House", "ஆட்சி"),
            Self::Debilitated => lang.pick("Debilitated", "நீச்சம்"),
            Self::FriendHouse => lang.pick("Friend House", "நட்பு"),
            Self::EnemyHouse => lang.pick("Enemy House", "பகை"),
            Self::Neutral => lang.pick("Neutral", "சமம்"),
        }
    }
}

/// Dignity of a graha in a rashi.
///
/// Priority: exaltation > own sign > debilitation > relation of the graha
/// towards the rashi lord.
pub fn dignity_of(graha: Graha, rashi: Rashi) -> Dignity {
    let profile = dignity_profile(graha);
    if profile.exaltation == Some(rashi) {
        return Dignity::Exalted;
    }
    if profile.own_signs.contains(&rashi) {
        return Dignity::OwnHouse;
    }
    if profile.debilitation == Some(rashi) {
        return Dignity::Debilitated;
    }
    match relation_of(graha, rashi_lord(rashi)) {
        Relation::Friend => Dignity::FriendHouse,
        Relation::Enemy => Dignity::EnemyHouse,
        Relation::Neutral => Dignity::Neutral,
    }
}

// ---------------------------------------------------------------------------
// Lord mappers
// ---------------------------------------------------------------------------

/// Weekday lord: maps Vaar to Graha.
pub const fn vaar_lord(vaar: Vaar) -> Graha {
    match vaar {
        Vaar::Ravivaar => Graha::Surya,
        Vaar::Somvaar => Graha::Chandra,
        Vaar::Mangalvaar => Graha::Mangal,
        Vaar::Budhvaar => Graha::Buddh,
        Vaar::Guruvaar => Graha::Guru,
        Vaar::Shukravaar => Graha::Shukra,
        Vaar::Shanivaar => Graha::Shani,
    }
}
