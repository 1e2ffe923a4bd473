/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::field_char;

use serde_derive::{Deserialize, Serialize};

///
/// The standard identity (affiliation) of a symbol code, at position 1
///
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum StandardIdentity {
    /// Identity under determination ('P')
    Pending,

    /// Unknown track ('U')
    Unknown,

    /// Assumed friend ('A')
    AssumedFriend,

    /// Friend ('F')
    Friend,

    /// Neutral ('N')
    Neutral,

    /// Suspected hostile ('S')
    Suspect,

    /// Hostile ('H')
    Hostile,

    /// Exercise pending ('G')
    ExercisePending,

    /// Exercise unknown ('W')
    ExerciseUnknown,

    /// Exercise assumed friend ('M')
    ExerciseAssumedFriend,

    /// Exercise friend ('D')
    ExerciseFriend,

    /// Exercise neutral ('L')
    ExerciseNeutral,

    /// Friendly track acting as suspect for exercise ('J')
    Joker,

    /// Friendly track acting as hostile for exercise ('K')
    Faker,
}

impl StandardIdentity {
    ///
    /// Decodes the standard identity of a symbol code, if it has a recognized one
    ///
    pub fn of(symbol_code: &str) -> Option<StandardIdentity> {
        match field_char(symbol_code, 1)? {
            'P' => Some(StandardIdentity::Pending),
            'U' => Some(StandardIdentity::Unknown),
            'A' => Some(StandardIdentity::AssumedFriend),
            'F' => Some(StandardIdentity::Friend),
            'N' => Some(StandardIdentity::Neutral),
            'S' => Some(StandardIdentity::Suspect),
            'H' => Some(StandardIdentity::Hostile),
            'G' => Some(StandardIdentity::ExercisePending),
            'W' => Some(StandardIdentity::ExerciseUnknown),
            'M' => Some(StandardIdentity::ExerciseAssumedFriend),
            'D' => Some(StandardIdentity::ExerciseFriend),
            'L' => Some(StandardIdentity::ExerciseNeutral),
            'J' => Some(StandardIdentity::Joker),
            'K' => Some(StandardIdentity::Faker),
            _ => None,
        }
    }

    ///
    /// The human-readable name of this identity
    ///
    pub fn name(&self) -> &'static str {
        match self {
            StandardIdentity::Pending => "Pending",
            StandardIdentity::Unknown => "Unknown",
            StandardIdentity::AssumedFriend => "Assumed Friend",
            StandardIdentity::Friend => "Friend",
            StandardIdentity::Neutral => "Neutral",
            StandardIdentity::Suspect => "Suspect",
            StandardIdentity::Hostile => "Hostile",
            StandardIdentity::ExercisePending => "Exercise Pending",
            StandardIdentity::ExerciseUnknown => "Exercise Unknown",
            StandardIdentity::ExerciseAssumedFriend => "Exercise Assumed Friend",
            StandardIdentity::ExerciseFriend => "Exercise Friend",
            StandardIdentity::ExerciseNeutral => "Exercise Neutral",
            StandardIdentity::Joker => "Joker",
            StandardIdentity::Faker => "Faker",
        }
    }

    ///
    /// The frame grouping rank of this identity: 0 unknown, 1 friend, 2 neutral, 3 hostile
    ///
    /// Joker and Faker are friendly tracks but display with the hostile frame, so they
    /// group as hostile here.
    ///
    pub fn rank(&self) -> u8 {
        match self {
            StandardIdentity::Pending
            | StandardIdentity::Unknown
            | StandardIdentity::ExercisePending
            | StandardIdentity::ExerciseUnknown => 0,

            StandardIdentity::AssumedFriend
            | StandardIdentity::Friend
            | StandardIdentity::ExerciseAssumedFriend
            | StandardIdentity::ExerciseFriend => 1,

            StandardIdentity::Neutral | StandardIdentity::ExerciseNeutral => 2,

            StandardIdentity::Suspect
            | StandardIdentity::Hostile
            | StandardIdentity::Joker
            | StandardIdentity::Faker => 3,
        }
    }

    /// True if this identity displays with the friend frame
    pub fn is_friend(&self) -> bool {
        self.rank() == 1
    }

    /// True if this identity displays with the neutral frame
    pub fn is_neutral(&self) -> bool {
        self.rank() == 2
    }

    /// True if this identity displays with the hostile frame
    pub fn is_hostile(&self) -> bool {
        self.rank() == 3
    }

    /// True if this identity displays with the unknown frame
    pub fn is_unknown(&self) -> bool {
        self.rank() == 0
    }
}

///
/// The standard identity name of a symbol code, empty when unrecognized
///
pub fn name(symbol_code: &str) -> &'static str {
    StandardIdentity::of(symbol_code)
        .map(|identity| identity.name())
        .unwrap_or("")
}

///
/// The frame grouping rank of a symbol code's identity, 0 when unrecognized
///
pub fn rank(symbol_code: &str) -> u8 {
    StandardIdentity::of(symbol_code)
        .map(|identity| identity.rank())
        .unwrap_or(0)
}
