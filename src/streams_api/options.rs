//! Closed option sets accepted by stream and application configuration.
//!
//! Every variant serializes to the exact string the API expects.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Every accepted value, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire representation of this value
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_enum! {
    /// Stream output resolution
    pub enum Resolution {
        /// Scale to the viewer's window
        Auto => "res_scale",
        Res720p => "res_720p",
        Res1080p => "res_1080p",
        Res2160p => "res_2160p",
    }
}

wire_enum! {
    /// Audio output behaviour
    pub enum Sound {
        Off => "off",
        ActivateOnStart => "activate_on_start",
        UserCanActivate => "user_can_activate",
    }
}

wire_enum! {
    /// Microphone passthrough behaviour
    pub enum Microphone {
        Off => "off",
        ActivateOnStart => "activate_on_start",
        UserCanActivate => "user_can_activate",
    }
}

wire_enum! {
    /// How long an unused machine stays up before it is turned off
    pub enum DurationAutoTurnOff {
        Off => "off",
        Immediately => "immediately",
        TwoMinutes => "2_min",
        FiveMinutes => "5_min",
        ThirtyMinutes => "30_min",
        OneHour => "1_hour",
        ThreeHours => "3_hour",
        SixHours => "6_hour",
    }
}

wire_enum! {
    /// Upper bound on a single visitor session
    pub enum DurationMaximumSession {
        Off => "off",
        FiveMinutes => "5_min",
        TenMinutes => "10_min",
        FifteenMinutes => "15_min",
        ThirtyMinutes => "30_min",
        OneHour => "1_hour",
    }
}

wire_enum! {
    /// Idle time after which a session is ended
    pub enum DurationIdle {
        Off => "off",
        OneMinute => "1_min",
        FiveMinutes => "5_min",
        TenMinutes => "10_min",
    }
}

wire_enum! {
    /// Placement of the in-stream control dock
    pub enum DockPosition {
        Left => "left",
        Right => "right",
        Top => "top",
        Bottom => "bottom",
    }
}

wire_enum! {
    /// Capacity provisioning strategy
    pub enum CapacityType {
        OnDemand => "on_demand",
        Balanced => "balanced",
        AlwaysOn => "always_on",
    }
}

wire_enum! {
    /// Region a stream machine can be placed in
    pub enum Region {
        Dublin => "dublin",
        NorthVirginia => "north_virginia",
        Oregon => "oregon",
        Ohio => "ohio",
        Montreal => "montreal",
        California => "california",
        /// Spelled the way the API spells it
        SaoPaolo => "sao_paolo",
        Stockholm => "stockholm",
        Frankfurt => "frankfurt",
        Bahrain => "bahrain",
        Mumbai => "mumbai",
        Seoul => "seoul",
        Tokyo => "tokyo",
        Singapore => "singapore",
        Sydney => "sydney",
        Jakarta => "jakarta",
        Uae => "uae",
        CapeTown => "cape_town",
        HongKong => "hong_kong",
    }
}

wire_enum! {
    /// Engine the streamed application was built with
    pub enum GameEngine {
        Unity => "unity",
        Unreal => "unreal",
    }
}

wire_enum! {
    /// Default input mapping for an application
    pub enum KeyMappingSelection {
        Click => "click",
        GameMode => "game_mode",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_strings_match_serde() {
        for region in Region::ALL {
            let json = serde_json::to_string(region).unwrap();
            assert_eq!(json, format!("\"{}\"", region.as_str()));
        }
        for duration in DurationAutoTurnOff::ALL {
            let json = serde_json::to_string(duration).unwrap();
            assert_eq!(json, format!("\"{}\"", duration));
        }
    }

    #[test]
    fn test_resolution_auto_is_res_scale() {
        assert_eq!(Resolution::Auto.as_str(), "res_scale");
        let parsed: Resolution = serde_json::from_str("\"res_scale\"").unwrap();
        assert_eq!(parsed, Resolution::Auto);
    }

    #[test]
    fn test_value_set_sizes() {
        assert_eq!(Region::ALL.len(), 19);
        assert_eq!(DurationAutoTurnOff::ALL.len(), 8);
        assert_eq!(DurationMaximumSession::ALL.len(), 6);
        assert_eq!(DurationIdle::ALL.len(), 4);
        assert_eq!(CapacityType::ALL.len(), 3);
    }

    #[test]
    fn test_unknown_value_is_rejected() {
        let parsed: Result<Region, _> = serde_json::from_str("\"atlantis\"");
        assert!(parsed.is_err());
    }
}
