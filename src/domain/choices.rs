//! Closed choice sets offered by the note forms

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Declares an enum whose variants map one-to-one onto display labels.
/// The label is used for JSON, for display and (case-insensitively) for parsing.
macro_rules! labeled_choice {
    (
        $(#[$meta:meta])*
        $name:ident, $what:literal, default = $default:ident {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every choice, in the order the form presents them
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|choice| choice.label().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| {
                        let labels: Vec<&str> = $name::ALL.iter().map(|c| c.label()).collect();
                        format!(
                            "Invalid {}: '{}'. Valid values are: {}",
                            $what,
                            s,
                            labels.join(", ")
                        )
                    })
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }
    };
}

labeled_choice! {
    /// Lyric font used by the simple form
    FontFamily, "font family", default = SystemUi {
        SystemUi => "system-ui",
        Serif => "serif",
        Monospace => "monospace",
    }
}

labeled_choice! {
    /// Genre tag of a song sheet
    Style, "style", default = Pop {
        Pop => "Pop",
        Ballad => "Ballad",
        RnB => "R&B",
        Rock => "Rock",
        HipHop => "Hip-Hop",
        Edm => "EDM",
        Country => "Country",
        Folk => "Folk",
        Jazz => "Jazz",
        KPop => "K-Pop",
        ThaiEsan => "Thai-Esan",
    }
}

labeled_choice! {
    TimeSignature, "time signature", default = FourFour {
        FourFour => "4/4",
        ThreeFour => "3/4",
        SixEight => "6/8",
        SevenEight => "7/8",
        TwelveEight => "12/8",
    }
}

labeled_choice! {
    /// Major keys around the circle of fifths followed by their relative minors
    MusicalKey, "key", default = C {
        C => "C",
        G => "G",
        D => "D",
        A => "A",
        E => "E",
        B => "B",
        FSharp => "F#",
        CSharp => "C#",
        F => "F",
        BFlat => "Bb",
        EFlat => "Eb",
        AFlat => "Ab",
        DFlat => "Db",
        GFlat => "Gb",
        CFlat => "Cb",
        AMinor => "Am",
        EMinor => "Em",
        BMinor => "Bm",
        FSharpMinor => "F#m",
        CSharpMinor => "C#m",
        GSharpMinor => "G#m",
        DSharpMinor => "D#m",
        ASharpMinor => "A#m",
        DMinor => "Dm",
        GMinor => "Gm",
        CMinor => "Cm",
        FMinor => "Fm",
        BFlatMinor => "Bbm",
        EFlatMinor => "Ebm",
        AFlatMinor => "Abm",
    }
}
