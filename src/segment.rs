//! Vehicle segment classification
//!
//! Heuristic thresholds, checked in priority order:
//!   performance: (aspect <= 45 && rim >= 18) || (width >= 235 && aspect <= 40)
//!   4x4:         width >= 265 || (aspect >= 60 && rim >= 18)
//!   suv:         width >= 235 && aspect >= 50
//!   passenger:   everything else

use std::fmt;

use serde::Serialize;

use crate::parse::TyreSize;

/// Marketing segment a tyre size is pitched at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Segment {
    Performance,
    #[serde(rename = "4x4")]
    FourByFour,
    Suv,
    Passenger,
}

impl Segment {
    /// Classify a size; total over all inputs
    pub fn of(size: &TyreSize) -> Self {
        classify(size.width(), size.aspect(), size.rim())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Performance => "performance",
            Self::FourByFour => "4x4",
            Self::Suv => "suv",
            Self::Passenger => "passenger",
        }
    }

    /// Lead bullet for the "Why Choose" section
    pub fn proof_point(&self, aspect: u16) -> &'static str {
        match self {
            Self::Performance => "Sharper turn-in on winding roads",
            Self::FourByFour => "Tow-friendly stability for larger SUVs and 4x4s",
            Self::Suv => "Touring comfort for long highway runs with family and cargo",
            Self::Passenger if aspect < 60 => "Sure-footed braking for urban stop-start traffic",
            Self::Passenger => "Balanced wet braking for sudden showers",
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify raw dimensions into a [`Segment`]. First matching rule wins.
pub fn classify(width: u16, aspect: u16, rim: u16) -> Segment {
    if (aspect <= 45 && rim >= 18) || (width >= 235 && aspect <= 40) {
        Segment::Performance
    } else if width >= 265 || (aspect >= 60 && rim >= 18) {
        Segment::FourByFour
    } else if width >= 235 && aspect >= 50 {
        Segment::Suv
    } else {
        Segment::Passenger
    }
}

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "classifySegment")]
pub fn classify_wasm(width: u16, aspect: u16, rim: u16) -> String {
    classify(width, aspect, rim).as_str().to_string()
}
