//! Shared primitive types and enums.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Position of a contact in the log. This is the record's only identity.
pub type RecordIndex = usize;

/// Emission mode offered by the logging form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mode {
    /// Single side-band phone.
    #[default]
    SSB,
    /// Continuous Wave.
    CW,
    /// Frequency modulation.
    FM,
    /// Binary phase-shift keying.
    BPSK,
    /// Quadrature phase-shift keying.
    QPSK,
    /// PSK31 keyboard mode.
    PSK31,
}

impl Mode {
    /// Every selectable mode, in form order.
    pub const ALL: [Mode; 6] = [Mode::SSB, Mode::CW, Mode::FM, Mode::BPSK, Mode::QPSK, Mode::PSK31];

    /// ADIF / persisted spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::SSB => "SSB",
            Mode::CW => "CW",
            Mode::FM => "FM",
            Mode::BPSK => "BPSK",
            Mode::QPSK => "QPSK",
            Mode::PSK31 => "PSK31",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a mode name is not one of [`Mode::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mode: {0}")]
pub struct UnknownMode(pub String);

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Mode::ALL
            .into_iter()
            .find(|m| m.as_str() == upper)
            .ok_or_else(|| UnknownMode(s.to_string()))
    }
}

/// Coarse band bucket used by the ADIF `BAND` and `BAND_RX` tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BandName {
    /// The 10 GHz band label.
    Cm13,
    /// The 2.4 GHz band label.
    Cm3,
    /// Frequency outside both ranges.
    Unknown,
}

impl BandName {
    /// ADIF spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            BandName::Cm13 => "13CM",
            BandName::Cm3 => "3CM",
            BandName::Unknown => "UNK",
        }
    }
}

impl fmt::Display for BandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
