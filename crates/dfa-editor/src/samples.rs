//! Bundled sample automata.

use std::fmt;
use std::str::FromStr;

use dfa_model::ApplicationMetaData;

const EVEN_ZEROS: &str = include_str!("../samples/even_zeros.json");
const BEVERAGE_VENDING: &str = include_str!("../samples/beverage_vending.json");
const DECIMAL_NUMBERS: &str = include_str!("../samples/decimal_numbers.json");

/// A sample DFA document together with the application it generates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sample {
    /// Accepts binary words with an even number of zeros.
    EvenZeros,
    /// A beverage vending machine.
    BeverageVending,
    /// Accepts signed decimal numbers.
    DecimalNumbers,
}

impl Sample {
    pub const ALL: [Self; 3] = [Self::EvenZeros, Self::BeverageVending, Self::DecimalNumbers];

    /// Identifier used on the command line.
    pub const fn id(&self) -> &'static str {
        match self {
            Self::EvenZeros => "even-zeros",
            Self::BeverageVending => "beverage-vending",
            Self::DecimalNumbers => "decimal-numbers",
        }
    }

    /// The document as shipped.
    pub const fn json(&self) -> &'static str {
        match self {
            Self::EvenZeros => EVEN_ZEROS,
            Self::BeverageVending => BEVERAGE_VENDING,
            Self::DecimalNumbers => DECIMAL_NUMBERS,
        }
    }

    pub const fn app_name(&self) -> &'static str {
        match self {
            Self::EvenZeros => "EvenZerosCheck",
            Self::BeverageVending => "BeverageVending",
            Self::DecimalNumbers => "DecimalNumbersCheck",
        }
    }

    pub const fn app_package(&self) -> &'static str {
        match self {
            Self::EvenZeros => "samples.evenzeros",
            Self::BeverageVending => "samples.beveragevending",
            Self::DecimalNumbers => "samples.decimalnumbers",
        }
    }

    /// Metadata the sample is generated with.
    pub fn metadata(&self) -> ApplicationMetaData {
        ApplicationMetaData::new(self.app_name(), self.app_package())
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Name given on the command line does not match any sample.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sample '{0}' (expected one of: even-zeros, beverage-vending, decimal-numbers)")]
pub struct UnknownSample(pub String);

impl FromStr for Sample {
    type Err = UnknownSample;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|sample| sample.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownSample(s.to_string()))
    }
}
