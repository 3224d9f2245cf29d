use core::fmt;
use serde::{Deserialize, Serialize};

/// The twelve flower months. Matching in Go-Stop is keyed on this alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Month {
    January = 1,
    February = 2,
    March = 3,
    April = 4,
    May = 5,
    June = 6,
    July = 7,
    August = 8,
    September = 9,
    October = 10,
    November = 11,
    December = 12,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Month::January),
            2 => Some(Month::February),
            3 => Some(Month::March),
            4 => Some(Month::April),
            5 => Some(Month::May),
            6 => Some(Month::June),
            7 => Some(Month::July),
            8 => Some(Month::August),
            9 => Some(Month::September),
            10 => Some(Month::October),
            11 => Some(Month::November),
            12 => Some(Month::December),
            _ => None,
        }
    }

    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Traditional flower printed on the month's cards.
    pub const fn flower(self) -> &'static str {
        match self {
            Month::January => "pine",
            Month::February => "plum",
            Month::March => "cherry",
            Month::April => "wisteria",
            Month::May => "iris",
            Month::June => "peony",
            Month::July => "bush clover",
            Month::August => "pampas",
            Month::September => "chrysanthemum",
            Month::October => "maple",
            Month::November => "paulownia",
            Month::December => "rain",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::Month;

    #[test]
    fn from_number_maps_valid_values() {
        assert_eq!(Month::from_number(1), Some(Month::January));
        assert_eq!(Month::from_number(12), Some(Month::December));
        assert_eq!(Month::from_number(0), None);
        assert_eq!(Month::from_number(13), None);
    }

    #[test]
    fn all_lists_twelve_months_in_order() {
        assert_eq!(Month::ALL.len(), 12);
        for (index, month) in Month::ALL.iter().enumerate() {
            assert_eq!(month.number() as usize, index + 1);
        }
    }

    #[test]
    fn display_prints_the_number() {
        assert_eq!(Month::September.to_string(), "9");
    }
}
