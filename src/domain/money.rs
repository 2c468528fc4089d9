//! Integer money representation
//!
//! All prices and totals are whole cents; formatting renders `$X.XX`.
//! Money never goes through floating point.

use serde::{Deserialize, Serialize};

/// Newtype wrapper for amounts in whole cents
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[repr(transparent)]
pub struct Cents(pub u64);

impl Cents {
    pub const ZERO: Cents = Cents(0);

    /// Line total for `quantity` units at this unit price
    #[inline]
    pub fn times(self, quantity: u32) -> Cents {
        Cents(self.0 * u64::from(quantity))
    }

    /// Line total that reports overflow instead of wrapping
    #[inline]
    pub fn checked_times(self, quantity: u32) -> Option<Cents> {
        self.0.checked_mul(u64::from(quantity)).map(Cents)
    }

    /// Sum that reports overflow instead of wrapping
    #[inline]
    pub fn checked_add(self, rhs: Cents) -> Option<Cents> {
        self.0.checked_add(rhs.0).map(Cents)
    }
}

impl std::ops::Add for Cents {
    type Output = Cents;

    fn add(self, rhs: Cents) -> Cents {
        Cents(self.0 + rhs.0)
    }
}

impl std::ops::AddAssign for Cents {
    fn add_assign(&mut self, rhs: Cents) {
        self.0 += rhs.0;
    }
}

impl std::fmt::Display for Cents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}
