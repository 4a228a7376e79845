//! Balance state: the `(a, b)` pair the buttons trade between.
//!
//! `a + b == BALANCE_TOTAL` holds for every value of [`Balance`]: the only
//! constructors check it and the only mutation ([`Balance::apply`]) moves one
//! step from one side to the other. The tone volume is a projection of `a`
//! and is carried alongside in [`BalanceSnapshot`] so both are always read
//! together.

use platform::Button;

/// Sum of the two balance components.
pub const BALANCE_TOTAL: u8 = 5;

/// Volume gained per step of `a`.
pub const VOLUME_STEP: f32 = 0.2;

/// A point on the `a + b = 5` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Balance {
    a: u8,
    b: u8,
}

impl Balance {
    /// Build a balance, or `None` when `a + b != 5`.
    pub const fn try_new(a: u8, b: u8) -> Option<Self> {
        match a.checked_add(b) {
            Some(BALANCE_TOTAL) => Some(Self { a, b }),
            _ => None,
        }
    }

    /// Build the balance with the given `a`, clamping `a` to 0..=5.
    #[allow(clippy::arithmetic_side_effects)] // a <= BALANCE_TOTAL after the clamp
    pub const fn from_a(a: u8) -> Self {
        let a = if a > BALANCE_TOTAL { BALANCE_TOTAL } else { a };
        Self {
            a,
            b: BALANCE_TOTAL - a,
        }
    }

    /// The `a` component (tone volume steps).
    pub const fn a(self) -> u8 {
        self.a
    }

    /// The `b` component.
    pub const fn b(self) -> u8 {
        self.b
    }

    /// The component owned by `button`.
    pub const fn component(self, button: Button) -> u8 {
        match button {
            Button::A => self.a,
            Button::B => self.b,
        }
    }

    /// `true` if `button` may still take a step from the other side.
    pub const fn has_headroom(self, button: Button) -> bool {
        self.component(button) < BALANCE_TOTAL
    }

    /// Apply an accepted shift.
    ///
    /// [`Shift`] values only come out of the debounce gate after a headroom
    /// check, so the step always stays on the line; if it would not, the
    /// balance is returned unchanged.
    #[must_use]
    pub fn apply(self, shift: Shift) -> Self {
        let (a, b) = match shift.towards {
            Button::A => (self.a.checked_add(1), self.b.checked_sub(1)),
            Button::B => (self.a.checked_sub(1), self.b.checked_add(1)),
        };
        match (a, b) {
            (Some(a), Some(b)) => Self::try_new(a, b).unwrap_or(self),
            _ => self,
        }
    }

    /// Volume projection of this balance.
    pub fn volume(self) -> VolumeMultiplier {
        VolumeMultiplier::from_balance(self)
    }
}

/// One step of balance towards a button, issued by the debounce gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Shift {
    towards: Button,
}

impl Shift {
    pub(crate) const fn towards(button: Button) -> Self {
        Self { towards: button }
    }

    /// The button whose component grows.
    pub const fn button(self) -> Button {
        self.towards
    }
}

/// Tone volume in `[0.0, 1.0]`, always `a * 0.2`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct VolumeMultiplier(f32);

impl VolumeMultiplier {
    fn from_balance(balance: Balance) -> Self {
        Self(f32::from(balance.a) * VOLUME_STEP)
    }

    /// The multiplier.
    pub const fn get(self) -> f32 {
        self.0
    }
}

/// Balance and its volume projection, published together.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BalanceSnapshot {
    /// The balance
    pub balance: Balance,
    /// `balance.a() * 0.2`
    pub volume: VolumeMultiplier,
}

impl BalanceSnapshot {
    /// Derive the snapshot for `balance`.
    pub fn new(balance: Balance) -> Self {
        Self {
            balance,
            volume: balance.volume(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn try_new_enforces_sum() {
        assert!(Balance::try_new(2, 3).is_some());
        assert!(Balance::try_new(1, 5).is_none());
        assert!(Balance::try_new(0, 0).is_none());
        assert!(Balance::try_new(255, 6).is_none());
    }

    #[test]
    fn from_a_clamps() {
        assert_eq!(Balance::from_a(9), Balance::try_new(5, 0).unwrap());
        assert_eq!(Balance::from_a(0), Balance::try_new(0, 5).unwrap());
    }

    #[test]
    fn apply_moves_one_step() {
        let start = Balance::try_new(2, 3).unwrap();
        assert_eq!(
            start.apply(Shift::towards(Button::A)),
            Balance::try_new(3, 2).unwrap()
        );
        assert_eq!(
            start.apply(Shift::towards(Button::B)),
            Balance::try_new(1, 4).unwrap()
        );
    }

    #[test]
    fn apply_without_headroom_is_identity() {
        let full = Balance::try_new(5, 0).unwrap();
        assert!(!full.has_headroom(Button::A));
        assert_eq!(full.apply(Shift::towards(Button::A)), full);
    }

    #[test]
    fn volume_tracks_a_for_every_reachable_balance() {
        for a in 0..=BALANCE_TOTAL {
            let snap = BalanceSnapshot::new(Balance::from_a(a));
            assert_eq!(snap.volume.get(), f32::from(a) * 0.2);
            assert!((0.0..=1.0).contains(&snap.volume.get()));
        }
    }
}
