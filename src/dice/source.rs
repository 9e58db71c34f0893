//! Dice sources: seeded random and scripted.

use crate::core::{GameRng, LudoError, Result, DIE_FACES};

/// Anything that can produce die rolls in `1..=6`.
///
/// The turn engine draws exactly one value per call, in order, so a
/// scripted source sees the same call sequence a random one would.
pub trait DiceSource {
    /// Draw the next roll.
    fn roll(&mut self) -> u8;
}

impl DiceSource for GameRng {
    fn roll(&mut self) -> u8 {
        self.roll_die()
    }
}

impl<D: DiceSource + ?Sized> DiceSource for Box<D> {
    fn roll(&mut self) -> u8 {
        (**self).roll()
    }
}

impl<D: DiceSource + ?Sized> DiceSource for &mut D {
    fn roll(&mut self) -> u8 {
        (**self).roll()
    }
}

/// Replays a fixed sequence of rolls, starting over when it runs out.
///
/// ```
/// use rust_ludo::dice::{DiceSource, ScriptedDice};
///
/// let mut dice = ScriptedDice::new([6, 3]).unwrap();
/// assert_eq!(dice.roll(), 6);
/// assert_eq!(dice.roll(), 3);
/// assert_eq!(dice.roll(), 6);
/// assert_eq!(dice.rolls_drawn(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptedDice {
    values: Vec<u8>,
    drawn: usize,
}

impl ScriptedDice {
    /// Build from a sequence of faces; every value must be in `1..=6`.
    pub fn new(values: impl IntoIterator<Item = u8>) -> Result<Self> {
        let values: Vec<u8> = values.into_iter().collect();
        if values.is_empty() {
            return Err(LudoError::EmptyDiceScript);
        }
        if let Some(&bad) = values.iter().find(|&&v| !(1..=DIE_FACES).contains(&v)) {
            return Err(LudoError::InvalidDice(bad));
        }
        Ok(Self { values, drawn: 0 })
    }

    /// How many rolls have been drawn so far.
    #[must_use]
    pub fn rolls_drawn(&self) -> usize {
        self.drawn
    }
}

impl DiceSource for ScriptedDice {
    fn roll(&mut self) -> u8 {
        let value = self.values[self.drawn % self.values.len()];
        self.drawn += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_replays_in_order_and_cycles() {
        let mut dice = ScriptedDice::new([1, 2, 3]).unwrap();
        let rolls: Vec<_> = (0..7).map(|_| dice.roll()).collect();

        assert_eq!(rolls, vec![1, 2, 3, 1, 2, 3, 1]);
        assert_eq!(dice.rolls_drawn(), 7);
    }

    #[test]
    fn test_scripted_rejects_bad_faces() {
        assert!(matches!(ScriptedDice::new([3, 0]), Err(LudoError::InvalidDice(0))));
        assert!(matches!(ScriptedDice::new([7]), Err(LudoError::InvalidDice(7))));
        assert!(matches!(
            ScriptedDice::new(Vec::new()),
            Err(LudoError::EmptyDiceScript)
        ));
    }

    #[test]
    fn test_boxed_source_delegates() {
        let mut boxed: Box<dyn DiceSource> = Box::new(GameRng::new(5));
        let mut plain = GameRng::new(5);

        for _ in 0..10 {
            assert_eq!(boxed.roll(), plain.roll());
        }
    }
}
