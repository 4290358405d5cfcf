//! Savings pot edits and money movements.

use finboard_domain::{position_by_name, NamedEntity, Pot};

use crate::CoreError;

pub const MIN_TRANSFER: f64 = 0.01;
pub const MAX_WITHDRAWAL: f64 = 1_000_000.0;

/// Progress-bar figures for a pending deposit or withdrawal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PotPreview {
    pub new_total: f64,
    /// Share of the target covered by the money that stays in the pot.
    pub kept_percent: f64,
    /// Share of the target covered by the amount being moved.
    pub moved_percent: f64,
}

pub struct PotService;

impl PotService {
    pub fn validate(pot: &Pot) -> Result<(), CoreError> {
        if pot.name.trim().is_empty() {
            return Err(CoreError::Validation("pot name is required".into()));
        }
        if !pot.target.is_finite() || pot.target <= 0.0 {
            return Err(CoreError::Validation(format!(
                "pot target for `{}` must be greater than 0",
                pot.name
            )));
        }
        if !pot.total.is_finite() || pot.total < 0.0 {
            return Err(CoreError::Validation(format!(
                "pot total for `{}` cannot be negative",
                pot.name
            )));
        }
        if matches!(pot.theme.as_deref(), Some(theme) if theme.trim().is_empty()) {
            return Err(CoreError::Validation(format!(
                "pot theme for `{}` cannot be blank",
                pot.name
            )));
        }
        Ok(())
    }

    pub fn add(pots: &mut Vec<Pot>, pot: Pot) -> Result<(), CoreError> {
        Self::validate(&pot)?;
        if position_by_name(pots.as_slice(), pot.name()).is_some() {
            return Err(CoreError::Validation(format!(
                "a pot named `{}` already exists",
                pot.name
            )));
        }
        pots.push(pot);
        Ok(())
    }

    pub fn edit(pots: &mut [Pot], original_name: &str, updated: Pot) -> Result<(), CoreError> {
        Self::validate(&updated)?;
        let index = Self::position(pots, original_name)?;
        if pots
            .iter()
            .enumerate()
            .any(|(i, pot)| i != index && pot.name() == updated.name())
        {
            return Err(CoreError::Validation(format!(
                "a pot named `{}` already exists",
                updated.name
            )));
        }
        pots[index] = updated;
        Ok(())
    }

    pub fn remove(pots: &mut Vec<Pot>, name: &str) -> Result<Pot, CoreError> {
        let index = Self::position(pots, name)?;
        Ok(pots.remove(index))
    }

    /// Adds money to a pot and returns its new total.
    pub fn deposit(pots: &mut [Pot], name: &str, amount: f64) -> Result<f64, CoreError> {
        Self::check_amount(amount, f64::INFINITY)?;
        let index = Self::position(pots, name)?;
        let pot = &mut pots[index];
        pot.total += amount;
        Ok(pot.total)
    }

    /// Takes money out of a pot and returns its new total.
    pub fn withdraw(pots: &mut [Pot], name: &str, amount: f64) -> Result<f64, CoreError> {
        Self::check_amount(amount, MAX_WITHDRAWAL)?;
        let index = Self::position(pots, name)?;
        let pot = &mut pots[index];
        if amount > pot.total {
            return Err(CoreError::Validation(format!(
                "cannot withdraw ${:.2} from `{}` holding ${:.2}",
                amount, pot.name, pot.total
            )));
        }
        pot.total = (pot.total - amount).max(0.0);
        Ok(pot.total)
    }

    pub fn total_saved(pots: &[Pot]) -> f64 {
        pots.iter().map(|pot| pot.total).sum()
    }

    pub fn preview_deposit(pot: &Pot, amount: f64) -> PotPreview {
        let added = amount.max(0.0);
        let new_total = pot.total + added;
        // The deposit bar splits the new total, not the target.
        let scale = if new_total > 0.0 { new_total } else { 1.0 };
        PotPreview {
            new_total,
            kept_percent: pot.total / scale * 100.0,
            moved_percent: added / scale * 100.0,
        }
    }

    pub fn preview_withdraw(pot: &Pot, amount: f64) -> PotPreview {
        let withdrawn = amount.max(0.0);
        let new_total = (pot.total - withdrawn).max(0.0);
        let target = if pot.target > 0.0 { pot.target } else { 1.0 };
        PotPreview {
            new_total,
            kept_percent: new_total / target * 100.0,
            moved_percent: withdrawn / target * 100.0,
        }
    }

    fn position(pots: &[Pot], name: &str) -> Result<usize, CoreError> {
        position_by_name(pots, name).ok_or_else(|| CoreError::PotNotFound(name.to_string()))
    }

    fn check_amount(amount: f64, max: f64) -> Result<(), CoreError> {
        if !amount.is_finite() || amount < MIN_TRANSFER {
            return Err(CoreError::Validation(
                "amount must be greater than 0".into(),
            ));
        }
        if amount > max {
            return Err(CoreError::Validation(format!(
                "amount cannot exceed ${max:.0}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pots() -> Vec<Pot> {
        vec![
            Pot::new("Savings", 2000.0).with_total(159.0),
            Pot::new("Holiday", 1440.0).with_total(720.0),
        ]
    }

    #[test]
    fn deposit_and_withdraw_update_totals() {
        let mut pots = pots();
        assert_eq!(PotService::deposit(&mut pots, "Savings", 41.0).unwrap(), 200.0);
        assert_eq!(PotService::withdraw(&mut pots, "Holiday", 720.0).unwrap(), 0.0);
        assert_eq!(PotService::total_saved(&pots), 200.0);
    }

    #[test]
    fn transfers_validate_amounts() {
        let mut pots = pots();
        assert!(PotService::deposit(&mut pots, "Savings", 0.0).is_err());
        assert!(PotService::deposit(&mut pots, "Savings", f64::NAN).is_err());
        assert!(PotService::withdraw(&mut pots, "Savings", 2_000_000.0).is_err());
        let err = PotService::withdraw(&mut pots, "Savings", 500.0).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert_eq!(pots[0].total, 159.0);
        let err = PotService::deposit(&mut pots, "Gadgets", 5.0).unwrap_err();
        assert!(matches!(err, CoreError::PotNotFound(_)));
    }

    #[test]
    fn add_rejects_duplicates_and_invalid_pots() {
        let mut pots = pots();
        assert!(PotService::add(&mut pots, Pot::new("Savings", 10.0)).is_err());
        assert!(PotService::add(&mut pots, Pot::new("Car", -1.0)).is_err());
        assert!(PotService::add(&mut pots, Pot::new("Car", 10.0).with_total(-3.0)).is_err());
        PotService::add(&mut pots, Pot::new("Car", 5000.0).with_theme("#826CB0")).unwrap();
        assert_eq!(pots.len(), 3);
    }

    #[test]
    fn edit_and_remove_by_name() {
        let mut pots = pots();
        PotService::edit(&mut pots, "Holiday", Pot::new("Trip", 1500.0).with_total(720.0))
            .unwrap();
        assert_eq!(pots[1].name, "Trip");
        let removed = PotService::remove(&mut pots, "Trip").unwrap();
        assert_eq!(removed.target, 1500.0);
        assert!(matches!(
            PotService::remove(&mut pots, "Trip"),
            Err(CoreError::PotNotFound(_))
        ));
    }

    #[test]
    fn previews_split_progress_bars() {
        let pot = Pot::new("Gift", 100.0).with_total(30.0);
        let deposit = PotService::preview_deposit(&pot, 10.0);
        assert_eq!(deposit.new_total, 40.0);
        assert_eq!(deposit.kept_percent, 75.0);
        assert_eq!(deposit.moved_percent, 25.0);

        let withdraw = PotService::preview_withdraw(&pot, 50.0);
        assert_eq!(withdraw.new_total, 0.0);
        assert_eq!(withdraw.kept_percent, 0.0);
        assert_eq!(withdraw.moved_percent, 50.0);
    }
}
