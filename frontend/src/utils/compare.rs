use super::traders::TraderRecord;

pub const MAX_COMPARED: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub enum SelectionChange {
  Added,
  Removed,
  /// Already holding `MAX_COMPARED`; nothing changed.
  Full,
}

/// Traders picked for the side-by-side view, in pick order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompareSelection {
  picked: Vec<TraderRecord>,
}

impl CompareSelection {
  pub fn toggle(&mut self, trader: &TraderRecord) -> SelectionChange {
    if let Some(pos) = self.picked.iter().position(|t| t.id == trader.id) {
      self.picked.remove(pos);
      return SelectionChange::Removed;
    }
    if self.picked.len() >= MAX_COMPARED {
      return SelectionChange::Full;
    }
    self.picked.push(trader.clone());
    SelectionChange::Added
  }

  pub fn contains(&self, id: &str) -> bool {
    self.picked.iter().any(|t| t.id == id)
  }

  pub fn traders(&self) -> &[TraderRecord] {
    &self.picked
  }

  pub fn len(&self) -> usize {
    self.picked.len()
  }

  pub fn ready(&self) -> bool {
    self.picked.len() >= 2
  }

  pub fn clear(&mut self) {
    self.picked.clear();
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rust_decimal_macros::dec;
  use crate::utils::traders::tests::trader;

  #[test]
  fn fourth_pick_is_rejected() {
    let mut sel = CompareSelection::default();
    for handle in ["a", "b", "c"] {
      assert_eq!(sel.toggle(&trader(handle, dec!(1))), SelectionChange::Added);
    }
    assert_eq!(sel.toggle(&trader("d", dec!(1))), SelectionChange::Full);
    assert_eq!(sel.len(), 3);
    assert!(!sel.contains("d"));
  }

  #[test]
  fn toggling_twice_deselects() {
    let mut sel = CompareSelection::default();
    let t = trader("a", dec!(1));
    sel.toggle(&t);
    assert!(!sel.ready());
    sel.toggle(&trader("b", dec!(1)));
    assert!(sel.ready());
    assert_eq!(sel.toggle(&t), SelectionChange::Removed);
    assert_eq!(sel.traders().iter().map(|t| t.id.as_str()).collect::<Vec<_>>(), vec!["b"]);
  }
}
