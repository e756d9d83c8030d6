use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub item_id: u32,
    pub quantity: u32,
}

/// Order cart for the canteen view. Lines keep insertion order, and no
/// line ever sits at quantity zero: a decrement to zero removes it.
#[derive(Debug, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Cart {
        Cart::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn quantity_of(&self, item_id: u32) -> Option<u32> {
        self.lines.iter().find(|l| l.item_id == item_id).map(|l| l.quantity)
    }

    /// Adds one unit: increments an existing line, or opens one at
    /// quantity 1.
    pub fn add(&mut self, item_id: u32) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.item_id == item_id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine { item_id, quantity: 1 });
        }
    }

    /// Applies a signed quantity delta. A result at or below zero removes
    /// the line; a missing line is a no-op.
    pub fn update_quantity(&mut self, item_id: u32, delta: i64) {
        let Some(idx) = self.lines.iter().position(|l| l.item_id == item_id) else {
            return;
        };
        let new_quantity = i64::from(self.lines[idx].quantity) + delta;
        if new_quantity <= 0 {
            self.lines.remove(idx);
        } else {
            self.lines[idx].quantity = new_quantity as u32;
        }
    }

    pub fn remove(&mut self, item_id: u32) {
        self.lines.retain(|l| l.item_id != item_id);
    }

    /// Σ price × quantity over all lines, with prices supplied by the
    /// caller. Lines whose item no longer resolves contribute nothing.
    pub fn total<F>(&self, price_of: F) -> u64
    where
        F: Fn(u32) -> Option<u32>,
    {
        self.lines
            .iter()
            .filter_map(|l| price_of(l.item_id).map(|p| u64::from(p) * u64::from(l.quantity)))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price(item_id: u32) -> Option<u32> {
        match item_id {
            1 => Some(45),
            2 => Some(12),
            _ => None,
        }
    }

    #[test]
    fn adding_same_item_twice_accumulates_quantity() {
        let mut cart = Cart::new();
        cart.add(1);
        cart.add(1);
        assert_eq!(cart.quantity_of(1), Some(2));
        assert_eq!(cart.total(price), 90);
    }

    #[test]
    fn decrement_at_quantity_one_removes_the_line() {
        let mut cart = Cart::new();
        cart.add(1);
        cart.update_quantity(1, -1);
        assert!(cart.is_empty());
        assert_eq!(cart.quantity_of(1), None);
    }

    #[test]
    fn oversized_negative_delta_still_removes_cleanly() {
        let mut cart = Cart::new();
        cart.add(2);
        cart.add(2);
        cart.update_quantity(2, -5);
        assert!(cart.is_empty());
    }

    #[test]
    fn update_on_missing_item_is_a_no_op() {
        let mut cart = Cart::new();
        cart.update_quantity(7, 3);
        assert!(cart.is_empty());
    }

    #[test]
    fn remove_ignores_quantity() {
        let mut cart = Cart::new();
        cart.add(1);
        cart.add(1);
        cart.add(2);
        cart.remove(1);
        assert_eq!(cart.quantity_of(1), None);
        assert_eq!(cart.quantity_of(2), Some(1));
        assert_eq!(cart.total(price), 12);
    }

    #[test]
    fn no_line_rests_at_zero_quantity() {
        let mut cart = Cart::new();
        cart.add(1);
        cart.add(2);
        cart.update_quantity(1, -1);
        cart.update_quantity(2, 2);
        assert!(cart.lines().iter().all(|l| l.quantity >= 1));
    }
}
