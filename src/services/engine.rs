//! Cart engine - input validation and total recomputation
//!
//! One submission validates every entry field and, only if all of them pass,
//! commits a wholesale recompute of quantities and totals. A single bad field
//! rejects the entire pass and leaves the prior cart untouched.

use crate::domain::{CartState, Catalog, Cents, SummaryLine};
use std::collections::HashMap;
use thiserror::Error;
use tracing::{info, warn};

/// Neutral status line shown while input is acceptable
pub const PROMPT: &str = "Enter the item quantity you would like in the boxes below.";

/// Why a submission was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantityError {
    /// A field held a negative whole number
    #[error("Please enter positive whole numbers only.")]
    Negative { item: String },
    /// A field held non-blank text that is not a whole number
    #[error("Please enter only whole numbers for the item quantities.")]
    NotWhole { item: String },
}

/// Holds the catalog, the committed cart, and the current status message
#[derive(Debug, Clone)]
pub struct CartEngine {
    catalog: Catalog,
    state: CartState,
    message: String,
}

impl CartEngine {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog, state: CartState::default(), message: PROMPT.to_string() }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Cart committed by the last successful submission
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Current status line: the neutral prompt, or the last rejection text
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Classify one raw entry field. `Ok(None)` means blank (after trimming).
    fn parse_quantity(item: &str, raw: &str) -> Result<Option<u32>, QuantityError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        match raw.parse::<i64>() {
            Ok(n) if n < 0 => Err(QuantityError::Negative { item: item.to_string() }),
            Ok(n) => u32::try_from(n)
                .map(Some)
                .map_err(|_| QuantityError::NotWhole { item: item.to_string() }),
            // Literals too large for i64 still classify by sign: a minus
            // followed by digits is a negative whole number, however long.
            Err(_) if Self::is_negative_literal(raw) => {
                Err(QuantityError::Negative { item: item.to_string() })
            }
            Err(_) => Err(QuantityError::NotWhole { item: item.to_string() }),
        }
    }

    fn is_negative_literal(raw: &str) -> bool {
        match raw.strip_prefix('-') {
            Some(digits) => !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()),
            None => false,
        }
    }

    /// Validate all entry fields and recompute the cart.
    ///
    /// `raw_inputs` maps catalog item names to raw entry text; missing keys
    /// count as blank. Blank fields keep their stored quantity but contribute
    /// nothing to this pass's totals - only items entered non-blank in this
    /// submission are counted.
    pub fn submit(
        &mut self,
        raw_inputs: &HashMap<String, String>,
    ) -> Result<&CartState, QuantityError> {
        let mut next = self.state.clone();
        let mut grand_count: u32 = 0;
        let mut total_price = Cents::ZERO;

        for item in self.catalog.items() {
            let raw = raw_inputs.get(&item.name).map(String::as_str).unwrap_or("");
            match Self::parse_quantity(&item.name, raw) {
                Ok(None) => continue,
                Ok(Some(quantity)) => {
                    next.set_quantity(&item.name, quantity);
                    if quantity > 0 {
                        // Fields validate independently, so the running sums
                        // can still overflow; reject the pass rather than wrap.
                        let summed = item
                            .unit_price
                            .checked_times(quantity)
                            .and_then(|line| total_price.checked_add(line))
                            .and_then(|total| grand_count.checked_add(quantity).map(|c| (total, c)));
                        match summed {
                            Some((total, count)) => {
                                total_price = total;
                                grand_count = count;
                            }
                            None => {
                                let e = QuantityError::NotWhole { item: item.name.clone() };
                                warn!(item = %item.name, quantity, "submission_overflowed");
                                self.message = e.to_string();
                                return Err(e);
                            }
                        }
                    }
                }
                Err(e) => {
                    warn!(item = %item.name, raw = %raw, reason = %e, "submission_rejected");
                    self.message = e.to_string();
                    return Err(e);
                }
            }
        }

        next.set_totals(grand_count, total_price);
        self.state = next;
        self.message = PROMPT.to_string();
        info!(grand_count, total = %total_price, "cart_updated");
        Ok(&self.state)
    }

    /// Cart summary in catalog order, quantities > 0 only.
    ///
    /// Pure projection of committed state: lazy, finite, and identical on
    /// repeated calls until the next successful submission.
    pub fn summary(&self) -> impl Iterator<Item = SummaryLine> + '_ {
        self.catalog.items().iter().filter_map(|item| {
            let quantity = self.state.quantity(&item.name);
            (quantity > 0).then(|| SummaryLine {
                name: item.name.clone(),
                quantity,
                unit_price: item.unit_price,
                line_total: item.unit_price.times(quantity),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    fn engine() -> CartEngine {
        CartEngine::new(Catalog::default())
    }

    #[test]
    fn test_submit_success_recomputes_totals() {
        let mut engine = engine();
        let state = engine
            .submit(&inputs(&[
                ("Cookie", "2"),
                ("Sandwich", "1"),
                ("Water", "0"),
                ("Candy", "0"),
                ("Soda", "0"),
            ]))
            .unwrap();

        assert_eq!(state.total_price(), Cents(1000));
        assert_eq!(state.grand_count(), 3);
        assert_eq!(engine.message(), PROMPT);

        let lines: Vec<(String, u32, Cents)> =
            engine.summary().map(|l| (l.name, l.quantity, l.line_total)).collect();
        assert_eq!(
            lines,
            vec![
                ("Cookie".to_string(), 2, Cents(400)),
                ("Sandwich".to_string(), 1, Cents(600)),
            ]
        );
    }

    #[test]
    fn test_negative_rejects_whole_submission() {
        let mut engine = engine();
        engine.submit(&inputs(&[("Cookie", "1")])).unwrap();

        let err = engine
            .submit(&inputs(&[
                ("Cookie", "2"),
                ("Sandwich", ""),
                ("Water", "0"),
                ("Candy", "-1"),
                ("Soda", "3"),
            ]))
            .unwrap_err();

        assert_eq!(err, QuantityError::Negative { item: "Candy".to_string() });
        assert_eq!(err.to_string(), "Please enter positive whole numbers only.");
        assert_eq!(engine.message(), err.to_string());

        // Prior cart untouched, including the partially-parsed fields
        assert_eq!(engine.state().quantity("Cookie"), 1);
        assert_eq!(engine.state().quantity("Soda"), 0);
        assert_eq!(engine.state().grand_count(), 1);
        assert_eq!(engine.state().total_price(), Cents(200));
    }

    #[test]
    fn test_non_integer_rejects_whole_submission() {
        let mut engine = engine();
        engine.submit(&inputs(&[("Sandwich", "2")])).unwrap();

        for bad in ["abc", "1.5", "2x", "½"] {
            let err = engine.submit(&inputs(&[("Cookie", bad)])).unwrap_err();
            assert_eq!(err, QuantityError::NotWhole { item: "Cookie".to_string() });
            assert_eq!(
                engine.message(),
                "Please enter only whole numbers for the item quantities."
            );
        }

        assert_eq!(engine.state().quantity("Sandwich"), 2);
        assert_eq!(engine.state().total_price(), Cents(1200));
    }

    #[test]
    fn test_overflowing_quantity_is_rejected_as_not_whole() {
        let mut engine = engine();

        let err = engine.submit(&inputs(&[("Cookie", "99999999999")])).unwrap_err();
        assert_eq!(err, QuantityError::NotWhole { item: "Cookie".to_string() });

        let err = engine.submit(&inputs(&[("Cookie", "4294967296")])).unwrap_err();
        assert_eq!(err, QuantityError::NotWhole { item: "Cookie".to_string() });
    }

    #[test]
    fn test_quantities_that_overflow_the_totals_are_rejected() {
        let mut engine = engine();
        engine.submit(&inputs(&[("Water", "1")])).unwrap();

        // Each field alone fits in u32, but the pass's sums do not.
        let max = u32::MAX.to_string();
        let err = engine
            .submit(&inputs(&[("Cookie", max.as_str()), ("Sandwich", max.as_str())]))
            .unwrap_err();

        assert_eq!(err, QuantityError::NotWhole { item: "Sandwich".to_string() });
        // Prior cart untouched by the aborted pass
        assert_eq!(engine.state().quantity("Cookie"), 0);
        assert_eq!(engine.state().grand_count(), 1);
        assert_eq!(engine.state().total_price(), Cents(200));
    }

    #[test]
    fn test_oversized_negative_literal_is_still_negative() {
        let mut engine = engine();

        let err = engine.submit(&inputs(&[("Cookie", "-99999999999999999999")])).unwrap_err();
        assert_eq!(err, QuantityError::Negative { item: "Cookie".to_string() });
        assert_eq!(engine.message(), "Please enter positive whole numbers only.");

        // A bare minus or a signed non-number is not a negative quantity
        for bad in ["-", "-1.5", "-abc"] {
            let err = engine.submit(&inputs(&[("Cookie", bad)])).unwrap_err();
            assert_eq!(err, QuantityError::NotWhole { item: "Cookie".to_string() });
        }
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let mut engine = engine();
        let state = engine.submit(&inputs(&[("Cookie", " 3 "), ("Soda", "   ")])).unwrap();

        assert_eq!(state.quantity("Cookie"), 3);
        assert_eq!(state.grand_count(), 3);
        assert_eq!(state.total_price(), Cents(600));
    }

    #[test]
    fn test_blank_field_keeps_stored_quantity_out_of_new_total() {
        let mut engine = engine();
        engine.submit(&inputs(&[("Cookie", "2")])).unwrap();

        // Second pass: Cookie blank, only Soda entered. The stored Cookie
        // quantity survives for display, but the new totals count only Soda.
        let state = engine.submit(&inputs(&[("Cookie", ""), ("Soda", "1")])).unwrap();

        assert_eq!(state.quantity("Cookie"), 2);
        assert_eq!(state.grand_count(), 1);
        assert_eq!(state.total_price(), Cents(300));
    }

    #[test]
    fn test_message_resets_after_recovery() {
        let mut engine = engine();
        engine.submit(&inputs(&[("Cookie", "oops")])).unwrap_err();
        assert_ne!(engine.message(), PROMPT);

        engine.submit(&inputs(&[("Cookie", "1")])).unwrap();
        assert_eq!(engine.message(), PROMPT);
    }

    #[test]
    fn test_summary_is_idempotent() {
        let mut engine = engine();
        engine.submit(&inputs(&[("Water", "4"), ("Candy", "2")])).unwrap();

        let first: Vec<SummaryLine> = engine.summary().collect();
        let second: Vec<SummaryLine> = engine.summary().collect();

        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
        assert_eq!(first[0].to_string(), "Water: 4 x $2.00 = $8.00");
    }

    #[test]
    fn test_all_zero_submission_clears_totals() {
        let mut engine = engine();
        engine.submit(&inputs(&[("Cookie", "2"), ("Soda", "3")])).unwrap();

        let state = engine
            .submit(&inputs(&[
                ("Cookie", "0"),
                ("Sandwich", "0"),
                ("Water", "0"),
                ("Candy", "0"),
                ("Soda", "0"),
            ]))
            .unwrap();

        assert_eq!(state.grand_count(), 0);
        assert_eq!(state.total_price(), Cents::ZERO);
        assert_eq!(engine.summary().count(), 0);
    }
}
