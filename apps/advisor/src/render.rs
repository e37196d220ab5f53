//! Text and JSON rendering of advisor results.

use std::fmt::Write as _;

use smartshop_core::{Coins, ProductSnapshot, PurchaseReceipt, SearchOutcome};

use crate::error::AdvisorResult;

/// Renders a search outcome as a table.
///
/// ```text
/// Step  Product              Cost        Points
/// ----  -------------------  ----------  ------
///    1  DSA Book                4000.00      30
///    2  DSA Book                4200.00      30
///
/// Total: 60 points for 8200.00 coins (complete, 12 nodes)
/// ```
pub fn plan_text(outcome: &SearchOutcome) -> String {
    let mut out = String::new();

    if outcome.plan.is_empty() {
        out.push_str("No affordable purchases.\n");
    } else {
        let _ = writeln!(out, "{:>4}  {:<24}  {:>12}  {:>6}", "Step", "Product", "Cost", "Points");
        let _ = writeln!(out, "{:->4}  {:-<24}  {:->12}  {:->6}", "", "", "", "");
        for step in &outcome.plan.steps {
            let _ = writeln!(
                out,
                "{:>4}  {:<24}  {:>12}  {:>6}",
                step.step,
                truncate(&step.product_name, 24),
                step.cost.to_string(),
                step.points
            );
        }
        out.push('\n');
    }

    let _ = writeln!(
        out,
        "Total: {} points for {} coins ({}, {} nodes)",
        outcome.total_points,
        outcome.plan.total_cost(),
        outcome.completion,
        outcome.nodes_explored
    );
    out
}

/// Renders the prices a product will have after each of its next purchases.
pub fn trajectory_text(product: &ProductSnapshot, prices: &[Coins]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} (stock {}): current price {}",
        product.name, product.stock, product.price
    );

    if prices.is_empty() {
        out.push_str("No purchases possible.\n");
        return out;
    }

    for (i, price) in prices.iter().enumerate() {
        let _ = writeln!(
            out,
            "  after purchase {:>2}: {:>12}  (stock {})",
            i + 1,
            price.to_string(),
            product.stock - i as i64 - 1
        );
    }
    out
}

/// Renders a purchase receipt.
pub fn receipt_text(receipt: &PurchaseReceipt) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Bought 1 x {}", receipt.product.name);
    let _ = writeln!(out, "  paid:        {}", receipt.price_paid);
    let _ = writeln!(out, "  points:      +{}", receipt.points_gained);
    let _ = writeln!(out, "  coins left:  {}", receipt.coins_remaining);
    let _ = writeln!(out, "  new price:   {}", receipt.product.price);
    let _ = writeln!(out, "  stock left:  {}", receipt.product.stock);
    let _ = writeln!(
        out,
        "  recorded at: {}",
        receipt.history_point.recorded_at.to_rfc3339()
    );
    out
}

/// Pretty JSON for any serializable result.
pub fn json<T: serde::Serialize>(value: &T) -> AdvisorResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn truncate(name: &str, max: usize) -> String {
    if name.chars().count() <= max {
        name.to_string()
    } else {
        let mut short: String = name.chars().take(max - 1).collect();
        short.push('…');
        short
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartshop_core::{Plan, PlanStep, SearchCompletion};

    fn outcome() -> SearchOutcome {
        SearchOutcome {
            plan: Plan {
                steps: vec![
                    PlanStep {
                        step: 1,
                        product_name: "DSA Book".into(),
                        cost: Coins::new(4000.0),
                        points: 30,
                    },
                    PlanStep {
                        step: 2,
                        product_name: "DSA Book".into(),
                        cost: Coins::new(4200.0),
                        points: 30,
                    },
                ],
            },
            total_points: 60,
            nodes_explored: 12,
            completion: SearchCompletion::Complete,
        }
    }

    #[test]
    fn test_plan_text() {
        let text = plan_text(&outcome());
        assert!(text.contains("DSA Book"));
        assert!(text.contains("4200.00"));
        assert!(text.contains("Total: 60 points for 8200.00 coins (complete, 12 nodes)"));
    }

    #[test]
    fn test_empty_plan_text() {
        let empty = SearchOutcome {
            plan: Plan::empty(),
            total_points: 0,
            nodes_explored: 1,
            completion: SearchCompletion::NodeBudgetExhausted,
        };
        let text = plan_text(&empty);
        assert!(text.starts_with("No affordable purchases."));
        assert!(text.contains("partial (node budget exhausted)"));
    }

    #[test]
    fn test_plan_json_uses_camel_case() {
        let out = json(&outcome()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["totalPoints"], 60);
        assert_eq!(value["plan"]["steps"][1]["productName"], "DSA Book");
        assert_eq!(value["completion"], "complete");
    }

    #[test]
    fn test_trajectory_text() {
        let product = ProductSnapshot::new("w", "Widget", Coins::new(100.0), 2, 1);
        let text = trajectory_text(&product, &[Coins::new(150.0), Coins::new(300.0)]);
        assert!(text.contains("after purchase  1:       150.00  (stock 1)"));
        assert!(text.contains("after purchase  2:       300.00  (stock 0)"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 5), "abcd…");
    }
}
