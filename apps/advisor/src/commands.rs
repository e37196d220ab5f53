//! # Command Handlers
//!
//! Each handler resolves its inputs (flags over config), calls the core and
//! returns the rendered output. Nothing is printed or persisted here.
//!
//! ```text
//! ┌──────────────┐   ┌──────────────────┐   ┌─────────────────────┐   ┌─────────┐
//! │ PlanArgs     │──►│ catalog + wallet │──►│ smartshop_core      │──►│ render  │
//! │ AdvisorConfig│   │ + SearchConfig   │   │ search / pricing /  │   │ text or │
//! └──────────────┘   └──────────────────┘   │ apply_purchase      │   │ JSON    │
//!                                           └─────────────────────┘   └─────────┘
//! ```

use tracing::info;

use smartshop_core::{apply_purchase, price_trajectory, search, Coins, SearchConfig};

use crate::args::{BuyArgs, PlanArgs, PricesArgs};
use crate::catalog::{find_product, load_or_seed, purchasable};
use crate::config::AdvisorConfig;
use crate::error::AdvisorResult;
use crate::render;

/// Runs `advisor plan`.
pub fn run_plan(args: &PlanArgs, config: &AdvisorConfig) -> AdvisorResult<String> {
    let catalog = load_or_seed(args.catalog.as_deref())?;
    let candidates = purchasable(&catalog);
    let wallet = Coins::new(args.coins.unwrap_or(config.wallet.coins));
    let search_config = plan_search_config(args, config);

    info!(
        products = candidates.len(),
        coins = wallet.amount(),
        step_limit = search_config.step_limit,
        "Searching for best plan"
    );

    let outcome = search(&candidates, wallet, &search_config)?;

    if args.json {
        render::json(&outcome)
    } else {
        Ok(render::plan_text(&outcome))
    }
}

/// Merges plan flags over the configured search settings.
fn plan_search_config(args: &PlanArgs, config: &AdvisorConfig) -> SearchConfig {
    let mut search_config = config.search.to_search_config();
    if let Some(steps) = args.steps {
        search_config.step_limit = steps;
    }
    if let Some(max_nodes) = args.max_nodes {
        search_config.limits.max_nodes = Some(max_nodes);
    }
    if let Some(ms) = args.time_budget_ms {
        search_config.limits.time_budget = Some(std::time::Duration::from_millis(ms));
    }
    search_config.parallel |= args.parallel;
    search_config
}

/// Runs `advisor prices`.
pub fn run_prices(args: &PricesArgs) -> AdvisorResult<String> {
    let catalog = load_or_seed(args.catalog.as_deref())?;
    let product = find_product(&catalog, &args.product)?;
    let prices = price_trajectory(product.price, product.stock, args.purchases);

    if args.json {
        render::json(&prices)
    } else {
        Ok(render::trajectory_text(product, &prices))
    }
}

/// Runs `advisor buy`.
pub fn run_buy(args: &BuyArgs, config: &AdvisorConfig) -> AdvisorResult<String> {
    let catalog = load_or_seed(args.catalog.as_deref())?;
    let product = find_product(&catalog, &args.product)?;
    let wallet = Coins::new(args.coins.unwrap_or(config.wallet.coins));

    let receipt = apply_purchase(product, wallet)?;
    info!(
        product = %receipt.product.id,
        paid = receipt.price_paid.amount(),
        new_price = receipt.product.price.amount(),
        "Purchase applied to snapshot"
    );

    if args.json {
        render::json(&receipt)
    } else {
        Ok(render::receipt_text(&receipt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AdvisorError;
    use smartshop_core::CoreError;
    use std::path::PathBuf;

    fn plan_args() -> PlanArgs {
        PlanArgs {
            catalog: None,
            coins: None,
            steps: None,
            max_nodes: None,
            time_budget_ms: None,
            parallel: false,
            json: true,
        }
    }

    fn write_catalog(dir: &tempfile::TempDir, json: &str) -> PathBuf {
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn test_plan_on_seed_catalog() {
        let mut args = plan_args();
        args.steps = Some(3);

        let out = run_plan(&args, &AdvisorConfig::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["completion"], "complete");
        let steps = value["plan"]["steps"].as_array().unwrap();
        assert!(!steps.is_empty() && steps.len() <= 3);
        let total: f64 = steps.iter().map(|s| s["cost"].as_f64().unwrap()).sum();
        assert!(total <= 50000.0);
    }

    #[test]
    fn test_plan_skips_sold_out_products() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_catalog(
            &dir,
            r#"[
                {"id": 1, "name": "Gone", "price": 1, "stock": 0, "points": 1000},
                {"id": 2, "name": "Book", "price": 10, "stock": 5, "points": 3}
            ]"#,
        );

        let mut args = plan_args();
        args.catalog = Some(path);
        args.coins = Some(10.0);

        let out = run_plan(&args, &AdvisorConfig::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["totalPoints"], 3);
        assert_eq!(value["plan"]["steps"][0]["productName"], "Book");
    }

    #[test]
    fn test_plan_flags_override_config() {
        let mut config = AdvisorConfig::default();
        config.search.step_limit = 2;
        config.search.max_nodes = Some(10);

        let mut args = plan_args();
        args.steps = Some(4);
        args.time_budget_ms = Some(100);
        args.parallel = true;

        let merged = plan_search_config(&args, &config);
        assert_eq!(merged.step_limit, 4);
        assert_eq!(merged.limits.max_nodes, Some(10));
        assert_eq!(
            merged.limits.time_budget,
            Some(std::time::Duration::from_millis(100))
        );
        assert!(merged.parallel);
    }

    #[test]
    fn test_plan_rejects_excessive_steps() {
        let mut args = plan_args();
        args.steps = Some(50);
        let err = run_plan(&args, &AdvisorConfig::default()).unwrap_err();
        assert!(matches!(err, AdvisorError::Core(CoreError::Validation(_))));
    }

    #[test]
    fn test_plan_text_output() {
        let mut args = plan_args();
        args.json = false;
        args.coins = Some(100.0);

        let out = run_plan(&args, &AdvisorConfig::default()).unwrap();
        assert!(out.starts_with("No affordable purchases."));
    }

    #[test]
    fn test_prices_for_seed_product() {
        let args = PricesArgs {
            product: "dsa book".into(),
            purchases: 2,
            catalog: None,
            json: true,
        };
        let out = run_prices(&args).unwrap();
        let prices: Vec<f64> = serde_json::from_str(&out).unwrap();
        assert_eq!(prices.len(), 2);
        assert!((prices[0] - 4200.0).abs() < 1e-9);
        assert!(prices[1] > prices[0]);
    }

    #[test]
    fn test_buy_applies_purchase() {
        let args = BuyArgs {
            product: "Apple (Fruit)".into(),
            coins: Some(1000.0),
            catalog: None,
            json: true,
        };
        let out = run_buy(&args, &AdvisorConfig::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["pricePaid"], 200.0);
        assert_eq!(value["coinsRemaining"], 800.0);
        assert_eq!(value["product"]["stock"], 99);
        assert_eq!(value["pointsGained"], 2);
    }

    #[test]
    fn test_buy_unknown_product() {
        let args = BuyArgs {
            product: "Laptop".into(),
            coins: None,
            catalog: None,
            json: false,
        };
        let err = run_buy(&args, &AdvisorConfig::default()).unwrap_err();
        assert!(matches!(err, AdvisorError::Core(CoreError::ProductNotFound(_))));
    }

    #[test]
    fn test_buy_without_enough_coins() {
        let args = BuyArgs {
            product: "iPhone 15 Pro".into(),
            coins: None,
            catalog: None,
            json: false,
        };
        let err = run_buy(&args, &AdvisorConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            AdvisorError::Core(CoreError::InsufficientCoins { .. })
        ));
    }
}
