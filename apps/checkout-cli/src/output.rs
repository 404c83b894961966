//! Receipt and catalog rendering.

use checkout_core::{Catalog, PricingRule, Receipt, RuleIndex};
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;

use crate::error::CliResult;

/// Renders a receipt as a table followed by the total.
pub fn receipt_table(receipt: &Receipt) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "SKU", "Product", "Qty", "Charged", "Unit", "Line", "Saved",
    ]);

    for line in &receipt.lines {
        table.add_row(vec![
            line.sku.clone(),
            line.name.clone(),
            line.quantity.to_string(),
            line.charged_quantity.to_string(),
            line.unit_price.to_string(),
            line.line_total.to_string(),
            line.savings.to_string(),
        ]);
    }

    format!(
        "{}\nSaved: {}\nTotal: {}",
        table,
        receipt.total_savings(),
        receipt.total
    )
}

/// Renders a receipt as pretty JSON.
pub fn receipt_json(receipt: &Receipt) -> CliResult<String> {
    Ok(serde_json::to_string_pretty(receipt)?)
}

/// Renders the catalog, one product per row.
pub fn catalog_table(catalog: &Catalog) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["SKU", "Product", "Price"]);

    for product in catalog.products() {
        table.add_row(vec![
            product.sku.clone(),
            product.name.clone(),
            product.price().to_string(),
        ]);
    }

    table.to_string()
}

/// Renders each catalog SKU's rules in the order they are folded.
pub fn rules_table(catalog: &Catalog, rules: &RuleIndex) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["SKU", "Step", "Rule", "Terms"]);

    for product in catalog.products() {
        let Some(sku_rules) = rules.rules_for(&product.sku) else {
            continue;
        };
        for (step, rule) in sku_rules.ordered().iter().enumerate() {
            table.add_row(vec![
                product.sku.clone(),
                (step + 1).to_string(),
                rule.kind().to_string(),
                describe_rule(rule),
            ]);
        }
    }

    table.to_string()
}

fn describe_rule(rule: &PricingRule) -> String {
    match rule {
        PricingRule::BuyXPayY(rule) => format!("buy {}, pay {}", rule.buy_x(), rule.pay_y()),
        PricingRule::BulkDiscount(rule) => {
            format!("{} or more at {}", rule.threshold(), rule.discounted_price())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkout_core::{Checkout, Money, PricingRule};

    fn sample_receipt() -> Receipt {
        let rules = vec![PricingRule::buy_x_pay_y("atv", 3, 2).unwrap()];
        let mut checkout = Checkout::with_default_catalog(rules);
        for sku in ["atv", "atv", "atv", "vga"] {
            checkout.scan(sku).unwrap();
        }
        checkout.receipt()
    }

    #[test]
    fn test_receipt_table_mentions_lines_and_total() {
        let rendered = receipt_table(&sample_receipt());
        assert!(rendered.contains("Apple TV"));
        assert!(rendered.contains("VGA adapter"));
        assert!(rendered.ends_with("Total: $249.00"));
        assert!(rendered.contains("Saved: $109.50"));
    }

    #[test]
    fn test_receipt_json() {
        let rendered = receipt_json(&sample_receipt()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["total"], Money::from_cents(24900).cents());
        assert_eq!(value["lines"][0]["chargedQuantity"], 2);
    }

    #[test]
    fn test_rules_table_in_fold_order() {
        let rules = vec![
            PricingRule::bulk_discount("atv", 5, Money::from_cents(9900)).unwrap(),
            PricingRule::buy_x_pay_y("atv", 3, 2).unwrap(),
        ];
        let checkout = Checkout::with_default_catalog(rules);
        let rendered = rules_table(checkout.catalog(), checkout.rules());

        let deal = rendered.find("buy 3, pay 2").unwrap();
        let bulk = rendered.find("5 or more at $99.00").unwrap();
        assert!(deal < bulk);
        assert!(rendered.contains("buy_x_pay_y"));
    }

    #[test]
    fn test_catalog_table() {
        let rendered = catalog_table(&Catalog::with_default_products());
        assert!(rendered.contains("Super iPad"));
        assert!(rendered.contains("$549.99"));
    }
}
