//! Basic usage example for assay-validator

use assay_validator::prelude::*;
use assay_validator::property;

struct Currency {
    code: String,
}

struct Product {
    name: String,
    stock: u32,
    currency: Currency,
}

fn main() {
    let rules = RuleSet::new()
        .rule_for(property!(|p: Product| p.name), not_equal(String::from("TBD")))
        .rule_for(property!(|p: Product| p.stock), greater_than(0_u32))
        .rule_for(
            property!(|p: Product| p.currency.code),
            not_equal(String::from("XXX")).with_message("$attribute_name is not a real currency"),
        );

    let good = Product {
        name: "Widget".to_owned(),
        stock: 12,
        currency: Currency {
            code: "EUR".to_owned(),
        },
    };
    let bad = Product {
        name: "TBD".to_owned(),
        stock: 0,
        currency: Currency {
            code: "XXX".to_owned(),
        },
    };

    for product in [&good, &bad] {
        match rules.validate(product) {
            Ok(report) if report.is_valid() => println!("✓ '{}' is valid", product.name),
            Ok(report) => println!("✗ '{}' is invalid\n{report}", product.name),
            Err(e) => println!("rule contract violation: {e}"),
        }
    }
}
