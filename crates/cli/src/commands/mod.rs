//! CLI command implementations.

pub mod cart;
pub mod history;

use bramble_core::{CurrencyCode, PageError, Price, ProductId, ProductSnapshot};
use bramble_store::StorageError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Price argument did not parse as a non-negative decimal.
    #[error("invalid price {0:?}: expected a non-negative decimal like 12.50")]
    InvalidPrice(String),

    /// Pagination arguments were invalid.
    #[error("invalid page: {0}")]
    Page(#[from] PageError),

    /// Durable storage failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Build a product snapshot from command-line arguments.
///
/// The handle defaults to a slug derived from the title when not given.
pub(crate) fn product_from_args(
    id: &str,
    title: &str,
    price: &str,
    handle: Option<String>,
    image_url: Option<String>,
) -> Result<ProductSnapshot, CommandError> {
    let amount: Decimal = price
        .parse()
        .map_err(|_| CommandError::InvalidPrice(price.to_owned()))?;
    if amount.is_sign_negative() {
        return Err(CommandError::InvalidPrice(price.to_owned()));
    }

    Ok(ProductSnapshot {
        id: ProductId::new(id),
        handle: handle.unwrap_or_else(|| slugify(title)),
        title: title.to_owned(),
        image_url,
        price: Price::new(amount, CurrencyCode::USD),
    })
}

/// Lowercase alphanumeric slug with `-` separators.
fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_was_dash = true;
    for c in title.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
            last_was_dash = false;
        } else if !last_was_dash {
            slug.push('-');
            last_was_dash = true;
        }
    }
    slug.trim_end_matches('-').to_owned()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Wild Blackberry Jam"), "wild-blackberry-jam");
        assert_eq!(slugify("  Tea & Honey!  "), "tea-honey");
        assert_eq!(slugify("plain"), "plain");
    }

    #[test]
    fn test_product_from_args_defaults_handle() {
        let product =
            product_from_args("prod-1", "Wild Blackberry Jam", "12.50", None, None).unwrap();
        assert_eq!(product.handle, "wild-blackberry-jam");
        assert_eq!(product.price.amount, Decimal::new(1250, 2));
    }

    #[test]
    fn test_product_from_args_rejects_bad_prices() {
        assert!(matches!(
            product_from_args("p", "T", "not-a-price", None, None),
            Err(CommandError::InvalidPrice(_))
        ));
        assert!(matches!(
            product_from_args("p", "T", "-1.00", None, None),
            Err(CommandError::InvalidPrice(_))
        ));
    }
}
