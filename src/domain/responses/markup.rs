//! Reply markup helpers.
//!
//! Replies carry a small HTML subset: bold, links opening in a new tab,
//! strike-through and product image cards. Store-supplied text is escaped
//! before it is interpolated. Every helper closes the tags it opens.

use crate::domain::foundation::{Money, Percentage};
use crate::domain::storefront::{Collection, Product};

/// Escapes text for use inside element content or attribute values.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Escapes a URL for an `href`.
///
/// Ampersands are left alone: they separate query parameters built from
/// already percent-encoded values.
fn escape_href(href: &str) -> String {
    href.replace('"', "%22").replace('<', "%3C").replace('>', "%3E")
}

/// `<a href=".." target="_blank">label</a>`
pub fn link(href: &str, label: &str) -> String {
    format!(
        "<a href=\"{}\" target=\"_blank\">{}</a>",
        escape_href(href),
        escape(label)
    )
}

/// Wraps already-built markup in `<strong>`.
pub fn strong(inner: &str) -> String {
    format!("<strong>{}</strong>", inner)
}

pub fn price(amount: Money) -> String {
    format!("${}", amount)
}

fn product_heading(product: &Product) -> String {
    format!(
        "{} - {}",
        strong(&link(&product.url(), &product.title)),
        price(product.price)
    )
}

/// One product as a bullet line, or as an image card when enabled and the
/// product has an image.
pub fn product_line(product: &Product, with_images: bool) -> String {
    match product.image_url.as_deref().filter(|_| with_images) {
        Some(image) => format!(
            "<div class=\"concierge-product-card\"><img src=\"{}\" alt=\"{}\"><div>{}</div></div>",
            escape_href(image),
            escape(&product.title),
            product_heading(product)
        ),
        None => format!("• {}", product_heading(product)),
    }
}

/// A sale product: price, struck-through compare price and discount.
pub fn sale_line(product: &Product, compare_price: Money, discount: Percentage) -> String {
    format!(
        "• {} <strike>{}</strike> ({} off)",
        product_heading(product),
        price(compare_price),
        discount
    )
}

/// A linked collection with its product count.
pub fn collection_line(collection: &Collection) -> String {
    format!(
        "• {} ({} items)",
        strong(&link(&collection.url(), &collection.title)),
        collection.products_count
    )
}

/// Renders the first `limit` items, one per line, followed by
/// "...and N more {noun}." when items were left out.
pub fn capped_list<T>(
    items: &[T],
    limit: usize,
    noun: &str,
    render: impl Fn(&T) -> String,
) -> String {
    let mut out = items
        .iter()
        .take(limit)
        .map(|item| render(item))
        .collect::<Vec<_>>()
        .join("\n");
    if items.len() > limit {
        out.push_str(&format!("\n\n...and {} more {}.", items.len() - limit, noun));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tote() -> Product {
        Product::new("Tote", "tote", Money::from_units(40))
    }

    mod escaping {
        use super::*;

        #[test]
        fn escapes_html_specials() {
            assert_eq!(
                escape("<b>\"Tom\" & 'Jerry'</b>"),
                "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
            );
        }

        #[test]
        fn link_escapes_label_but_keeps_query_separators() {
            assert_eq!(
                link("/track?a=1&b=2", "Bags & <Co>"),
                "<a href=\"/track?a=1&b=2\" target=\"_blank\">Bags &amp; &lt;Co&gt;</a>"
            );
        }

        #[test]
        fn link_href_cannot_break_out_of_attribute() {
            assert!(!link("/x\" onclick=\"y", "x").contains("\" onclick"));
        }
    }

    mod lines {
        use super::*;

        #[test]
        fn product_line_is_bold_link_with_price() {
            assert_eq!(
                product_line(&tote(), true),
                "• <strong><a href=\"/products/tote\" target=\"_blank\">Tote</a></strong> - $40"
            );
        }

        #[test]
        fn product_with_image_renders_card() {
            let product = tote().with_image("https://cdn.example/tote.jpg");
            let line = product_line(&product, true);
            assert!(line.starts_with("<div class=\"concierge-product-card\"><img src=\"https://cdn.example/tote.jpg\" alt=\"Tote\">"));
            assert!(line.ends_with("</div></div>"));
        }

        #[test]
        fn images_can_be_disabled() {
            let product = tote().with_image("https://cdn.example/tote.jpg");
            assert!(product_line(&product, false).starts_with("• "));
        }

        #[test]
        fn sale_line_strikes_compare_price() {
            let line = sale_line(&tote(), Money::from_units(50), Percentage::new(20));
            assert!(line.ends_with(" - $40 <strike>$50</strike> (20% off)"));
        }

        #[test]
        fn collection_line_links_collection() {
            let line = collection_line(&Collection::new("Bags", "bags", 12));
            assert_eq!(
                line,
                "• <strong><a href=\"/collections/bags\" target=\"_blank\">Bags</a></strong> (12 items)"
            );
        }
    }

    mod capping {
        use super::*;

        #[test]
        fn short_lists_have_no_suffix() {
            assert_eq!(capped_list(&[1, 2], 3, "items", |n| n.to_string()), "1\n2");
        }

        #[test]
        fn long_lists_report_remainder() {
            assert_eq!(
                capped_list(&[1, 2, 3, 4, 5], 3, "sale items", |n| n.to_string()),
                "1\n2\n3\n\n...and 2 more sale items."
            );
        }
    }
}
