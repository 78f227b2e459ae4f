//! Customer-facing quote text. Rendered only from figures already on the `Quote`.

use crate::pricing::money::format_rands;
use crate::quote::models::{Quote, QuoteLine};

const GREETING: &str =
    "Dear Customer. Thank you for reaching out to us.\nBelow is your Quote based on your request:";
const SIGN_OFF: &str =
    "Please let us know if this quote is accepted so we can proceed with printing.";

pub const MINIMUM_ORDER_NOTICE: &str =
    "YOUR ORDER IS UNDER R100.00 EXCL VAT. WE HAVE A MINIMUM ORDER AMOUNT OF R100.00 EXCL VAT";
pub const ROUNDED_CORNERS_NOTICE: &str = "Cutline with rounded Corners";

/// Renders the plain-text quote suitable for pasting into a customer message.
pub fn render_quote_text(quote: &Quote) -> String {
    let mut lines: Vec<String> = vec![
        GREETING.to_string(),
        String::new(),
        format!("Material: {}", quote.material.label()),
        String::new(),
    ];

    for line in &quote.lines {
        match line {
            QuoteLine::Priced(order) => {
                lines.push(format!(
                    "{}mm - R{} excl VAT per sticker ({} stickers per row)",
                    order.dimensions,
                    format_rands(order.layout.price_per_sticker),
                    order.layout.stickers_per_row
                ));
                lines.push(format!("{} rows - {} stickers", order.rows, order.total_stickers));
                lines.push(format!("R{} Excl VAT", format_rands(order.line_total_excl_vat)));
                if let Some(incl) = order.line_total_incl_vat {
                    lines.push(format!("Incl VAT: R{}", format_rands(incl)));
                }
            }
            QuoteLine::Rejected(rejected) => lines.push(format!(
                "Sticker {} ({}mm): {}",
                rejected.index, rejected.dimensions, rejected.reason
            )),
        }
    }

    if let Some(totals) = &quote.totals {
        lines.push(String::new());
        lines.push(format!(
            "Total: R{} Exclusive of VAT",
            format_rands(totals.total_excl_vat)
        ));
        if let Some(incl) = totals.total_incl_vat {
            lines.push(format!(
                "Total Incl VAT: R{}. the complete order total",
                format_rands(incl)
            ));
        }
    }

    for notice in &quote.notices {
        lines.push(String::new());
        lines.push(notice.clone());
    }

    lines.push(String::new());
    lines.push(SIGN_OFF.to_string());

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::PricingConstants;
    use crate::quote::aggregator::{build_quote, QuoteOptions};
    use crate::quote::form::FormValue;
    use crate::quote::models::{Material, StickerInput};

    fn sticker(width: &str, height: &str, quantity: &str) -> StickerInput {
        StickerInput {
            width: Some(FormValue::from(width)),
            height: Some(FormValue::from(height)),
            quantity: Some(FormValue::from(quantity)),
        }
    }

    #[test]
    fn test_full_quote_text() {
        let options = QuoteOptions {
            material: Some(Material::Gloss),
            vat_rate: 0.15,
            include_vat: true,
            rounded_corners: true,
            constants: PricingConstants::default(),
        };
        let stickers = [sticker("100", "150", "5"), sticker("0", "20", "1")];
        let quote = build_quote(&options, &stickers).unwrap();

        let expected = "\
Dear Customer. Thank you for reaching out to us.
Below is your Quote based on your request:

Material: Gloss

100x150mm - R6.83 excl VAT per sticker (6 stickers per row)
1 rows - 6 stickers
R40.98 Excl VAT
Incl VAT: R47.13
Sticker 2 (0x20mm): Invalid dimensions

Total: R40.98 Exclusive of VAT
Total Incl VAT: R47.13. the complete order total

YOUR ORDER IS UNDER R100.00 EXCL VAT. WE HAVE A MINIMUM ORDER AMOUNT OF R100.00 EXCL VAT

Cutline with rounded Corners

Please let us know if this quote is accepted so we can proceed with printing.
";
        assert_eq!(quote.text.as_deref(), Some(expected));
    }

    #[test]
    fn test_text_without_vat_or_notices() {
        let options = QuoteOptions {
            material: Some(Material::Matte),
            vat_rate: 0.15,
            include_vat: false,
            rounded_corners: false,
            constants: PricingConstants::default(),
        };
        let quote = build_quote(&options, &[sticker("100", "150", "60")]).unwrap();
        let text = quote.text.unwrap();

        assert!(text.contains("Material: MATT\n"));
        assert!(text.contains("10 rows - 60 stickers\nR409.80 Excl VAT\n"));
        assert!(text.contains("Total: R409.80 Exclusive of VAT\n"));
        assert!(!text.contains("Incl VAT"));
        assert!(!text.contains(MINIMUM_ORDER_NOTICE));
        assert!(text.ends_with(&format!("\n\n{SIGN_OFF}\n")));
    }
}
