//! `en-US` display formatting for course facts.

use chrono::NaiveDate;

use crate::courses::Currency;

/// Formats a price with its currency symbol and two decimal places (`$129.00`).
pub fn price(amount: f64, currency: Currency) -> String {
	format!("{}{amount:.2}", currency.symbol())
}

/// Formats an integer with thousands separators (`1273` becomes `1,273`).
pub fn thousands(n: u32) -> String {
	let digits = n.to_string();
	let mut out = String::with_capacity(digits.len() + digits.len() / 3);

	for (i, c) in digits.chars().enumerate() {
		if i > 0 && (digits.len() - i) % 3 == 0 {
			out.push(',');
		}

		out.push(c);
	}

	out
}

/// Formats a date as an `en-US` medium-length date (`Nov 15, 2025`).
pub fn medium_date(date: NaiveDate) -> String {
	date.format("%b %-d, %Y").to_string()
}
