//! CSV serialization of the monthly expense list.

use csv::WriterBuilder;

use crate::constants::{ISO_DATE_FORMAT, REPORT_CSV_HEADER};
use crate::errors::{Error, Result};
use crate::expenses::Expense;

/// Writes a header row followed by one `Category,Amount,Date` row per expense.
pub fn write_expenses_csv(expenses: &[Expense]) -> Result<String> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());
    writer.write_record(REPORT_CSV_HEADER)?;

    for expense in expenses {
        writer.write_record([
            expense.category.clone(),
            expense.amount.to_string(),
            expense.date.format(ISO_DATE_FORMAT).to_string(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| Error::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::timestamp;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn expense(category: &str, amount: rust_decimal::Decimal, day: u32) -> Expense {
        Expense {
            id: format!("e-{day}"),
            category: category.to_string(),
            amount,
            date: NaiveDate::from_ymd_opt(2026, 10, day).unwrap(),
            user_id: "u1".to_string(),
            created_at: timestamp(),
        }
    }

    #[test]
    fn test_empty_set_produces_header_only() {
        let csv = write_expenses_csv(&[]).unwrap();
        assert_eq!(csv.lines().collect::<Vec<_>>(), vec!["Category,Amount,Date"]);
    }

    #[test]
    fn test_rows_use_iso_dates() {
        let csv = write_expenses_csv(&[
            expense("Food", dec!(100), 3),
            expense("Transport", dec!(49.99), 19),
        ])
        .unwrap();

        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Category,Amount,Date",
                "Food,100,2026-10-03",
                "Transport,49.99,2026-10-19",
            ]
        );
    }

    #[test]
    fn test_categories_with_commas_are_quoted() {
        let csv = write_expenses_csv(&[expense("Food, drinks", dec!(7), 1)]).unwrap();
        assert!(csv.contains("\"Food, drinks\",7,2026-10-01"));
    }
}
