//! # Monthly Report
//!
//! Six-month activity summary for the dashboard.
//!
//! ```text
//!   today = 2024-06-15
//!
//!   Jan    Feb    Mar    Apr    May    Jun
//!   ├──────┼──────┼──────┼──────┼──────┼──────┤
//!   oldest                              current month (partial)
//! ```
//!
//! A record belongs to the month its `created_at` falls in (UTC). Revenue
//! and profit come from trainings only; quotations and leads are counted.

use chrono::{DateTime, Datelike, Months, NaiveDate, Utc};
use serde::Serialize;

use crate::money::Money;
use crate::types::{Lead, Quotation, Training};

/// Number of months covered by [`monthly_stats`].
pub const REPORT_MONTHS: u32 = 6;

/// Activity for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyStat {
    /// Short month name, e.g. `"Jan"`.
    pub month: String,
    pub revenue: Money,
    pub profit: Money,
    pub trainings: usize,
    pub quotations: usize,
    pub leads: usize,
}

/// Builds stats for the six calendar months ending with `today`'s month,
/// oldest first.
///
/// A training with a reversed date range is counted but adds nothing to
/// revenue or profit.
pub fn monthly_stats(
    today: NaiveDate,
    trainings: &[Training],
    quotations: &[Quotation],
    leads: &[Lead],
) -> Vec<MonthlyStat> {
    let current = first_of_month(today);

    (0..REPORT_MONTHS)
        .rev()
        .filter_map(|back| current.checked_sub_months(Months::new(back)))
        .map(|start| {
            let in_month = |at: &DateTime<Utc>| same_month(at.date_naive(), start);

            let month_trainings: Vec<&Training> =
                trainings.iter().filter(|t| in_month(&t.created_at)).collect();

            let revenue: Money = month_trainings
                .iter()
                .map(|t| t.revenue().unwrap_or_default())
                .sum();
            let costs: Money = month_trainings
                .iter()
                .map(|t| t.cost().unwrap_or_default())
                .sum();

            MonthlyStat {
                month: start.format("%b").to_string(),
                revenue,
                profit: revenue - costs,
                trainings: month_trainings.len(),
                quotations: quotations.iter().filter(|q| in_month(&q.created_at)).count(),
                leads: leads.iter().filter(|l| in_month(&l.created_at)).count(),
            }
        })
        .collect()
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn same_month(date: NaiveDate, month_start: NaiveDate) -> bool {
    date.year() == month_start.year() && date.month() == month_start.month()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DailyRates, LeadStatus, QuotationStatus, TrainingStatus};
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn training(created_at: DateTime<Utc>, start: NaiveDate, end: NaiveDate) -> Training {
        Training {
            id: "t".to_string(),
            client_name: "Acme".to_string(),
            training_type: "Rust".to_string(),
            start_date: start,
            end_date: end,
            trainer: "Priya".to_string(),
            trainer_email: None,
            costs: DailyRates {
                trainer_per_day: Money::from_rupees(600),
                lab_per_day: Money::zero(),
                platform_per_day: Money::zero(),
            },
            prices: DailyRates {
                trainer_per_day: Money::from_rupees(1_000),
                lab_per_day: Money::zero(),
                platform_per_day: Money::zero(),
            },
            status: TrainingStatus::Confirmed,
            created_at,
        }
    }

    fn quotation(created_at: DateTime<Utc>) -> Quotation {
        Quotation {
            id: "q".to_string(),
            quotation_number: String::new(),
            date: None,
            lead_id: None,
            client_name: "Acme".to_string(),
            contact_person: String::new(),
            email: String::new(),
            phone: String::new(),
            items: vec![],
            subtotal: Money::zero(),
            gst: Money::zero(),
            total: Money::zero(),
            notes: None,
            status: QuotationStatus::Pending,
            last_modified: None,
            created_at,
        }
    }

    fn lead(created_at: DateTime<Utc>) -> Lead {
        Lead {
            id: "l".to_string(),
            lead_number: String::new(),
            date: None,
            company_name: "Acme".to_string(),
            contact_person: String::new(),
            email: String::new(),
            phone: String::new(),
            course: String::new(),
            participants: None,
            requirements: String::new(),
            status: LeadStatus::New,
            created_at,
        }
    }

    #[test]
    fn test_six_months_oldest_first() {
        let stats = monthly_stats(date(2024, 6, 15), &[], &[], &[]);
        let labels: Vec<&str> = stats.iter().map(|s| s.month.as_str()).collect();
        assert_eq!(labels, vec!["Jan", "Feb", "Mar", "Apr", "May", "Jun"]);
        assert!(stats.iter().all(|s| s.revenue.is_zero() && s.trainings == 0));
    }

    #[test]
    fn test_window_crosses_year_boundary() {
        let stats = monthly_stats(date(2024, 2, 29), &[], &[], &[]);
        let labels: Vec<&str> = stats.iter().map(|s| s.month.as_str()).collect();
        assert_eq!(labels, vec!["Sep", "Oct", "Nov", "Dec", "Jan", "Feb"]);
    }

    #[test]
    fn test_records_bucketed_by_created_month() {
        let trainings = vec![
            // 3 days: revenue 3000, cost 1800
            training(at(2024, 5, 31, 23), date(2024, 6, 3), date(2024, 6, 5)),
            training(at(2024, 6, 1, 0), date(2024, 6, 10), date(2024, 6, 10)),
            // Outside the window
            training(at(2023, 12, 31, 12), date(2024, 1, 1), date(2024, 1, 1)),
        ];
        let quotations = vec![quotation(at(2024, 5, 2, 9)), quotation(at(2024, 5, 20, 9))];
        let leads = vec![lead(at(2024, 1, 1, 0)), lead(at(2024, 6, 30, 23))];

        let stats = monthly_stats(date(2024, 6, 15), &trainings, &quotations, &leads);

        let may = &stats[4];
        assert_eq!(may.month, "May");
        assert_eq!(may.trainings, 1);
        assert_eq!(may.revenue, Money::from_rupees(3_000));
        assert_eq!(may.profit, Money::from_rupees(1_200));
        assert_eq!(may.quotations, 2);
        assert_eq!(may.leads, 0);

        let jun = &stats[5];
        assert_eq!(jun.trainings, 1);
        assert_eq!(jun.revenue, Money::from_rupees(1_000));
        assert_eq!(jun.leads, 1);

        let jan = &stats[0];
        assert_eq!(jan.trainings, 0);
        assert_eq!(jan.leads, 1);
    }

    #[test]
    fn test_reversed_training_counts_without_revenue() {
        let trainings = vec![training(at(2024, 6, 2, 0), date(2024, 6, 5), date(2024, 6, 1))];
        let stats = monthly_stats(date(2024, 6, 15), &trainings, &[], &[]);

        assert_eq!(stats[5].trainings, 1);
        assert!(stats[5].revenue.is_zero());
        assert!(stats[5].profit.is_zero());
    }
}
