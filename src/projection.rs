//! Projects the surplus (or deficit) remaining at the next payday.
//!
//! The projection is a pure function of the current balance, the recorded
//! daily expenses, today's date and the configured payday. Callers recompute
//! it after any balance-affecting event.

use time::{Date, Weekday};

use crate::models::DailyExpense;

/// The projected financial position at the next payday.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    /// How many weekdays remain until the payday, counting today and the
    /// payday itself.
    pub working_days_remaining: u32,
    /// The average amount spent per recorded weekday daily expense.
    pub daily_burn: f64,
    /// The amount needed to cover the daily burn until payday.
    pub required_amount: f64,
    /// The balance left over at payday, negative when short.
    pub surplus: f64,
}

impl Projection {
    /// Project the position at the next payday from the current state.
    ///
    /// When no working days remain the required amount is zero and the whole
    /// balance counts as surplus.
    pub fn compute(
        balance: f64,
        daily_expenses: &[DailyExpense],
        today: Date,
        payday_date: u8,
    ) -> Self {
        let working_days_remaining = working_days_remaining(today, payday_date);
        let daily_burn = average_daily_burn(daily_expenses);

        let required_amount = match working_days_remaining {
            0 => 0.0,
            days => daily_burn * days as f64,
        };

        Self {
            working_days_remaining,
            daily_burn,
            required_amount,
            surplus: balance - required_amount,
        }
    }

    /// Whether the balance covers the projected spending until payday.
    pub fn is_sufficient(&self) -> bool {
        self.surplus >= 0.0
    }
}

/// Count the weekdays from `today` through the next payday, inclusive of both
/// ends.
///
/// The payday is `payday_date` of the current month, clamped to the month's
/// length, or of the next month if that date has already passed.
pub fn working_days_remaining(today: Date, payday_date: u8) -> u32 {
    let mut target = payday_in_month(today.year(), today.month(), payday_date);

    if today > target {
        let (year, month) = match today.month() {
            time::Month::December => (today.year() + 1, time::Month::January),
            month => (today.year(), month.next()),
        };
        target = payday_in_month(year, month, payday_date);
    }

    let mut count = 0;
    let mut day = today;

    while day <= target {
        if !matches!(day.weekday(), Weekday::Saturday | Weekday::Sunday) {
            count += 1;
        }

        match day.next_day() {
            Some(next) => day = next,
            None => break,
        }
    }

    count
}

/// The average amount of the daily expenses recorded on weekdays, or zero
/// when there are none.
pub fn average_daily_burn(daily_expenses: &[DailyExpense]) -> f64 {
    let weekday_amounts: Vec<f64> = daily_expenses
        .iter()
        .filter(|expense| {
            !matches!(
                expense.time.weekday(),
                Weekday::Saturday | Weekday::Sunday
            )
        })
        .map(|expense| expense.amount)
        .collect();

    if weekday_amounts.is_empty() {
        return 0.0;
    }

    weekday_amounts.iter().sum::<f64>() / weekday_amounts.len() as f64
}

/// The payday date within `month`, clamping day-of-month values past the end
/// of the month (e.g. the 31st in February) to the month's last day.
fn payday_in_month(year: i32, month: time::Month, payday_date: u8) -> Date {
    let day = payday_date.min(month.length(year));

    // The day is clamped to the month length, so the date is always valid.
    Date::from_calendar_date(year, month, day).expect("clamped day is within the month")
}


#[cfg(test)]
mod average_daily_burn_tests {
    use time::macros::datetime;

    use crate::models::DailyExpense;

    use super::average_daily_burn;

    fn daily_expense(time: time::OffsetDateTime, amount: f64) -> DailyExpense {
        DailyExpense {
            id: 1,
            name: "Coffee".to_owned(),
            category: "Food".to_owned(),
            time,
            amount,
        }
    }

    #[test]
    fn is_zero_with_no_expenses() {
        assert_eq!(average_daily_burn(&[]), 0.0);
    }

    #[test]
    fn averages_weekday_expenses() {
        let expenses = [
            daily_expense(datetime!(2024-06-03 08:00 UTC), 40_000.0),
            daily_expense(datetime!(2024-06-04 08:00 UTC), 60_000.0),
        ];

        assert_eq!(average_daily_burn(&expenses), 50_000.0);
    }

    #[test]
    fn ignores_weekend_expenses() {
        let expenses = [
            daily_expense(datetime!(2024-06-03 08:00 UTC), 40_000.0),
            // June 8th 2024 is a Saturday.
            daily_expense(datetime!(2024-06-08 08:00 UTC), 1_000_000.0),
        ];

        assert_eq!(average_daily_burn(&expenses), 40_000.0);
    }

    #[test]
    fn is_zero_when_every_expense_is_on_a_weekend() {
        let expenses = [daily_expense(datetime!(2024-06-08 08:00 UTC), 1_000_000.0)];

        assert_eq!(average_daily_burn(&expenses), 0.0);
    }
}

#[cfg(test)]
mod projection_tests {
    use time::macros::{date, datetime};

    use crate::models::DailyExpense;

    use super::Projection;

    #[test]
    fn surplus_is_balance_minus_projected_spending() {
        // Ten working days remain from Monday June 3rd to the payday on the
        // 14th.
        let daily_expenses = [DailyExpense {
            id: 1,
            name: "Lunch".to_owned(),
            category: "Food".to_owned(),
            time: datetime!(2024-06-03 12:00 UTC),
            amount: 50_000.0,
        }];

        let projection =
            Projection::compute(1_000_000.0, &daily_expenses, date!(2024 - 06 - 03), 14);

        assert_eq!(projection.working_days_remaining, 10);
        assert_eq!(projection.daily_burn, 50_000.0);
        assert_eq!(projection.required_amount, 500_000.0);
        assert_eq!(projection.surplus, 500_000.0);
        assert!(projection.is_sufficient());
    }

    #[test]
    fn deficit_is_not_sufficient() {
        let daily_expenses = [DailyExpense {
            id: 1,
            name: "Lunch".to_owned(),
            category: "Food".to_owned(),
            time: datetime!(2024-06-03 12:00 UTC),
            amount: 50_000.0,
        }];

        let projection = Projection::compute(100_000.0, &daily_expenses, date!(2024 - 06 - 03), 14);

        assert!(projection.surplus < 0.0);
        assert!(!projection.is_sufficient());
    }

    #[test]
    fn no_expenses_means_the_whole_balance_is_surplus() {
        let projection = Projection::compute(1_000_000.0, &[], date!(2024 - 06 - 03), 14);

        assert_eq!(projection.daily_burn, 0.0);
        assert_eq!(projection.surplus, 1_000_000.0);
    }
}
