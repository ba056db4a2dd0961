use crate::chart::{Chart, SummaryColumn, format_hours};
use crate::errors::AppResult;
use crate::models::DutyStatusLog;
use crate::ui::messages::{header, warning};
use crate::utils::colors::{RESET, color_for_divergence, colorize_optional};
use crate::utils::formatting::{bold, signed_hours};
use crate::utils::table::{Column, Table};

/// Supplied vs computed hours per status, one table per log.
pub fn build_table(column: &SummaryColumn, color: bool) -> Table {
    let mut table = Table::new(vec![
        Column::left("Status"),
        Column::right("Supplied"),
        Column::right("Computed"),
        Column::right("Diff"),
    ]);

    let paint = |s: String, delta: f64| -> String {
        if !color {
            return s;
        }
        let c = color_for_divergence(delta);
        if c == RESET { s } else { format!("{c}{s}{RESET}") }
    };

    for (status, supplied) in column.supplied.iter() {
        let computed = column.computed.get(status);
        let delta = supplied - computed;
        let supplied_s = format_hours(supplied);
        table.add_row(vec![
            status.title().to_string(),
            if color { colorize_optional(&supplied_s) } else { supplied_s },
            format_hours(computed),
            paint(signed_hours(delta), delta),
        ]);
    }

    let delta = column.supplied.total() - column.computed.total();
    table.add_row(vec![
        if color { bold("Total Hours") } else { "Total Hours".to_string() },
        format_hours(column.supplied.total()),
        format_hours(column.computed.total()),
        paint(signed_hours(delta), delta),
    ]);

    table
}

pub fn print_summaries(logs: &[DutyStatusLog], color: bool) -> AppResult<()> {
    let chart = Chart::new();

    for (i, log) in logs.iter().enumerate() {
        if i > 0 {
            println!();
        }
        header(format!(
            "{}  {}  {}",
            log.date_display(),
            log.driver_display(),
            log.vehicle_display()
        ));

        let column = SummaryColumn::from_log(log);
        print!("{}", build_table(&column, color).render());

        let skipped = chart.skipped_records(log);
        if !skipped.is_empty() {
            println!("Skipped records:");
            for s in &skipped {
                println!("  #{}: {}", s.index, s.reason);
            }
        }

        for d in column.divergence() {
            warning(format!(
                "{}: supplied {} h for {} but intervals add up to {} h",
                log.date_display(),
                format_hours(d.supplied),
                d.status.title(),
                format_hours(d.computed)
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DutyStatus, DutyStatusRecord};

    #[test]
    fn table_shows_both_totals() {
        let log = DutyStatusLog::new("2025-03-01")
            .with_record(DutyStatusRecord::new(
                DutyStatus::Driving,
                "2025-03-01T06:00",
                "2025-03-01T08:00",
            ))
            .with_hours(DutyStatus::Driving, 2.5);

        let out = build_table(&SummaryColumn::from_log(&log), false).render();
        let driving = out.lines().find(|l| l.starts_with("Driving")).unwrap();
        assert!(driving.contains("2.50"));
        assert!(driving.contains("2.00"));
        assert!(driving.ends_with("+0.50"));

        let total = out.lines().last().unwrap();
        assert!(total.starts_with("Total Hours"));
    }
}
