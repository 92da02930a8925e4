//! LED panel rendering

use colored::*;
use spoilage_core::{
    DatasetRow, Evaluation, Gas, GasReading, GasThresholds, LedColor, LedStatus,
};

const BAR_WIDTH: usize = 24;

fn paint(text: &str, color: LedColor) -> ColoredString {
    match color {
        LedColor::Green => text.green(),
        LedColor::Yellow => text.yellow(),
        LedColor::Red => text.red(),
    }
}

/// Filled cells of a `BAR_WIDTH` bar, clamped to the display scale
pub fn bar_cells(gas: Gas, value: f64) -> usize {
    let ratio = (value / gas.display_max()).clamp(0.0, 1.0);
    (ratio * BAR_WIDTH as f64).round() as usize
}

fn bar(gas: Gas, value: f64) -> String {
    let filled = bar_cells(gas, value);
    format!("{}{}", "█".repeat(filled), "·".repeat(BAR_WIDTH - filled))
}

pub fn print_panel(reading: &GasReading, status: &LedStatus, thresholds: &GasThresholds) {
    for (gas, color) in status.iter() {
        let value = reading.get(gas);
        println!(
            "  {} {:<24} {} {:>8.2} {}  (threshold {})",
            paint("●", color).bold(),
            gas.label(),
            paint(&bar(gas, value), color),
            value,
            gas.unit(),
            thresholds.danger(gas),
        );
    }

    let verdict = status.food_status;
    println!();
    println!(
        "  {} {} {}",
        paint("●", verdict.led()).bold(),
        "Food Status:".bold(),
        paint(verdict.as_str(), verdict.led()).bold()
    );
}

pub fn print_position(index: usize, total: usize, row: &DatasetRow) {
    let label = if row.is_spoiled() {
        "⚠ Spoiled".red()
    } else {
        "✓ Fresh".green()
    };
    println!("{} {} / {}  {}", "Dataset".cyan().bold(), index + 1, total, label);
}

pub fn print_evaluation(evaluation: &Evaluation, verbose: bool) {
    let c = &evaluation.confusion;

    if verbose {
        for outcome in &evaluation.outcomes {
            let mark = if outcome.agrees() { "✓".green() } else { "✗".red() };
            let r = outcome.row.reading;
            println!(
                "  {} #{:<4} NH3 {:>6.2}  H2S {:>5.2}  TMA {:>6.2}  DMS {:>5.2}  label {:<7} verdict {}",
                mark,
                outcome.index + 1,
                r.nh3,
                r.h2s,
                r.tma,
                r.dms,
                outcome.row.label.to_string(),
                outcome.status.food_status
            );
        }
        println!();
    }

    println!("{}", "Replay summary".bold());
    println!("  rows:           {}", c.total());
    println!("  true spoiled:   {}", c.true_spoiled);
    println!("  true fresh:     {}", c.true_fresh);
    println!("  false spoiled:  {}", c.false_spoiled);
    println!("  false fresh:    {}", c.false_fresh);
    match evaluation.accuracy() {
        Some(accuracy) => println!("  agreement:      {:.1}%", accuracy * 100.0),
        None => println!("  agreement:      n/a (empty dataset)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_cells() {
        assert_eq!(bar_cells(Gas::Nh3, 0.0), 0);
        assert_eq!(bar_cells(Gas::Nh3, 10.0), BAR_WIDTH / 2);
        assert_eq!(bar_cells(Gas::Nh3, 20.0), BAR_WIDTH);
        // acima da escala: barra cheia
        assert_eq!(bar_cells(Gas::H2s, 50.0), BAR_WIDTH);
    }
}
