use std::path::{Path, PathBuf};

use colored::*;
use itertools::Itertools;

use crate::domain::types::{FareTable, TransportMode};

fn width(s: &str) -> usize {
    s.chars().count()
}

fn pad_left(s: &str, w: usize) -> String {
    format!("{}{}", " ".repeat(w.saturating_sub(width(s))), s)
}

fn pad_right(s: &str, w: usize) -> String {
    format!("{}{}", s, " ".repeat(w.saturating_sub(width(s))))
}

/// Render the top-left `size` x `size` block of a fare table, labelled by province.
pub fn format_preview(table: &FareTable, size: usize) -> String {
    let size = size.min(table.size());
    let names = &table.provinces[..size];

    let label_width = names.iter().map(|n| width(n)).max().unwrap_or(0);
    let column_widths: Vec<usize> = (0..size)
        .map(|j| {
            let widest_fare = (0..size)
                .map(|i| table.fares[i][j].to_string().len())
                .max()
                .unwrap_or(0);
            widest_fare.max(width(names[j]))
        })
        .collect();

    let header = names
        .iter()
        .zip(&column_widths)
        .map(|(name, &w)| pad_left(name, w))
        .join("  ");
    let mut lines = vec![format!("{}  {}", " ".repeat(label_width), header)];

    for (i, name) in names.iter().enumerate() {
        let cells = (0..size)
            .map(|j| pad_left(&table.fares[i][j].to_string(), column_widths[j]))
            .join("  ");
        lines.push(format!("{}  {}", pad_right(name, label_width), cells));
    }

    lines.join("\n")
}

fn artifact_line(position: usize, mode: TransportMode, path: &Path) -> String {
    let note = if mode.is_sparse() {
        format!("  (0 = no {} service)", mode.label())
    } else {
        String::new()
    };
    format!("{}. {}{}", position, path.display(), note)
}

pub fn print_banner(tables: &[FareTable], paths: &[PathBuf]) {
    println!(
        "{}",
        format!("DONE! Generated {} fare matrices:", paths.len())
            .green()
            .bold()
    );
    for (position, (table, path)) in tables.iter().zip(paths).enumerate() {
        println!("{}", artifact_line(position + 1, table.mode, path));
    }
}

pub fn print_preview(table: &FareTable, size: usize) {
    println!(
        "\n{}",
        format!(
            "{} fare sample (first {}x{}):",
            table.mode.label().to_uppercase(),
            size,
            size
        )
        .cyan()
    );
    println!("{}", format_preview(table, size));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> FareTable {
        FareTable {
            mode: TransportMode::Bus,
            provinces: vec!["An Giang", "Bạc Liêu", "Yên Bái"],
            fares: vec![
                vec![150_000, 248_000, 2_500_000],
                vec![248_000, 150_000, 2_600_000],
                vec![2_500_000, 2_600_000, 150_000],
            ],
        }
    }

    #[test]
    fn preview_is_clipped_to_size() {
        let preview = format_preview(&table(), 2);
        let lines: Vec<_> = preview.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Bạc Liêu"));
        assert!(!preview.contains("Yên Bái"));
        assert!(lines[1].starts_with("An Giang"));
        assert!(lines[2].trim_end().ends_with("150000"));
    }

    #[test]
    fn preview_columns_line_up() {
        let preview = format_preview(&table(), 10);
        let widths: Vec<_> = preview.lines().map(|l| l.chars().count()).collect();
        assert_eq!(widths.len(), 4);
        assert!(widths.iter().all(|&w| w == widths[0]));
    }

    #[test]
    fn sparse_artifacts_explain_zero() {
        let path = PathBuf::from("MA_TRAN_TAU_HOA_63_TINH.csv");
        assert_eq!(
            artifact_line(2, TransportMode::Train, &path),
            "2. MA_TRAN_TAU_HOA_63_TINH.csv  (0 = no train service)"
        );
        let path = PathBuf::from("MA_TRAN_TAXI_63_TINH.csv");
        assert_eq!(
            artifact_line(4, TransportMode::Taxi, &path),
            "4. MA_TRAN_TAXI_63_TINH.csv"
        );
    }
}
