use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use dfa_editor::Suggestion;

use crate::types::{SuggestKind, TransitionRow, ValidateReport};

pub fn print_validation(report: &ValidateReport) {
    println!("File: {}", report.path.display());
    for name in &report.dropped_selections {
        println!("Ignored selection: {name} is not a state");
    }
    if !report.rows.is_empty() {
        println!("{}", transition_table(&report.rows));
    }
    match report.message() {
        Some(message) => println!("Invalid: {message}"),
        None => println!("valid"),
    }
}

pub fn print_suggestion(kind: SuggestKind, suggestion: Option<&Suggestion>) {
    let label = match kind {
        SuggestKind::State => "state",
        SuggestKind::Symbol => "symbol",
    };
    match suggestion {
        Some(suggestion) => println!("{}\t{}", suggestion.key, suggestion.description),
        None => println!("No {label} identifier is available."),
    }
}

/// One line per transition; references that do not resolve are highlighted.
pub fn transition_table(rows: &[TransitionRow]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Current state"),
        header_cell("Input"),
        header_cell("Subsequent state"),
        header_cell("Description"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Center);
    }
    for row in rows {
        let transition = &row.transition;
        table.add_row(vec![
            reference_cell(&transition.current_state_name, row.check.initial_state_exists),
            reference_cell(&transition.input_symbol, row.check.input_symbol_exists),
            reference_cell(
                &transition.subsequent_state_name,
                row.check.subsequent_state_exists,
            ),
            Cell::new(&transition.description),
            status_cell(row.check.is_valid()),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn reference_cell(value: &str, exists: bool) -> Cell {
    let shown = if value.is_empty() { "-" } else { value };
    if exists {
        Cell::new(shown)
    } else {
        Cell::new(shown)
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    }
}

fn status_cell(valid: bool) -> Cell {
    if valid {
        Cell::new("ok").fg(Color::Green)
    } else {
        Cell::new("dangling").fg(Color::Red)
    }
}

#[cfg(test)]
mod tests {
    use dfa_model::Transition;
    use dfa_validate::check_transition_rows;

    use super::*;

    #[test]
    fn table_lists_each_transition() {
        let states = [dfa_model::State::from_parts("S1", "One.")];
        let symbols = [dfa_model::Symbol::from_parts('0', "Zero.")];
        let transitions = [
            Transition::new("S1", "0", "S1", "Loop."),
            Transition::new("S1", "1", "S9", "Away."),
        ];
        let rows: Vec<TransitionRow> = check_transition_rows(&states, &symbols, &transitions)
            .into_iter()
            .zip(transitions.iter().cloned())
            .map(|(check, transition)| TransitionRow { transition, check })
            .collect();

        let rendered = transition_table(&rows).to_string();
        assert!(rendered.contains("Subsequent state"));
        assert!(rendered.contains("S9"));
        assert!(rendered.contains("dangling"));
        assert_eq!(rendered.matches(" ok ").count(), 1);
    }
}
