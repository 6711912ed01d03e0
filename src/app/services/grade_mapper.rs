//! Grade map construction from the grade definitions table

use crate::app::models::{GradeDefinition, GradeMap, RawTable};
use crate::app::services::numeric::parse_number;
use crate::constants::grade_columns;
use tracing::debug;

/// Group grade rows by field name, preserving source order
///
/// Rows missing the field name or label are skipped. Bounds are optional
/// independently; an unparseable bound is treated as absent.
pub fn build_grade_map(table: &RawTable) -> GradeMap {
    let mut grade_map = GradeMap::new();
    let mut skipped = 0;

    for row in &table.rows {
        let field = row.value(grade_columns::FIELD_NAME);
        let label = row.value(grade_columns::LABEL);
        if field.is_empty() || label.is_empty() {
            skipped += 1;
            continue;
        }

        grade_map.push(
            field,
            GradeDefinition {
                label: label.to_string(),
                min: parse_number(row.value(grade_columns::MIN)),
                max: parse_number(row.value(grade_columns::MAX)),
            },
        );
    }

    debug!(
        "Built grade map with {} fields, {} rows skipped",
        grade_map.len(),
        skipped
    );
    grade_map
}
