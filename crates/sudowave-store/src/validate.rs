//! Strict validation of decoded board records.

use serde_json::{Map, Value};
use sudowave_core::{Digit, DigitGrid, Position};
use sudowave_generator::{BoardKind, Difficulty};

use crate::ValidationReport;

/// A record that passed every check and can be turned into a board.
#[derive(Debug)]
pub(crate) struct ValidRecord {
    pub(crate) id: String,
    pub(crate) kind: BoardKind,
    pub(crate) difficulty: Difficulty,
    pub(crate) grid: DigitGrid,
}

/// The four typed fields extracted once the type stage has passed.
struct TypedFields<'a> {
    id: &'a str,
    kind_code: i64,
    difficulty_code: i64,
    rows: &'a [Value],
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Runs the staged checks over a decoded record: container shape and field
/// count, key presence, per-field types, then per-field value domains, and
/// finally the ungenerated-board rejection. Each stage collects all of its
/// violations before failing.
pub(crate) fn validate(value: &Value) -> Result<ValidRecord, ValidationReport> {
    let object = check_shape(value)?;
    check_keys(object)?;
    let typed = check_types(object)?;
    check_domains(&typed)
}

fn check_shape(value: &Value) -> Result<&Map<String, Value>, ValidationReport> {
    let Some(object) = value.as_object() else {
        return Err(ValidationReport::new(vec![format!(
            "record must be a JSON object, got {}",
            json_type_name(value)
        )]));
    };
    if object.len() != 4 {
        return Err(ValidationReport::new(vec![format!(
            "record has {} fields, expected 4",
            object.len()
        )]));
    }
    Ok(object)
}

fn check_keys(object: &Map<String, Value>) -> Result<(), ValidationReport> {
    let violations: Vec<String> = ["id", "type", "difficulty", "board"]
        .iter()
        .filter(|key| !object.contains_key(**key))
        .map(|key| format!("record is missing key `{key}`"))
        .collect();
    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationReport::new(violations))
    }
}

fn check_types(object: &Map<String, Value>) -> Result<TypedFields<'_>, ValidationReport> {
    let mut violations = Vec::new();

    let id = object["id"].as_str();
    if id.is_none() {
        violations.push(format!(
            "`id` must be a string, got {}",
            json_type_name(&object["id"])
        ));
    }
    let kind_code = object["type"].as_i64();
    if kind_code.is_none() {
        violations.push(format!(
            "`type` must be an integer, got {}",
            json_type_name(&object["type"])
        ));
    }
    let difficulty_code = object["difficulty"].as_i64();
    if difficulty_code.is_none() {
        violations.push(format!(
            "`difficulty` must be an integer, got {}",
            json_type_name(&object["difficulty"])
        ));
    }
    let rows = object["board"].as_array();
    if let Some(rows) = rows {
        for (r, row) in rows.iter().enumerate() {
            if let Some(cells) = row.as_array() {
                for (c, cell) in cells.iter().enumerate() {
                    if !cell.is_string() {
                        violations.push(format!(
                            "`board`[{r}][{c}] must be a string, got {}",
                            json_type_name(cell)
                        ));
                    }
                }
            } else {
                violations.push(format!(
                    "`board`[{r}] must be an array, got {}",
                    json_type_name(row)
                ));
            }
        }
    } else {
        violations.push(format!(
            "`board` must be an array, got {}",
            json_type_name(&object["board"])
        ));
    }

    match (id, kind_code, difficulty_code, rows) {
        (Some(id), Some(kind_code), Some(difficulty_code), Some(rows))
            if violations.is_empty() =>
        {
            Ok(TypedFields {
                id,
                kind_code,
                difficulty_code,
                rows,
            })
        }
        _ => Err(ValidationReport::new(violations)),
    }
}

fn check_domains(typed: &TypedFields<'_>) -> Result<ValidRecord, ValidationReport> {
    let mut violations = Vec::new();

    if typed.id.is_empty() || !typed.id.chars().all(|c| c.is_ascii_digit()) {
        violations.push(format!(
            "`id` must be a decimal-digit string, got `{}`",
            typed.id
        ));
    }

    // 0 passes here; it is rejected as ungenerated at the end.
    let kind = match typed.kind_code {
        0 => None,
        1 => Some(BoardKind::Full),
        2 => Some(BoardKind::Game),
        other => {
            violations.push(format!("`type` must be 1 or 2, got {other}"));
            None
        }
    };

    let difficulty = match u8::try_from(typed.difficulty_code)
        .ok()
        .and_then(Difficulty::from_code)
    {
        Some(difficulty) => Some(difficulty),
        None => {
            violations.push(format!(
                "`difficulty` must be between 0 and 3, got {}",
                typed.difficulty_code
            ));
            None
        }
    };

    let mut grid = DigitGrid::new();
    if typed.rows.len() == 9 {
        for (r, row) in typed.rows.iter().enumerate() {
            // Entry types were checked in the previous stage.
            let cells: Vec<&str> = row
                .as_array()
                .into_iter()
                .flatten()
                .filter_map(Value::as_str)
                .collect();
            if cells.len() == 9 {
                for (c, cell) in cells.iter().enumerate() {
                    let mut chars = cell.chars();
                    match (chars.next(), chars.next()) {
                        (Some(ch), None) if ch == DigitGrid::BLANK => {}
                        (Some(ch), None) if Digit::from_char(ch).is_some() => {
                            // r and c are both < 9 here; the dimension checks
                            // above and around gate this branch.
                            #[expect(clippy::cast_possible_truncation)]
                            let pos = Position::new(r as u8, c as u8);
                            grid[pos] = Digit::from_char(ch);
                        }
                        _ => violations.push(format!(
                            "`board`[{r}][{c}] must be a digit `1`-`9` or a space, got `{cell}`"
                        )),
                    }
                }
            } else {
                violations.push(format!(
                    "`board`[{r}] must have 9 cells, got {}",
                    cells.len()
                ));
            }
        }
    } else {
        violations.push(format!(
            "`board` must have 9 rows, got {}",
            typed.rows.len()
        ));
    }

    if typed.kind_code == 0 {
        violations.push("the record holds an ungenerated board (type 0)".to_owned());
    }

    match (kind, difficulty) {
        (Some(kind), Some(difficulty)) if violations.is_empty() => Ok(ValidRecord {
            id: typed.id.to_owned(),
            kind,
            difficulty,
            grid,
        }),
        _ => Err(ValidationReport::new(violations)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate_str(data: &str) -> Result<ValidRecord, ValidationReport> {
        validate(&serde_json::from_str(data).unwrap())
    }

    fn blank_board_json() -> String {
        let row = r#"[" "," "," "," "," "," "," "," "," "]"#;
        let rows: Vec<&str> = (0..9).map(|_| row).collect();
        format!("[{}]", rows.join(","))
    }

    #[test]
    fn test_accepts_minimal_game_record() {
        let data = format!(
            r#"{{"id":"12","type":2,"difficulty":3,"board":{}}}"#,
            blank_board_json()
        );
        let record = validate_str(&data).unwrap();
        assert_eq!(record.id, "12");
        assert_eq!(record.kind, BoardKind::Game);
        assert_eq!(record.difficulty, Difficulty::Hard);
        assert_eq!(record.grid.filled_count(), 0);
    }

    #[test]
    fn test_rejects_non_object() {
        let report = validate_str("[1,2,3]").unwrap_err();
        assert_eq!(
            report.violations(),
            ["record must be a JSON object, got array"]
        );
    }

    #[test]
    fn test_rejects_wrong_field_count() {
        let data = format!(
            r#"{{"id":"0","type":1,"difficulty":0,"board":{},"extra":true}}"#,
            blank_board_json()
        );
        let report = validate_str(&data).unwrap_err();
        assert_eq!(report.violations(), ["record has 5 fields, expected 4"]);
    }

    #[test]
    fn test_rejects_missing_keys() {
        let data = format!(
            r#"{{"ident":"0","type":1,"difficulty":0,"board":{}}}"#,
            blank_board_json()
        );
        let report = validate_str(&data).unwrap_err();
        assert_eq!(report.violations(), ["record is missing key `id`"]);
    }

    #[test]
    fn test_collects_all_type_violations() {
        let data = r#"{"id":7,"type":"full","difficulty":null,"board":{}}"#;
        let report = validate_str(data).unwrap_err();
        assert_eq!(
            report.violations(),
            [
                "`id` must be a string, got number",
                "`type` must be an integer, got string",
                "`difficulty` must be an integer, got null",
                "`board` must be an array, got object",
            ]
        );
    }

    #[test]
    fn test_rejects_non_string_board_entry() {
        let mut rows: Vec<String> = (0..9)
            .map(|_| r#"[" "," "," "," "," "," "," "," "," "]"#.to_owned())
            .collect();
        rows[4] = r#"[" "," "," "," ",5," "," "," "," "]"#.to_owned();
        let data = format!(
            r#"{{"id":"0","type":1,"difficulty":0,"board":[{}]}}"#,
            rows.join(",")
        );
        let report = validate_str(&data).unwrap_err();
        assert_eq!(
            report.violations(),
            ["`board`[4][4] must be a string, got number"]
        );
    }

    #[test]
    fn test_collects_all_domain_violations() {
        let data = format!(
            r#"{{"id":"abc","type":7,"difficulty":9,"board":{}}}"#,
            blank_board_json()
        );
        let report = validate_str(&data).unwrap_err();
        assert_eq!(
            report.violations(),
            [
                "`id` must be a decimal-digit string, got `abc`",
                "`type` must be 1 or 2, got 7",
                "`difficulty` must be between 0 and 3, got 9",
            ]
        );
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        let row = r#"[" "," "," "," "," "," "," "," "," "]"#;
        let eight_rows: Vec<&str> = (0..8).map(|_| row).collect();
        let data = format!(
            r#"{{"id":"0","type":1,"difficulty":0,"board":[{}]}}"#,
            eight_rows.join(",")
        );
        let report = validate_str(&data).unwrap_err();
        assert_eq!(report.violations(), ["`board` must have 9 rows, got 8"]);

        let mut rows: Vec<String> = (0..9).map(|_| row.to_owned()).collect();
        rows[2] = r#"[" "," "," "," "," "," "," "," "," "," "]"#.to_owned();
        let data = format!(
            r#"{{"id":"0","type":1,"difficulty":0,"board":[{}]}}"#,
            rows.join(",")
        );
        let report = validate_str(&data).unwrap_err();
        assert_eq!(report.violations(), ["`board`[2] must have 9 cells, got 10"]);
    }

    #[test]
    fn test_rejects_out_of_range_character() {
        let mut rows: Vec<String> = (0..9)
            .map(|_| r#"[" "," "," "," "," "," "," "," "," "]"#.to_owned())
            .collect();
        rows[4] = r#"[" "," "," "," ","x"," "," "," "," "]"#.to_owned();
        let data = format!(
            r#"{{"id":"0","type":1,"difficulty":0,"board":[{}]}}"#,
            rows.join(",")
        );
        let report = validate_str(&data).unwrap_err();
        assert_eq!(
            report.violations(),
            ["`board`[4][4] must be a digit `1`-`9` or a space, got `x`"]
        );
    }

    #[test]
    fn test_rejects_ungenerated_record_last() {
        let data = format!(
            r#"{{"id":"0","type":0,"difficulty":0,"board":{}}}"#,
            blank_board_json()
        );
        let report = validate_str(&data).unwrap_err();
        assert_eq!(
            report.violations(),
            ["the record holds an ungenerated board (type 0)"]
        );
    }
}
