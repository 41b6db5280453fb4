use crate::PatternError;

pub const DEAD: char = '0';
pub const ALIVE: char = '1';

/// Returns rows, columns and a row-major vector filled with cells of the parsed pattern.
///
/// Whitespace-only lines before the first row and after the last one are ignored,
/// such a line between two rows is rejected. Rows themselves may only end in `\r`.
pub fn parse_pattern(data: &str) -> Result<(usize, usize, Vec<bool>), PatternError> {
    let (mut rows, mut cols) = (0, 0);
    let mut cells = vec![];
    let mut blank_after_body = None;

    for (i, line) in data.lines().enumerate() {
        let line_no = i + 1;
        if line.trim().is_empty() {
            if rows != 0 && blank_after_body.is_none() {
                blank_after_body = Some(line_no);
            }
            continue;
        }
        if let Some(line) = blank_after_body {
            return Err(PatternError::EmbeddedBlankLine { line });
        }

        let line = line.strip_suffix('\r').unwrap_or(line);
        let mut found = 0;
        for (j, symbol) in line.chars().enumerate() {
            let state = match symbol {
                DEAD => false,
                ALIVE => true,
                _ => {
                    return Err(PatternError::InvalidSymbol {
                        line: line_no,
                        column: j + 1,
                        symbol,
                    })
                }
            };
            cells.push(state);
            found += 1;
        }

        if rows == 0 {
            cols = found;
        } else if found != cols {
            return Err(PatternError::RaggedRow {
                line: line_no,
                expected: cols,
                found,
            });
        }
        rows += 1;
    }

    if rows == 0 {
        return Err(PatternError::Empty);
    }
    Ok((rows, cols, cells))
}
