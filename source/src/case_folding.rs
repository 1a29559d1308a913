use std::collections::HashMap;

use tracing::debug;

use crate::properties::parse_code;
use crate::properties::PropertiesError;
use crate::UcdError;

const FILE: &str = "CaseFolding.txt";

/// приведение регистра (case folding) из UCD: CaseFolding.txt
#[derive(Debug, Clone, Default)]
pub struct CaseFolding
{
    /// полное приведение регистра по умолчанию (статусы C и F)
    pub full: HashMap<u32, Vec<u32>>,
    /// приведение для тюркских языков (статус T) - I с точкой и без
    pub turkic: HashMap<u32, u32>,
}

/// разбор CaseFolding.txt. статус S (простое приведение) не используется
pub fn case_folding(data: &str) -> Result<CaseFolding, UcdError>
{
    let mut folding = CaseFolding::default();

    for (i, line) in data.lines().enumerate() {
        let line = match line.split_once('#') {
            Some((line, _)) => line,
            None => line,
        };

        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(';').map(|f| f.trim()).collect();

        if fields.len() < 3 {
            return Err(UcdError::parse(FILE, i, PropertiesError::MissingField("mapping")));
        }

        let code = parse_code(fields[0]).map_err(|e| UcdError::parse(FILE, i, e))?;
        let mapping = fields[2]
            .split_whitespace()
            .map(parse_code)
            .collect::<Result<Vec<u32>, _>>()
            .map_err(|e| UcdError::parse(FILE, i, e))?;

        match (fields[1], mapping.as_slice()) {
            ("C" | "F", [_, ..]) => {
                folding.full.insert(code, mapping);
            }
            ("T", [folded]) => {
                folding.turkic.insert(code, *folded);
            }
            ("S", _) => (),
            (status, _) => {
                return Err(UcdError::parse(
                    FILE,
                    i,
                    PropertiesError::UnknownPropertyValue(status.to_owned()),
                ))
            }
        }
    }

    debug!(
        target: "ucd",
        full = folding.full.len(),
        turkic = folding.turkic.len(),
        "CaseFolding.txt parsed"
    );

    Ok(folding)
}
