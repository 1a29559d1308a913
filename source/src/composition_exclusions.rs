use tracing::debug;

use crate::properties::parse_code;
use crate::UcdError;

const FILE: &str = "CompositionExclusions.txt";

/// разбор CompositionExclusions.txt из UCD
/// исключения композиции не могут быть вычислены, этот список составляется консорциумом Unicode в ручном режиме.
/// синглтоны и декомпозиции, начинающиеся с нестартера, в файле закомментированы - их вычисляем по UnicodeData.txt
pub fn composition_exclusions(data: &str) -> Result<Vec<u32>, UcdError>
{
    let mut exclusions = vec![];

    for (i, line) in data.lines().enumerate() {
        let code = match line.split_once('#') {
            Some((code, _)) => code,
            None => line,
        };

        if code.trim().is_empty() {
            continue;
        }

        exclusions.push(parse_code(code).map_err(|e| UcdError::parse(FILE, i, e))?);
    }

    debug!(target: "ucd", exclusions = exclusions.len(), "CompositionExclusions.txt parsed");

    Ok(exclusions)
}
