use std::collections::HashMap;

use tracing::debug;

use crate::properties::*;
use crate::UcdError;

const FILE: &str = "UnicodeData.txt";

/// разбор UnicodeData.txt из UCD и составление хешмапа свойств символов Unicode
///
/// в таблицу попадают все перечисленные в файле кодпоинты, кроме диапазонов (`<..., First>` / `<..., Last>`):
/// у кодпоинтов диапазонов нет ни декомпозиции, ни ненулевого CCC, а слоги хангыль декомпозируются алгоритмически
pub fn unicode(data: &str) -> Result<HashMap<u32, Codepoint>, UcdError>
{
    let mut map: HashMap<u32, Codepoint> = HashMap::new();
    let mut ranges = 0;

    for (i, line) in data.lines().enumerate() {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let props: Vec<&str> = line.split(';').collect();

        if props.len() < 6 {
            return Err(UcdError::parse(FILE, i, PropertiesError::MissingField("decomposition")));
        }

        // код и название
        let code = parse_code(props[0]).map_err(|e| UcdError::parse(FILE, i, e))?;
        let name = props[1].to_owned();

        // различные блоки
        if name.starts_with('<') && name.ends_with('>') && name != "<control>" {
            // что мы можем встретить:
            //
            // U+3400 ..= U+4DBF CJK Ideograph Extension A
            // U+4E00 ..= U+9FFF CJK Ideograph
            // U+AC00 ..= U+D7A3 Hangul Syllable
            // U+D800 ..= U+DFFF суррогаты
            // U+E000 ..= U+F8FF Private Use
            // U+17000 ..= U+187F7 Tangut Ideograph
            // ...

            ranges += 1;
            continue;
        }

        // категория и CCC
        let gc = props[2].to_owned();
        let ccc = CanonicalCombiningClass::try_from(props[3]).map_err(|e| UcdError::parse(FILE, i, e))?;

        // декомпозиция и тег декомпозиции
        let decomposition = Decomposition::try_from(props[5]).map_err(|e| UcdError::parse(FILE, i, e))?;

        map.insert(
            code,
            Codepoint {
                code,
                name,
                gc,
                ccc,
                decomposition_tag: decomposition.tag,
                decomposition: decomposition.codes,
            },
        );
    }

    debug!(target: "ucd", codepoints = map.len(), ranges, "UnicodeData.txt parsed");

    Ok(map)
}
