use std::collections::HashMap;

use unicode_normalization_source::properties::Codepoint as UcdCodepoint;

use crate::error::DataError;
use crate::hangul;

/// максимальная глубина вложенности декомпозиций. в UCD она не превышает 4,
/// всё, что глубже - зацикленные данные
pub const MAX_DEPTH: usize = 16;

/// в файле UnicodeData.txt хранится декомпозиция в сжатом виде, т.е. элементы декомпозиции
/// могут также иметь свою декомпозицию. разворачиваем её с помощью стека:
/// кладём кодпоинт, достаём, если у него есть декомпозиция - кладём её элементы в обратном порядке
///
/// canonical == false - декомпозиция совместимости (любая декомпозиция, с тегом или без)
pub fn expand(code: u32, unicode: &HashMap<u32, UcdCodepoint>, canonical: bool) -> Result<Vec<char>, DataError>
{
    let mut result = vec![];
    let mut stack: Vec<(u32, usize)> = vec![(code, 0)];

    while let Some((current, depth)) = stack.pop() {
        let mapping = unicode
            .get(&current)
            .filter(|e| !e.decomposition.is_empty() && (!canonical || e.decomposition_tag.is_none()));

        if let Some(entry) = mapping {
            if depth == MAX_DEPTH {
                return Err(DataError::CyclicDecomposition { code });
            }

            stack.extend(entry.decomposition.iter().rev().map(|&c| (c, depth + 1)));
            continue;
        }

        let c = char::from_u32(current).ok_or(DataError::InvalidMapping {
            code,
            value: current,
        })?;

        // слоги хангыль в UnicodeData.txt не перечислены, но на них могут ссылаться
        // декомпозиции совместимости (например, U+320E)
        match hangul::is_syllable(c) {
            true => hangul::decompose(c, |c| result.push(c)),
            false => result.push(c),
        }
    }

    Ok(result)
}
