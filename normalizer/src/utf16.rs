use crate::error::NormalizationError;

/// UTF-16 в последовательность символов. суррогат без пары - ошибка
pub fn decode(text: &[u16]) -> Result<Vec<char>, NormalizationError>
{
    let mut result = Vec::with_capacity(text.len());
    let mut index = 0;

    for c in char::decode_utf16(text.iter().copied()) {
        match c {
            Ok(c) => {
                index += c.len_utf16();
                result.push(c);
            }
            Err(e) => {
                return Err(NormalizationError::UnpairedSurrogate {
                    index,
                    unit: e.unpaired_surrogate(),
                })
            }
        }
    }

    Ok(result)
}

/// последовательность символов в UTF-16
pub fn encode(text: &[char]) -> Vec<u16>
{
    let mut result = Vec::with_capacity(text.len());
    let mut units = [0; 2];

    for c in text {
        result.extend_from_slice(c.encode_utf16(&mut units));
    }

    result
}

/// последовательность символов в UTF-16 в буфер фиксированного размера
pub fn encode_into(text: &[char], dest: &mut [u16]) -> Result<usize, NormalizationError>
{
    let required: usize = text.iter().map(|c| c.len_utf16()).sum();

    if required > dest.len() {
        return Err(NormalizationError::InsufficientCapacity { required });
    }

    let mut position = 0;

    for c in text {
        position += c.encode_utf16(&mut dest[position ..]).len();
    }

    Ok(required)
}
