use crate::error::NormalizationError;

/// скопировать результат в буфер фиксированного размера. если буфер мал - ничего не пишем,
/// возвращаем требуемый размер
#[inline]
pub fn copy_into<T: Copy>(source: &[T], dest: &mut [T]) -> Result<usize, NormalizationError>
{
    if source.len() > dest.len() {
        return Err(NormalizationError::InsufficientCapacity {
            required: source.len(),
        });
    }

    dest[.. source.len()].copy_from_slice(source);

    Ok(source.len())
}
