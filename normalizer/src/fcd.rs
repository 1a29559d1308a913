use crate::data::NormalizationData;
use crate::data::FIRST_DECOMPOSING_CODE;
use crate::decomposition::Decomposer;

// FCD: строка, в которой конкатенация канонических декомпозиций кодпоинтов канонически упорядочена.
// проверяется по CCC первого (lead) и последнего (trail) кодпоинта декомпозиции: нестартер в начале
// декомпозиции не может идти после декомпозиции, заканчивающейся кодпоинтом с большим CCC

/// является ли строка FCD
pub fn is_fcd(data: &NormalizationData, text: impl IntoIterator<Item = char>) -> bool
{
    let mut previous_trail = 0;

    for c in text {
        if (c as u32) < FIRST_DECOMPOSING_CODE {
            previous_trail = 0;
            continue;
        }

        let lead = data.lead_ccc(c);

        if lead != 0 && previous_trail > lead {
            return false;
        }

        previous_trail = data.trail_ccc(c);
    }

    true
}

/// FCD-нормализация: строка делится на отрезки, начинающиеся с кодпоинтов с lead CCC = 0.
/// отрезки, нарушающие FCD, заменяются их канонической декомпозицией, остальные копируются
pub fn normalize(data: &NormalizationData, text: &[char]) -> Vec<char>
{
    let decomposer = Decomposer::new(data, false);
    let mut result = Vec::with_capacity(text.len());
    let mut start = 0;

    while start < text.len() {
        let end = text[start + 1 ..]
            .iter()
            .position(|&c| data.lead_ccc(c) == 0)
            .map_or(text.len(), |i| start + 1 + i);

        let segment = &text[start .. end];

        match is_fcd(data, segment.iter().copied()) {
            true => result.extend_from_slice(segment),
            false => decomposer.decompose_to(segment.iter().copied(), |c| result.push(c)),
        }

        start = end;
    }

    result
}
