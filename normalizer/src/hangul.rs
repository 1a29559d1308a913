// слоги хангыль декомпозируются и комбинируются алгоритмически:
//  - U+1100..=U+1112 (L, ведущие согласные)
//  - U+1161..=U+1175 (V, гласные)
//  - U+11A8..=U+11C2 (T, завершающие согласные)
//  - U+AC00..=U+D7A3 (S, слоги LV и LVT)

/// начало блока ведущих согласных чамо
const HANGUL_L_BASE: u32 = 0x1100;
/// количество ведущих согласных
const HANGUL_L_COUNT: u32 = 19;
/// начало блока гласных чамо
const HANGUL_V_BASE: u32 = 0x1161;
/// количество гласных
const HANGUL_V_COUNT: u32 = 21;
/// начало блока завершающих согласных (на 1 меньше первой согласной, T = 0 - отсутствие согласной)
const HANGUL_T_BASE: u32 = 0x11A7;
/// количество завершающих согласных + 1
const HANGUL_T_COUNT: u32 = 28;
/// количество гласных * количество завершающих согласных
const HANGUL_N_COUNT: u32 = 588;
/// начало блока слогов хангыль
const HANGUL_S_BASE: u32 = 0xAC00;
/// количество слогов хангыль в Unicode
const HANGUL_S_COUNT: u32 = 11172;

/// является ли кодпоинт слогом хангыль
#[inline(always)]
pub fn is_syllable(c: char) -> bool
{
    (c as u32).wrapping_sub(HANGUL_S_BASE) < HANGUL_S_COUNT
}

/// гласная или завершающая согласная - комбинируются с предыдущим кодпоинтом
#[inline(always)]
pub fn is_vt(c: char) -> bool
{
    let code = c as u32;

    code.wrapping_sub(HANGUL_V_BASE) < HANGUL_V_COUNT || code.wrapping_sub(HANGUL_T_BASE + 1) < HANGUL_T_COUNT - 1
}

/// декомпозиция слога хангыль: LV или LVT
#[inline(always)]
pub fn decompose(c: char, mut write: impl FnMut(char))
{
    let lvt = c as u32 - HANGUL_S_BASE;

    let l = HANGUL_L_BASE + lvt / HANGUL_N_COUNT;
    let v = HANGUL_V_BASE + (lvt % HANGUL_N_COUNT) / HANGUL_T_COUNT;
    let t = lvt % HANGUL_T_COUNT;

    // все значения - в пределах блоков чамо
    write(unsafe { char::from_u32_unchecked(l) });
    write(unsafe { char::from_u32_unchecked(v) });

    if t != 0 {
        write(unsafe { char::from_u32_unchecked(HANGUL_T_BASE + t) });
    }
}

/// скомбинировать L + V или LV + T
#[inline(always)]
pub fn compose(first: char, second: char) -> Option<char>
{
    let first = first as u32;
    let second = second as u32;

    let l = first.wrapping_sub(HANGUL_L_BASE);

    if l < HANGUL_L_COUNT {
        let v = second.wrapping_sub(HANGUL_V_BASE);

        return match v < HANGUL_V_COUNT {
            true => char::from_u32(HANGUL_S_BASE + (l * HANGUL_V_COUNT + v) * HANGUL_T_COUNT),
            false => None,
        };
    }

    let lv = first.wrapping_sub(HANGUL_S_BASE);

    if lv < HANGUL_S_COUNT && lv % HANGUL_T_COUNT == 0 {
        let t = second.wrapping_sub(HANGUL_T_BASE);

        // t = 0 - не завершающая согласная
        if t.wrapping_sub(1) < HANGUL_T_COUNT - 1 {
            return char::from_u32(first + t);
        }
    }

    None
}

#[cfg(test)]
mod tests
{
    use super::*;

    fn decomposed(c: char) -> String
    {
        let mut result = String::new();
        decompose(c, |c| result.push(c));

        result
    }

    #[test]
    fn decompose_syllables()
    {
        assert_eq!(decomposed('\u{D4DB}'), "\u{1111}\u{1171}\u{11B6}");
        assert_eq!(decomposed('\u{AC00}'), "\u{1100}\u{1161}");
        assert_eq!(decomposed('\u{D7A3}'), "\u{1112}\u{1175}\u{11C2}");
    }

    #[test]
    fn compose_jamo()
    {
        assert_eq!(compose('\u{1111}', '\u{1171}'), Some('\u{D4CC}'));
        assert_eq!(compose('\u{D4CC}', '\u{11B6}'), Some('\u{D4DB}'));
        // LVT + T, L + T, LV + V
        assert_eq!(compose('\u{D4DB}', '\u{11B6}'), None);
        assert_eq!(compose('\u{1111}', '\u{11B6}'), None);
        assert_eq!(compose('\u{D4CC}', '\u{1171}'), None);
        // U+11A7 не является завершающей согласной
        assert_eq!(compose('\u{AC00}', '\u{11A7}'), None);
    }

    #[test]
    fn jamo_classes()
    {
        assert!(is_syllable('\u{AC00}'));
        assert!(is_syllable('\u{D7A3}'));
        assert!(!is_syllable('\u{D7A4}'));
        assert!(is_vt('\u{1161}'));
        assert!(is_vt('\u{1175}'));
        assert!(is_vt('\u{11A8}'));
        assert!(is_vt('\u{11C2}'));
        assert!(!is_vt('\u{11A7}'));
        assert!(!is_vt('\u{1100}'));
        assert!(!is_vt('\u{11C3}'));
    }
}
