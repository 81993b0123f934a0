//! 키릴 문자 → 라틴 문자 변환 (세르비아어, 아제르바이잔어)
//!
//! 한 글자씩 표를 조회해 치환합니다. 표에 없는 글자는 그대로 유지합니다.
//! 러시아어/우크라이나어/벨라루스어/마케도니아어 글자도 근사 변환합니다.

use crate::language::Transliteration;

/// 텍스트 전체에 문자 변환 적용
///
/// # Examples
/// ```
/// use wordfreq::core::transliterate;
/// use wordfreq::language::Transliteration;
/// assert_eq!(transliterate("Пример", Transliteration::SerbianLatin), "Primer");
/// ```
pub fn transliterate(text: &str, table: Transliteration) -> String {
    let lookup: fn(char) -> Option<&'static str> = match table {
        Transliteration::None => return text.to_string(),
        Transliteration::SerbianLatin => serbian_latin,
        Transliteration::AzeriLatin => azeri_latin,
    };

    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match lookup(c) {
            Some(latin) => result.push_str(latin),
            None => result.push(c),
        }
    }
    result
}

/// 세르비아어 키릴 문자 → 라틴 문자 (Gaj 표기)
#[rustfmt::skip]
fn serbian_latin(c: char) -> Option<&'static str> {
    let latin = match c {
        'А' => "A", 'а' => "a",
        'Б' => "B", 'б' => "b",
        'В' => "V", 'в' => "v",
        'Г' => "G", 'г' => "g",
        'Д' => "D", 'д' => "d",
        'Ђ' => "Đ", 'ђ' => "đ",
        'Е' => "E", 'е' => "e",
        'Ж' => "Ž", 'ж' => "ž",
        'З' => "Z", 'з' => "z",
        'И' => "I", 'и' => "i",
        'Ј' => "J", 'ј' => "j",
        'К' => "K", 'к' => "k",
        'Л' => "L", 'л' => "l",
        'Љ' => "Lj", 'љ' => "lj",
        'М' => "M", 'м' => "m",
        'Н' => "N", 'н' => "n",
        'Њ' => "Nj", 'њ' => "nj",
        'О' => "O", 'о' => "o",
        'П' => "P", 'п' => "p",
        'Р' => "R", 'р' => "r",
        'С' => "S", 'с' => "s",
        'Т' => "T", 'т' => "t",
        'Ћ' => "Ć", 'ћ' => "ć",
        'У' => "U", 'у' => "u",
        'Ф' => "F", 'ф' => "f",
        'Х' => "H", 'х' => "h",
        'Ц' => "C", 'ц' => "c",
        'Ч' => "Č", 'ч' => "č",
        'Џ' => "Dž", 'џ' => "dž",
        'Ш' => "Š", 'ш' => "š",
        // 러시아어
        'Ё' => "Jo", 'ё' => "jo",
        'Й' => "J", 'й' => "j",
        'Щ' => "Šč", 'щ' => "šč",
        'Ъ' => "", 'ъ' => "",
        'Ы' => "Y", 'ы' => "y",
        'Ь' => "'", 'ь' => "'",
        'Э' => "E", 'э' => "e",
        'Ю' => "Ju", 'ю' => "ju",
        'Я' => "Ja", 'я' => "ja",
        // 벨라루스어
        'Ў' => "Ŭ", 'ў' => "ŭ",
        // 우크라이나어
        'Є' => "Je", 'є' => "je",
        'І' => "I", 'і' => "i",
        'Ї' => "Ï", 'ї' => "ï",
        'Ґ' => "G", 'ґ' => "g",
        // 마케도니아어
        'Ѕ' => "Dz", 'ѕ' => "dz",
        'Ѓ' => "Ǵ", 'ѓ' => "ǵ",
        'Ќ' => "Ḱ", 'ќ' => "ḱ",
        _ => return None,
    };
    Some(latin)
}

/// 아제르바이잔어 키릴 문자 → 라틴 문자
///
/// 세르비아어 표를 기반으로 아제르바이잔어 고유 글자와
/// 다르게 읽는 글자만 덮어씁니다.
#[rustfmt::skip]
fn azeri_latin(c: char) -> Option<&'static str> {
    let latin = match c {
        'Ҹ' => "C", 'ҹ' => "c",
        'Ә' => "Ə", 'ә' => "ə",
        'Ғ' => "Ğ", 'ғ' => "ğ",
        'Һ' => "H", 'һ' => "h",
        'Ө' => "Ö", 'ө' => "ö",
        'Ҝ' => "G", 'ҝ' => "g",
        'Ү' => "Ü", 'ү' => "ü",
        'Ч' => "Ç", 'ч' => "ç",
        'Х' => "X", 'х' => "x",
        'Ы' => "I", 'ы' => "ı",
        'И' => "İ", 'и' => "i",
        'Ж' => "J", 'ж' => "j",
        'Ј' => "Y", 'ј' => "y",
        'Г' => "Q", 'г' => "q",
        'Ш' => "Ş", 'ш' => "ş",
        _ => return serbian_latin(c),
    };
    Some(latin)
}
