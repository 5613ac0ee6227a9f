// src/domain/slug/kana.rs
//! Per-character kana → Latin substitution (modified Hepburn).
//!
//! Katakana is folded onto hiragana first. Yōon digraphs (`きゃ`), sokuon
//! gemination (`っ`) and a few foreign-sound combinations (`ファ`) are
//! handled; the long-vowel mark is dropped. ASCII and full-width
//! alphanumerics pass through lowercased. Anything else (kanji, symbols) is
//! dropped.

use crate::domain::place::query::fold_width;

const KATAKANA_START: u32 = 0x30A1;
const KATAKANA_END: u32 = 0x30F6;
const KANA_OFFSET: u32 = 0x60;

/// Romanize every kana in `input`, returning lowercase `[a-z0-9-]` text.
pub fn romanize_kana(input: &str) -> String {
    let chars: Vec<char> = input.chars().map(fold_width).map(to_hiragana).collect();
    let mut out = String::with_capacity(chars.len() * 2);
    let mut geminate = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == 'っ' {
            geminate = true;
            i += 1;
            continue;
        }

        if let Some(next) = chars.get(i + 1) {
            if let Some(roman) = digraph(c, *next) {
                push_syllable(&mut out, roman, &mut geminate);
                i += 2;
                continue;
            }
        }

        if let Some(roman) = monograph(c) {
            push_syllable(&mut out, roman, &mut geminate);
        } else if c.is_ascii_alphanumeric() {
            geminate = false;
            out.push(c.to_ascii_lowercase());
        } else if is_separator(c) {
            geminate = false;
            out.push('-');
        }
        i += 1;
    }

    collapse_separators(&out)
}

fn push_syllable(out: &mut String, roman: &str, geminate: &mut bool) {
    if *geminate {
        if let Some(first) = roman.chars().next() {
            if roman.starts_with("ch") {
                out.push('t');
            } else if !matches!(first, 'a' | 'i' | 'u' | 'e' | 'o' | 'n') {
                out.push(first);
            }
        }
        *geminate = false;
    }
    out.push_str(roman);
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '-' | '_' | '・' | '、' | '。' | '/' | '.')
}

/// Collapse runs of `-` and trim them from both ends.
pub fn collapse_separators(input: &str) -> String {
    input
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

fn to_hiragana(c: char) -> char {
    let code = c as u32;
    if (KATAKANA_START..=KATAKANA_END).contains(&code) {
        char::from_u32(code - KANA_OFFSET).unwrap_or(c)
    } else {
        c
    }
}

fn digraph(first: char, second: char) -> Option<&'static str> {
    let roman = match (first, second) {
        ('き', 'ゃ') => "kya",
        ('き', 'ゅ') => "kyu",
        ('き', 'ょ') => "kyo",
        ('ぎ', 'ゃ') => "gya",
        ('ぎ', 'ゅ') => "gyu",
        ('ぎ', 'ょ') => "gyo",
        ('し', 'ゃ') => "sha",
        ('し', 'ゅ') => "shu",
        ('し', 'ょ') => "sho",
        ('し', 'ぇ') => "she",
        ('じ', 'ゃ') => "ja",
        ('じ', 'ゅ') => "ju",
        ('じ', 'ょ') => "jo",
        ('じ', 'ぇ') => "je",
        ('ち', 'ゃ') => "cha",
        ('ち', 'ゅ') => "chu",
        ('ち', 'ょ') => "cho",
        ('ち', 'ぇ') => "che",
        ('に', 'ゃ') => "nya",
        ('に', 'ゅ') => "nyu",
        ('に', 'ょ') => "nyo",
        ('ひ', 'ゃ') => "hya",
        ('ひ', 'ゅ') => "hyu",
        ('ひ', 'ょ') => "hyo",
        ('び', 'ゃ') => "bya",
        ('び', 'ゅ') => "byu",
        ('び', 'ょ') => "byo",
        ('ぴ', 'ゃ') => "pya",
        ('ぴ', 'ゅ') => "pyu",
        ('ぴ', 'ょ') => "pyo",
        ('み', 'ゃ') => "mya",
        ('み', 'ゅ') => "myu",
        ('み', 'ょ') => "myo",
        ('り', 'ゃ') => "rya",
        ('り', 'ゅ') => "ryu",
        ('り', 'ょ') => "ryo",
        ('ふ', 'ぁ') => "fa",
        ('ふ', 'ぃ') => "fi",
        ('ふ', 'ぇ') => "fe",
        ('ふ', 'ぉ') => "fo",
        ('て', 'ぃ') => "ti",
        ('で', 'ぃ') => "di",
        ('う', 'ぃ') => "wi",
        ('う', 'ぇ') => "we",
        ('ゔ', 'ぁ') => "va",
        ('ゔ', 'ぃ') => "vi",
        ('ゔ', 'ぇ') => "ve",
        ('ゔ', 'ぉ') => "vo",
        _ => return None,
    };
    Some(roman)
}

fn monograph(c: char) -> Option<&'static str> {
    let roman = match c {
        'あ' | 'ぁ' => "a",
        'い' | 'ぃ' => "i",
        'う' | 'ぅ' => "u",
        'え' | 'ぇ' => "e",
        'お' | 'ぉ' => "o",
        'か' | 'ゕ' => "ka",
        'き' => "ki",
        'く' => "ku",
        'け' | 'ゖ' => "ke",
        'こ' => "ko",
        'が' => "ga",
        'ぎ' => "gi",
        'ぐ' => "gu",
        'げ' => "ge",
        'ご' => "go",
        'さ' => "sa",
        'し' => "shi",
        'す' => "su",
        'せ' => "se",
        'そ' => "so",
        'ざ' => "za",
        'じ' => "ji",
        'ず' => "zu",
        'ぜ' => "ze",
        'ぞ' => "zo",
        'た' => "ta",
        'ち' => "chi",
        'つ' => "tsu",
        'て' => "te",
        'と' => "to",
        'だ' => "da",
        'ぢ' => "ji",
        'づ' => "zu",
        'で' => "de",
        'ど' => "do",
        'な' => "na",
        'に' => "ni",
        'ぬ' => "nu",
        'ね' => "ne",
        'の' => "no",
        'は' => "ha",
        'ひ' => "hi",
        'ふ' => "fu",
        'へ' => "he",
        'ほ' => "ho",
        'ば' => "ba",
        'び' => "bi",
        'ぶ' => "bu",
        'べ' => "be",
        'ぼ' => "bo",
        'ぱ' => "pa",
        'ぴ' => "pi",
        'ぷ' => "pu",
        'ぺ' => "pe",
        'ぽ' => "po",
        'ま' => "ma",
        'み' => "mi",
        'む' => "mu",
        'め' => "me",
        'も' => "mo",
        'や' | 'ゃ' => "ya",
        'ゆ' | 'ゅ' => "yu",
        'よ' | 'ょ' => "yo",
        'ら' => "ra",
        'り' => "ri",
        'る' => "ru",
        'れ' => "re",
        'ろ' => "ro",
        'わ' | 'ゎ' => "wa",
        'ゐ' => "i",
        'ゑ' => "e",
        'を' => "o",
        'ん' => "n",
        'ゔ' => "vu",
        _ => return None,
    };
    Some(roman)
}
