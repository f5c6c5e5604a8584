//! Static Unicode → ASCII transliteration table.
//!
//! A fixed, compile-time `phf` map. It is deliberately not locale-aware: `ä`
//! always folds to `a`, never to `ae`. Characters outside the table are left
//! alone by [`Ascii`](crate::stage::ascii::Ascii).
use phf::{Map, phf_map};

/// Replacement text for every character the table knows about.
///
/// A few entries map to the empty string (Cyrillic hard/soft signs), which
/// removes the character.
pub static ASCII_MAP: Map<char, &'static str> = phf_map! {
    // Digits: superscript, subscript, Arabic-Indic, Persian, fullwidth
    '°' => "0",
    '₀' => "0",
    '۰' => "0",
    '٠' => "0",
    '０' => "0",
    '¹' => "1",
    '₁' => "1",
    '۱' => "1",
    '١' => "1",
    '１' => "1",
    '²' => "2",
    '₂' => "2",
    '۲' => "2",
    '٢' => "2",
    '２' => "2",
    '³' => "3",
    '₃' => "3",
    '۳' => "3",
    '٣' => "3",
    '３' => "3",
    '⁴' => "4",
    '₄' => "4",
    '۴' => "4",
    '٤' => "4",
    '４' => "4",
    '⁵' => "5",
    '₅' => "5",
    '۵' => "5",
    '٥' => "5",
    '５' => "5",
    '⁶' => "6",
    '₆' => "6",
    '۶' => "6",
    '٦' => "6",
    '６' => "6",
    '⁷' => "7",
    '₇' => "7",
    '۷' => "7",
    '٧' => "7",
    '７' => "7",
    '⁸' => "8",
    '₈' => "8",
    '۸' => "8",
    '٨' => "8",
    '８' => "8",
    '⁹' => "9",
    '₉' => "9",
    '۹' => "9",
    '٩' => "9",
    '９' => "9",
    // Latin, lowercase
    'à' => "a",
    'á' => "a",
    'ả' => "a",
    'ã' => "a",
    'ạ' => "a",
    'ă' => "a",
    'ắ' => "a",
    'ằ' => "a",
    'ẳ' => "a",
    'ẵ' => "a",
    'ặ' => "a",
    'â' => "a",
    'ấ' => "a",
    'ầ' => "a",
    'ẩ' => "a",
    'ẫ' => "a",
    'ậ' => "a",
    'ā' => "a",
    'ą' => "a",
    'å' => "a",
    'ǻ' => "a",
    'ǎ' => "a",
    'ª' => "a",
    'ä' => "a",
    'ａ' => "a",
    'ｂ' => "b",
    'ç' => "c",
    'ć' => "c",
    'č' => "c",
    'ĉ' => "c",
    'ċ' => "c",
    'ｃ' => "c",
    'ď' => "d",
    'ð' => "d",
    'đ' => "d",
    'ƌ' => "d",
    'ȡ' => "d",
    'ɖ' => "d",
    'ɗ' => "d",
    'ᵭ' => "d",
    'ᶁ' => "d",
    'ᶑ' => "d",
    'ｄ' => "d",
    'é' => "e",
    'è' => "e",
    'ẻ' => "e",
    'ẽ' => "e",
    'ẹ' => "e",
    'ê' => "e",
    'ế' => "e",
    'ề' => "e",
    'ể' => "e",
    'ễ' => "e",
    'ệ' => "e",
    'ë' => "e",
    'ē' => "e",
    'ę' => "e",
    'ě' => "e",
    'ĕ' => "e",
    'ė' => "e",
    'ə' => "e",
    'ｅ' => "e",
    'ƒ' => "f",
    'ｆ' => "f",
    'ĝ' => "g",
    'ğ' => "g",
    'ġ' => "g",
    'ģ' => "g",
    'ｇ' => "g",
    'ĥ' => "h",
    'ħ' => "h",
    'ｈ' => "h",
    'í' => "i",
    'ì' => "i",
    'ỉ' => "i",
    'ĩ' => "i",
    'ị' => "i",
    'î' => "i",
    'ï' => "i",
    'ī' => "i",
    'ĭ' => "i",
    'į' => "i",
    'ı' => "i",
    'ǐ' => "i",
    'ｉ' => "i",
    'ĵ' => "j",
    'ｊ' => "j",
    'ķ' => "k",
    'ĸ' => "k",
    'ｋ' => "k",
    'ł' => "l",
    'ľ' => "l",
    'ĺ' => "l",
    'ļ' => "l",
    'ŀ' => "l",
    'ｌ' => "l",
    'ｍ' => "m",
    'ñ' => "n",
    'ń' => "n",
    'ň' => "n",
    'ņ' => "n",
    'ŉ' => "n",
    'ŋ' => "n",
    'ｎ' => "n",
    'ó' => "o",
    'ò' => "o",
    'ỏ' => "o",
    'õ' => "o",
    'ọ' => "o",
    'ô' => "o",
    'ố' => "o",
    'ồ' => "o",
    'ổ' => "o",
    'ỗ' => "o",
    'ộ' => "o",
    'ơ' => "o",
    'ớ' => "o",
    'ờ' => "o",
    'ở' => "o",
    'ỡ' => "o",
    'ợ' => "o",
    'ø' => "o",
    'ō' => "o",
    'ő' => "o",
    'ŏ' => "o",
    'ǒ' => "o",
    'ǿ' => "o",
    'º' => "o",
    'ö' => "o",
    'ｏ' => "o",
    'ｐ' => "p",
    'ｑ' => "q",
    'ŕ' => "r",
    'ř' => "r",
    'ŗ' => "r",
    'ｒ' => "r",
    'ś' => "s",
    'š' => "s",
    'ş' => "s",
    'ș' => "s",
    'ſ' => "s",
    'ｓ' => "s",
    'ť' => "t",
    'ţ' => "t",
    'ț' => "t",
    'ŧ' => "t",
    'ｔ' => "t",
    'ú' => "u",
    'ù' => "u",
    'ủ' => "u",
    'ũ' => "u",
    'ụ' => "u",
    'ư' => "u",
    'ứ' => "u",
    'ừ' => "u",
    'ử' => "u",
    'ữ' => "u",
    'ự' => "u",
    'û' => "u",
    'ū' => "u",
    'ů' => "u",
    'ű' => "u",
    'ŭ' => "u",
    'ų' => "u",
    'ǔ' => "u",
    'ǖ' => "u",
    'ǘ' => "u",
    'ǚ' => "u",
    'ǜ' => "u",
    'ü' => "u",
    'ｕ' => "u",
    'ｖ' => "v",
    'ŵ' => "w",
    'ｗ' => "w",
    'ｘ' => "x",
    'ý' => "y",
    'ỳ' => "y",
    'ỷ' => "y",
    'ỹ' => "y",
    'ỵ' => "y",
    'ÿ' => "y",
    'ŷ' => "y",
    'ｙ' => "y",
    'ź' => "z",
    'ž' => "z",
    'ż' => "z",
    'ｚ' => "z",
    'æ' => "ae",
    'ǽ' => "ae",
    'ĳ' => "ij",
    'œ' => "oe",
    'ß' => "ss",
    'þ' => "th",
    // Latin, uppercase
    'Á' => "A",
    'À' => "A",
    'Ả' => "A",
    'Ã' => "A",
    'Ạ' => "A",
    'Ă' => "A",
    'Ắ' => "A",
    'Ằ' => "A",
    'Ẳ' => "A",
    'Ẵ' => "A",
    'Ặ' => "A",
    'Â' => "A",
    'Ấ' => "A",
    'Ầ' => "A",
    'Ẩ' => "A",
    'Ẫ' => "A",
    'Ậ' => "A",
    'Å' => "A",
    'Ā' => "A",
    'Ą' => "A",
    'Ǻ' => "A",
    'Ǎ' => "A",
    'Ä' => "A",
    'Ａ' => "A",
    'Ｂ' => "B",
    'Ç' => "C",
    'Ć' => "C",
    'Č' => "C",
    'Ĉ' => "C",
    'Ċ' => "C",
    'Ｃ' => "C",
    'Ď' => "D",
    'Ð' => "D",
    'Đ' => "D",
    'Ɖ' => "D",
    'Ɗ' => "D",
    'Ƌ' => "D",
    'Ｄ' => "D",
    'É' => "E",
    'È' => "E",
    'Ẻ' => "E",
    'Ẽ' => "E",
    'Ẹ' => "E",
    'Ê' => "E",
    'Ế' => "E",
    'Ề' => "E",
    'Ể' => "E",
    'Ễ' => "E",
    'Ệ' => "E",
    'Ë' => "E",
    'Ē' => "E",
    'Ę' => "E",
    'Ě' => "E",
    'Ĕ' => "E",
    'Ė' => "E",
    'Ə' => "E",
    'Ｅ' => "E",
    'Ｆ' => "F",
    'Ĝ' => "G",
    'Ğ' => "G",
    'Ġ' => "G",
    'Ģ' => "G",
    'Ｇ' => "G",
    'Ĥ' => "H",
    'Ħ' => "H",
    'Ｈ' => "H",
    'Í' => "I",
    'Ì' => "I",
    'Ỉ' => "I",
    'Ĩ' => "I",
    'Ị' => "I",
    'Î' => "I",
    'Ï' => "I",
    'Ī' => "I",
    'Ĭ' => "I",
    'Į' => "I",
    'İ' => "I",
    'Ǐ' => "I",
    'Ｉ' => "I",
    'Ĵ' => "J",
    'Ｊ' => "J",
    'Ķ' => "K",
    'Ｋ' => "K",
    'Ĺ' => "L",
    'Ł' => "L",
    'Ļ' => "L",
    'Ľ' => "L",
    'Ŀ' => "L",
    'Ｌ' => "L",
    'Ｍ' => "M",
    'Ń' => "N",
    'Ñ' => "N",
    'Ň' => "N",
    'Ņ' => "N",
    'Ŋ' => "N",
    'Ｎ' => "N",
    'Ó' => "O",
    'Ò' => "O",
    'Ỏ' => "O",
    'Õ' => "O",
    'Ọ' => "O",
    'Ô' => "O",
    'Ố' => "O",
    'Ồ' => "O",
    'Ổ' => "O",
    'Ỗ' => "O",
    'Ộ' => "O",
    'Ơ' => "O",
    'Ớ' => "O",
    'Ờ' => "O",
    'Ở' => "O",
    'Ỡ' => "O",
    'Ợ' => "O",
    'Ø' => "O",
    'Ō' => "O",
    'Ő' => "O",
    'Ŏ' => "O",
    'Ǒ' => "O",
    'Ǿ' => "O",
    'Ö' => "O",
    'Ｏ' => "O",
    'Ｐ' => "P",
    'Ｑ' => "Q",
    'Ř' => "R",
    'Ŕ' => "R",
    'Ŗ' => "R",
    'Ｒ' => "R",
    'Ş' => "S",
    'Ŝ' => "S",
    'Ș' => "S",
    'Š' => "S",
    'Ś' => "S",
    'Ｓ' => "S",
    'Ť' => "T",
    'Ţ' => "T",
    'Ŧ' => "T",
    'Ț' => "T",
    'Ｔ' => "T",
    'Ú' => "U",
    'Ù' => "U",
    'Ủ' => "U",
    'Ũ' => "U",
    'Ụ' => "U",
    'Ư' => "U",
    'Ứ' => "U",
    'Ừ' => "U",
    'Ử' => "U",
    'Ữ' => "U",
    'Ự' => "U",
    'Û' => "U",
    'Ū' => "U",
    'Ů' => "U",
    'Ű' => "U",
    'Ŭ' => "U",
    'Ų' => "U",
    'Ǔ' => "U",
    'Ǖ' => "U",
    'Ǘ' => "U",
    'Ǚ' => "U",
    'Ǜ' => "U",
    'Ü' => "U",
    'Ｕ' => "U",
    'Ｖ' => "V",
    'Ŵ' => "W",
    'Ｗ' => "W",
    'Ｘ' => "X",
    'Ý' => "Y",
    'Ỳ' => "Y",
    'Ỷ' => "Y",
    'Ỹ' => "Y",
    'Ỵ' => "Y",
    'Ÿ' => "Y",
    'Ŷ' => "Y",
    'Ｙ' => "Y",
    'Ź' => "Z",
    'Ž' => "Z",
    'Ż' => "Z",
    'Ｚ' => "Z",
    'Æ' => "AE",
    'Ǽ' => "AE",
    'Ĳ' => "IJ",
    'Œ' => "OE",
    'ẞ' => "SS",
    'Þ' => "TH",
    // Greek
    'α' => "a",
    'ά' => "a",
    'ἀ' => "a",
    'ἁ' => "a",
    'ἂ' => "a",
    'ἃ' => "a",
    'ἄ' => "a",
    'ἅ' => "a",
    'ἆ' => "a",
    'ἇ' => "a",
    'ᾀ' => "a",
    'ᾁ' => "a",
    'ᾂ' => "a",
    'ᾃ' => "a",
    'ᾄ' => "a",
    'ᾅ' => "a",
    'ᾆ' => "a",
    'ᾇ' => "a",
    'ὰ' => "a",
    'ᾰ' => "a",
    'ᾱ' => "a",
    'ᾲ' => "a",
    'ᾳ' => "a",
    'ᾴ' => "a",
    'ᾶ' => "a",
    'ᾷ' => "a",
    'β' => "b",
    'ϐ' => "b",
    'γ' => "g",
    'δ' => "d",
    'ε' => "e",
    'έ' => "e",
    'ἐ' => "e",
    'ἑ' => "e",
    'ἒ' => "e",
    'ἓ' => "e",
    'ἔ' => "e",
    'ἕ' => "e",
    'ὲ' => "e",
    'ζ' => "z",
    'η' => "i",
    'ή' => "i",
    'ι' => "i",
    'ί' => "i",
    'ϊ' => "i",
    'ΐ' => "i",
    'ἰ' => "i",
    'ἱ' => "i",
    'ἲ' => "i",
    'ἳ' => "i",
    'ἴ' => "i",
    'ἵ' => "i",
    'ἶ' => "i",
    'ἷ' => "i",
    'ὶ' => "i",
    'ῐ' => "i",
    'ῑ' => "i",
    'ῒ' => "i",
    'ῖ' => "i",
    'ῗ' => "i",
    'θ' => "th",
    'ϑ' => "th",
    'κ' => "k",
    'λ' => "l",
    'μ' => "m",
    'µ' => "m",
    'ν' => "n",
    'ξ' => "x",
    'ο' => "o",
    'ό' => "o",
    'ὀ' => "o",
    'ὁ' => "o",
    'ὂ' => "o",
    'ὃ' => "o",
    'ὄ' => "o",
    'ὅ' => "o",
    'ὸ' => "o",
    'π' => "p",
    'ρ' => "r",
    'σ' => "s",
    'ς' => "s",
    'τ' => "t",
    'υ' => "y",
    'ύ' => "y",
    'ϋ' => "y",
    'ΰ' => "y",
    'φ' => "f",
    'χ' => "ch",
    'ψ' => "ps",
    'ω' => "w",
    'ώ' => "w",
    'Α' => "A",
    'Ά' => "A",
    'Ἀ' => "A",
    'Ἁ' => "A",
    'Ἂ' => "A",
    'Ἃ' => "A",
    'Ἄ' => "A",
    'Ἅ' => "A",
    'Ἆ' => "A",
    'Ἇ' => "A",
    'Ᾰ' => "A",
    'Ᾱ' => "A",
    'Ὰ' => "A",
    'Β' => "B",
    'Γ' => "G",
    'Δ' => "D",
    'Ε' => "E",
    'Έ' => "E",
    'Ἐ' => "E",
    'Ἑ' => "E",
    'Ἒ' => "E",
    'Ἓ' => "E",
    'Ἔ' => "E",
    'Ἕ' => "E",
    'Ὲ' => "E",
    'Ζ' => "Z",
    'Η' => "I",
    'Ή' => "I",
    'Ι' => "I",
    'Ί' => "I",
    'Ϊ' => "I",
    'Ἰ' => "I",
    'Ἱ' => "I",
    'Ἲ' => "I",
    'Ἳ' => "I",
    'Ἴ' => "I",
    'Ἵ' => "I",
    'Ἶ' => "I",
    'Ἷ' => "I",
    'Ῐ' => "I",
    'Ῑ' => "I",
    'Ὶ' => "I",
    'Θ' => "TH",
    'Κ' => "K",
    'Λ' => "L",
    'Μ' => "M",
    'Ν' => "N",
    'Ξ' => "X",
    'Ο' => "O",
    'Ό' => "O",
    'Ὀ' => "O",
    'Ὁ' => "O",
    'Ὂ' => "O",
    'Ὃ' => "O",
    'Ὄ' => "O",
    'Ὅ' => "O",
    'Ὸ' => "O",
    'Π' => "P",
    'Ρ' => "R",
    'Σ' => "S",
    'Τ' => "T",
    'Υ' => "Y",
    'Ύ' => "Y",
    'Ϋ' => "Y",
    'Ῠ' => "Y",
    'Ῡ' => "Y",
    'Ὺ' => "Y",
    'ϒ' => "Y",
    'Φ' => "F",
    'Χ' => "CH",
    'Ψ' => "PS",
    'Ω' => "W",
    'Ώ' => "W",
    // Cyrillic
    'а' => "a",
    'б' => "b",
    'в' => "v",
    'г' => "g",
    'ґ' => "g",
    'д' => "d",
    'е' => "e",
    'ё' => "e",
    'э' => "e",
    'є' => "e",
    'ѐ' => "e",
    'ж' => "zh",
    'з' => "z",
    'и' => "i",
    'і' => "i",
    'ѝ' => "i",
    'ї' => "yi",
    'й' => "y",
    'ы' => "y",
    'ј' => "j",
    'к' => "k",
    'л' => "l",
    'м' => "m",
    'н' => "n",
    'о' => "o",
    'ө' => "o",
    'п' => "p",
    'р' => "r",
    'с' => "s",
    'т' => "t",
    'у' => "u",
    'ү' => "u",
    'ў' => "u",
    'ф' => "f",
    'х' => "kh",
    'ц' => "ts",
    'ч' => "ch",
    'ш' => "sh",
    'щ' => "shch",
    'ъ' => "",
    'ь' => "",
    'ю' => "yu",
    'я' => "ya",
    'ђ' => "dj",
    'џ' => "dz",
    'љ' => "lj",
    'њ' => "nj",
    'А' => "A",
    'Б' => "B",
    'В' => "V",
    'Г' => "G",
    'Ґ' => "G",
    'Д' => "D",
    'Е' => "E",
    'Ё' => "E",
    'Э' => "E",
    'Є' => "E",
    'Ѐ' => "E",
    'Ж' => "Zh",
    'З' => "Z",
    'И' => "I",
    'І' => "I",
    'Ѝ' => "I",
    'Ї' => "Yi",
    'Й' => "Y",
    'Ы' => "Y",
    'Ј' => "J",
    'К' => "K",
    'Л' => "L",
    'М' => "M",
    'Н' => "N",
    'О' => "O",
    'Ө' => "O",
    'П' => "P",
    'Р' => "R",
    'С' => "S",
    'Т' => "T",
    'У' => "U",
    'Ү' => "U",
    'Ў' => "U",
    'Ф' => "F",
    'Х' => "Kh",
    'Ц' => "Ts",
    'Ч' => "Ch",
    'Ш' => "Sh",
    'Щ' => "Shch",
    'Ъ' => "",
    'Ь' => "",
    'Ю' => "Yu",
    'Я' => "Ya",
    'Ђ' => "Dj",
    'Џ' => "Dz",
    'Љ' => "Lj",
    'Њ' => "Nj",
    // Georgian
    'ა' => "a",
    'ბ' => "b",
    'გ' => "g",
    'დ' => "d",
    'ე' => "e",
    'ვ' => "v",
    'ზ' => "z",
    'თ' => "t",
    'ტ' => "t",
    'ი' => "i",
    'კ' => "k",
    'ლ' => "l",
    'მ' => "m",
    'ნ' => "n",
    'ო' => "o",
    'პ' => "p",
    'ჟ' => "zh",
    'რ' => "r",
    'ს' => "s",
    'უ' => "u",
    'ფ' => "f",
    'ყ' => "q",
    'ქ' => "kh",
    'ხ' => "kh",
    'ღ' => "gh",
    'შ' => "sh",
    'ჩ' => "ch",
    'ჭ' => "ch",
    'ც' => "ts",
    'წ' => "ts",
    'ძ' => "dz",
    'ჯ' => "j",
    'ჰ' => "h",
    // Arabic and Persian
    'ا' => "a",
    'أ' => "a",
    'آ' => "aa",
    'ع' => "aa",
    'إ' => "e",
    'ئ' => "e",
    'ب' => "b",
    'پ' => "p",
    'ت' => "t",
    'ط' => "t",
    'ث' => "th",
    'ذ' => "th",
    'ظ' => "th",
    'ج' => "j",
    'چ' => "ch",
    'ح' => "h",
    'ه' => "h",
    'خ' => "kh",
    'د' => "d",
    'ض' => "d",
    'ر' => "r",
    'ز' => "z",
    'ژ' => "zh",
    'س' => "s",
    'ص' => "s",
    'ش' => "sh",
    'غ' => "gh",
    'ف' => "f",
    'ق' => "k",
    'ك' => "k",
    'ک' => "k",
    'گ' => "g",
    'ل' => "l",
    'م' => "m",
    'ن' => "n",
    'و' => "o",
    'ؤ' => "oe",
    'ی' => "i",
    'ي' => "y",
    // Symbols
    '@' => "at",
    '♥' => "love",
    '©' => "(c)",
    '®' => "(r)",
    '™' => "TM",
    '€' => "EUR",
    '£' => "GBP",
    '¥' => "JPY",
    '₹' => "INR",
    '₽' => "RUB",
    '¢' => "c",
    '½' => "1/2",
    '¼' => "1/4",
    '¾' => "3/4",
    '×' => "x",
    '…' => "...",
    '‐' => "-",
    '‑' => "-",
    '‒' => "-",
    '–' => "-",
    '—' => "-",
    '―' => "-",
    '−' => "-",
    '‘' => "'",
    '’' => "'",
    '‚' => "'",
    '′' => "'",
    '“' => "\"",
    '”' => "\"",
    '„' => "\"",
    '″' => "\"",
    '«' => "\"",
    '»' => "\"",
    // Unicode spaces
    '\u{00A0}' => " ",
    '\u{1680}' => " ",
    '\u{2000}' => " ",
    '\u{2001}' => " ",
    '\u{2002}' => " ",
    '\u{2003}' => " ",
    '\u{2004}' => " ",
    '\u{2005}' => " ",
    '\u{2006}' => " ",
    '\u{2007}' => " ",
    '\u{2008}' => " ",
    '\u{2009}' => " ",
    '\u{200A}' => " ",
    '\u{202F}' => " ",
    '\u{205F}' => " ",
    '\u{3000}' => " ",
};

/// ASCII replacement for `c`, if the table has one.
#[inline(always)]
pub fn lookup(c: char) -> Option<&'static str> {
    if c.is_ascii() && c != '@' {
        return None;
    }
    ASCII_MAP.get(&c).copied()
}
