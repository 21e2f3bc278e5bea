//! Character reference tables, keyed by the id byte stored in a container.
//!
//! The decoder never consults these; ids outside the table are still valid.

pub const CHARACTER_COUNT: usize = 36;

/// Lower-case aliases accepted in searches. The first alias is the id itself.
pub const SEARCH_NAMES: [&[&str]; CHARACTER_COUNT] = [
    &["0", "ragna", "ra"],
    &["1", "jin", "ji"],
    &["2", "noel", "no"],
    &["3", "rachel", "rc"],
    &["4", "taokaka", "tao", "tk"],
    &["5", "tager", "irontager", "tg"],
    &["6", "litchi", "li"],
    &["7", "arakune", "ar"],
    &["8", "bang", "bg"],
    &["9", "carl", "cr"],
    &["10", "hakumen", "hk"],
    &["11", "nu13", "nu-13", "nu"],
    &["12", "tsubaki", "ts"],
    &["13", "hazama", "hz"],
    &["14", "mu12", "mu-12", "mu"],
    &["15", "makoto", "mk"],
    &["16", "valkenhayn", "valk", "vk"],
    &["17", "platnium", "plat", "pl"],
    &["18", "relius", "re"],
    &["19", "izayoi", "iz"],
    &["20", "amane", "am"],
    &["21", "bullet", "bu"],
    &["22", "azrael", "az"],
    &["23", "kagura", "kg"],
    &["24", "kokonoe", "ko"],
    &["25", "terumi", "te"],
    &["26", "celicia", "ce"],
    &["27", "lambda11", "lambda-11", "lambda", "la"],
    &["28", "hibiki", "hi"],
    &["29", "nine", "ni"],
    &["30", "naoto", "na"],
    &["31", "izanami", "in"],
    &["32", "susanoo", "susano'o", "susano", "su"],
    &["33", "es"],
    &["34", "mai", "ma"],
    &["35", "jubei", "ju"],
];

pub const FULL_NAMES: [&str; CHARACTER_COUNT] = [
    "Ragna the Bloodedge",
    "Jin Kisaragi",
    "Noel Vermillion",
    "Rachel Alucard",
    "Taokaka",
    "Iron Tager",
    "Litchi Faye Ling",
    "Arakune",
    "Bang Shishigami",
    "Carl Clover",
    "Hakumen",
    "Nu-13",
    "Tsubaki Yayoi",
    "Hazama",
    "Mu-12",
    "Makoto Nanaya",
    "Valkenhayn R. Hellsing",
    "Platinum the Trinity",
    "Relius Clover",
    "Izayoi",
    "Amane Nishiki",
    "Bullet",
    "Azrael",
    "Kagura Mutsuki",
    "Kokonoe",
    "Yuuki Terumi",
    "Celica A. Mercury",
    "Lambda-11",
    "Hibiki Kohaku",
    "Nine the Phantom",
    "Naoto Kurogane",
    "Izanami",
    "Susano'o",
    "Es",
    "Mai Natsume",
    "Jubei",
];

pub fn full_name(id: u8) -> Option<&'static str> {
    FULL_NAMES.get(id as usize).copied()
}

pub fn search_names(id: u8) -> Option<&'static [&'static str]> {
    SEARCH_NAMES.get(id as usize).copied()
}

/// Resolves a search term to a character id, ignoring case and surrounding spaces.
pub fn find_character(query: &str) -> Option<u8> {
    let query = query.trim().to_lowercase();
    SEARCH_NAMES
        .iter()
        .position(|aliases| aliases.contains(&query.as_str()))
        .map(|id| id as u8)
}
