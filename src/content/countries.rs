//! Driving side by country
//!
//! Source: https://en.wikipedia.org/wiki/Left-_and_right-hand_traffic
//! Rows are (name, ISO 3166-1 alpha-2 code, side). Codes double as flag image names.

use crate::sim::Side::{self, Left, Right};

/// A row of the reference table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub name: &'static str,
    pub code: &'static str,
    pub side: Side,
}

impl Country {
    /// Flag image path for this country
    pub fn image_url(&self) -> String {
        format!("./country-flag-svg/{}.svg", self.code)
    }
}

macro_rules! countries {
    ($(($name:expr, $code:expr, $side:expr)),* $(,)?) => {
        &[$(Country { name: $name, code: $code, side: $side }),*]
    };
}

pub static COUNTRIES: &[Country] = countries![
    ("Afghanistan", "af", Right),
    ("Albania", "al", Right),
    ("Algeria", "dz", Right),
    ("Andorra", "ad", Right),
    ("Angola", "ao", Right),
    ("Antigua and Barbuda", "ag", Left),
    ("Argentina", "ar", Right),
    ("Armenia", "am", Right),
    ("Australia", "au", Left),
    ("Austria", "at", Right),
    ("Azerbaijan", "az", Right),
    ("Bahamas", "bs", Left),
    ("Bahrain", "bh", Right),
    ("Bangladesh", "bd", Left),
    ("Barbados", "bb", Left),
    ("Belarus", "by", Right),
    ("Belgium", "be", Right),
    ("Belize", "bz", Right),
    ("Benin", "bj", Right),
    ("Bhutan", "bt", Left),
    ("Bolivia", "bo", Right),
    ("Bosnia and Herzegovina", "ba", Right),
    ("Botswana", "bw", Left),
    ("Brazil", "br", Right),
    ("Brunei", "bn", Left),
    ("Bulgaria", "bg", Right),
    ("Burkina Faso", "bf", Right),
    ("Burundi", "bi", Right),
    ("Cambodia", "kh", Right),
    ("Cameroon", "cm", Right),
    ("Canada", "ca", Right),
    ("Cape Verde", "cv", Right),
    ("Central African Republic", "cf", Right),
    ("Chile", "cl", Right),
    ("Hong Kong", "hk", Left),
    ("Macau", "mo", Left),
    ("Colombia", "co", Right),
    ("Comoros", "km", Right),
    ("Congo", "cg", Right),
    ("DR Congo", "cd", Right),
    ("Costa Rica", "cr", Right),
    ("Ivory Coast", "ci", Right),
    ("Croatia", "hr", Right),
    ("Cuba", "cu", Right),
    ("Cyprus", "cy", Left),
    ("Czech Republic", "cz", Right),
    ("Denmark", "dk", Right),
    ("Djibouti", "dj", Right),
    ("Dominica", "dm", Left),
    ("Dominican Republic", "do", Right),
    ("East Timor", "tl", Left),
    ("Ecuador", "ec", Right),
    ("Egypt", "eg", Right),
    ("El Salvador", "sv", Right),
    ("Equatorial Guinea", "gq", Right),
    ("Eritrea", "er", Right),
    ("Estonia", "ee", Right),
    ("Eswatini", "sz", Left),
    ("Ethiopia", "et", Right),
    ("Fiji", "fj", Left),
    ("Finland", "fi", Right),
    ("France", "fr", Right),
    ("Gabon", "ga", Right),
    ("Gambia", "gm", Right),
    ("Georgia", "ge", Right),
    ("Germany", "de", Right),
    ("Ghana", "gh", Right),
    ("Greece", "gr", Right),
    ("Grenada", "gd", Left),
    ("Guatemala", "gt", Right),
    ("Guinea", "gn", Right),
    ("Guinea-Bissau", "gw", Right),
    ("Guyana", "gy", Left),
    ("Haiti", "ht", Right),
    ("Honduras", "hn", Right),
    ("Hungary", "hu", Right),
    ("Iceland", "is", Right),
    ("India", "in", Left),
    ("Indonesia", "id", Left),
    ("Iran", "ir", Right),
    ("Iraq", "iq", Right),
    ("Ireland", "ie", Left),
    ("Israel", "il", Right),
    ("Italy", "it", Right),
    ("Jamaica", "jm", Left),
    ("Japan", "jp", Left),
    ("Jordan", "jo", Right),
    ("Kazakhstan", "kz", Right),
    ("Kenya", "ke", Left),
    ("Kiribati", "ki", Left),
    ("Kosovo", "xk", Right),
    ("Kuwait", "kw", Right),
    ("Kyrgyzstan", "kg", Right),
    ("Laos", "la", Right),
    ("Latvia", "lv", Right),
    ("Lebanon", "lb", Right),
    ("Lesotho", "ls", Left),
    ("Liberia", "lr", Right),
    ("Libya", "ly", Right),
    ("Liechtenstein", "li", Right),
    ("Lithuania", "lt", Right),
    ("Luxembourg", "lu", Right),
    ("Madagascar", "mg", Right),
    ("Malawi", "mw", Left),
    ("Malaysia", "my", Left),
    ("Maldives", "mv", Left),
    ("Mali", "ml", Right),
    ("Malta", "mt", Left),
    ("Marshall Islands", "mh", Right),
    ("Mauritania", "mr", Right),
    ("Mauritius", "mu", Left),
    ("Mexico", "mx", Right),
    ("Micronesia", "fm", Right),
    ("Moldova", "md", Right),
    ("Monaco", "mc", Right),
    ("Mongolia", "mn", Right),
    ("Montenegro", "me", Right),
    ("Morocco", "ma", Right),
    ("Mozambique", "mz", Left),
    ("Myanmar", "mm", Right),
    ("Namibia", "na", Left),
    ("Nauru", "nr", Left),
    ("Nepal", "np", Left),
    ("Netherlands", "nl", Right),
    ("New Zealand", "nz", Left),
    ("Nicaragua", "ni", Right),
    ("Niger", "ne", Right),
    ("Nigeria", "ng", Right),
    ("North Korea", "kp", Right),
    ("North Macedonia", "mk", Right),
    ("Norway", "no", Right),
    ("Oman", "om", Right),
    ("Pakistan", "pk", Left),
    ("Palau", "pw", Right),
    ("Palestine", "ps", Right),
    ("Panama", "pa", Right),
    ("Papua New Guinea", "pg", Left),
    ("Paraguay", "py", Right),
    ("Peru", "pe", Right),
    ("Philippines", "ph", Right),
    ("Poland", "pl", Right),
    ("Portugal", "pt", Right),
    ("Qatar", "qa", Right),
    ("Romania", "ro", Right),
    ("Russia", "ru", Right),
    ("Rwanda", "rw", Right),
    ("Saint Kitts and Nevis", "kn", Left),
    ("Saint Lucia", "lc", Left),
    ("Samoa", "ws", Left),
    ("San Marino", "sm", Right),
    ("São Tomé and Príncipe", "st", Right),
    ("Saudi Arabia", "sa", Right),
    ("Senegal", "sn", Right),
    ("Serbia", "rs", Right),
    ("Seychelles", "sc", Left),
    ("Sierra Leone", "sl", Right),
    ("Singapore", "sg", Left),
    ("Slovakia", "sk", Right),
    ("Slovenia", "si", Right),
    ("Solomon Islands", "sb", Left),
    ("Somalia", "so", Right),
    ("South Africa", "za", Left),
    ("South Korea", "kr", Right),
    ("South Sudan", "ss", Right),
    ("Spain", "es", Right),
    ("Sri Lanka", "lk", Left),
    ("Sudan", "sd", Right),
    ("Suriname", "sr", Left),
    ("Sweden", "se", Right),
    ("Switzerland", "ch", Right),
    ("Syria", "sy", Right),
    ("Taiwan", "tw", Right),
    ("Tajikistan", "tj", Right),
    ("Tanzania", "tz", Left),
    ("Thailand", "th", Left),
    ("Togo", "tg", Right),
    ("Tonga", "to", Left),
    ("Trinidad and Tobago", "tt", Left),
    ("Tunisia", "tn", Right),
    ("Turkey", "tr", Right),
    ("Turkmenistan", "tm", Right),
    ("Tuvalu", "tv", Left),
    ("Uganda", "ug", Left),
    ("Ukraine", "ua", Right),
    ("United Arab Emirates", "ae", Right),
    ("United Kingdom", "gb", Left),
    ("United States", "us", Right),
    ("British Indian Ocean Territory", "io", Right),
    ("British Virgin Islands", "vg", Left),
    ("Cayman Islands", "ky", Left),
    ("Falkland Islands", "fk", Left),
    ("Gibraltar", "gi", Right),
    ("Guernsey", "gg", Left),
    ("Isle of Man", "im", Left),
    ("Jersey", "je", Left),
    ("Pitcairn Islands", "pn", Left),
    ("Turks and Caicos Islands", "tc", Left),
    ("Puerto Rico", "pr", Right),
    ("U.S. Virgin Islands", "vi", Left),
    ("Guam", "gu", Right),
    ("Northern Mariana Islands", "mp", Right),
    ("American Samoa", "as", Right),
    ("Uruguay", "uy", Right),
    ("Uzbekistan", "uz", Right),
    ("Vanuatu", "vu", Right),
    ("Vatican City", "va", Right),
    ("Venezuela", "ve", Right),
    ("Vietnam", "vn", Right),
    ("Western Sahara", "eh", Right),
    ("Yemen", "ye", Right),
    ("Zambia", "zm", Left),
    ("Zimbabwe", "zw", Left),
];

/// Countries well known enough for medium difficulty
pub const WELL_KNOWN: &[&str] = &[
    "gb", "ie", "jp", "au", "nz", "in", "za", "th", "id", "my", "sg", "jm",
    "us", "ca", "fr", "de", "es", "it", "br", "mx", "ru", "se", "kr", "eg",
];

/// Look up a country by its code
pub fn by_code(code: &str) -> Option<&'static Country> {
    COUNTRIES.iter().find(|c| c.code.eq_ignore_ascii_case(code))
}

/// Every country driving on `side`, in table order
pub fn countries_by_side(side: Side) -> impl Iterator<Item = &'static Country> {
    COUNTRIES.iter().filter(move |c| c.side == side)
}
