//! Timezone marker tables.
//!
//! https://en.wikipedia.org/wiki/List_of_time_zone_abbreviations
//!
//! A clock time followed by any of these markers names a time of day, not an
//! offset into a video, so the recognition engine treats them as exclusions.

use once_cell::sync::Lazy;

/// Lowercase timezone abbreviations.
#[rustfmt::skip]
pub const TIME_ZONE_CODES: &[&str] = &[
    "acdt", "acst", "act", "acwst", "adt", "aedt", "aest", "aet", "aft",
    "akdt", "akst", "almt", "amst", "amt", "anat", "aqtt", "art", "ast",
    "awst", "azost", "azot", "azt", "biot", "bit", "bnt", "bot", "brst",
    "brt", "bst", "btt", "cat", "cct", "cdt", "cest", "cet", "chadt",
    "chast", "chost", "chot", "chst", "chut", "cist", "ckt", "clst", "clt",
    "cost", "cot", "cst", "ct", "cvt", "cwst", "cxt", "davt", "ddut",
    "dft", "easst", "east", "eat", "ect", "edt", "eest", "eet", "egst",
    "egt", "est", "et", "fet", "fjt", "fkst", "fkt", "fnt", "galt",
    "gamt", "get", "gft", "gilt", "git", "gmt", "gst", "gyt", "haec",
    "hdt", "hkt", "hmt", "hovst", "hovt", "hst", "ict", "idlw", "idt",
    "iot", "irdt", "irkt", "irst", "ist", "jst", "kalt", "kgt", "kost",
    "krat", "kst", "lhst", "lint", "magt", "mart", "mawt", "mdt", "mest",
    "met", "mht", "mist", "mit", "mmt", "msk", "mst", "mut", "mvt",
    "myt", "nct", "ndt", "nft", "novt", "npt", "nst", "nt", "nut",
    "nzdt", "nzst", "omst", "orat", "pdt", "pet", "pett", "pgt", "phot",
    "phst", "pht", "pkt", "pmdt", "pmst", "pont", "pst", "pwt", "pyst",
    "pyt", "ret", "rott", "sakt", "samt", "sast", "sbt", "sct", "sdt",
    "sgt", "slst", "sret", "srt", "sst", "syot", "taht", "tft", "tha",
    "tjt", "tkt", "tlt", "tmt", "tot", "trt", "tvt", "ulast", "ulat",
    "utc", "uyst", "uyt", "uzt", "vet", "vlat", "volt", "vost", "vut",
    "wakt", "wast", "wat", "west", "wet", "wgst", "wgt", "wib", "wit",
    "wita", "wst", "yakt", "yekt",
];

/// Timezone full names.
pub const TIME_ZONE_WORDS: &[&str] = &[
    "Australian Central Daylight Saving Time",
    "Australian Central Standard Time",
    "Acre Time",
    "ASEAN Common Time",
    "Australian Central Western Standard Time",
    "Atlantic Daylight Time",
    "Australian Eastern Daylight Saving Time",
    "Australian Eastern Standard Time",
    "Australian Eastern Time",
    "Afghanistan Time",
    "Alaska Daylight Time",
    "Alaska Standard Time",
    "Alma-Ata Time",
    "Amazon Summer Time",
    "Amazon Time",
    "Armenia Time",
    "Anadyr Time",
    "Aqtobe Time",
    "Argentina Time",
    "Arabia Standard Time",
    "Atlantic Standard Time",
    "Australian Western Standard Time",
    "Azores Summer Time",
    "Azores Standard Time",
    "Azerbaijan Time",
    "Brunei Time",
    "British Indian Ocean Time",
    "Baker Island Time",
    "Bolivia Time",
    "Brasília Summer Time",
    "Brasília Time",
    "Bangladesh Standard Time",
    "Bougainville Standard Time",
    "British Summer Time",
    "Bhutan Time",
    "Central Africa Time",
    "Cocos Islands Time",
    "Central Daylight Time",
    "Cuba Daylight Time",
    "Central European Summer Time",
    "Central European Time",
    "Chatham Daylight Time",
    "Chatham Standard Time",
    "Choibalsan Standard Time",
    "Choibalsan Summer Time",
    "Chamorro Standard Time",
    "Chuuk Time",
    "Clipperton Island Standard Time",
    "Cook Island Time",
    "Chile Summer Time",
    "Chile Standard Time",
    "Colombia Summer Time",
    "Colombia Time",
    "Central Standard Time",
    "China Standard Time",
    "Cuba Standard Time",
    "Central Time",
    "Cape Verde Time",
    "Central Western Standard Time",
    "Christmas Island Time",
    "Davis Time",
    "Dumont d'Urville Time",
    "Easter Island Summer Time",
    "Easter Island Standard Time",
    "East Africa Time",
    "Eastern Caribbean Time",
    "Ecuador Time",
    "Eastern Daylight Time",
    "Eastern European Summer Time",
    "Eastern European Time",
    "Eastern Greenland Summer Time",
    "Eastern Greenland Time",
    "Eastern Standard Time",
    "Eastern Time",
    "Further-eastern European Time",
    "Fiji Time",
    "Falkland Islands Summer Time",
    "Falkland Islands Time",
    "Fernando de Noronha Time",
    "Galápagos Time",
    "Gambier Islands Time",
    "Georgia Standard Time",
    "French Guiana Time",
    "Gilbert Island Time",
    "Gambier Island Time",
    "Greenwich Mean Time",
    "South Georgia Time",
    "Gulf Standard Time",
    "Guyana Time",
    "Hawaii-Aleutian Daylight Time",
    "Heure Avancée d'Europe Centrale",
    "Hawaii-Aleutian Standard Time",
    "Hong Kong Time",
    "Heard and McDonald Islands Time",
    "Hovd Summer Time",
    "Hovd Time",
    "Indochina Time",
    "International Day Line West",
    "Israel Daylight Time",
    "Indian Ocean Time",
    "Iran Daylight Time",
    "Irkutsk Time",
    "Iran Standard Time",
    "Indian Standard Time",
    "Irish Standard Time",
    "Israel Standard Time",
    "Japan Standard Time",
    "Kaliningrad Time",
    "Kyrgyzstan Time",
    "Kosrae Time",
    "Krasnoyarsk Time",
    "Korea Standard Time",
    "Lord Howe Standard Time",
    "Lord Howe Summer Time",
    "Line Islands Time",
    "Magadan Time",
    "Marquesas Islands Time",
    "Mawson Station Time",
    "Mountain Daylight Time",
    "Middle European Time",
    "Middle European Summer Time",
    "Marshall Islands Time",
    "Macquarie Island Station Time",
    "Myanmar Standard Time",
    "Moscow Time",
    "Malaysia Standard Time",
    "Mountain Standard Time",
    "Mauritius Time",
    "Maldives Time",
    "Malaysia Time",
    "New Caledonia Time",
    "Newfoundland Daylight Time",
    "Norfolk Island Time",
    "Novosibirsk Time",
    "Nepal Time",
    "Newfoundland Standard Time",
    "Newfoundland Time",
    "Niue Time",
    "New Zealand Daylight Time",
    "New Zealand Standard Time",
    "Omsk Time",
    "Oral Time",
    "Pacific Daylight Time",
    "Peru Time",
    "Kamchatka Time",
    "Papua New Guinea Time",
    "Phoenix Island Time",
    "Philippine Time",
    "Philippine Standard Time",
    "Pakistan Standard Time",
    "Saint Pierre and Miquelon Daylight Time",
    "Saint Pierre and Miquelon Standard Time",
    "Pohnpei Standard Time",
    "Pacific Standard Time",
    "Palau Time",
    "Paraguay Summer Time",
    "Paraguay Time",
    "Réunion Time",
    "Rothera Research Station Time",
    "Sakhalin Island Time",
    "Samara Time",
    "South African Standard Time",
    "Solomon Islands Time",
    "Seychelles Time",
    "Samoa Daylight Time",
    "Singapore Time",
    "Sri Lanka Standard Time",
    "Srednekolymsk Time",
    "Suriname Time",
    "Samoa Standard Time",
    "Singapore Standard Time",
    "Showa Station Time",
    "Tahiti Time",
    "Thailand Standard Time",
    "French Southern and Antarctic Time",
    "Tajikistan Time",
    "Tokelau Time",
    "Timor Leste Time",
    "Turkmenistan Time",
    "Turkey Time",
    "Tonga Time",
    "Tuvalu Time",
    "Ulaanbaatar Summer Time",
    "Ulaanbaatar Standard Time",
    "Coordinated Universal Time",
    "Uruguay Summer Time",
    "Uruguay Standard Time",
    "Uzbekistan Time",
    "Venezuelan Standard Time",
    "Vladivostok Time",
    "Volgograd Time",
    "Vostok Station Time",
    "Vanuatu Time",
    "Wake Island Time",
    "West Africa Summer Time",
    "West Africa Time",
    "Western European Summer Time",
    "Western European Time",
    "Western Indonesian Time",
    "Eastern Indonesian Time",
    "Central Indonesia Time",
    "West Greenland Summer Time",
    "West Greenland Time",
    "Western Standard Time",
    "Yakutsk Time",
    "Yekaterinburg Time",
];

/// Lowercased first word of every timezone full name ("eastern", "pacific").
pub static TIME_ZONE_FIRST_WORDS: Lazy<Vec<String>> = Lazy::new(|| {
    TIME_ZONE_WORDS.iter().filter_map(|name| name.split_whitespace().next()).map(str::to_lowercase).collect()
});
