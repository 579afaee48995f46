#![forbid(unsafe_code)]

//! The xterm 256-color palette.
//!
//! [`Color`] is a palette index with a canonical name. Index → name is a
//! static table; name → color is built once on first lookup and never
//! changes afterwards.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use crate::error::ValidationError;

/// Number of palette entries.
pub const PALETTE_LEN: usize = 256;

/// A 256-color palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Color(u8);

impl Color {
    /// Look up a palette entry by index.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ColorOutOfRange`] outside `0..=255`.
    pub fn from_index(index: i64) -> Result<Self, ValidationError> {
        u8::try_from(index)
            .map(Self)
            .map_err(|_| ValidationError::ColorOutOfRange { value: index })
    }

    /// Look up a palette entry by its canonical name (case-sensitive).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownColorName`] if no entry matches.
    pub fn from_name(name: &str) -> Result<Self, ValidationError> {
        by_name()
            .get(name)
            .copied()
            .ok_or_else(|| ValidationError::UnknownColorName(name.to_owned()))
    }

    /// The palette index.
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// The canonical name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        NAMES[self.0 as usize]
    }

    /// All palette entries in index order.
    pub fn all() -> impl ExactSizeIterator<Item = Self> {
        (0..=u8::MAX).map(Self)
    }
}

impl From<u8> for Color {
    fn from(index: u8) -> Self {
        Self(index)
    }
}

impl From<Color> for u8 {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn by_name() -> &'static HashMap<&'static str, Color> {
    static MAPPED: OnceLock<HashMap<&'static str, Color>> = OnceLock::new();
    MAPPED.get_or_init(|| Color::all().map(|color| (color.name(), color)).collect())
}

macro_rules! palette {
    ($($index:literal => $konst:ident $name:literal,)*) => {
        impl Color {
            $(
                #[doc = concat!("`", $name, "` (index ", stringify!($index), ").")]
                pub const $konst: Color = Color($index);
            )*
        }

        const NAMES: [&str; PALETTE_LEN] = [$($name,)*];
    };
}

palette! {
    0 => BLACK "Black",
    1 => MAROON "Maroon",
    2 => GREEN "Green",
    3 => OLIVE "Olive",
    4 => NAVY "Navy",
    5 => PURPLE "Purple",
    6 => TEAL "Teal",
    7 => SILVER "Silver",
    8 => GRAY "Gray",
    9 => RED "Red",
    10 => LIME "Lime",
    11 => YELLOW "Yellow",
    12 => BLUE "Blue",
    13 => FUCHSIA "Fuchsia",
    14 => AQUA "Aqua",
    15 => WHITE "White",
    16 => GRAY0 "Gray0",
    17 => NAVY_BLUE "NavyBlue",
    18 => DARK_BLUE "DarkBlue",
    19 => BLUE3_A "Blue3_A",
    20 => BLUE3_B "Blue3_B",
    21 => BLUE1 "Blue1",
    22 => DARK_GREEN "DarkGreen",
    23 => DEEP_SKY_BLUE4_A "DeepSkyBlue4_A",
    24 => DEEP_SKY_BLUE4_B "DeepSkyBlue4_B",
    25 => DEEP_SKY_BLUE4_C "DeepSkyBlue4_C",
    26 => DODGER_BLUE3 "DodgerBlue3",
    27 => DODGER_BLUE2 "DodgerBlue2",
    28 => GREEN4 "Green4",
    29 => SPRING_GREEN4 "SpringGreen4",
    30 => TURQUOISE4 "Turquoise4",
    31 => DEEP_SKY_BLUE3_A "DeepSkyBlue3_A",
    32 => DEEP_SKY_BLUE3_B "DeepSkyBlue3_B",
    33 => DODGER_BLUE1 "DodgerBlue1",
    34 => GREEN3_A "Green3_A",
    35 => SPRING_GREEN3_A "SpringGreen3_A",
    36 => DARK_CYAN "DarkCyan",
    37 => LIGHT_SEA_GREEN "LightSeaGreen",
    38 => DEEP_SKY_BLUE2 "DeepSkyBlue2",
    39 => DEEP_SKY_BLUE1 "DeepSkyBlue1",
    40 => GREEN3_2 "Green3_2",
    41 => SPRING_GREEN3_B "SpringGreen3_B",
    42 => SPRING_GREEN2_A "SpringGreen2_A",
    43 => CYAN3 "Cyan3",
    44 => DARK_TURQUOISE "DarkTurquoise",
    45 => TURQUOISE2 "Turquoise2",
    46 => GREEN1 "Green1",
    47 => SPRING_GREEN2_B "SpringGreen2_B",
    48 => SPRING_GREEN1 "SpringGreen1",
    49 => MEDIUM_SPRING_GREEN "MediumSpringGreen",
    50 => CYAN2 "Cyan2",
    51 => CYAN1 "Cyan1",
    52 => DARK_RED_A "DarkRed_A",
    53 => DEEP_PINK4_A "DeepPink4_A",
    54 => PURPLE4_A "Purple4_A",
    55 => PURPLE4_B "Purple4_B",
    56 => PURPLE3 "Purple3",
    57 => BLUE_VIOLET "BlueViolet",
    58 => ORANGE4_A "Orange4_A",
    59 => GRAY37 "Gray37",
    60 => MEDIUM_PURPLE4 "MediumPurple4",
    61 => SLATE_BLUE3_A "SlateBlue3_A",
    62 => SLATE_BLUE3_B "SlateBlue3_B",
    63 => ROYAL_BLUE1 "RoyalBlue1",
    64 => CHARTREUSE4 "Chartreuse4",
    65 => DARK_SEA_GREEN4_A "DarkSeaGreen4_A",
    66 => PALE_TURQUOISE4 "PaleTurquoise4",
    67 => STEEL_BLUE "SteelBlue",
    68 => STEEL_BLUE3 "SteelBlue3",
    69 => CORNFLOWER_BLUE "CornflowerBlue",
    70 => CHARTREUSE3_A "Chartreuse3_A",
    71 => DARK_SEA_GREEN4_B "DarkSeaGreen4_B",
    72 => CADET_BLUE_A "CadetBlue_A",
    73 => CADET_BLUE_B "CadetBlue_B",
    74 => SKY_BLUE3 "SkyBlue3",
    75 => STEEL_BLUE1_A "SteelBlue1_A",
    76 => CHARTREUSE3_B "Chartreuse3_B",
    77 => PALE_GREEN3_A "PaleGreen3_A",
    78 => SEA_GREEN3 "SeaGreen3",
    79 => AQUAMARINE3 "Aquamarine3",
    80 => MEDIUM_TURQUOISE "MediumTurquoise",
    81 => STEEL_BLUE1_B "SteelBlue1_B",
    82 => CHARTREUSE2_A "Chartreuse2_A",
    83 => SEA_GREEN2 "SeaGreen2",
    84 => SEA_GREEN1_A "SeaGreen1_A",
    85 => SEA_GREEN1_B "SeaGreen1_B",
    86 => AQUAMARINE1_A "Aquamarine1_A",
    87 => DARK_SLATE_GRAY2 "DarkSlateGray2",
    88 => DARK_RED_B "DarkRed_B",
    89 => DEEP_PINK4_B "DeepPink4_B",
    90 => DARK_MAGENTA_A "DarkMagenta_A",
    91 => DARK_MAGENTA_B "DarkMagenta_B",
    92 => DARK_VIOLET_A "DarkViolet_A",
    93 => PURPLE_A "Purple_A",
    94 => ORANGE4_B "Orange4_B",
    95 => LIGHT_PINK4 "LightPink4",
    96 => PLUM4 "Plum4",
    97 => MEDIUM_PURPLE3_A "MediumPurple3_A",
    98 => MEDIUM_PURPLE3_B "MediumPurple3_B",
    99 => SLATE_BLUE1 "SlateBlue1",
    100 => YELLOW4_A "Yellow4_A",
    101 => WHEAT4 "Wheat4",
    102 => GRAY53 "Gray53",
    103 => LIGHT_SLATE_GRAY "LightSlateGray",
    104 => MEDIUM_PURPLE "MediumPurple",
    105 => LIGHT_SLATE_BLUE "LightSlateBlue",
    106 => YELLOW4_B "Yellow4_B",
    107 => DARK_OLIVE_GREEN3_A "DarkOliveGreen3_A",
    108 => DARK_SEA_GREEN "DarkSeaGreen",
    109 => LIGHT_SKY_BLUE3_A "LightSkyBlue3_A",
    110 => LIGHT_SKY_BLUE3_B "LightSkyBlue3_B",
    111 => SKY_BLUE2 "SkyBlue2",
    112 => CHARTREUSE2_B "Chartreuse2_B",
    113 => DARK_OLIVE_GREEN3_B "DarkOliveGreen3_B",
    114 => PALE_GREEN3_B "PaleGreen3_B",
    115 => DARK_SEA_GREEN3_A "DarkSeaGreen3_A",
    116 => DARK_SLATE_GRAY3 "DarkSlateGray3",
    117 => SKY_BLUE1 "SkyBlue1",
    118 => CHARTREUSE1 "Chartreuse1",
    119 => LIGHT_GREEN_A "LightGreen_A",
    120 => LIGHT_GREEN_B "LightGreen_B",
    121 => PALE_GREEN1_A "PaleGreen1_A",
    122 => AQUAMARINE1_B "Aquamarine1_B",
    123 => DARK_SLATE_GRAY1 "DarkSlateGray1",
    124 => RED3_A "Red3_A",
    125 => DEEP_PINK4 "DeepPink4",
    126 => MEDIUM_VIOLET_RED "MediumVioletRed",
    127 => MAGENTA3_A "Magenta3_A",
    128 => DARK_VIOLET_B "DarkViolet_B",
    129 => PURPLE_B "Purple_B",
    130 => DARK_ORANGE3_A "DarkOrange3_A",
    131 => INDIAN_RED_A "IndianRed_A",
    132 => HOT_PINK3_A "HotPink3_A",
    133 => MEDIUM_ORCHID3 "MediumOrchid3",
    134 => MEDIUM_ORCHID "MediumOrchid",
    135 => MEDIUM_PURPLE2_A "MediumPurple2_A",
    136 => DARK_GOLDENROD "DarkGoldenrod",
    137 => LIGHT_SALMON3_A "LightSalmon3_A",
    138 => ROSY_BROWN "RosyBrown",
    139 => GRAY63 "Gray63",
    140 => MEDIUM_PURPLE2_B "MediumPurple2_B",
    141 => MEDIUM_PURPLE1 "MediumPurple1",
    142 => GOLD3_A "Gold3_A",
    143 => DARK_KHAKI "DarkKhaki",
    144 => NAVAJO_WHITE3 "NavajoWhite3",
    145 => GRAY69 "Gray69",
    146 => LIGHT_STEEL_BLUE3 "LightSteelBlue3",
    147 => LIGHT_STEEL_BLUE "LightSteelBlue",
    148 => YELLOW3_A "Yellow3_A",
    149 => DARK_OLIVE_GREEN3 "DarkOliveGreen3",
    150 => DARK_SEA_GREEN3_B "DarkSeaGreen3_B",
    151 => DARK_SEA_GREEN2_A "DarkSeaGreen2_A",
    152 => LIGHT_CYAN3 "LightCyan3",
    153 => LIGHT_SKY_BLUE1 "LightSkyBlue1",
    154 => GREEN_YELLOW "GreenYellow",
    155 => DARK_OLIVE_GREEN2 "DarkOliveGreen2",
    156 => PALE_GREEN1_B "PaleGreen1_B",
    157 => DARK_SEA_GREEN2_B "DarkSeaGreen2_B",
    158 => DARK_SEA_GREEN1_A "DarkSeaGreen1_A",
    159 => PALE_TURQUOISE1 "PaleTurquoise1",
    160 => RED3_B "Red3_B",
    161 => DEEP_PINK3_A "DeepPink3_A",
    162 => DEEP_PINK3_B "DeepPink3_B",
    163 => MAGENTA3_B "Magenta3_B",
    164 => MAGENTA3_C "Magenta3_C",
    165 => MAGENTA2_A "Magenta2_A",
    166 => DARK_ORANGE3_B "DarkOrange3_B",
    167 => INDIAN_RED_B "IndianRed_B",
    168 => HOT_PINK3_B "HotPink3_B",
    169 => HOT_PINK2 "HotPink2",
    170 => ORCHID "Orchid",
    171 => MEDIUM_ORCHID1_A "MediumOrchid1_A",
    172 => ORANGE3 "Orange3",
    173 => LIGHT_SALMON3_B "LightSalmon3_B",
    174 => LIGHT_PINK3 "LightPink3",
    175 => PINK3 "Pink3",
    176 => PLUM3 "Plum3",
    177 => VIOLET "Violet",
    178 => GOLD3_B "Gold3_B",
    179 => LIGHT_GOLDENROD3 "LightGoldenrod3",
    180 => TAN "Tan",
    181 => MISTY_ROSE3 "MistyRose3",
    182 => THISTLE3 "Thistle3",
    183 => PLUM2 "Plum2",
    184 => YELLOW3_B "Yellow3_B",
    185 => KHAKI3 "Khaki3",
    186 => LIGHT_GOLDENROD2 "LightGoldenrod2",
    187 => LIGHT_YELLOW3 "LightYellow3",
    188 => GRAY84 "Gray84",
    189 => LIGHT_STEEL_BLUE1 "LightSteelBlue1",
    190 => YELLOW2 "Yellow2",
    191 => DARK_OLIVE_GREEN1_A "DarkOliveGreen1_A",
    192 => DARK_OLIVE_GREEN1_B "DarkOliveGreen1_B",
    193 => DARK_SEA_GREEN1_B "DarkSeaGreen1_B",
    194 => HONEYDEW2 "Honeydew2",
    195 => LIGHT_CYAN1 "LightCyan1",
    196 => RED1 "Red1",
    197 => DEEP_PINK2 "DeepPink2",
    198 => DEEP_PINK1_A "DeepPink1_A",
    199 => DEEP_PINK1_B "DeepPink1_B",
    200 => MAGENTA2_B "Magenta2_B",
    201 => MAGENTA1 "Magenta1",
    202 => ORANGE_RED1 "OrangeRed1",
    203 => INDIAN_RED1_A "IndianRed1_A",
    204 => INDIAN_RED1_B "IndianRed1_B",
    205 => HOT_PINK_A "HotPink_A",
    206 => HOT_PINK_B "HotPink_B",
    207 => MEDIUM_ORCHID1_B "MediumOrchid1_B",
    208 => DARK_ORANGE "DarkOrange",
    209 => SALMON1 "Salmon1",
    210 => LIGHT_CORAL "LightCoral",
    211 => PALE_VIOLET_RED1 "PaleVioletRed1",
    212 => ORCHID2 "Orchid2",
    213 => ORCHID1 "Orchid1",
    214 => ORANGE1 "Orange1",
    215 => SANDY_BROWN "SandyBrown",
    216 => LIGHT_SALMON1 "LightSalmon1",
    217 => LIGHT_PINK1 "LightPink1",
    218 => PINK1 "Pink1",
    219 => PLUM1 "Plum1",
    220 => GOLD1 "Gold1",
    221 => LIGHT_GOLDENROD2_A "LightGoldenrod2_A",
    222 => LIGHT_GOLDENROD2_B "LightGoldenrod2_B",
    223 => NAVAJO_WHITE1 "NavajoWhite1",
    224 => MISTY_ROSE1 "MistyRose1",
    225 => THISTLE1 "Thistle1",
    226 => YELLOW1 "Yellow1",
    227 => LIGHT_GOLDENROD1 "LightGoldenrod1",
    228 => KHAKI1 "Khaki1",
    229 => WHEAT1 "Wheat1",
    230 => CORNSILK1 "Cornsilk1",
    231 => GRAY100 "Gray100",
    232 => GRAY3 "Gray3",
    233 => GRAY7 "Gray7",
    234 => GRAY11 "Gray11",
    235 => GRAY15 "Gray15",
    236 => GRAY19 "Gray19",
    237 => GRAY23 "Gray23",
    238 => GRAY27 "Gray27",
    239 => GRAY30 "Gray30",
    240 => GRAY35 "Gray35",
    241 => GRAY39 "Gray39",
    242 => GRAY42 "Gray42",
    243 => GRAY46 "Gray46",
    244 => GRAY50 "Gray50",
    245 => GRAY54 "Gray54",
    246 => GRAY58 "Gray58",
    247 => GRAY62 "Gray62",
    248 => GRAY66 "Gray66",
    249 => GRAY70 "Gray70",
    250 => GRAY74 "Gray74",
    251 => GRAY78 "Gray78",
    252 => GRAY82 "Gray82",
    253 => GRAY85 "Gray85",
    254 => GRAY89 "Gray89",
    255 => GRAY93 "Gray93",
}
