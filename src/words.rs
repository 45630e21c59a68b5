pub const SENO_WORDS: &[&str] = &[
    "apple",
    "river bank",
    "thunderstorm",
    "paper plane",
    "lighthouse",
    "sleeping bag",
    "volcano",
    "traffic light",
    "butterfly",
    "hot air balloon",
    "compass",
    "rainbow",
    "fire station",
    "snowman",
    "ice cream truck",
    "telescope",
    "bicycle",
    "washing machine",
    "pineapple",
    "roller coaster",
    "umbrella",
    "kangaroo",
    "birthday cake",
    "windmill",
    "treasure map",
];

pub const ZENITH_WORDS: &[&str] = &[
    "horizon",
    "solar eclipse",
    "constellation",
    "northern lights",
    "meteor shower",
    "gravity",
    "black hole",
    "astronaut",
    "space station",
    "orbit",
    "shooting star",
    "galaxy",
    "red giant",
    "comet tail",
    "crescent moon",
    "satellite dish",
    "milky way",
    "equinox",
    "launch pad",
    "asteroid belt",
];

pub struct BuiltinKeyword
{
    pub keyword: &'static str,
    pub image_path: &'static str,
    pub clues: &'static [&'static str],
}

pub const KEYWORDS: &[BuiltinKeyword] = &[
    BuiltinKeyword {
        keyword: "Paris",
        image_path: "paris.png",
        clues: &[
            "River", "Tower", "Museum", "Bread", "Fashion", "Bridge", "Capital", "Art",
            "Cafe", "Light", "Romance", "Arch",
        ],
    },
    BuiltinKeyword {
        keyword: "Volcano",
        image_path: "volcano.png",
        clues: &[
            "Lava", "Ash", "Crater", "Magma", "Eruption", "Mountain", "Heat", "Smoke",
            "Rock", "Island",
        ],
    },
    BuiltinKeyword {
        keyword: "Library",
        image_path: "library.png",
        clues: &["Books", "Quiet", "Shelves", "Reading", "Card", "Loan"],
    },
];

/// (question, answer)
pub const QUESTIONS: &[(&str, &str)] = &[
    ("What is the largest planet in the solar system?", "Jupiter"),
    ("How many continents are there?", "7"),
    ("What gas do plants absorb from the air?", "Carbon dioxide"),
    ("What is the chemical symbol for gold?", "Au"),
    ("Which ocean is the largest?", "Pacific"),
    ("How many legs does a spider have?", "8"),
    ("What is frozen water called?", "Ice"),
    ("Which planet is known as the red planet?", "Mars"),
    ("How many minutes are in an hour?", "60"),
    ("What is the capital of Japan?", "Tokyo"),
    ("Which animal is known as the king of the jungle?", "Lion"),
    ("What color do you get by mixing blue and yellow?", "Green"),
    ("How many sides does a hexagon have?", "6"),
    ("What is the boiling point of water in Celsius?", "100"),
    ("Which instrument has black and white keys?", "Piano"),
    ("What is the tallest animal?", "Giraffe"),
    ("What do bees make?", "Honey"),
    ("Which season comes after winter?", "Spring"),
    ("What is the square root of 81?", "9"),
    ("Which star is closest to Earth?", "Sun"),
];
