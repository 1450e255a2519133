//! The fixed diceware word list.
//!
//! 1296 sorted, unique, lowercase words (a four-dice list). The list is
//! part of the password-compatibility contract: reordering, editing or
//! extending it silently changes every diceware-derived password, so it
//! is frozen and locked by the derivation vectors in the tests.

/// Number of entries in [`WORDLIST`].
pub const WORDLIST_LEN: usize = 1296;

pub static WORDLIST: [&str; WORDLIST_LEN] = [
    "able", "acorn", "actor", "adobe", "agent", "aging", "ahead", "aim", "alarm", "alert",
    "alias", "alike", "alley", "ally", "aloe", "amber", "amend", "ample", "angel", "angle",
    "annex", "answer", "apart", "apron", "arbor", "arena", "arm", "aroma", "arrow", "aside",
    "aspen", "atlas", "attic", "auger", "aunt", "autumn", "awake", "away", "axis", "babble",
    "bagel", "balance", "ballad", "band", "bank", "barley", "basalt", "basin", "bass", "bath",
    "battle", "beacon", "beak", "bean", "beast", "beaver", "bed", "beef", "began", "being",
    "below", "bend", "best", "bevel", "bid", "bind", "bird", "bit", "blade", "blank",
    "blaze", "blend", "blink", "blitz", "bloom", "blouse", "blunt", "blush", "boast", "bogus",
    "bold", "bone", "book", "booth", "borrow", "botany", "bought", "bound", "bowl", "brace",
    "brake", "brand", "brave", "break", "brew", "bridge", "bright", "bring", "brisk", "broil",
    "bronze", "broth", "brown", "brush", "buckle", "budge", "bugle", "bulb", "bull", "bunch",
    "bunny", "burly", "burst", "bush", "busy", "button", "buzz", "cable", "cactus", "cake",
    "call", "camel", "camp", "canary", "candy", "canoe", "canyon", "car", "card", "carp",
    "carrot", "cart", "case", "cast", "cat", "cater", "cattle", "cease", "ceiling", "cell",
    "census", "chain", "chalk", "chance", "chaos", "chapter", "chart", "cheap", "cheek", "cheese",
    "cherry", "chew", "child", "chime", "chirp", "choice", "choke", "chord", "chow", "chunk",
    "chute", "cinch", "cirrus", "city", "civil", "clam", "clan", "clash", "class", "clean",
    "cleat", "clerk", "climb", "clinic", "cloak", "clone", "cloth", "clove", "club", "clump",
    "clutch", "coal", "coat", "cocoa", "code", "coin", "cold", "color", "column", "combo",
    "comma", "compass", "condor", "confetti", "cook", "copper", "coral", "cork", "corner", "cot",
    "couch", "count", "couple", "course", "cousin", "cow", "crab", "cramp", "crate", "crawl",
    "crazy", "credit", "crest", "crib", "crime", "crock", "cross", "crow", "crown", "crust",
    "cry", "cub", "cuff", "cup", "curd", "curl", "cusp", "cut", "cycle", "dab",
    "dairy", "dance", "dapper", "dart", "data", "dawn", "deal", "dear", "debut", "decal",
    "decoy", "deep", "delay", "demand", "dent", "derby", "desk", "device", "dial", "dice",
    "dig", "dime", "diner", "dinner", "dip", "dish", "ditch", "dive", "docket", "doe",
    "dole", "dollar", "domino", "donor", "door", "double", "dove", "dozen", "draft", "drama",
    "drape", "dread", "dress", "drill", "drip", "droll", "droop", "drove", "drum", "dual",
    "dude", "duet", "dull", "duo", "dust", "dwarf", "dye", "eagle", "earl", "earn",
    "east", "eaten", "echo", "edge", "eel", "egg", "either", "elder", "elf", "elm",
    "elude", "emblem", "emit", "enact", "endure", "engine", "enrich", "entry", "equal", "erase",
    "erupt", "etch", "even", "evict", "exact", "excel", "expand", "eye", "face", "faint",
    "faith", "fall", "fame", "fancy", "far", "fast", "favor", "fax", "feast", "fed",
    "feel", "felt", "fence", "ferry", "fetch", "few", "fickle", "fifth", "fight", "fill",
    "filter", "finch", "fine", "fir", "fish", "fit", "fix", "flag", "flame", "flap",
    "flash", "flavor", "fled", "fleet", "flew", "fling", "flip", "float", "flood", "floss",
    "flow", "fluff", "flung", "flute", "fly", "focal", "fog", "fold", "folk", "food",
    "foot", "force", "forge", "fort", "fossil", "fought", "fowl", "foyer", "frame", "free",
    "fridge", "frill", "frisky", "from", "froth", "froze", "fry", "full", "fun", "funny",
    "furrow", "fusion", "future", "gadget", "gale", "gallon", "game", "gap", "gargle", "gas",
    "gate", "gave", "gaze", "gecko", "gene", "genuine", "geyser", "giant", "gig", "ginger",
    "give", "glade", "glare", "glaze", "glee", "glide", "gloat", "gloom", "gloss", "glue",
    "goat", "golf", "gong", "gopher", "gotten", "gown", "grace", "grand", "grape", "grasp",
    "grave", "gray", "great", "greet", "grief", "grim", "grind", "groan", "groove", "ground",
    "grout", "growl", "grub", "grunt", "guest", "guild", "gull", "gum", "gut", "gym",
    "hack", "hail", "hall", "ham", "hand", "happy", "hard", "harm", "harsh", "hash",
    "hat", "haul", "hawk", "hazard", "hazel", "heal", "heart", "heave", "heel", "held",
    "helm", "hemp", "herb", "hero", "hid", "high", "hill", "hinge", "hip", "hire",
    "hobby", "hoe", "hold", "hollow", "honey", "hood", "hook", "hope", "horse", "host",
    "hound", "hover", "howl", "hue", "hull", "humor", "hunch", "hunt", "hurry", "hush",
    "hybrid", "hymn", "icon", "idle", "image", "import", "index", "infant", "inlay", "input",
    "intact", "iron", "issue", "item", "ivy", "jacket", "jam", "jaunt", "jazz", "jelly",
    "jet", "jiffy", "jingle", "join", "joke", "jolt", "jot", "judge", "juice", "jumbo",
    "junior", "jury", "jut", "kale", "keel", "keep", "kelp", "kept", "key", "kick",
    "kidney", "kind", "kiosk", "kitten", "knack", "knelt", "knife", "knob", "knot", "koala",
    "labor", "lack", "lady", "laid", "lake", "lance", "lane", "lapel", "larch", "lark",
    "lash", "last", "late", "laugh", "lava", "lawn", "lead", "leak", "leap", "lease",
    "led", "leech", "leg", "legend", "lend", "lens", "lessen", "levy", "lid", "lift",
    "lilac", "limb", "limit", "linen", "lint", "lip", "list", "liter", "lizard", "load",
    "loam", "lobe", "lodge", "log", "loin", "long", "loom", "loose", "loss", "lotion",
    "loud", "love", "lucid", "lull", "lump", "lunch", "lurk", "lute", "lyric", "made",
    "magnet", "mail", "maize", "mango", "mantle", "map", "mare", "marina", "market", "marsh",
    "mason", "match", "math", "maze", "meadow", "mean", "meat", "medic", "meet", "melody",
    "melt", "mend", "menu", "merge", "mesh", "met", "meter", "metro", "might", "mile",
    "mill", "mind", "mingle", "mink", "minus", "mirth", "miss", "mite", "mob", "mock",
    "model", "moist", "mole", "moment", "month", "moon", "moral", "mosaic", "most", "motion",
    "motto", "mount", "mouse", "mower", "mud", "mug", "mull", "mural", "muse", "music",
    "mute", "myth", "nail", "nanny", "narrow", "navy", "neat", "need", "neon", "nerve",
    "net", "newt", "nibble", "niche", "night", "nine", "noble", "noise", "noodle", "norm",
    "nose", "noun", "novel", "nozzle", "nudge", "nurse", "nylon", "oar", "oat", "oboe",
    "ocean", "odor", "oil", "old", "omega", "once", "onset", "onyx", "open", "optic",
    "oral", "orbit", "order", "ostrich", "otter", "outer", "oven", "own", "ozone", "pack",
    "page", "pail", "pair", "pale", "panda", "panic", "pants", "parade", "parent", "parlor",
    "parsley", "paste", "pat", "path", "pause", "paw", "pea", "peach", "pearl", "pecan",
    "pedal", "peer", "pen", "pend", "peony", "peril", "perk", "pest", "petite", "phone",
    "piano", "picnic", "pigeon", "pile", "pilot", "pint", "pique", "pitch", "pivot", "place",
    "plain", "plane", "plant", "play", "plead", "pledge", "pliers", "plow", "plug", "plunge",
    "pocket", "poem", "point", "poke", "polish", "pollen", "pond", "poppy", "pore", "pose",
    "post", "potato", "pounce", "pour", "powder", "prance", "press", "price", "primp", "prior",
    "prize", "prompt", "prop", "proud", "prowl", "public", "puff", "pulp", "puma", "punt",
    "puppy", "purse", "putty", "python", "quail", "quake", "quartz", "queen", "quest", "quick",
    "quilt", "quirk", "quota", "race", "radar", "radish", "rage", "rain", "rake", "ramp",
    "range", "rant", "rare", "rasp", "rattle", "raven", "ray", "reach", "ready", "ream",
    "rear", "recap", "recipe", "red", "reef", "refine", "reform", "regal", "reign", "relax",
    "relic", "rely", "remix", "repair", "repel", "reset", "resort", "result", "retry", "revel",
    "revive", "rhyme", "rib", "ride", "rifle", "rig", "rim", "ring", "riot", "ripple",
    "ritual", "river", "roam", "robe", "robot", "rodeo", "role", "rook", "roost", "rope",
    "rosy", "rotor", "rough", "route", "royal", "rudder", "ruin", "rumble", "rung", "rural",
    "rust", "saddle", "safe", "sage", "sail", "salmon", "salsa", "salute", "sandal", "sap",
    "sat", "sauce", "save", "saw", "scale", "scan", "scent", "school", "scoot", "scorn",
    "scowl", "scrape", "scream", "scribe", "scroll", "sculpt", "seam", "season", "second", "sect",
    "seed", "seem", "seesaw", "send", "sense", "sepia", "serve", "seven", "shack", "shadow",
    "shake", "shape", "shark", "shave", "shear", "sheen", "sheet", "shell", "shin", "ship",
    "shoal", "shone", "shoot", "shore", "shot", "show", "shred", "shrub", "shun", "shy",
    "side", "sift", "sigma", "silk", "silo", "simple", "sink", "sir", "sister", "six",
    "skate", "skew", "skid", "skim", "skip", "skit", "slab", "slain", "slang", "slap",
    "slaw", "sleek", "sleet", "slice", "slim", "slip", "slogan", "sloth", "slump", "slush",
    "small", "smell", "smile", "smock", "smooth", "snack", "snail", "snap", "sneak", "sniff",
    "snore", "snow", "snug", "soap", "sob", "sock", "sod", "sofa", "soggy", "sold",
    "solid", "solve", "sonic", "soot", "sorrow", "sought", "soup", "south", "soy", "span",
    "spark", "spasm", "spawn", "speck", "speed", "spend", "spice", "spill", "spire", "spline",
    "spoil", "sponge", "spoon", "sport", "sprain", "spree", "spring", "spud", "spur", "squad",
    "squash", "squint", "staff", "staid", "stake", "stalk", "stamp", "stand", "starch", "start",
    "state", "statue", "steak", "steam", "steel", "stem", "step", "stern", "stick", "stilt",
    "stint", "stock", "stole", "stone", "stool", "stop", "storm", "stout", "stow", "straw",
    "stream", "stress", "stride", "string", "strive", "stroke", "strong", "stud", "study", "stump",
    "style", "sub", "such", "sue", "suit", "sum", "summer", "sung", "super", "surge",
    "swam", "swap", "sway", "sweat", "sweet", "swift", "swine", "swirl", "swoop", "swore",
    "swung", "system", "taco", "tad", "tail", "talent", "tall", "talon", "tamper", "tango",
    "tap", "tapir", "target", "tarp", "task", "tattle", "taupe", "tawny", "taxi", "teach",
    "team", "tease", "teem", "tempt", "tenant", "tenor", "tent", "term", "test", "than",
    "thaw", "theft", "then", "there", "thick", "thigh", "thing", "thorn", "three", "thrift",
    "throb", "throw", "thud", "thump", "tiara", "tidy", "tiger", "tile", "time", "tinge",
    "tiny", "tirade", "titan", "toad", "today", "toga", "toil", "told", "tomato", "tone",
    "tonic", "tool", "top", "torch", "tort", "total", "touch", "tour", "towel", "town",
    "trace", "tract", "trail", "tramp", "trawl", "tread", "treble", "trench", "trial", "trick",
    "trio", "trite", "troll", "trot", "truce", "trudge", "truly", "truss", "try", "tube",
    "tuft", "tumble", "tundra", "tunic", "turban", "turnip", "tutor", "tux", "tweet", "twig",
    "twine", "twist", "type", "ugly", "umpire", "uncle", "unfit", "union", "unit", "untie",
    "unwrap", "update", "upper", "urge", "use", "using", "vacant", "vain", "valid", "valor",
    "van", "vapor", "vat", "veer", "veil", "velvet", "veneer", "verb", "verse", "vest",
    "veto", "video", "vigor", "vine", "violet", "virus", "vise", "visor", "vivid", "vogue",
    "void", "volume", "vote", "vow", "voyage", "wafer", "wage", "waist", "wake", "wall",
    "waltz", "want", "warp", "wary", "wash", "waste", "watt", "wax", "weak", "weave",
    "wedge", "week", "weigh", "welt", "wept", "west", "wharf", "wheat", "when", "which",
    "whim", "whirl", "white", "whoop", "wick", "widen", "width", "wild", "wilt", "wince",
    "wind", "winner", "wipe", "wise", "wit", "with", "wizard", "wolf", "won", "wood",
    "word", "world", "worn", "worse", "worth", "wrap", "wreath", "wren", "wrest", "write",
    "wrote", "yacht", "yarn", "year", "yell", "yelp", "yield", "yoga", "yolk", "your",
    "zeal", "zen", "zero", "zigzag", "zing", "zone",
];
