//! Well-known starting boards.

/// The classic 33-hole cross with the centre hole free
pub const ENGLISH: &str = "xxoooxx\nxxoooxx\nooooooo\nooo.ooo\nooooooo\nxxoooxx\nxxoooxx";
/// French 37-hole board
pub const EUROPEAN: &str = "xxoooxx\nxooooox\nooooooo\nooo.ooo\nooooooo\nxooooox\nxxoooxx";
/// Its shape is not symmetric, so parsing it fails.
pub const SUBMARINE: &str = "xx.x.xx\nxx...xx\n...o...\n.ooooo.\n.......\nxx...xx\nxx...xx";
pub const GREEK_CROSS: &str = "xx...xx\nxx.o.xx\n...o...\n.ooooo.\n...o...\nxx.o.xx\nxx...xx";
pub const SQUARE_5X5: &str = "xxxxxxx\nxooooox\nxooooox\nxooooox\nxoo.oox\nxooooox\nxxxxxxx";
pub const PYRAMID: &str = "xx...xx\nxx.o.xx\n..ooo..\n.ooooo.\nooooooo\nxx...xx\nxx...xx";
pub const DIAMOND: &str = "xx.o.xx\nxxoooxx\n.ooooo.\nooo.ooo\n.ooooo.\nxxoooxx\nxx.o.xx";

pub const PRESETS: [(&str, &str); 7] = [
    ("english", ENGLISH),
    ("european", EUROPEAN),
    ("submarine", SUBMARINE),
    ("greek-cross", GREEK_CROSS),
    ("square5x5", SQUARE_5X5),
    ("pyramid", PYRAMID),
    ("diamond", DIAMOND),
];
