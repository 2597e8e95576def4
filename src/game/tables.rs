//! # Static Item Tables
//!
//! Read-only item data: codes, classifications, add-on requirements, default
//! multiplicities and junk weights, plus the act identifiers the game client
//! uses to address regions.
//!
//! Tables are slices rather than maps so that iteration order is fixed, which the
//! item pool relies on for reproducible output.

use crate::game::Classification::{Filler, Progression, Trap, Useful};
use crate::game::HatDlc::{Dlc1, Dlc2};
use crate::game::{Classification, HatDlc};
use crate::{HatSlotError, HatSlotResult};

/// Static description of one item name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemData {
    /// Unique numeric item id
    pub code: u64,
    /// Native classification of every copy
    pub classification: Classification,
    /// Add-on the item belongs to, if any
    pub dlc: Option<HatDlc>,
}

const fn base(code: u64, classification: Classification) -> ItemData {
    ItemData {
        code,
        classification,
        dlc: None,
    }
}

const fn dlc(code: u64, classification: Classification, content: HatDlc) -> ItemData {
    ItemData {
        code,
        classification,
        dlc: Some(content),
    }
}

/// Name of the yarn currency item.
pub const YARN: &str = "Yarn";

/// Every item except time pieces.
pub const ITEM_TABLE: &[(&str, ItemData)] = &[
    (YARN, base(300001, Progression)),
    ("Umbrella", base(300002, Progression)),
    ("Progressive Painting Unlock", base(300003, Progression)),
    ("Hookshot Badge", base(300004, Progression)),
    ("Camera Badge", base(300005, Progression)),
    ("Relic (Burger Patty)", base(300006, Progression)),
    ("Relic (Burger Cushion)", base(300007, Progression)),
    ("Relic (Mountain Set)", base(300008, Progression)),
    ("Relic (Train)", base(300009, Progression)),
    ("Relic (UFO)", base(300010, Progression)),
    ("Relic (Toilet)", base(300011, Progression)),
    ("Relic (Necklace Bust)", base(300012, Progression)),
    ("Relic (Necklace)", base(300013, Progression)),
    ("Relic (Crayon Box)", base(300014, Progression)),
    ("Relic (Red Crayon)", base(300015, Progression)),
    ("Relic (Blue Crayon)", base(300016, Progression)),
    ("Relic (Green Crayon)", base(300017, Progression)),
    ("Relic (Cake Stand)", dlc(300018, Progression, Dlc1)),
    ("Relic (Cake)", dlc(300019, Progression, Dlc1)),
    ("Relic (Cake Slice)", dlc(300020, Progression, Dlc1)),
    ("Relic (Shortcake)", dlc(300021, Progression, Dlc1)),
    ("Metro Ticket - Yellow", dlc(300022, Progression, Dlc2)),
    ("Metro Ticket - Green", dlc(300023, Progression, Dlc2)),
    ("Metro Ticket - Blue", dlc(300024, Progression, Dlc2)),
    ("Metro Ticket - Pink", dlc(300025, Progression, Dlc2)),
    ("No Bonk Badge", base(300026, Useful)),
    ("Compass Badge", base(300027, Useful)),
    ("Scooter Badge", base(300028, Useful)),
    ("One-Hit Hero Badge", base(300029, Useful)),
    ("Projectile Badge", base(300030, Useful)),
    ("Fast Hatter Badge", base(300031, Useful)),
    ("Hover Badge", base(300032, Useful)),
    ("Mumble Badge", base(300033, Useful)),
    ("Item Magnet Badge", base(300034, Useful)),
    ("Badge Pin", base(300035, Useful)),
    ("Rift Token", base(300036, Filler)),
    ("Random Cosmetic", base(300037, Filler)),
    ("Pons", base(300038, Filler)),
    ("Baby Trap", base(300039, Trap)),
    ("Laser Trap", base(300040, Trap)),
    ("Parade Trap", base(300041, Trap)),
];

/// One time piece per act and time rift.
pub const TIME_PIECES: &[(&str, ItemData)] = &[
    ("Time Piece (Welcome to Mafia Town)", base(300100, Progression)),
    ("Time Piece (Barrel Battle)", base(300101, Progression)),
    ("Time Piece (She Came from Outer Space)", base(300102, Progression)),
    ("Time Piece (Down with the Mafia!)", base(300103, Progression)),
    ("Time Piece (Cheating the Race)", base(300104, Progression)),
    ("Time Piece (Heating Up Mafia Town)", base(300105, Progression)),
    ("Time Piece (The Golden Vault)", base(300106, Progression)),
    ("Time Piece (Dead Bird Studio)", base(300107, Progression)),
    ("Time Piece (Murder on the Owl Express)", base(300108, Progression)),
    ("Time Piece (Picture Perfect)", base(300109, Progression)),
    ("Time Piece (Train Rush)", base(300110, Progression)),
    ("Time Piece (The Big Parade)", base(300111, Progression)),
    ("Time Piece (Award Ceremony)", base(300112, Progression)),
    ("Time Piece (Dead Bird Studio Basement)", base(300113, Progression)),
    ("Time Piece (Contractual Obligations)", base(300114, Progression)),
    ("Time Piece (The Subcon Well)", base(300115, Progression)),
    ("Time Piece (Toilet of Doom)", base(300116, Progression)),
    ("Time Piece (Queen Vanessa's Manor)", base(300117, Progression)),
    ("Time Piece (Mail Delivery Service)", base(300118, Progression)),
    ("Time Piece (Your Contract has Expired)", base(300119, Progression)),
    ("Time Piece (The Birdhouse)", base(300120, Progression)),
    ("Time Piece (The Lava Cake)", base(300121, Progression)),
    ("Time Piece (The Twilight Bell)", base(300122, Progression)),
    ("Time Piece (The Windmill)", base(300123, Progression)),
    ("Time Piece (The Illness has Spread)", base(300124, Progression)),
    ("Time Piece (Time Rift - Gallery)", base(300125, Progression)),
    ("Time Piece (Time Rift - The Lab)", base(300126, Progression)),
    ("Time Piece (Time Rift - Sewers)", base(300127, Progression)),
    ("Time Piece (Time Rift - Bazaar)", base(300128, Progression)),
    ("Time Piece (Time Rift - Mafia of Cooks)", base(300129, Progression)),
    ("Time Piece (Time Rift - The Owl Express)", base(300130, Progression)),
    ("Time Piece (Time Rift - The Moon)", base(300131, Progression)),
    ("Time Piece (Time Rift - Dead Bird Studio)", base(300132, Progression)),
    ("Time Piece (Time Rift - Pipe)", base(300133, Progression)),
    ("Time Piece (Time Rift - Village)", base(300134, Progression)),
    ("Time Piece (Time Rift - Sleepy Subcon)", base(300135, Progression)),
    ("Time Piece (Time Rift - Curly Tail Trail)", base(300136, Progression)),
    ("Time Piece (Time Rift - The Twilight Bell)", base(300137, Progression)),
    ("Time Piece (Time Rift - Alpine Skyline)", base(300138, Progression)),
    ("Time Piece (The Finale)", base(300139, Progression)),
    ("Time Piece (Bon Voyage!)", dlc(300140, Progression, Dlc1)),
    ("Time Piece (Ship Shape)", dlc(300141, Progression, Dlc1)),
    ("Time Piece (Rock the Boat)", dlc(300142, Progression, Dlc1)),
    ("Time Piece (Time Rift - Balcony)", dlc(300143, Progression, Dlc1)),
    ("Time Piece (Time Rift - Deep Sea)", dlc(300144, Progression, Dlc1)),
    ("Time Piece (Yellow Overpass Station)", dlc(300145, Progression, Dlc2)),
    ("Time Piece (Green Clean Station)", dlc(300146, Progression, Dlc2)),
    ("Time Piece (Bluefin Tunnel)", dlc(300147, Progression, Dlc2)),
    ("Time Piece (Pink Paw Station)", dlc(300148, Progression, Dlc2)),
    ("Time Piece (Yellow Overpass Manhole)", dlc(300149, Progression, Dlc2)),
    ("Time Piece (Green Clean Manhole)", dlc(300150, Progression, Dlc2)),
    ("Time Piece (Pink Paw Manhole)", dlc(300151, Progression, Dlc2)),
    ("Time Piece (Rush Hour)", dlc(300152, Progression, Dlc2)),
    ("Time Piece (Time Rift - Rumbi Factory)", dlc(300153, Progression, Dlc2)),
];

/// Copies per item when it is not listed here is 1.
const ITEM_FREQUENCIES: &[(&str, usize)] = &[
    ("Progressive Painting Unlock", 3),
    ("Badge Pin", 2),
];

/// Sampling weight of every filler item.
const JUNK_WEIGHTS: &[(&str, u32)] = &[
    ("Rift Token", 50),
    ("Random Cosmetic", 35),
    ("Pons", 15),
];

/// Stable act identifiers, keyed by region name.
pub const ACT_INFO: &[(&str, &str)] = &[
    ("Welcome to Mafia Town", "chapter1_tutorial"),
    ("Barrel Battle", "chapter1_barrelboss"),
    ("She Came from Outer Space", "chapter1_cannon_repair"),
    ("Down with the Mafia!", "chapter1_boss"),
    ("Cheating the Race", "harbor_impossible_race"),
    ("Heating Up Mafia Town", "mafiatown_lava"),
    ("The Golden Vault", "mafiatown_goldenvault"),
    ("Dead Bird Studio", "DeadBirdStudio"),
    ("Murder on the Owl Express", "chapter3_murder"),
    ("Picture Perfect", "moon_camerasnap"),
    ("Train Rush", "trainwreck_selfdestruct"),
    ("The Big Parade", "moon_parade"),
    ("Award Ceremony", "award_ceremony"),
    ("Dead Bird Studio Basement", "chapter3_secret_finale"),
    ("Contractual Obligations", "subcon_village_icewall"),
    ("The Subcon Well", "subcon_cave"),
    ("Toilet of Doom", "chapter2_toiletboss"),
    ("Queen Vanessa's Manor", "vanessa_manor_attic"),
    ("Mail Delivery Service", "subcon_maildelivery"),
    ("Your Contract has Expired", "snatcher_boss"),
    ("The Birdhouse", "Alps_Birdhouse"),
    ("The Lava Cake", "Alpine_Lava"),
    ("The Twilight Bell", "Alpine_Twilight"),
    ("The Windmill", "Alps_Windmill"),
    ("The Illness has Spread", "AlpineSkyline_Finale"),
];

/// Looks up a non-time-piece item by name.
pub fn item_data(name: &str) -> Option<&'static ItemData> {
    ITEM_TABLE
        .iter()
        .find(|(entry, _)| *entry == name)
        .map(|(_, data)| data)
}

/// Looks up a time piece by name.
pub fn time_piece_data(name: &str) -> Option<&'static ItemData> {
    TIME_PIECES
        .iter()
        .find(|(entry, _)| *entry == name)
        .map(|(_, data)| data)
}

/// Resolves any item name to its static entry, time pieces first.
///
/// Returns the table's own `'static` copy of the name alongside the data.
///
/// # Examples
///
/// ```
/// use hatslot::{lookup_item, Classification};
///
/// let (name, data) = lookup_item("Umbrella").unwrap();
/// assert_eq!(name, "Umbrella");
/// assert_eq!(data.classification, Classification::Progression);
/// assert!(lookup_item("Golden Spatula").is_err());
/// ```
pub fn lookup_item(name: &str) -> HatSlotResult<(&'static str, &'static ItemData)> {
    TIME_PIECES
        .iter()
        .chain(ITEM_TABLE.iter())
        .find(|(entry, _)| *entry == name)
        .map(|(entry, data)| (*entry, data))
        .ok_or_else(|| HatSlotError::UnknownItem(name.to_string()))
}

/// Default number of copies placed for an item.
pub fn item_frequency(name: &str) -> usize {
    ITEM_FREQUENCIES
        .iter()
        .find(|(entry, _)| *entry == name)
        .map_or(1, |(_, count)| *count)
}

/// Static sampling weight of a filler item, if it has one.
pub fn junk_weight(name: &str) -> Option<u32> {
    JUNK_WEIGHTS
        .iter()
        .find(|(entry, _)| *entry == name)
        .map(|(_, weight)| *weight)
}

/// Stable act identifier of a region, if the region is an act.
pub fn act_info(region: &str) -> Option<&'static str> {
    ACT_INFO
        .iter()
        .find(|(entry, _)| *entry == region)
        .map(|(_, act)| *act)
}
