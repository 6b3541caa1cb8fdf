/// Identifiers for all supported FromSoftware releases.
///
/// This enum centralizes game identity — short names, display names, and the
/// install-directory segment used to pick a game root out of a set of
/// candidate paths — in one place, replacing ad-hoc string matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Game {
    DemonsSouls,
    DarkSoulsPtde,
    DarkSoulsRemastered,
    DarkSouls2,
    DarkSouls2Sotfs,
    Bloodborne,
    DarkSouls3,
    Sekiro,
    EldenRing,
    ArmoredCore6,
    Nightreign,
}

/// All game variants in release order.
const ALL_GAMES: &[Game] = &[
    Game::DemonsSouls,
    Game::DarkSoulsPtde,
    Game::DarkSoulsRemastered,
    Game::DarkSouls2,
    Game::DarkSouls2Sotfs,
    Game::Bloodborne,
    Game::DarkSouls3,
    Game::Sekiro,
    Game::EldenRing,
    Game::ArmoredCore6,
    Game::Nightreign,
];

impl Game {
    /// Canonical short name used for CLI arguments and identifiers.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::DemonsSouls => "des",
            Self::DarkSoulsPtde => "ds1",
            Self::DarkSoulsRemastered => "ds1r",
            Self::DarkSouls2 => "ds2",
            Self::DarkSouls2Sotfs => "ds2s",
            Self::Bloodborne => "bb",
            Self::DarkSouls3 => "ds3",
            Self::Sekiro => "sekiro",
            Self::EldenRing => "er",
            Self::ArmoredCore6 => "ac6",
            Self::Nightreign => "nr",
        }
    }

    /// Identifier used in catalog output. Matches the variant name.
    pub fn ident(&self) -> &'static str {
        match self {
            Self::DemonsSouls => "DemonsSouls",
            Self::DarkSoulsPtde => "DarkSoulsPtde",
            Self::DarkSoulsRemastered => "DarkSoulsRemastered",
            Self::DarkSouls2 => "DarkSouls2",
            Self::DarkSouls2Sotfs => "DarkSouls2Sotfs",
            Self::Bloodborne => "Bloodborne",
            Self::DarkSouls3 => "DarkSouls3",
            Self::Sekiro => "Sekiro",
            Self::EldenRing => "EldenRing",
            Self::ArmoredCore6 => "ArmoredCore6",
            Self::Nightreign => "Nightreign",
        }
    }

    /// The install-directory segment that distinguishes this game's root.
    ///
    /// Matched case-insensitively as a whole path segment against candidate
    /// root paths, so "ELDEN RING" never claims an "ELDEN RING NIGHTREIGN"
    /// install.
    pub fn path_part(&self) -> &'static str {
        match self {
            Self::DemonsSouls => "Demons Souls",
            Self::DarkSoulsPtde => "Dark Souls Prepare to Die Edition",
            Self::DarkSoulsRemastered => "DARK SOULS REMASTERED",
            Self::DarkSouls2 => "Dark Souls II",
            Self::DarkSouls2Sotfs => "Dark Souls II Scholar of the First Sin",
            Self::Bloodborne => "Bloodborne",
            Self::DarkSouls3 => "DARK SOULS III",
            Self::Sekiro => "Sekiro",
            Self::EldenRing => "ELDEN RING",
            Self::ArmoredCore6 => "ARMORED CORE VI FIRES OF RUBICON",
            Self::Nightreign => "ELDEN RING NIGHTREIGN",
        }
    }

    /// Full display name for the game.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::DemonsSouls => "Demon's Souls",
            Self::DarkSoulsPtde => "Dark Souls: Prepare to Die Edition",
            Self::DarkSoulsRemastered => "Dark Souls Remastered",
            Self::DarkSouls2 => "Dark Souls II",
            Self::DarkSouls2Sotfs => "Dark Souls II: Scholar of the First Sin",
            Self::Bloodborne => "Bloodborne",
            Self::DarkSouls3 => "Dark Souls III",
            Self::Sekiro => "Sekiro: Shadows Die Twice",
            Self::EldenRing => "Elden Ring",
            Self::ArmoredCore6 => "Armored Core VI: Fires of Rubicon",
            Self::Nightreign => "Elden Ring Nightreign",
        }
    }

    /// All accepted names for this game (case-insensitive matching).
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::DemonsSouls => &["des", "demonssouls"],
            Self::DarkSoulsPtde => &["ds1", "ptde", "darksouls"],
            Self::DarkSoulsRemastered => &["ds1r", "dsr", "remastered"],
            Self::DarkSouls2 => &["ds2", "darksouls2"],
            Self::DarkSouls2Sotfs => &["ds2s", "sotfs"],
            Self::Bloodborne => &["bb", "bloodborne"],
            Self::DarkSouls3 => &["ds3", "darksouls3"],
            Self::Sekiro => &["sekiro"],
            Self::EldenRing => &["er", "eldenring"],
            Self::ArmoredCore6 => &["ac6", "armoredcore6"],
            Self::Nightreign => &["nr", "nightreign"],
        }
    }

    /// All 11 game variants.
    pub fn all() -> &'static [Game] {
        ALL_GAMES
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.ident())
    }
}

/// Error returned when a string cannot be parsed into a `Game`.
#[derive(Debug, Clone)]
pub struct GameParseError(pub String);

impl std::fmt::Display for GameParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown game: '{}'", self.0)
    }
}

impl std::error::Error for GameParseError {}

impl std::str::FromStr for Game {
    type Err = GameParseError;

    /// Parse a game from any recognized name (case-insensitive).
    ///
    /// Matches against `short_name()`, `ident()`, and all `aliases()`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        for &game in ALL_GAMES {
            if game.short_name() == lower || game.ident().to_lowercase() == lower {
                return Ok(game);
            }
            for alias in game.aliases() {
                if *alias == lower {
                    return Ok(game);
                }
            }
        }
        Err(GameParseError(s.to_string()))
    }
}
