//! Closed, string-tagged enumerations used on the wire.
//!
//! Every enum decodes only from its listed raw values. Anything else is a
//! decode error of the form `Invalid {kind} value: '{raw}'`.

/// A raw string that is not a member of a closed enumeration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid {kind} value: '{raw}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub raw: String,
}

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident ($kind:literal) {
            $($(#[$vmeta:meta])* $variant:ident => $raw:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl $name {
            /// Every member, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// The wire representation.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $raw,)+
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::models::enums::UnknownVariant;

            fn from_str(raw: &str) -> ::std::result::Result<Self, Self::Err> {
                match raw {
                    $($raw => ::std::result::Result::Ok($name::$variant),)+
                    _ => ::std::result::Result::Err($crate::models::enums::UnknownVariant {
                        kind: $kind,
                        raw: raw.to_string(),
                    }),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> ::std::result::Result<Self, D::Error> {
                let raw = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                raw.parse().map_err(<D::Error as ::serde::de::Error>::custom)
            }
        }
    };
}

pub(crate) use wire_enum;

// ---------------------------------------------------------------------------
// Gameplay
// ---------------------------------------------------------------------------

wire_enum! {
    /// A colour of mana, as used in `colors`, `color_identity` and `color_indicator`.
    pub enum Color ("color") {
        White => "W",
        Blue => "U",
        Black => "B",
        Red => "R",
        Green => "G",
    }
}

wire_enum! {
    /// Legality of a card in one play format.
    pub enum Legality ("legality") {
        Legal => "legal",
        NotLegal => "not_legal",
        Restricted => "restricted",
        Banned => "banned",
    }
}

wire_enum! {
    /// The physical arrangement of a card.
    pub enum Layout ("layout") {
        Normal => "normal",
        Split => "split",
        Flip => "flip",
        Transform => "transform",
        ModalDfc => "modal_dfc",
        Meld => "meld",
        Leveler => "leveler",
        Class => "class",
        Case => "case",
        Saga => "saga",
        Adventure => "adventure",
        Mutate => "mutate",
        Prototype => "prototype",
        Battle => "battle",
        Planar => "planar",
        Scheme => "scheme",
        Vanguard => "vanguard",
        Token => "token",
        DoubleFacedToken => "double_faced_token",
        Emblem => "emblem",
        Augment => "augment",
        Host => "host",
        ArtSeries => "art_series",
        ReversibleCard => "reversible_card",
    }
}

impl Layout {
    /// Whether cards with this layout keep their imagery on each face rather
    /// than on the card itself.
    pub fn has_face_imagery(&self) -> bool {
        matches!(
            self,
            Layout::Transform
                | Layout::ModalDfc
                | Layout::DoubleFacedToken
                | Layout::ReversibleCard
                | Layout::ArtSeries
        )
    }
}

wire_enum! {
    /// How one card relates to another in `all_parts`.
    pub enum RelatedType ("related type") {
        Token => "token",
        MeldPart => "meld_part",
        MeldResult => "meld_result",
        ComboPiece => "combo_piece",
    }
}

// ---------------------------------------------------------------------------
// Print
// ---------------------------------------------------------------------------

wire_enum! {
    pub enum Rarity ("rarity") {
        Common => "common",
        Uncommon => "uncommon",
        Rare => "rare",
        Mythic => "mythic",
        Special => "special",
        Bonus => "bonus",
    }
}

wire_enum! {
    /// The kind of product a set was released as.
    pub enum SetType ("set type") {
        Core => "core",
        Expansion => "expansion",
        Masters => "masters",
        Eternal => "eternal",
        Alchemy => "alchemy",
        Masterpiece => "masterpiece",
        Arsenal => "arsenal",
        FromTheVault => "from_the_vault",
        Spellbook => "spellbook",
        PremiumDeck => "premium_deck",
        DuelDeck => "duel_deck",
        DraftInnovation => "draft_innovation",
        TreasureChest => "treasure_chest",
        Commander => "commander",
        Planechase => "planechase",
        Archenemy => "archenemy",
        Vanguard => "vanguard",
        Funny => "funny",
        Starter => "starter",
        Box => "box",
        Promo => "promo",
        Token => "token",
        Memorabilia => "memorabilia",
        Minigame => "minigame",
    }
}

wire_enum! {
    /// The available renderings of a card image.
    pub enum ImageType ("image type") {
        Png => "png",
        BorderCrop => "border_crop",
        ArtCrop => "art_crop",
        Large => "large",
        Normal => "normal",
        Small => "small",
    }
}

wire_enum! {
    /// The frame edition a card was printed with.
    pub enum FrameType ("frame type") {
        NinetyThree => "1993",
        NinetySeven => "1997",
        OhThree => "2003",
        Fifteen => "2015",
        Future => "future",
    }
}

wire_enum! {
    pub enum FrameEffect ("frame effect") {
        Legendary => "legendary",
        Miracle => "miracle",
        Nyxtouched => "nyxtouched",
        Enchantment => "enchantment",
        Draft => "draft",
        Devoid => "devoid",
        Tombstone => "tombstone",
        Colorshifted => "colorshifted",
        Inverted => "inverted",
        SunMoonDfc => "sunmoondfc",
        CompassLandDfc => "compasslanddfc",
        OriginPwDfc => "originpwdfc",
        MoonEldraziDfc => "mooneldrazidfc",
        MoonReverseMoonDfc => "moonreversemoondfc",
        WaxingAndWaningMoonDfc => "waxingandwaningmoondfc",
        ConvertDfc => "convertdfc",
        FanDfc => "fandfc",
        UpsideDownDfc => "upsidedowndfc",
        Showcase => "showcase",
        ExtendedArt => "extendedart",
        Companion => "companion",
        Etched => "etched",
        Snow => "snow",
        Lesson => "lesson",
        ShatteredGlass => "shatteredglass",
        Spree => "spree",
        FullArt => "fullart",
    }
}
