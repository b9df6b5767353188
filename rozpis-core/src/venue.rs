//! Venue catalog.
//!
//! The schedule export identifies stadiums by short codes. Every code we
//! know about maps to a human-readable address (used as the event location)
//! and an estimated one-way travel time (used for the arrival reminder).

use std::fmt;
use std::str::FromStr;

use chrono::Duration;

use crate::error::{RozpisError, RozpisResult};

/// A known stadium, identified in the export by its venue code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Venue {
    Beroun,
    Kladno,
    KladnoMalaHala,
    Pribram,
    PribramMalaHala,
    Horovice,
    Kralupy,
    Cernosice,
    KobraPraha,
    Rakovnik,
    SpmArenaPraha,
    Slany,
    HvezdaPraha,
    Benesov,
    Sedlcany,
    SpartaPraha,
    VystavistePraha,
    Ricany,
    Melnik,
    Nymburk,
    VelkePopovice,
    Neratovice,
    Tremosna,
    Sobeslav,
    Klatovy,
    Domazlice,
    JindrichuvHradec,
    PlzenKosutka,
    Humpolec,
    Rokycany,
    Milevsko,
    Vlasim,
    KutnaHora,
    BenatkyNadJizerou,
    Caslav,
    Kolin,
}

impl Venue {
    /// Every venue in the catalog, in export-code order.
    pub const ALL: [Venue; 36] = [
        Venue::Beroun,
        Venue::Kladno,
        Venue::KladnoMalaHala,
        Venue::Pribram,
        Venue::PribramMalaHala,
        Venue::Horovice,
        Venue::Kralupy,
        Venue::Cernosice,
        Venue::KobraPraha,
        Venue::Rakovnik,
        Venue::SpmArenaPraha,
        Venue::Slany,
        Venue::HvezdaPraha,
        Venue::Benesov,
        Venue::Sedlcany,
        Venue::SpartaPraha,
        Venue::VystavistePraha,
        Venue::Ricany,
        Venue::Melnik,
        Venue::Nymburk,
        Venue::VelkePopovice,
        Venue::Neratovice,
        Venue::Tremosna,
        Venue::Sobeslav,
        Venue::Klatovy,
        Venue::Domazlice,
        Venue::JindrichuvHradec,
        Venue::PlzenKosutka,
        Venue::Humpolec,
        Venue::Rokycany,
        Venue::Milevsko,
        Venue::Vlasim,
        Venue::KutnaHora,
        Venue::BenatkyNadJizerou,
        Venue::Caslav,
        Venue::Kolin,
    ];

    /// Resolve a venue code from the export.
    ///
    /// Codes are matched exactly (after trimming surrounding whitespace).
    pub fn from_code(code: &str) -> RozpisResult<Self> {
        let code = code.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|venue| venue.code() == code)
            .ok_or_else(|| RozpisError::UnknownVenue(code.to_string()))
    }

    /// The code used for this venue in the schedule export.
    pub fn code(self) -> &'static str {
        match self {
            Venue::Beroun => "BE",
            Venue::Kladno => "KL",
            Venue::KladnoMalaHala => "KD",
            Venue::Pribram => "PB",
            Venue::PribramMalaHala => "MP",
            Venue::Horovice => "HC",
            Venue::Kralupy => "KR",
            Venue::Cernosice => "CE",
            Venue::KobraPraha => "K",
            Venue::Rakovnik => "RA",
            Venue::SpmArenaPraha => "RD",
            Venue::Slany => "SL",
            Venue::HvezdaPraha => "H",
            Venue::Benesov => "BN",
            Venue::Sedlcany => "SD",
            Venue::SpartaPraha => "S",
            Venue::VystavistePraha => "V",
            Venue::Ricany => "RY",
            Venue::Melnik => "ME",
            Venue::Nymburk => "NB",
            Venue::VelkePopovice => "VP",
            Venue::Neratovice => "NE",
            Venue::Tremosna => "TM",
            Venue::Sobeslav => "SB",
            Venue::Klatovy => "KT",
            Venue::Domazlice => "DO",
            Venue::JindrichuvHradec => "JH",
            Venue::PlzenKosutka => "PK",
            Venue::Humpolec => "HU",
            Venue::Rokycany => "RO",
            Venue::Milevsko => "MI",
            Venue::Vlasim => "VM",
            Venue::KutnaHora => "KH",
            Venue::BenatkyNadJizerou => "BJ",
            Venue::Caslav => "ČA",
            Venue::Kolin => "KO",
        }
    }

    /// Address shown as the event location.
    pub fn label(self) -> &'static str {
        match self {
            Venue::Beroun => "Beroun, Zimní stadion",
            Venue::Kladno => "Kladno, ČEZ STADION Kladno",
            Venue::KladnoMalaHala => "Kladno, ČEZ STADION Kladno - malá hala",
            Venue::Pribram => "Příbram, Zimní stadion",
            Venue::PribramMalaHala => "Příbram, Zimní stadion - malá hala",
            Venue::Horovice => "Hořovice, Zimní stadion",
            Venue::Kralupy => "Kralupy nad Vltavou, Městský zimní stadion",
            Venue::Cernosice => "Černošice, Zimní stadion",
            Venue::KobraPraha => "Praha - Kobra, Zimní stadion HC Kobra Praha",
            Venue::Rakovnik => "Rakovník, Zimní stadion města Rakovníka",
            Venue::SpmArenaPraha => "Praha, SPM ARENA",
            Venue::Slany => "VSH Slaný, Zimní stadion",
            Venue::HvezdaPraha => "Praha - Hvězda, Zimní stadion HC Hvězda Praha",
            Venue::Benesov => "Benešov, Zimní stadion",
            Venue::Sedlcany => "Sedlčany, Zimní stadion",
            Venue::SpartaPraha => "Praha - Holešovice, Sportovní hala Fortuna",
            Venue::VystavistePraha => "Praha - Výstaviště, Malá sportovní hala",
            Venue::Ricany => "Říčany u Prahy, Com-Sys Ice Arena",
            Venue::Melnik => "Mělník, Zimní stadion",
            Venue::Nymburk => "Nymburk, Zimní stadion",
            Venue::VelkePopovice => "Velké Popovice, Zimní stadion",
            Venue::Neratovice => "Neratovice, Buldok Arena",
            Venue::Tremosna => "Třemošná, Sport Aréna",
            Venue::Sobeslav => "Soběslav, ZS TJ Spartak Soběslav",
            Venue::Klatovy => "Klatovy, Zimní stadion města Klatov",
            Venue::Domazlice => "Domažlice, Zimní stadion",
            Venue::JindrichuvHradec => "Jindřichův Hradec, Zimní stadion",
            Venue::PlzenKosutka => "Plzeň - Košutka, ICE ARENA Plzeň",
            Venue::Humpolec => "Humpolec, Zimní stadion",
            Venue::Rokycany => "Rokycany, Zimní stadion",
            Venue::Milevsko => "Milevsko, Zimní stadion",
            Venue::Vlasim => "Vlašim, Zimní stadion",
            Venue::KutnaHora => "Kutná Hora, Zimní stadion",
            Venue::BenatkyNadJizerou => "Benátky nad Jizerou, Zimní stadion",
            Venue::Caslav => "Čáslav, Zimní stadion",
            Venue::Kolin => "Kolín, Zimní stadion",
        }
    }

    /// Estimated one-way travel time in minutes.
    pub fn travel_minutes(self) -> u32 {
        match self {
            Venue::Beroun => 15,
            Venue::Kladno | Venue::KladnoMalaHala => 45,
            Venue::Pribram | Venue::PribramMalaHala => 60,
            Venue::Horovice => 30,
            Venue::Kralupy => 75,
            Venue::Cernosice => 40,
            Venue::KobraPraha => 60,
            Venue::Rakovnik => 45,
            Venue::SpmArenaPraha => 45,
            Venue::Slany => 60,
            Venue::HvezdaPraha => 45,
            Venue::Benesov => 90,
            Venue::Sedlcany => 75,
            Venue::SpartaPraha => 60,
            Venue::VystavistePraha => 45,
            Venue::Ricany => 45,
            Venue::Melnik => 70,
            Venue::Nymburk => 75,
            Venue::VelkePopovice => 45,
            Venue::Neratovice => 60,
            Venue::Tremosna => 45,
            Venue::Sobeslav => 100,
            Venue::Klatovy => 70,
            Venue::Domazlice => 90,
            Venue::JindrichuvHradec => 120,
            Venue::PlzenKosutka => 45,
            Venue::Humpolec => 80,
            Venue::Rokycany => 30,
            Venue::Milevsko => 80,
            Venue::Vlasim => 70,
            Venue::KutnaHora => 90,
            Venue::BenatkyNadJizerou => 70,
            Venue::Caslav => 90,
            Venue::Kolin => 90,
        }
    }

    pub fn travel_duration(self) -> Duration {
        Duration::minutes(i64::from(self.travel_minutes()))
    }
}

impl FromStr for Venue {
    type Err = RozpisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Venue::from_code(s)
    }
}

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_code_resolves_to_its_venue() {
        for venue in Venue::ALL {
            assert_eq!(Venue::from_code(venue.code()).unwrap(), venue);
        }
    }

    #[test]
    fn codes_and_variants_are_unique() {
        let codes: HashSet<_> = Venue::ALL.iter().map(|v| v.code()).collect();
        let variants: HashSet<_> = Venue::ALL.iter().collect();
        assert_eq!(codes.len(), Venue::ALL.len());
        assert_eq!(variants.len(), Venue::ALL.len());
    }

    #[test]
    fn every_venue_has_label_and_travel_time() {
        for venue in Venue::ALL {
            assert!(!venue.label().is_empty(), "{:?} has no label", venue);
            assert!(venue.travel_minutes() > 0, "{:?} has no travel time", venue);
        }
    }

    #[test]
    fn lookup_known_codes() {
        let beroun = Venue::from_code("BE").unwrap();
        assert_eq!(beroun.label(), "Beroun, Zimní stadion");
        assert_eq!(beroun.travel_minutes(), 15);

        let caslav: Venue = "ČA".parse().unwrap();
        assert_eq!(caslav, Venue::Caslav);
        assert_eq!(caslav.travel_duration(), Duration::minutes(90));

        // Kladno's two halls share the travel estimate
        assert_eq!(
            Venue::Kladno.travel_minutes(),
            Venue::KladnoMalaHala.travel_minutes()
        );
    }

    #[test]
    fn lookup_trims_whitespace() {
        assert_eq!(Venue::from_code(" KL ").unwrap(), Venue::Kladno);
    }

    #[test]
    fn unknown_code_is_an_error() {
        match Venue::from_code("XX") {
            Err(RozpisError::UnknownVenue(code)) => assert_eq!(code, "XX"),
            other => panic!("Expected UnknownVenue, got {:?}", other),
        }
    }

    #[test]
    fn codes_are_case_sensitive() {
        assert!(Venue::from_code("be").is_err());
    }
}
