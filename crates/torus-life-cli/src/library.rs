//! Named demo patterns and scenario presets.

use std::str::FromStr;

use anyhow::{anyhow, bail, Context, Result};
use torus_life_core::Modifiers;

/// A named text-art pattern.
#[derive(Debug, Clone, Copy)]
pub struct Pattern {
    pub name: &'static str,
    pub category: &'static str,
    pub text: &'static str,
}

pub const PATTERNS: &[Pattern] = &[
    // still lifes
    Pattern {
        name: "block",
        category: "still life",
        text: "
##
##
",
    },
    Pattern {
        name: "beehive",
        category: "still life",
        text: "
 ##
#  #
 ##
",
    },
    Pattern {
        name: "loaf",
        category: "still life",
        text: "
 ##
#  #
 # #
  #
",
    },
    Pattern {
        name: "boat",
        category: "still life",
        text: "
##
# #
 #
",
    },
    Pattern {
        name: "tub",
        category: "still life",
        text: "
 #
# #
 #
",
    },
    // oscillators
    Pattern {
        name: "blinker",
        category: "oscillator",
        text: "###",
    },
    Pattern {
        name: "toad",
        category: "oscillator",
        text: "
 ###
###
",
    },
    Pattern {
        name: "beacon",
        category: "oscillator",
        text: "
##
##
  ##
  ##
",
    },
    Pattern {
        name: "pulsar",
        category: "oscillator",
        text: "
  ###   ###

#    # #    #
#    # #    #
#    # #    #
  ###   ###

  ###   ###
#    # #    #
#    # #    #
#    # #    #

  ###   ###
",
    },
    Pattern {
        name: "pentadecathlon",
        category: "oscillator",
        text: "
 #
 #
# #
 #
 #
 #
 #
# #
 #
 #
",
    },
    // spaceships
    Pattern {
        name: "glider",
        category: "spaceship",
        text: "
# #
 ##
 #
",
    },
    Pattern {
        name: "lwss",
        category: "spaceship",
        text: "
  ##
## ##
####
 ##
",
    },
    Pattern {
        name: "mwss",
        category: "spaceship",
        text: "
   ##
### ##
#####
 ###
",
    },
    Pattern {
        name: "hwss",
        category: "spaceship",
        text: "
    ##
#### ##
######
 ####
",
    },
    // methuselahs
    Pattern {
        name: "r-pentomino",
        category: "methuselah",
        text: "
 ##
##
 #
",
    },
    Pattern {
        name: "diehard",
        category: "methuselah",
        text: "
      #
##
 #   ###
",
    },
    Pattern {
        name: "acorn",
        category: "methuselah",
        text: "
 #
   #
##  ###
",
    },
    // other
    Pattern {
        name: "block-builder",
        category: "other",
        text: "
## ##
#   #

#   #
## ##
",
    },
    Pattern {
        name: "gosper-glider-gun",
        category: "gun",
        text: "
                        #
                      # #
            ##      ##            ##
           #   #    ##            ##
##        #     #   ##
##        #   # ##    # #
          #     #       #
           #   #
            ##
",
    },
    Pattern {
        name: "simkin-glider-gun",
        category: "gun",
        text: "
##     ##
##     ##

    ##
    ##




                      ## ##
                     #     #
                     #      #  ##
                     ###   #   ##
                          #



                    ##
                    #
                     ###
                       #
",
    },
    Pattern {
        name: "growth-a",
        category: "growth",
        text: "
      #
    # ##
    # #
    #
  #
# #
",
    },
    Pattern {
        name: "growth-b",
        category: "growth",
        text: "
### #
#
   ##
 ## #
# # #
",
    },
    Pattern {
        name: "growth-c",
        category: "growth",
        text: "######## #####   ###      ####### #####",
    },
    Pattern {
        name: "hazard",
        category: "other",
        text: "
  ####
 #
 # ##
 # ##
 #
",
    },
];

/// Look up a pattern by name (case-insensitive, `_` and `-` interchangeable).
pub fn find_pattern(name: &str) -> Option<&'static Pattern> {
    let wanted = name.trim().to_ascii_lowercase().replace('_', "-");
    PATTERNS.iter().find(|p| p.name == wanted)
}

/// One pattern to place: `NAME@X,Y` with an optional `:MODIFIERS` suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementRequest {
    pub pattern: String,
    pub x: i64,
    pub y: i64,
    pub modifiers: Modifiers,
}

impl PlacementRequest {
    /// The pattern text this request refers to.
    pub fn resolve(&self) -> Result<&'static Pattern> {
        find_pattern(&self.pattern).ok_or_else(|| {
            anyhow!(
                "unknown pattern '{}' (run `torus-life list` to see available patterns)",
                self.pattern
            )
        })
    }
}

impl FromStr for PlacementRequest {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (pattern, rest) = s
            .split_once('@')
            .with_context(|| format!("placement '{s}' must look like NAME@X,Y[:MODS]"))?;
        let (coords, mods) = rest.split_once(':').unwrap_or((rest, ""));
        let (x, y) = coords
            .split_once(',')
            .with_context(|| format!("placement '{s}' is missing ',' between X and Y"))?;

        let x = x
            .trim()
            .parse::<i64>()
            .with_context(|| format!("invalid X coordinate in placement '{s}'"))?;
        let y = y
            .trim()
            .parse::<i64>()
            .with_context(|| format!("invalid Y coordinate in placement '{s}'"))?;

        if pattern.trim().is_empty() {
            bail!("placement '{s}' has no pattern name");
        }

        Ok(Self {
            pattern: pattern.trim().to_string(),
            x,
            y,
            modifiers: Modifiers::parse(mods),
        })
    }
}

/// A preset arrangement of patterns.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub name: &'static str,
    pub description: &'static str,
    /// `(pattern, x, y, modifiers)`
    pub placements: &'static [(&'static str, i64, i64, &'static str)],
}

pub const SCENARIOS: &[Scenario] = &[
    Scenario {
        name: "still-lifes",
        description: "Still lifes",
        placements: &[
            ("block", 4, 4, ""),
            ("beehive", 4, 10, ""),
            ("loaf", 4, 16, ""),
            ("boat", 4, 22, ""),
            ("tub", 4, 28, ""),
        ],
    },
    Scenario {
        name: "oscillators",
        description: "Oscillators",
        placements: &[
            ("blinker", 14, 4, ""),
            ("toad", 14, 10, ""),
            ("beacon", 14, 16, ""),
            ("pentadecathlon", 14, 28, ""),
            ("pulsar", 34, 4, ""),
        ],
    },
    Scenario {
        name: "spaceship-race",
        description: "Spaceship race",
        placements: &[
            ("lwss", 4, 4, ""),
            ("mwss", 4, 14, ""),
            ("hwss", 4, 24, ""),
            ("glider", 4, 34, ""),
            ("glider", 54, 34, ""),
        ],
    },
    Scenario {
        name: "r-pentomino",
        description: "R-pentomino",
        placements: &[("r-pentomino", 30, 30, "")],
    },
    Scenario {
        name: "diehard",
        description: "Diehard",
        placements: &[("diehard", 30, 30, "")],
    },
    Scenario {
        name: "acorn",
        description: "Acorn",
        placements: &[("acorn", 30, 30, "")],
    },
    Scenario {
        name: "glider-vs-block",
        description: "Glider crashes into block",
        placements: &[("glider", 4, 4, ""), ("block", 20, 24, "")],
    },
    Scenario {
        name: "lwss-vs-pentadecathlon",
        description: "Lightweight spaceship crashes into pentadecathlon",
        placements: &[("pentadecathlon", 40, 20, ""), ("lwss", 4, 26, "")],
    },
    Scenario {
        name: "hwss-vs-pentadecathlon",
        description: "Heavyweight spaceship crashes into pentadecathlon",
        placements: &[("pentadecathlon", 40, 20, ""), ("hwss", 4, 26, "")],
    },
    Scenario {
        name: "variations",
        description: "Glider variations: R=rotate, H=flip horizontally, V=flip vertically",
        placements: &[
            ("glider", 20, 20, "RV"),
            ("glider", 26, 20, "H"),
            ("glider", 20, 26, "V"),
            ("glider", 26, 26, ""),
        ],
    },
    Scenario {
        name: "hazard",
        description: "Hazard signs around a pentadecathlon",
        placements: &[
            ("hazard", 10, 10, ""),
            ("hazard", 23, 10, "V"),
            ("pentadecathlon", 18, 18, ""),
            ("hazard", 10, 31, "H"),
            ("hazard", 23, 31, "HV"),
        ],
    },
];

/// Scenario used when nothing else is requested.
pub const DEFAULT_SCENARIO: &str = "hazard";

pub fn find_scenario(name: &str) -> Option<&'static Scenario> {
    let wanted = name.trim().to_ascii_lowercase().replace('_', "-");
    SCENARIOS.iter().find(|s| s.name == wanted)
}

impl Scenario {
    /// Placement requests for every pattern of the scenario.
    pub fn requests(&self) -> Vec<PlacementRequest> {
        self.placements
            .iter()
            .map(|&(pattern, x, y, mods)| PlacementRequest {
                pattern: pattern.to_string(),
                x,
                y,
                modifiers: Modifiers::parse(mods),
            })
            .collect()
    }
}
